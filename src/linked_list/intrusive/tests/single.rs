use crate::linked_list::intrusive::{
    single::QueueNode,
    traits::{Link, Node, NodeWithData},
};

use super::{alloc_nodes, free_all};

#[test]
fn test_single_node_append_and_detach() {
    let nodes = alloc_nodes(&[c"one", c"two", c"three"]);
    let [one, two, three] = [nodes[0], nodes[1], nodes[2]];

    unsafe {
        QueueNode::append_to(two, &mut *one.as_ptr());
        assert_eq!(one.as_ref().next(), Some(two));
        assert_eq!(two.as_ref().next(), None);

        // Appending after `one` again puts `three` between `one` and `two`.
        QueueNode::append_to(three, &mut *one.as_ptr());
        assert_eq!(one.as_ref().next(), Some(three));
        assert_eq!(three.as_ref().next(), Some(two));

        (*three.as_ptr()).detach(&mut *one.as_ptr());
        assert_eq!(one.as_ref().next(), Some(two));
        assert_eq!(three.as_ref().next(), None);

        free_all(nodes);
    }
}

#[test]
fn test_single_node_data() {
    let mut node = QueueNode::new(c"value".into());
    assert_eq!(node.value(), c"value");
    assert_eq!(node.data().as_c_str(), c"value");
    assert_eq!(node.next(), None);

    *node.data_mut() = c"changed".into();
    assert_eq!(node.value(), c"changed");
}

#[test]
fn test_try_alloc_and_release() {
    let node = QueueNode::try_alloc(b"heap").unwrap();
    assert_eq!(unsafe { node.as_ref() }.value(), c"heap");
    assert_eq!(unsafe { node.as_ref() }.next(), None);

    let value = unsafe { QueueNode::release(node) };
    assert_eq!(value.as_c_str(), c"heap");
}

#[test]
fn test_try_alloc_empty_value() {
    let node = QueueNode::try_alloc(b"").unwrap();
    let value = unsafe { QueueNode::release(node) };
    assert_eq!(value.as_bytes_with_nul(), b"\0");
}
