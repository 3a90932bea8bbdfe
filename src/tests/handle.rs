use core::ffi::CStr;

use crate::{error::QueueError, handle, queue::Queue};

#[test]
fn test_missing_queue() {
    let mut buf = [0xAAu8; 4];
    assert_eq!(handle::size(None), 0);
    assert_eq!(handle::insert_head(None, c"a"), Err(QueueError::InvalidArgument));
    assert_eq!(handle::insert_tail(None, c"a"), Err(QueueError::InvalidArgument));
    assert_eq!(
        handle::remove_head(None, Some(&mut buf[..])),
        Err(QueueError::InvalidArgument)
    );
    assert_eq!(buf, [0xAA; 4]);

    handle::reverse(None);
    handle::sort(None);
    handle::destroy(None);
}

#[test]
fn test_handle_lifecycle() {
    let mut queue = handle::create().unwrap();
    assert_eq!(handle::size(Some(&*queue)), 0);

    handle::insert_tail(Some(&mut *queue), c"banana").unwrap();
    handle::insert_tail(Some(&mut *queue), c"apple").unwrap();
    handle::insert_head(Some(&mut *queue), c"cherry").unwrap();
    assert_eq!(handle::size(Some(&*queue)), 3);

    handle::sort(Some(&mut *queue));
    handle::reverse(Some(&mut *queue));

    let mut buf = [0u8; 8];
    handle::remove_head(Some(&mut *queue), Some(&mut buf[..])).unwrap();
    assert_eq!(CStr::from_bytes_until_nul(&buf).unwrap(), c"cherry");
    assert_eq!(handle::size(Some(&*queue)), 2);

    handle::destroy(Some(queue));
}

#[test]
fn test_remove_head_on_empty_handle() {
    let mut queue = handle::create().unwrap();
    assert_eq!(handle::remove_head(Some(&mut *queue), None), Err(QueueError::Empty));
    assert_eq!(handle::size(Some(&*queue)), 0);
    handle::destroy(Some(queue));
}

#[test]
fn test_destroy_empty_and_filled() {
    handle::destroy(Some(handle::create().unwrap()));

    let mut queue = handle::create().unwrap();
    for _ in 0..100 {
        handle::insert_head(Some(&mut *queue), c"value").unwrap();
    }
    handle::destroy(Some(queue));

    let queue: Option<&Queue> = None;
    assert_eq!(handle::size(queue), 0);
}
