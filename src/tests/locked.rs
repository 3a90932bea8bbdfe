extern crate std;

use alloc::sync::Arc;
use std::thread;

use crate::{error::QueueError, locked::LockedQueue, queue::Queue};

#[test]
fn test_locked_queue_operations() {
    let queue = LockedQueue::new();
    assert!(queue.is_empty());

    queue.insert_tail(c"b").unwrap();
    queue.insert_head(c"c").unwrap();
    queue.insert_tail(c"a").unwrap();
    assert_eq!(queue.len(), 3);

    queue.sort();
    assert_eq!(queue.pop_head().as_deref(), Some(c"a"));

    queue.reverse();
    let mut buf = [0u8; 2];
    queue.remove_head(Some(&mut buf[..])).unwrap();
    assert_eq!(&buf, b"c\0");

    let inner: Queue = queue.into_inner();
    assert_eq!(inner.peek_head(), Some(c"b"));
    assert_eq!(inner.len(), 1);
}

#[test]
fn test_locked_queue_empty_removal() {
    let queue = LockedQueue::from(Queue::new());
    assert_eq!(queue.remove_head(None), Err(QueueError::Empty));
    assert_eq!(queue.len(), 0);
}

#[test]
fn test_locked_queue_concurrent_inserts() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 500;

    let queue = Arc::new(LockedQueue::new());
    let handles: alloc::vec::Vec<_> = (0..THREADS)
        .map(|i| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    if i % 2 == 0 {
                        queue.insert_head(c"even").unwrap();
                    } else {
                        queue.insert_tail(c"odd").unwrap();
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(queue.len(), THREADS * PER_THREAD);

    let guard = queue.lock();
    assert_eq!(guard.iter().count(), THREADS * PER_THREAD);
    assert_eq!(guard.peek_head(), Some(c"even"));
    assert_eq!(guard.peek_tail(), Some(c"odd"));
}
