use std::sync::Arc;
use std::thread;

use listnode::LinkedList;
use parking_lot::Mutex;

/// The list has no internal locking; sharing it means wrapping the whole thing in a lock.
#[test]
fn serialized_mutation_from_many_threads() {
    let list = Arc::new(Mutex::new(LinkedList::<usize>::new()));
    let mut threads = Vec::new();
    for worker in 0..8 {
        let list = list.clone();
        threads.push(thread::spawn(move || {
            for i in 0..100 {
                let value = worker * 1000 + i;
                list.lock().append(value);
                if i % 2 == 0 {
                    assert_eq!(list.lock().delete(&value), Ok(value));
                }
            }
        }));
    }
    for handle in threads {
        handle.join().expect("worker thread panicked");
    }

    let list = list.lock();
    assert_eq!(list.get_size(), 8 * 50);
    for worker in 0..8 {
        let mine: Vec<usize> = list.iter().cloned().filter(|v| v / 1000 == worker).collect();
        let expected: Vec<usize> = (1..100).step_by(2).map(|i| worker * 1000 + i).collect();
        assert_eq!(mine, expected);
    }
}
