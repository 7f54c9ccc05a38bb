extern crate std;

use std::vec;
use std::vec::Vec;

use core::ptr::NonNull;

use crate::hash::bkdr;
use crate::linked_list::intrusive::{
    bucket::{BucketHead, BucketLink},
    iter::{BucketCursor, BucketOwners},
    node::BucketNode,
};

fn values(head: &BucketHead) -> Vec<i32> {
    let owners = unsafe { BucketOwners::<BucketNode<i32>>::new(head) };
    owners.map(|owner| unsafe { *owner.as_ref().data() }).collect()
}

fn node(value: i32) -> BucketNode<i32> {
    let mut node = BucketNode::<i32>::default();
    *node.data_mut() = value;
    node
}

#[test]
fn test_bucket_add_front_and_remove() {
    let mut bk = BucketHead::new();
    assert!(bk.is_empty());

    let mut x = node(1);
    let mut y = node(2);
    assert!(x.link().is_unhashed());

    let head = NonNull::from(&mut bk);
    unsafe {
        BucketLink::add_front(NonNull::from(x.link_mut()), head);
        BucketLink::add_front(NonNull::from(y.link_mut()), head);
    }
    assert!(!x.link().is_unhashed());
    assert_eq!(values(&bk), vec![2, 1]);

    // Removing the interior element retargets the first element's slot.
    unsafe {
        BucketLink::remove(NonNull::from(x.link_mut()));
    }
    assert_eq!(values(&bk), vec![2]);
    assert_eq!(bk.first(), Some(NonNull::from(y.link_mut())));
    assert_eq!(y.link().pprev(), Some(bk.first_slot()));

    unsafe {
        BucketLink::remove(NonNull::from(y.link_mut()));
    }
    assert!(bk.is_empty());
    assert!(bk.first().is_none());
}

#[test]
fn test_bucket_remove_poisons_remove_and_reinit_unhashes() {
    let mut bk = BucketHead::new();
    let mut x = node(1);
    let mut y = node(2);

    let head = NonNull::from(&mut bk);
    unsafe {
        BucketLink::add_front(NonNull::from(x.link_mut()), head);
        BucketLink::add_front(NonNull::from(y.link_mut()), head);

        BucketLink::remove(NonNull::from(x.link_mut()));
    }
    // A plain remove leaves the node poisoned, not unhashed.
    assert!(!x.link().is_unhashed());

    unsafe {
        BucketLink::remove_and_reinit(NonNull::from(y.link_mut()));
    }
    assert!(y.link().is_unhashed());
    assert!(bk.is_empty());

    // After reinit the node can go straight back into a chain.
    unsafe {
        BucketLink::add_front(NonNull::from(y.link_mut()), head);
    }
    assert!(!y.link().is_unhashed());
    assert_eq!(values(&bk), vec![2]);
}

#[test]
fn test_bucket_remove_and_reinit_unhashed_is_noop() {
    let mut x = node(1);
    unsafe {
        BucketLink::remove_and_reinit(NonNull::from(x.link_mut()));
    }
    assert!(x.link().is_unhashed());
}

#[test]
fn test_bucket_positional_insert() {
    let mut bk = BucketHead::new();
    let mut x = node(1);
    let mut y = node(2);
    let mut z = node(3);

    let head = NonNull::from(&mut bk);
    unsafe {
        BucketLink::add_front(NonNull::from(x.link_mut()), head);
        BucketLink::insert_after(NonNull::from(y.link_mut()), NonNull::from(x.link_mut()));
    }
    assert_eq!(values(&bk), vec![1, 2]);

    unsafe {
        BucketLink::insert_before(NonNull::from(z.link_mut()), NonNull::from(y.link_mut()));
    }
    assert_eq!(values(&bk), vec![1, 3, 2]);

    // Interior removal, then removal of the first element.
    unsafe {
        BucketLink::remove(NonNull::from(z.link_mut()));
    }
    assert_eq!(values(&bk), vec![1, 2]);
    unsafe {
        BucketLink::remove(NonNull::from(x.link_mut()));
    }
    assert_eq!(values(&bk), vec![2]);
    assert_eq!(bk.first(), Some(NonNull::from(y.link_mut())));
}

#[test]
fn test_bucket_insert_before_first_updates_head() {
    let mut bk = BucketHead::new();
    let mut x = node(1);
    let mut y = node(2);

    let head = NonNull::from(&mut bk);
    unsafe {
        BucketLink::add_front(NonNull::from(x.link_mut()), head);
        BucketLink::insert_before(NonNull::from(y.link_mut()), NonNull::from(x.link_mut()));
    }
    assert_eq!(values(&bk), vec![2, 1]);
    assert_eq!(bk.first(), Some(NonNull::from(y.link_mut())));
}

#[test]
fn test_bucket_cursor_remove_all() {
    let mut bk = BucketHead::new();
    let mut nodes: Vec<BucketNode<i32>> = (0..4).map(node).collect();

    let head = NonNull::from(&mut bk);
    unsafe {
        for n in nodes.iter_mut() {
            BucketLink::add_front(NonNull::from(n.link_mut()), head);
        }
    }

    let mut visited = 0;
    unsafe {
        for link in BucketCursor::new(head) {
            BucketLink::remove_and_reinit(link);
            visited += 1;
        }
    }
    assert_eq!(visited, 4);
    assert!(bk.is_empty());
    assert!(nodes.iter().all(|n| n.link().is_unhashed()));
}

#[test]
fn test_bucket_table_with_bkdr_index() {
    use std::string::String;

    const MASK: u32 = 7;

    let keys = ["alpha", "beta", "gamma", "delta", "epsilon", ""];
    let mut buckets: Vec<BucketHead> = (0..=MASK).map(|_| BucketHead::new()).collect();
    let mut nodes: Vec<BucketNode<String>> = keys
        .iter()
        .map(|k| BucketNode::new(BucketLink::new(), String::from(*k)))
        .collect();

    unsafe {
        for n in nodes.iter_mut() {
            let idx = bkdr::bucket(n.data(), MASK) as usize;
            BucketLink::add_front(NonNull::from(n.link_mut()), NonNull::from(&mut buckets[idx]));
        }
    }

    // Every key is reachable through exactly the bucket its hash selects.
    for key in keys {
        let idx = bkdr::bucket(key, MASK) as usize;
        let mut owners = unsafe { BucketOwners::<BucketNode<String>>::new(&buckets[idx]) };
        let found = owners.any(|owner| unsafe { owner.as_ref().data().as_str() == key });
        assert!(found, "key {key:?} not found in bucket {idx}");
    }
}
