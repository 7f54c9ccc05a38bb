//! Intrusive linked-list implementations.
//!
//! In an intrusive linked list, the link fields are stored directly in the
//! data structure that is being linked. This means that the data structure
//! must embed a link field such as [`intrusive::ring::RingLink`]. This is in
//! contrast to a non-intrusive linked list, where the nodes are allocated
//! separately from the data structure.
//!
//! # Examples
//!
//! ```
//! use dhlist::linked_list::intrusive::{
//!     iter::RingOwners,
//!     node::RingNode,
//!     ring::RingLink,
//! };
//! use core::ptr::NonNull;
//!
//! let mut anchor = RingLink::new();
//! anchor.init();
//!
//! let mut node1 = RingNode::<i32>::default();
//! let mut node2 = RingNode::<i32>::default();
//! let mut node3 = RingNode::<i32>::default();
//!
//! *node1.data_mut() = 1;
//! *node2.data_mut() = 2;
//! *node3.data_mut() = 3;
//!
//! unsafe {
//!     let head = NonNull::from(&mut anchor);
//!     RingLink::insert_before(NonNull::from(node1.link_mut()), head);
//!     RingLink::insert_before(NonNull::from(node2.link_mut()), head);
//!     RingLink::insert_before(NonNull::from(node3.link_mut()), head);
//!
//!     let mut values = vec![];
//!     for owner in RingOwners::<RingNode<i32>>::new(&anchor) {
//!         values.push(*owner.as_ref().data());
//!     }
//!     assert_eq!(values, vec![1, 2, 3]);
//! }
//! ```
pub mod intrusive;
