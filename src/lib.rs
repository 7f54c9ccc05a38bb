//! # dhlist
//!
//! Intrusive linked-list primitives: a sentinel-based circular doubly linked
//! list and a singly linked hash bucket chain, both meant to be embedded in
//! owner structs so that list membership costs no allocation and insertion
//! and removal are O(1).
//!
//! The crate never owns node memory. Callers allocate owner records, embed a
//! link field, initialize it before first use, and keep the record alive for
//! as long as it is linked. All operations only rewire pointers.
//!
//! A small string hash ([`hash::bkdr`]) for mapping keys to bucket indices is
//! included; the bucket table itself is the caller's structure.
#![no_std]

pub mod hash;
pub mod linked_list;

pub use dhlist_derive::Anchored;
