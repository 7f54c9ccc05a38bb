//! # Intrusive Linked List Primitives
//!
//! This module provides two independent intrusive primitives:
//!
//! - [`ring::RingLink`]: a sentinel-based circular doubly linked list. The
//!   same type serves as data link and as list anchor; an empty list is an
//!   anchor pointing at itself.
//! - [`bucket::BucketLink`] and [`bucket::BucketHead`]: a singly linked chain
//!   whose back pointer addresses the *slot* that points at the node, so
//!   removal is O(1) without knowing the chain's head. Intended as the
//!   per-bucket chain of an external hash table.
//!
//! ## Core Components
//!
//! - [`traits::Anchored`]: recovers the owning struct from an embedded link
//!   field; derivable via `#[derive(Anchored)]`.
//! - [`node::ListNode`]: a generic node that pairs a link with a data value,
//!   for callers that do not want to define their own owner struct.
//! - [`iter`]: lazy iterators over raw links and over recovered owners,
//!   including mutation-safe cursor variants.
//!
//! ## Safety
//!
//! This implementation uses `unsafe` code extensively to manage raw pointers.
//! The user of this module is responsible for upholding several invariants:
//!
//! - The lists never own node memory; every linked node must outlive its
//!   membership in the list.
//! - Every link must be initialized before first use, and a node must not be
//!   in two rings (or two chains) through the same link at the same time.
//! - When iterating, the list must not be modified, except through the
//!   cursor variants, which tolerate removal of the yielded node only.
//! - No internal synchronization is provided; concurrent access must be
//!   excluded by the caller.
//!
//! Operating on an unlinked or removed node is undefined behavior. Links
//! track an explicit unlinked state and removal leaves a recognizable
//! poison value, so debug builds catch these bugs with assertions rather
//! than corrupting the structure silently.

pub mod bucket;
pub mod iter;
pub mod node;
pub mod ring;
pub mod traits;

#[cfg(test)]
mod tests;
