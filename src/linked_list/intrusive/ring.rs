use core::ptr::NonNull;

/// A link in a circular doubly linked list.
///
/// This struct should be embedded in the struct that you want to store in the
/// list. The same type also serves as the list anchor (sentinel): an empty
/// list is an initialized anchor whose `next` and `prev` point at itself.
///
/// An unlinked link holds `None` in both fields. [`RingLink::remove`] returns
/// a node to that state, so a stale node is recognizable instead of silently
/// aliasing a live ring; callers wanting to reuse a removed node must
/// re-initialize it (or use [`RingLink::remove_and_reinit`]).
#[derive(Debug)]
pub struct RingLink {
    next: Option<NonNull<RingLink>>,
    prev: Option<NonNull<RingLink>>,
}

impl RingLink {
    /// Creates a new, unlinked link.
    pub const fn new() -> Self {
        Self {
            next: None,
            prev: None,
        }
    }

    /// Initializes the link as a one-element ring.
    ///
    /// This is how an anchor becomes an empty list, and how a removed node is
    /// made reusable. Must not be called on a node that is currently a member
    /// of a larger ring; that would corrupt the ring it is leaving behind.
    pub fn init(&mut self) {
        let this = NonNull::from(&mut *self);
        self.next = Some(this);
        self.prev = Some(this);
    }

    /// Returns `true` if the link is part of a ring.
    ///
    /// A freshly initialized one-element ring counts as linked; a link that
    /// was never initialized, or was removed with [`RingLink::remove`], does
    /// not.
    pub fn is_linked(&self) -> bool {
        self.next.is_some()
    }

    /// Get the next link in the ring.
    pub fn next(&self) -> Option<NonNull<RingLink>> {
        self.next
    }

    /// Get the previous link in the ring.
    pub fn prev(&self) -> Option<NonNull<RingLink>> {
        self.prev
    }

    /// Returns `true` if this anchor's ring holds no elements besides the
    /// anchor itself.
    pub fn is_empty(&self) -> bool {
        self.next == Some(NonNull::from(self))
    }

    /// Like [`RingLink::is_empty`], but additionally checks that `prev`
    /// agrees with `next`.
    ///
    /// This is a best-effort hint for callers that observe a ring another
    /// context is mutating under its own exclusion. A single racing read can
    /// still be observed mid-rewire; this is not a synchronization primitive
    /// and does not replace external locking.
    pub fn is_empty_careful(&self) -> bool {
        let next = self.next;
        next == Some(NonNull::from(self)) && next == self.prev
    }

    /// Links `node` between two known consecutive ring members.
    unsafe fn link_between(
        node: NonNull<RingLink>,
        prev: NonNull<RingLink>,
        next: NonNull<RingLink>,
    ) {
        unsafe {
            (*next.as_ptr()).prev = Some(node);
            (*node.as_ptr()).next = Some(next);
            (*node.as_ptr()).prev = Some(prev);
            (*prev.as_ptr()).next = Some(node);
        }
    }

    /// Bridges a node's neighbors over it, leaving the node's own fields
    /// untouched.
    unsafe fn detach(node: NonNull<RingLink>) {
        unsafe {
            let next = (*node.as_ptr()).next.expect("detaching an unlinked node");
            let prev = (*node.as_ptr()).prev.expect("detaching an unlinked node");
            debug_assert_eq!(
                (*next.as_ptr()).prev,
                Some(node),
                "ring corrupted: next.prev does not point back at node"
            );
            debug_assert_eq!(
                (*prev.as_ptr()).next,
                Some(node),
                "ring corrupted: prev.next does not point back at node"
            );
            (*next.as_ptr()).prev = Some(prev);
            (*prev.as_ptr()).next = Some(next);
        }
    }

    /// Inserts `node` immediately after `after`.
    ///
    /// When `after` is the anchor, this pushes to the front of the list.
    ///
    /// # Safety
    ///
    /// `after` must be a member of a valid ring and `node` must not currently
    /// be a member of any ring (a one-element ring of itself is fine; its
    /// old links are overwritten).
    pub unsafe fn insert_after(node: NonNull<RingLink>, after: NonNull<RingLink>) {
        unsafe {
            let next = (*after.as_ptr())
                .next
                .expect("inserting after an unlinked node");
            Self::link_between(node, after, next);
        }
    }

    /// Inserts `node` immediately before `before`.
    ///
    /// When `before` is the anchor, this pushes to the back of the list.
    ///
    /// # Safety
    ///
    /// Same contract as [`RingLink::insert_after`].
    pub unsafe fn insert_before(node: NonNull<RingLink>, before: NonNull<RingLink>) {
        unsafe {
            let prev = (*before.as_ptr())
                .prev
                .expect("inserting before an unlinked node");
            Self::link_between(node, prev, before);
        }
    }

    /// Unlinks `node` from whatever ring it is in and leaves it in the
    /// unlinked state.
    ///
    /// The node must be re-initialized before it can be linked again; any
    /// list operation on it in the meantime trips an assertion in debug
    /// builds.
    ///
    /// # Safety
    ///
    /// `node` must be a member of a valid ring, and must not be the anchor
    /// another context still treats as a list head.
    pub unsafe fn remove(node: NonNull<RingLink>) {
        unsafe {
            Self::detach(node);
            (*node.as_ptr()).next = None;
            (*node.as_ptr()).prev = None;
        }
    }

    /// Unlinks `node` and immediately re-initializes it as a one-element
    /// ring, ready for reuse.
    ///
    /// # Safety
    ///
    /// Same contract as [`RingLink::remove`].
    pub unsafe fn remove_and_reinit(node: NonNull<RingLink>) {
        unsafe {
            Self::detach(node);
            (*node.as_ptr()).next = Some(node);
            (*node.as_ptr()).prev = Some(node);
        }
    }

    /// Removes `node` from its current ring and reinserts it at the front of
    /// `anchor`'s ring.
    ///
    /// # Safety
    ///
    /// `node` must be a member of a valid ring and `anchor` must be an
    /// initialized anchor. The two may belong to the same ring.
    pub unsafe fn move_to_front(node: NonNull<RingLink>, anchor: NonNull<RingLink>) {
        unsafe {
            Self::detach(node);
            Self::insert_after(node, anchor);
        }
    }

    /// Removes `node` from its current ring and reinserts it at the back of
    /// `anchor`'s ring.
    ///
    /// # Safety
    ///
    /// Same contract as [`RingLink::move_to_front`].
    pub unsafe fn move_to_back(node: NonNull<RingLink>, anchor: NonNull<RingLink>) {
        unsafe {
            Self::detach(node);
            Self::insert_before(node, anchor);
        }
    }

    /// Splices the source block between two known consecutive members of the
    /// destination ring.
    unsafe fn splice_block(source: NonNull<RingLink>, dest: NonNull<RingLink>) {
        unsafe {
            let first = (*source.as_ptr())
                .next
                .expect("splicing an uninitialized source anchor");
            let last = (*source.as_ptr())
                .prev
                .expect("splicing an uninitialized source anchor");
            let at = (*dest.as_ptr())
                .prev
                .expect("splicing into an uninitialized destination anchor");

            (*first.as_ptr()).prev = Some(at);
            (*at.as_ptr()).next = Some(first);
            (*last.as_ptr()).next = Some(dest);
            (*dest.as_ptr()).prev = Some(last);
        }
    }

    /// Moves all elements of `source`'s ring, as one contiguous block, to the
    /// back of `dest`'s ring. O(1) regardless of length.
    ///
    /// No-op when `source` is empty. Afterwards `source` is left unlinked;
    /// re-initialize it before reuse, or use
    /// [`RingLink::splice_and_reinit`].
    ///
    /// # Safety
    ///
    /// `source` and `dest` must be initialized anchors of distinct rings.
    pub unsafe fn splice(source: NonNull<RingLink>, dest: NonNull<RingLink>) {
        unsafe {
            if (*source.as_ptr()).is_empty() {
                return;
            }
            Self::splice_block(source, dest);
            (*source.as_ptr()).next = None;
            (*source.as_ptr()).prev = None;
        }
    }

    /// Like [`RingLink::splice`], but leaves `source` as a valid empty ring.
    ///
    /// # Safety
    ///
    /// Same contract as [`RingLink::splice`].
    pub unsafe fn splice_and_reinit(source: NonNull<RingLink>, dest: NonNull<RingLink>) {
        unsafe {
            if (*source.as_ptr()).is_empty() {
                return;
            }
            Self::splice_block(source, dest);
            (*source.as_ptr()).next = Some(source);
            (*source.as_ptr()).prev = Some(source);
        }
    }
}

impl Default for RingLink {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl Send for RingLink {}
unsafe impl Sync for RingLink {}
