use core::ptr::NonNull;

/// A slot that points at the first or next node of a bucket chain.
///
/// Both [`BucketHead::first`] and [`BucketLink::next`] are slots of this
/// exact type, which is what lets a node's back pointer address either one
/// uniformly.
pub type BucketSlot = Option<NonNull<BucketLink>>;

/// The head of a hash bucket chain: a single reference to the first node, or
/// `None` when the bucket is empty.
#[derive(Debug)]
pub struct BucketHead {
    first: BucketSlot,
}

impl BucketHead {
    /// Creates a new, empty bucket head.
    pub const fn new() -> Self {
        Self { first: None }
    }

    /// Resets the bucket to empty.
    ///
    /// Does not unlink any nodes still chained from it; those keep a stale
    /// back pointer and must not be removed through it.
    pub fn init(&mut self) {
        self.first = None;
    }

    /// Returns `true` if the bucket holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Get the first node of the chain.
    pub fn first(&self) -> Option<NonNull<BucketLink>> {
        self.first
    }

    #[cfg(test)]
    pub(crate) fn first_slot(&mut self) -> NonNull<BucketSlot> {
        NonNull::from(&mut self.first)
    }
}

impl Default for BucketHead {
    fn default() -> Self {
        Self::new()
    }
}

/// A link in a singly linked hash bucket chain.
///
/// This struct should be embedded in the struct that you want to chain from a
/// bucket. `pprev` addresses whatever slot currently points at this node —
/// the bucket head's `first` field or the previous node's `next` field — so
/// removal needs neither the head nor a first-versus-interior special case.
///
/// `pprev == None` means the node is *unhashed*: not a member of any chain.
/// A plain [`BucketLink::remove`] instead leaves a recognizable poison value
/// in `pprev`, so an accidentally reused node trips an assertion in debug
/// builds rather than passing for unhashed.
#[derive(Debug)]
pub struct BucketLink {
    next: BucketSlot,
    pprev: Option<NonNull<BucketSlot>>,
}

impl BucketLink {
    /// Creates a new, unhashed link.
    pub const fn new() -> Self {
        Self {
            next: None,
            pprev: None,
        }
    }

    /// Resets the link to the unhashed state.
    ///
    /// Must not be called while the node is still chained; that would leave
    /// the chain pointing at a node that believes it is unhashed.
    pub fn init(&mut self) {
        self.next = None;
        self.pprev = None;
    }

    /// Returns `true` if the node is not a member of any chain.
    pub fn is_unhashed(&self) -> bool {
        self.pprev.is_none()
    }

    /// Get the next node in the chain.
    pub fn next(&self) -> Option<NonNull<BucketLink>> {
        self.next
    }

    #[cfg(test)]
    pub(crate) fn pprev(&self) -> Option<NonNull<BucketSlot>> {
        self.pprev
    }

    /// The poison value stored in `pprev` by [`BucketLink::remove`]. Never
    /// dereferenced; only compared against by assertions.
    fn poison() -> NonNull<BucketSlot> {
        NonNull::dangling()
    }

    fn is_poisoned(&self) -> bool {
        self.pprev == Some(Self::poison())
    }

    /// Makes `node` the new first element of `head`'s chain.
    ///
    /// # Safety
    ///
    /// `head` must be an initialized bucket head, and `node` must not
    /// currently be a member of any chain.
    pub unsafe fn add_front(node: NonNull<BucketLink>, head: NonNull<BucketHead>) {
        unsafe {
            let n = node.as_ptr();
            debug_assert!(!(*n).is_poisoned(), "inserting a poisoned node");
            let first = (*head.as_ptr()).first;
            (*n).next = first;
            if let Some(first) = first {
                (*first.as_ptr()).pprev = Some(NonNull::new_unchecked(&raw mut (*n).next));
            }
            (*head.as_ptr()).first = Some(node);
            (*n).pprev = Some(NonNull::new_unchecked(&raw mut (*head.as_ptr()).first));
        }
    }

    /// Inserts `node` immediately before `before` in its chain.
    ///
    /// # Safety
    ///
    /// `before` must be a member of a valid chain, and `node` must not
    /// currently be a member of any chain.
    pub unsafe fn insert_before(node: NonNull<BucketLink>, before: NonNull<BucketLink>) {
        unsafe {
            let n = node.as_ptr();
            let b = before.as_ptr();
            debug_assert!(!(*n).is_poisoned(), "inserting a poisoned node");
            let slot = (*b).pprev.expect("insert target must be linked");
            (*n).pprev = Some(slot);
            (*n).next = Some(before);
            (*b).pprev = Some(NonNull::new_unchecked(&raw mut (*n).next));
            *slot.as_ptr() = Some(node);
        }
    }

    /// Inserts `node` immediately after `after` in its chain.
    ///
    /// # Safety
    ///
    /// `after` must be a member of a valid chain, and `node` must not
    /// currently be a member of any chain.
    pub unsafe fn insert_after(node: NonNull<BucketLink>, after: NonNull<BucketLink>) {
        unsafe {
            let n = node.as_ptr();
            let a = after.as_ptr();
            debug_assert!(!(*n).is_poisoned(), "inserting a poisoned node");
            debug_assert!(!(*a).is_unhashed(), "insert target must be linked");
            (*n).next = (*a).next;
            (*a).next = Some(node);
            (*n).pprev = Some(NonNull::new_unchecked(&raw mut (*a).next));
            if let Some(next) = (*n).next {
                (*next.as_ptr()).pprev = Some(NonNull::new_unchecked(&raw mut (*n).next));
            }
        }
    }

    /// Retargets the slot pointing at `node` to its successor and fixes the
    /// successor's back pointer.
    unsafe fn unlink(node: NonNull<BucketLink>) {
        unsafe {
            let n = node.as_ptr();
            debug_assert!(!(*n).is_poisoned(), "removing a poisoned node");
            let next = (*n).next;
            let pprev = (*n).pprev.expect("removing an unhashed node");
            *pprev.as_ptr() = next;
            if let Some(next) = next {
                (*next.as_ptr()).pprev = Some(pprev);
            }
        }
    }

    /// Unlinks `node` from its chain in O(1) and poisons it.
    ///
    /// Afterwards the node is neither linked nor unhashed; it must be
    /// re-initialized before reuse. Use [`BucketLink::remove_and_reinit`] to
    /// get a reusable node directly.
    ///
    /// # Safety
    ///
    /// `node` must be a member of a valid chain.
    pub unsafe fn remove(node: NonNull<BucketLink>) {
        unsafe {
            Self::unlink(node);
            let n = node.as_ptr();
            (*n).next = None;
            (*n).pprev = Some(Self::poison());
        }
    }

    /// Unlinks `node` and resets it to the unhashed state, ready for reuse.
    ///
    /// No-op when the node is already unhashed.
    ///
    /// # Safety
    ///
    /// `node` must be a member of a valid chain, or unhashed.
    pub unsafe fn remove_and_reinit(node: NonNull<BucketLink>) {
        unsafe {
            let n = node.as_ptr();
            if (*n).is_unhashed() {
                return;
            }
            Self::unlink(node);
            (*n).next = None;
            (*n).pprev = None;
        }
    }
}

impl Default for BucketLink {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl Send for BucketHead {}
unsafe impl Sync for BucketHead {}
unsafe impl Send for BucketLink {}
unsafe impl Sync for BucketLink {}
