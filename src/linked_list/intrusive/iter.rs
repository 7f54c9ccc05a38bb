use core::marker::PhantomData;
use core::ptr::NonNull;

use super::{
    bucket::{BucketHead, BucketLink},
    ring::RingLink,
    traits::Anchored,
};

/// An iterator over the links of a ring, excluding the anchor.
///
/// Walks `next` from the element after the anchor and stops when the walk
/// returns to the anchor. Iterating backwards (via [`DoubleEndedIterator`])
/// walks `prev` from the last element.
pub struct RingIter<'a> {
    anchor: NonNull<RingLink>,
    front: Option<NonNull<RingLink>>,
    back: Option<NonNull<RingLink>>,
    _marker: PhantomData<&'a RingLink>,
}

impl<'a> RingIter<'a> {
    /// Creates a new iterator over `anchor`'s ring.
    ///
    /// # Safety
    ///
    /// `anchor` must be an initialized anchor, and the ring must not be
    /// modified while the iterator is alive.
    pub unsafe fn new(anchor: &'a RingLink) -> Self {
        Self {
            anchor: NonNull::from(anchor),
            front: anchor.next(),
            back: anchor.prev(),
            _marker: PhantomData,
        }
    }

    fn exhaust(&mut self) {
        self.front = None;
        self.back = None;
    }
}

impl Iterator for RingIter<'_> {
    type Item = NonNull<RingLink>;

    fn next(&mut self) -> Option<Self::Item> {
        let front = self.front?;
        if front == self.anchor {
            self.exhaust();
            return None;
        }
        if Some(front) == self.back {
            self.exhaust();
        } else {
            self.front = unsafe { front.as_ref().next() };
        }
        Some(front)
    }
}

impl DoubleEndedIterator for RingIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let back = self.back?;
        if back == self.anchor {
            self.exhaust();
            return None;
        }
        if Some(back) == self.front {
            self.exhaust();
        } else {
            self.back = unsafe { back.as_ref().prev() };
        }
        Some(back)
    }
}

/// A mutation-safe forward iterator over the links of a ring.
///
/// The successor is captured before each link is yielded, so the consumer may
/// remove, re-initialize, or relink the yielded link during the step. Removal
/// of any *other* link is not tolerated.
pub struct RingCursor {
    anchor: NonNull<RingLink>,
    current: Option<NonNull<RingLink>>,
}

impl RingCursor {
    /// Creates a new cursor over `anchor`'s ring.
    ///
    /// # Safety
    ///
    /// `anchor` must be an initialized anchor and must stay valid for the
    /// cursor's lifetime. Between steps the only permitted mutation is on the
    /// most recently yielded link.
    pub unsafe fn new(anchor: NonNull<RingLink>) -> Self {
        Self {
            anchor,
            current: unsafe { (*anchor.as_ptr()).next() },
        }
    }
}

impl Iterator for RingCursor {
    type Item = NonNull<RingLink>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        if current == self.anchor {
            self.current = None;
            return None;
        }
        self.current = unsafe { current.as_ref().next() };
        Some(current)
    }
}

/// An iterator over the nodes of a bucket chain.
///
/// Walks `next` from the bucket's first node until the end of the chain.
pub struct BucketIter<'a> {
    current: Option<NonNull<BucketLink>>,
    _marker: PhantomData<&'a BucketHead>,
}

impl<'a> BucketIter<'a> {
    /// Creates a new iterator over `head`'s chain.
    ///
    /// # Safety
    ///
    /// The chain must not be modified while the iterator is alive.
    pub unsafe fn new(head: &'a BucketHead) -> Self {
        Self {
            current: head.first(),
            _marker: PhantomData,
        }
    }
}

impl Iterator for BucketIter<'_> {
    type Item = NonNull<BucketLink>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|current| {
            self.current = unsafe { current.as_ref().next() };
        })
    }
}

/// A mutation-safe iterator over the nodes of a bucket chain.
///
/// Like [`BucketIter`], but the successor is captured before each node is
/// yielded, so the consumer may remove the yielded node during the step.
pub struct BucketCursor {
    current: Option<NonNull<BucketLink>>,
}

impl BucketCursor {
    /// Creates a new cursor over `head`'s chain.
    ///
    /// # Safety
    ///
    /// `head` must be an initialized bucket head. Between steps the only
    /// permitted mutation is on the most recently yielded node.
    pub unsafe fn new(head: NonNull<BucketHead>) -> Self {
        Self {
            current: unsafe { (*head.as_ptr()).first() },
        }
    }
}

impl Iterator for BucketCursor {
    type Item = NonNull<BucketLink>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|current| {
            self.current = unsafe { current.as_ref().next() };
        })
    }
}

/// An iterator over the owners of a ring, recovered through [`Anchored`].
pub struct RingOwners<'a, T, const ID: usize = 0> {
    inner: RingIter<'a>,
    _owner: PhantomData<fn() -> T>,
}

impl<'a, T, const ID: usize> RingOwners<'a, T, ID>
where
    T: Anchored<RingLink, ID>,
{
    /// Creates a new owner iterator over `anchor`'s ring.
    ///
    /// # Safety
    ///
    /// Same contract as [`RingIter::new`]; additionally, every link in the
    /// ring must be the `ID`-designated field of a live owner of type `T`.
    pub unsafe fn new(anchor: &'a RingLink) -> Self {
        Self {
            inner: unsafe { RingIter::new(anchor) },
            _owner: PhantomData,
        }
    }
}

impl<T, const ID: usize> Iterator for RingOwners<'_, T, ID>
where
    T: Anchored<RingLink, ID>,
{
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|link| unsafe { T::owner_ptr(link) })
    }
}

impl<T, const ID: usize> DoubleEndedIterator for RingOwners<'_, T, ID>
where
    T: Anchored<RingLink, ID>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|link| unsafe { T::owner_ptr(link) })
    }
}

/// A mutation-safe iterator over the owners of a ring.
///
/// Combines [`RingCursor`] with owner recovery; the yielded owner's link may
/// be removed or relinked during the step.
pub struct RingOwnersCursor<T, const ID: usize = 0> {
    inner: RingCursor,
    _owner: PhantomData<fn() -> T>,
}

impl<T, const ID: usize> RingOwnersCursor<T, ID>
where
    T: Anchored<RingLink, ID>,
{
    /// Creates a new owner cursor over `anchor`'s ring.
    ///
    /// # Safety
    ///
    /// Same contract as [`RingCursor::new`]; additionally, every link in the
    /// ring must be the `ID`-designated field of a live owner of type `T`.
    pub unsafe fn new(anchor: NonNull<RingLink>) -> Self {
        Self {
            inner: unsafe { RingCursor::new(anchor) },
            _owner: PhantomData,
        }
    }
}

impl<T, const ID: usize> Iterator for RingOwnersCursor<T, ID>
where
    T: Anchored<RingLink, ID>,
{
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|link| unsafe { T::owner_ptr(link) })
    }
}

/// An iterator over the owners of a bucket chain.
pub struct BucketOwners<'a, T, const ID: usize = 0> {
    inner: BucketIter<'a>,
    _owner: PhantomData<fn() -> T>,
}

impl<'a, T, const ID: usize> BucketOwners<'a, T, ID>
where
    T: Anchored<BucketLink, ID>,
{
    /// Creates a new owner iterator over `head`'s chain.
    ///
    /// # Safety
    ///
    /// Same contract as [`BucketIter::new`]; additionally, every node in the
    /// chain must be the `ID`-designated field of a live owner of type `T`.
    pub unsafe fn new(head: &'a BucketHead) -> Self {
        Self {
            inner: unsafe { BucketIter::new(head) },
            _owner: PhantomData,
        }
    }
}

impl<T, const ID: usize> Iterator for BucketOwners<'_, T, ID>
where
    T: Anchored<BucketLink, ID>,
{
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|link| unsafe { T::owner_ptr(link) })
    }
}

/// A mutation-safe iterator over the owners of a bucket chain.
pub struct BucketOwnersCursor<T, const ID: usize = 0> {
    inner: BucketCursor,
    _owner: PhantomData<fn() -> T>,
}

impl<T, const ID: usize> BucketOwnersCursor<T, ID>
where
    T: Anchored<BucketLink, ID>,
{
    /// Creates a new owner cursor over `head`'s chain.
    ///
    /// # Safety
    ///
    /// Same contract as [`BucketCursor::new`]; additionally, every node in
    /// the chain must be the `ID`-designated field of a live owner of type
    /// `T`.
    pub unsafe fn new(head: NonNull<BucketHead>) -> Self {
        Self {
            inner: unsafe { BucketCursor::new(head) },
            _owner: PhantomData,
        }
    }
}

impl<T, const ID: usize> Iterator for BucketOwnersCursor<T, ID>
where
    T: Anchored<BucketLink, ID>,
{
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|link| unsafe { T::owner_ptr(link) })
    }
}
