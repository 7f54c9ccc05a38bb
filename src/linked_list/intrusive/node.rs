use core::mem::offset_of;
use core::ptr::NonNull;

use super::{bucket::BucketLink, ring::RingLink, traits::Anchored};

/// A ready-made owner pairing a ring link with a data value.
pub type RingNode<T> = ListNode<RingLink, T>;

/// A ready-made owner pairing a bucket link with a data value.
pub type BucketNode<T> = ListNode<BucketLink, T>;

/// A generic list node that carries a data value next to its link.
///
/// For callers that do not want to define their own owner struct: embed
/// nothing, just allocate `ListNode`s and link them. The node implements
/// [`Anchored`] for its own link field, so the owner iterators recover it
/// like any other owner type.
pub struct ListNode<L, T> {
    link: L,
    data: T,
}

impl<L, T> ListNode<L, T> {
    /// Creates a new node from a link and a value.
    pub const fn new(link: L, data: T) -> Self {
        Self { link, data }
    }

    /// Get the data associated with the node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Get a mutable reference to the data associated with the node.
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Get the embedded link.
    pub fn link(&self) -> &L {
        &self.link
    }

    /// Get a mutable reference to the embedded link.
    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }
}

unsafe impl<L, T> Anchored<L> for ListNode<L, T> {
    #[inline]
    fn link_ptr(owner: NonNull<Self>) -> NonNull<L> {
        unsafe { NonNull::new_unchecked(&raw mut (*owner.as_ptr()).link) }
    }

    #[inline]
    unsafe fn owner_ptr(link: NonNull<L>) -> NonNull<Self> {
        unsafe {
            NonNull::new_unchecked(
                link.as_ptr()
                    .byte_sub(offset_of!(Self, link))
                    .cast::<Self>(),
            )
        }
    }
}

impl<L, T> Default for ListNode<L, T>
where
    L: Default,
    T: Default,
{
    fn default() -> Self {
        Self {
            link: L::default(),
            data: T::default(),
        }
    }
}

unsafe impl<L, T> Send for ListNode<L, T>
where
    L: Send,
    T: Send,
{
}

unsafe impl<L, T> Sync for ListNode<L, T>
where
    L: Sync,
    T: Sync,
{
}
