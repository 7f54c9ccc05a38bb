use core::ptr::NonNull;

pub use dhlist_derive::Anchored;

/// A trait for owner structs that embed a link of type `L`, allowing the
/// owner to be recovered from a pointer to the embedded field in O(1).
///
/// `ID` distinguishes multiple link fields of the same type within one owner;
/// owners with a single link per list kind use the default of 0.
///
/// Use `#[derive(Anchored)]` to implement this for every `RingLink` and
/// `BucketLink` field of a struct; the generated recovery uses
/// `core::mem::offset_of!`, so the offset always matches the real layout.
///
/// # Safety
///
/// Implementers must ensure that `link_ptr` and `owner_ptr` are exact
/// inverses: `link_ptr` must return a pointer to a link field embedded in the
/// owner, and `owner_ptr` must recover the owner from exactly that field.
/// Handing `owner_ptr` a pointer that does not originate from the designated
/// field of a live owner of this type is undefined behavior.
pub unsafe trait Anchored<L, const ID: usize = 0>: Sized {
    /// Get a pointer to the embedded link field of `owner`.
    fn link_ptr(owner: NonNull<Self>) -> NonNull<L>;

    /// Recover the owner from a pointer to its embedded link field.
    ///
    /// # Safety
    ///
    /// `link` must point at the `ID`-designated link field of a live owner
    /// of this exact type.
    unsafe fn owner_ptr(link: NonNull<L>) -> NonNull<Self>;
}
