use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream}, parse_macro_input, Data, DataStruct, DeriveInput, Fields, Ident, LitStr, Token, Type, TypePath
};

struct AnchoredAttribute {
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for AnchoredAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(AnchoredAttribute { crate_path: path })
    }
}

/// Derive macro for recovering owner structs from their embedded links.
///
/// Emits one `Anchored` impl per `RingLink` or `BucketLink` field, with
/// const IDs assigned per link type in declaration order.
#[proc_macro_derive(Anchored, attributes(anchored))]
pub fn anchored_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Find absolute crate path
    let mut crate_path = quote! { ::dhlist };

    for attr in &input.attrs {
        if attr.path().is_ident("anchored") {
            match attr.parse_args::<AnchoredAttribute>() {
                Ok(anchored_attr) => {
                    let path = anchored_attr.crate_path;
                    crate_path = quote! { #path };
                    break;
                }
                Err(e) => return e.to_compile_error().into(),
            }
        }
    }

    let intrusive_path = quote! { #crate_path::linked_list::intrusive };

    let fields = if let Data::Struct(DataStruct {
        fields: Fields::Named(ref fields),
        ..
    }) = input.data
    {
        fields.named.clone()
    } else {
        return syn::Error::new_spanned(
            input,
            "Anchored derive macro only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let mut ring_count = 0usize;
    let mut bucket_count = 0usize;
    let mut impls = Vec::new();

    for field in fields.iter() {
        let field_ident = match &field.ident {
            Some(ident) => ident,
            None => continue,
        };

        let type_ident = if let Type::Path(TypePath { path, .. }) = &field.ty {
            match path.segments.last() {
                Some(segment) => segment.ident.clone(),
                None => continue,
            }
        } else {
            continue;
        };

        let (link_type, id) = match type_ident.to_string().as_str() {
            "RingLink" => {
                let link_type = quote! { #intrusive_path::ring::RingLink };
                ring_count += 1;
                (link_type, ring_count - 1)
            }
            "BucketLink" => {
                let link_type = quote! { #intrusive_path::bucket::BucketLink };
                bucket_count += 1;
                (link_type, bucket_count - 1)
            }
            _ => continue,
        };

        let id = Literal::usize_unsuffixed(id);

        impls.push(quote! {
            unsafe impl #impl_generics #intrusive_path::traits::Anchored<#link_type, #id>
                for #struct_name #ty_generics #where_clause
            {
                #[inline]
                fn link_ptr(owner: ::core::ptr::NonNull<Self>) -> ::core::ptr::NonNull<#link_type> {
                    unsafe {
                        ::core::ptr::NonNull::new_unchecked(&raw mut (*owner.as_ptr()).#field_ident)
                    }
                }

                #[inline]
                unsafe fn owner_ptr(link: ::core::ptr::NonNull<#link_type>) -> ::core::ptr::NonNull<Self> {
                    unsafe {
                        ::core::ptr::NonNull::new_unchecked(
                            link.as_ptr()
                                .byte_sub(::core::mem::offset_of!(Self, #field_ident))
                                .cast::<Self>(),
                        )
                    }
                }
            }
        });
    }

    if impls.is_empty() {
        return syn::Error::new_spanned(
            struct_name,
            "Struct must have at least one field of type 'RingLink' or 'BucketLink'",
        )
        .to_compile_error()
        .into();
    }

    let expanded = quote! {
        #(#impls)*
    };

    TokenStream::from(expanded)
}
