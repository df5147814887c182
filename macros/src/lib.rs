//! Derive macros for composed actions and composed state
//!
//! # Available Macros
//!
//! - `#[derive(AllCases)]` - Lists every case of a fieldless enum
//! - `#[derive(ChildFields)]` - Read/write field accessors through `ComposedState::child`
//! - `#[derive(ParentFields)]` - Read-only field accessors through `ComposedState`'s parent
//!
//! The generated code refers to `::composable_composition`, so the deriving
//! crate must depend on it.
//!
//! When the child and the parent both declare a field, the child's accessor
//! wins on a `ComposedState`: child accessors are implemented on the composed
//! state, parent accessors on the parent type, which the composed state
//! derefs to.
//!
//! # Example
//!
//! ```ignore
//! use composable_composition::ComposedState;
//! use composable_composition_macros::{ChildFields, ParentFields};
//!
//! #[derive(ChildFields, Clone, Debug)]
//! struct ChildState {
//!     child_value: i32,
//! }
//!
//! #[derive(ParentFields, Clone, Debug)]
//! struct ParentState {
//!     parent_value: i32,
//!     child_value: i32,
//! }
//!
//! let mut state = ComposedState::new(
//!     ChildState { child_value: 10 },
//!     ParentState { parent_value: 20, child_value: 99 },
//! );
//! state.set_child_value(15);
//! assert_eq!(*state.child_value(), 15);
//! assert_eq!(*state.parent_value(), 20);
//! // state.set_parent_value(0); // does not exist
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, parse_macro_input};

/// Derive macro for fieldless enums
///
/// Implements `composable_composition::AllCases`, returning every variant
/// in declaration order.
///
/// # Errors
///
/// Produces a compile error if applied to anything other than an enum whose
/// variants all have no fields.
///
/// # Example
///
/// ```ignore
/// #[derive(AllCases, Clone, Debug, PartialEq)]
/// enum Tab {
///     Inbox,
///     Archive,
/// }
///
/// assert_eq!(Tab::all_cases(), vec![Tab::Inbox, Tab::Archive]);
/// ```
#[proc_macro_derive(AllCases)]
pub fn derive_all_cases(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(AllCases)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    if let Some(variant) = data_enum
        .variants
        .iter()
        .find(|variant| !matches!(variant.fields, Fields::Unit))
    {
        return syn::Error::new_spanned(
            variant,
            "#[derive(AllCases)] requires every variant to have no fields",
        )
        .to_compile_error()
        .into();
    }

    let variants = data_enum.variants.iter().map(|variant| &variant.ident);
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::composable_composition::AllCases for #name #ty_generics #where_clause {
            fn all_cases() -> ::std::vec::Vec<Self> {
                ::std::vec![#(Self::#variants),*]
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro for child state structs
///
/// Generates a `{Name}ChildFields` trait with, for every field `x: T`:
/// - `x(&self) -> &T`
/// - `x_mut(&mut self) -> &mut T`
/// - `set_x(&mut self, value: T)`
///
/// The trait is implemented for every `ChildAccess<Child = {Name}>`, which
/// includes `ComposedState<{Name}, _>`.
///
/// # Attributes
///
/// - `#[composed(skip)]` - Generate no accessors for this field
///
/// # Errors
///
/// Produces a compile error if applied to anything other than a
/// non-generic struct with named fields, or if a generated accessor would be
/// shadowed by a method of `ComposedState` (`child`, `child_mut`, `parent`,
/// `read_child`, `read_parent`, `update`, `with_parent`, `map_child`,
/// `into_parts`, `into_child`, `child_state`, `child_state_mut`,
/// `parent_state`). Skip such fields with `#[composed(skip)]`.
#[proc_macro_derive(ChildFields, attributes(composed))]
pub fn derive_child_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_fields(&input, Access::ReadWrite)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive macro for parent state structs
///
/// Generates a `{Name}ParentFields` trait with a getter `x(&self) -> &T`
/// for every field `x: T`, implemented for `{Name}`. A
/// `ComposedState<_, {Name}>` reaches the getters through `Deref`, after
/// its own methods and the child's accessors, so a child field of the same
/// name shadows the parent's. No setters are generated, so a parent field
/// cannot be written through a composed state.
///
/// # Attributes
///
/// - `#[composed(skip)]` - Generate no accessor for this field
///
/// # Errors
///
/// Produces a compile error if applied to anything other than a
/// non-generic struct with named fields, or if a getter would be shadowed by
/// a method of `ComposedState` (same names as for `ChildFields`).
#[proc_macro_derive(ParentFields, attributes(composed))]
pub fn derive_parent_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_fields(&input, Access::ReadOnly)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[derive(Clone, Copy)]
enum Access {
    ReadWrite,
    ReadOnly,
}

fn expand_fields(input: &DeriveInput, access: Access) -> syn::Result<TokenStream2> {
    let (derive, suffix) = match access {
        Access::ReadWrite => ("ChildFields", "ChildFields"),
        Access::ReadOnly => ("ParentFields", "ParentFields"),
    };

    let Data::Struct(data_struct) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            format!("#[derive({derive})] can only be used on structs"),
        ));
    };

    let Fields::Named(fields) = &data_struct.fields else {
        return Err(syn::Error::new_spanned(
            &data_struct.fields,
            format!("#[derive({derive})] requires named fields"),
        ));
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            format!("#[derive({derive})] does not support generic structs"),
        ));
    }

    let name = &input.ident;
    let vis = &input.vis;
    let trait_name = format_ident!("{}{}", name, suffix);

    let mut accessors = Vec::new();
    for field in &fields.named {
        if !is_skipped(&field.attrs)? {
            check_reserved(field, access)?;
            accessors.push(field);
        }
    }

    let (signatures, bodies): (Vec<_>, Vec<_>) = accessors
        .iter()
        .map(|field| match access {
            Access::ReadWrite => read_write_accessors(field),
            Access::ReadOnly => read_only_accessor(field),
        })
        .unzip();

    let implementation = match access {
        Access::ReadWrite => quote! {
            impl<__T> #trait_name for __T
            where
                __T: ::composable_composition::ChildAccess<Child = #name>,
            {
                #(#bodies)*
            }
        },
        Access::ReadOnly => quote! {
            impl #trait_name for #name {
                #(#bodies)*
            }
        },
    };

    let trait_doc = match access {
        Access::ReadWrite => format!("Read/write accessors for the fields of a child `{name}`"),
        Access::ReadOnly => format!("Read-only accessors for the fields of a parent `{name}`"),
    };

    Ok(quote! {
        #[doc = #trait_doc]
        #vis trait #trait_name {
            #(#signatures)*
        }

        #implementation
    })
}

/// Methods of `ComposedState` that take precedence over derived accessors
const RESERVED: &[&str] = &[
    "child",
    "child_mut",
    "parent",
    "read_child",
    "read_parent",
    "update",
    "with_parent",
    "map_child",
    "into_parts",
    "into_child",
    "child_state",
    "child_state_mut",
    "parent_state",
];

fn check_reserved(field: &Field, access: Access) -> syn::Result<()> {
    let Some(ident) = field.ident.as_ref() else {
        return Ok(());
    };

    let generated = match access {
        Access::ReadWrite => vec![
            ident.to_string(),
            format!("{ident}_mut"),
            format!("set_{ident}"),
        ],
        Access::ReadOnly => vec![ident.to_string()],
    };

    match generated.iter().find(|name| RESERVED.contains(&name.as_str())) {
        Some(name) => Err(syn::Error::new_spanned(
            ident,
            format!(
                "accessor `{name}` would be shadowed by `ComposedState::{name}`; \
                 rename the field or mark it #[composed(skip)]"
            ),
        )),
        None => Ok(()),
    }
}

fn read_write_accessors(field: &Field) -> (TokenStream2, TokenStream2) {
    let ident = field.ident.as_ref();
    let ty = &field.ty;
    let get_doc = doc_for(field, "The child's");
    let mut_doc = format!("{get_doc}, mutably");
    let set_doc = format!("Replace {}", get_doc.to_lowercase());
    let mut_ident = ident.map(|ident| format_ident!("{}_mut", ident));
    let set_ident = ident.map(|ident| format_ident!("set_{}", ident));

    let signatures = quote! {
        #[doc = #get_doc]
        fn #ident(&self) -> &#ty;

        #[doc = #mut_doc]
        fn #mut_ident(&mut self) -> &mut #ty;

        #[doc = #set_doc]
        fn #set_ident(&mut self, value: #ty);
    };

    let bodies = quote! {
        fn #ident(&self) -> &#ty {
            &::composable_composition::ChildAccess::child_state(self).#ident
        }

        fn #mut_ident(&mut self) -> &mut #ty {
            &mut ::composable_composition::ChildAccess::child_state_mut(self).#ident
        }

        fn #set_ident(&mut self, value: #ty) {
            ::composable_composition::ChildAccess::child_state_mut(self).#ident = value;
        }
    };

    (signatures, bodies)
}

fn read_only_accessor(field: &Field) -> (TokenStream2, TokenStream2) {
    let ident = field.ident.as_ref();
    let ty = &field.ty;
    let doc = doc_for(field, "The parent's");

    let signature = quote! {
        #[doc = #doc]
        fn #ident(&self) -> &#ty;
    };

    let body = quote! {
        fn #ident(&self) -> &#ty {
            &self.#ident
        }
    };

    (signature, body)
}

fn doc_for(field: &Field, owner: &str) -> String {
    let name = field
        .ident
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    format!("{owner} `{name}` field")
}

/// Check for `#[composed(skip)]`, rejecting unknown `composed` options
fn is_skipped(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut skip = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("composed")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported composed attribute, expected `skip`"))
            }
        })?;
    }
    Ok(skip)
}
