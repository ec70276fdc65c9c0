use proc_macro::TokenStream;

mod bean;
mod util;

/// Register a struct's fields (and optionally its accessors) for copying.
///
/// Struct attributes:
/// - `#[bean(getters)]`, `#[bean(setters)]`, `#[bean(accessors)]`: the
///   struct defines conventionally named accessor methods for every
///   writable field (`get_x` / `is_x` / `set_x`).
/// - `#[bean(proxy)]`: a generated wrapper around its parent field.
///
/// Field attributes:
/// - `#[bean(parent)]`: the embedded parent level (at most one).
/// - `#[bean(readonly)]`: listed but never written by a copy.
/// - `#[bean(skip)]`: not registered at all.
#[proc_macro_derive(Bean, attributes(bean))]
pub fn derive_bean(input: TokenStream) -> TokenStream {
    bean::derive_bean(input.into()).into()
}
