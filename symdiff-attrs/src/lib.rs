mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `ErrorKind` trait from `symdiff-error` for the given struct.
///
/// The information of the error is customized using the `error` attribute:
/// ```ignore
/// use symdiff_attrs::ErrorKind;
/// use symdiff_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("cannot divide `{}` by zero", numerator),
///     labels = ["this division"],
///     help = "the divisor folded to the literal 0",
/// )]
/// pub struct Foo {
///     numerator: String,
/// }
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | The labels pointing at each span of the error, in the order of the spans.    |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// Each tag accepts an expression. `message` and `help` should evaluate to something convertible
/// to a [`String`], and `labels` to something iterable over such values. For structs with named
/// fields, the expression is evaluated with the members of the struct in scope (tuple structs are
/// not supported).
///
/// Code generated by this macro refers to the `ariadne` and `symdiff_error` crates, so both must be
/// dependencies of the crate deriving the trait.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl symdiff_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
            #target
        }
    }.into()
}
