//! Macros for RangeForge containers.

use proc_macro::TokenStream;
use syn::{parse_macro_input, Attribute, DeriveInput};

mod sequence;

/// Makes a wrapper struct usable wherever its inner container is.
///
/// The struct must have exactly one field, or mark one field with
/// `#[sequence]`. The derive implements `Sequence` for shared borrows of the
/// struct and `Container` by delegating to the field; exclusive borrows are
/// sequences through `Container`. `Truncate` is implemented when the field is
/// a `Vec`.
///
/// `ForwardContainer`, `PermutableContainer` and `WritableContainer` are
/// delegated for `Vec` and array fields and for fields whose type uses a
/// type parameter of the struct. Other field types list what they support:
///
/// ```ignore
/// #[derive(Sequence)]
/// struct Snapshot(#[sequence(forward)] FrozenVec<u32>);
/// ```
///
/// ```ignore
/// use rangeforge::prelude::*;
///
/// #[derive(Sequence)]
/// struct Scores(Vec<u32>);
///
/// let scores = action::SORT.call(Scores(vec![3, 1, 2]));
/// assert_eq!(scores.0, vec![1, 2, 3]);
/// ```
#[proc_macro_derive(Sequence, attributes(sequence))]
pub fn derive_sequence(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    sequence::expand_derive(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}
