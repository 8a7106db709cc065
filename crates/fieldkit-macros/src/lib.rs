extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `Fields` and a `Default` that keys every property by its member name.
///
/// Member attributes:
///
/// * `#[fields(key = "...")]` stores the member under a different key (for a
///   compound field, the key its prefix is built from).
/// * `#[fields(prefix = "...")]` sets a compound field's prefix verbatim.
/// * `#[fields(skip)]` excludes the member; it is initialized with `Default`.
///
/// Container attributes:
///
/// * `#[fields(codec)]` also derives `Serialize` and `Deserialize` through
///   `fieldkit::codec`.
#[proc_macro_derive(Fields, attributes(fields))]
pub fn derive_fields(input: TokenStream) -> TokenStream {
    match fieldkit_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
