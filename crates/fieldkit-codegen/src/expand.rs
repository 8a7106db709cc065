mod codec;
mod default;
mod fields;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for fieldkit types
    fieldkit: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let default_impl = self.expand_default_impl();
        let fields_impl = self.expand_fields_impl();
        let codec_impls = if self.model.attr.codec {
            self.expand_codec_impls()
        } else {
            quote!()
        };

        wrap_in_const(quote! {
            #default_impl
            #fields_impl
            #codec_impls
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        fieldkit: quote!(_fieldkit::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use fieldkit as _fieldkit;
            #code
        };
    }
}
