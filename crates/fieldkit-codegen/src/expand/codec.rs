use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Transport impls; generic structs are rejected while parsing.
    pub(super) fn expand_codec_impls(&self) -> TokenStream {
        let fieldkit = &self.fieldkit;
        let model_ident = &self.model.ident;

        quote! {
            impl #fieldkit::serde::Serialize for #model_ident {
                fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
                where
                    S: #fieldkit::serde::Serializer,
                {
                    #fieldkit::codec::serialize(self, serializer)
                }
            }

            impl<'de> #fieldkit::serde::Deserialize<'de> for #model_ident {
                fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
                where
                    D: #fieldkit::serde::Deserializer<'de>,
                {
                    #fieldkit::codec::deserialize(deserializer)
                }
            }
        }
    }
}
