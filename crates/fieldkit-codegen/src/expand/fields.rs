use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_fields_impl(&self) -> TokenStream {
        let fieldkit = &self.fieldkit;
        let model_ident = &self.model.ident;
        let (impl_generics, ty_generics, where_clause) = self.model.generics.split_for_impl();

        let idents: Vec<_> = self.model.properties().map(|field| &field.ident).collect();

        quote! {
            impl #impl_generics #fieldkit::Fields for #model_ident #ty_generics #where_clause {
                #[allow(unused_mut)]
                fn properties(&self) -> #fieldkit::Vec<&dyn #fieldkit::Property> {
                    let mut properties: #fieldkit::Vec<&dyn #fieldkit::Property> = #fieldkit::Vec::new();
                    #( properties.push(&self.#idents); )*
                    properties
                }

                #[allow(unused_mut)]
                fn properties_mut(&mut self) -> #fieldkit::Vec<&mut dyn #fieldkit::Property> {
                    let mut properties: #fieldkit::Vec<&mut dyn #fieldkit::Property> = #fieldkit::Vec::new();
                    #( properties.push(&mut self.#idents); )*
                    properties
                }
            }
        }
    }
}
