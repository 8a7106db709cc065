use super::Expand;
use crate::schema::FieldInit;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_default_impl(&self) -> TokenStream {
        let fieldkit = &self.fieldkit;
        let model_ident = &self.model.ident;
        let (impl_generics, ty_generics, where_clause) = self.model.generics.split_for_impl();

        let inits = self.model.fields.iter().map(|field| {
            let ident = &field.ident;
            let ty = &field.ty;

            let init = match field.init() {
                FieldInit::Keyed(name) => quote!(<#ty as #fieldkit::Keyed>::keyed(#name)),
                FieldInit::Prefix(prefix) => quote!(#fieldkit::CompoundField::new(#prefix)),
                FieldInit::Skip => quote!(#fieldkit::Default::default()),
            };

            quote!(#ident: #init,)
        });

        quote! {
            impl #impl_generics #fieldkit::Default for #model_ident #ty_generics #where_clause {
                fn default() -> Self {
                    Self {
                        #( #inits )*
                    }
                }
            }
        }
    }
}
