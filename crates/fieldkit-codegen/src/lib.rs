mod expand;
mod schema;

use proc_macro2::TokenStream;

pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let model = schema::Model::from_ast(&item)?;

    Ok(expand::model(&model))
}

#[cfg(test)]
mod tests {
    use super::generate;
    use quote::quote;

    fn error(input: proc_macro2::TokenStream) -> String {
        generate(input).unwrap_err().to_string()
    }

    #[test]
    fn expands_named_struct() {
        let output = generate(quote! {
            struct Address {
                street: Field<String>,
                #[fields(key = "town")]
                city: Field<String>,
                #[fields(prefix = "geo_")]
                geo: CompoundField<Geo>,
                #[fields(skip)]
                cache: Vec<u8>,
            }
        })
        .unwrap()
        .to_string();

        assert!(output.contains("keyed (\"street\")"));
        assert!(output.contains("keyed (\"town\")"));
        assert!(output.contains("CompoundField :: new (\"geo_\")"));
        assert!(output.contains("properties . push (& self . geo)"));
        assert!(!output.contains("properties . push (& self . cache)"));
        assert!(!output.contains("Serialize"));
    }

    #[test]
    fn raw_identifiers_are_keyed_without_prefix() {
        let output = generate(quote! {
            struct Tag {
                r#type: Field<String>,
            }
        })
        .unwrap()
        .to_string();

        assert!(output.contains("keyed (\"type\")"));
    }

    #[test]
    fn codec_expands_serde_impls() {
        let output = generate(quote! {
            #[fields(codec)]
            struct Address {
                street: Field<String>,
            }
        })
        .unwrap()
        .to_string();

        assert!(output.contains("serde :: Serialize for Address"));
        assert!(output.contains("serde :: Deserialize < 'de > for Address"));
    }

    #[test]
    fn rejects_tuple_structs() {
        assert_eq!(
            error(quote!(struct Pair(Field<i64>, Field<i64>);)),
            "`Fields` can only be derived for structs with named fields"
        );
    }

    #[test]
    fn rejects_codec_on_generic_structs() {
        assert_eq!(
            error(quote! {
                #[fields(codec)]
                struct Wrapper<V> {
                    inner: CompoundField<V>,
                }
            }),
            "`#[fields(codec)]` is not supported on generic structs"
        );
    }

    #[test]
    fn rejects_key_with_prefix() {
        assert_eq!(
            error(quote! {
                struct User {
                    #[fields(key = "home", prefix = "home_")]
                    home: CompoundField<Address>,
                }
            }),
            "`key` and `prefix` cannot be combined"
        );
    }

    #[test]
    fn rejects_unknown_attribute() {
        assert_eq!(
            error(quote! {
                struct User {
                    #[fields(column = "name")]
                    name: Field<String>,
                }
            }),
            "expected `key`, `prefix`, or `skip`"
        );
    }
}
