use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Type generics, carried onto every generated impl
    pub(crate) generics: syn::Generics,

    /// Container attributes
    pub(crate) attr: ModelAttr,

    /// Struct members, in declaration order
    pub(crate) fields: Vec<Field>,
}

#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// True if the struct is annotated with `#[fields(codec)]`
    pub(crate) codec: bool,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(named) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "`Fields` can only be derived for structs with named fields",
            ));
        };

        let mut errs = ErrorSet::new();

        let attr = match ModelAttr::from_ast(&ast.attrs) {
            Ok(attr) => attr,
            Err(err) => {
                errs.push(err);
                ModelAttr::default()
            }
        };

        if attr.codec && !ast.generics.params.is_empty() {
            errs.push(syn::Error::new_spanned(
                &ast.generics,
                "`#[fields(codec)]` is not supported on generic structs",
            ));
        }

        let mut fields = vec![];

        for field in &named.named {
            match Field::from_ast(field) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Model {
            ident: ast.ident.clone(),
            generics: ast.generics.clone(),
            attr,
            fields,
        })
    }

    /// Members that participate in the row.
    pub(crate) fn properties(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| !field.is_skipped())
    }
}

impl ModelAttr {
    fn from_ast(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut result = ModelAttr::default();

        for attr in attrs {
            if !attr.path().is_ident("fields") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("codec") {
                    result.codec = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `codec`"))
                }
            })?;
        }

        Ok(result)
    }
}
