use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Member identifier
    pub(crate) ident: syn::Ident,

    /// Member type
    pub(crate) ty: syn::Type,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// `#[fields(key = "...")]`
    pub(crate) key: Option<syn::LitStr>,

    /// `#[fields(prefix = "...")]`
    pub(crate) prefix: Option<syn::LitStr>,

    /// `#[fields(skip)]`
    pub(crate) skip: bool,
}

/// How a member is initialized by the derived `Default`.
#[derive(Debug)]
pub(crate) enum FieldInit {
    /// `Keyed::keyed(name)`
    Keyed(String),

    /// `CompoundField::new(prefix)`
    Prefix(syn::LitStr),

    /// `Default::default()`
    Skip,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let attrs = FieldAttr::from_ast(&field.attrs)?;

        Ok(Field {
            ident: ident.clone(),
            ty: field.ty.clone(),
            attrs,
        })
    }

    pub(crate) fn is_skipped(&self) -> bool {
        self.attrs.skip
    }

    pub(crate) fn init(&self) -> FieldInit {
        if self.attrs.skip {
            FieldInit::Skip
        } else if let Some(prefix) = &self.attrs.prefix {
            FieldInit::Prefix(prefix.clone())
        } else if let Some(key) = &self.attrs.key {
            FieldInit::Keyed(key.value())
        } else {
            FieldInit::Keyed(self.ident.unraw().to_string())
        }
    }
}

impl FieldAttr {
    fn from_ast(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut result = FieldAttr::default();

        for attr in attrs {
            if !attr.path().is_ident("fields") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("key") {
                    if result.key.is_some() {
                        return Err(meta.error("duplicate `key` attribute"));
                    }
                    result.key = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("prefix") {
                    if result.prefix.is_some() {
                        return Err(meta.error("duplicate `prefix` attribute"));
                    }
                    result.prefix = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("skip") {
                    result.skip = true;
                } else {
                    return Err(meta.error("expected `key`, `prefix`, or `skip`"));
                }

                Ok(())
            })?;

            if result.key.is_some() && result.prefix.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "`key` and `prefix` cannot be combined",
                ));
            }

            if result.skip && (result.key.is_some() || result.prefix.is_some()) {
                return Err(syn::Error::new_spanned(
                    attr,
                    "skipped fields cannot have a `key` or `prefix`",
                ));
            }
        }

        Ok(result)
    }
}
