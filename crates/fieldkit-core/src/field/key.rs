use std::{borrow::Cow, fmt};

/// Identifies a single storage column.
///
/// Keys nested inside a compound field are wrapped in [`FieldKey::Prefixed`].
/// The wrapping is structural: `Prefixed { prefix: "home_", key: "city" }` and
/// `Name("home_city")` are different keys even though both are stored in the
/// `home_city` column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    /// The model identifier column.
    Id,

    /// A plain, named column.
    Name(String),

    /// `key` as seen through a compound field with `prefix`.
    Prefixed { prefix: String, key: Box<FieldKey> },
}

impl FieldKey {
    /// Wraps `key` with `prefix`.
    pub fn prefixed(prefix: impl Into<String>, key: FieldKey) -> FieldKey {
        FieldKey::Prefixed {
            prefix: prefix.into(),
            key: Box::new(key),
        }
    }

    pub fn is_prefixed(&self) -> bool {
        matches!(self, FieldKey::Prefixed { .. })
    }

    /// Returns the wrapped key if this key carries exactly `prefix` as its
    /// outermost prefix.
    pub fn strip_prefix(&self, prefix: &str) -> Option<&FieldKey> {
        match self {
            FieldKey::Prefixed { prefix: p, key } if p == prefix => Some(key),
            _ => None,
        }
    }

    /// The innermost, unprefixed key.
    pub fn base(&self) -> &FieldKey {
        match self {
            FieldKey::Prefixed { key, .. } => key.base(),
            key => key,
        }
    }

    /// The flat column name this key is stored under.
    pub fn storage_name(&self) -> Cow<'_, str> {
        match self {
            FieldKey::Id => Cow::Borrowed("id"),
            FieldKey::Name(name) => Cow::Borrowed(name.as_str()),
            FieldKey::Prefixed { prefix, key } => {
                let mut name = prefix.clone();
                name.push_str(&key.storage_name());
                Cow::Owned(name)
            }
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::Id => f.write_str("id"),
            FieldKey::Name(name) => f.write_str(name),
            FieldKey::Prefixed { prefix, key } => {
                f.write_str(prefix)?;
                fmt::Display::fmt(key, f)
            }
        }
    }
}

impl From<&str> for FieldKey {
    fn from(value: &str) -> Self {
        FieldKey::Name(value.to_owned())
    }
}

impl From<String> for FieldKey {
    fn from(value: String) -> Self {
        FieldKey::Name(value)
    }
}
