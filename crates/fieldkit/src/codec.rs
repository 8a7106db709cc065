//! Transport encoding for [`Fields`] models.
//!
//! A model travels as the flat map its row input would produce: one entry per
//! column, keyed by storage name, with compound members flattened under their
//! prefixes. Use these functions to implement `Serialize`/`Deserialize` by
//! hand, or let `#[derive(Fields)]` do it with `#[fields(codec)]`.

use crate::Fields;
use fieldkit_core::Row;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

pub fn serialize<V, S>(fields: &V, serializer: S) -> Result<S::Ok, S::Error>
where
    V: Fields,
    S: Serializer,
{
    Row::from(fields.input_values()).serialize(serializer)
}

pub fn deserialize<'de, V, D>(deserializer: D) -> Result<V, D::Error>
where
    V: Fields,
    D: Deserializer<'de>,
{
    let row = Row::deserialize(deserializer)?;

    let mut fields = V::default();
    fields.output(&row).map_err(|err| {
        debug!(%err, "failed to load fields from transport row");
        <D::Error as de::Error>::custom(err)
    })?;

    Ok(fields)
}
