/// Builds a [`FieldPath`](crate::FieldPath) from a sequence of keys.
///
/// ```
/// use fieldkit_core::{path, FieldKey};
///
/// let path = path!["address", "street"];
/// assert_eq!(path.len(), 2);
/// assert_eq!(path[0], FieldKey::from("address"));
/// ```
#[macro_export]
macro_rules! path {
    (
        $( $field:expr ),+ $(,)?
    ) => {
        [ $( $crate::FieldKey::from($field), )+ ].into_iter().collect::<$crate::FieldPath>()
    };
}
