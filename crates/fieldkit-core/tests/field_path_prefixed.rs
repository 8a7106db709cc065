use fieldkit_core::{path, FieldKey, FieldPath};
use pretty_assertions::assert_eq;

#[test]
fn prefixing_rewrites_only_first_segment() {
    let path = path!["geo", "lat"];
    let prefixed = path.prefixed("home_");

    assert_eq!(
        prefixed.as_slice(),
        &[
            FieldKey::prefixed("home_", FieldKey::from("geo")),
            FieldKey::from("lat"),
        ]
    );
}

#[test]
fn prefixing_empty_path_is_a_no_op() {
    let path = FieldPath::empty();
    assert!(path.prefixed("home_").is_empty());
}

#[test]
fn repeated_prefixing_nests_first_segment() {
    let path = FieldPath::from(FieldKey::from("lat"))
        .into_prefixed("geo_")
        .into_prefixed("home_");

    assert_eq!(path.len(), 1);
    assert_eq!(path[0].storage_name(), "home_geo_lat");
    assert_eq!(path.to_string(), "home_geo_lat");
}

#[test]
fn display_joins_segments() {
    let path = path!["address", "street"];
    assert_eq!(path.to_string(), "address.street");
}
