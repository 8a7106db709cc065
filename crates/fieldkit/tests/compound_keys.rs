mod support;

use fieldkit::{CompoundField, FieldKey, Fields, Property};
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use support::{address, Address, User};

fn names(keys: &[FieldKey]) -> Vec<String> {
    keys.iter().map(|key| key.to_string()).collect()
}

#[test]
fn keys_are_prefixed_nested_keys() {
    let home = CompoundField::<Address>::new("home_");

    let expected: Vec<_> = Address::default()
        .keys()
        .into_iter()
        .map(|key| FieldKey::prefixed("home_", key))
        .collect();

    assert_eq!(home.keys(), expected);
    assert_eq!(
        names(&home.keys()),
        ["home_street", "home_city", "home_zip", "home_geo_lat", "home_geo_lng"]
    );
}

#[test]
fn keys_do_not_depend_on_assignment() {
    let pristine = CompoundField::<Address>::new("home_");

    let mut assigned = CompoundField::<Address>::new("home_");
    assigned.set(address("1 Main St", "Springfield"));

    assert_eq!(pristine.keys(), assigned.keys());
}

#[test]
fn keys_do_not_materialize_the_value() {
    let home = CompoundField::<Address>::new("home_");
    let _ = home.keys();

    assert!(home.value().is_none());
}

#[test]
fn nested_compound_keys_nest_prefixes() {
    let home = CompoundField::<Address>::new("home_");
    let keys = home.keys();

    assert_eq!(
        keys[3],
        FieldKey::prefixed("home_", FieldKey::prefixed("geo_", FieldKey::from("lat")))
    );
}

#[test]
fn sibling_compound_fields_never_collide() {
    let user = User::default();
    let keys = user.keys();
    let unique: HashSet<_> = keys.iter().collect();

    assert_eq!(unique.len(), keys.len());

    let columns: HashSet<_> = keys.iter().map(|key| key.storage_name()).collect();
    assert_eq!(columns.len(), keys.len());
}

#[test]
fn user_keys_follow_member_order() {
    let user = User::default();

    assert_eq!(
        names(&user.keys()),
        [
            "id",
            "name",
            "home_street",
            "home_city",
            "home_zip",
            "home_geo_lat",
            "home_geo_lng",
            "work_street",
            "work_city",
            "work_zip",
            "work_geo_lat",
            "work_geo_lng",
            "billing__street",
            "billing__city",
            "billing__zip",
            "billing__geo_lat",
            "billing__geo_lng",
        ]
    );
}

#[test]
fn optional_compound_keys_match_inner_keys() {
    let billing = CompoundField::<Option<Address>>::new("billing__");
    let plain = CompoundField::<Address>::new("billing__");

    assert_eq!(billing.keys(), plain.keys());
}

#[test]
fn with_key_joins_key_and_separator() {
    let field = CompoundField::<Address>::with_key("home", "__");
    assert_eq!(field.prefix(), "home__");

    let field = CompoundField::<Address>::with_key("home", fieldkit::DEFAULT_SEPARATOR);
    assert_eq!(field.prefix(), "home_");
}
