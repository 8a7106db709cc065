use fieldkit_core::{FieldKey, Input, Output, Prefixed, Row, Value};

fn row() -> Row {
    [
        ("name", Value::from("Ada")),
        ("home_city", Value::from("London")),
        ("home_geo_lat", Value::F64(51.5)),
        ("home_zip", Value::Null),
    ]
    .into_iter()
    .collect()
}

#[test]
fn row_resolves_keys_by_storage_name() {
    let row = row();
    assert_eq!(row.get(&FieldKey::from("name")), Some(&Value::from("Ada")));
    assert_eq!(
        row.get(&FieldKey::prefixed("home_", FieldKey::from("city"))),
        Some(&Value::from("London"))
    );
}

#[test]
fn prefixed_view_redirects_lookups() {
    let row = row();
    let output: &dyn Output = &row;
    let home = output.prefixed("home_");

    assert_eq!(home.prefix(), "home_");
    assert_eq!(home.get(&FieldKey::from("city")), Some(&Value::from("London")));
    assert_eq!(home.get(&FieldKey::from("name")), None);
}

#[test]
fn prefixed_view_keeps_null_columns() {
    let row = row();
    let home = Prefixed::new(&row, "home_");

    assert!(home.contains(&FieldKey::from("zip")));
    assert_eq!(home.get(&FieldKey::from("zip")), Some(&Value::Null));
}

#[test]
fn nested_views_accumulate_prefixes() {
    let row = row();
    let home = Prefixed::new(&row, "home_");
    let geo = Prefixed::new(&home, "geo_");

    assert_eq!(geo.get(&FieldKey::from("lat")), Some(&Value::F64(51.5)));
}

#[test]
fn require_reports_missing_field() {
    let row = row();
    let home = Prefixed::new(&row, "home_");

    let err = home.require(&FieldKey::from("street")).unwrap_err();
    assert!(err.is_missing_field());
    assert_eq!(err.to_string(), "missing field `home_street`");
}

#[test]
fn input_lookup_is_structural() {
    let mut input = Input::new();
    input.insert(
        FieldKey::prefixed("home_", FieldKey::from("city")),
        "London",
    );

    let home = Prefixed::new(&input, "home_");
    assert_eq!(home.get(&FieldKey::from("city")), Some(&Value::from("London")));

    // A flat key with the same storage name is a different key
    assert_eq!(input.get(&FieldKey::from("home_city")), None);
}

#[test]
fn input_flattens_into_row() {
    let mut input = Input::new();
    input.insert("name", "Ada");
    input.insert(
        FieldKey::prefixed("home_", FieldKey::prefixed("geo_", FieldKey::from("lat"))),
        51.5,
    );

    let row = Row::from(input);
    assert_eq!(row.column("name"), Some(&Value::from("Ada")));
    assert_eq!(row.column("home_geo_lat"), Some(&Value::F64(51.5)));
    assert_eq!(row.len(), 2);
}
