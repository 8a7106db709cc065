mod support;

use fieldkit::{CompoundField, Field, FieldKey, Fields, Row, Value};
use pretty_assertions::assert_eq;
use support::{Address, User};

fn columns(model: &impl Fields) -> Vec<String> {
    model.keys().iter().map(|key| key.to_string()).collect()
}

#[test]
fn default_keys_members_by_name() {
    let address = Address::default();

    assert_eq!(address.street.key(), &FieldKey::from("street"));
    assert_eq!(address.geo.prefix(), "geo_");
    assert_eq!(
        columns(&address),
        ["street", "city", "zip", "geo_lat", "geo_lng"]
    );
}

#[test]
fn key_and_prefix_attributes() {
    let user = User::default();

    assert_eq!(user.office.prefix(), "work_");
    assert_eq!(user.billing.prefix(), "billing__");
    assert!(columns(&user).contains(&"work_street".to_string()));
    assert!(columns(&user).contains(&"billing__geo_lat".to_string()));
}

#[test]
fn raw_identifiers_are_unescaped() {
    #[derive(Debug, Fields)]
    struct Shipment {
        r#type: Field<String>,
    }

    assert_eq!(columns(&Shipment::default()), ["type"]);
}

#[derive(Debug, Fields)]
struct Draft {
    title: Field<String>,
    #[fields(skip)]
    revision: u32,
    #[fields(key = "body_text")]
    body: Field<Option<String>>,
}

#[test]
fn skipped_members_are_not_properties() {
    let draft = Draft::default();

    assert_eq!(draft.revision, 0);
    assert_eq!(draft.properties().len(), 2);
    assert_eq!(columns(&draft), ["title", "body_text"]);
}

#[test]
fn skipped_members_survive_output() {
    let mut draft = Draft::default();
    draft.revision = 3;

    let row: Row = [("title", Value::from("Notes"))].into_iter().collect();
    draft.output(&row).unwrap();

    assert_eq!(draft.revision, 3);
    assert_eq!(draft.title.get().map(String::as_str), Some("Notes"));
    assert_eq!(draft.body.get(), None);
}

#[derive(Debug, Fields)]
struct Envelope<V: Fields> {
    label: Field<String>,
    payload: CompoundField<V>,
}

#[test]
fn generic_models_prefix_their_payload() {
    let envelope = Envelope::<Address>::default();

    assert_eq!(
        columns(&envelope),
        [
            "label",
            "payload_street",
            "payload_city",
            "payload_zip",
            "payload_geo_lat",
            "payload_geo_lng",
        ]
    );
}

#[test]
fn empty_models_have_no_keys() {
    #[derive(Debug, Fields)]
    struct Marker {}

    assert!(Marker::default().keys().is_empty());
    assert!(Marker::default().input_values().is_empty());
}
