#![allow(dead_code)]

use fieldkit::{CompoundField, Field, Fields, Row, Value};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Fields)]
#[fields(codec)]
pub struct Geo {
    pub lat: Field<f64>,
    pub lng: Field<f64>,
}

#[derive(Debug, Clone, PartialEq, Fields)]
#[fields(codec)]
pub struct Address {
    pub street: Field<String>,
    pub city: Field<String>,
    pub zip: Field<Option<String>>,
    pub geo: CompoundField<Geo>,
}

#[derive(Debug, Clone, PartialEq, Fields)]
pub struct User {
    pub id: Field<Uuid>,
    pub name: Field<String>,
    pub home: CompoundField<Address>,
    #[fields(key = "work")]
    pub office: CompoundField<Address>,
    #[fields(prefix = "billing__")]
    pub billing: CompoundField<Option<Address>>,
}

pub fn geo(lat: f64, lng: f64) -> Geo {
    let mut geo = Geo::default();
    geo.lat.set(lat);
    geo.lng.set(lng);
    geo
}

pub fn address(street: &str, city: &str) -> Address {
    let mut address = Address::default();
    address.street.set(street);
    address.city.set(city);
    address.zip.set(None::<String>);
    address.geo.set(geo(51.5, -0.1));
    address
}

/// A row as a driver would return it for `User`, with only `home` populated.
pub fn user_row() -> Row {
    [
        ("id", Value::Uuid(Uuid::nil())),
        ("name", Value::from("Ada")),
        ("home_street", Value::from("12 St James's Sq")),
        ("home_city", Value::from("London")),
        ("home_zip", Value::Null),
        ("home_geo_lat", Value::F64(51.5)),
        ("home_geo_lng", Value::F64(-0.1)),
    ]
    .into_iter()
    .collect()
}
