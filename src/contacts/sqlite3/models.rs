use diesel::prelude::*;
use super::schema::{
    people,
    phone_numbers,
};

#[allow(non_snake_case)]
#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = people)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Person {
    pub(crate) id: i32,
    pub(crate) givenName: String,
    pub(crate) familyName: String,
}

#[allow(non_snake_case)]
#[derive(Insertable, Default)]
#[diesel(table_name = people)]
pub(crate) struct NewPerson<'a> {
    pub(crate) id: i32,
    pub(crate) givenName: &'a str,
    pub(crate) familyName: &'a str,
}

#[allow(non_snake_case)]
#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = phone_numbers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct PhoneNumber {
    pub(crate) personId: i32,
    pub(crate) number: String,
}

#[allow(non_snake_case)]
#[derive(Insertable, Default)]
#[diesel(table_name = phone_numbers)]
pub(crate) struct NewPhoneNumber<'a> {
    pub(crate) personId: i32,
    pub(crate) position: i32,
    pub(crate) number: &'a str,
}
