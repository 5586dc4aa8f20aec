pub(crate) mod models;
pub(crate) mod schema;
mod sql;

use diesel::prelude::*;
use diesel::result::Error;

use crate::contacts::address_book::SortOrder;
use crate::contacts::sqlite3::models::{
    Person,
    PhoneNumber,
};

use crate::contacts::sqlite3::schema::people::{
    dsl::people,
    id          as person_id,
    givenName   as person_given,
    familyName  as person_family,
};

use crate::contacts::sqlite3::schema::phone_numbers::{
    dsl::phone_numbers,
    id          as number_id,
    personId    as number_person,
    position    as number_position,
};

pub(crate) fn create_tbs(
    conn: &mut SqliteConnection
) -> bool {
    diesel::sql_query(sql::SET_USER_VERSION).execute(conn).is_ok()             &&
    diesel::sql_query(sql::CREATE_PEOPLE_TABLE).execute(conn).is_ok()          &&
    diesel::sql_query(sql::CREATE_PHONE_NUMBERS_TABLE).execute(conn).is_ok()   &&
    diesel::sql_query(sql::CREATE_PHONE_NUMBERS_INDEX).execute(conn).is_ok()
}

// ----------------------------------------------------------------
// "SELECT id, givenName, familyName FROM people ORDER BY <order>"
// ----------------------------------------------------------------
pub(crate) fn all_people(
    conn: &mut SqliteConnection,
    order: SortOrder,
) -> Result<Vec<Person>, Error> {
    let query = people.select(Person::as_select()).into_boxed();
    let query = match order {
        SortOrder::None         => query.order(person_id.asc()),
        SortOrder::GivenName    => query.order((person_given.asc(), person_family.asc(), person_id.asc())),
        SortOrder::FamilyName   => query.order((person_family.asc(), person_given.asc(), person_id.asc())),
    };
    query.load(conn)
}

// -----------------------------------------------------------------
// "SELECT personId, number FROM phone_numbers \
//        ORDER BY personId, position, id"
// -----------------------------------------------------------------
pub(crate) fn all_phone_numbers(
    conn: &mut SqliteConnection
) -> Result<Vec<PhoneNumber>, Error> {
    phone_numbers
        .select(PhoneNumber::as_select())
        .order((number_person.asc(), number_position.asc(), number_id.asc()))
        .load(conn)
}

#[cfg(test)]
pub(crate) fn put_person(
    conn: &mut SqliteConnection,
    v: models::NewPerson
) -> Result<bool, Error> {
    use crate::contacts::sqlite3::schema::people;
    diesel::insert_into(people::table)
        .values(&v)
        .execute(conn)
        .map(|num| num > 0)
}

#[cfg(test)]
pub(crate) fn put_phone_number(
    conn: &mut SqliteConnection,
    v: models::NewPhoneNumber
) -> Result<bool, Error> {
    use crate::contacts::sqlite3::schema::phone_numbers;
    diesel::insert_into(phone_numbers::table)
        .values(&v)
        .execute(conn)
        .map(|num| num > 0)
}
