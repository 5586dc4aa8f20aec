use std::fs;
use diesel::prelude::*;
use serial_test::serial;

use crate::contacts::{
    address_book::{
        AddressBook,
        AddressBookBuilder,
        Authorization,
        SortOrder,
    },
    contact_index::ContactIndex,
    contact_source::ContactSource,
    sqlite3::{
        models::{NewPerson, NewPhoneNumber},
        put_person,
        put_phone_number,
    },
};

const PEOPLE: &[(i32, &str, &str, &[&str])] = &[
    (1, "Stephanie", "Sayoush",     &["392-173-2018", "839-103-4812"]),
    (2, "Amanda",    "Hill",        &["(617)334-0584"]),
    (3, "Billy",     "Alvarez",     &["389-291-4891"]),
    (4, "Andrea",    "Owens",       &["(638) 382-3829", "(372) 382-2719"]),
    (5, "Noah",      "Nonumber",    &[]),
    (6, "",          "",            &["000-000-0000"]),
    (7, "",          "Salazar",     &["(302) 281-2393"]),
    (8, "Émile",     "Zola",        &["+33 1 23 45 67 89"]),
];

fn open_book(path: &str, access: Authorization, order: SortOrder) -> AddressBook {
    _ = fs::remove_file(path);
    let book = AddressBookBuilder::new(path)
        .with_authorization(access)
        .with_sort_order(order)
        .build();
    match book {
        Ok(v) => v,
        Err(e) => panic!("opening address book error: {}", e),
    }
}

fn seed(path: &str) {
    let mut conn = SqliteConnection::establish(path).unwrap();
    for (id, given, family, numbers) in PEOPLE {
        let person = NewPerson { id: *id, givenName: given, familyName: family };
        assert_eq!(put_person(&mut conn, person).unwrap(), true);

        // Stored out of order; position decides the yield order.
        for (pos, number) in numbers.iter().enumerate().rev() {
            let number = NewPhoneNumber { personId: *id, position: pos as i32, number };
            assert_eq!(put_phone_number(&mut conn, number).unwrap(), true);
        }
    }
}

fn enumerate_names(book: &AddressBook, keyword: Option<&str>) -> (bool, Vec<String>) {
    let mut names = Vec::new();
    let ok = book.enumerate(keyword, &mut |c| {
        names.push(c.full_name().to_string());
        true
    });
    (ok, names)
}

fn remove_book(path: &str) {
    _ = fs::remove_file(path)
}

#[test]
#[serial]
fn test_enumerate_by_given_name() {
    let path = "addressbook_given.db";
    let book = open_book(path, Authorization::Authorized, SortOrder::GivenName);
    seed(path);

    let (ok, names) = enumerate_names(&book, None);
    assert_eq!(ok, true);
    assert_eq!(names, vec![
        "Salazar",
        "Amanda Hill",
        "Andrea Owens",
        "Billy Alvarez",
        "Stephanie Sayoush",
        "Émile Zola",
    ]);
    remove_book(path);
}

#[test]
#[serial]
fn test_enumerate_by_family_name_and_store_order() {
    let path = "addressbook_family.db";
    let mut book = open_book(path, Authorization::Authorized, SortOrder::FamilyName);
    seed(path);

    let (_, names) = enumerate_names(&book, None);
    assert_eq!(names, vec![
        "Billy Alvarez",
        "Amanda Hill",
        "Andrea Owens",
        "Salazar",
        "Stephanie Sayoush",
        "Émile Zola",
    ]);
    assert_eq!(book.sort_order(), SortOrder::FamilyName);
    drop(book);

    book = AddressBookBuilder::new(path)
        .with_authorization(Authorization::Authorized)
        .with_sort_order(SortOrder::None)
        .build()
        .unwrap();
    let (_, names) = enumerate_names(&book, None);
    assert_eq!(names[0], "Stephanie Sayoush");
    assert_eq!(names[1], "Amanda Hill");
    remove_book(path);
}

#[test]
#[serial]
fn test_phone_numbers_in_position_order() {
    let path = "addressbook_numbers.db";
    let book = open_book(path, Authorization::Authorized, SortOrder::GivenName);
    seed(path);

    let mut found = Vec::new();
    let ok = book.enumerate(Some("Andrea"), &mut |c| {
        found.push(c);
        true
    });
    assert_eq!(ok, true);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].phone_numbers(), &["(638) 382-3829", "(372) 382-2719"]);
    remove_book(path);
}

#[test]
#[serial]
fn test_keyword_is_case_insensitive() {
    let path = "addressbook_keyword.db";
    let book = open_book(path, Authorization::Authorized, SortOrder::GivenName);
    seed(path);

    let (ok, names) = enumerate_names(&book, Some("sa"));
    assert_eq!(ok, true);
    assert_eq!(names, vec!["Salazar", "Stephanie Sayoush"]);

    // Decomposed "E" + combining acute matches the precomposed name.
    let (ok, names) = enumerate_names(&book, Some("e\u{301}mile"));
    assert_eq!(ok, true);
    assert_eq!(names, vec!["Émile Zola"]);

    let (ok, names) = enumerate_names(&book, Some("Nonumber"));
    assert_eq!(ok, true);
    assert_eq!(names.is_empty(), true);
    remove_book(path);
}

#[test]
#[serial]
fn test_stop_early() {
    let path = "addressbook_stop.db";
    let book = open_book(path, Authorization::Authorized, SortOrder::GivenName);
    seed(path);

    let mut visited = 0;
    let ok = book.enumerate(None, &mut |_| {
        visited += 1;
        false
    });
    assert_eq!(ok, true);
    assert_eq!(visited, 1);
    remove_book(path);
}

#[test]
#[serial]
fn test_unauthorized_access() {
    let path = "addressbook_denied.db";
    let mut book = open_book(path, Authorization::Denied, SortOrder::GivenName);
    seed(path);

    for access in [Authorization::NotDetermined, Authorization::Restricted, Authorization::Denied] {
        book.set_authorization(access);
        assert_eq!(book.authorization(), access);
        let (ok, names) = enumerate_names(&book, None);
        assert_eq!(ok, false);
        assert_eq!(names.is_empty(), true);
    }

    book.set_authorization(Authorization::Authorized);
    let (ok, names) = enumerate_names(&book, None);
    assert_eq!(ok, true);
    assert_eq!(names.len(), 6);
    remove_book(path);
}

#[test]
#[serial]
fn test_missing_store_reports_failure() {
    let path = "addressbook_missing.db";
    let book = open_book(path, Authorization::Authorized, SortOrder::GivenName);
    remove_book(path);
    fs::create_dir_all(path).unwrap();

    let (ok, names) = enumerate_names(&book, None);
    assert_eq!(ok, false);
    assert_eq!(names.is_empty(), true);
    _ = fs::remove_dir_all(path);
}

#[test]
#[serial]
fn test_index_over_address_book() {
    let path = "addressbook_index.db";
    let book = open_book(path, Authorization::Authorized, SortOrder::GivenName);
    seed(path);

    let mut index = ContactIndex::unfiltered(Box::new(book));
    assert_eq!(index.section_headers(), vec!["A", "B", "S", "É"]);
    assert_eq!(index.count_in_section(2), 2);
    assert_eq!(index.contact_at(0, 2).unwrap().full_name(), "Salazar");
    assert_eq!(index.contact_at(1, 2).unwrap().full_name(), "Stephanie Sayoush");

    index.set_filter(Some("hill"));
    assert_eq!(index.section_headers(), vec!["A"]);
    assert_eq!(index.contact_at(0, 0).unwrap().primary_number(), Some("(617)334-0584"));
    remove_book(path);
}

#[test]
fn test_parse_settings() {
    assert_eq!(Authorization::try_from("authorized").unwrap(), Authorization::Authorized);
    assert_eq!(Authorization::try_from("notDetermined").unwrap(), Authorization::NotDetermined);
    assert_eq!(Authorization::try_from("granted").is_err(), true);
    assert_eq!(Authorization::Restricted.to_string(), "restricted");
    assert_eq!(Authorization::default(), Authorization::NotDetermined);

    assert_eq!(SortOrder::try_from("familyName").unwrap(), SortOrder::FamilyName);
    assert_eq!(SortOrder::try_from("none").unwrap(), SortOrder::None);
    assert_eq!(SortOrder::try_from("surname").is_err(), true);
    assert_eq!(SortOrder::GivenName.to_string(), "givenName");
    assert_eq!(SortOrder::default(), SortOrder::GivenName);
}
