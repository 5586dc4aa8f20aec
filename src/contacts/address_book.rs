use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use diesel::prelude::*;
use log::{debug, error, info};
use unicode_normalization::UnicodeNormalization;

use crate::{
    create_dirs,
    Error,
    error::Result,
};

use super::{
    contact::Contact,
    contact_source::ContactSource,
    sqlite3::{
        create_tbs,
        all_people,
        all_phone_numbers,
    },
};

/// Whether the user allowed this application to read the address book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Authorization {
    #[default]
    NotDetermined,
    Restricted,
    Denied,
    Authorized,
}

impl TryFrom<&str> for Authorization {
    type Error = Error;
    fn try_from(input: &str) -> Result<Self> {
        match input {
            "notDetermined" => Ok(Authorization::NotDetermined),
            "restricted"    => Ok(Authorization::Restricted),
            "denied"        => Ok(Authorization::Denied),
            "authorized"    => Ok(Authorization::Authorized),
            _ => Err(Error::Argument(format!("Unknown access setting: {}", input))),
        }
    }
}

impl fmt::Display for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            Authorization::NotDetermined    => "notDetermined",
            Authorization::Restricted       => "restricted",
            Authorization::Denied           => "denied",
            Authorization::Authorized       => "authorized",
        };
        write!(f, "{}", str)
    }
}

/// Order the address book yields people in. `GivenName` is the user default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    None,
    #[default]
    GivenName,
    FamilyName,
}

impl TryFrom<&str> for SortOrder {
    type Error = Error;
    fn try_from(input: &str) -> Result<Self> {
        match input {
            "none"          => Ok(SortOrder::None),
            "givenName"     => Ok(SortOrder::GivenName),
            "familyName"    => Ok(SortOrder::FamilyName),
            _ => Err(Error::Argument(format!("Unknown sort order: {}", input))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            SortOrder::None         => "none",
            SortOrder::GivenName    => "givenName",
            SortOrder::FamilyName   => "familyName",
        };
        write!(f, "{}", str)
    }
}

pub struct AddressBookBuilder<'a> {
    path: &'a str,
    access: Authorization,
    order: SortOrder,
}

impl<'a> AddressBookBuilder<'a> {
    pub fn new(path: &'a str) -> Self {
        Self {
            path,
            access: Authorization::NotDetermined,
            order: SortOrder::default(),
        }
    }

    pub fn with_authorization(&mut self, access: Authorization) -> &mut Self {
        self.access = access;
        self
    }

    pub fn with_sort_order(&mut self, order: SortOrder) -> &mut Self {
        self.order = order;
        self
    }

    /// Opens (creating if needed) the SQLite address book at the given path.
    pub fn build(&mut self) -> Result<AddressBook> {
        if let Some(parent) = Path::new(self.path).parent() {
            if !parent.as_os_str().is_empty() {
                create_dirs(&parent.display().to_string())?;
            }
        }

        let mut conn = SqliteConnection::establish(self.path)?;
        if !create_tbs(&mut conn) {
            return Err(Error::State(format!("Failed to create address book tables in {}", self.path)));
        }

        info!("Opened address book {} (access: {}, order: {})", self.path, self.access, self.order);
        Ok(AddressBook {
            path: self.path.to_string(),
            access: self.access,
            order: self.order,
        })
    }
}

/// Contact source backed by an SQLite address book.
///
/// A fresh connection is established for every enumeration. Nothing is
/// visited unless access has been authorized. Names match by
/// case-insensitive substring on NFC-normalized text.
#[derive(Debug)]
pub struct AddressBook {
    path: String,
    access: Authorization,
    order: SortOrder,
}

impl AddressBook {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn authorization(&self) -> Authorization {
        self.access
    }

    pub fn set_authorization(&mut self, access: Authorization) {
        self.access = access;
    }

    pub fn sort_order(&self) -> SortOrder {
        self.order
    }

    fn load(&self) -> Result<Vec<Contact>> {
        let mut conn = SqliteConnection::establish(&self.path)?;
        let persons = all_people(&mut conn, self.order)?;

        let mut numbers: HashMap<i32, Vec<String>> = HashMap::new();
        for row in all_phone_numbers(&mut conn)? {
            numbers.entry(row.personId).or_default().push(row.number);
        }

        let contacts = persons.into_iter().filter_map(|p| {
            let name = format_full_name(&p.givenName, &p.familyName)?;
            let phones = numbers.remove(&p.id)?;
            Some(Contact::from_parts(name, phones))
        }).collect::<Vec<_>>();

        Ok(contacts)
    }
}

impl ContactSource for AddressBook {
    fn enumerate(&self, keyword: Option<&str>, visit: &mut dyn FnMut(Contact) -> bool) -> bool {
        if self.access != Authorization::Authorized {
            debug!("Address book access is {}, nothing to enumerate", self.access);
            return false;
        }

        let contacts = match self.load() {
            Ok(v) => v,
            Err(e) => {
                error!("Reading address book {} error: {e}", self.path);
                return false;
            }
        };

        let needle = keyword.map(normalize);
        for contact in contacts {
            if let Some(needle) = needle.as_ref() {
                if !normalize(contact.full_name()).contains(needle.as_str()) {
                    continue;
                }
            }
            if !visit(contact) {
                break;
            }
        }
        true
    }
}

fn format_full_name(given: &str, family: &str) -> Option<String> {
    let name = format!("{} {}", given.trim(), family.trim());
    let name = name.trim();
    match name.is_empty() {
        true => None,
        false => Some(name.to_string()),
    }
}

fn normalize(input: &str) -> String {
    input.nfc().collect::<String>().to_lowercase()
}

