use std::fs;
use log::debug;

use crate::{
    Error,
    error::Result,
};

use super::{
    contact::Contact,
    contact_source::ContactSource,
};

/// In-memory contact source over a fixed list, yielding in list order.
///
/// Names are matched by case-sensitive substring containment.
#[derive(Debug, Clone, Default)]
pub struct ArraySource {
    contacts: Vec<Contact>,
    failing: bool,
}

impl ArraySource {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self { contacts, failing: false }
    }

    /// A source whose enumeration always fails, standing in for an address
    /// book the user never granted access to.
    pub fn failing() -> Self {
        Self { contacts: Vec::new(), failing: true }
    }

    /// Loads a JSON array of `{"fullName": .., "phoneNumbers": [..]}` objects.
    pub fn load(path: &str) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| {
            Error::Io(format!("Reading contacts file {} error: {}", path, e))
        })?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let contacts = serde_json::from_str::<Vec<Contact>>(data)?;
        debug!("Loaded {} contacts into memory", contacts.len());
        Ok(Self::new(contacts))
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }
}

impl ContactSource for ArraySource {
    fn enumerate(&self, keyword: Option<&str>, visit: &mut dyn FnMut(Contact) -> bool) -> bool {
        if self.failing {
            return false;
        }

        let matched = self.contacts.iter()
            .filter(|c| c.has_phone_numbers())
            .filter(|c| keyword.map_or(true, |k| c.full_name().contains(k)));

        for contact in matched {
            if !visit(contact.clone()) {
                break;
            }
        }
        true
    }
}
