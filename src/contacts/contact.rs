use std::fmt;
use serde::{Serialize, Deserialize};

use crate::{
    Error,
    error::Result,
};

pub struct ContactBuilder {
    full_name       : String,
    phone_numbers   : Vec<String>,
}

impl ContactBuilder {
    pub fn new(full_name: &str) -> Self {
        Self {
            full_name       : full_name.to_string(),
            phone_numbers   : Vec::new(),
        }
    }

    pub fn with_phone_number(&mut self, number: &str) -> &mut Self {
        self.phone_numbers.push(number.to_string());
        self
    }

    pub fn with_phone_numbers(&mut self, numbers: &[&str]) -> &mut Self {
        self.phone_numbers.extend(numbers.iter().map(|v| v.to_string()));
        self
    }

    pub fn build(&mut self) -> Result<Contact> {
        if self.phone_numbers.is_empty() {
            return Err(Error::Argument(format!("Contact {} has no phone numbers", self.full_name)));
        }
        Ok(Contact::new(self))
    }
}

/// An immutable address-book entry: a formatted full name and its
/// phone numbers, in the order the store keeps them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "fullName")]
    full_name: String,

    #[serde(rename = "phoneNumbers")]
    phone_numbers: Vec<String>,
}

impl Contact {
    pub(crate) fn new(b: &mut ContactBuilder) -> Self {
        Self {
            full_name:      std::mem::take(&mut b.full_name),
            phone_numbers:  std::mem::take(&mut b.phone_numbers),
        }
    }

    pub(crate) fn from_parts(full_name: String, phone_numbers: Vec<String>) -> Self {
        Self { full_name, phone_numbers }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn phone_numbers(&self) -> &[String] {
        &self.phone_numbers
    }

    pub fn primary_number(&self) -> Option<&str> {
        self.phone_numbers.first().map(|v| v.as_str())
    }

    pub fn has_phone_numbers(&self) -> bool {
        !self.phone_numbers.is_empty()
    }

    /// Section key of this contact: the first character of the full name,
    /// or the empty string for a nameless contact.
    pub fn grouping_key(&self) -> String {
        grouping_key(&self.full_name)
    }
}

pub fn grouping_key(full_name: &str) -> String {
    full_name.chars()
        .next()
        .map(String::from)
        .unwrap_or_default()
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name)?;
        if let Some(number) = self.primary_number() {
            write!(f, " ({})", number)?;
        }
        if self.phone_numbers.len() > 1 {
            write!(f, " +{}", self.phone_numbers.len() - 1)?;
        }
        Ok(())
    }
}
