use url::Url;

use crate::{
    Error,
    error::Result,
};

const DIALABLE: &str = "1234567890+";

/// A pending "call this number" confirmation shown from the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialRequest {
    name: String,
    number: String,
}

impl DialRequest {
    pub fn new(name: &str, number: &str) -> Self {
        Self {
            name: name.to_string(),
            number: number.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn title(&self) -> String {
        format!("Call {}", self.name)
    }

    pub fn message(&self) -> String {
        format!("Would you like to call {} at number: {} ?", self.name, self.number)
    }

    pub fn url(&self) -> Result<Url> {
        dial_url(&self.number)
    }
}

/// Builds a `tel://` URL from a human-formatted phone number, keeping only
/// digits and `+`.
pub fn dial_url(number: &str) -> Result<Url> {
    let digits = number.chars()
        .filter(|c| DIALABLE.contains(*c))
        .collect::<String>();

    if digits.is_empty() {
        return Err(Error::Argument(format!("No dialable digits in phone number {:?}", number)));
    }

    Ok(Url::parse(&format!("tel://{}", digits))?)
}
