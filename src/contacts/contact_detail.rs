use super::{
    contact::Contact,
    dialer::DialRequest,
};

/// Detail view of a single contact: its name and one row per phone number.
#[derive(Debug, Clone)]
pub struct ContactDetail {
    name: String,
    phone_numbers: Vec<String>,
}

impl ContactDetail {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn row_count(&self) -> usize {
        self.phone_numbers.len()
    }

    pub fn row(&self, row: usize) -> Option<String> {
        self.phone_numbers.get(row).map(|v| format!("📞 {}", v))
    }

    pub fn dial_request(&self, row: usize) -> Option<DialRequest> {
        self.phone_numbers.get(row).map(|number| {
            DialRequest::new(&self.name, number)
        })
    }
}

impl From<&Contact> for ContactDetail {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.full_name().to_string(),
            phone_numbers: contact.phone_numbers().to_vec(),
        }
    }
}
