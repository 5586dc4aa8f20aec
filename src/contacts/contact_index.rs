use std::collections::BTreeMap;
use std::fmt;
use log::{debug, warn};

use super::{
    contact::Contact,
    contact_source::ContactSource,
};

/// Sectioned, filterable view over a `ContactSource`.
///
/// Contacts are grouped by the first character of their full name. Groups
/// keep the order the source yielded them in; sections are ordered by
/// their key. Every change of the filter keyword re-reads the source from
/// scratch.
///
/// When the source reports that it could not enumerate, the index becomes
/// unavailable: it has no sections, and every lookup comes back empty.
pub struct ContactIndex {
    source: Box<dyn ContactSource>,
    filter: Option<String>,

    // None exactly when the last enumeration failed.
    groups: Option<BTreeMap<String, Vec<Contact>>>,
}

impl ContactIndex {
    pub fn new(source: Box<dyn ContactSource>, filter: Option<&str>) -> Self {
        let mut index = Self {
            source,
            filter: filter.map(|v| v.to_string()),
            groups: None,
        };
        index.populate();
        index
    }

    pub fn unfiltered(source: Box<dyn ContactSource>) -> Self {
        Self::new(source, None)
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Replaces the filter keyword and rebuilds every section before
    /// returning, even when the keyword did not change.
    pub fn set_filter(&mut self, filter: Option<&str>) {
        self.filter = filter.map(|v| v.to_string());
        self.populate();
    }

    pub fn section_headers(&self) -> Vec<String> {
        self.groups.as_ref()
            .map(|groups| groups.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn section_count(&self) -> usize {
        self.groups.as_ref().map_or(0, |v| v.len())
    }

    pub fn section_header(&self, section: usize) -> Option<&str> {
        self.groups.as_ref()?
            .keys()
            .nth(section)
            .map(|v| v.as_str())
    }

    pub fn count_in_section(&self, section: usize) -> usize {
        self.section(section).map_or(0, |v| v.len())
    }

    pub fn contact_at(&self, index: usize, section: usize) -> Option<&Contact> {
        self.section(section)?.get(index)
    }

    fn section(&self, section: usize) -> Option<&Vec<Contact>> {
        self.groups.as_ref()?
            .values()
            .nth(section)
    }

    fn populate(&mut self) {
        let mut results: BTreeMap<String, Vec<Contact>> = BTreeMap::new();
        let mut total = 0;

        let completed = self.source.enumerate(self.filter.as_deref(), &mut |contact| {
            total += 1;
            results.entry(contact.grouping_key())
                .or_default()
                .push(contact);
            true
        });

        if !completed {
            warn!("Contact source is unavailable (filter: {:?}), dropped {} partial results",
                self.filter, total);
            self.groups = None;
            return;
        }

        debug!("Indexed {} contacts into {} sections (filter: {:?})",
            total, results.len(), self.filter);
        self.groups = Some(results);
    }
}

impl fmt::Display for ContactIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(groups) = self.groups.as_ref() else {
            return write!(f, "<unavailable>");
        };

        for (key, contacts) in groups.iter() {
            writeln!(f, "[{}]", key)?;
            for contact in contacts.iter() {
                writeln!(f, "    {}", contact)?;
            }
        }
        Ok(())
    }
}
