use super::contact::Contact;

/// Anything that can enumerate address-book contacts for a `ContactIndex`.
pub trait ContactSource {
    /// Visits every contact whose name matches `keyword`, or every contact
    /// when `keyword` is `None`. Only contacts with at least one phone
    /// number are visited, and returning `false` from `visit` stops the
    /// enumeration early.
    ///
    /// Returns `false` when the contacts could not be read at all, in which
    /// case `visit` has not been called. An early stop requested by the
    /// visitor still counts as success.
    fn enumerate(&self, keyword: Option<&str>, visit: &mut dyn FnMut(Contact) -> bool) -> bool;
}

impl<T: ContactSource + ?Sized> ContactSource for Box<T> {
    fn enumerate(&self, keyword: Option<&str>, visit: &mut dyn FnMut(Contact) -> bool) -> bool {
        (**self).enumerate(keyword, visit)
    }
}
