pub mod contact;
pub mod contact_source;
pub mod contact_index;
pub mod contact_detail;

pub mod array_source;
pub mod address_book;
pub mod dialer;

pub(crate) mod sqlite3;

pub use contact::{Contact, ContactBuilder};
pub use contact_source::ContactSource;
pub use contact_index::ContactIndex;
pub use contact_detail::ContactDetail;
pub use array_source::ArraySource;
pub use address_book::{
    AddressBook,
    AddressBookBuilder,
    Authorization,
    SortOrder,
};
pub use dialer::DialRequest;
