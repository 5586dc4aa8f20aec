pub mod core;
pub mod contacts;

pub use crate::core::{
    error::{self, Error},
    config,
    default_configuration as configuration,
    logger,
};

pub use crate::contacts::{
    Contact,
    ContactBuilder,
    ContactSource,
    ContactIndex,
    ContactDetail,
    ArraySource,
    AddressBook,
    AddressBookBuilder,
    Authorization,
    SortOrder,
    DialRequest,
};

fn create_dirs(input: &str) -> crate::core::Result<()> {
    let path = std::path::Path::new(input);
    if path.exists() {
        return Ok(())
    }

    std::fs::create_dir_all(path).map_err(|e|
         Error::Io(format!("Creating directory path {} error: {e}", input))
    )
}
