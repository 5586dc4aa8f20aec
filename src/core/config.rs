use log::LevelFilter;
use crate::contacts::address_book::{
    Authorization,
    SortOrder,
};

pub trait Config: Send + Sync {
    fn data_dir(&self) -> &str;

    /// Full path of the SQLite address book, resolved against `data_dir`.
    fn address_book(&self) -> String;

    fn authorization(&self) -> Authorization;
    fn sort_order(&self) -> SortOrder;

    fn log_level(&self) -> LevelFilter;
    fn log_file(&self) -> Option<String>;

    #[cfg(feature = "inspect")]
    fn dump(&self);
}
