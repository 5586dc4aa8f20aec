pub(crate) const SET_USER_VERSION: &str = "PRAGMA user_version = 1";

pub(crate) const CREATE_PEOPLE_TABLE: &str = "
        CREATE TABLE IF NOT EXISTS people(\
        id INTEGER NOT NULL PRIMARY KEY, \
        givenName TEXT NOT NULL DEFAULT '', \
        familyName TEXT NOT NULL DEFAULT ''\
        )
    ";

pub(crate) const CREATE_PHONE_NUMBERS_TABLE: &str = "
        CREATE TABLE IF NOT EXISTS phone_numbers(\
        id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT, \
        personId INTEGER NOT NULL REFERENCES people(id) ON DELETE CASCADE, \
        position INTEGER NOT NULL DEFAULT 0, \
        number TEXT NOT NULL\
        )
    ";

pub(crate) const CREATE_PHONE_NUMBERS_INDEX: &str = "
        CREATE INDEX IF NOT EXISTS idx_phone_numbers_person ON phone_numbers(personId, position)
    ";
