diesel::table! {
    people (id) {
        id -> Integer,
        givenName -> Text,
        familyName -> Text,
    }
}

diesel::table! {
    phone_numbers (id) {
        id -> Integer,
        personId -> Integer,
        position -> Integer,
        number -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(people, phone_numbers);
