diesel::table! {
    products (id) {
        id -> Integer,
        name -> Text,
        price -> Text,
        image -> Text,
        description -> Nullable<Text>,
        category -> Nullable<Text>,
        sizes -> Nullable<Text>,
        colors -> Nullable<Text>,
        stock -> Integer,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    users (id) {
        id -> Integer,
        name -> Text,
        email -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::allow_tables_to_appear_in_same_query!(products, users);
