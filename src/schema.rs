diesel::table! {
    users (id) {
        id -> Text,
        email -> Text,
        name -> Nullable<Text>,
        is_admin -> Bool,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    accounts (id) {
        id -> Text,
        user_id -> Text,
        name -> Text,
        account_type -> Text,
        currency -> Text,
        is_active -> Bool,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    transactions (id) {
        id -> Text,
        account_id -> Text,
        transaction_type -> Text,
        amount -> Nullable<Text>,
        quantity -> Nullable<Text>,
        price -> Nullable<Text>,
        fee -> Nullable<Text>,
        cost -> Nullable<Text>,
        trade_time -> Timestamp,
        note -> Nullable<Text>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    gl_accounts (id) {
        id -> Text,
        user_id -> Text,
        name -> Text,
        kind -> Text,
        currency -> Text,
        role -> Nullable<Text>,
        linked_account_id -> Nullable<Text>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    gl_entries (id) {
        id -> Text,
        user_id -> Text,
        entry_date -> Timestamp,
        memo -> Nullable<Text>,
        source -> Nullable<Text>,
        ref_tx_id -> Nullable<Text>,
        is_deleted -> Bool,
        deleted_at -> Nullable<Timestamp>,
        created_at -> Timestamp,
    }
}

diesel::table! {
    gl_lines (id) {
        id -> Text,
        entry_id -> Text,
        gl_account_id -> Text,
        side -> Text,
        amount -> Text,
        currency -> Text,
        note -> Nullable<Text>,
    }
}

diesel::joinable!(accounts -> users (user_id));
diesel::joinable!(transactions -> accounts (account_id));
diesel::joinable!(gl_accounts -> users (user_id));
diesel::joinable!(gl_entries -> users (user_id));
diesel::joinable!(gl_lines -> gl_entries (entry_id));
diesel::joinable!(gl_lines -> gl_accounts (gl_account_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    accounts,
    transactions,
    gl_accounts,
    gl_entries,
    gl_lines,
);
