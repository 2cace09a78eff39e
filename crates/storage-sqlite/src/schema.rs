diesel::table! {
    recipient_coinjar (id) {
        id -> Text,
        name -> Text,
        relationship -> Text,
        email -> Nullable<Text>,
        created_at -> Timestamp,
        creator_id -> Text,
    }
}

diesel::table! {
    coinjar_contributions (id) {
        id -> Text,
        coinjar_id -> Text,
        // Numeric-string at the boundary; coerced in core.
        amount -> Text,
        contributor_id -> Text,
        created_at -> Timestamp,
    }
}

diesel::table! {
    coinjar_invitations (id) {
        id -> Text,
        coinjar_id -> Text,
        invited_user_id -> Text,
        accepted -> Bool,
        created_at -> Timestamp,
    }
}

diesel::table! {
    form_drafts (draft_key) {
        draft_key -> Text,
        draft_value -> Text,
    }
}

diesel::joinable!(coinjar_contributions -> recipient_coinjar (coinjar_id));
diesel::joinable!(coinjar_invitations -> recipient_coinjar (coinjar_id));

diesel::allow_tables_to_appear_in_same_query!(
    recipient_coinjar,
    coinjar_contributions,
    coinjar_invitations,
);
