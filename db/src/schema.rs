table! {
    games (id) {
        id -> Int4,
        title -> Varchar,
        genre -> Nullable<Varchar>,
        platform -> Nullable<Varchar>,
        price -> Nullable<Int4>,
        created_at -> Timestamptz,
        updated_at -> Nullable<Timestamptz>,
    }
}

table! {
    reviews (id) {
        id -> Int4,
        score -> Nullable<Int4>,
        comment -> Nullable<Varchar>,
        created_at -> Timestamptz,
        updated_at -> Nullable<Timestamptz>,
        game_id -> Int4,
        user_id -> Int4,
    }
}

table! {
    users (id) {
        id -> Int4,
        name -> Nullable<Varchar>,
        created_at -> Timestamptz,
        updated_at -> Nullable<Timestamptz>,
    }
}

joinable!(reviews -> games (game_id));
joinable!(reviews -> users (user_id));

allow_tables_to_appear_in_same_query!(
    games,
    reviews,
    users,
);
