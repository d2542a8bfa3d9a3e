// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in seconds.
// Availability bounds are stored as minutes since midnight.

table! {
    users (id) {
        id -> BigInt,
        username -> Text,
        email -> Text,
        phone -> Nullable<Text>,
        password -> Text,
        verified -> Bool,
        role -> SmallInt,
        created_at -> BigInt,
    }
}

table! {
    spaces (id) {
        id -> BigInt,
        owner_id -> BigInt,
        title -> Text,
        description -> Text,
        address -> Text,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
        price_per_hour -> Double,
        availability_start -> SmallInt,
        availability_end -> SmallInt,
        active -> Bool,
        created_at -> BigInt,
    }
}

joinable!(spaces -> users (owner_id));

table! {
    space_images (id) {
        id -> BigInt,
        space_id -> BigInt,
        url -> Text,
        is_primary -> Bool,
        uploaded_at -> BigInt,
    }
}

joinable!(space_images -> spaces (space_id));

table! {
    bookings (id) {
        id -> BigInt,
        space_id -> BigInt,
        customer_id -> BigInt,
        owner_id -> BigInt,
        start_time -> BigInt,
        end_time -> BigInt,
        total_price -> Double,
        status -> SmallInt,
        created_at -> BigInt,
    }
}

// No joinable!(bookings -> users) because of the two user columns.
joinable!(bookings -> spaces (space_id));

table! {
    feedbacks (id) {
        id -> BigInt,
        booking_id -> BigInt,
        rating -> SmallInt,
        comment -> Text,
        submitted_at -> BigInt,
    }
}

joinable!(feedbacks -> bookings (booking_id));

allow_tables_to_appear_in_same_query!(users, spaces, space_images, bookings, feedbacks);
