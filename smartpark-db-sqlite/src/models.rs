use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub password: &'a str,
    pub verified: bool,
    pub role: i16,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub verified: bool,
    pub role: i16,
    pub created_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = spaces)]
pub struct NewSpace<'a> {
    pub owner_id: i64,
    pub title: &'a str,
    pub description: &'a str,
    pub address: &'a str,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub price_per_hour: f64,
    pub availability_start: i16,
    pub availability_end: i16,
    pub active: bool,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct SpaceEntity {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub description: String,
    pub address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub price_per_hour: f64,
    pub availability_start: i16,
    pub availability_end: i16,
    pub active: bool,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = space_images)]
pub struct NewSpaceImage<'a> {
    pub space_id: i64,
    pub url: &'a str,
    pub is_primary: bool,
    pub uploaded_at: i64,
}

#[derive(Queryable)]
pub struct SpaceImageEntity {
    pub id: i64,
    pub space_id: i64,
    pub url: String,
    pub is_primary: bool,
    pub uploaded_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = bookings)]
pub struct NewBooking {
    pub space_id: i64,
    pub customer_id: i64,
    pub owner_id: i64,
    pub start_time: i64,
    pub end_time: i64,
    pub total_price: f64,
    pub status: i16,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct BookingEntity {
    pub id: i64,
    pub space_id: i64,
    pub customer_id: i64,
    pub owner_id: i64,
    pub start_time: i64,
    pub end_time: i64,
    pub total_price: f64,
    pub status: i16,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = feedbacks)]
pub struct NewFeedback<'a> {
    pub booking_id: i64,
    pub rating: i16,
    pub comment: &'a str,
    pub submitted_at: i64,
}

#[derive(Queryable)]
pub struct FeedbackEntity {
    pub id: i64,
    pub booking_id: i64,
    pub rating: i16,
    pub comment: String,
    pub submitted_at: i64,
}
