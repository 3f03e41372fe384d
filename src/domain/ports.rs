use crate::domain::model::{AuthSession, Booking, NewBooking, Venue, VenuePage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read access to the venue catalog.
#[async_trait]
pub trait VenueDirectory: Send + Sync {
    async fn venues(&self, page: u32) -> Result<VenuePage>;
    async fn venue_with_bookings(&self, venue_id: &str) -> Result<Venue>;
}

/// Booking creation and cancellation against the external store. The local
/// validator is advisory only; implementations surface the server's own
/// conflict verdict.
#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn create_booking(&self, new_booking: &NewBooking) -> Result<Booking>;
    async fn cancel_booking(&self, booking_id: &str) -> Result<()>;
    async fn profile_bookings(&self, profile_name: &str) -> Result<Vec<Booking>>;
}

#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession>;
}

/// Read-only view of the signed-in session. The availability core never sees
/// credentials; only the API adapter consumes this.
pub trait CredentialProvider: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn profile_name(&self) -> Option<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
    fn page_size(&self) -> usize;
}
