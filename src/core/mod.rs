pub mod calendar;
pub mod engine;
pub mod filter;
pub mod validate;

pub use crate::domain::model::{
    Booking, BookingProposal, DateRange, SearchCriteria, StayQuote, Venue,
};
pub use crate::domain::ports::{
    AuthGateway, BookingGateway, ConfigProvider, CredentialProvider, VenueDirectory,
};
pub use crate::utils::error::Result;
pub use engine::{BookingEngine, BookingOutcome};
pub use validate::RejectReason;
