pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::TomlConfig;

pub use adapters::api::HolidazeClient;
pub use adapters::session::{SessionStore, StaticCredentials};
pub use crate::core::{BookingEngine, BookingOutcome, RejectReason};
pub use domain::model::{
    Booking, BookingProposal, DateRange, SearchCriteria, StayQuote, Venue,
};
pub use utils::error::{HolidazeError, Result};
