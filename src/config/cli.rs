use crate::config::toml_config::DEFAULT_BASE_URL;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "holidaze")]
#[command(about = "Search, book and manage Holidaze venue stays")]
pub struct CliConfig {
    /// Base URL of the Holidaze API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// API key sent as X-Noroff-API-Key
    #[arg(long, env = "NOROFF_API_KEY")]
    pub api_key: Option<String>,

    /// Read API settings from a TOML file instead of flags
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where the signed-in session is stored
    #[arg(long, default_value = ".holidaze/session.json")]
    pub session_file: String,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    /// Venues fetched per catalog page
    #[arg(long, default_value = "100")]
    pub page_size: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Search the venue catalog
    Search {
        /// Country to match (case-insensitive substring)
        #[arg(long)]
        country: Option<String>,

        /// Minimum guest capacity
        #[arg(long)]
        guests: Option<u32>,

        #[arg(long)]
        check_in: Option<NaiveDate>,

        #[arg(long)]
        check_out: Option<NaiveDate>,
    },

    /// Show the calendar dates a venue cannot be booked on
    Calendar { venue_id: String },

    /// Validate and create a booking
    Book {
        venue_id: String,

        #[arg(long)]
        check_in: Option<NaiveDate>,

        #[arg(long)]
        check_out: Option<NaiveDate>,

        #[arg(long, default_value = "1")]
        guests: u32,
    },

    /// Cancel a booking
    Cancel { booking_id: String },

    /// List the signed-in profile's bookings, newest first
    Bookings,

    /// Sign in and store the session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Remove the stored session
    Logout,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        validation::validate_positive_number("page_size", self.page_size, 1)?;
        validation::validate_path("session_file", &self.session_file)?;
        Ok(())
    }
}
