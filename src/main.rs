use clap::Parser;
use holidaze::adapters::session::SessionStore;
use holidaze::config::{CliConfig, Command, TomlConfig};
use holidaze::core::{BookingEngine, BookingOutcome};
use holidaze::domain::model::{BookingProposal, SearchCriteria};
use holidaze::domain::ports::{AuthGateway, ConfigProvider, CredentialProvider};
use holidaze::utils::error::{ErrorSeverity, HolidazeError};
use holidaze::utils::{logger, validation::Validate};
use holidaze::HolidazeClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting holidaze CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(3);
    }

    let session = SessionStore::new(&config.session_file);

    let result = match &config.config {
        Some(path) => match TomlConfig::from_file(path).and_then(|toml| {
            toml.validate()?;
            Ok(toml)
        }) {
            Ok(toml) => run(toml, session, config.command.clone()).await,
            Err(e) => Err(e),
        },
        None => run(config.clone(), session, config.command.clone()).await,
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run<C: ConfigProvider>(
    provider: C,
    session: SessionStore,
    command: Command,
) -> holidaze::Result<()> {
    let client = HolidazeClient::new(provider, session.clone())?;

    match command {
        Command::Search {
            country,
            guests,
            check_in,
            check_out,
        } => {
            let criteria = SearchCriteria {
                country,
                guests,
                check_in,
                check_out,
            };
            let engine = BookingEngine::new(client);
            let venues = engine.search(&criteria).await?;

            if venues.is_empty() {
                println!("No venues match the search.");
                return Ok(());
            }
            for venue in &venues {
                println!(
                    "🏠 {} in {} ({} guests max, {:.2}/night) [{}]",
                    venue.name,
                    venue
                        .location
                        .country
                        .as_deref()
                        .unwrap_or("unknown location"),
                    venue.max_guests,
                    venue.price,
                    venue.id
                );
            }
            println!("✅ {} venue(s) found", venues.len());
        }

        Command::Calendar { venue_id } => {
            let engine = BookingEngine::new(client);
            let (venue, disabled) = engine.availability(&venue_id).await?;

            println!("📅 Unavailable dates for '{}':", venue.name);
            if disabled.is_empty() {
                println!("none, the venue is fully open");
            } else {
                for day in &disabled {
                    println!("  {}", day);
                }
            }
        }

        Command::Book {
            venue_id,
            check_in,
            check_out,
            guests,
        } => {
            let engine = BookingEngine::new(client);
            let proposal = BookingProposal {
                date_from: check_in,
                date_to: check_out,
                guests,
            };

            match engine.place_booking(&venue_id, &proposal).await? {
                BookingOutcome::Booked { booking, quote } => {
                    println!(
                        "✅ Booked {} night(s), total {:.2} (booking {})",
                        quote.nights, quote.total_price, booking.id
                    );
                }
                BookingOutcome::Rejected(reason) => {
                    println!("❌ {}", reason);
                }
            }
        }

        Command::Cancel { booking_id } => {
            let engine = BookingEngine::new(client);
            engine.cancel(&booking_id).await?;
            println!("✅ Booking {} cancelled", booking_id);
        }

        Command::Bookings => {
            let name = session
                .profile_name()
                .ok_or_else(|| HolidazeError::AuthError {
                    message: "sign in before listing bookings".to_string(),
                })?;
            let engine = BookingEngine::new(client);
            let bookings = engine.my_bookings(&name).await?;

            if bookings.is_empty() {
                println!("No bookings yet.");
            }
            for booking in &bookings {
                let venue_name = booking
                    .venue
                    .as_ref()
                    .map(|v| v.name.as_str())
                    .unwrap_or("unknown venue");
                println!(
                    "📅 {} to {} at {} ({} guest(s)) [{}]",
                    booking.date_from, booking.date_to, venue_name, booking.guests, booking.id
                );
            }
        }

        Command::Login { email, password } => {
            let new_session = client.login(&email, &password).await?;
            session.save(&new_session)?;
            println!("✅ Signed in as {}", new_session.name);
        }

        Command::Logout => {
            session.clear()?;
            println!("✅ Session cleared");
        }
    }

    Ok(())
}
