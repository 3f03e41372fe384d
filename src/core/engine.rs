use crate::core::validate::RejectReason;
use crate::core::{calendar, filter, validate};
use crate::domain::model::{
    Booking, BookingProposal, NewBooking, SearchCriteria, StayQuote, Venue,
};
use crate::domain::ports::{BookingGateway, VenueDirectory};
use crate::utils::error::Result;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Outcome of a booking attempt: confirmed by the store, or refused locally
/// with the specific reason to show the user.
#[derive(Debug)]
pub enum BookingOutcome {
    Booked { booking: Booking, quote: StayQuote },
    Rejected(RejectReason),
}

/// Wires the pure availability core to the venue/booking gateways, one
/// method per user-facing flow.
pub struct BookingEngine<G> {
    gateway: G,
}

impl<G: VenueDirectory + BookingGateway> BookingEngine<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Fetch the whole catalog page by page, then apply the search filter.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Venue>> {
        let venues = self.fetch_catalog().await?;
        let matches = filter::filter_venues(&venues, criteria);
        tracing::info!(
            "🔎 {} of {} venues match the search",
            matches.len(),
            venues.len()
        );
        Ok(matches)
    }

    async fn fetch_catalog(&self) -> Result<Vec<Venue>> {
        let mut venues = Vec::new();
        let mut page = 1;
        loop {
            let batch = self.gateway.venues(page).await?;
            tracing::debug!(
                "📡 Fetched catalog page {}/{}",
                batch.current_page,
                batch.page_count
            );
            venues.extend(batch.venues);
            if batch.is_last_page {
                break;
            }
            page += 1;
        }
        Ok(venues)
    }

    /// A venue together with the calendar days its date picker must grey out.
    pub async fn availability(&self, venue_id: &str) -> Result<(Venue, BTreeSet<NaiveDate>)> {
        let venue = self.gateway.venue_with_bookings(venue_id).await?;
        let disabled = calendar::disabled_dates(venue.bookings());
        Ok((venue, disabled))
    }

    /// Validate a proposal against a fresh booking snapshot and, on a local
    /// accept, hand it to the store.
    ///
    /// The local check is advisory: the snapshot may already be stale, and a
    /// conflict reported by the server (HTTP 409) overrides a local accept.
    pub async fn place_booking(
        &self,
        venue_id: &str,
        proposal: &BookingProposal,
    ) -> Result<BookingOutcome> {
        let venue = self.gateway.venue_with_bookings(venue_id).await?;

        let quote = match validate::validate_booking(venue.bookings(), proposal, &venue) {
            Ok(quote) => quote,
            Err(reason) => {
                tracing::info!("❌ Booking refused locally: {}", reason);
                return Ok(BookingOutcome::Rejected(reason));
            }
        };

        tracing::info!(
            "✅ {} nights at '{}' for {:.2}, creating booking",
            quote.nights,
            venue.name,
            quote.total_price
        );

        let booking = self
            .gateway
            .create_booking(&NewBooking {
                date_from: quote.date_from,
                date_to: quote.date_to,
                guests: proposal.guests,
                venue_id: venue.id.clone(),
            })
            .await?;

        Ok(BookingOutcome::Booked { booking, quote })
    }

    pub async fn cancel(&self, booking_id: &str) -> Result<()> {
        self.gateway.cancel_booking(booking_id).await
    }

    /// The signed-in profile's bookings, newest stay first (display order of
    /// the bookings page).
    pub async fn my_bookings(&self, profile_name: &str) -> Result<Vec<Booking>> {
        let mut bookings = self.gateway.profile_bookings(profile_name).await?;
        bookings.sort_by(|a, b| b.date_from.cmp(&a.date_from));
        Ok(bookings)
    }
}
