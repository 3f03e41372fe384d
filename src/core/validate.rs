use crate::domain::model::{Booking, BookingProposal, DateRange, StayQuote, Venue};
use thiserror::Error;

/// Why a proposed stay was refused. A closed set of values the UI renders as
/// inline messages; rejections are returned, never thrown.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RejectReason {
    #[error("check-in and check-out dates are both required")]
    MissingDates,

    #[error("check-out must be after check-in")]
    InvalidRange,

    #[error("guest count {requested} is outside this venue's limit of {max_guests}")]
    GuestCountExceeded { requested: u32, max_guests: u32 },

    #[error("the venue is already booked {} to {}", .conflicting.date_from, .conflicting.date_to)]
    DateConflict { conflicting: Booking },
}

/// Advisory pre-flight check for a booking proposal.
///
/// Rules run in a fixed order and the first failure wins, so a caller always
/// has exactly one message to show. A local accept is no guarantee of
/// creation: the snapshot may be stale, and the server re-validates against
/// its own state with the final say.
pub fn validate_booking(
    existing: &[Booking],
    proposal: &BookingProposal,
    venue: &Venue,
) -> Result<StayQuote, RejectReason> {
    let (from, to) = match (proposal.date_from, proposal.date_to) {
        (Some(from), Some(to)) => (from, to),
        _ => return Err(RejectReason::MissingDates),
    };

    // Rejects zero-length and inverted stays before any overlap check runs.
    if to <= from {
        return Err(RejectReason::InvalidRange);
    }

    if proposal.guests < 1 || proposal.guests > venue.max_guests {
        return Err(RejectReason::GuestCountExceeded {
            requested: proposal.guests,
            max_guests: venue.max_guests,
        });
    }

    let wanted = DateRange::new(from, to);
    if let Some(conflicting) = existing
        .iter()
        .find(|booking| wanted.overlaps(&booking.range()))
    {
        return Err(RejectReason::DateConflict {
            conflicting: conflicting.clone(),
        });
    }

    let nights = wanted.nights() as u32;
    Ok(StayQuote {
        date_from: from,
        date_to: to,
        nights,
        total_price: nights as f64 * venue.price,
    })
}
