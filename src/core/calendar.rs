use crate::domain::model::Booking;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Expand booked ranges into the set of calendar days a date picker must
/// block from selection.
///
/// Both boundary days of every booking are included. This is deliberately
/// more conservative than the strict overlap rule used for acceptance: a new
/// stay may legally start on someone's checkout day, but the picker blocks
/// the day itself so a clicked date is never half-taken.
pub fn disabled_dates(bookings: &[Booking]) -> BTreeSet<NaiveDate> {
    bookings
        .iter()
        .flat_map(|booking| booking.range().days_inclusive())
        .collect()
}
