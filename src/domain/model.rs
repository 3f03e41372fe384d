use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stay expressed as a check-in / check-out pair of calendar dates.
///
/// The check-out day is not a night of the stay, so two stays that share a
/// boundary day (one checks out the morning the other checks in) do not
/// overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Strict overlap check: touching endpoints do not count.
    ///
    /// Total over any pair of ranges; an inverted or zero-length range simply
    /// overlaps nothing.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.from < other.to && self.to > other.from
    }

    /// Nights between check-in and check-out in whole calendar days.
    pub fn nights(&self) -> i64 {
        (self.to - self.from).num_days()
    }

    /// Every calendar day the range touches, both endpoints included.
    pub fn days_inclusive(&self) -> impl Iterator<Item = NaiveDate> {
        let last = self.to;
        self.from.iter_days().take_while(move |day| *day <= last)
    }
}

/// Wire format for booking dates. The API hands back full RFC3339 timestamps;
/// this client works at day granularity, so any time component is discarded
/// on the way in. Outgoing dates are plain `YYYY-MM-DD`.
pub(crate) mod api_date {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc).date_naive())
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A confirmed reservation, owned by the external booking store. This client
/// only ever reads bookings and must tolerate stale or partial snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_id: Option<String>,
    #[serde(with = "api_date")]
    pub date_from: NaiveDate,
    #[serde(with = "api_date")]
    pub date_to: NaiveDate,
    pub guests: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<Venue>,
}

impl Booking {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.date_from, self.date_to)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,
}

/// A rentable property with capacity, nightly price and a read-only snapshot
/// of its bookings (absent unless fetched with `_bookings=true`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub max_guests: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookings: Option<Vec<Booking>>,
}

impl Venue {
    /// The booking snapshot, treating an absent list as empty.
    pub fn bookings(&self) -> &[Booking] {
        self.bookings.as_deref().unwrap_or_default()
    }
}

/// What a visitor typed into the search form. Absent fields mean "do not
/// filter on this dimension".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub country: Option<String>,
    pub guests: Option<u32>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

impl SearchCriteria {
    /// The requested stay, present only when both boundary dates are.
    pub fn stay(&self) -> Option<DateRange> {
        match (self.check_in, self.check_out) {
            (Some(from), Some(to)) => Some(DateRange::new(from, to)),
            _ => None,
        }
    }
}

/// A stay a visitor wants to book, before validation. Dates stay optional
/// here; the validator turns their absence into a reject reason rather than
/// a crash.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookingProposal {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub guests: u32,
}

/// The accepted side of a validation: the stay plus its computed cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StayQuote {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub nights: u32,
    pub total_price: f64,
}

/// Create-booking payload for `POST /holidaze/bookings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    #[serde(with = "api_date")]
    pub date_from: NaiveDate,
    #[serde(with = "api_date")]
    pub date_to: NaiveDate,
    pub guests: u32,
    pub venue_id: String,
}

/// The signed-in profile as returned by `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub name: String,
    pub email: String,
    pub access_token: String,
}

/// One page of the venue catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct VenuePage {
    pub venues: Vec<Venue>,
    pub current_page: u32,
    pub page_count: u32,
    pub is_last_page: bool,
    pub total_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = DateRange::new(date(2024, 1, 1), date(2024, 1, 5));
        let b = DateRange::new(date(2024, 1, 3), date(2024, 1, 8));
        let c = DateRange::new(date(2024, 2, 1), date(2024, 2, 3));

        assert_eq!(a.overlaps(&b), b.overlaps(&a));
        assert_eq!(a.overlaps(&c), c.overlaps(&a));
    }

    #[test]
    fn test_adjacent_ranges_do_not_overlap() {
        // Checkout morning equals the next guest's check-in day.
        let a = DateRange::new(date(2024, 1, 1), date(2024, 1, 5));
        let b = DateRange::new(date(2024, 1, 5), date(2024, 1, 10));

        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_crossing_ranges_overlap() {
        let a = DateRange::new(date(2024, 1, 1), date(2024, 1, 5));
        let b = DateRange::new(date(2024, 1, 3), date(2024, 1, 8));

        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_contained_range_overlaps() {
        let outer = DateRange::new(date(2024, 1, 1), date(2024, 1, 10));
        let inner = DateRange::new(date(2024, 1, 4), date(2024, 1, 6));

        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_zero_length_range_overlaps_nothing() {
        let point = DateRange::new(date(2024, 1, 3), date(2024, 1, 3));
        let around = DateRange::new(date(2024, 1, 1), date(2024, 1, 10));

        assert!(!point.overlaps(&around));
        assert!(!around.overlaps(&point));
        assert!(!point.overlaps(&point));
    }

    #[test]
    fn test_inverted_range_does_not_panic() {
        let inverted = DateRange::new(date(2024, 1, 10), date(2024, 1, 1));
        let other = DateRange::new(date(2024, 1, 2), date(2024, 1, 5));

        assert!(!inverted.overlaps(&other));
        assert!(inverted.days_inclusive().next().is_none());
    }

    #[test]
    fn test_nights() {
        let stay = DateRange::new(date(2024, 6, 1), date(2024, 6, 5));
        assert_eq!(stay.nights(), 4);
    }

    #[test]
    fn test_days_inclusive_covers_both_endpoints() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 3));
        let days: Vec<NaiveDate> = range.days_inclusive().collect();

        assert_eq!(
            days,
            vec![date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)]
        );
    }

    #[test]
    fn test_booking_dates_accept_rfc3339_timestamps() {
        let json = serde_json::json!({
            "id": "b-1",
            "dateFrom": "2024-06-01T00:00:00.000Z",
            "dateTo": "2024-06-05T14:30:00.000Z",
            "guests": 2
        });

        let booking: Booking = serde_json::from_value(json).unwrap();
        assert_eq!(booking.date_from, date(2024, 6, 1));
        assert_eq!(booking.date_to, date(2024, 6, 5));
    }

    #[test]
    fn test_booking_dates_accept_plain_dates() {
        let json = serde_json::json!({
            "id": "b-2",
            "dateFrom": "2024-06-01",
            "dateTo": "2024-06-05",
            "guests": 2
        });

        let booking: Booking = serde_json::from_value(json).unwrap();
        assert_eq!(booking.range().nights(), 4);
    }

    #[test]
    fn test_new_booking_serializes_plain_dates() {
        let payload = NewBooking {
            date_from: date(2024, 6, 1),
            date_to: date(2024, 6, 5),
            guests: 2,
            venue_id: "v-1".to_string(),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["dateFrom"], "2024-06-01");
        assert_eq!(json["dateTo"], "2024-06-05");
        assert_eq!(json["venueId"], "v-1");
    }

    #[test]
    fn test_venue_bookings_accessor_tolerates_absent_list() {
        let json = serde_json::json!({
            "id": "v-1",
            "name": "Cabin",
            "price": 120.0,
            "maxGuests": 4
        });

        let venue: Venue = serde_json::from_value(json).unwrap();
        assert!(venue.bookings().is_empty());
    }
}
