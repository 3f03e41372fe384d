use crate::domain::model::{SearchCriteria, Venue};

/// Filter a catalog snapshot down to the venues that can satisfy a search.
///
/// Returns an order-preserving subsequence of the input; no ranking. A
/// criteria field that is absent skips its predicate entirely, and the date
/// predicate only runs when both boundary dates are present.
pub fn filter_venues(venues: &[Venue], criteria: &SearchCriteria) -> Vec<Venue> {
    let country = criteria
        .country
        .as_deref()
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty());
    let stay = criteria.stay();

    venues
        .iter()
        .filter(|venue| matches_country(venue, country.as_deref()))
        .filter(|venue| criteria.guests.map_or(true, |wanted| venue.max_guests >= wanted))
        .filter(|venue| {
            stay.map_or(true, |wanted| {
                venue
                    .bookings()
                    .iter()
                    .all(|booking| !wanted.overlaps(&booking.range()))
            })
        })
        .cloned()
        .collect()
}

fn matches_country(venue: &Venue, wanted: Option<&str>) -> bool {
    let Some(wanted) = wanted else {
        return true;
    };
    match venue.location.country.as_deref() {
        Some(country) => country.to_lowercase().contains(wanted),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Booking, Location};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn venue(id: &str, country: Option<&str>, max_guests: u32) -> Venue {
        Venue {
            id: id.to_string(),
            name: format!("Venue {}", id),
            description: None,
            price: 100.0,
            max_guests,
            rating: None,
            location: Location {
                country: country.map(str::to_string),
                ..Location::default()
            },
            bookings: None,
        }
    }

    fn with_booking(mut venue: Venue, from: NaiveDate, to: NaiveDate) -> Venue {
        venue.bookings = Some(vec![Booking {
            id: "b-1".to_string(),
            venue_id: Some(venue.id.clone()),
            date_from: from,
            date_to: to,
            guests: 2,
            customer: None,
            venue: None,
        }]);
        venue
    }

    #[test]
    fn test_guest_capacity_predicate() {
        let venues = vec![venue("1", None, 2), venue("2", None, 4)];

        let criteria = SearchCriteria {
            guests: Some(3),
            ..SearchCriteria::default()
        };

        let result = filter_venues(&venues, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[test]
    fn test_country_predicate_composes_with_guests() {
        let venues = vec![venue("1", Some("Norway"), 2), venue("2", Some("Sweden"), 4)];

        let criteria = SearchCriteria {
            country: Some("Norway".to_string()),
            guests: Some(3),
            ..SearchCriteria::default()
        };

        assert!(filter_venues(&venues, &criteria).is_empty());
    }

    #[test]
    fn test_country_match_is_case_insensitive_substring() {
        let venues = vec![venue("1", Some("Norway"), 4)];

        let criteria = SearchCriteria {
            country: Some("  norw  ".to_string()),
            ..SearchCriteria::default()
        };

        assert_eq!(filter_venues(&venues, &criteria).len(), 1);
    }

    #[test]
    fn test_empty_country_criterion_passes_all() {
        let venues = vec![venue("1", Some("Norway"), 4), venue("2", None, 2)];

        let criteria = SearchCriteria {
            country: Some("   ".to_string()),
            ..SearchCriteria::default()
        };

        assert_eq!(filter_venues(&venues, &criteria).len(), 2);
    }

    #[test]
    fn test_venue_without_country_fails_active_country_predicate() {
        let venues = vec![venue("1", None, 4)];

        let criteria = SearchCriteria {
            country: Some("Norway".to_string()),
            ..SearchCriteria::default()
        };

        assert!(filter_venues(&venues, &criteria).is_empty());
    }

    #[test]
    fn test_date_predicate_excludes_overlapping_booking() {
        let taken = with_booking(venue("1", None, 4), date(2024, 6, 1), date(2024, 6, 5));
        let free = venue("2", None, 4);

        let criteria = SearchCriteria {
            check_in: Some(date(2024, 6, 3)),
            check_out: Some(date(2024, 6, 7)),
            ..SearchCriteria::default()
        };

        let result = filter_venues(&[taken, free], &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[test]
    fn test_date_predicate_allows_adjacent_stay() {
        let venues = vec![with_booking(
            venue("1", None, 4),
            date(2024, 6, 1),
            date(2024, 6, 5),
        )];

        let criteria = SearchCriteria {
            check_in: Some(date(2024, 6, 5)),
            check_out: Some(date(2024, 6, 8)),
            ..SearchCriteria::default()
        };

        assert_eq!(filter_venues(&venues, &criteria).len(), 1);
    }

    #[test]
    fn test_date_predicate_skipped_when_one_date_missing() {
        let venues = vec![with_booking(
            venue("1", None, 4),
            date(2024, 6, 1),
            date(2024, 6, 5),
        )];

        let criteria = SearchCriteria {
            check_in: Some(date(2024, 6, 3)),
            ..SearchCriteria::default()
        };

        // Only check-in given: the date predicate must not run at all.
        assert_eq!(filter_venues(&venues, &criteria).len(), 1);
    }

    #[test]
    fn test_original_order_is_preserved() {
        let venues = vec![venue("3", None, 4), venue("1", None, 4), venue("2", None, 4)];

        let result = filter_venues(&venues, &SearchCriteria::default());
        let ids: Vec<&str> = result.iter().map(|v| v.id.as_str()).collect();

        assert_eq!(ids, vec!["3", "1", "2"]);
    }
}
