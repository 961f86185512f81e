//! The booking draft carried across screens
//!
//! Patches are merged into a fresh value; a field, once set, is only ever
//! overwritten, never cleared.

use chrono::NaiveDate;

use crate::catalog::{Court, Venue};
use crate::pricing;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDraft {
    pub venue: Option<Venue>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    /// Hours
    pub duration: Option<u32>,
    /// Hourly price of the chosen slot
    pub price: Option<u64>,
    pub lapangan: Option<Court>,
    pub promo_code: Option<String>,
    pub discount: Option<u64>,
    pub total: Option<u64>,
    pub payment_method: Option<String>,
    pub booking_number: Option<String>,
}

macro_rules! with_field {
    ($name:ident, $field:ident, $ty:ty) => {
        pub fn $name(mut self, value: $ty) -> Self {
            self.$field = Some(value.into());
            self
        }
    };
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    with_field!(with_venue, venue, Venue);
    with_field!(with_date, date, NaiveDate);
    with_field!(with_time, time, &str);
    with_field!(with_duration, duration, u32);
    with_field!(with_price, price, u64);
    with_field!(with_lapangan, lapangan, Court);
    with_field!(with_promo_code, promo_code, &str);
    with_field!(with_discount, discount, u64);
    with_field!(with_total, total, u64);
    with_field!(with_payment_method, payment_method, &str);
    with_field!(with_booking_number, booking_number, &str);

    /// Shallow merge: every field present in `patch` wins
    pub fn merged(&self, patch: &BookingDraft) -> BookingDraft {
        BookingDraft {
            venue: patch.venue.or(self.venue),
            date: patch.date.or(self.date),
            time: patch.time.clone().or_else(|| self.time.clone()),
            duration: patch.duration.or(self.duration),
            price: patch.price.or(self.price),
            lapangan: patch.lapangan.or(self.lapangan),
            promo_code: patch.promo_code.clone().or_else(|| self.promo_code.clone()),
            discount: patch.discount.or(self.discount),
            total: patch.total.or(self.total),
            payment_method: patch
                .payment_method
                .clone()
                .or_else(|| self.payment_method.clone()),
            booking_number: patch
                .booking_number
                .clone()
                .or_else(|| self.booking_number.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == BookingDraft::default()
    }

    /// `price × duration − discount` when price and duration are known,
    /// otherwise whatever total was stored
    pub fn computed_total(&self) -> Option<u64> {
        match (self.price, self.duration) {
            (Some(price), Some(duration)) => Some(pricing::total(
                price,
                duration,
                self.discount.unwrap_or(0),
            )),
            _ => self.total,
        }
    }

    pub fn base_price(&self) -> Option<u64> {
        Some(pricing::base_price(self.price?, self.duration?))
    }

    /// End of the booked period as `HH:MM`, wrapping past midnight
    pub fn end_time(&self) -> Option<String> {
        let time = self.time.as_deref()?;
        let (hour, minute) = time.split_once(':')?;
        let hour: u32 = hour.parse().ok()?;
        let end = (hour + self.duration.unwrap_or(1)) % 24;
        Some(format!("{:02}:{}", end, minute))
    }

    /// Typed view of the schedule fields, once all of them are present
    pub fn schedule(&self) -> Option<Schedule> {
        Some(Schedule {
            venue: self.venue?,
            date: self.date?,
            time: self.time.clone()?,
            duration: self.duration?,
            price: self.price?,
        })
    }

    /// Names of the fields `stage` needs that this draft lacks
    pub fn missing_for(&self, stage: BookingStage) -> Vec<&'static str> {
        let present = [
            ("venue", self.venue.is_some()),
            ("date", self.date.is_some()),
            ("time", self.time.is_some()),
            ("duration", self.duration.is_some()),
            ("price", self.price.is_some()),
            ("lapangan", self.lapangan.is_some()),
            ("total", self.total.is_some()),
            ("booking_number", self.booking_number.is_some()),
        ];
        let required = stage.required_fields();
        present
            .iter()
            .filter(|(name, set)| !set && required.contains(name))
            .map(|(name, _)| *name)
            .collect()
    }

    /// Furthest pipeline stage this draft satisfies
    pub fn stage(&self) -> BookingStage {
        BookingStage::PIPELINE
            .into_iter()
            .rev()
            .find(|stage| self.missing_for(*stage).is_empty())
            .unwrap_or(BookingStage::Browsing)
    }
}

/// Venue, date and slot chosen on the schedule screen
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub venue: Venue,
    pub date: NaiveDate,
    pub time: String,
    pub duration: u32,
    pub price: u64,
}

/// Pipeline stages, each requiring the fields of the previous one plus its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BookingStage {
    Browsing,
    VenueSelected,
    Scheduled,
    CourtSelected,
    Priced,
    Confirmed,
}

impl BookingStage {
    pub const PIPELINE: [BookingStage; 6] = [
        BookingStage::Browsing,
        BookingStage::VenueSelected,
        BookingStage::Scheduled,
        BookingStage::CourtSelected,
        BookingStage::Priced,
        BookingStage::Confirmed,
    ];

    /// Furthest stage `draft` satisfies
    pub fn of(draft: &BookingDraft) -> BookingStage {
        draft.stage()
    }

    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            BookingStage::Browsing => &[],
            BookingStage::VenueSelected => &["venue"],
            BookingStage::Scheduled => &["venue", "date", "time", "duration", "price"],
            BookingStage::CourtSelected => {
                &["venue", "date", "time", "duration", "price", "lapangan"]
            }
            BookingStage::Priced => &[
                "venue", "date", "time", "duration", "price", "lapangan", "total",
            ],
            BookingStage::Confirmed => &[
                "venue",
                "date",
                "time",
                "duration",
                "price",
                "lapangan",
                "total",
                "booking_number",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{COURTS, VENUES};

    fn scheduled() -> BookingDraft {
        BookingDraft::new()
            .with_venue(VENUES[0])
            .with_date(NaiveDate::from_ymd_opt(2025, 10, 26).unwrap())
            .with_time("18:00")
            .with_duration(2)
            .with_price(180_000)
    }

    #[test]
    fn test_merge_overwrites_and_keeps() {
        let draft = scheduled();
        let merged = draft.merged(&BookingDraft::new().with_duration(3).with_lapangan(COURTS[0]));

        assert_eq!(merged.duration, Some(3));
        assert_eq!(merged.time.as_deref(), Some("18:00"));
        assert_eq!(merged.lapangan.map(|c| c.id), Some(1));
        // the receiver is untouched
        assert_eq!(draft.duration, Some(2));
        assert!(draft.lapangan.is_none());
    }

    #[test]
    fn test_merge_of_empty_patch_is_identity() {
        let draft = scheduled();
        assert_eq!(draft.merged(&BookingDraft::new()), draft);
    }

    #[test]
    fn test_computed_total() {
        let draft = BookingDraft::new()
            .with_price(100_000)
            .with_duration(2)
            .merged(&BookingDraft::new().with_promo_code("FIRST30").with_discount(30_000));
        assert_eq!(draft.computed_total(), Some(170_000));

        let no_price = BookingDraft::new().with_total(99_000);
        assert_eq!(no_price.computed_total(), Some(99_000));
        assert_eq!(BookingDraft::new().computed_total(), None);
    }

    #[test]
    fn test_end_time() {
        assert_eq!(scheduled().end_time().as_deref(), Some("20:00"));
        let late = scheduled().with_time("23:00");
        assert_eq!(late.end_time().as_deref(), Some("01:00"));
        assert_eq!(BookingDraft::new().end_time(), None);
    }

    #[test]
    fn test_stage_progression() {
        assert_eq!(BookingDraft::new().stage(), BookingStage::Browsing);
        assert_eq!(BookingStage::of(&scheduled()), BookingStage::Scheduled);
        assert_eq!(
            BookingDraft::new().with_venue(VENUES[1]).stage(),
            BookingStage::VenueSelected
        );

        let draft = scheduled();
        assert_eq!(draft.stage(), BookingStage::Scheduled);

        let draft = draft.with_lapangan(COURTS[1]);
        assert_eq!(draft.stage(), BookingStage::CourtSelected);

        let draft = draft.with_total(360_000);
        assert_eq!(draft.stage(), BookingStage::Priced);

        let draft = draft.with_booking_number("FSK12345678");
        assert_eq!(draft.stage(), BookingStage::Confirmed);
    }

    #[test]
    fn test_missing_fields_in_order() {
        let draft = BookingDraft::new().with_venue(VENUES[0]).with_time("09:00");
        assert_eq!(
            draft.missing_for(BookingStage::CourtSelected),
            vec!["date", "duration", "price", "lapangan"]
        );
        assert!(draft.missing_for(BookingStage::Browsing).is_empty());
    }

    #[test]
    fn test_total_without_price_is_not_priced() {
        // a stray total does not skip the earlier stages
        let draft = BookingDraft::new().with_total(170_000);
        assert_eq!(draft.stage(), BookingStage::Browsing);
    }
}
