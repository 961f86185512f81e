//! Past and upcoming bookings shown on "Booking Saya"

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog;
use crate::draft::BookingDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingTab {
    #[default]
    Upcoming,
    History,
    Cancelled,
}

impl BookingTab {
    pub const ALL: [BookingTab; 3] = [BookingTab::Upcoming, BookingTab::History, BookingTab::Cancelled];

    pub fn label(&self) -> &'static str {
        match self {
            BookingTab::Upcoming => "Upcoming",
            BookingTab::History => "History",
            BookingTab::Cancelled => "Cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
    }

    pub fn status(&self) -> BookingStatus {
        match self {
            BookingTab::Upcoming => BookingStatus::Confirmed,
            BookingTab::History => BookingStatus::Completed,
            BookingTab::Cancelled => BookingStatus::Cancelled,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            BookingTab::Upcoming => BookingTab::History,
            BookingTab::History => BookingTab::Cancelled,
            BookingTab::Cancelled => BookingTab::Upcoming,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            BookingTab::Upcoming => BookingTab::Cancelled,
            BookingTab::History => BookingTab::Upcoming,
            BookingTab::Cancelled => BookingTab::History,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRecord {
    pub booking_number: &'static str,
    pub venue_name: &'static str,
    pub date: NaiveDate,
    pub time: &'static str,
    pub duration: u32,
    pub lapangan: &'static str,
    pub status: BookingStatus,
    pub total: u64,
}

impl BookingRecord {
    /// Draft that reopens this booking's e-ticket
    pub fn to_draft(&self) -> BookingDraft {
        let mut draft = BookingDraft::new()
            .with_date(self.date)
            .with_time(self.time)
            .with_duration(self.duration)
            .with_price(self.total / u64::from(self.duration.max(1)))
            .with_total(self.total)
            .with_booking_number(self.booking_number);
        draft.venue = catalog::venue_by_name(self.venue_name);
        draft.lapangan = catalog::court_by_name(self.lapangan);
        draft
    }

    pub fn can_show_ticket(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("mock booking dates are valid")
}

pub fn all_bookings() -> Vec<BookingRecord> {
    vec![
        BookingRecord {
            booking_number: "FSK12345678",
            venue_name: "Futsal Arena Sudirman",
            date: date(2025, 10, 26),
            time: "18:00",
            duration: 2,
            lapangan: "Lapangan 1",
            status: BookingStatus::Confirmed,
            total: 360_000,
        },
        BookingRecord {
            booking_number: "FSK87654321",
            venue_name: "Champion Futsal Center",
            date: date(2025, 10, 28),
            time: "15:00",
            duration: 1,
            lapangan: "Lapangan 2",
            status: BookingStatus::Confirmed,
            total: 120_000,
        },
        BookingRecord {
            booking_number: "FSK11223344",
            venue_name: "Sports Hub Jakarta",
            date: date(2025, 10, 20),
            time: "19:00",
            duration: 2,
            lapangan: "Lapangan 3",
            status: BookingStatus::Completed,
            total: 360_000,
        },
        BookingRecord {
            booking_number: "FSK55667788",
            venue_name: "Victory Futsal Park",
            date: date(2025, 10, 22),
            time: "16:00",
            duration: 1,
            lapangan: "Lapangan 1",
            status: BookingStatus::Cancelled,
            total: 140_000,
        },
    ]
}

pub fn bookings_in(tab: BookingTab) -> Vec<BookingRecord> {
    all_bookings()
        .into_iter()
        .filter(|b| b.status == tab.status())
        .collect()
}
