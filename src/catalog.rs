//! Read-only mock data behind every screen
//!
//! Nothing here is fetched or stored; the values mirror a single demo venue
//! operator in Jakarta Selatan.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VenueType {
    Indoor,
    Outdoor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Surface {
    Vinyl,
    #[serde(rename = "Rumput Sintetis")]
    RumputSintetis,
}

impl fmt::Display for VenueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VenueType::Indoor => write!(f, "Indoor"),
            VenueType::Outdoor => write!(f, "Outdoor"),
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Surface::Vinyl => write!(f, "Vinyl"),
            Surface::RumputSintetis => write!(f, "Rumput Sintetis"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Venue {
    pub id: u32,
    pub name: &'static str,
    pub image: &'static str,
    pub rating: f32,
    pub reviews: u32,
    /// Hourly price in rupiah
    pub price: u64,
    pub distance: &'static str,
    #[serde(rename = "type")]
    pub kind: VenueType,
    pub surface: Surface,
}

pub const VENUES: [Venue; 4] = [
    Venue {
        id: 1,
        name: "Futsal Arena Sudirman",
        image: "https://images.unsplash.com/photo-1712325485668-6b6830ba814e",
        rating: 4.8,
        reviews: 245,
        price: 150_000,
        distance: "1.2 km",
        kind: VenueType::Indoor,
        surface: Surface::Vinyl,
    },
    Venue {
        id: 2,
        name: "Champion Futsal Center",
        image: "https://images.unsplash.com/photo-1705593813682-033ee2991df6",
        rating: 4.6,
        reviews: 189,
        price: 120_000,
        distance: "2.5 km",
        kind: VenueType::Outdoor,
        surface: Surface::RumputSintetis,
    },
    Venue {
        id: 3,
        name: "Sports Hub Jakarta",
        image: "https://images.unsplash.com/photo-1758300173998-e3c779fd4401",
        rating: 4.9,
        reviews: 312,
        price: 180_000,
        distance: "0.8 km",
        kind: VenueType::Indoor,
        surface: Surface::Vinyl,
    },
    Venue {
        id: 4,
        name: "Victory Futsal Park",
        image: "https://images.unsplash.com/photo-1587384474964-3a06ce1ce699",
        rating: 4.7,
        reviews: 203,
        price: 140_000,
        distance: "3.1 km",
        kind: VenueType::Indoor,
        surface: Surface::Vinyl,
    },
];

pub fn venue_by_id(id: u32) -> Option<Venue> {
    VENUES.iter().copied().find(|v| v.id == id)
}

pub fn venue_by_name(name: &str) -> Option<Venue> {
    VENUES.iter().copied().find(|v| v.name == name)
}

/// Home screen filter chips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenueFilter {
    Indoor,
    Outdoor,
    Vinyl,
    RumputSintetis,
}

impl VenueFilter {
    pub const ALL: [VenueFilter; 4] = [
        VenueFilter::Indoor,
        VenueFilter::Outdoor,
        VenueFilter::Vinyl,
        VenueFilter::RumputSintetis,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VenueFilter::Indoor => "Indoor",
            VenueFilter::Outdoor => "Outdoor",
            VenueFilter::Vinyl => "Vinyl",
            VenueFilter::RumputSintetis => "Rumput Sintetis",
        }
    }

    /// Parse a chip label, ignoring case, spaces and dashes
    pub fn parse(label: &str) -> Option<Self> {
        let key: String = label
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.label().replace(' ', "").to_lowercase() == key)
    }

    pub fn matches(&self, venue: &Venue) -> bool {
        match self {
            VenueFilter::Indoor => venue.kind == VenueType::Indoor,
            VenueFilter::Outdoor => venue.kind == VenueType::Outdoor,
            VenueFilter::Vinyl => venue.surface == Surface::Vinyl,
            VenueFilter::RumputSintetis => venue.surface == Surface::RumputSintetis,
        }
    }
}

/// Venues matching an optional chip and a case-insensitive name search
pub fn search_venues(filter: Option<VenueFilter>, query: &str) -> Vec<Venue> {
    let query = query.trim().to_lowercase();
    VENUES
        .iter()
        .filter(|v| filter.map_or(true, |f| f.matches(v)))
        .filter(|v| query.is_empty() || v.name.to_lowercase().contains(&query))
        .copied()
        .collect()
}

pub const FACILITIES: [&str; 4] = ["Parkir Luas", "Kantin", "AC", "WiFi Gratis"];

pub const VENUE_ADDRESS: &str = "Jl. Sudirman No. 123, Jakarta Selatan";

/// Extra gallery shots shown after the venue's own image
pub const GALLERY_EXTRAS: [&str; 2] = [
    "https://images.unsplash.com/photo-1587384474964-3a06ce1ce699",
    "https://images.unsplash.com/photo-1758300173998-e3c779fd4401",
];

pub fn gallery(venue: &Venue) -> [&'static str; 3] {
    [venue.image, GALLERY_EXTRAS[0], GALLERY_EXTRAS[1]]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Pagi,
    Siang,
    Malam,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Pagi, Period::Siang, Period::Malam];

    pub fn label(&self) -> &'static str {
        match self {
            Period::Pagi => "Pagi (06:00 - 12:00)",
            Period::Siang => "Siang (12:00 - 18:00)",
            Period::Malam => "Malam (18:00 - 00:00)",
        }
    }

    pub fn price(&self) -> u64 {
        match self {
            Period::Pagi => 120_000,
            Period::Siang => 150_000,
            Period::Malam => 180_000,
        }
    }

    fn of_hour(hour: u32) -> Self {
        match hour {
            0..=11 => Period::Pagi,
            12..=17 => Period::Siang,
            _ => Period::Malam,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub time: &'static str,
    pub price: u64,
    pub available: bool,
}

impl TimeSlot {
    pub fn hour(&self) -> u32 {
        parse_hour(self.time).unwrap_or(0)
    }

    pub fn period(&self) -> Period {
        Period::of_hour(self.hour())
    }
}

const fn slot(time: &'static str, price: u64, available: bool) -> TimeSlot {
    TimeSlot {
        time,
        price,
        available,
    }
}

pub const TIME_SLOTS: [TimeSlot; 18] = [
    slot("06:00", 120_000, true),
    slot("07:00", 120_000, true),
    slot("08:00", 120_000, false),
    slot("09:00", 120_000, true),
    slot("10:00", 120_000, true),
    slot("11:00", 120_000, false),
    slot("12:00", 150_000, true),
    slot("13:00", 150_000, true),
    slot("14:00", 150_000, true),
    slot("15:00", 150_000, false),
    slot("16:00", 150_000, true),
    slot("17:00", 150_000, true),
    slot("18:00", 180_000, true),
    slot("19:00", 180_000, true),
    slot("20:00", 180_000, false),
    slot("21:00", 180_000, true),
    slot("22:00", 180_000, true),
    slot("23:00", 180_000, true),
];

pub fn slot_by_time(time: &str) -> Option<TimeSlot> {
    TIME_SLOTS.iter().copied().find(|s| s.time == time)
}

pub fn slots_in(period: Period) -> impl Iterator<Item = &'static TimeSlot> {
    TIME_SLOTS.iter().filter(move |s| s.period() == period)
}

/// Hour part of an `HH:MM` label
pub fn parse_hour(time: &str) -> Option<u32> {
    time.split(':').next()?.parse().ok()
}

pub const DURATIONS: [u32; 3] = [1, 2, 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CourtStatus {
    Available,
    Booked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Court {
    pub id: u32,
    pub name: &'static str,
    pub size: &'static str,
    pub surface: Surface,
    pub status: CourtStatus,
    pub indoor: bool,
}

impl Court {
    pub fn is_available(&self) -> bool {
        self.status == CourtStatus::Available
    }
}

const fn court(id: u32, name: &'static str, size: &'static str, status: CourtStatus) -> Court {
    Court {
        id,
        name,
        size,
        surface: Surface::Vinyl,
        status,
        indoor: true,
    }
}

pub const COURTS: [Court; 6] = [
    court(1, "Lapangan 1", "20x40m", CourtStatus::Available),
    court(2, "Lapangan 2", "20x40m", CourtStatus::Available),
    court(3, "Lapangan 3", "20x40m", CourtStatus::Booked),
    court(4, "Lapangan 4", "20x40m", CourtStatus::Available),
    court(5, "Lapangan 5", "25x45m", CourtStatus::Booked),
    court(6, "Lapangan 6", "25x45m", CourtStatus::Available),
];

pub fn court_by_name(name: &str) -> Option<Court> {
    COURTS.iter().copied().find(|c| c.name == name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Review {
    pub name: &'static str,
    pub rating: u8,
    pub date: &'static str,
    pub comment: &'static str,
}

pub const REVIEWS: [Review; 3] = [
    Review {
        name: "Ahmad Rizki",
        rating: 5,
        date: "2 hari lalu",
        comment: "Lapangan bagus, bersih, dan AC-nya dingin. Recommended!",
    },
    Review {
        name: "Budi Santoso",
        rating: 4,
        date: "1 minggu lalu",
        comment: "Tempatnya strategis, parkirnya luas. Cuma kadang booking susah karena selalu penuh.",
    },
    Review {
        name: "Citra Dewi",
        rating: 5,
        date: "2 minggu lalu",
        comment: "Pelayanan ramah, fasilitas lengkap. Puas banget main di sini!",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentMethod {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct PaymentCategory {
    pub name: &'static str,
    pub methods: &'static [PaymentMethod],
}

pub const PAYMENT_CATEGORIES: [PaymentCategory; 3] = [
    PaymentCategory {
        name: "E-Wallet",
        methods: &[
            PaymentMethod { id: "gopay", name: "GoPay" },
            PaymentMethod { id: "ovo", name: "OVO" },
            PaymentMethod { id: "dana", name: "DANA" },
            PaymentMethod { id: "shopeepay", name: "ShopeePay" },
        ],
    },
    PaymentCategory {
        name: "Transfer Bank",
        methods: &[
            PaymentMethod { id: "bca", name: "BCA Virtual Account" },
            PaymentMethod { id: "mandiri", name: "Mandiri Virtual Account" },
            PaymentMethod { id: "bni", name: "BNI Virtual Account" },
        ],
    },
    PaymentCategory {
        name: "Lainnya",
        methods: &[
            PaymentMethod { id: "qris", name: "QRIS" },
            PaymentMethod { id: "cc", name: "Kartu Kredit/Debit" },
        ],
    },
];

/// Payment methods in display order
pub fn payment_methods() -> Vec<PaymentMethod> {
    PAYMENT_CATEGORIES
        .iter()
        .flat_map(|c| c.methods.iter().copied())
        .collect()
}

pub fn payment_method_by_id(id: &str) -> Option<PaymentMethod> {
    payment_methods().into_iter().find(|m| m.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_periods_match_price_schedule() {
        for slot in TIME_SLOTS {
            assert_eq!(slot.price, slot.period().price(), "slot {}", slot.time);
        }
        assert_eq!(slots_in(Period::Pagi).count(), 6);
        assert_eq!(slots_in(Period::Siang).count(), 6);
        assert_eq!(slots_in(Period::Malam).count(), 6);
    }

    #[test]
    fn test_filter_parse_and_match() {
        assert_eq!(VenueFilter::parse("rumput-sintetis"), Some(VenueFilter::RumputSintetis));
        assert_eq!(VenueFilter::parse("INDOOR"), Some(VenueFilter::Indoor));
        assert_eq!(VenueFilter::parse("grass"), None);

        let outdoor = search_venues(Some(VenueFilter::Outdoor), "");
        assert_eq!(outdoor.len(), 1);
        assert_eq!(outdoor[0].name, "Champion Futsal Center");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let found = search_venues(None, "  sports HUB ");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 3);
        assert_eq!(search_venues(Some(VenueFilter::Outdoor), "sports").len(), 0);
        assert_eq!(search_venues(None, "").len(), VENUES.len());
    }

    #[test]
    fn test_lookups() {
        assert_eq!(venue_by_id(2).map(|v| v.price), Some(120_000));
        assert!(venue_by_id(9).is_none());
        assert_eq!(venue_by_name("Victory Futsal Park").map(|v| v.id), Some(4));
        assert!(!court_by_name("Lapangan 3").unwrap().is_available());
        assert_eq!(payment_methods().len(), 9);
        assert_eq!(payment_method_by_id("qris").map(|m| m.name), Some("QRIS"));
        assert!(!slot_by_time("20:00").unwrap().available);
    }
}
