//! Non-interactive subcommands: catalogue listings and price quotes

use serde_json::json;

use crate::catalog::{self, VenueFilter, TIME_SLOTS};
use crate::error::{FutsalError, Result, ValidationError};
use crate::history::{self, BookingTab};
use crate::pricing::{format_rupiah, Quote};
use crate::schedule;

pub fn list_venues(filter: Option<&str>, search: Option<&str>, as_json: bool) -> Result<()> {
    let filter = match filter {
        Some(label) => Some(VenueFilter::parse(label).ok_or_else(|| {
            FutsalError::Other(format!(
                "Unknown filter '{}'. Use one of: {}",
                label,
                VenueFilter::ALL
                    .iter()
                    .map(|f| f.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })?),
        None => None,
    };
    let venues = catalog::search_venues(filter, search.unwrap_or(""));
    tracing::debug!(count = venues.len(), ?filter, "Listing venues");

    if as_json {
        println!("{}", serde_json::to_string_pretty(&venues)?);
        return Ok(());
    }

    if venues.is_empty() {
        println!("No venues match");
        return Ok(());
    }

    println!(
        "{:<4} {:<26} {:<8} {:<16} {:>7} {:>14}",
        "ID", "Venue", "Type", "Surface", "Rating", "Per jam"
    );
    println!("{}", "-".repeat(80));
    for venue in &venues {
        println!(
            "{:<4} {:<26} {:<8} {:<16} {:>7.1} {:>14}",
            venue.id,
            venue.name,
            venue.kind.to_string(),
            venue.surface.to_string(),
            venue.rating,
            format_rupiah(venue.price)
        );
    }
    println!("{}", "-".repeat(80));
    println!("{} venue(s)", venues.len());
    Ok(())
}

pub fn list_slots() {
    for period in catalog::Period::ALL {
        println!("\n{} - {}/jam", period.label(), format_rupiah(period.price()));
        let line: Vec<String> = catalog::slots_in(period)
            .map(|slot| {
                if slot.available {
                    slot.time.to_string()
                } else {
                    format!("{} (booked)", slot.time)
                }
            })
            .collect();
        println!("  {}", line.join("  "));
    }
    let open = TIME_SLOTS.iter().filter(|s| s.available).count();
    println!("\n{} of {} slots available", open, TIME_SLOTS.len());
}

pub fn quote(
    venue_id: u32,
    time: &str,
    duration: u32,
    promo: Option<&str>,
    as_json: bool,
) -> Result<Quote> {
    let venue = catalog::venue_by_id(venue_id).ok_or(ValidationError::UnknownVenue(venue_id))?;
    let duration = schedule::validate_duration(duration)?;
    let slot = schedule::bookable_slot(time)?;
    let quote = Quote::new(slot.price, duration, promo);

    if promo.is_some() && quote.promo.is_none() {
        tracing::warn!(code = ?promo, "Promo code not recognised, no discount applied");
    }

    if as_json {
        let value = json!({
            "venue": venue.name,
            "time": slot.time,
            "duration": duration,
            "price": slot.price,
            "base": quote.base,
            "promo": quote.promo.map(|p| p.code()),
            "discount": quote.discount,
            "total": quote.total,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(quote);
    }

    println!("{} - {} ({} jam)", venue.name, slot.time, duration);
    println!("{}", "-".repeat(40));
    println!(
        "{:<20} {:>19}",
        format!("Harga ({} jam)", duration),
        format_rupiah(quote.base)
    );
    if let Some(applied) = quote.promo {
        println!(
            "{:<20} {:>19}",
            format!("Diskon {}", applied.code()),
            format!("-{}", format_rupiah(quote.discount))
        );
    }
    println!("{}", "-".repeat(40));
    println!("{:<20} {:>19}", "Total", format_rupiah(quote.total));
    Ok(quote)
}

pub fn list_bookings(tab: Option<&str>) -> Result<()> {
    let tabs: Vec<BookingTab> = match tab {
        Some(label) => vec![BookingTab::parse(label).ok_or_else(|| {
            FutsalError::Other(format!(
                "Unknown tab '{}'. Use upcoming, history or cancelled",
                label
            ))
        })?],
        None => BookingTab::ALL.to_vec(),
    };

    for tab in tabs {
        let records = history::bookings_in(tab);
        println!("\n=== {} ({}) ===", tab.label(), records.len());
        for record in records {
            println!(
                "{}  {:<24} {} {}  {} jam  {:<11} {:>12}",
                record.booking_number,
                record.venue_name,
                record.date.format("%Y-%m-%d"),
                record.time,
                record.duration,
                record.lapangan,
                format_rupiah(record.total)
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_applies_promo() {
        let quote = quote(1, "13:00", 2, Some("DISKON50K"), false).unwrap();
        assert_eq!(quote.base, 300_000);
        assert_eq!(quote.discount, 50_000);
        assert_eq!(quote.total, 250_000);
    }

    #[test]
    fn test_quote_rejects_booked_slot_and_unknown_venue() {
        assert!(matches!(
            quote(1, "08:00", 1, None, false),
            Err(FutsalError::Validation(ValidationError::SlotUnavailable(_)))
        ));
        assert!(matches!(
            quote(9, "09:00", 1, None, false),
            Err(FutsalError::Validation(ValidationError::UnknownVenue(9)))
        ));
    }

    #[test]
    fn test_unknown_filter_is_an_error() {
        assert!(list_venues(Some("grass"), None, false).is_err());
        assert!(list_venues(Some("rumput-sintetis"), None, false).is_ok());
        assert!(list_bookings(Some("someday")).is_err());
    }
}
