//! Bookable dates, Indonesian date labels and slot validation

use chrono::{Datelike, Duration, NaiveDate};

use crate::catalog::{self, TimeSlot, Venue, DURATIONS};
use crate::draft::Schedule;
use crate::error::{Result, ValidationError};

const SHORT_DAYS: [&str; 7] = ["Min", "Sen", "Sel", "Rab", "Kam", "Jum", "Sab"];
const LONG_DAYS: [&str; 7] = ["Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu"];
const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];
const LONG_MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// `days` consecutive dates starting at `today`
pub fn upcoming_dates(today: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (0..i64::from(days))
        .map(|i| today + Duration::days(i))
        .collect()
}

pub fn short_day_name(date: NaiveDate) -> &'static str {
    SHORT_DAYS[date.weekday().num_days_from_sunday() as usize]
}

pub fn short_month_name(date: NaiveDate) -> &'static str {
    SHORT_MONTHS[date.month0() as usize]
}

/// `26 Oktober 2025`
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        LONG_MONTHS[date.month0() as usize],
        date.year()
    )
}

/// `Minggu, 26 Oktober 2025`
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}, {}",
        LONG_DAYS[date.weekday().num_days_from_sunday() as usize],
        format_date(date)
    )
}

pub fn validate_duration(duration: u32) -> Result<u32> {
    if DURATIONS.contains(&duration) {
        Ok(duration)
    } else {
        Err(ValidationError::InvalidDuration(duration).into())
    }
}

/// Look up a slot and refuse booked ones
pub fn bookable_slot(time: &str) -> Result<TimeSlot> {
    let slot =
        catalog::slot_by_time(time).ok_or_else(|| ValidationError::UnknownSlot(time.to_string()))?;
    if !slot.available {
        return Err(ValidationError::SlotUnavailable(time.to_string()).into());
    }
    Ok(slot)
}

/// Everything the schedule screen would patch into the draft
pub fn build_schedule(
    venue: Venue,
    date: NaiveDate,
    time: &str,
    duration: u32,
) -> Result<Schedule> {
    let duration = validate_duration(duration)?;
    let slot = bookable_slot(time)?;
    Ok(Schedule {
        venue,
        date,
        time: slot.time.to_string(),
        duration,
        price: slot.price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VENUES;
    use crate::error::FutsalError;

    #[test]
    fn test_upcoming_dates_span_months() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 24).unwrap();
        let dates = upcoming_dates(today, 14);
        assert_eq!(dates.len(), 14);
        assert_eq!(dates[0], today);
        assert_eq!(dates[13], NaiveDate::from_ymd_opt(2025, 11, 6).unwrap());
    }

    #[test]
    fn test_indonesian_labels() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 26).unwrap(); // a Sunday
        assert_eq!(short_day_name(date), "Min");
        assert_eq!(short_month_name(date), "Okt");
        assert_eq!(format_date(date), "26 Oktober 2025");
        assert_eq!(format_long_date(date), "Minggu, 26 Oktober 2025");
        let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        assert_eq!(short_day_name(date), "Jum");
        assert_eq!(short_month_name(date), "Agu");
    }

    #[test]
    fn test_build_schedule_uses_slot_price() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 26).unwrap();
        let schedule = build_schedule(VENUES[0], date, "13:00", 2).unwrap();
        assert_eq!(schedule.price, 150_000);
        assert_eq!(schedule.duration, 2);
    }

    #[test]
    fn test_build_schedule_rejects_bad_input() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 26).unwrap();
        assert!(matches!(
            build_schedule(VENUES[0], date, "08:00", 1),
            Err(FutsalError::Validation(ValidationError::SlotUnavailable(_)))
        ));
        assert!(matches!(
            build_schedule(VENUES[0], date, "05:00", 1),
            Err(FutsalError::Validation(ValidationError::UnknownSlot(_)))
        ));
        assert!(matches!(
            build_schedule(VENUES[0], date, "09:00", 4),
            Err(FutsalError::Validation(ValidationError::InvalidDuration(4)))
        ));
    }
}
