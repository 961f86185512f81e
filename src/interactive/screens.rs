//! Per-screen UI state that lives outside the booking draft
//!
//! Each state is rebuilt when its screen is entered, seeded from the draft so
//! that going back does not lose earlier choices.

use chrono::{DateTime, Local, NaiveDate};
use tui_input::Input;

use crate::catalog::{
    self, Court, PaymentMethod, TimeSlot, Venue, VenueFilter, COURTS, TIME_SLOTS,
};
use crate::countdown::ClockedCountdown;
use crate::draft::BookingDraft;
use crate::error::{Result, ValidationError};
use crate::history::{self, BookingRecord, BookingTab};
use crate::pricing::{Promo, Quote};
use crate::schedule;
use crate::ticket::QrPattern;

/// Move `index` by `delta` within `0..len`, clamping at both ends
fn step(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let moved = index as isize + delta;
    moved.clamp(0, len as isize - 1) as usize
}

#[derive(Debug, Default)]
pub struct HomeState {
    pub search: Input,
    pub searching: bool,
    pub filter: Option<VenueFilter>,
    pub selected: usize,
}

impl HomeState {
    pub fn venues(&self) -> Vec<Venue> {
        catalog::search_venues(self.filter, self.search.value())
    }

    pub fn selected_venue(&self) -> Option<Venue> {
        self.venues().get(self.selected).copied()
    }

    pub fn move_selection(&mut self, delta: isize) {
        self.selected = step(self.selected, delta, self.venues().len());
    }

    /// Choosing the active chip again clears it
    pub fn toggle_filter(&mut self, filter: VenueFilter) {
        self.filter = if self.filter == Some(filter) {
            None
        } else {
            Some(filter)
        };
        self.clamp_selection();
    }

    /// Step through no filter and each chip in order
    pub fn cycle_filter(&mut self) {
        self.filter = match self.filter {
            None => Some(VenueFilter::ALL[0]),
            Some(current) => VenueFilter::ALL
                .iter()
                .position(|f| *f == current)
                .and_then(|i| VenueFilter::ALL.get(i + 1).copied()),
        };
        self.clamp_selection();
    }

    pub fn clamp_selection(&mut self) {
        let len = self.venues().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

/// Gallery position on the venue detail screen
#[derive(Debug, Default)]
pub struct DetailState {
    pub image: usize,
}

impl DetailState {
    pub const IMAGES: usize = 3;

    pub fn next_image(&mut self) {
        self.image = (self.image + 1) % Self::IMAGES;
    }

    pub fn previous_image(&mut self) {
        self.image = (self.image + Self::IMAGES - 1) % Self::IMAGES;
    }
}

#[derive(Debug)]
pub struct ScheduleState {
    pub dates: Vec<NaiveDate>,
    pub date_index: usize,
    pub duration: u32,
    /// Highlighted slot, an index into `TIME_SLOTS`
    pub cursor: usize,
    pub selected: Option<TimeSlot>,
}

impl ScheduleState {
    pub fn new(today: NaiveDate, days: u32, draft: &BookingDraft) -> Self {
        let dates = schedule::upcoming_dates(today, days);
        let date_index = draft
            .date
            .and_then(|d| dates.iter().position(|x| *x == d))
            .unwrap_or(0);
        let selected = draft.time.as_deref().and_then(catalog::slot_by_time);
        let cursor = selected
            .and_then(|s| TIME_SLOTS.iter().position(|t| t.time == s.time))
            .unwrap_or(0);
        Self {
            dates,
            date_index,
            duration: draft.duration.unwrap_or(1),
            cursor,
            selected,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.dates.get(self.date_index).copied()
    }

    pub fn move_date(&mut self, delta: isize) {
        self.date_index = step(self.date_index, delta, self.dates.len());
    }

    pub fn set_duration(&mut self, hours: u32) -> Result<()> {
        self.duration = schedule::validate_duration(hours)?;
        Ok(())
    }

    pub fn move_cursor(&mut self, delta: isize) {
        self.cursor = step(self.cursor, delta, TIME_SLOTS.len());
    }

    pub fn cursor_slot(&self) -> TimeSlot {
        TIME_SLOTS[self.cursor.min(TIME_SLOTS.len() - 1)]
    }

    /// Pick the highlighted slot; booked slots are refused
    pub fn select_cursor(&mut self) -> Result<TimeSlot> {
        let slot = schedule::bookable_slot(self.cursor_slot().time)?;
        self.selected = Some(slot);
        Ok(slot)
    }

    /// Draft fields for "Lanjutkan"
    pub fn patch(&self, venue: Venue) -> Result<BookingDraft> {
        let slot = self
            .selected
            .ok_or_else(|| ValidationError::MissingField("Jam".to_string()))?;
        let date = self
            .date()
            .ok_or_else(|| ValidationError::MissingField("Tanggal".to_string()))?;
        let schedule = schedule::build_schedule(venue, date, slot.time, self.duration)?;
        Ok(BookingDraft::new()
            .with_venue(schedule.venue)
            .with_date(schedule.date)
            .with_time(&schedule.time)
            .with_duration(schedule.duration)
            .with_price(schedule.price))
    }
}

#[derive(Debug, Default)]
pub struct CourtState {
    pub cursor: usize,
    pub selected: Option<Court>,
}

impl CourtState {
    /// Courts are drawn two per row
    pub const COLUMNS: usize = 2;

    pub fn from_draft(draft: &BookingDraft) -> Self {
        let selected = draft.lapangan;
        let cursor = selected
            .and_then(|c| COURTS.iter().position(|x| x.id == c.id))
            .unwrap_or(0);
        Self { cursor, selected }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        self.cursor = step(self.cursor, delta, COURTS.len());
    }

    pub fn select_cursor(&mut self) -> Result<Court> {
        let court = COURTS[self.cursor.min(COURTS.len() - 1)];
        if !court.is_available() {
            return Err(ValidationError::CourtUnavailable(court.name.to_string()).into());
        }
        self.selected = Some(court);
        Ok(court)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewFocus {
    #[default]
    PromoInput,
    QuickFill(Promo),
    Continue,
}

impl ReviewFocus {
    pub fn next(&self) -> ReviewFocus {
        match self {
            ReviewFocus::PromoInput => ReviewFocus::QuickFill(Promo::ALL[0]),
            ReviewFocus::QuickFill(Promo::First30) => ReviewFocus::QuickFill(Promo::Diskon50k),
            ReviewFocus::QuickFill(Promo::Diskon50k) => ReviewFocus::Continue,
            ReviewFocus::Continue => ReviewFocus::PromoInput,
        }
    }

    pub fn previous(&self) -> ReviewFocus {
        match self {
            ReviewFocus::PromoInput => ReviewFocus::Continue,
            ReviewFocus::QuickFill(Promo::First30) => ReviewFocus::PromoInput,
            ReviewFocus::QuickFill(Promo::Diskon50k) => ReviewFocus::QuickFill(Promo::First30),
            ReviewFocus::Continue => ReviewFocus::QuickFill(Promo::Diskon50k),
        }
    }
}

#[derive(Debug, Default)]
pub struct ReviewState {
    pub promo: Input,
    pub focus: ReviewFocus,
    pub applied: Option<Promo>,
}

impl ReviewState {
    /// Keep a promo applied earlier, only when it actually discounted
    pub fn from_draft(draft: &BookingDraft) -> Self {
        let applied = draft
            .promo_code
            .as_deref()
            .and_then(Promo::parse)
            .filter(|_| draft.discount.unwrap_or(0) > 0);
        Self {
            promo: Input::new(applied.map(|p| p.code().to_string()).unwrap_or_default()),
            focus: ReviewFocus::default(),
            applied,
        }
    }

    /// "Pakai": unknown codes clear any applied promo
    pub fn apply(&mut self) -> Option<Promo> {
        self.applied = Promo::parse(self.promo.value());
        self.applied
    }

    pub fn fill(&mut self, promo: Promo) {
        self.promo = Input::new(promo.code().to_string());
    }

    pub fn quote(&self, draft: &BookingDraft) -> Option<Quote> {
        Some(Quote::new(
            draft.price?,
            draft.duration?,
            self.applied.map(|p| p.code()),
        ))
    }

    /// Draft fields for "Lanjut ke Pembayaran"
    pub fn patch(&self, draft: &BookingDraft) -> Result<BookingDraft> {
        let quote = self
            .quote(draft)
            .ok_or_else(|| ValidationError::MissingField("Harga".to_string()))?;
        let mut patch = BookingDraft::new()
            .with_discount(quote.discount)
            .with_total(quote.total);
        if let Some(promo) = quote.promo {
            patch = patch.with_promo_code(promo.code());
        }
        Ok(patch)
    }
}

#[derive(Debug)]
pub struct PaymentState {
    pub cursor: usize,
    pub selected: Option<PaymentMethod>,
    pub countdown: ClockedCountdown,
}

impl PaymentState {
    pub fn start(seconds: u32, now: DateTime<Local>) -> Self {
        Self {
            cursor: 0,
            selected: None,
            countdown: ClockedCountdown::start(seconds, now),
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        self.cursor = step(self.cursor, delta, catalog::payment_methods().len());
    }

    pub fn select_cursor(&mut self) -> Option<PaymentMethod> {
        self.selected = catalog::payment_methods().get(self.cursor).copied();
        self.selected
    }
}

#[derive(Debug)]
pub struct TicketState {
    pub qr: QrPattern,
}

#[derive(Debug, Default)]
pub struct BookingsState {
    pub tab: BookingTab,
    pub selected: usize,
}

impl BookingsState {
    pub fn records(&self) -> Vec<BookingRecord> {
        history::bookings_in(self.tab)
    }

    pub fn selected_record(&self) -> Option<BookingRecord> {
        self.records().into_iter().nth(self.selected)
    }

    pub fn switch_tab(&mut self, tab: BookingTab) {
        self.tab = tab;
        self.selected = 0;
    }

    pub fn move_selection(&mut self, delta: isize) {
        self.selected = step(self.selected, delta, self.records().len());
    }
}

#[derive(Debug)]
pub struct ProfileState {
    pub cursor: usize,
    pub notifications: bool,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            cursor: 0,
            notifications: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VENUES;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 24).unwrap()
    }

    #[test]
    fn test_home_filter_toggle_and_cycle() {
        let mut home = HomeState::default();
        home.toggle_filter(VenueFilter::Outdoor);
        assert_eq!(home.venues().len(), 1);
        home.toggle_filter(VenueFilter::Outdoor);
        assert_eq!(home.filter, None);

        let mut seen = Vec::new();
        for _ in 0..5 {
            home.cycle_filter();
            seen.push(home.filter);
        }
        assert_eq!(seen[3], Some(VenueFilter::RumputSintetis));
        assert_eq!(seen[4], None);
    }

    #[test]
    fn test_home_selection_clamps_to_results() {
        let mut home = HomeState {
            selected: 3,
            ..HomeState::default()
        };
        home.toggle_filter(VenueFilter::Outdoor);
        assert_eq!(home.selected, 0);
        assert_eq!(home.selected_venue().map(|v| v.id), Some(2));
        home.move_selection(-1);
        assert_eq!(home.selected, 0);
    }

    #[test]
    fn test_carousel_wraps() {
        let mut detail = DetailState::default();
        detail.previous_image();
        assert_eq!(detail.image, 2);
        detail.next_image();
        detail.next_image();
        assert_eq!(detail.image, 1);
    }

    #[test]
    fn test_schedule_refuses_booked_slot() {
        let mut state = ScheduleState::new(today(), 14, &BookingDraft::new());
        assert_eq!(state.dates.len(), 14);
        state.move_cursor(2); // 08:00 is booked
        assert!(state.select_cursor().is_err());
        assert!(state.selected.is_none());
        assert!(state.patch(VENUES[0]).is_err());

        state.move_cursor(1);
        state.select_cursor().unwrap();
        state.set_duration(2).unwrap();
        assert!(state.set_duration(5).is_err());
        let patch = state.patch(VENUES[0]).unwrap();
        assert_eq!(patch.time.as_deref(), Some("09:00"));
        assert_eq!(patch.duration, Some(2));
        assert_eq!(patch.date, Some(today()));
        assert_eq!(patch.price, Some(120_000));
    }

    #[test]
    fn test_schedule_is_seeded_from_draft() {
        let draft = BookingDraft::new()
            .with_date(NaiveDate::from_ymd_opt(2025, 10, 26).unwrap())
            .with_time("18:00")
            .with_duration(3);
        let state = ScheduleState::new(today(), 14, &draft);
        assert_eq!(state.date_index, 2);
        assert_eq!(state.duration, 3);
        assert_eq!(state.selected.map(|s| s.time), Some("18:00"));
        assert_eq!(state.cursor_slot().time, "18:00");
    }

    #[test]
    fn test_court_selection() {
        let mut courts = CourtState::default();
        courts.move_cursor(2);
        assert!(courts.select_cursor().is_err());
        courts.move_cursor(1);
        assert_eq!(courts.select_cursor().unwrap().name, "Lapangan 4");
    }

    #[test]
    fn test_review_patch_with_and_without_promo() {
        let draft = BookingDraft::new().with_price(120_000).with_duration(1);
        let mut review = ReviewState::default();
        review.fill(Promo::Diskon50k);
        assert_eq!(review.apply(), Some(Promo::Diskon50k));
        let patch = review.patch(&draft).unwrap();
        assert_eq!(patch.discount, Some(50_000));
        assert_eq!(patch.total, Some(70_000));
        assert_eq!(patch.promo_code.as_deref(), Some("DISKON50K"));

        review.promo = Input::new("NOPE".to_string());
        assert_eq!(review.apply(), None);
        let patch = review.patch(&draft).unwrap();
        assert_eq!(patch.discount, Some(0));
        assert_eq!(patch.total, Some(120_000));
    }

    #[test]
    fn test_review_focus_cycle() {
        let mut focus = ReviewFocus::default();
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, ReviewFocus::PromoInput);
        assert_eq!(focus.previous(), ReviewFocus::Continue);
    }

    #[test]
    fn test_bookings_tabs() {
        let mut bookings = BookingsState::default();
        assert_eq!(bookings.records().len(), 2);
        bookings.move_selection(5);
        assert_eq!(bookings.selected, 1);
        bookings.switch_tab(BookingTab::Cancelled);
        assert_eq!(bookings.selected, 0);
        assert_eq!(
            bookings.selected_record().map(|r| r.booking_number),
            Some("FSK55667788")
        );
    }
}
