//! Screen graph and the navigator that walks it
//!
//! Every transition is checked against an explicit table and against the
//! booking stage the target screen needs. A refused transition leaves the
//! navigator exactly as it was.

use std::fmt;

use crate::catalog::Venue;
use crate::draft::{BookingDraft, BookingStage};
use crate::error::NavigationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Welcome,
    Login,
    Register,
    ForgotPassword,
    Home,
    DetailVenue,
    PilihJadwal,
    PilihLapangan,
    ReviewBooking,
    Pembayaran,
    ETicket,
    MyBookings,
    Dashboard,
    Profile,
}

impl Screen {
    pub const ALL: [Screen; 14] = [
        Screen::Welcome,
        Screen::Login,
        Screen::Register,
        Screen::ForgotPassword,
        Screen::Home,
        Screen::DetailVenue,
        Screen::PilihJadwal,
        Screen::PilihLapangan,
        Screen::ReviewBooking,
        Screen::Pembayaran,
        Screen::ETicket,
        Screen::MyBookings,
        Screen::Dashboard,
        Screen::Profile,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::Login => "login",
            Screen::Register => "register",
            Screen::ForgotPassword => "forgot-password",
            Screen::Home => "home",
            Screen::DetailVenue => "detail-venue",
            Screen::PilihJadwal => "pilih-jadwal",
            Screen::PilihLapangan => "pilih-lapangan",
            Screen::ReviewBooking => "review-booking",
            Screen::Pembayaran => "pembayaran",
            Screen::ETicket => "e-ticket",
            Screen::MyBookings => "my-bookings",
            Screen::Dashboard => "dashboard",
            Screen::Profile => "profile",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Welcome => "Selamat Datang",
            Screen::Login => "Masuk",
            Screen::Register => "Daftar",
            Screen::ForgotPassword => "Lupa Password",
            Screen::Home => "Beranda",
            Screen::DetailVenue => "Detail Venue",
            Screen::PilihJadwal => "Pilih Jadwal",
            Screen::PilihLapangan => "Pilih Lapangan",
            Screen::ReviewBooking => "Review Booking",
            Screen::Pembayaran => "Pembayaran",
            Screen::ETicket => "E-Ticket",
            Screen::MyBookings => "Booking Saya",
            Screen::Dashboard => "Dashboard",
            Screen::Profile => "Profil",
        }
    }

    pub fn parse(id: &str) -> Option<Screen> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Unknown ids land on the welcome screen
    pub fn from_id_or_welcome(id: &str) -> Screen {
        Self::parse(id).unwrap_or(Screen::Welcome)
    }

    /// Screens reachable from this one
    pub fn targets(&self) -> &'static [Screen] {
        use Screen::*;
        match self {
            Welcome => &[Login, Register],
            Login => &[Home, Register, ForgotPassword, Welcome],
            Register => &[Welcome, Login],
            ForgotPassword => &[Login],
            Home => &[DetailVenue, MyBookings, Dashboard, Profile],
            DetailVenue => &[Home, PilihJadwal],
            PilihJadwal => &[DetailVenue, PilihLapangan],
            PilihLapangan => &[PilihJadwal, ReviewBooking],
            ReviewBooking => &[PilihLapangan, Pembayaran],
            Pembayaran => &[ReviewBooking, ETicket],
            ETicket => &[MyBookings, Home],
            MyBookings => &[Home, ETicket],
            Dashboard => &[Home, MyBookings],
            Profile => &[Home, MyBookings, Welcome],
        }
    }

    pub fn can_go_to(&self, target: Screen) -> bool {
        *self == target || self.targets().contains(&target)
    }

    /// Draft stage a screen needs before it can be shown
    pub fn required_stage(&self) -> BookingStage {
        match self {
            Screen::DetailVenue | Screen::PilihJadwal => BookingStage::VenueSelected,
            Screen::PilihLapangan => BookingStage::Scheduled,
            Screen::ReviewBooking => BookingStage::CourtSelected,
            Screen::Pembayaran => BookingStage::Priced,
            Screen::ETicket => BookingStage::Confirmed,
            _ => BookingStage::Browsing,
        }
    }

    /// Entering these screens throws the draft away
    pub fn resets_draft(&self) -> bool {
        matches!(self, Screen::Welcome | Screen::Home | Screen::MyBookings)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Optional data attached to a navigation
#[derive(Debug, Clone, Default)]
pub struct Patch {
    pub venue: Option<Venue>,
    pub booking: Option<BookingDraft>,
}

impl Patch {
    pub fn venue(venue: Venue) -> Self {
        Patch {
            venue: Some(venue),
            booking: None,
        }
    }

    pub fn booking(booking: BookingDraft) -> Self {
        Patch {
            venue: None,
            booking: Some(booking),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    current: Screen,
    selected_venue: Option<Venue>,
    draft: BookingDraft,
    logged_in: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: Screen::Welcome,
            selected_venue: None,
            draft: BookingDraft::default(),
            logged_in: false,
        }
    }

    /// Position a navigator at `screen` with an existing draft
    pub fn restore(screen: Screen, draft: BookingDraft) -> Result<Self, NavigationError> {
        let selected_venue = draft.venue;
        check_stage(screen, selected_venue, &draft)?;
        Ok(Self {
            current: screen,
            selected_venue,
            draft,
            logged_in: !matches!(
                screen,
                Screen::Welcome | Screen::Login | Screen::Register | Screen::ForgotPassword
            ),
        })
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// Venue picked on home, falling back to the one in the draft
    pub fn selected_venue(&self) -> Option<Venue> {
        self.selected_venue.or(self.draft.venue)
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn navigate(&mut self, target: Screen, patch: Option<Patch>) -> Result<(), NavigationError> {
        let from = self.current;
        if !from.can_go_to(target) {
            tracing::warn!(from = %from, to = %target, "Refused illegal transition");
            return Err(NavigationError::IllegalTransition { from, to: target });
        }

        let (mut selected_venue, mut draft) = if target.resets_draft() {
            (None, BookingDraft::default())
        } else {
            (self.selected_venue, self.draft.clone())
        };

        if let Some(patch) = patch {
            if let Some(venue) = patch.venue {
                selected_venue = Some(venue);
            }
            if let Some(booking) = patch.booking {
                draft = draft.merged(&booking);
            }
        }

        if let Err(err) = check_stage(target, selected_venue, &draft) {
            tracing::warn!(from = %from, to = %target, error = %err, "Refused incomplete booking");
            return Err(err);
        }

        tracing::debug!(from = %from, to = %target, stage = ?draft.stage(), "Navigate");
        self.current = target;
        self.selected_venue = selected_venue;
        self.draft = draft;
        Ok(())
    }

    /// Successful sign-in from the login screen
    pub fn login(&mut self) -> Result<(), NavigationError> {
        self.navigate(Screen::Home, None)?;
        self.logged_in = true;
        tracing::info!("Signed in");
        Ok(())
    }

    pub fn logout(&mut self) -> Result<(), NavigationError> {
        self.navigate(Screen::Welcome, None)?;
        self.logged_in = false;
        tracing::info!("Signed out");
        Ok(())
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

fn check_stage(
    screen: Screen,
    selected_venue: Option<Venue>,
    draft: &BookingDraft,
) -> Result<(), NavigationError> {
    let stage = screen.required_stage();
    let mut missing = draft.missing_for(stage);
    // the venue chosen on home counts even before it enters the draft
    if selected_venue.is_some() {
        missing.retain(|field| *field != "venue" || stage > BookingStage::VenueSelected);
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(NavigationError::IncompleteDraft { screen, missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{COURTS, VENUES};
    use chrono::NaiveDate;

    fn at_home() -> Navigator {
        let mut nav = Navigator::new();
        nav.navigate(Screen::Login, None).unwrap();
        nav.login().unwrap();
        nav
    }

    fn schedule_patch() -> Patch {
        Patch::booking(
            BookingDraft::new()
                .with_venue(VENUES[0])
                .with_date(NaiveDate::from_ymd_opt(2025, 10, 26).unwrap())
                .with_time("18:00")
                .with_duration(2)
                .with_price(180_000),
        )
    }

    #[test]
    fn test_ids_round_trip_and_fallback() {
        for screen in Screen::ALL {
            assert_eq!(Screen::parse(screen.id()), Some(screen));
        }
        assert_eq!(Screen::parse("settings"), None);
        assert_eq!(Screen::from_id_or_welcome("settings"), Screen::Welcome);
        assert_eq!(Screen::from_id_or_welcome("pembayaran"), Screen::Pembayaran);
    }

    #[test]
    fn test_every_screen_is_reachable() {
        let mut seen = vec![Screen::Welcome];
        let mut queue = vec![Screen::Welcome];
        while let Some(screen) = queue.pop() {
            for target in screen.targets() {
                if !seen.contains(target) {
                    seen.push(*target);
                    queue.push(*target);
                }
            }
        }
        assert_eq!(seen.len(), Screen::ALL.len());
    }

    #[test]
    fn test_login_and_logout() {
        let mut nav = at_home();
        assert_eq!(nav.current(), Screen::Home);
        assert!(nav.is_logged_in());

        nav.navigate(Screen::Profile, None).unwrap();
        nav.logout().unwrap();
        assert_eq!(nav.current(), Screen::Welcome);
        assert!(!nav.is_logged_in());
    }

    #[test]
    fn test_illegal_transition_changes_nothing() {
        let mut nav = Navigator::new();
        let err = nav
            .navigate(Screen::Pembayaran, Some(Patch::booking(BookingDraft::new().with_total(1))))
            .unwrap_err();
        assert_eq!(
            err,
            NavigationError::IllegalTransition {
                from: Screen::Welcome,
                to: Screen::Pembayaran
            }
        );
        assert_eq!(nav.current(), Screen::Welcome);
        assert!(nav.draft().is_empty());
    }

    #[test]
    fn test_incomplete_draft_is_refused() {
        let mut nav = at_home();
        let err = nav.navigate(Screen::DetailVenue, None).unwrap_err();
        assert_eq!(
            err,
            NavigationError::IncompleteDraft {
                screen: Screen::DetailVenue,
                missing: vec!["venue"]
            }
        );

        nav.navigate(Screen::DetailVenue, Some(Patch::venue(VENUES[2])))
            .unwrap();
        nav.navigate(Screen::PilihJadwal, None).unwrap();
        let err = nav
            .navigate(
                Screen::PilihLapangan,
                Some(Patch::booking(BookingDraft::new().with_time("09:00"))),
            )
            .unwrap_err();
        assert!(matches!(err, NavigationError::IncompleteDraft { .. }));
        assert_eq!(nav.current(), Screen::PilihJadwal);
        assert!(nav.draft().time.is_none());
    }

    #[test]
    fn test_back_navigation_keeps_schedule() {
        let mut nav = at_home();
        nav.navigate(Screen::DetailVenue, Some(Patch::venue(VENUES[0])))
            .unwrap();
        nav.navigate(Screen::PilihJadwal, Some(Patch::venue(VENUES[0])))
            .unwrap();
        nav.navigate(Screen::PilihLapangan, Some(schedule_patch()))
            .unwrap();
        nav.navigate(Screen::PilihJadwal, Some(Patch::venue(VENUES[0])))
            .unwrap();

        let draft = nav.draft();
        assert_eq!(draft.venue.map(|v| v.id), Some(1));
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2025, 10, 26));
        assert_eq!(draft.time.as_deref(), Some("18:00"));
        assert_eq!(draft.duration, Some(2));
    }

    #[test]
    fn test_home_discards_draft() {
        let mut nav = at_home();
        nav.navigate(Screen::DetailVenue, Some(Patch::venue(VENUES[0])))
            .unwrap();
        nav.navigate(Screen::PilihJadwal, None).unwrap();
        nav.navigate(Screen::PilihLapangan, Some(schedule_patch()))
            .unwrap();
        nav.navigate(
            Screen::ReviewBooking,
            Some(Patch::booking(BookingDraft::new().with_lapangan(COURTS[0]))),
        )
        .unwrap();

        // walk back to home via the detail screen
        nav.navigate(Screen::PilihLapangan, None).unwrap();
        nav.navigate(Screen::PilihJadwal, None).unwrap();
        nav.navigate(Screen::DetailVenue, None).unwrap();
        nav.navigate(Screen::Home, None).unwrap();

        assert!(nav.draft().is_empty());
        assert!(nav.selected_venue().is_none());
    }

    #[test]
    fn test_restore_validates_stage() {
        assert!(Navigator::restore(Screen::Pembayaran, BookingDraft::new()).is_err());

        let draft = schedule_patch().booking.unwrap();
        let nav = Navigator::restore(Screen::PilihLapangan, draft).unwrap();
        assert_eq!(nav.current(), Screen::PilihLapangan);
        assert_eq!(nav.selected_venue().map(|v| v.id), Some(1));
        assert!(nav.is_logged_in());
    }

    #[test]
    fn test_self_transition_is_a_rerender() {
        let mut nav = at_home();
        nav.navigate(Screen::Home, None).unwrap();
        assert_eq!(nav.current(), Screen::Home);
    }
}
