//! Application state and key handling for the interactive UI

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;

use crate::account::{MenuAction, PROFILE_MENU, USER};
use crate::catalog::{self, VenueFilter};
use crate::clock::{Clock, RandomSource};
use crate::config::Config;
use crate::draft::BookingDraft;
use crate::navigation::{Navigator, Patch, Screen};
use crate::pricing::{format_rupiah, Promo};
use crate::schedule;
use crate::ticket::{self, QrPattern, ShareTarget, TicketAction};

use super::forms::{
    edit_input, ForgotPasswordForm, LoginField, LoginForm, RegisterField, RegisterForm,
    ResetStep,
};
use super::messages::{self, Message, MessageType};
use super::screens::{
    BookingsState, CourtState, DetailState, HomeState, PaymentState, ProfileState, ReviewFocus,
    ReviewState, ScheduleState, TicketState,
};

pub struct App {
    pub config: Config,
    pub navigator: Navigator,
    pub messages: Vec<Message>,
    pub show_help: bool,
    /// Set while the simulated payment is in flight; input is ignored
    pub loading: bool,
    pub loading_message: String,
    clock: Arc<dyn Clock>,
    rng: Box<dyn RandomSource>,
    share: Box<dyn ShareTarget>,
    pending_payment: bool,

    pub login: LoginForm,
    pub register: RegisterForm,
    pub forgot: ForgotPasswordForm,
    pub home: HomeState,
    pub detail: DetailState,
    pub schedule: ScheduleState,
    pub court: CourtState,
    pub review: ReviewState,
    pub payment: PaymentState,
    pub ticket: TicketState,
    pub bookings: BookingsState,
    pub profile: ProfileState,
}

impl App {
    pub fn new(
        config: Config,
        clock: Arc<dyn Clock>,
        mut rng: Box<dyn RandomSource>,
        share: Box<dyn ShareTarget>,
    ) -> Self {
        let draft = BookingDraft::default();
        let schedule = ScheduleState::new(clock.today(), config.schedule_days, &draft);
        let payment = PaymentState::start(config.countdown_seconds, clock.now());
        let ticket = TicketState {
            qr: QrPattern::generate(rng.as_mut()),
        };

        Self {
            config,
            navigator: Navigator::new(),
            messages: Vec::new(),
            show_help: false,
            loading: false,
            loading_message: String::new(),
            clock,
            rng,
            share,
            pending_payment: false,
            login: LoginForm::default(),
            register: RegisterForm::default(),
            forgot: ForgotPasswordForm::default(),
            home: HomeState::default(),
            detail: DetailState::default(),
            schedule,
            court: CourtState::default(),
            review: ReviewState::default(),
            payment,
            ticket,
            bookings: BookingsState::default(),
            profile: ProfileState::default(),
        }
    }

    /// Start from an already positioned navigator, e.g. a resumed booking
    pub fn with_navigator(mut self, navigator: Navigator) -> Self {
        let screen = navigator.current();
        self.navigator = navigator;
        self.enter(screen);
        self
    }

    pub fn screen(&self) -> Screen {
        self.navigator.current()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn payment_pending(&self) -> bool {
        self.pending_payment
    }

    pub fn add_message(&mut self, message_type: MessageType, text: impl Into<String>) {
        messages::push(&mut self.messages, Message::new(message_type, text));
    }

    /// Navigate and reset the target screen's state; refusals become messages
    pub fn go(&mut self, target: Screen, patch: Option<Patch>) -> bool {
        match self.navigator.navigate(target, patch) {
            Ok(()) => {
                self.enter(target);
                true
            }
            Err(e) => {
                self.add_message(MessageType::Error, e.to_string());
                false
            }
        }
    }

    fn enter(&mut self, screen: Screen) {
        let draft = self.navigator.draft().clone();
        match screen {
            Screen::Welcome => {
                self.login = LoginForm::default();
                self.register = RegisterForm::default();
            }
            Screen::Login => self.login = LoginForm::default(),
            Screen::Register => self.register = RegisterForm::default(),
            Screen::ForgotPassword => self.forgot = ForgotPasswordForm::default(),
            Screen::Home => self.home = HomeState::default(),
            Screen::DetailVenue => self.detail = DetailState::default(),
            Screen::PilihJadwal => {
                self.schedule =
                    ScheduleState::new(self.clock.today(), self.config.schedule_days, &draft)
            }
            Screen::PilihLapangan => self.court = CourtState::from_draft(&draft),
            Screen::ReviewBooking => self.review = ReviewState::from_draft(&draft),
            Screen::Pembayaran => {
                self.payment = PaymentState::start(self.config.countdown_seconds, self.clock.now())
            }
            Screen::ETicket => {
                self.ticket = TicketState {
                    qr: QrPattern::generate(self.rng.as_mut()),
                }
            }
            Screen::MyBookings => self.bookings = BookingsState::default(),
            Screen::Dashboard => {}
            Screen::Profile => self.profile.cursor = 0,
        }
    }

    /// Periodic work between key presses
    pub fn on_tick(&mut self) {
        if self.screen() == Screen::Pembayaran {
            let was_expired = self.payment.countdown.countdown().is_expired();
            self.payment.countdown.sync(self.clock.now());
            if !was_expired && self.payment.countdown.countdown().is_expired() {
                tracing::info!("Payment countdown reached zero");
                self.add_message(MessageType::Warning, "Waktu pembayaran habis");
            }
        }
        self.messages.retain(|m| !m.is_expired());
    }

    /// Finish a payment started on the payment screen after the simulated delay
    pub async fn complete_payment(&mut self) {
        if !self.pending_payment {
            return;
        }
        tokio::time::sleep(Duration::from_millis(self.config.payment_delay_ms)).await;
        self.pending_payment = false;
        self.loading = false;

        let Some(method) = self.payment.selected else {
            return;
        };
        let number = ticket::booking_number(self.clock.as_ref());
        let patch = BookingDraft::new()
            .with_payment_method(method.id)
            .with_booking_number(&number);
        if self.go(Screen::ETicket, Some(Patch::booking(patch))) {
            tracing::info!(booking = %number, method = method.id, "Payment completed");
            self.add_message(MessageType::Success, "Pembayaran berhasil!");
        }
    }

    /// Whether keys currently go to a text field
    pub fn is_typing(&self) -> bool {
        match self.screen() {
            Screen::Login => matches!(self.login.focus, LoginField::Email | LoginField::Password),
            Screen::Register => self.register.focus.is_text(),
            Screen::ForgotPassword => {
                matches!(self.forgot.step, ResetStep::EnterEmail | ResetStep::NewPassword)
            }
            Screen::Home => self.home.searching,
            Screen::ReviewBooking => self.review.focus == ReviewFocus::PromoInput,
            _ => false,
        }
    }

    /// Handle a key press; returns false when the app should quit
    pub fn handle_event(&mut self, event: KeyEvent) -> bool {
        if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
            return false;
        }
        if self.loading {
            return true;
        }
        if self.show_help {
            if matches!(
                event.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return true;
        }
        if !self.is_typing() {
            match event.code {
                KeyCode::Char('q') => return false,
                KeyCode::Char('?') => {
                    self.show_help = true;
                    return true;
                }
                _ => {}
            }
        }

        match self.screen() {
            Screen::Welcome => self.on_welcome(event),
            Screen::Login => self.on_login(event),
            Screen::Register => self.on_register(event),
            Screen::ForgotPassword => self.on_forgot_password(event),
            Screen::Home => self.on_home(event),
            Screen::DetailVenue => self.on_detail(event),
            Screen::PilihJadwal => self.on_schedule(event),
            Screen::PilihLapangan => self.on_court(event),
            Screen::ReviewBooking => self.on_review(event),
            Screen::Pembayaran => self.on_payment(event),
            Screen::ETicket => self.on_ticket(event),
            Screen::MyBookings => self.on_my_bookings(event),
            Screen::Dashboard => self.on_dashboard(event),
            Screen::Profile => self.on_profile(event),
        }
        true
    }

    fn on_welcome(&mut self, event: KeyEvent) {
        match event.code {
            KeyCode::Enter | KeyCode::Char('l') | KeyCode::Char('m') => {
                self.go(Screen::Login, None);
            }
            KeyCode::Char('r') | KeyCode::Char('d') => {
                self.go(Screen::Register, None);
            }
            _ => {}
        }
    }

    fn on_login(&mut self, event: KeyEvent) {
        match event.code {
            KeyCode::Esc => {
                self.go(Screen::Welcome, None);
            }
            KeyCode::Tab | KeyCode::Down => self.login.focus = self.login.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.login.focus = self.login.focus.previous(),
            KeyCode::F(2) => self.login.show_password = !self.login.show_password,
            KeyCode::Enter => match self.login.focus {
                LoginField::Email => self.login.focus = LoginField::Password,
                LoginField::Password => self.sign_in(),
                LoginField::ForgotLink => {
                    self.go(Screen::ForgotPassword, None);
                }
                LoginField::RegisterLink => {
                    self.go(Screen::Register, None);
                }
            },
            _ => {
                if let Some(input) = self.login.focused_input() {
                    edit_input(input, event);
                }
            }
        }
    }

    fn sign_in(&mut self) {
        if let Err(e) = self.login.validate() {
            self.add_message(MessageType::Warning, e.to_string());
            return;
        }
        match self.navigator.login() {
            Ok(()) => {
                self.enter(Screen::Home);
                self.add_message(
                    MessageType::Success,
                    format!("Selamat datang, {}!", USER.name),
                );
            }
            Err(e) => self.add_message(MessageType::Error, e.to_string()),
        }
    }

    fn on_register(&mut self, event: KeyEvent) {
        let focus = self.register.focus;
        match event.code {
            KeyCode::Esc => {
                self.go(Screen::Welcome, None);
            }
            KeyCode::Tab | KeyCode::Down => self.register.focus = focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.register.focus = focus.previous(),
            KeyCode::F(2) => self.register.show_password = !self.register.show_password,
            KeyCode::Char(' ') if focus == RegisterField::Terms => {
                self.register.accept_terms = !self.register.accept_terms;
            }
            KeyCode::Enter => match focus {
                RegisterField::Terms => {
                    self.register.accept_terms = !self.register.accept_terms;
                }
                RegisterField::Submit => self.submit_registration(),
                RegisterField::LoginLink => {
                    self.go(Screen::Login, None);
                }
                _ => self.register.focus = focus.next(),
            },
            _ => {
                if let Some(input) = self.register.focused_input() {
                    edit_input(input, event);
                }
            }
        }
    }

    fn submit_registration(&mut self) {
        if let Err(e) = self.register.validate() {
            self.add_message(MessageType::Warning, e.to_string());
            return;
        }
        tracing::info!("Registered a new account");
        if self.go(Screen::Login, None) {
            self.add_message(MessageType::Success, "Pendaftaran berhasil! Silakan masuk.");
        }
    }

    fn on_forgot_password(&mut self, event: KeyEvent) {
        match event.code {
            KeyCode::Esc => match self.forgot.step.back() {
                Some(step) => self.forgot.step = step,
                None => {
                    self.go(Screen::Login, None);
                }
            },
            KeyCode::Enter if self.forgot.step == ResetStep::Done => {
                self.go(Screen::Login, None);
            }
            KeyCode::Enter => {
                if let Err(e) = self.forgot.advance() {
                    self.add_message(MessageType::Warning, e.to_string());
                }
            }
            KeyCode::Char('r') if self.forgot.step == ResetStep::CheckInbox => {
                self.forgot.resend();
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down
                if self.forgot.step == ResetStep::NewPassword =>
            {
                self.forgot.on_confirm = !self.forgot.on_confirm;
            }
            KeyCode::F(2) => self.forgot.show_password = !self.forgot.show_password,
            _ => {
                if let Some(input) = self.forgot.focused_input() {
                    edit_input(input, event);
                }
            }
        }
    }

    fn on_home(&mut self, event: KeyEvent) {
        if self.home.searching {
            match event.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Down | KeyCode::Tab => {
                    self.home.searching = false;
                }
                _ => {
                    edit_input(&mut self.home.search, event);
                    self.home.clamp_selection();
                }
            }
            return;
        }

        match event.code {
            KeyCode::Char('/') | KeyCode::Char('s') => self.home.searching = true,
            KeyCode::Up | KeyCode::Char('k') => self.home.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.home.move_selection(1),
            KeyCode::Char('f') => self.home.cycle_filter(),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.home.toggle_filter(VenueFilter::ALL[index]);
            }
            KeyCode::Char('x') => {
                self.home.filter = None;
                self.home.search.reset();
                self.home.clamp_selection();
            }
            KeyCode::Enter => match self.home.selected_venue() {
                Some(venue) => {
                    self.go(Screen::DetailVenue, Some(Patch::venue(venue)));
                }
                None => self.add_message(MessageType::Info, "Tidak ada venue yang cocok"),
            },
            KeyCode::Char('b') => {
                self.go(Screen::MyBookings, None);
            }
            KeyCode::Char('d') => {
                self.go(Screen::Dashboard, None);
            }
            KeyCode::Char('p') => {
                self.go(Screen::Profile, None);
            }
            KeyCode::Char('o') => {
                let codes: Vec<String> = Promo::ALL
                    .iter()
                    .map(|p| format!("{} ({})", p.code(), p.description()))
                    .collect();
                self.add_message(MessageType::Info, format!("Promo: {}", codes.join(", ")));
            }
            _ => {}
        }
    }

    fn on_detail(&mut self, event: KeyEvent) {
        match event.code {
            KeyCode::Esc => {
                self.go(Screen::Home, None);
            }
            KeyCode::Left | KeyCode::Char('h') => self.detail.previous_image(),
            KeyCode::Right | KeyCode::Char('l') => self.detail.next_image(),
            KeyCode::Enter | KeyCode::Char('b') => {
                let patch = self.navigator.selected_venue().map(Patch::venue);
                self.go(Screen::PilihJadwal, patch);
            }
            _ => {}
        }
    }

    fn on_schedule(&mut self, event: KeyEvent) {
        match event.code {
            KeyCode::Esc => {
                self.go(Screen::DetailVenue, None);
            }
            KeyCode::Left => self.schedule.move_date(-1),
            KeyCode::Right => self.schedule.move_date(1),
            KeyCode::Up | KeyCode::Char('k') => self.schedule.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.schedule.move_cursor(1),
            KeyCode::Char(c @ '1'..='3') => {
                if let Err(e) = self.schedule.set_duration(c.to_digit(10).unwrap_or(1)) {
                    self.add_message(MessageType::Warning, e.to_string());
                }
            }
            KeyCode::Char(' ') => {
                if let Err(e) = self.schedule.select_cursor() {
                    self.add_message(MessageType::Warning, e.to_string());
                }
            }
            KeyCode::Enter => self.confirm_schedule(),
            _ => {}
        }
    }

    fn confirm_schedule(&mut self) {
        if self.schedule.selected.is_none() {
            self.add_message(MessageType::Warning, "Pilih jam terlebih dahulu");
            return;
        }
        let Some(venue) = self.navigator.selected_venue() else {
            self.add_message(MessageType::Error, "Venue belum dipilih");
            return;
        };
        match self.schedule.patch(venue) {
            Ok(patch) => {
                self.go(Screen::PilihLapangan, Some(Patch::booking(patch)));
            }
            Err(e) => self.add_message(MessageType::Warning, e.to_string()),
        }
    }

    fn on_court(&mut self, event: KeyEvent) {
        let columns = CourtState::COLUMNS as isize;
        match event.code {
            KeyCode::Esc => {
                self.go(Screen::PilihJadwal, None);
            }
            KeyCode::Left | KeyCode::Char('h') => self.court.move_cursor(-1),
            KeyCode::Right | KeyCode::Char('l') => self.court.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.court.move_cursor(-columns),
            KeyCode::Down | KeyCode::Char('j') => self.court.move_cursor(columns),
            KeyCode::Char(' ') => {
                if let Err(e) = self.court.select_cursor() {
                    self.add_message(MessageType::Warning, e.to_string());
                }
            }
            KeyCode::Enter => match self.court.selected {
                Some(court) => {
                    let patch = BookingDraft::new().with_lapangan(court);
                    self.go(Screen::ReviewBooking, Some(Patch::booking(patch)));
                }
                None => self.add_message(MessageType::Warning, "Pilih lapangan terlebih dahulu"),
            },
            _ => {}
        }
    }

    fn on_review(&mut self, event: KeyEvent) {
        match event.code {
            KeyCode::Esc => {
                self.go(Screen::PilihLapangan, None);
            }
            KeyCode::Tab | KeyCode::Down => self.review.focus = self.review.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.review.focus = self.review.focus.previous(),
            KeyCode::Enter => match self.review.focus {
                ReviewFocus::PromoInput => self.apply_promo(),
                ReviewFocus::QuickFill(promo) => {
                    self.review.fill(promo);
                    self.review.focus = ReviewFocus::PromoInput;
                }
                ReviewFocus::Continue => self.confirm_review(),
            },
            _ => {
                if self.review.focus == ReviewFocus::PromoInput {
                    edit_input(&mut self.review.promo, event);
                }
            }
        }
    }

    fn apply_promo(&mut self) {
        let code = self.review.promo.value().trim().to_string();
        if code.is_empty() {
            self.review.applied = None;
            return;
        }
        match self.review.apply() {
            Some(promo) => {
                let saved = self
                    .review
                    .quote(self.navigator.draft())
                    .map(|q| q.discount)
                    .unwrap_or(0);
                tracing::debug!(code = promo.code(), discount = saved, "Promo applied");
                self.add_message(
                    MessageType::Success,
                    format!("Promo {} dipakai, hemat {}", promo.code(), format_rupiah(saved)),
                );
            }
            None => {
                tracing::debug!(code = %code, "Promo code not recognised");
                self.add_message(
                    MessageType::Warning,
                    format!("Kode promo {} tidak valid", code),
                );
            }
        }
    }

    fn confirm_review(&mut self) {
        match self.review.patch(self.navigator.draft()) {
            Ok(patch) => {
                self.go(Screen::Pembayaran, Some(Patch::booking(patch)));
            }
            Err(e) => self.add_message(MessageType::Error, e.to_string()),
        }
    }

    fn on_payment(&mut self, event: KeyEvent) {
        match event.code {
            KeyCode::Esc => {
                self.go(Screen::ReviewBooking, None);
            }
            KeyCode::Up | KeyCode::Char('k') => self.payment.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.payment.move_cursor(1),
            KeyCode::Char(' ') => {
                self.payment.select_cursor();
            }
            KeyCode::Enter => self.start_payment(),
            _ => {}
        }
    }

    fn start_payment(&mut self) {
        let Some(method) = self.payment.selected else {
            self.add_message(MessageType::Warning, "Pilih metode pembayaran terlebih dahulu");
            return;
        };
        tracing::info!(method = method.id, "Processing payment");
        self.pending_payment = true;
        self.loading = true;
        self.loading_message = format!("Memproses pembayaran via {}...", method.name);
    }

    fn on_ticket(&mut self, event: KeyEvent) {
        match event.code {
            KeyCode::Char('d') => self.ticket_action(TicketAction::Download),
            KeyCode::Char('s') => self.ticket_action(TicketAction::Share),
            KeyCode::Char('c') => self.ticket_action(TicketAction::AddToCalendar),
            KeyCode::Char('b') => {
                self.go(Screen::MyBookings, None);
            }
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('h') => {
                self.go(Screen::Home, None);
            }
            _ => {}
        }
    }

    fn ticket_action(&mut self, action: TicketAction) {
        if action == TicketAction::Share {
            let draft = self.navigator.draft();
            let number = draft.booking_number.clone().unwrap_or_default();
            let venue = draft.venue.map(|v| v.name).unwrap_or("-");
            let when = match (draft.date, draft.time.as_deref()) {
                (Some(date), Some(time)) => format!("{} {}", schedule::format_date(date), time),
                _ => "-".to_string(),
            };
            let text = ticket::share_text(&number, venue, &when);
            if let Err(e) = self.share.share(&text) {
                tracing::warn!(error = %e, "Sharing the ticket failed");
                self.add_message(MessageType::Warning, format!("Gagal membagikan: {}", e));
                return;
            }
        }
        self.add_message(MessageType::Success, action.success_message());
    }

    fn on_my_bookings(&mut self, event: KeyEvent) {
        match event.code {
            KeyCode::Esc | KeyCode::Char('h') => {
                self.go(Screen::Home, None);
            }
            KeyCode::Tab | KeyCode::Right => {
                let tab = self.bookings.tab.next();
                self.bookings.switch_tab(tab);
            }
            KeyCode::BackTab | KeyCode::Left => {
                let tab = self.bookings.tab.previous();
                self.bookings.switch_tab(tab);
            }
            KeyCode::Up | KeyCode::Char('k') => self.bookings.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.bookings.move_selection(1),
            KeyCode::Enter => {
                let Some(record) = self.bookings.selected_record() else {
                    return;
                };
                if record.can_show_ticket() {
                    self.go(Screen::ETicket, Some(Patch::booking(record.to_draft())));
                } else {
                    // "Booking Lagi"
                    self.go(Screen::Home, None);
                }
            }
            _ => {}
        }
    }

    fn on_dashboard(&mut self, event: KeyEvent) {
        match event.code {
            KeyCode::Esc | KeyCode::Char('h') => {
                self.go(Screen::Home, None);
            }
            KeyCode::Char('b') | KeyCode::Enter => {
                self.go(Screen::MyBookings, None);
            }
            _ => {}
        }
    }

    fn on_profile(&mut self, event: KeyEvent) {
        match event.code {
            KeyCode::Esc | KeyCode::Char('h') => {
                self.go(Screen::Home, None);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.profile.cursor = self.profile.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.profile.cursor = (self.profile.cursor + 1).min(PROFILE_MENU.len() - 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let action = PROFILE_MENU[self.profile.cursor].action;
                self.menu_action(action);
            }
            _ => {}
        }
    }

    fn menu_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::Notifications => {
                self.profile.notifications = !self.profile.notifications;
                let state = if self.profile.notifications {
                    "aktif"
                } else {
                    "nonaktif"
                };
                self.add_message(MessageType::Info, format!("Notifikasi {}", state));
            }
            MenuAction::TransactionHistory => {
                self.go(Screen::MyBookings, None);
            }
            MenuAction::Logout => {
                match self.navigator.logout() {
                    Ok(()) => {
                        self.enter(Screen::Welcome);
                        self.add_message(MessageType::Info, "Anda telah keluar");
                    }
                    Err(e) => self.add_message(MessageType::Error, e.to_string()),
                }
            }
            other => {
                if let Some(text) = other.placeholder_message() {
                    self.add_message(MessageType::Info, text);
                }
            }
        }
    }

    /// Display name of the chosen payment method, falling back to its id
    pub fn payment_method_name(&self) -> Option<String> {
        let id = self.navigator.draft().payment_method.as_deref()?;
        Some(
            catalog::payment_method_by_id(id)
                .map(|m| m.name.to_string())
                .unwrap_or_else(|| id.to_string()),
        )
    }
}
