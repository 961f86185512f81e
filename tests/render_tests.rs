// Rendering smoke tests: every screen draws into a test backend

use chrono::{Local, NaiveDate, TimeZone};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::sync::Arc;

use futsalku::catalog::{COURTS, VENUES};
use futsalku::clock::{ManualClock, SeededRandom};
use futsalku::config::Config;
use futsalku::draft::BookingDraft;
use futsalku::error::Result;
use futsalku::interactive::{ui, App};
use futsalku::ticket::ShareTarget;
use futsalku::{Navigator, Screen};

struct NoShare;

impl ShareTarget for NoShare {
    fn share(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }
}

fn app_at(screen: Screen, draft: BookingDraft) -> App {
    let clock = ManualClock::new(Local.with_ymd_and_hms(2025, 10, 24, 9, 0, 0).unwrap());
    App::new(
        Config::default(),
        Arc::new(clock),
        Box::new(SeededRandom::new(3)),
        Box::new(NoShare),
    )
    .with_navigator(Navigator::restore(screen, draft).unwrap())
}

fn render(app: &App) -> String {
    let backend = TestBackend::new(120, 48);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer.get(x, y).symbol());
        }
        text.push('\n');
    }
    text
}

fn booking() -> BookingDraft {
    BookingDraft::new()
        .with_venue(VENUES[0])
        .with_date(NaiveDate::from_ymd_opt(2025, 10, 25).unwrap())
        .with_time("19:00")
        .with_duration(2)
        .with_price(180_000)
        .with_lapangan(COURTS[0])
}

#[test]
fn test_welcome_screen() {
    let text = render(&app_at(Screen::Welcome, BookingDraft::new()));
    assert!(text.contains("FutsalKu"));
    assert!(text.contains("Booking Lapangan Futsal Jadi Lebih Mudah"));
    assert!(text.contains("[ Masuk ]"));
}

#[test]
fn test_auth_screens() {
    let text = render(&app_at(Screen::Login, BookingDraft::new()));
    assert!(text.contains("Selamat Datang Kembali!"));
    assert!(text.contains("Lupa Password?"));

    let text = render(&app_at(Screen::Register, BookingDraft::new()));
    assert!(text.contains("Buat Akun Baru"));
    assert!(text.contains("Syarat & Ketentuan"));

    let text = render(&app_at(Screen::ForgotPassword, BookingDraft::new()));
    assert!(text.contains("Langkah 1 dari 4"));
}

#[test]
fn test_home_lists_venues() {
    let text = render(&app_at(Screen::Home, BookingDraft::new()));
    assert!(text.contains("Venue Terdekat (4)"));
    assert!(text.contains("Futsal Arena Sudirman"));
    assert!(text.contains("Rp 150.000/jam"));
    assert!(text.contains("Ahmad Rizki"));
}

#[test]
fn test_detail_shows_prices_and_reviews() {
    let draft = BookingDraft::new().with_venue(VENUES[2]);
    let text = render(&app_at(Screen::DetailVenue, draft));
    assert!(text.contains("Sports Hub Jakarta"));
    assert!(text.contains("Fasilitas"));
    assert!(text.contains("Rp 180.000/jam"));
    assert!(text.contains("Foto 1/3"));
}

#[test]
fn test_schedule_marks_booked_slots() {
    let draft = BookingDraft::new().with_venue(VENUES[0]);
    let text = render(&app_at(Screen::PilihJadwal, draft));
    assert!(text.contains("08:00 (penuh)"));
    assert!(text.contains("1 Jam"));
    assert!(text.contains("Jum"));
}

#[test]
fn test_courts_grid() {
    let draft = booking();
    let text = render(&app_at(Screen::PilihLapangan, draft));
    assert!(text.contains("Pilih Lapangan"));
    assert!(text.contains(COURTS[5].name));
    assert!(text.contains("Terisi"));
}

#[test]
fn test_review_shows_price_summary() {
    let text = render(&app_at(Screen::ReviewBooking, booking()));
    assert!(text.contains("19:00 - 21:00 (2 jam)"));
    assert!(text.contains("Rp 360.000"));
    assert!(text.contains("FIRST30"));
    assert!(text.contains("Kebijakan Pembatalan"));
}

#[test]
fn test_payment_shows_countdown_and_methods() {
    let draft = booking().with_total(360_000);
    let text = render(&app_at(Screen::Pembayaran, draft));
    assert!(text.contains("05:00"));
    assert!(text.contains("GoPay"));
    assert!(text.contains("QRIS"));
    assert!(text.contains("Rp 360.000"));
}

#[test]
fn test_ticket_shows_booking_number() {
    let draft = booking()
        .with_total(360_000)
        .with_payment_method("ovo")
        .with_booking_number("FSK00001234");
    let text = render(&app_at(Screen::ETicket, draft));
    assert!(text.contains("FSK00001234"));
    assert!(text.contains("Booking Berhasil!"));
    assert!(text.contains("OVO"));
    assert!(text.contains("19:00 - 21:00"));
}

#[test]
fn test_account_screens() {
    let text = render(&app_at(Screen::MyBookings, BookingDraft::new()));
    assert!(text.contains("Upcoming (2)"));
    assert!(text.contains("FSK12345678"));

    let text = render(&app_at(Screen::Dashboard, BookingDraft::new()));
    assert!(text.contains("Jam Main per Bulan"));
    assert!(text.contains("Venue Favorit"));

    let text = render(&app_at(Screen::Profile, BookingDraft::new()));
    assert!(text.contains("Riwayat Transaksi"));
    assert!(text.contains("[ON]"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let app = app_at(Screen::ReviewBooking, booking());
    let backend = TestBackend::new(20, 8);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, &app)).unwrap();
}
