//! Main UI rendering logic

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::account::USER;
use crate::navigation::Screen;

use super::app::App;
use super::utils::{centered_rect, get_message_style};
use super::{account_ui, auth_ui, booking_ui, checkout_ui, venue_ui};

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Screen
            Constraint::Length(6), // Messages
            Constraint::Length(3), // Footer
        ])
        .split(size);

    render_header(f, app, chunks[0]);

    match app.screen() {
        Screen::Welcome => auth_ui::render_welcome(f, chunks[1]),
        Screen::Login => auth_ui::render_login(f, app, chunks[1]),
        Screen::Register => auth_ui::render_register(f, app, chunks[1]),
        Screen::ForgotPassword => auth_ui::render_forgot_password(f, app, chunks[1]),
        Screen::Home => venue_ui::render_home(f, app, chunks[1]),
        Screen::DetailVenue => venue_ui::render_detail(f, app, chunks[1]),
        Screen::PilihJadwal => booking_ui::render_schedule(f, app, chunks[1]),
        Screen::PilihLapangan => booking_ui::render_courts(f, app, chunks[1]),
        Screen::ReviewBooking => booking_ui::render_review(f, app, chunks[1]),
        Screen::Pembayaran => checkout_ui::render_payment(f, app, chunks[1]),
        Screen::ETicket => checkout_ui::render_ticket(f, app, chunks[1]),
        Screen::MyBookings => account_ui::render_my_bookings(f, app, chunks[1]),
        Screen::Dashboard => account_ui::render_dashboard(f, chunks[1]),
        Screen::Profile => account_ui::render_profile(f, app, chunks[1]),
    }

    render_messages(f, app, chunks[2]);
    render_footer(f, app, chunks[3]);

    if app.show_help {
        render_help(f, size);
    }
    if app.loading {
        render_loading_overlay(f, app, size);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            " FutsalKu ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", app.screen().title()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if app.navigator.is_logged_in() {
        spans.push(Span::styled(
            format!("  -  {} ({})", USER.name, USER.email),
            Style::default().fg(Color::Gray),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let visible = usize::from(area.height.saturating_sub(2)).max(1);
    let mut lines: Vec<Line> = app
        .messages
        .iter()
        .rev()
        .take(visible)
        .rev()
        .map(|msg| {
            let style = get_message_style(msg.message_type);
            Line::from(vec![
                Span::styled(format!("{} ", msg.icon()), style),
                Span::styled(msg.text.as_str(), style),
            ])
        })
        .collect();

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Siap",
            Style::default().fg(Color::Gray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Pesan ")
                .border_style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(paragraph, area);
}

/// Key hints for the current screen
pub fn shortcuts(app: &App) -> &'static str {
    match app.screen() {
        Screen::Welcome => "[Enter/l] Masuk  [r] Daftar  [?] Bantuan  [q] Keluar",
        Screen::Login => "[Tab/↑↓] Pindah  [Enter] Pilih  [F2] Lihat password  [Esc] Kembali",
        Screen::Register => {
            "[Tab/↑↓] Pindah  [Space] Centang  [Enter] Pilih  [F2] Lihat password  [Esc] Kembali"
        }
        Screen::ForgotPassword => "[Enter] Lanjut  [Tab] Pindah  [r] Kirim ulang  [Esc] Kembali",
        Screen::Home if app.home.searching => "[Enter/Esc] Selesai mencari",
        Screen::Home => {
            "[↑↓] Pilih  [Enter] Detail  [/] Cari  [f/1-4] Filter  [x] Reset  [b] Booking  [o] Promo  [d] Dashboard  [p] Profil  [q] Keluar"
        }
        Screen::DetailVenue => "[←→] Foto  [Enter/b] Book Sekarang  [Esc] Kembali",
        Screen::PilihJadwal => {
            "[←→] Tanggal  [1-3] Durasi  [↑↓] Jam  [Space] Pilih jam  [Enter] Lanjutkan  [Esc] Kembali"
        }
        Screen::PilihLapangan => "[←→↑↓] Lapangan  [Space] Pilih  [Enter] Lanjutkan  [Esc] Kembali",
        Screen::ReviewBooking => "[Tab/↑↓] Pindah  [Enter] Pakai/Pilih  [Esc] Kembali",
        Screen::Pembayaran => "[↑↓] Metode  [Space] Pilih  [Enter] Bayar Sekarang  [Esc] Kembali",
        Screen::ETicket => {
            "[d] Download  [s] Bagikan  [c] Kalender  [b] Booking Saya  [Enter/h] Beranda"
        }
        Screen::MyBookings => "[←→/Tab] Tab  [↑↓] Pilih  [Enter] Lihat E-Ticket / Booking Lagi  [Esc] Beranda",
        Screen::Dashboard => "[b] Booking Saya  [Esc/h] Beranda  [q] Keluar",
        Screen::Profile => "[↑↓] Menu  [Enter] Pilih  [Esc/h] Beranda  [q] Keluar",
    }
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let footer = Paragraph::new(shortcuts(app))
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    f.render_widget(footer, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let help_text = vec![
        Line::from(Span::styled(
            "Bantuan Keyboard",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(Span::styled("Umum:", bold)),
        Line::from("  ↑/↓ atau j/k   Pindah pilihan"),
        Line::from("  Tab/Shift+Tab  Pindah kolom isian"),
        Line::from("  Enter          Pilih / lanjut"),
        Line::from("  Esc            Kembali ke layar sebelumnya"),
        Line::from(""),
        Line::from(Span::styled("Booking:", bold)),
        Line::from("  Space          Pilih jam, lapangan, metode pembayaran"),
        Line::from("  1-3            Durasi main (jam) di layar jadwal"),
        Line::from("  FIRST30        Diskon 30%"),
        Line::from("  DISKON50K      Potongan Rp 50.000"),
        Line::from(""),
        Line::from(Span::styled("Aplikasi:", bold)),
        Line::from("  ?              Tampilkan bantuan"),
        Line::from("  q / Ctrl+C     Keluar"),
        Line::from(""),
        Line::from(Span::styled(
            "Tekan Esc untuk kembali...",
            Style::default().fg(Color::Gray),
        )),
    ];

    let popup = centered_rect(60, 70, area);
    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Bantuan ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn render_loading_overlay(f: &mut Frame, app: &App, area: Rect) {
    let popup_width = 50u16.min(area.width);
    let popup_height = 5u16.min(area.height);
    let popup_area = Rect {
        x: area.width.saturating_sub(popup_width) / 2,
        y: area.height.saturating_sub(popup_height) / 2,
        width: popup_width,
        height: popup_height,
    };

    let spinner_frames = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    let frame_idx = (app.clock().unix_millis().unsigned_abs() / 100) as usize % spinner_frames.len();
    let spinner = spinner_frames[frame_idx];

    let loading_text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{} ", spinner),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                app.loading_message.as_str(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
    ];

    let paragraph = Paragraph::new(loading_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Memproses ")
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .alignment(Alignment::Center);

    f.render_widget(Clear, popup_area);
    f.render_widget(paragraph, popup_area);
}
