//! Payment and e-ticket screens

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::catalog::PAYMENT_CATEGORIES;
use crate::pricing::format_rupiah;
use crate::schedule::format_long_date;

use super::app::App;
use super::utils::{focused, heading, marker, muted, panel, BRAND};

pub fn render_payment(f: &mut Frame, app: &App, area: Rect) {
    let draft = app.navigator.draft();
    let state = &app.payment;
    let countdown = state.countdown.countdown();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    let timer_style = if countdown.is_expired() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    };
    let total = draft
        .total
        .or_else(|| draft.computed_total())
        .map(format_rupiah)
        .unwrap_or_else(|| "-".to_string());
    let summary = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Selesaikan pembayaran dalam ", muted()),
            Span::styled(countdown.display(), timer_style),
        ]),
        Line::from(vec![
            Span::styled("Total Pembayaran  ", muted()),
            Span::styled(total, heading()),
        ]),
    ])
    .block(panel("Pembayaran"));
    f.render_widget(summary, chunks[0]);

    let mut lines = Vec::new();
    let mut index = 0;
    for category in PAYMENT_CATEGORIES.iter() {
        lines.push(Line::from(Span::styled(
            category.name,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for method in category.methods {
            let is_cursor = index == state.cursor;
            let is_selected = state.selected.map(|m| m.id) == Some(method.id);
            let radio = if is_selected { "(●)" } else { "( )" };
            let style = if is_selected {
                Style::default().fg(BRAND).add_modifier(Modifier::BOLD)
            } else {
                focused(is_cursor)
            };
            lines.push(Line::from(Span::styled(
                format!("{}{} {}", marker(is_cursor), radio, method.name),
                style,
            )));
            index += 1;
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "[Enter] Bayar Sekarang",
        Style::default()
            .fg(Color::Black)
            .bg(BRAND)
            .add_modifier(Modifier::BOLD),
    )));

    f.render_widget(
        Paragraph::new(lines).block(panel("Metode Pembayaran")),
        chunks[1],
    );
}

pub fn render_ticket(f: &mut Frame, app: &App, area: Rect) {
    let draft = app.navigator.draft();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(30)])
        .split(area);

    let number = draft.booking_number.as_deref().unwrap_or("-");
    let mut qr = vec![
        Line::from(Span::styled("Booking Berhasil!", heading())),
        Line::from(""),
    ];
    qr.extend(
        app.ticket
            .qr
            .to_lines()
            .into_iter()
            .map(|row| Line::from(Span::styled(row, Style::default().fg(Color::White)))),
    );
    qr.push(Line::from(""));
    qr.push(Line::from(Span::styled(
        number.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    f.render_widget(
        Paragraph::new(qr)
            .alignment(Alignment::Center)
            .block(panel("E-Ticket")),
        columns[0],
    );

    let venue = draft.venue.map(|v| v.name).unwrap_or("-");
    let date = draft
        .date
        .map(format_long_date)
        .unwrap_or_else(|| "-".to_string());
    let time = match (draft.time.as_deref(), draft.end_time()) {
        (Some(start), Some(end)) => format!("{} - {}", start, end),
        (Some(start), None) => start.to_string(),
        _ => "-".to_string(),
    };
    let duration = draft
        .duration
        .map(|d| format!("{} jam", d))
        .unwrap_or_else(|| "-".to_string());
    let court = draft.lapangan.map(|c| c.name).unwrap_or("-");
    let total = draft
        .total
        .or_else(|| draft.computed_total())
        .map(format_rupiah)
        .unwrap_or_else(|| "-".to_string());

    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<14}", label), muted()),
            Span::raw(value),
        ])
    };

    let mut details = vec![
        row("No. Booking", number.to_string()),
        row("Venue", venue.to_string()),
        row("Tanggal", date),
        row("Waktu", time),
        row("Durasi", duration),
        row("Lapangan", court.to_string()),
    ];
    if let (Some(code), Some(discount)) = (draft.promo_code.as_deref(), draft.discount) {
        if discount > 0 {
            details.push(row("Promo", format!("{} (-{})", code, format_rupiah(discount))));
        }
    }
    details.push(row("Total", total));
    if let Some(method) = app.payment_method_name() {
        details.push(row("Dibayar via", method));
    }
    details.push(Line::from(""));
    details.push(Line::from(Span::styled(
        "Tunjukkan QR code ini kepada petugas saat tiba di venue. \
         Datang 15 menit sebelum jadwal main.",
        muted(),
    )));
    details.push(Line::from(""));

    let actions = [
        ("d", "Download"),
        ("s", "Bagikan"),
        ("c", "Tambah ke Kalender"),
    ];
    let mut buttons = Vec::new();
    for (key, label) in actions {
        buttons.push(Span::styled(
            format!("[{}] {}", key, label),
            Style::default().fg(BRAND),
        ));
        buttons.push(Span::raw("  "));
    }
    details.push(Line::from(buttons));

    f.render_widget(
        Paragraph::new(details)
            .wrap(Wrap { trim: true })
            .block(panel("Detail Booking")),
        columns[1],
    );
}
