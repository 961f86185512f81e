//! Schedule, court and review screens of the booking flow

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::catalog::{Period, COURTS, DURATIONS, TIME_SLOTS};
use crate::pricing::{format_rupiah, Promo};
use crate::schedule::{format_long_date, short_day_name, short_month_name};

use super::app::App;
use super::screens::{CourtState, ReviewFocus};
use super::utils::{focused, heading, marker, muted, panel, render_input};

/// Number of date chips shown at once
const DATE_WINDOW: usize = 7;

fn venue_line(app: &App) -> Line<'static> {
    match app.navigator.draft().venue.or(app.navigator.selected_venue()) {
        Some(venue) => Line::from(vec![
            Span::styled(venue.name, heading()),
            Span::styled(format!("  {} · {}", venue.kind, venue.surface), muted()),
        ]),
        None => Line::from(Span::styled("Venue belum dipilih", muted())),
    }
}

fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

pub fn render_schedule(f: &mut Frame, app: &App, area: Rect) {
    let state = &app.schedule;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(6),
        ])
        .split(area);

    f.render_widget(Paragraph::new(venue_line(app)), chunks[0]);

    // slide the window so the chosen date stays visible
    let start = state
        .date_index
        .saturating_sub(DATE_WINDOW - 1)
        .min(state.dates.len().saturating_sub(DATE_WINDOW));
    let window = state.dates.iter().enumerate().skip(start).take(DATE_WINDOW);
    let mut days = Vec::new();
    let mut numbers = Vec::new();
    for (i, date) in window {
        let style = if i == state.date_index {
            selected_style()
        } else {
            Style::default()
        };
        days.push(Span::styled(format!(" {:^7}", short_day_name(*date)), style));
        numbers.push(Span::styled(
            format!(" {:^7}", format!("{} {}", date.format("%d"), short_month_name(*date))),
            style,
        ));
    }
    f.render_widget(
        Paragraph::new(vec![Line::from(days), Line::from(numbers)])
            .block(panel("Pilih Tanggal")),
        chunks[1],
    );

    let mut durations = vec![Span::styled("Durasi: ", muted())];
    for hours in DURATIONS {
        let style = if hours == state.duration {
            selected_style()
        } else {
            Style::default().fg(Color::Green)
        };
        durations.push(Span::styled(format!(" {} Jam ", hours), style));
        durations.push(Span::raw(" "));
    }
    f.render_widget(
        Paragraph::new(Line::from(durations)).block(panel("Durasi Main")),
        chunks[2],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[3]);

    for (column, period) in columns.iter().zip(Period::ALL) {
        let lines: Vec<Line> = TIME_SLOTS
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.period() == period)
            .map(|(i, slot)| {
                let is_cursor = i == state.cursor;
                let is_selected = state.selected.map(|s| s.time) == Some(slot.time);
                let text = if slot.available {
                    format!("{}{}", marker(is_cursor), slot.time)
                } else {
                    format!("{}{} (penuh)", marker(is_cursor), slot.time)
                };
                let style = if is_selected {
                    selected_style()
                } else if !slot.available {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    focused(is_cursor)
                };
                Line::from(Span::styled(text, style))
            })
            .collect();
        let title = format!("{} {}/jam", period.label(), format_rupiah(period.price()));
        f.render_widget(Paragraph::new(lines).block(panel(&title)), *column);
    }
}

pub fn render_courts(f: &mut Frame, app: &App, area: Rect) {
    let state = &app.court;
    let mut lines = vec![venue_line(app), Line::from("")];

    if let Some(schedule) = app.navigator.draft().schedule() {
        lines.push(Line::from(Span::styled(
            format!(
                "{}  ·  {} ({} jam)",
                format_long_date(schedule.date),
                schedule.time,
                schedule.duration
            ),
            muted(),
        )));
        lines.push(Line::from(""));
    }

    for (row, courts) in COURTS.chunks(CourtState::COLUMNS).enumerate() {
        let mut names = Vec::new();
        let mut details = Vec::new();
        for (col, court) in courts.iter().enumerate() {
            let index = row * CourtState::COLUMNS + col;
            let is_cursor = index == state.cursor;
            let is_selected = state.selected.map(|c| c.id) == Some(court.id);
            let style = if is_selected {
                selected_style()
            } else if !court.is_available() {
                Style::default().fg(Color::DarkGray)
            } else {
                focused(is_cursor)
            };
            names.push(Span::styled(
                format!("{}{:<24}", marker(is_cursor), court.name),
                style,
            ));
            let status = if court.is_available() {
                "Tersedia"
            } else {
                "Terisi"
            };
            details.push(Span::styled(
                format!(
                    "  {:<24}",
                    format!("{} · {} · {}", court.size, court.surface, status)
                ),
                muted(),
            ));
        }
        lines.push(Line::from(names));
        lines.push(Line::from(details));
        lines.push(Line::from(""));
    }

    let legend = Line::from(vec![
        Span::styled(" Dipilih ", selected_style()),
        Span::raw("  "),
        Span::styled("Tersedia", Style::default().fg(Color::White)),
        Span::raw("  "),
        Span::styled("Terisi", Style::default().fg(Color::DarkGray)),
    ]);
    lines.push(legend);

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel("Pilih Lapangan")),
        area,
    );
}

pub fn render_review(f: &mut Frame, app: &App, area: Rect) {
    let draft = app.navigator.draft();
    let state = &app.review;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let mut summary = vec![venue_line(app), Line::from("")];
    let date = draft
        .date
        .map(format_long_date)
        .unwrap_or_else(|| "-".to_string());
    summary.push(Line::from(vec![
        Span::styled("Tanggal   ", muted()),
        Span::raw(date),
    ]));
    let time = match (draft.time.as_deref(), draft.end_time(), draft.duration) {
        (Some(start), Some(end), Some(hours)) => {
            format!("{} - {} ({} jam)", start, end, hours)
        }
        _ => "-".to_string(),
    };
    summary.push(Line::from(vec![
        Span::styled("Waktu     ", muted()),
        Span::raw(time),
    ]));
    summary.push(Line::from(vec![
        Span::styled("Lapangan  ", muted()),
        Span::raw(draft.lapangan.map(|c| c.name).unwrap_or("-")),
    ]));
    summary.push(Line::from(""));
    summary.push(Line::from(Span::styled(
        "Kebijakan Pembatalan",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    summary.push(Line::from(Span::styled(
        "Pembatalan gratis hingga 24 jam sebelum jadwal main. \
         Pembatalan kurang dari 24 jam dikenakan biaya 50%.",
        muted(),
    )));
    f.render_widget(
        Paragraph::new(summary)
            .wrap(Wrap { trim: true })
            .block(panel("Detail Booking")),
        columns[0],
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),
        ])
        .split(columns[1]);

    render_input(
        f,
        right[0],
        "Kode Promo  [Enter] Pakai",
        state.promo.value(),
        state.promo.visual_cursor(),
        state.focus == ReviewFocus::PromoInput,
    );

    let mut quick = Vec::new();
    for promo in Promo::ALL {
        let is_focused = state.focus == ReviewFocus::QuickFill(promo);
        quick.push(Span::styled(
            format!("{}{}", marker(is_focused), promo.code()),
            focused(is_focused),
        ));
        quick.push(Span::styled(format!(" {}  ", promo.description()), muted()));
    }
    f.render_widget(
        Paragraph::new(Line::from(quick))
            .wrap(Wrap { trim: true })
            .block(panel("Promo Tersedia")),
        right[1],
    );

    let mut prices = Vec::new();
    if let Some(quote) = state.quote(draft) {
        prices.push(Line::from(vec![
            Span::styled(
                format!("Harga ({} jam)  ", draft.duration.unwrap_or(0)),
                muted(),
            ),
            Span::raw(format_rupiah(quote.base)),
        ]));
        if let Some(promo) = quote.promo.filter(|_| quote.discount > 0) {
            prices.push(Line::from(vec![
                Span::styled(format!("Diskon {}  ", promo.code()), muted()),
                Span::styled(
                    format!("-{}", format_rupiah(quote.discount)),
                    Style::default().fg(Color::Green),
                ),
            ]));
        }
        prices.push(Line::from(vec![
            Span::styled("Total  ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format_rupiah(quote.total), heading()),
        ]));
    } else {
        prices.push(Line::from(Span::styled("Harga belum tersedia", muted())));
    }
    prices.push(Line::from(""));
    let on_continue = state.focus == ReviewFocus::Continue;
    prices.push(Line::from(Span::styled(
        format!("{}[ Lanjut ke Pembayaran ]", marker(on_continue)),
        focused(on_continue).add_modifier(Modifier::BOLD),
    )));
    f.render_widget(
        Paragraph::new(prices).block(panel("Rincian Harga")),
        right[2],
    );
}
