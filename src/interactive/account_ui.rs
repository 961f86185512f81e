//! Booking history, dashboard and profile screens

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::account::{
    MenuAction, DASHBOARD_STATS, FAVORITES, MONTHLY_HOURS, POINTS_TO_GOLD, PROFILE_MENU,
    PROFILE_STATS, RECENT_ACTIVITIES, UPCOMING, USER,
};
use crate::history::{self, BookingStatus, BookingTab};
use crate::pricing::format_rupiah;
use crate::schedule::format_long_date;

use super::app::App;
use super::utils::{focused, heading, marker, muted, panel, BRAND};

/// Widest bar in the monthly hours chart
const BAR_WIDTH: u64 = 30;

fn status_style(status: BookingStatus) -> Style {
    match status {
        BookingStatus::Confirmed => Style::default().fg(Color::Green),
        BookingStatus::Completed => Style::default().fg(Color::Cyan),
        BookingStatus::Cancelled => Style::default().fg(Color::Red),
    }
}

pub fn render_my_bookings(f: &mut Frame, app: &App, area: Rect) {
    let state = &app.bookings;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(4)])
        .split(area);

    let mut tabs = Vec::new();
    for tab in BookingTab::ALL {
        let count = history::bookings_in(tab).len();
        let style = if tab == state.tab {
            Style::default()
                .fg(Color::Black)
                .bg(BRAND)
                .add_modifier(Modifier::BOLD)
        } else {
            muted()
        };
        tabs.push(Span::styled(format!(" {} ({}) ", tab.label(), count), style));
        tabs.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(tabs)), chunks[0]);

    let records = state.records();
    let items: Vec<ListItem> = if records.is_empty() {
        vec![ListItem::new(Span::styled("Belum ada booking", muted()))]
    } else {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let is_selected = i == state.selected;
                let action = if record.can_show_ticket() {
                    "[Enter] Lihat E-Ticket"
                } else {
                    "[Enter] Booking Lagi"
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(marker(is_selected), focused(is_selected)),
                        Span::styled(record.venue_name, focused(is_selected)),
                        Span::raw("  "),
                        Span::styled(record.status.label(), status_style(record.status)),
                    ]),
                    Line::from(Span::styled(
                        format!(
                            "    {}  ·  {}  ·  {} jam  ·  {}",
                            format_long_date(record.date),
                            record.time,
                            record.duration,
                            record.lapangan
                        ),
                        muted(),
                    )),
                    Line::from(vec![
                        Span::styled(format!("    {}  ", record.booking_number), muted()),
                        Span::styled(format_rupiah(record.total), Style::default().fg(BRAND)),
                        Span::styled(
                            if is_selected {
                                format!("  {}", action)
                            } else {
                                String::new()
                            },
                            Style::default().fg(Color::Yellow),
                        ),
                    ]),
                    Line::from(""),
                ])
            })
            .collect()
    };

    f.render_widget(List::new(items).block(panel("Booking Saya")), chunks[1]);
}

pub fn render_dashboard(f: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(8)])
        .split(area);

    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            DASHBOARD_STATS
                .iter()
                .map(|_| Constraint::Ratio(1, DASHBOARD_STATS.len() as u32))
                .collect::<Vec<_>>(),
        )
        .split(rows[0]);
    for (tile, (label, value)) in tiles.iter().zip(DASHBOARD_STATS) {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(value, heading()))).block(panel(label)),
            *tile,
        );
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let max = MONTHLY_HOURS.iter().map(|(_, h)| *h).max().unwrap_or(1).max(1);
    let chart: Vec<Line> = MONTHLY_HOURS
        .iter()
        .map(|(month, hours)| {
            let width = (hours * BAR_WIDTH / max) as usize;
            Line::from(vec![
                Span::styled(format!("{:<4}", month), Style::default().fg(Color::White)),
                Span::styled("█".repeat(width), Style::default().fg(BRAND)),
                Span::styled(format!(" {} jam", hours), muted()),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(chart).block(panel("Jam Main per Bulan")),
        columns[0],
    );

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut side = vec![Line::from(Span::styled("Jadwal Mendatang", bold))];
    for upcoming in UPCOMING.iter() {
        side.push(Line::from(vec![
            Span::raw(format!("  {}  ", upcoming.venue)),
            Span::styled(format!("{} {}", upcoming.date, upcoming.time), muted()),
            Span::styled(
                format!("  {} jam lagi", upcoming.hours_left),
                Style::default().fg(Color::Yellow),
            ),
        ]));
    }
    side.push(Line::from(""));
    side.push(Line::from(Span::styled("Venue Favorit", bold)));
    for favorite in FAVORITES.iter() {
        side.push(Line::from(vec![
            Span::raw(format!("  {}  ", favorite.name)),
            Span::styled(
                format!("★ {:.1}", favorite.rating),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(format!("  {}x booking", favorite.bookings), muted()),
        ]));
    }
    side.push(Line::from(""));
    side.push(Line::from(Span::styled("Aktivitas Terakhir", bold)));
    for activity in RECENT_ACTIVITIES.iter() {
        side.push(Line::from(vec![
            Span::raw(format!("  {} - {}", activity.action, activity.venue)),
            Span::styled(format!("  {}", activity.time), muted()),
        ]));
    }
    f.render_widget(
        Paragraph::new(side)
            .wrap(Wrap { trim: false })
            .block(panel("Ringkasan")),
        columns[1],
    );
}

pub fn render_profile(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let mut card = vec![
        Line::from(Span::styled(USER.name, heading())),
        Line::from(Span::styled(USER.email, muted())),
        Line::from(Span::styled(USER.phone, muted())),
        Line::from(Span::styled(
            format!("Member sejak {}", USER.member_since),
            muted(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{} Member", USER.tier),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  {} poin", USER.points)),
        ]),
        Line::from(Span::styled(
            format!("{} poin lagi menuju Gold", POINTS_TO_GOLD),
            muted(),
        )),
        Line::from(""),
    ];
    card.extend(PROFILE_STATS.iter().map(|(label, value)| {
        Line::from(vec![
            Span::styled(format!("{:<10}", label), muted()),
            Span::styled(value.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        ])
    }));
    card.push(Line::from(""));
    card.push(Line::from(Span::styled(
        format!(
            "FutsalKu v{} ({})",
            env!("CARGO_PKG_VERSION"),
            env!("BUILD_DATE")
        ),
        muted(),
    )));
    f.render_widget(
        Paragraph::new(card)
            .wrap(Wrap { trim: true })
            .block(panel("Profil")),
        columns[0],
    );

    let mut menu = Vec::new();
    let mut section = None;
    for (i, item) in PROFILE_MENU.iter().enumerate() {
        if section != Some(item.section) {
            section = Some(item.section);
            if !item.section.is_empty() {
                menu.push(Line::from(Span::styled(
                    item.section,
                    Style::default().add_modifier(Modifier::BOLD),
                )));
            } else {
                menu.push(Line::from(""));
            }
        }
        let is_cursor = i == app.profile.cursor;
        let mut label = format!("{}{}", marker(is_cursor), item.label);
        if item.action == MenuAction::Notifications {
            let toggle = if app.profile.notifications {
                "  [ON]"
            } else {
                "  [OFF]"
            };
            label.push_str(toggle);
        }
        let style = if item.action == MenuAction::Logout {
            focused(is_cursor).fg(Color::Red)
        } else {
            focused(is_cursor)
        };
        menu.push(Line::from(Span::styled(label, style)));
    }
    f.render_widget(Paragraph::new(menu).block(panel("Pengaturan")), columns[1]);
}
