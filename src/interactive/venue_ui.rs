//! Venue list (home) and venue detail screens

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::account::USER;
use crate::catalog::{self, Period, VenueFilter, FACILITIES, REVIEWS, VENUE_ADDRESS};
use crate::pricing::format_rupiah;

use super::app::App;
use super::screens::DetailState;
use super::utils::{focused, heading, marker, muted, panel, render_input, stars, truncate_str};

pub fn render_home(f: &mut Frame, app: &App, area: Rect) {
    let home = &app.home;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(4),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("Halo, {} ", USER.name), heading()),
            Span::styled("Mau main futsal di mana hari ini?", muted()),
        ])),
        chunks[0],
    );

    render_input(
        f,
        chunks[1],
        "Cari lapangan futsal...",
        home.search.value(),
        home.search.visual_cursor(),
        home.searching,
    );

    let mut chips = vec![Span::styled("Filter: ", muted())];
    for (i, filter) in VenueFilter::ALL.iter().enumerate() {
        let active = home.filter == Some(*filter);
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };
        chips.push(Span::styled(format!(" {} {} ", i + 1, filter.label()), style));
        chips.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(chips)), chunks[2]);

    let venues = home.venues();
    let name_width = 26;
    let items: Vec<ListItem> = if venues.is_empty() {
        vec![ListItem::new(Span::styled(
            "Tidak ada venue yang cocok dengan pencarian",
            muted(),
        ))]
    } else {
        venues
            .iter()
            .enumerate()
            .map(|(i, venue)| {
                let is_selected = i == home.selected && !home.searching;
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(marker(is_selected), focused(is_selected)),
                        Span::styled(
                            format!(
                                "{:<width$}",
                                truncate_str(venue.name, name_width),
                                width = name_width
                            ),
                            focused(is_selected),
                        ),
                        Span::styled(
                            format!("  ★ {:.1} ({})", venue.rating, venue.reviews),
                            Style::default().fg(Color::Yellow),
                        ),
                        Span::styled(format!("  {}", venue.distance), muted()),
                    ]),
                    Line::from(vec![
                        Span::raw("    "),
                        Span::styled(format!("{} · {}", venue.kind, venue.surface), muted()),
                        Span::styled(
                            format!("  {}/jam", format_rupiah(venue.price)),
                            Style::default().fg(Color::Green),
                        ),
                    ]),
                ])
            })
            .collect()
    };

    let list = List::new(items).block(panel(&format!("Venue Terdekat ({})", venues.len())));
    f.render_widget(list, chunks[3]);
}

pub fn render_detail(f: &mut Frame, app: &App, area: Rect) {
    let Some(venue) = app.navigator.selected_venue() else {
        f.render_widget(
            Paragraph::new("Venue tidak ditemukan").block(panel("Detail Venue")),
            area,
        );
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let gallery = catalog::gallery(&venue);
    let image = app.detail.image;
    let dots: String = (0..DetailState::IMAGES)
        .map(|i| if i == image { '●' } else { '○' })
        .collect();

    let mut info = vec![
        Line::from(Span::styled(venue.name, heading())),
        Line::from(vec![
            Span::styled(
                format!("★ {:.1}", venue.rating),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(format!(" ({} ulasan)  ·  {}", venue.reviews, venue.distance), muted()),
        ]),
        Line::from(Span::styled(VENUE_ADDRESS, muted())),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("Foto {}/{}  ", image + 1, DetailState::IMAGES), muted()),
            Span::raw(dots),
        ]),
        Line::from(Span::styled(
            truncate_str(gallery[image], usize::from(columns[0].width.saturating_sub(2))),
            Style::default().fg(Color::Blue),
        )),
        Line::from(""),
        Line::from(Span::styled("Fasilitas", Style::default().add_modifier(Modifier::BOLD))),
    ];
    info.extend(FACILITIES.iter().map(|name| Line::from(format!("  ✓ {}", name))));
    info.push(Line::from(""));
    info.push(Line::from(Span::styled(
        "Harga",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    info.extend(Period::ALL.iter().map(|period| {
        Line::from(vec![
            Span::raw(format!("  {:<24}", period.label())),
            Span::styled(
                format!("{}/jam", format_rupiah(period.price())),
                Style::default().fg(Color::Green),
            ),
        ])
    }));
    f.render_widget(
        Paragraph::new(info)
            .wrap(Wrap { trim: false })
            .block(panel("Detail Venue")),
        columns[0],
    );

    let mut reviews = Vec::new();
    for review in REVIEWS.iter() {
        reviews.push(Line::from(vec![
            Span::styled(review.name, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(stars(review.rating), Style::default().fg(Color::Yellow)),
            Span::styled(format!("  {}", review.date), muted()),
        ]));
        reviews.push(Line::from(review.comment));
        reviews.push(Line::from(""));
    }
    reviews.push(Line::from(Span::styled(
        "[Enter] Book Sekarang",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    f.render_widget(
        Paragraph::new(reviews)
            .wrap(Wrap { trim: true })
            .block(panel("Ulasan")),
        columns[1],
    );
}
