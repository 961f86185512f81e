//! E-ticket details: booking numbers, the pseudo QR pattern and ticket actions

use crate::clock::{Clock, RandomSource};
use crate::error::Result;

pub const QR_SIZE: usize = 8;

/// `FSK` followed by the last 8 digits of the current Unix time in millis
pub fn booking_number(clock: &dyn Clock) -> String {
    let millis = clock.unix_millis().unsigned_abs();
    format!("FSK{:08}", millis % 100_000_000)
}

pub fn is_booking_number(s: &str) -> bool {
    s.len() == 11 && s.starts_with("FSK") && s[3..].chars().all(|c| c.is_ascii_digit())
}

/// Decorative 8×8 grid; `true` cells are drawn filled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrPattern {
    cells: [[bool; QR_SIZE]; QR_SIZE],
}

impl QrPattern {
    pub fn generate(rng: &mut dyn RandomSource) -> Self {
        let mut cells = [[false; QR_SIZE]; QR_SIZE];
        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = rng.next_bool();
            }
        }
        Self { cells }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool; QR_SIZE]> {
        self.cells.iter()
    }

    pub fn filled(&self) -> usize {
        self.cells.iter().flatten().filter(|c| **c).count()
    }

    /// Two characters per cell so the grid looks square in a terminal
    pub fn to_lines(&self) -> Vec<String> {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|filled| if *filled { "██" } else { "  " })
                    .collect()
            })
            .collect()
    }
}

/// Buttons under the ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketAction {
    Download,
    Share,
    AddToCalendar,
}

impl TicketAction {
    pub fn success_message(&self) -> &'static str {
        match self {
            TicketAction::Download => "E-Ticket berhasil didownload!",
            TicketAction::Share => "E-Ticket berhasil dibagikan!",
            TicketAction::AddToCalendar => "Event berhasil ditambahkan ke kalender!",
        }
    }
}

/// Where "share" puts the ticket text
pub trait ShareTarget {
    fn share(&mut self, text: &str) -> Result<()>;
}

/// System clipboard via arboard
pub struct ClipboardShare;

impl ShareTarget for ClipboardShare {
    fn share(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_string())?;
        tracing::info!("Copied ticket to clipboard");
        Ok(())
    }
}

/// Text placed on the clipboard when sharing
pub fn share_text(booking_number: &str, venue: &str, when: &str) -> String {
    format!("FutsalKu e-ticket {} - {} - {}", booking_number, venue, when)
}
