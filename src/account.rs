//! Signed-in user, dashboard figures and profile menu

pub struct UserProfile {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub member_since: &'static str,
    pub points: u32,
    pub tier: &'static str,
}

pub const USER: UserProfile = UserProfile {
    name: "Ahmad Rizki",
    email: "ahmad.rizki@email.com",
    phone: "+62 812-3456-7890",
    member_since: "Oktober 2024",
    points: 2450,
    tier: "Silver",
};

/// Profile header counters: bookings, hours played, reviews written
pub const PROFILE_STATS: [(&str, u32); 3] = [("Bookings", 8), ("Jam Main", 32), ("Reviews", 4)];

/// Dashboard tiles
pub const DASHBOARD_STATS: [(&str, &str); 4] = [
    ("Booking Bulan Ini", "8"),
    ("Total Jam Main", "32"),
    ("Poin Rewards", "2,450"),
    ("Venue Favorit", "4"),
];

pub const MONTHLY_HOURS: [(&str, u64); 5] = [
    ("Jun", 4),
    ("Jul", 8),
    ("Aug", 6),
    ("Sep", 10),
    ("Okt", 12),
];

pub struct UpcomingSummary {
    pub venue: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub hours_left: u32,
}

pub const UPCOMING: [UpcomingSummary; 2] = [
    UpcomingSummary {
        venue: "Futsal Arena Sudirman",
        date: "2025-10-26",
        time: "18:00",
        hours_left: 48,
    },
    UpcomingSummary {
        venue: "Champion Futsal Center",
        date: "2025-10-28",
        time: "15:00",
        hours_left: 96,
    },
];

pub struct FavoriteVenue {
    pub name: &'static str,
    pub bookings: u32,
    pub rating: f32,
}

pub const FAVORITES: [FavoriteVenue; 2] = [
    FavoriteVenue {
        name: "Futsal Arena Sudirman",
        bookings: 5,
        rating: 4.8,
    },
    FavoriteVenue {
        name: "Sports Hub Jakarta",
        bookings: 3,
        rating: 4.9,
    },
];

pub struct Activity {
    pub action: &'static str,
    pub venue: &'static str,
    pub time: &'static str,
}

pub const RECENT_ACTIVITIES: [Activity; 3] = [
    Activity {
        action: "Booking berhasil",
        venue: "Futsal Arena Sudirman",
        time: "2 jam lalu",
    },
    Activity {
        action: "Review diberikan",
        venue: "Sports Hub Jakarta",
        time: "1 hari lalu",
    },
    Activity {
        action: "Booking selesai",
        venue: "Champion Futsal Center",
        time: "3 hari lalu",
    },
];

/// Points still needed for the next tier
pub const POINTS_TO_GOLD: u32 = 550;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    EditProfile,
    PaymentMethods,
    Rewards,
    Notifications,
    Terms,
    Help,
    TransactionHistory,
    Logout,
}

pub struct MenuItem {
    pub section: &'static str,
    pub label: &'static str,
    pub action: MenuAction,
}

pub const PROFILE_MENU: [MenuItem; 8] = [
    MenuItem {
        section: "Akun",
        label: "Edit Profil",
        action: MenuAction::EditProfile,
    },
    MenuItem {
        section: "Akun",
        label: "Metode Pembayaran",
        action: MenuAction::PaymentMethods,
    },
    MenuItem {
        section: "Akun",
        label: "Poin & Rewards",
        action: MenuAction::Rewards,
    },
    MenuItem {
        section: "Pengaturan",
        label: "Notifikasi",
        action: MenuAction::Notifications,
    },
    MenuItem {
        section: "Pengaturan",
        label: "Syarat & Ketentuan",
        action: MenuAction::Terms,
    },
    MenuItem {
        section: "Pengaturan",
        label: "FAQ & Bantuan",
        action: MenuAction::Help,
    },
    MenuItem {
        section: "Transaksi",
        label: "Riwayat Transaksi",
        action: MenuAction::TransactionHistory,
    },
    MenuItem {
        section: "",
        label: "Keluar",
        action: MenuAction::Logout,
    },
];

impl MenuAction {
    /// Message shown for actions that have no screen yet
    pub fn placeholder_message(&self) -> Option<&'static str> {
        match self {
            MenuAction::Rewards => Some("Fitur Rewards akan segera hadir!"),
            MenuAction::EditProfile => Some("Fitur Edit Profil akan segera hadir!"),
            MenuAction::PaymentMethods => Some("Navigasi ke payment-methods"),
            MenuAction::Terms => Some("Navigasi ke terms"),
            MenuAction::Help => Some("Navigasi ke help"),
            MenuAction::Notifications | MenuAction::TransactionHistory | MenuAction::Logout => {
                None
            }
        }
    }
}

/// Password strength hint on the register screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Empty,
    Lemah,
    Sedang,
    Kuat,
}

impl PasswordStrength {
    pub fn of(password: &str) -> Self {
        match password.chars().count() {
            0 => PasswordStrength::Empty,
            1..=5 => PasswordStrength::Lemah,
            6..=9 => PasswordStrength::Sedang,
            _ => PasswordStrength::Kuat,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Empty => "",
            PasswordStrength::Lemah => "Lemah",
            PasswordStrength::Sedang => "Sedang",
            PasswordStrength::Kuat => "Kuat",
        }
    }
}
