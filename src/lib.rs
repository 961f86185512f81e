//! FutsalKu: browse futsal venues and walk a court booking through to an e-ticket

pub mod account;
pub mod catalog;
pub mod clock;
pub mod commands;
pub mod config;
pub mod countdown;
pub mod draft;
pub mod error;
pub mod history;
pub mod interactive;
pub mod logging;
pub mod navigation;
pub mod pricing;
pub mod schedule;
pub mod ticket;

pub use error::{FutsalError, Result};
pub use navigation::{Navigator, Patch, Screen};
