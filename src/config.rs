use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use log::Level;

pub const PASSCODE: &str = "bea-maangas";
pub const RECIPIENT_NAME: &str = "Bea";

pub const SUCCESS_IMAGE_SRC: &str =
    "https://res.cloudinary.com/dgb2lnz2i/image/upload/v1755854741/yeyy-removebg-preview_a6el2f.png";
pub const SUCCESS_IMAGE_ALT: &str = "Yeeey!!";

pub const PROOF_IMAGE_SRC: &str = "/5b33459e-ed67-4304-9f0d-b2d851e52845.jpg";
pub const PROOF_IMAGE_ALT: &str = "Proof — January 30, 2:41 AM";
pub const PROOF_CAPTION: &str = "January 30 · 2:41 AM 🌙";

/// Particles generated when "Yes" is pressed.
pub const CONFETTI_BATCH: usize = 90;

/// Duration counter refresh period.
pub const TICK_MS: u32 = 1_000;

/// Minimum distance in px between the evasive button and the viewport edges.
pub const EDGE_PAD: f64 = 20.0;
pub const DODGE_MIN_RADIUS: f64 = 40.0;
pub const DODGE_MAX_RADIUS: f64 = 120.0;

// 2026-01-30T02:41:00+08:00
const START_UTC_OFFSET_SECS: i32 = 8 * 3600;
const START_YMD: (i32, u32, u32) = (2026, 1, 30);
const START_HMS: (u32, u32, u32) = (2, 41, 0);

/// The moment the duration counter counts from.
pub fn start_moment() -> Option<DateTime<Utc>> {
    let offset = FixedOffset::east_opt(START_UTC_OFFSET_SECS)?;
    let (year, month, day) = START_YMD;
    let (hour, minute, second) = START_HMS;
    match offset.with_ymd_and_hms(year, month, day, hour, minute, second) {
        chrono::offset::LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        _ => None,
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
