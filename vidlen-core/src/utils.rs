//! Utility functions for formatting durations and byte counts.
//!
//! Durations arrive as whole seconds where a negative value means "unknown"
//! (see [`crate::probe::UNKNOWN_DURATION`]); sizes as raw byte counts.

/// Placeholder rendered for an unknown duration or size.
pub const UNKNOWN_DISPLAY: &str = "???";

/// Formats seconds as HH:MM:SS (e.g., 3725 -> "01:02:05"). Returns "???" for
/// negative inputs. Hours are never clipped, so 360000 -> "100:00:00".
#[must_use]
pub fn format_duration(seconds: i64) -> String {
    if seconds < 0 {
        return UNKNOWN_DISPLAY.to_string();
    }

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Like [`format_duration`], but drops a zero hour field the way media
/// players do: 90 -> "01:30", 0 -> "00:00", 3600 -> "01:00:00".
#[must_use]
pub fn format_duration_compact(seconds: i64) -> String {
    let full = format_duration(seconds);
    match full.strip_prefix("00:") {
        Some(rest) => rest.to_string(),
        None => full,
    }
}

/// Formats bytes with binary units: "N Bytes" below 1 KiB, otherwise KiB,
/// MiB or GiB with one decimal place. GiB is the largest unit.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    const GIB: u64 = MIB * 1024;

    if bytes < KIB {
        format!("{bytes} Bytes")
    } else if bytes < MIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else if bytes < GIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else {
        format!("{:.1} GiB", bytes as f64 / GIB as f64)
    }
}
