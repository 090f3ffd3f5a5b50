//! Event colours for timetable boxes.
//!
//! Each event id maps to one entry of a fixed palette, so an event keeps
//! its colour across every venue and every redraw.

/// Distinct colours with good contrast against white text.
pub const EVENT_PALETTE: [&str; 15] = [
    "#1976d2", // Blue
    "#388e3c", // Green
    "#f57c00", // Orange
    "#7b1fa2", // Purple
    "#c2185b", // Pink
    "#0288d1", // Light Blue
    "#689f38", // Light Green
    "#fbc02d", // Yellow
    "#5d4037", // Brown
    "#455a64", // Blue Grey
    "#d32f2f", // Red
    "#00796b", // Teal
    "#e64a19", // Deep Orange
    "#512da8", // Deep Purple
    "#303f9f", // Indigo
];

pub fn event_color(event_id: i64) -> &'static str {
    let index = event_id.rem_euclid(EVENT_PALETTE.len() as i64) as usize;
    EVENT_PALETTE[index]
}

/// How much each channel drops for the hover shade
pub const HOVER_DARKEN_AMOUNT: u8 = 20;

/// Hover shade of the event's palette colour
pub fn hover_color(event_id: i64) -> String {
    let color = event_color(event_id);
    darken_hex(color, HOVER_DARKEN_AMOUNT).unwrap_or_else(|| color.to_string())
}

/// Subtract `amount` from each RGB channel, clamping at zero.
///
/// Used for the hover shade of a box. Returns `None` unless `hex` is `#RRGGBB`.
pub fn darken_hex(hex: &str, amount: u8) -> Option<String> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;

    let channel = |shift: u32| ((value >> shift) & 0xff) as u8;
    let [r, g, b] = [channel(16), channel(8), channel(0)].map(|c| c.saturating_sub(amount));

    Some(format!("#{:02x}{:02x}{:02x}", r, g, b))
}

// ── Tests ──────────────────────────────────────────────────────────
