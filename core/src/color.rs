use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// A colour accepted by the simple colour picker: `#rrggbb` or `transparent`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PickerColor {
    Hex(String),
    Transparent,
}

impl PickerColor {
    pub fn is_transparent(&self) -> bool {
        matches!(self, PickerColor::Transparent)
    }

    pub fn as_str(&self) -> &str {
        match self {
            PickerColor::Hex(hex) => hex,
            PickerColor::Transparent => "transparent",
        }
    }

    /// Whether a tick drawn on top should be dark for contrast.
    pub fn needs_dark_tick(&self) -> bool {
        match self {
            PickerColor::Transparent => true,
            PickerColor::Hex(hex) => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0) as u32;
                let (r, g, b) = (channel(1), channel(3), channel(5));
                // ITU-R BT.601 luma.
                (r * 299 + g * 587 + b * 114) / 1000 > 160
            }
        }
    }
}

impl FromStr for PickerColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("transparent") {
            return Ok(PickerColor::Transparent);
        }
        let bytes = s.as_bytes();
        if bytes.len() == 7 && bytes[0] == b'#' && bytes[1..].iter().all(u8::is_ascii_hexdigit) {
            Ok(PickerColor::Hex(s.to_ascii_uppercase()))
        } else {
            Err(ColorError::InvalidHex(s.to_string()))
        }
    }
}

impl TryFrom<String> for PickerColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PickerColor> for String {
    fn from(color: PickerColor) -> Self {
        color.as_str().to_string()
    }
}

impl fmt::Display for PickerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arrow keys understood by the colour grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKey {
    Left,
    Right,
    Up,
    Down,
}

impl GridKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(GridKey::Left),
            "ArrowRight" | "Right" => Some(GridKey::Right),
            "ArrowUp" | "Up" => Some(GridKey::Up),
            "ArrowDown" | "Down" => Some(GridKey::Down),
            _ => None,
        }
    }
}

/// Number of swatches per row for a container of `max_width` pixels.
pub fn columns_for_width(max_width: u32, child_width: u32) -> usize {
    if child_width == 0 {
        return 1;
    }
    ((max_width / child_width) as usize).max(1)
}

/// Index reached from `current` with `key` in a grid of `count` items.
///
/// Horizontal moves wrap around the whole list; vertical moves wrap within
/// the current column.
pub fn navigate(current: usize, key: GridKey, count: usize, columns: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let columns = columns.clamp(1, count);
    let current = current.min(count - 1);

    match key {
        GridKey::Right => (current + 1) % count,
        GridKey::Left => (current + count - 1) % count,
        GridKey::Down => {
            let next = current + columns;
            if next < count {
                next
            } else {
                current % columns
            }
        }
        GridKey::Up => {
            if current >= columns {
                current - columns
            } else {
                let column = current % columns;
                let last_row_start = (count - 1) / columns * columns;
                let candidate = last_row_start + column;
                if candidate < count {
                    candidate
                } else {
                    candidate - columns
                }
            }
        }
    }
}
