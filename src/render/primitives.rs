use serde::{Deserialize, Serialize};

use crate::error::{GanttError, GanttResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// CSS `green`.
    pub const GREEN: Self = Self::from_rgb8(0, 128, 0);
    /// CSS `lightblue`.
    pub const LIGHT_BLUE: Self = Self::from_rgb8(173, 216, 230);
    /// CSS `darkblue`.
    pub const DARK_BLUE: Self = Self::from_rgb8(0, 0, 139);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(hex: &str) -> GanttResult<Self> {
        let digits = hex.trim_start_matches('#');
        if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GanttError::InvalidData(format!(
                "color `{hex}` must be #rrggbb or #rrggbbaa"
            )));
        }

        let channel = |index: usize| {
            u8::from_str_radix(&digits[index..index + 2], 16).map_err(|_| {
                GanttError::InvalidData(format!("color `{hex}` has a non-hex channel"))
            })
        };
        let mut color = Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?);
        if digits.len() == 8 {
            color.alpha = f64::from(channel(6)?) / 255.0;
        }
        Ok(color)
    }

    /// Formats the color as `#rrggbb`, appending alpha when not opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        let to_u8 = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let rgb = format!(
            "#{:02x}{:02x}{:02x}",
            to_u8(self.red),
            to_u8(self.green),
            to_u8(self.blue)
        );
        if self.alpha >= 1.0 {
            rgb
        } else {
            format!("{rgb}{:02x}", to_u8(self.alpha))
        }
    }

    pub fn validate(self) -> GanttResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GanttError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> GanttResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(GanttError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(GanttError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
