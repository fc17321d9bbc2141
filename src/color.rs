//! Hex → HSL colour conversion.
//!
//! Stylesheets consume theme colours as bare HSL triples (`hsl(var(--primary))`),
//! so every tenant hex colour passes through here before it reaches the
//! document root. Conversion is pure; the only effect is a `tracing` warning
//! when lenient conversion has to fall back.

use std::fmt;

use crate::error::ColorError;

/// 8-bit RGB colour parsed from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Integer HSL triple: hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    /// 0–360.
    pub hue: u16,
    /// 0–100.
    pub saturation: u8,
    /// 0–100.
    pub lightness: u8,
}

impl Hsl {
    /// Logical white, returned for any input that fails validation.
    pub const FALLBACK: Hsl = Hsl {
        hue: 0,
        saturation: 0,
        lightness: 100,
    };

    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

/// CSS custom-property form: `H S% L%`.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.hue, self.saturation, self.lightness)
    }
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Standard RGB → HSL, rounded to whole degrees and percents.
    #[allow(clippy::many_single_char_names)]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            // Channel ties resolve red, then green, then blue.
            let h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            (h / 6.0, s)
        };

        Hsl {
            hue: round_to(h * 360.0, 360) as u16,
            saturation: round_to(s * 100.0, 100) as u8,
            lightness: round_to(l * 100.0, 100) as u8,
        }
    }
}

fn round_to(value: f64, upper: u32) -> u32 {
    value.round().clamp(0.0, f64::from(upper)) as u32
}

/// True iff `hex` is `#` followed by exactly 3 or 6 hex digits (any case).
pub fn is_valid_hex(hex: &str) -> bool {
    let Some(digits) = hex.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Strict parse of `#RGB` / `#RRGGBB`.
pub fn parse_hex(hex: &str) -> Result<Rgb, ColorError> {
    if !is_valid_hex(hex) {
        return Err(ColorError::InvalidFormat(hex.to_string()));
    }
    let digits = &hex.as_bytes()[1..];
    let channel = |hi: u8, lo: u8| (hex_value(hi) << 4) | hex_value(lo);
    let rgb = if digits.len() == 3 {
        Rgb::new(
            channel(digits[0], digits[0]),
            channel(digits[1], digits[1]),
            channel(digits[2], digits[2]),
        )
    } else {
        Rgb::new(
            channel(digits[0], digits[1]),
            channel(digits[2], digits[3]),
            channel(digits[4], digits[5]),
        )
    };
    Ok(rgb)
}

// Only called on bytes already checked by `is_valid_hex`.
fn hex_value(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => 0,
    }
}

/// Lenient conversion: malformed input logs a warning and yields white.
pub fn hex_to_hsl(hex: &str) -> Hsl {
    match parse_hex(hex) {
        Ok(rgb) => rgb.to_hsl(),
        Err(err) => {
            tracing::warn!(input = hex, "{err}; falling back to white");
            Hsl::FALLBACK
        }
    }
}

/// `hex_to_hsl` formatted for a CSS custom property, e.g. `195 100% 50%`.
pub fn to_css_hsl_string(hex: &str) -> String {
    hex_to_hsl(hex).to_string()
}
