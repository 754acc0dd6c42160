use std::fmt;

/// Fill/stroke color understood by every [`Surface`](crate::surface::Surface).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// Channels in `0..=255`, alpha in `0.0..=1.0`.
    Rgba(u8, u8, u8, f64),
    /// Hue in degrees, saturation and lightness in percent.
    Hsl(f64, f64, f64),
}

impl Color {
    pub const BLACK: Color = Color::Rgba(0, 0, 0, 1.0);
    pub const WHITE: Color = Color::Rgba(255, 255, 255, 1.0);

    pub fn black(alpha: f64) -> Self {
        Color::Rgba(0, 0, 0, alpha)
    }

    pub fn white(alpha: f64) -> Self {
        Color::Rgba(255, 255, 255, alpha)
    }

    pub fn alpha(&self) -> f64 {
        match *self {
            Color::Rgba(_, _, _, a) => a,
            Color::Hsl(..) => 1.0,
        }
    }

    /// Parse `#rgb` / `#rrggbb`. Anything else yields `None`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').filter(|d| d.is_ascii())?;
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            3 => {
                let mut out = [0u8; 3];
                for (i, c) in digits.chars().enumerate() {
                    let v = c.to_digit(16)? as u8;
                    out[i] = v * 17;
                }
                Some(Color::Rgba(out[0], out[1], out[2], 1.0))
            }
            6 => Some(Color::Rgba(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
                1.0,
            )),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    /// CSS color syntax, ready for `fillStyle` / `strokeStyle`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgba(r, g, b, a) => write!(f, "rgba({r}, {g}, {b}, {a})"),
            Color::Hsl(h, s, l) => write!(f, "hsl({h}, {s}%, {l}%)"),
        }
    }
}

