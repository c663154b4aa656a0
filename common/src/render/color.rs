use serde::{Deserialize, Serialize};

/// 8-bit RGBA colour; serialized as `#rrggbb` or `#rrggbbaa`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Linear blend towards `other`; `t` is clamped to 0..=1.
    pub fn mix(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgba {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
            a: lerp(self.a, other.a),
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    pub fn parse_hex(value: &str) -> Result<Rgba, String> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| format!("Colour must start with '#', got {}", value))?;
        let channel = |i: usize| {
            digits
                .get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| format!("Invalid colour {}", value))
        };
        match digits.len() {
            6 => Ok(Rgba::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Rgba::rgb(channel(0)?, channel(2)?, channel(4)?).with_alpha(channel(6)?)),
            _ => Err(format!("Colour must have 6 or 8 hex digits, got {}", value)),
        }
    }
}

impl TryFrom<String> for Rgba {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgba::parse_hex(&value)
    }
}

impl From<Rgba> for String {
    fn from(value: Rgba) -> Self {
        value.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_with_and_without_alpha() {
        assert_eq!(Rgba::parse_hex("#10ff80").unwrap(), Rgba::rgb(0x10, 0xff, 0x80));
        assert_eq!(
            Rgba::parse_hex("#10ff8040").unwrap(),
            Rgba::rgb(0x10, 0xff, 0x80).with_alpha(0x40)
        );
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(Rgba::parse_hex("10ff80").is_err());
        assert!(Rgba::parse_hex("#10ff8").is_err());
        assert!(Rgba::parse_hex("#zzzzzz").is_err());
    }

    #[test]
    fn test_mix_endpoints() {
        let black = Rgba::rgb(0, 0, 0);
        let white = Rgba::rgb(255, 255, 255);
        assert_eq!(black.mix(white, 0.0), black);
        assert_eq!(black.mix(white, 1.0), white);
        assert_eq!(black.mix(white, 2.0), white);
    }
}
