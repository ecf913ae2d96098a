//! 8-bit RGB pixel type

use std::fmt;
use std::str::FromStr;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// A character other than 0-9, a-f, A-F
    InvalidHex(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidHex(c) => {
                write!(f, "invalid hex character: {:?}", c)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// One RGB sample, channels in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel(pub [u8; 3]);

impl Pixel {
    pub const BLACK: Pixel = Pixel([0, 0, 0]);
    pub const WHITE: Pixel = Pixel([255, 255, 255]);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    #[inline]
    pub fn r(self) -> u8 {
        self.0[0]
    }

    #[inline]
    pub fn g(self) -> u8 {
        self.0[1]
    }

    #[inline]
    pub fn b(self) -> u8 {
        self.0[2]
    }

    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        self.0
    }

    /// Format as `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

impl From<[u8; 3]> for Pixel {
    fn from(bytes: [u8; 3]) -> Self {
        Self(bytes)
    }
}

impl From<Pixel> for [u8; 3] {
    fn from(px: Pixel) -> Self {
        px.0
    }
}

impl FromStr for Pixel {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive,
    /// with surrounding whitespace trimmed.
    ///
    /// ```
    /// use cvd_sim::Pixel;
    ///
    /// let white: Pixel = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Pixel::WHITE);
    ///
    /// let red: Pixel = "#f00".parse().unwrap();
    /// assert_eq!(red, Pixel::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        let digits = s
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or(ParseColorError::InvalidHex(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        match digits[..] {
            // Shorthand: 0xF -> 0xFF
            [r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::new(
                r1 << 4 | r0,
                g1 << 4 | g0,
                b1 << 4 | b0,
            )),
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing_6digit() {
        assert_eq!("#FFFFFF".parse::<Pixel>().unwrap(), Pixel::WHITE);
        assert_eq!("000000".parse::<Pixel>().unwrap(), Pixel::BLACK);
        assert_eq!(
            "#1a2B3c".parse::<Pixel>().unwrap(),
            Pixel::new(0x1a, 0x2b, 0x3c)
        );
    }

    #[test]
    fn test_hex_parsing_shorthand() {
        assert_eq!("#ABC".parse::<Pixel>().unwrap(), Pixel::new(0xAA, 0xBB, 0xCC));
        assert_eq!("  fff ".parse::<Pixel>().unwrap(), Pixel::WHITE);
    }

    #[test]
    fn test_hex_parsing_errors() {
        assert_eq!("#GGG".parse::<Pixel>(), Err(ParseColorError::InvalidHex('G')));
        assert_eq!("#FFFF".parse::<Pixel>(), Err(ParseColorError::InvalidLength));
        assert_eq!("".parse::<Pixel>(), Err(ParseColorError::InvalidLength));
        assert_eq!("#".parse::<Pixel>(), Err(ParseColorError::InvalidLength));
        assert_eq!("#ééé".parse::<Pixel>(), Err(ParseColorError::InvalidHex('é')));
        assert_eq!("+12345".parse::<Pixel>(), Err(ParseColorError::InvalidHex('+')));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Pixel::new(255, 0, 16).to_hex(), "#ff0010");
    }
}
