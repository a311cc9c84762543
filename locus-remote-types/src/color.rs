use serde::{Deserialize, Serialize};

/// Color representation.
///
/// Hex strings use the channel order of the vendor application: `#RRGGBB` for
/// opaque colors and `#AARRGGBB` when an alpha channel is present.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self::try_from_hex(&value).unwrap_or(Color::rgba(0, 0, 0, 255))
    }
}

impl From<Color> for String {
    fn from(val: Color) -> Self {
        val.to_hex()
    }
}

impl Color {
    /// Transparent color: `#00000000`
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    /// Red color: `#FFFF0000`
    pub const RED: Color = Color::rgba(255, 0, 0, 255);
    /// Green color: `#FF00FF00`
    pub const GREEN: Color = Color::rgba(0, 255, 0, 255);
    /// Blue color: `#FF0000FF`
    pub const BLUE: Color = Color::rgba(0, 0, 255, 255);
    /// White color: `#FFFFFFFF`
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    /// Black color: `#FF000000`
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);

    /// Constructs color from its RGBA channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Converts the color into HEX8 string: `#AARRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }

    /// Parses a color from the hex string. Hex string can be either HEX6 (`#RRGGBB`,
    /// taken as fully opaque) or HEX8 (`#AARRGGBB`).
    pub fn try_from_hex(hex_string: &str) -> Option<Self> {
        if hex_string.len() != 7 && hex_string.len() != 9 || hex_string.chars().next()? != '#' {
            return None;
        }

        let (a, rest) = if hex_string.len() == 9 {
            (
                u8::from_str_radix(&hex_string[1..3], 16).ok()?,
                &hex_string[3..],
            )
        } else {
            (255, &hex_string[1..])
        };

        let r = u8::from_str_radix(&rest[0..2], 16).ok()?;
        let g = u8::from_str_radix(&rest[2..4], 16).ok()?;
        let b = u8::from_str_radix(&rest[4..6], 16).ok()?;

        Some(Self { r, g, b, a })
    }

    /// Parses a color from the hex string. Hex string can be either HEX6 (`#RRGGBB`)
    /// or HEX8 (`#AARRGGBB`).
    ///
    /// # Panics
    ///
    /// Panics if the parsing fails.
    pub const fn from_hex(hex_string: &'static str) -> Self {
        let bytes = hex_string.as_bytes();
        if bytes.len() != 7 && bytes.len() != 9 || bytes[0] != b'#' {
            panic!("Invalid color hex string");
        }

        let offset = if bytes.len() == 9 { 2 } else { 0 };
        let a = if bytes.len() == 9 {
            decode_byte(&[bytes[1], bytes[2]])
        } else {
            255
        };

        let r = decode_byte(&[bytes[1 + offset], bytes[2 + offset]]);
        let g = decode_byte(&[bytes[3 + offset], bytes[4 + offset]]);
        let b = decode_byte(&[bytes[5 + offset], bytes[6 + offset]]);

        Self { r, g, b, a }
    }

    /// Returns a new color instance, copied from the base one but with the given alpha channel.
    pub fn with_alpha(&self, a: u8) -> Self {
        Self { a, ..*self }
    }

    /// Returns true if the color is fully transparent (`a == 0`).
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Red component of the color in RGBA space.
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Green component of the color in RGBA space.
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Blue component of the color in RGBA space.
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Opacity component of the color.
    pub fn a(&self) -> u8 {
        self.a
    }
}

const fn decode_byte(chars: &[u8]) -> u8 {
    debug_assert!(chars.len() == 2);
    let first = decode_char(chars[0]);
    let second = decode_char(chars[1]);

    first * 16 + second
}

const fn decode_char(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => panic!("Invalid hex character"),
    }
}
