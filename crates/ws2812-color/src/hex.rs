use core::fmt;
use core::ops::Deref;
use core::str::FromStr;

use crate::{Color, ParseColorError};

#[cfg(feature = "alloc")]
use alloc::string::String;

/// Prefix written in front of the six hex digits.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HexStyle {
    /// `ABCDEF`
    #[default]
    Normal,
    /// `#ABCDEF`
    Html,
    /// `0xABCDEF`
    Literal,
}

impl HexStyle {
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Html => "#",
            Self::Literal => "0x",
        }
    }
}

/// Maps the selector values 0, 1 and 2 to `Normal`, `Html` and `Literal`.
/// Anything else is `Normal`.
impl From<u8> for HexStyle {
    fn from(selector: u8) -> Self {
        match selector {
            1 => Self::Html,
            2 => Self::Literal,
            _ => Self::Normal,
        }
    }
}

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// The longest rendering plus its NUL terminator.
const HEX_CAPACITY: usize = 9;

/// A formatted color, held on the stack.
///
/// Always followed by a NUL byte, see [`HexString::as_bytes_with_nul`].
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct HexString {
    buf: [u8; HEX_CAPACITY],
    len: u8,
}

impl HexString {
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever written into `buf`.
        core::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..usize::from(self.len)]
    }

    /// The text followed by its NUL terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=usize::from(self.len)]
    }

    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Deref for HexString {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for HexString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for HexString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for HexString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn hex_nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        _ => None,
    }
}

/// Splits off a leading `0x`, `0X` or `#`.
fn strip_hex_prefix(bytes: &[u8]) -> (&[u8], bool) {
    match bytes {
        [b'0', b'x' | b'X', rest @ ..] | [b'#', rest @ ..] => (rest, true),
        _ => (bytes, false),
    }
}

impl Color {
    /// Parse six hex digits as `0xRRGGBB`.
    ///
    /// A leading `0x`, `0X` or `#` is skipped. Digits may be either case.
    /// Anything after the sixth digit is ignored, and a NUL byte ends the input
    /// the way it would end a C string.
    pub fn parse_hex(input: impl AsRef<[u8]>) -> Result<Self, ParseColorError> {
        let bytes = input.as_ref();
        let bytes = bytes.split(|&b| b == 0).next().unwrap_or_default();
        if bytes.is_empty() {
            return Err(ParseColorError::Empty);
        }

        let (digits, _) = strip_hex_prefix(bytes);
        let mut rgb = 0u32;
        for index in 0..6 {
            let &byte = digits
                .get(index)
                .ok_or(ParseColorError::TooShort { found: index })?;
            let nibble = hex_nibble(byte).ok_or(ParseColorError::InvalidDigit { byte, index })?;
            rgb = rgb << 4 | u32::from(nibble);
        }
        Ok(Self::from_rgb24(rgb))
    }

    /// Like [`Color::parse_hex`], but malformed input yields black.
    pub fn from_hex(input: impl AsRef<[u8]>) -> Self {
        Self::parse_hex(input).unwrap_or_else(|err| {
            tracing::trace!(%err, "unparseable hex color, using black");
            Self::default()
        })
    }

    /// Format as six uppercase hex digits behind the prefix for `style`.
    pub fn hex(self, style: HexStyle) -> HexString {
        let mut buf = [0u8; HEX_CAPACITY];
        let prefix = style.prefix().as_bytes();
        buf[..prefix.len()].copy_from_slice(prefix);

        let rgb = self.to_rgb24();
        let digits = &mut buf[prefix.len()..prefix.len() + 6];
        for (i, slot) in digits.iter_mut().enumerate() {
            let shift = (5 - i) * 4;
            *slot = DIGITS[((rgb >> shift) & 0xf) as usize];
        }

        HexString {
            buf,
            len: (prefix.len() + 6) as u8,
        }
    }

    #[cfg(feature = "alloc")]
    pub fn to_hex_string(self, style: HexStyle) -> String {
        String::from(self.hex(style).as_str())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts hex (see [`Color::parse_hex`]) or a VGA/X11 color name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = match Self::parse_hex(s) {
            Ok(color) => return Ok(color),
            Err(err) => err,
        };
        if let Some(color) = Self::from_named(s) {
            return Ok(color);
        }
        let (_, prefixed) = strip_hex_prefix(s.as_bytes());
        if prefixed || err == ParseColorError::Empty {
            Err(err)
        } else {
            Err(ParseColorError::UnknownName)
        }
    }
}

impl TryFrom<&str> for Color {
    type Error = ParseColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// `#RRGGBB`
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex(HexStyle::Html))
    }
}

/// `RRGGBB`, or `0xRRGGBB` with the alternate flag (`{:#X}`).
impl fmt::UpperHex for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = if f.alternate() {
            HexStyle::Literal
        } else {
            HexStyle::Normal
        };
        f.write_str(&self.hex(style))
    }
}

#[cfg(feature = "use_serde")]
mod serde_impl {
    use core::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::HexStyle;
    use crate::Color;

    impl Serialize for Color {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.hex(HexStyle::Html))
        }
    }

    struct ColorVisitor;

    impl Visitor<'_> for ColorVisitor {
        type Value = Color;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a hex color or a color name")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Color, E> {
            value
                .parse()
                .map_err(|err| E::custom(format_args!("{value:?}: {err}")))
        }
    }

    impl<'de> Deserialize<'de> for Color {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_str(ColorVisitor)
        }
    }
}
