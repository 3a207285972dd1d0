#![cfg_attr(not(any(feature = "std", test)), no_std)]
//! A 24-bit color value for WS2812B-style addressable LEDs.
//!
//! [`Color`] stores its channels in green, red, blue order, the order those
//! LEDs receive them, so a slice of colors is already the byte stream for a
//! strip. On top of that value the crate provides:
//!
//! * conversions to and from packed `0xRRGGBB` and `0b0RRRRRGGGGGBBBBB` integers,
//! * a hex codec: [`Color::parse_hex`] / [`Color::from_hex`] accept `RRGGBB`,
//!   `#RRGGBB` or `0xRRGGBB` in either case; [`Color::hex`] writes uppercase
//!   digits in one of three [`HexStyle`]s,
//! * saturating per-channel arithmetic and the multiply and screen blends
//!   (see [`ops`]),
//! * a cheap hue sweep, [`Color::hue`],
//! * the VGA, X11 and xterm-256 named colors in [`palette`].
//!
//! ```
//! use ws2812_color::{Color, HexStyle, palette};
//!
//! let mut c = Color::from_hex("#ABCDEF");
//! assert_eq!(c.hex(HexStyle::Literal).as_str(), "0xABCDEF");
//!
//! c.multiply(palette::GRAY);
//! let mut strip = [0u8; 3];
//! Color::pack_grb(&[c], &mut strip);
//! assert_eq!(strip, [c.g, c.r, c.b]);
//! ```
//!
//! # Features
//!
//! * `std` (default): enables `alloc` and builds a hash index for name lookups.
//! * `alloc`: [`Color::to_hex_string`].
//! * `use_serde`: serializes as `"#RRGGBB"` and deserializes from anything
//!   `FromStr` accepts.

#[cfg(feature = "alloc")]
extern crate alloc;

mod color;
mod error;
mod hex;
mod hue;
pub mod ops;
pub mod palette;

pub use color::Color;
pub use error::ParseColorError;
pub use hex::{HexString, HexStyle};
pub use ops::Operand;

#[cfg(doctest)]
#[doc = include_str!("../../../README.md")]
struct ReadmeDoctests;
