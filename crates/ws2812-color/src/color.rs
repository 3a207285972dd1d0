use core::mem::{offset_of, size_of};

/// A 24-bit color laid out in the order a WS2812B clocks it in: green, red, blue.
///
/// The struct is `#[repr(C)]` over three `u8`s, so it has no padding and a
/// `[Color]` is exactly the byte stream the strip expects. Use
/// [`Color::pack_grb`] or [`Color::grb_stream`] to hand that stream to a driver.
///
/// Construct with [`Color::new`] (which takes the channels in the usual r, g, b
/// order), from an integer, from hex text, from [`Color::hue`], or from one of
/// the [named colors](crate::palette).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub g: u8,
    pub r: u8,
    pub b: u8,
}

// The wire order is part of the public contract.
const _: () = {
    assert!(size_of::<Color>() == 3);
    assert!(offset_of!(Color, g) == 0);
    assert!(offset_of!(Color, r) == 1);
    assert!(offset_of!(Color, b) == 2);
};

impl Color {
    /// Create a color from red, green and blue channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { g, r, b }
    }

    /// Create a color from `0x00RRGGBB`. The top byte is ignored.
    #[inline]
    pub const fn from_rgb24(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Create a color from `0b0RRRRRGGGGGBBBBB`.
    ///
    /// Each 5-bit channel lands in the top five bits of its byte; the low three
    /// bits are zero.
    #[inline]
    pub const fn from_rgb15(rgb: u16) -> Self {
        Self::new(
            ((rgb >> 7) & 0xf8) as u8,
            ((rgb >> 2) & 0xf8) as u8,
            ((rgb << 3) & 0xf8) as u8,
        )
    }

    /// Create a color from three bytes in wire order.
    #[inline]
    pub const fn from_grb_bytes([g, r, b]: [u8; 3]) -> Self {
        Self { g, r, b }
    }

    #[inline]
    pub const fn r(self) -> u8 {
        self.r
    }

    #[inline]
    pub const fn g(self) -> u8 {
        self.g
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.b
    }

    /// Returns the channels as `(r, g, b)`.
    #[inline]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Returns `0x00RRGGBB`.
    #[inline]
    pub const fn to_rgb24(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Returns `0b0RRRRRGGGGGBBBBB`, dropping the low three bits of each channel.
    #[inline]
    pub const fn to_rgb15(self) -> u16 {
        ((self.r & 0xf8) as u16) << 7 | ((self.g & 0xf8) as u16) << 2 | (self.b >> 3) as u16
    }

    /// Returns `0x00GGRRBB`, the order the LED receives.
    #[inline]
    pub const fn grb(self) -> u32 {
        (self.g as u32) << 16 | (self.r as u32) << 8 | self.b as u32
    }

    /// Returns the three bytes in wire order.
    #[inline]
    pub const fn to_grb_bytes(self) -> [u8; 3] {
        [self.g, self.r, self.b]
    }

    /// Reassign every channel from `0x00RRGGBB`.
    pub fn set_rgb24(&mut self, rgb: u32) {
        *self = Self::from_rgb24(rgb);
    }

    /// Reassign every channel from `0b0RRRRRGGGGGBBBBB`.
    pub fn set_rgb15(&mut self, rgb: u16) {
        *self = Self::from_rgb15(rgb);
    }

    /// Write `colors` into `out` as a g, r, b byte stream.
    ///
    /// Only whole pixels are written. Returns the number of bytes written,
    /// which is `3 * min(colors.len(), out.len() / 3)`.
    pub fn pack_grb(colors: &[Self], out: &mut [u8]) -> usize {
        let mut written = 0;
        for (color, chunk) in colors.iter().zip(out.chunks_exact_mut(3)) {
            chunk.copy_from_slice(&color.to_grb_bytes());
            written += 3;
        }
        written
    }

    /// Iterate over `colors` as a g, r, b byte stream.
    pub fn grb_stream(colors: &[Self]) -> impl Iterator<Item = u8> + '_ {
        colors.iter().flat_map(|color| color.to_grb_bytes())
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for (u8, u8, u8) {
    fn from(color: Color) -> Self {
        color.rgb()
    }
}

/// 32-bit integers carry `0x00RRGGBB`, 16-bit integers `0b0RRRRRGGGGGBBBBB`.
/// Signedness only changes the type; the bits are the same.
macro_rules! int_conversions {
    ($($int:ty => $from:ident, $to:ident, $unsigned:ty;)*) => {
        $(
            impl From<$int> for Color {
                #[allow(clippy::cast_sign_loss, clippy::unnecessary_cast)]
                fn from(value: $int) -> Self {
                    Self::$from(value as $unsigned)
                }
            }

            impl From<Color> for $int {
                #[allow(clippy::cast_possible_wrap, clippy::unnecessary_cast)]
                fn from(color: Color) -> Self {
                    color.$to() as $int
                }
            }
        )*
    };
}

int_conversions! {
    u32 => from_rgb24, to_rgb24, u32;
    i32 => from_rgb24, to_rgb24, u32;
    u16 => from_rgb15, to_rgb15, u16;
    i16 => from_rgb15, to_rgb15, u16;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_black() {
        assert_eq!(Color::default(), Color::new(0, 0, 0));
        assert_eq!(Color::default().to_rgb24(), 0);
    }

    #[test]
    fn new_stores_channels_verbatim() {
        let c = Color::new(1, 2, 3);
        assert_eq!((c.r, c.g, c.b), (1, 2, 3));
        assert_eq!(c.rgb(), (1, 2, 3));
        assert_eq!((c.r(), c.g(), c.b()), (1, 2, 3));
    }

    // ── 24-bit ────────────────────────────────────────────────

    #[test]
    fn rgb24_lime() {
        let c = Color::from_rgb24(0x00ff00);
        assert_eq!(c.rgb(), (0, 255, 0));
        assert_eq!(c.to_rgb24(), 0x00ff00);
        assert_eq!(c.grb(), 0xff0000);
        assert_eq!(c.to_rgb15(), 0x03e0);
    }

    #[test]
    fn rgb24_ignores_top_byte() {
        assert_eq!(Color::from_rgb24(0xff12_3456), Color::from_rgb24(0x0012_3456));
        assert_eq!(Color::from(-1i32), Color::new(255, 255, 255));
    }

    #[test]
    fn rgb24_signed_and_unsigned_agree() {
        let c = Color::new(0xab, 0xcd, 0xef);
        assert_eq!(u32::from(c), 0xabcdef);
        assert_eq!(i32::from(c), 0xabcdef);
        assert_eq!(Color::from(0xabcdefu32), c);
        assert_eq!(Color::from(0xabcdefi32), c);
    }

    // ── 15-bit ────────────────────────────────────────────────

    #[test]
    fn rgb15_expands_into_high_bits() {
        assert_eq!(Color::from_rgb15(0x7fff).rgb(), (0xf8, 0xf8, 0xf8));
        assert_eq!(Color::from_rgb15(0x7c00).rgb(), (0xf8, 0, 0));
        assert_eq!(Color::from_rgb15(0x03e0).rgb(), (0, 0xf8, 0));
        assert_eq!(Color::from_rgb15(0x001f).rgb(), (0, 0, 0xf8));
        assert_eq!(Color::from_rgb15(0b0_00001_00010_00011).rgb(), (8, 16, 24));
    }

    #[test]
    fn rgb15_drops_low_bits() {
        let c = Color::new(0xff, 0x87, 0x07);
        assert_eq!(c.to_rgb15(), 0b0_11111_10000_00000);
        assert_eq!(Color::from_rgb15(c.to_rgb15()).rgb(), (0xf8, 0x80, 0x00));
    }

    #[test]
    fn rgb15_signed_and_unsigned_agree() {
        let c = Color::new(0x80, 0x40, 0x20);
        assert_eq!(u16::from(c), c.to_rgb15());
        assert_eq!(i16::from(c) as u16, c.to_rgb15());
        assert_eq!(Color::from(c.to_rgb15()), Color::from(i16::from(c)));
    }

    #[test]
    fn setters_reassign_every_channel() {
        let mut c = Color::new(1, 2, 3);
        c.set_rgb24(0x102030);
        assert_eq!(c.rgb(), (0x10, 0x20, 0x30));
        c.set_rgb15(0x7c00);
        assert_eq!(c.rgb(), (0xf8, 0, 0));
    }

    // ── wire order ────────────────────────────────────────────

    #[test]
    fn grb_bytes() {
        let c = Color::new(0x11, 0x22, 0x33);
        assert_eq!(c.to_grb_bytes(), [0x22, 0x11, 0x33]);
        assert_eq!(Color::from_grb_bytes([0x22, 0x11, 0x33]), c);
        assert_eq!(c.grb(), 0x221133);
    }

    #[test]
    fn pack_grb_whole_pixels_only() {
        let colors = [Color::new(1, 2, 3), Color::new(4, 5, 6)];
        let mut out = [0u8; 8];
        assert_eq!(Color::pack_grb(&colors, &mut out), 6);
        assert_eq!(out, [2, 1, 3, 5, 4, 6, 0, 0]);

        let mut short = [0u8; 4];
        assert_eq!(Color::pack_grb(&colors, &mut short), 3);
        assert_eq!(short, [2, 1, 3, 0]);

        assert_eq!(Color::pack_grb(&[], &mut out), 0);
    }

    #[test]
    fn grb_stream_matches_pack() {
        let colors = [Color::new(10, 20, 30), Color::new(40, 50, 60)];
        let mut packed = [0u8; 6];
        Color::pack_grb(&colors, &mut packed);
        assert!(Color::grb_stream(&colors).eq(packed));
    }

    #[test]
    fn tuple_and_array_conversions() {
        assert_eq!(Color::from((1, 2, 3)), Color::new(1, 2, 3));
        assert_eq!(Color::from([1, 2, 3]), Color::new(1, 2, 3));
        let t: (u8, u8, u8) = Color::new(7, 8, 9).into();
        assert_eq!(t, (7, 8, 9));
    }
}
