//! Per-channel arithmetic.
//!
//! Every operation takes an [`Operand`]: a scalar `u8` applied to all three
//! channels, another [`Color`], or an explicit `(r, g, b)` triple. Results
//! saturate to `0..=255`; nothing wraps.
//!
//! The methods work in place and return `&mut Self` so they chain:
//!
//! ```
//! use ws2812_color::Color;
//!
//! let mut c = Color::new(200, 200, 200);
//! c.add(100u8).sub(50u8);
//! assert_eq!(c, Color::new(205, 205, 205));
//! ```
//!
//! The operator traits (`+`, `-`, `*`, `<<`, `>>` and their assigning forms)
//! run the same code on a copy.

use crate::Color;

/// Something that can be applied to the three channels of a [`Color`].
pub trait Operand {
    /// The operand for each channel, as `[r, g, b]`.
    fn channels(self) -> [u8; 3];
}

impl Operand for u8 {
    fn channels(self) -> [u8; 3] {
        [self; 3]
    }
}

impl Operand for Color {
    fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Operand for (u8, u8, u8) {
    fn channels(self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

impl Operand for [u8; 3] {
    fn channels(self) -> [u8; 3] {
        self
    }
}

/// `(a * b) >> 8`, darken-only.
#[inline]
fn multiply_channel(a: u8, b: u8) -> u8 {
    let product = (u32::from(a) * u32::from(b)) >> 8;
    product.min(255) as u8
}

/// `255 - (((255 - a) * (255 - b)) >> 8)`, lighten-only.
#[inline]
fn screen_channel(a: u8, b: u8) -> u8 {
    let inverse = (u32::from(255 - a) * u32::from(255 - b)) >> 8;
    (255 - inverse).min(255) as u8
}

impl Color {
    #[inline]
    fn apply(&mut self, operand: impl Operand, f: impl Fn(u8, u8) -> u8) -> &mut Self {
        let [r, g, b] = operand.channels();
        self.r = f(self.r, r);
        self.g = f(self.g, g);
        self.b = f(self.b, b);
        self
    }

    /// `min(255, channel + operand)`
    pub fn add(&mut self, operand: impl Operand) -> &mut Self {
        self.apply(operand, u8::saturating_add)
    }

    /// `max(0, channel - operand)`
    pub fn sub(&mut self, operand: impl Operand) -> &mut Self {
        self.apply(operand, u8::saturating_sub)
    }

    /// `max(operand, channel + operand)`, the sum saturating at 255.
    ///
    /// Biases each channel upward by the operand. Since the sum is never below
    /// the operand this lands on the same value as [`Color::add`].
    pub fn max(&mut self, operand: impl Operand) -> &mut Self {
        self.apply(operand, |channel, op| op.max(channel.saturating_add(op)))
    }

    /// `min(operand, channel + operand)`, the sum saturating at 255.
    ///
    /// The sum is never below the operand, so each channel ends up equal to
    /// its operand.
    pub fn min(&mut self, operand: impl Operand) -> &mut Self {
        self.apply(operand, |channel, op| op.min(channel.saturating_add(op)))
    }

    /// Multiply blend: `(channel * operand) >> 8`.
    ///
    /// Multiplying by 255 loses one step on every channel above zero.
    pub fn multiply(&mut self, operand: impl Operand) -> &mut Self {
        self.apply(operand, multiply_channel)
    }

    /// Screen blend: `255 - (((255 - channel) * (255 - operand)) >> 8)`.
    pub fn screen(&mut self, operand: impl Operand) -> &mut Self {
        self.apply(operand, screen_channel)
    }

    /// Shift each channel left by its operand. Shifts of 8 or more clear the channel.
    pub fn left(&mut self, operand: impl Operand) -> &mut Self {
        self.apply(operand, |channel, n| {
            channel.checked_shl(u32::from(n)).unwrap_or(0)
        })
    }

    /// Shift each channel right by its operand. Shifts of 8 or more clear the channel.
    pub fn right(&mut self, operand: impl Operand) -> &mut Self {
        self.apply(operand, |channel, n| {
            channel.checked_shr(u32::from(n)).unwrap_or(0)
        })
    }
}

macro_rules! binary_ops {
    ($($trait:ident :: $method:ident, $assign_trait:ident :: $assign_method:ident => $op:ident;)*) => {
        $(
            impl<T: Operand> core::ops::$trait<T> for Color {
                type Output = Color;

                fn $method(mut self, operand: T) -> Color {
                    Color::$op(&mut self, operand);
                    self
                }
            }

            impl<T: Operand> core::ops::$assign_trait<T> for Color {
                fn $assign_method(&mut self, operand: T) {
                    Color::$op(self, operand);
                }
            }
        )*
    };
}

binary_ops! {
    Add::add, AddAssign::add_assign => add;
    Sub::sub, SubAssign::sub_assign => sub;
    Mul::mul, MulAssign::mul_assign => multiply;
    Shl::shl, ShlAssign::shl_assign => left;
    Shr::shr, ShrAssign::shr_assign => right;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BLACK, WHITE};

    // ── add / sub ─────────────────────────────────────────────

    #[test]
    fn add_then_sub_saturates() {
        let mut c = Color::new(200, 200, 200);
        c.add((100u8, 100u8, 100u8));
        assert_eq!(c, Color::new(255, 255, 255));
        c.sub((50u8, 50u8, 50u8));
        assert_eq!(c, Color::new(205, 205, 205));
    }

    #[test]
    fn chaining_returns_the_new_value() {
        let mut c = Color::new(10, 20, 30);
        let out = *c.add(5u8).sub(Color::new(1, 2, 3));
        assert_eq!(out, Color::new(14, 23, 32));
        assert_eq!(c, out);
    }

    #[test]
    fn sub_saturates_at_zero() {
        let mut c = Color::new(10, 100, 0);
        c.sub([20u8, 50, 1]);
        assert_eq!(c, Color::new(0, 50, 0));
    }

    #[test]
    fn operand_kinds_agree() {
        let base = Color::new(1, 2, 3);
        let mut scalar = base;
        let mut triple = base;
        let mut array = base;
        let mut color = base;
        scalar.add(7u8);
        triple.add((7u8, 7u8, 7u8));
        array.add([7u8; 3]);
        color.add(Color::new(7, 7, 7));
        assert_eq!(scalar, triple);
        assert_eq!(triple, array);
        assert_eq!(array, color);
    }

    #[test]
    fn color_operand_is_rgb_ordered() {
        let mut c = BLACK;
        c.add(Color::new(1, 2, 3));
        assert_eq!(c.rgb(), (1, 2, 3));
    }

    // ── max / min ─────────────────────────────────────────────

    #[test]
    fn max_biases_upward() {
        let mut c = Color::new(0, 100, 200);
        c.max(60u8);
        assert_eq!(c, Color::new(60, 160, 255));
    }

    #[test]
    fn min_lands_on_operand() {
        let mut c = Color::new(0, 100, 200);
        c.min((10u8, 20u8, 30u8));
        assert_eq!(c, Color::new(10, 20, 30));
    }

    // ── blends ────────────────────────────────────────────────

    #[test]
    fn multiply_blend() {
        let mut c = Color::new(255, 128, 64);
        c.multiply(128u8);
        assert_eq!(c, Color::new(127, 64, 32));

        let mut c = Color::new(255, 128, 64);
        c.multiply(0u8);
        assert_eq!(c, BLACK);

        let mut c = Color::new(255, 128, 0);
        c.multiply(255u8);
        assert_eq!(c, Color::new(254, 127, 0));
    }

    #[test]
    fn screen_blend() {
        let mut c = Color::new(0, 128, 255);
        c.screen(255u8);
        assert_eq!(c, WHITE);

        let mut c = Color::new(0, 128, 255);
        c.screen(128u8);
        assert_eq!(c, Color::new(129, 192, 255));

        let mut c = Color::new(0, 128, 255);
        c.screen(0u8);
        assert_eq!(c, Color::new(1, 129, 255));
    }

    // ── shifts ────────────────────────────────────────────────

    #[test]
    fn shifts() {
        let mut c = Color::new(0b0000_0011, 0b1000_0001, 0xff);
        c.left((1u8, 1u8, 4u8));
        assert_eq!(c, Color::new(0b0000_0110, 0b0000_0010, 0xf0));
        c.right(1u8);
        assert_eq!(c, Color::new(0b0000_0011, 0b0000_0001, 0x78));
    }

    #[test]
    fn wide_shifts_clear_the_channel() {
        let mut c = WHITE;
        c.left((8u8, 7u8, 200u8));
        assert_eq!(c, Color::new(0, 0x80, 0));
        let mut c = WHITE;
        c.right((8u8, 7u8, 255u8));
        assert_eq!(c, Color::new(0, 1, 0));
    }

    // ── operators ─────────────────────────────────────────────

    #[test]
    fn operators_match_methods() {
        let c = Color::new(100, 150, 200);
        assert_eq!(c + 100u8, Color::new(200, 250, 255));
        assert_eq!(c - (50u8, 200u8, 0u8), Color::new(50, 0, 200));
        assert_eq!(c * 128u8, Color::new(50, 75, 100));
        assert_eq!(c << 1u8, Color::new(200, 44, 144));
        assert_eq!(c >> 2u8, Color::new(25, 37, 50));
        // Operators leave the left-hand side alone.
        assert_eq!(c, Color::new(100, 150, 200));
    }

    #[test]
    fn assign_operators() {
        let mut c = Color::new(100, 150, 200);
        c += 100u8;
        assert_eq!(c, Color::new(200, 250, 255));
        c -= Color::new(200, 0, 0);
        assert_eq!(c, Color::new(0, 250, 255));
        c *= 0u8;
        assert_eq!(c, BLACK);
        c += 1u8;
        c <<= 3u8;
        assert_eq!(c, Color::new(8, 8, 8));
        c >>= [1u8, 2, 3];
        assert_eq!(c, Color::new(4, 2, 1));
    }
}
