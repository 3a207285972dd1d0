//! Property-based tests for the color value.
//!
//! Verifies:
//! - 24-bit round trip is lossless, 15-bit round trip clears the low 3 bits
//!   and is idempotent afterwards
//! - add/sub saturate and only undo each other when nothing saturated
//! - multiply by 0 is black, by 255 is the identity within one step
//! - screen by 255 is white, by 0 is the identity within one step
//! - parse then format NORMAL returns the uppercase digits, for every prefix
//! - the byte packer emits g, r, b for every pixel
//! - the lenient parser never panics

use proptest::prelude::*;

use ws2812_color::{Color, HexStyle, ParseColorError};

// ────────────────────────────────────────────────────────────────────
// Strategies
// ────────────────────────────────────────────────────────────────────

fn arb_color() -> impl Strategy<Value = Color> {
    any::<(u8, u8, u8)>().prop_map(Color::from)
}

fn arb_prefix() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(""), Just("#"), Just("0x"), Just("0X")]
}

fn arb_hex_digits() -> impl Strategy<Value = String> {
    "[0-9a-fA-F]{6}"
}

// ────────────────────────────────────────────────────────────────────
// Integer codecs
// ────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn rgb24_round_trip_is_lossless(c in arb_color()) {
        prop_assert_eq!(Color::from_rgb24(c.to_rgb24()), c);
        prop_assert_eq!(Color::from(u32::from(c)), c);
        prop_assert_eq!(Color::from(i32::from(c)), c);
    }

    #[test]
    fn rgb24_upper_byte_is_ignored(rgb in any::<u32>()) {
        prop_assert_eq!(Color::from_rgb24(rgb).to_rgb24(), rgb & 0x00ff_ffff);
    }

    #[test]
    fn rgb15_round_trip_clears_low_bits(c in arb_color()) {
        let once = Color::from_rgb15(c.to_rgb15());
        prop_assert_eq!(once.rgb(), (c.r & 0xf8, c.g & 0xf8, c.b & 0xf8));
        prop_assert_eq!(Color::from_rgb15(once.to_rgb15()), once);
    }

    #[test]
    fn rgb15_fits_in_15_bits(c in arb_color()) {
        prop_assert_eq!(c.to_rgb15() & 0x8000, 0);
    }

    #[test]
    fn grb_is_wire_order(c in arb_color()) {
        let [g, r, b] = c.to_grb_bytes();
        prop_assert_eq!((r, g, b), c.rgb());
        prop_assert_eq!(c.grb(), u32::from(g) << 16 | u32::from(r) << 8 | u32::from(b));
    }

    #[test]
    fn packer_emits_every_pixel(colors in prop::collection::vec(arb_color(), 0..32)) {
        let mut out = vec![0u8; colors.len() * 3];
        prop_assert_eq!(Color::pack_grb(&colors, &mut out), out.len());
        for (chunk, c) in out.chunks_exact(3).zip(&colors) {
            let expected = c.to_grb_bytes();
            prop_assert_eq!(chunk, &expected[..]);
        }
        prop_assert!(Color::grb_stream(&colors).eq(out.iter().copied()));
    }
}

// ────────────────────────────────────────────────────────────────────
// Arithmetic
// ────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn add_sub_saturate(c in arb_color(), x in any::<u8>()) {
        let mut sum = c;
        sum.add(x);
        prop_assert_eq!(sum.r, c.r.saturating_add(x));
        prop_assert_eq!(sum.g, c.g.saturating_add(x));
        prop_assert_eq!(sum.b, c.b.saturating_add(x));

        let mut diff = c;
        diff.sub(x);
        prop_assert_eq!(diff.rgb(), (c.r.saturating_sub(x), c.g.saturating_sub(x), c.b.saturating_sub(x)));
    }

    #[test]
    fn add_then_sub_restores_unless_saturated(c in arb_color(), x in any::<u8>()) {
        let mut round = c;
        round.add(x).sub(x);
        let saturated = [c.r, c.g, c.b].iter().any(|&ch| u16::from(ch) + u16::from(x) > 255);
        if saturated {
            prop_assert!(round.r <= c.r && round.g <= c.g && round.b <= c.b);
        } else {
            prop_assert_eq!(round, c);
        }
    }

    #[test]
    fn multiply_bounds(c in arb_color()) {
        let mut black = c;
        black.multiply(0u8);
        prop_assert_eq!(black, Color::default());

        let mut same = c;
        same.multiply(255u8);
        for (out, orig) in [(same.r, c.r), (same.g, c.g), (same.b, c.b)] {
            prop_assert!(orig - out <= 1, "{} -> {}", orig, out);
        }
    }

    #[test]
    fn multiply_darkens_screen_lightens(c in arb_color(), other in arb_color()) {
        let mut dark = c;
        dark.multiply(other);
        let mut light = c;
        light.screen(other);
        prop_assert!(dark.r <= c.r && dark.g <= c.g && dark.b <= c.b);
        prop_assert!(light.r >= c.r && light.g >= c.g && light.b >= c.b);
    }

    #[test]
    fn screen_bounds(c in arb_color()) {
        let mut white = c;
        white.screen(255u8);
        prop_assert_eq!(white, Color::new(255, 255, 255));

        let mut same = c;
        same.screen(0u8);
        for (out, orig) in [(same.r, c.r), (same.g, c.g), (same.b, c.b)] {
            prop_assert!(out - orig <= 1, "{} -> {}", orig, out);
        }
    }

    #[test]
    fn max_matches_add_and_min_matches_operand(c in arb_color(), x in any::<(u8, u8, u8)>()) {
        let mut biased = c;
        biased.max(x);
        let mut summed = c;
        summed.add(x);
        prop_assert_eq!(biased, summed);

        let mut capped = c;
        capped.min(x);
        prop_assert_eq!(capped, Color::from(x));
    }

    #[test]
    fn shifts_match_u8_semantics(c in arb_color(), n in 0u8..8) {
        let mut left = c;
        left.left(n);
        prop_assert_eq!(left.rgb(), (c.r << n, c.g << n, c.b << n));

        let mut right = c;
        right.right(n);
        prop_assert_eq!(right.rgb(), (c.r >> n, c.g >> n, c.b >> n));
    }

    #[test]
    fn wide_shifts_clear(c in arb_color(), n in 8u8..) {
        prop_assert_eq!(c << n, Color::default());
        prop_assert_eq!(c >> n, Color::default());
    }

    #[test]
    fn operators_match_methods(c in arb_color(), x in any::<u8>()) {
        let mut by_method = c;
        by_method.add(x);
        prop_assert_eq!(c + x, by_method);

        let mut by_method = c;
        by_method.multiply(x);
        prop_assert_eq!(c * x, by_method);
    }
}

// ────────────────────────────────────────────────────────────────────
// Hex codec
// ────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn parse_then_format_normal(prefix in arb_prefix(), digits in arb_hex_digits()) {
        let input = format!("{prefix}{digits}");
        let color = Color::from_hex(&input);
        let hex = color.hex(HexStyle::Normal);
        prop_assert_eq!(hex.as_str(), digits.to_ascii_uppercase());
        prop_assert_eq!(input.parse::<Color>(), Ok(color));
    }

    #[test]
    fn format_then_parse(c in arb_color(), selector in 0u8..3) {
        let hex = c.hex(HexStyle::from(selector));
        prop_assert_eq!(Color::parse_hex(hex.as_str()), Ok(c));
        prop_assert_eq!(hex.as_bytes_with_nul().last(), Some(&0));
        prop_assert!(!hex.as_str().bytes().any(|b| b.is_ascii_lowercase() && b != b'x'));
    }

    #[test]
    fn trailing_bytes_are_ignored(digits in arb_hex_digits(), tail in ".*") {
        prop_assert_eq!(
            Color::from_hex(format!("{digits}{tail}")),
            Color::from_hex(&digits)
        );
    }

    #[test]
    fn lenient_parse_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..16)) {
        let lenient = Color::from_hex(&bytes);
        match Color::parse_hex(&bytes) {
            Ok(strict) => prop_assert_eq!(lenient, strict),
            Err(_) => prop_assert_eq!(lenient, Color::default()),
        }
    }

    #[test]
    fn short_input_is_rejected(prefix in arb_prefix(), digits in "[0-9a-f]{0,5}") {
        let input = format!("{prefix}{digits}");
        let expected = if input.is_empty() {
            ParseColorError::Empty
        } else {
            ParseColorError::TooShort { found: digits.len() }
        };
        prop_assert_eq!(Color::parse_hex(&input), Err(expected));
    }
}

// ────────────────────────────────────────────────────────────────────
// Hue
// ────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn hue_period(hue in 0u16..1024, high in 0u16..64) {
        prop_assert_eq!(Color::hue(hue), Color::hue(hue | (high << 10)));
        if hue < 256 {
            prop_assert_eq!(Color::hue(hue), Color::hue(hue + 768));
        }
    }
}
