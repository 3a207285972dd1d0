#![no_main]

use libfuzzer_sys::fuzz_target;
use ws2812_color::{Color, HexStyle};

fuzz_target!(|data: &[u8]| {
    let lenient = Color::from_hex(data);

    match Color::parse_hex(data) {
        Ok(color) => {
            assert_eq!(lenient, color);
            for style in [HexStyle::Normal, HexStyle::Html, HexStyle::Literal] {
                let hex = color.hex(style);
                assert_eq!(Color::parse_hex(hex.as_str()), Ok(color), "{hex}");
            }
        }
        Err(_) => assert_eq!(lenient, Color::default()),
    }

    if let Ok(text) = std::str::from_utf8(data) {
        // Names and hex share one entry point; it must agree with parse_hex on hex input.
        if let (Ok(parsed), Ok(hex)) = (text.parse::<Color>(), Color::parse_hex(text)) {
            assert_eq!(parsed, hex);
        }
    }
});
