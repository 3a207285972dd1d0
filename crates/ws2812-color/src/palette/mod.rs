//! Named colors.
//!
//! Three overlapping namespaces are provided:
//!
//! * [`vga`]: the VGA / HTML 4 keywords, re-exported here (`palette::RED`).
//! * [`x11`]: the X11 list, re-exported here (`palette::ALICEBLUE`).
//! * [`xterm`]: the xterm 256-color palette, which keeps its own module because
//!   its names overlap the other two with different values.
//!
//! [`Color::from_named`] searches the VGA and X11 names; xterm names are looked
//! up through [`xterm::from_name`].

use crate::Color;
#[cfg(feature = "std")]
use std::collections::HashMap;
#[cfg(feature = "std")]
use std::sync::LazyLock;

/// Declares one `const` per color plus a table of `(name, color)` pairs.
macro_rules! named_colors {
    (
        $(#[$table_meta:meta])*
        $table:ident;
        $($ident:ident => $name:literal, $rgb:literal;)*
    ) => {
        $(
            #[doc = concat!("`", $name, "`")]
            pub const $ident: $crate::Color = $crate::Color::from_rgb24($rgb);
        )*

        $(#[$table_meta])*
        pub const $table: &[(&str, $crate::Color)] = &[$(($name, $ident),)*];
    };
}

pub mod vga;
pub mod x11;
pub mod xterm;

pub use vga::*;
pub use x11::*;

/// Every VGA and X11 `(name, color)` pair, VGA first.
pub fn named() -> impl Iterator<Item = (&'static str, Color)> {
    VGA.iter().chain(X11.iter()).copied()
}

#[cfg(feature = "std")]
static NAMED_COLORS: LazyLock<HashMap<&'static str, Color>> = LazyLock::new(build_colors);

#[cfg(feature = "std")]
fn build_colors() -> HashMap<&'static str, Color> {
    named().collect()
}

/// Look up a VGA or X11 color name, ignoring ASCII case.
pub fn lookup(name: &str) -> Option<Color> {
    #[cfg(feature = "std")]
    {
        NAMED_COLORS.get(name.to_ascii_lowercase().as_str()).copied()
    }
    #[cfg(not(feature = "std"))]
    {
        named()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, color)| color)
    }
}

pub const fn indexed(index: u8) -> Color {
    match index {
        0 => WHITE,
        1 => RED,
        2 => YELLOW,
        3 => LIME,
        4 => AQUA,
        5 => BLUE,
        6 => FUCHSIA,
        7 => ORANGE,
        8 => GRAY,
        9 => SILVER,
        10 => MAROON,
        11 => OLIVE,
        12 => GREEN,
        13 => TEAL,
        14 => NAVY,
        15 => PURPLE,
        _ => BLACK,
    }
}

impl Color {
    /// Construct a color from a VGA/HTML or X11 color name.
    /// Returns None if the supplied name is not recognized.
    /// xterm names live in [`xterm::from_name`].
    pub fn from_named(name: &str) -> Option<Self> {
        lookup(name)
    }

    /// Entry `index` of the sixteen-color [indexed] palette; black past the end.
    pub const fn palette(index: u8) -> Self {
        indexed(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_rgb() {
        let dark_green = Color::from_named("DarkGreen").unwrap();
        assert_eq!(dark_green.to_rgb24(), 0x006400);
        assert_eq!(Color::from_named("aliceblue"), Some(ALICEBLUE));
        assert_eq!(Color::from_named("ORANGE"), Some(ORANGE));
        assert_eq!(Color::from_named("not a color"), None);
        assert_eq!(Color::from_named(""), None);
    }

    // With `std` this goes through the hash index, without it through the linear scan.
    #[test]
    fn lookup_ignores_ascii_case() {
        assert_eq!(lookup("DarkGreen"), Some(DARKGREEN));
        assert_eq!(lookup("darkgreen"), Some(DARKGREEN));
        assert_eq!(lookup("GRAY50"), Some(GRAY50));
        assert_eq!(lookup("dark green"), None);
    }

    #[cfg(not(feature = "std"))]
    #[test]
    fn scan_returns_the_first_table_entry() {
        let first_gray = named().find(|(name, _)| *name == "gray").map(|(_, color)| color);
        assert_eq!(lookup("Gray"), first_gray);
        assert_eq!(lookup("Gray"), Some(GRAY));
    }

    #[test]
    fn both_gray_spellings() {
        assert_eq!(Color::from_named("gray50"), Color::from_named("grey50"));
        assert_eq!(SLATEGRAY, SLATEGREY);
        assert_eq!(GRAY, GREY);
        assert_eq!(GRAY100, WHITE);
    }

    #[test]
    fn vga_values() {
        assert_eq!(BLACK, Color::default());
        assert_eq!(WHITE.to_rgb24(), 0xffffff);
        assert_eq!(ORANGE.to_rgb24(), 0xff8000);
        assert_eq!(SILVER.to_rgb24(), 0xc0c0c0);
        assert_eq!(PURPLE.to_rgb24(), 0x800080);
        assert_eq!(VGA.len(), 17);
    }

    #[test]
    fn names_are_unique_and_lowercase() {
        let mut names: Vec<&str> = named().map(|(name, _)| name).collect();
        assert!(names.iter().all(|name| name.bytes().all(|b| !b.is_ascii_uppercase())));
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn every_name_resolves_to_its_table_entry() {
        for (name, color) in named() {
            assert_eq!(Color::from_named(name), Some(color), "{name}");
            assert_eq!(lookup(&name.to_ascii_uppercase()), Some(color), "{name}");
        }
    }

    // ── indexed palette ───────────────────────────────────────

    #[test]
    fn indexed_palette_order() {
        let expected = [
            WHITE, RED, YELLOW, LIME, AQUA, BLUE, FUCHSIA, ORANGE, GRAY, SILVER, MAROON, OLIVE,
            GREEN, TEAL, NAVY, PURPLE,
        ];
        for (index, color) in (0u8..).zip(expected) {
            assert_eq!(Color::palette(index), color);
        }
    }

    #[test]
    fn indexed_palette_out_of_range_is_black() {
        assert_eq!(Color::palette(0).to_rgb24(), 0xffffff);
        assert_eq!(Color::palette(5).to_rgb24(), 0x0000ff);
        assert_eq!(Color::palette(16), BLACK);
        assert_eq!(Color::palette(99), BLACK);
        assert_eq!(Color::palette(u8::MAX), BLACK);
    }
}
