use crate::Color;

impl Color {
    /// A red, green, blue, back to red sweep over `0..768`.
    ///
    /// The low byte is the step within a segment and bits 8..=9 pick the
    /// segment. Segment 3 repeats segment 0, so the sweep has period 768 over
    /// its useful range and 1024 overall; higher bits are ignored.
    pub const fn hue(hue: u16) -> Self {
        let step = (hue & 0xff) as u8;
        match (hue >> 8) & 0x03 {
            1 => Self::new(0, !step, step),
            2 => Self::new(step, 0, !step),
            _ => Self::new(!step, step, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_starts() {
        assert_eq!(Color::hue(0).rgb(), (255, 0, 0));
        assert_eq!(Color::hue(256).rgb(), (0, 255, 0));
        assert_eq!(Color::hue(512).rgb(), (0, 0, 255));
        assert_eq!(Color::hue(768).rgb(), (255, 0, 0));
    }

    #[test]
    fn segment_ends() {
        assert_eq!(Color::hue(255).rgb(), (0, 255, 0));
        assert_eq!(Color::hue(511).rgb(), (0, 0, 255));
        assert_eq!(Color::hue(767).rgb(), (255, 0, 0));
    }

    #[test]
    fn midpoints() {
        assert_eq!(Color::hue(128).rgb(), (127, 128, 0));
        assert_eq!(Color::hue(384).rgb(), (0, 127, 128));
        assert_eq!(Color::hue(640).rgb(), (128, 0, 127));
    }

    #[test]
    fn wraps_every_1024() {
        for hue in [0u16, 100, 300, 600, 900] {
            assert_eq!(Color::hue(hue), Color::hue(hue + 1024));
            assert_eq!(Color::hue(hue), Color::hue(hue | 0xfc00));
        }
    }

    #[test]
    fn channels_always_sum_to_255() {
        for hue in 0..1024u16 {
            let (r, g, b) = Color::hue(hue).rgb();
            assert_eq!(u16::from(r) + u16::from(g) + u16::from(b), 255, "hue {hue}");
        }
    }
}
