//! Text measurement seam.
//!
//! The host framework owns font rendering; all this crate needs from it is
//! the raw bounding box of un-scaled text geometry. [`TextMeasurer`] is that
//! seam: [`FontMeasurer`] answers from real font metrics via `fontdue`, and
//! [`MonospaceMeasurer`] gives deterministic extents for tests and headless
//! layout.

use anyhow::Context;

/// Raw extents of un-scaled text geometry, in text units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtents {
    /// Width of the widest line.
    pub width: f32,
    /// Height spanning all lines.
    pub height: f32,
}

/// Measures the bounding box of rendered text geometry.
pub trait TextMeasurer {
    /// Measure multi-line `text`. Width is the widest line; height spans all
    /// lines. Empty text measures as zero width.
    fn measure(&self, text: &str) -> TextExtents;
}

/// Fixed-advance measurer: every character is `advance` wide.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMeasurer {
    /// Horizontal advance per character.
    pub advance: f32,
    /// Height of one line.
    pub line_height: f32,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.0,
        }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str) -> TextExtents {
        let mut widest = 0usize;
        let mut lines = 0usize;
        for line in text.split('\n') {
            widest = widest.max(line.chars().count());
            lines += 1;
        }
        if widest == 0 {
            return TextExtents {
                width: 0.0,
                height: 0.0,
            };
        }
        TextExtents {
            width: widest as f32 * self.advance,
            height: lines as f32 * self.line_height,
        }
    }
}

/// Measurer backed by real font metrics.
pub struct FontMeasurer {
    font: fontdue::Font,
    px: f32,
}

impl FontMeasurer {
    /// Load a font from a file path.
    pub fn from_file(path: &str, px: f32) -> anyhow::Result<Self> {
        let data = std::fs::read(path).with_context(|| format!("failed to read font {path}"))?;
        Self::from_bytes(&data, px)
    }

    /// Parse a font from raw bytes.
    pub fn from_bytes(data: &[u8], px: f32) -> anyhow::Result<Self> {
        let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default())
            .map_err(|err| anyhow::anyhow!("failed to parse font: {err}"))?;
        tracing::debug!(px, "loaded measurement font");
        Ok(Self { font, px })
    }
}

impl TextMeasurer for FontMeasurer {
    fn measure(&self, text: &str) -> TextExtents {
        let line_height = self
            .font
            .horizontal_line_metrics(self.px)
            .map(|m| m.new_line_size)
            .unwrap_or(self.px);

        let mut width = 0.0f32;
        let mut lines = 0usize;
        for line in text.split('\n') {
            let line_width: f32 = line
                .chars()
                .map(|ch| self.font.metrics(ch, self.px).advance_width)
                .sum();
            width = width.max(line_width);
            lines += 1;
        }
        if width <= 0.0 {
            return TextExtents {
                width: 0.0,
                height: 0.0,
            };
        }
        TextExtents {
            width,
            height: lines as f32 * line_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_single_line() {
        let m = MonospaceMeasurer {
            advance: 0.5,
            line_height: 1.0,
        };
        let e = m.measure("abcd");
        assert_eq!(e.width, 2.0);
        assert_eq!(e.height, 1.0);
    }

    #[test]
    fn test_monospace_widest_line_wins() {
        let m = MonospaceMeasurer {
            advance: 1.0,
            line_height: 1.0,
        };
        let e = m.measure("ab\nabcde\nc");
        assert_eq!(e.width, 5.0);
        assert_eq!(e.height, 3.0);
    }

    #[test]
    fn test_monospace_counts_chars_not_bytes() {
        let m = MonospaceMeasurer {
            advance: 1.0,
            line_height: 1.0,
        };
        // 3 characters, 9 bytes
        assert_eq!(m.measure("完了済").width, 3.0);
    }

    #[test]
    fn test_empty_text_has_zero_extents() {
        let m = MonospaceMeasurer::default();
        let e = m.measure("");
        assert_eq!(e.width, 0.0);
        assert_eq!(e.height, 0.0);
    }
}
