//! Colour and gradient primitives

/// An 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Returns the colour as a `[r, g, b]` array
    pub fn channels(self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

/// A vertical two-stop linear gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    /// Colour of the first row
    pub start: Rgb,
    /// Colour approached by the last row (reached at fraction 1.0)
    pub end: Rgb,
}

impl Gradient {
    /// Creates a new gradient
    pub const fn new(start: Rgb, end: Rgb) -> Self {
        Self { start, end }
    }

    /// Colour of row `row` out of `rows`, interpolated at fraction `row / rows`.
    ///
    /// Each channel is the exact interpolated value truncated toward zero.
    pub fn row_color(&self, row: u32, rows: u32) -> Rgb {
        if rows == 0 {
            return self.start;
        }

        let lerp = |a: u8, b: u8| -> u8 {
            let (a, b) = (a as i64, b as i64);
            let (i, n) = (row as i64, rows as i64);
            // Numerator stays non-negative for row <= rows, so `/` truncates.
            let value = (a * n + (b - a) * i) / n;
            value.clamp(0, 255) as u8
        };

        Rgb(
            lerp(self.start.0, self.end.0),
            lerp(self.start.1, self.end.1),
            lerp(self.start.2, self.end.2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_color_endpoints() {
        let gradient = Gradient::new(Rgb(26, 26, 26), Rgb(45, 45, 45));
        assert_eq!(gradient.row_color(0, 1080), Rgb(26, 26, 26));
        assert_eq!(gradient.row_color(1080, 1080), Rgb(45, 45, 45));
        // 26 + 19 * 540 / 1080 = 35.5
        assert_eq!(gradient.row_color(540, 1080), Rgb(35, 35, 35));
    }

    #[test]
    fn test_row_color_descending_truncates() {
        // 232 - 48 * 1 / 800 = 231.94
        let gradient = Gradient::new(Rgb(232, 232, 232), Rgb(184, 184, 184));
        assert_eq!(gradient.row_color(1, 800), Rgb(231, 231, 231));
        assert_eq!(gradient.row_color(799, 800), Rgb(184, 184, 184));
    }

    #[test]
    fn test_row_color_per_channel() {
        let gradient = Gradient::new(Rgb(255, 229, 204), Rgb(255, 171, 145));
        // g: 229 - 58 * 400 / 800 = 200, b: 204 - 59 * 400 / 800 = 174.5
        assert_eq!(gradient.row_color(400, 800), Rgb(255, 200, 174));
    }
}
