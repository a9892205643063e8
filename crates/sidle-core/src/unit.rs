//! Unit types: Dp and conversions

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    pub fn from_px(px: f32, density: f32) -> Self {
        Self(px / density)
    }

    /// Convert to whole pixels, rounding up.
    ///
    /// Margins and other layout distances never round down: a 10.5px margin
    /// rendered as 10px would leave a hairline gap on odd-density screens.
    pub fn to_px_ceil(&self, density: f32) -> i32 {
        self.to_px(density).ceil() as i32
    }
}
