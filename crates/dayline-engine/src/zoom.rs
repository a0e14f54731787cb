//! Timeline zoom level.
//!
//! Only the level itself lives here; deriving a pixels-per-hour scale from
//! it (base hour width, device width) is the presentation layer's business.

/// Minimum zoom level (50%).
pub const MIN_ZOOM: f64 = 0.5;

/// Maximum zoom level (300%).
pub const MAX_ZOOM: f64 = 3.0;

/// Step applied by the zoom in/out buttons.
pub const ZOOM_STEP: f64 = 0.25;

/// Clamped zoom level, default 100%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom {
    level: f64,
}

impl Default for Zoom {
    fn default() -> Self {
        Self { level: 1.0 }
    }
}

impl Zoom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current level in `[MIN_ZOOM, MAX_ZOOM]`.
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Current level as a whole percentage (1.25 → 125).
    pub fn percent(&self) -> u32 {
        (self.level * 100.0).round() as u32
    }

    /// Step in by [`ZOOM_STEP`]. Returns the new level only if it changed.
    pub fn zoom_in(&mut self) -> Option<f64> {
        self.set((self.level + ZOOM_STEP).min(MAX_ZOOM))
    }

    /// Step out by [`ZOOM_STEP`]. Returns the new level only if it changed.
    pub fn zoom_out(&mut self) -> Option<f64> {
        self.set((self.level - ZOOM_STEP).max(MIN_ZOOM))
    }

    /// Back to 100%. Returns the new level only if it changed.
    pub fn reset(&mut self) -> Option<f64> {
        self.set(1.0)
    }

    fn set(&mut self, level: f64) -> Option<f64> {
        let level = level.clamp(MIN_ZOOM, MAX_ZOOM);
        if level == self.level {
            None
        } else {
            self.level = level;
            Some(level)
        }
    }
}
