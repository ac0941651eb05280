//! Current estimation and power budgeting
//!
//! The supply current is never measured; it is estimated from a linear
//! per-channel model and kept under a configured milliamp ceiling by
//! scaling the emitted brightness. The estimate is recomputed from
//! scratch every frame, so there is no hysteresis and no memory of
//! prior throttling.

use crate::color::unpack;
use crate::config::DEFAULT_CURRENT_LIMIT;

/// Full-white, full-brightness draw of a single LED in milliamps.
const FULL_LED_CURRENT_MA: u32 = 20;

/// Estimate the draw of one LED at the given color and brightness.
///
/// Linear model, integer math only: `20 * (r+g+b) / 255 * brightness / 255`.
/// The truncating divisions are part of the external status contract.
#[allow(clippy::cast_possible_truncation)]
pub fn estimate_led_current(color: u32, brightness: u8) -> u16 {
    let (r, g, b) = unpack(color);

    let mut estimated = FULL_LED_CURRENT_MA * (u32::from(r) + u32::from(g) + u32::from(b));
    estimated /= 255;
    estimated = (estimated * u32::from(brightness)) / 255;

    estimated as u16
}

/// Global milliamp ceiling shared by both rings.
#[derive(Debug, Clone, Copy)]
pub struct PowerBudget {
    limit_ma: u16,
}

impl Default for PowerBudget {
    fn default() -> Self {
        Self {
            limit_ma: DEFAULT_CURRENT_LIMIT,
        }
    }
}

impl PowerBudget {
    pub const fn new(limit_ma: u16) -> Self {
        Self { limit_ma }
    }

    pub const fn limit_ma(&self) -> u16 {
        self.limit_ma
    }

    pub fn set_limit_ma(&mut self, limit_ma: u16) {
        self.limit_ma = limit_ma;
    }

    /// Brightness to emit this frame given the summed estimate.
    ///
    /// Over budget, the configured brightness is scaled by
    /// `limit / total`; the same global ratio applies to every ring.
    /// Never raises brightness above the configured value, and the
    /// stored configuration is untouched.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn throttled_brightness(&self, total_ma: u16, configured: u8) -> u8 {
        if total_ma <= self.limit_ma {
            return configured;
        }
        (f32::from(configured) * f32::from(self.limit_ma) / f32::from(total_ma)) as u8
    }

    /// True when the estimate would trigger throttling.
    pub const fn is_over(&self, total_ma: u16) -> bool {
        total_ma > self.limit_ma
    }
}
