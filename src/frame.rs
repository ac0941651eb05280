//! Frame composition
//!
//! One rendering tick: blend each ring's `current` buffer toward its
//! `target`, estimate the total current draw of the blended frame,
//! throttle the emitted brightness if the estimate exceeds the budget,
//! and push the pixels out through the ring drivers. Bounded work, no
//! blocking waits beyond the drivers' own `show`.

use crate::color::{interpolate, to_rgb};
use crate::config::FaceConfig;
use crate::power::{estimate_led_current, PowerBudget};
use crate::ring::Ring;
use crate::RingDriver;

/// Owns both rings and the power budget; drives one frame per call.
#[derive(Debug, Clone)]
pub struct FrameComposer<const OUTER: usize, const INNER: usize> {
    outer: Ring<OUTER>,
    inner: Ring<INNER>,
    budget: PowerBudget,
}

impl<const OUTER: usize, const INNER: usize> Default for FrameComposer<OUTER, INNER> {
    fn default() -> Self {
        Self::new(&FaceConfig::default())
    }
}

impl<const OUTER: usize, const INNER: usize> FrameComposer<OUTER, INNER> {
    pub fn new(config: &FaceConfig) -> Self {
        let mut outer = Ring::new();
        let mut inner = Ring::new();
        outer.set_brightness(config.brightness_outer);
        inner.set_brightness(config.brightness_inner);
        outer.set_offset(config.offset_outer);
        inner.set_offset(config.offset_inner);

        Self {
            outer,
            inner,
            budget: PowerBudget::new(config.current_limit_ma),
        }
    }

    pub const fn outer(&self) -> &Ring<OUTER> {
        &self.outer
    }

    pub fn outer_mut(&mut self) -> &mut Ring<OUTER> {
        &mut self.outer
    }

    pub const fn inner(&self) -> &Ring<INNER> {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut Ring<INNER> {
        &mut self.inner
    }

    pub const fn budget(&self) -> &PowerBudget {
        &self.budget
    }

    pub fn set_current_limit(&mut self, limit_ma: u16) {
        self.budget.set_limit_ma(limit_ma);
    }

    /// Snap `current` to `target` and emit in one call.
    pub fn draw_instant<DO, DI>(&mut self, outer_driver: &mut DO, inner_driver: &mut DI)
    where
        DO: RingDriver,
        DI: RingDriver,
    {
        self.draw(1.0, outer_driver, inner_driver);
    }

    /// Blend one step toward `target` and emit.
    ///
    /// Repeated calls with a fixed target approach it geometrically;
    /// for `factor` in `(0, 1]` the blend never overshoots.
    pub fn draw_smooth<DO, DI>(
        &mut self,
        factor: f32,
        outer_driver: &mut DO,
        inner_driver: &mut DI,
    ) where
        DO: RingDriver,
        DI: RingDriver,
    {
        self.draw(factor, outer_driver, inner_driver);
    }

    fn draw<DO, DI>(&mut self, factor: f32, outer_driver: &mut DO, inner_driver: &mut DI)
    where
        DO: RingDriver,
        DI: RingDriver,
    {
        let current_outer = blend_ring(&mut self.outer, factor, outer_driver);
        let current_inner = blend_ring(&mut self.inner, factor, inner_driver);
        let total = current_outer.saturating_add(current_inner);

        outer_driver.set_brightness(
            self.budget
                .throttled_brightness(total, self.outer.brightness()),
        );
        inner_driver.set_brightness(
            self.budget
                .throttled_brightness(total, self.inner.brightness()),
        );

        outer_driver.show();
        inner_driver.show();
    }
}

/// Blend one ring toward its target, write the offset-corrected pixels
/// to the driver, and return the ring's estimated draw at its
/// configured brightness.
fn blend_ring<const N: usize, D: RingDriver>(
    ring: &mut Ring<N>,
    factor: f32,
    driver: &mut D,
) -> u16 {
    let mut total_ma: u16 = 0;
    for i in 0..N {
        let blended = interpolate(ring.current_at(i), ring.target_at(i), factor);
        driver.set_pixel(ring.physical_index(i), to_rgb(blended));
        ring.store_current(i, blended);

        total_ma = total_ma.saturating_add(estimate_led_current(blended, ring.brightness()));
    }
    total_ma
}
