//! Startup self-test pattern

use crate::color::wheel;
use crate::ring::Ring;

/// Paint one full hue-wheel cycle onto the ring's targets.
///
/// `phase` rotates the pattern; stepping it each tick produces the
/// spinning rainbow used to verify wiring and pixel order at boot.
#[allow(clippy::cast_possible_truncation)]
pub fn fill_wheel<const N: usize>(ring: &mut Ring<N>, phase: u8) {
    for i in 0..N {
        let pos = ((i * 256 / N) as u8).wrapping_add(phase);
        ring.set_pixel(i, wheel(pos));
    }
}
