//! Clock face renderers
//!
//! Pure target-buffer writers: the hour pixel on the inner ring, and
//! the sweeping minute arc plus seconds comet on the outer ring. The
//! blend toward these targets happens later in the frame composer;
//! nothing here reads or writes `current`.

use crate::color::{interpolate, BLACK};
use crate::ring::Ring;

/// Light the hour pixel on the inner ring.
///
/// Converts 24-hour time to a 12-hour index; midnight (hour 0) lights
/// the 12 o'clock pixel. The ring is flushed first, so exactly one
/// pixel ends up lit.
pub fn render_hour<const N: usize>(ring: &mut Ring<N>, hour: u8, color: u32) {
    ring.flush();

    let hour12 = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    ring.set_pixel(usize::from(hour12) - 1, color);
}

/// Draw the sweeping minute arc and seconds comet on the outer ring.
///
/// `seconds_fraction` is the within-minute progress in `[0.0, 1.0)`.
/// The minute hand is a solid arc up to a sub-pixel head; the seconds
/// comet is a two-pixel head/tail pair that overrides the arc at its
/// indices.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn render_minutes<const N: usize>(
    ring: &mut Ring<N>,
    minute: u8,
    seconds_fraction: f32,
    color_minutes: u32,
    color_seconds: u32,
) {
    ring.flush();

    let len = N as f32;

    // Minute hand: continuous position in pixels, split into the last
    // fully lit index and the fractional head.
    let minutes_continuous = f32::from(minute) + seconds_fraction;
    let position_minutes = minutes_continuous / 60.0 * len;
    let active_pixel_minutes = libm::floorf(position_minutes) as usize;
    let pixel_progress_minutes = position_minutes - libm::floorf(position_minutes);

    for i in 0..active_pixel_minutes {
        ring.set_pixel(i, color_minutes);
    }
    ring.set_pixel(
        active_pixel_minutes,
        interpolate(BLACK, color_minutes, pixel_progress_minutes),
    );

    // Seconds comet: head fades in, the pixel behind it fades out.
    let position_seconds = seconds_fraction * len;
    let active_pixel_seconds = libm::floorf(position_seconds) as usize;
    let pixel_progress_seconds = position_seconds - libm::floorf(position_seconds);

    let tail_pixel = if active_pixel_seconds == 0 {
        N - 1
    } else {
        active_pixel_seconds - 1
    };
    ring.set_pixel(
        tail_pixel,
        interpolate(BLACK, color_seconds, 1.0 - pixel_progress_seconds),
    );
    ring.set_pixel(
        active_pixel_seconds,
        interpolate(BLACK, color_seconds, pixel_progress_seconds),
    );
}
