//! Packed 24-bit color math
//!
//! Colors travel through the engine as `0xRRGGBB` packed into a `u32`,
//! matching what the status surface reports. Conversion to
//! [`smart_leds::RGB8`] happens only at the driver boundary.

use smart_leds::RGB8;

/// All channels off.
pub const BLACK: u32 = 0;

/// Pack three 8-bit channels into a 24-bit color value.
pub const fn pack(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Split a 24-bit color value back into its channels.
pub const fn unpack(color: u32) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}

/// Convert a packed color to the driver-facing `RGB8` type.
pub const fn to_rgb(color: u32) -> RGB8 {
    let (r, g, b) = unpack(color);
    RGB8 { r, g, b }
}

/// Convert a driver-facing `RGB8` back to a packed color.
pub const fn from_rgb(color: RGB8) -> u32 {
    pack(color.r, color.g, color.b)
}

/// Linearly interpolate between two packed colors.
///
/// Each channel is computed as `c1 + (c2 - c1) * factor` in float and
/// truncated on the cast back to 8 bits. The truncation is part of the
/// external contract; smooth transitions rely on it bottoming out
/// exactly at the target.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn interpolate(c1: u32, c2: u32, factor: f32) -> u32 {
    let (r1, g1, b1) = unpack(c1);
    let (r2, g2, b2) = unpack(c2);

    let r = (f32::from(r1) + (f32::from(r2) - f32::from(r1)) * factor) as u8;
    let g = (f32::from(g1) + (f32::from(g2) - f32::from(g1)) * factor) as u8;
    let b = (f32::from(b1) + (f32::from(b2) - f32::from(b1)) * factor) as u8;

    pack(r, g, b)
}

/// Map a position on a 0-255 wheel to a color.
///
/// Three-segment transition red - blue - green - back to red. Used by
/// the startup self-test, not by clock rendering.
pub const fn wheel(pos: u8) -> u32 {
    let pos = 255 - pos;
    if pos < 85 {
        return pack(255 - pos * 3, 0, pos * 3);
    }
    if pos < 170 {
        let pos = pos - 85;
        return pack(0, pos * 3, 255 - pos * 3);
    }
    let pos = pos - 170;
    pack(pos * 3, 255 - pos * 3, 0)
}
