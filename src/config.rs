//! Face configuration
//!
//! Plain data consumed at construction time and mutated by the command
//! surface. The persistence and HTTP layers live outside this crate;
//! they hand a `FaceConfig` in and read it back.

use crate::color::pack;

/// Lowest brightness the configuration loader will accept.
///
/// Enforced here, not by the rings: a command or a frame throttle may
/// still drive the emitted brightness below the floor.
pub const BRIGHTNESS_FLOOR: u8 = 10;

/// Default current ceiling in milliamps, effectively unlimited.
pub const DEFAULT_CURRENT_LIMIT: u16 = 9999;

/// The three named colors of the clock face, packed 24-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacePalette {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Default for FacePalette {
    fn default() -> Self {
        Self {
            hours: pack(255, 255, 255),
            minutes: pack(255, 255, 255),
            seconds: pack(255, 0, 0),
        }
    }
}

/// Everything the engine needs to come up: palette, per-ring
/// brightness and wiring offsets, and the global current limit.
#[derive(Debug, Clone, Copy)]
pub struct FaceConfig {
    pub palette: FacePalette,
    pub brightness_outer: u8,
    pub brightness_inner: u8,
    pub offset_outer: i16,
    pub offset_inner: i16,
    pub current_limit_ma: u16,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            palette: FacePalette::default(),
            brightness_outer: 255,
            brightness_inner: 255,
            offset_outer: 0,
            offset_inner: 0,
            current_limit_ma: DEFAULT_CURRENT_LIMIT,
        }
    }
}

impl FaceConfig {
    /// Copy of this config with the brightness floor applied.
    ///
    /// Loaded settings pass through here before reaching the rings.
    pub fn sanitized(&self) -> Self {
        let mut config = *self;
        config.brightness_outer = config.brightness_outer.max(BRIGHTNESS_FLOOR);
        config.brightness_inner = config.brightness_inner.max(BRIGHTNESS_FLOOR);
        config
    }
}
