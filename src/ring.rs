//! Per-ring pixel state
//!
//! Each physical ring owns two fixed-size buffers: the `target` colors
//! written by renderers and commands, and the `current` colors the last
//! frame actually displayed. Ring length is a hardware property, fixed
//! at construction through the const parameter.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::BLACK;

/// State for one ring of `N` addressable LEDs.
#[derive(Debug, Clone)]
pub struct Ring<const N: usize> {
    target: [u32; N],
    current: [u32; N],
    offset: i16,
    brightness: u8,
    write_errors: u32,
}

impl<const N: usize> Default for Ring<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Ring<N> {
    pub const fn new() -> Self {
        Self {
            target: [BLACK; N],
            current: [BLACK; N],
            offset: 0,
            brightness: 255,
            write_errors: 0,
        }
    }

    /// Number of pixels on this ring.
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Set every target pixel to black. Does not touch `current`.
    pub fn flush(&mut self) {
        self.target = [BLACK; N];
    }

    /// Write one target pixel.
    ///
    /// Out-of-range indices are dropped and counted; the frame keeps
    /// rendering.
    pub fn set_pixel(&mut self, index: usize, color: u32) {
        if index >= N {
            self.write_errors = self.write_errors.wrapping_add(1);
            #[cfg(feature = "esp32-log")]
            println!("[ring] pixel {} out of range (len {})", index, N);
            return;
        }
        self.target[index] = color;
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    pub const fn offset(&self) -> i16 {
        self.offset
    }

    /// Store the rotational wiring correction. Any sign; applied at
    /// emission time.
    pub fn set_offset(&mut self, offset: i16) {
        self.offset = offset;
    }

    /// Map a logical pixel index to its physical wiring slot.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    pub const fn physical_index(&self, logical: usize) -> usize {
        (logical as i32 + self.offset as i32).rem_euclid(N as i32) as usize
    }

    /// Count of dropped out-of-range writes since construction.
    pub const fn write_errors(&self) -> u32 {
        self.write_errors
    }

    pub const fn target(&self) -> &[u32; N] {
        &self.target
    }

    pub const fn current(&self) -> &[u32; N] {
        &self.current
    }

    pub(crate) const fn target_at(&self, index: usize) -> u32 {
        self.target[index]
    }

    pub(crate) const fn current_at(&self, index: usize) -> u32 {
        self.current[index]
    }

    pub(crate) fn store_current(&mut self, index: usize, color: u32) {
        self.current[index] = color;
    }
}
