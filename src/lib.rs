#![no_std]

pub mod clock;
pub mod color;
pub mod command;
pub mod config;
pub mod diagnostics;
pub mod face;
pub mod frame;
pub mod power;
pub mod ring;
pub mod scheduler;

pub use clock::{ClockTime, MinuteTracker};
pub use color::{interpolate, pack, to_rgb, unpack, wheel, BLACK};
pub use command::{
    ColorTarget, Command, CommandChannel, CommandProcessor, CommandReceiver, CommandSender,
    RingId,
};
pub use config::{FaceConfig, FacePalette, BRIGHTNESS_FLOOR, DEFAULT_CURRENT_LIMIT};
pub use face::{render_hour, render_minutes};
pub use frame::FrameComposer;
pub use power::{estimate_led_current, PowerBudget};
pub use ring::Ring;
pub use scheduler::Periodic;

pub use embassy_time::{Duration, Instant};
pub use smart_leds::RGB8;

/// Abstract LED ring driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame composer is generic over this trait; tests use a
/// software double.
pub trait RingDriver {
    /// Write one pixel at its physical (wiring) index
    fn set_pixel(&mut self, physical_index: usize, color: RGB8);

    /// Set the strip-wide brightness applied at the next show
    fn set_brightness(&mut self, level: u8);

    /// Latch the written pixels out to the LEDs
    fn show(&mut self);
}
