//! External command surface
//!
//! Commands arrive from outside the rendering core (HTTP handler, UDP
//! remote, serial console) through a bounded, interrupt-safe channel
//! and are drained non-blockingly once per tick. Execution is single
//! threaded inside a tick, so last writer wins without locking.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::color::pack;
use crate::config::FacePalette;
use crate::frame::FrameComposer;

/// Which named face color a `SetColor` command addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Hours,
    Minutes,
    Seconds,
}

/// Which ring a per-ring command addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingId {
    Outer,
    Inner,
}

/// A single command from the outside world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Replace one of the three named face colors.
    SetColor { target: ColorTarget, r: u8, g: u8, b: u8 },
    /// Set one ring's configured brightness.
    SetBrightness { ring: RingId, level: u8 },
    /// Set both wiring offsets at once.
    SetOffsets { outer: i16, inner: i16 },
    /// Change the global current ceiling.
    SetCurrentLimit(u16),
    /// Flush both rings' targets to black.
    Blank,
}

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded, interrupt-safe command channel.
///
/// Backed by a fixed-size `heapless::Deque` behind a critical
/// section, so producers may live in interrupt or network callback
/// context while the render loop drains.
pub struct CommandChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Command, SIZE>>>,
}

impl<const SIZE: usize> CommandChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { channel: self }
    }

    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { channel: self }
    }

    /// Try to enqueue a command.
    ///
    /// Returns `Err(TrySendError(command))` if the channel is full.
    pub fn try_send(&self, command: Command) -> Result<(), TrySendError<Command>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(TrySendError)
        })
    }

    /// Try to dequeue a command.
    ///
    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<Command, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }
}

impl<const SIZE: usize> Default for CommandChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sender handle for a [`CommandChannel`]. Cheap to copy.
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    pub fn try_send(&self, command: Command) -> Result<(), TrySendError<Command>> {
        self.channel.try_send(command)
    }
}

/// Receiver handle for a [`CommandChannel`]. Cheap to copy.
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<Command, TryReceiveError> {
        self.channel.try_receive()
    }
}

/// Drains pending commands and applies them to the face state.
pub struct CommandProcessor<'a, const SIZE: usize> {
    commands: CommandReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> CommandProcessor<'a, SIZE> {
    pub const fn new(commands: CommandReceiver<'a, SIZE>) -> Self {
        Self { commands }
    }

    /// Apply every queued command (non-blocking).
    ///
    /// Palette changes take effect the next time the face renderers
    /// run; ring changes are read by the next `draw` call.
    pub fn process_pending<const OUTER: usize, const INNER: usize>(
        &mut self,
        palette: &mut FacePalette,
        composer: &mut FrameComposer<OUTER, INNER>,
    ) {
        while let Ok(command) = self.commands.try_receive() {
            Self::apply(command, palette, composer);
        }
    }

    fn apply<const OUTER: usize, const INNER: usize>(
        command: Command,
        palette: &mut FacePalette,
        composer: &mut FrameComposer<OUTER, INNER>,
    ) {
        match command {
            Command::SetColor { target, r, g, b } => {
                let color = pack(r, g, b);
                match target {
                    ColorTarget::Hours => palette.hours = color,
                    ColorTarget::Minutes => palette.minutes = color,
                    ColorTarget::Seconds => palette.seconds = color,
                }
            }
            Command::SetBrightness { ring, level } => match ring {
                RingId::Outer => composer.outer_mut().set_brightness(level),
                RingId::Inner => composer.inner_mut().set_brightness(level),
            },
            Command::SetOffsets { outer, inner } => {
                composer.outer_mut().set_offset(outer);
                composer.inner_mut().set_offset(inner);
            }
            Command::SetCurrentLimit(limit_ma) => {
                composer.set_current_limit(limit_ma);
            }
            Command::Blank => {
                composer.outer_mut().flush();
                composer.inner_mut().flush();
            }
        }
    }
}
