//! A display-free frame loop.
//!
//! The host supplies a [`FrameScheduler`] that blocks until the next
//! display refresh tick; [`run`] then advances the field one
//! [`phases::step`] per tick until the scheduler stops it. The eframe
//! viewer does not call this loop — egui's repaint cycle plays the
//! scheduler role there — but it keeps the whole frame path exercisable
//! without a window.

use crate::{config::Config, field::Field, phases, pointer::PointerState, surface::Surface};

/// Source of display refresh ticks.
pub trait FrameScheduler {
    /// Blocks until the next frame should run. Returning `false` ends the
    /// loop, i.e. the hosting surface is being torn down.
    fn next_frame(&mut self) -> bool;
}

/// Drives [`phases::step`] once per scheduler tick until stopped.
///
/// The pointer snapshot is taken once at the top of each frame, so every
/// point within a frame sees the same pointer position. Frames never
/// overlap; each tick runs one synchronous pass.
pub fn run(
    field: &mut Field,
    pointer: &PointerState,
    cfg: &Config,
    surface: &mut impl Surface,
    scheduler: &mut impl FrameScheduler,
) {
    while scheduler.next_frame() {
        phases::step(field, pointer.get(), cfg, surface);
    }
}
