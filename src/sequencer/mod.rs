//! Animation sequencer: the looping command/output playback engine.
//!
//! The sequencer is organized into submodules:
//! - `state`: the playback cursor (sequence index, running/paused flags)
//! - `surface`: render surfaces the engine writes into
//! - `engine`: the tick-driven playback state machine
//! - `timing`: the fixed choreography delays
//! - `clock`: monotonic time source for the event loop
//!
//! The engine never sleeps on its own. The hosting event loop calls
//! [`AnimationSequencer::tick`] with the current time on every frame and the
//! engine executes whatever steps have come due.

pub mod clock;
mod engine;
pub mod state;
pub mod surface;
pub mod timing;

pub use clock::{Clock, WallClock};
pub use engine::AnimationSequencer;
pub use state::PlaybackCursor;
pub use surface::{RenderTargets, SharedSurface, Surface};
