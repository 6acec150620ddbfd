//! The tick-driven playback state machine.
//!
//! One pass over a sequence goes through the phases:
//!
//! ```text
//! Gate -> Typing -> Settling -> Revealing -> Resting -> Gate (next index)
//! ```
//!
//! Every phase boundary is a deadline on the injected timeline. `tick(now)`
//! executes all steps that have come due, so a virtual clock can
//! fast-forward playback deterministically in tests. Pause holds the
//! pending step at its checkpoint; resume re-arms the step's full delay
//! without skipping or repeating a character or line.

use std::time::Duration;

use tracing::{debug, trace};

use crate::script::DemoScript;
use crate::sequencer::state::PlaybackCursor;
use crate::sequencer::surface::RenderTargets;
use crate::sequencer::timing::{
    COMMAND_SETTLE_DELAY, SEQUENCE_IDLE_DELAY, TYPE_CHAR_DELAY,
};

/// Where the engine is inside the current sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Between sequences: waiting for targets, start, and unpause
    Gate,
    /// Typing the command; `char_idx` is the next character to write
    Typing { char_idx: usize },
    /// Fixed pause after the command is fully typed
    Settling,
    /// Revealing output; `line_idx` is the next line to append
    Revealing { line_idx: usize },
    /// Idle period before wrapping to the next sequence
    Resting,
}

/// The looping playback engine.
///
/// Owns the script and the [`PlaybackCursor`]; borrows the render targets
/// from the window layer through a rebindable optional slot.
#[derive(Debug)]
pub struct AnimationSequencer {
    script: DemoScript,
    cursor: PlaybackCursor,
    phase: Phase,
    /// Deadline of the pending step on the injected timeline
    next_due: Duration,
    /// Set by `resume()` when a step was held at its checkpoint; the next
    /// tick re-arms the step's full delay from that tick's `now`
    rearm: bool,
    targets: Option<RenderTargets>,
    started: bool,
}

impl AnimationSequencer {
    /// Create an engine over a validated script. Targets start unbound;
    /// nothing plays until [`start`](Self::start) is called.
    pub fn new(script: DemoScript) -> Self {
        Self {
            script,
            cursor: PlaybackCursor::new(),
            phase: Phase::Gate,
            next_due: Duration::ZERO,
            rearm: false,
            targets: None,
            started: false,
        }
    }

    /// Replace the bound render targets.
    ///
    /// Does not touch the playback cursor. Side effect: the cursor surface
    /// becomes visible.
    pub fn bind_targets(&mut self, targets: RenderTargets) {
        targets.cursor.borrow_mut().set_visible(true);
        self.targets = Some(targets);
        debug!("render targets bound");
    }

    /// Begin the playback loop. Called once at startup; calling it again
    /// is harmless.
    pub fn start(&mut self) {
        self.started = true;
        debug!("sequencer started");
    }

    /// Suspend progress at the next checkpoint. A step already executed
    /// this tick is never rolled back.
    pub fn pause(&mut self) {
        if !self.cursor.is_paused {
            self.cursor.is_paused = true;
            debug!("sequencer paused");
        }
    }

    /// Resume from exactly the checkpoint where playback paused.
    pub fn resume(&mut self) {
        if self.cursor.is_paused {
            self.cursor.is_paused = false;
            // Re-arm the held step so it fires a full step delay after
            // resume rather than immediately.
            if self.phase != Phase::Gate {
                self.rearm = true;
            }
            debug!("sequencer resumed");
        }
    }

    pub fn is_paused(&self) -> bool {
        self.cursor.is_paused
    }

    pub fn is_running(&self) -> bool {
        self.cursor.is_running
    }

    /// Index of the sequence being (or about to be) played.
    pub fn sequence_index(&self) -> usize {
        self.cursor.sequence_index
    }

    /// Execute every step that has come due at `now`.
    ///
    /// This is the only polling point: when the gate conditions fail
    /// (not started, unbound targets, paused) the engine does nothing and
    /// the hosting loop simply calls again on its next frame.
    pub fn tick(&mut self, now: Duration) {
        if !self.started {
            return;
        }
        loop {
            if self.cursor.is_paused {
                return;
            }
            match self.phase {
                Phase::Gate => {
                    if self.targets.is_none()
                        || self.cursor.is_running
                        || self.script.is_empty()
                    {
                        return;
                    }
                    self.begin_sequence(now);
                }
                _ => {
                    if self.rearm {
                        self.next_due = now + self.step_delay();
                        self.rearm = false;
                    }
                    if now < self.next_due {
                        return;
                    }
                    self.advance_step();
                }
            }
        }
    }

    /// Start playing the sequence under the cursor: mark running, reset
    /// both text surfaces, show the cursor glyph, schedule the first
    /// character.
    fn begin_sequence(&mut self, now: Duration) {
        self.cursor.is_running = true;
        if let Some(targets) = &self.targets {
            targets.command.borrow_mut().clear();
            targets.output.borrow_mut().clear();
            targets.cursor.borrow_mut().set_visible(true);
        }
        self.phase = Phase::Typing { char_idx: 0 };
        self.next_due = now + TYPE_CHAR_DELAY;
        trace!(index = self.cursor.sequence_index, "sequence begins");
    }

    /// The full delay of the pending step, used to re-arm after resume.
    fn step_delay(&self) -> Duration {
        let sequence = &self.script.sequences[self.cursor.sequence_index];
        match self.phase {
            Phase::Gate => Duration::ZERO,
            Phase::Typing { .. } => TYPE_CHAR_DELAY,
            Phase::Settling => COMMAND_SETTLE_DELAY,
            Phase::Revealing { line_idx } => sequence.outputs[line_idx].delay(),
            Phase::Resting => SEQUENCE_IDLE_DELAY,
        }
    }

    /// Execute exactly one due step and schedule the next one.
    ///
    /// Deadlines accumulate (`next_due += delay`) so the rhythm stays exact
    /// even when ticks arrive late.
    fn advance_step(&mut self) {
        let sequence = &self.script.sequences[self.cursor.sequence_index];
        match self.phase {
            Phase::Gate => unreachable!("gate has no deadline"),
            Phase::Typing { char_idx } => {
                let total = sequence.command_len();
                if char_idx < total {
                    let prefix: String =
                        sequence.command.chars().take(char_idx + 1).collect();
                    if let Some(targets) = &self.targets {
                        targets.command.borrow_mut().set_text(&prefix);
                    }
                }
                if char_idx + 1 < total {
                    self.phase = Phase::Typing {
                        char_idx: char_idx + 1,
                    };
                    self.next_due += TYPE_CHAR_DELAY;
                } else {
                    self.phase = Phase::Settling;
                    self.next_due += COMMAND_SETTLE_DELAY;
                }
            }
            Phase::Settling => {
                if sequence.outputs.is_empty() {
                    self.phase = Phase::Resting;
                    self.next_due += SEQUENCE_IDLE_DELAY;
                } else {
                    self.phase = Phase::Revealing { line_idx: 0 };
                    self.next_due += sequence.outputs[0].delay();
                }
            }
            Phase::Revealing { line_idx } => {
                let line = &sequence.outputs[line_idx];
                if let Some(targets) = &self.targets {
                    targets.output.borrow_mut().append_line(&line.text, line.style);
                }
                if line_idx + 1 < sequence.outputs.len() {
                    let next_delay = sequence.outputs[line_idx + 1].delay();
                    self.phase = Phase::Revealing {
                        line_idx: line_idx + 1,
                    };
                    self.next_due += next_delay;
                } else {
                    self.phase = Phase::Resting;
                    self.next_due += SEQUENCE_IDLE_DELAY;
                }
            }
            Phase::Resting => {
                self.cursor.is_running = false;
                self.cursor.advance(self.script.len());
                self.phase = Phase::Gate;
                trace!(index = self.cursor.sequence_index, "sequence wrapped");
            }
        }
    }
}
