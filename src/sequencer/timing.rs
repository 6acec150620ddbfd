//! The fixed choreography delays.
//!
//! These values define the user-visible rhythm of the demo and are part of
//! the playback contract, not tuning knobs: per-line overrides come from the
//! script, everything else is literal.

use std::time::Duration;

use crate::script::DemoScript;

/// Delay between typed characters.
pub const TYPE_CHAR_DELAY: Duration = Duration::from_millis(40);

/// Pause after the command is fully typed, before output starts.
pub const COMMAND_SETTLE_DELAY: Duration = Duration::from_millis(400);

/// Default reveal delay for an output line without an explicit override.
pub const DEFAULT_LINE_REVEAL_DELAY: Duration = Duration::from_millis(300);

/// Idle period after a sequence finishes, before the next one starts.
pub const SEQUENCE_IDLE_DELAY: Duration = Duration::from_millis(8000);

/// Compute the duration of one full pass over the catalog.
///
/// Sums typing, settle, per-line reveal, and idle time for every sequence.
/// Used by `adp check` to report how long one loop of a script takes.
pub fn full_pass(script: &DemoScript) -> Duration {
    let mut total = Duration::ZERO;
    for sequence in &script.sequences {
        total += TYPE_CHAR_DELAY * sequence.command_len() as u32;
        total += COMMAND_SETTLE_DELAY;
        for line in &sequence.outputs {
            total += line.delay();
        }
        total += SEQUENCE_IDLE_DELAY;
    }
    total
}
