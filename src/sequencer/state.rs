//! Playback cursor: where the loop is and whether it may advance.

/// Mutable playback position, owned exclusively by the engine.
///
/// `is_running` guards re-entry into an in-flight sequence; `is_paused`
/// suspends progress without losing position. Both are checked at every
/// step boundary, never mid-write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackCursor {
    /// Index of the sequence being (or about to be) played; wraps modulo
    /// the catalog length
    pub sequence_index: usize,
    /// True while a sequence is actively being typed/revealed
    pub is_running: bool,
    /// True while progress is suspended
    pub is_paused: bool,
}

impl PlaybackCursor {
    pub fn new() -> Self {
        Self {
            sequence_index: 0,
            is_running: false,
            is_paused: false,
        }
    }

    /// Advance to the next sequence, wrapping at the catalog length.
    pub fn advance(&mut self, catalog_len: usize) {
        if catalog_len > 0 {
            self.sequence_index = (self.sequence_index + 1) % catalog_len;
        }
    }
}

impl Default for PlaybackCursor {
    fn default() -> Self {
        Self::new()
    }
}
