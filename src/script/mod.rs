//! Demo script catalog: the pre-authored command/output sequences.
//!
//! A script is an ordered, immutable catalog of [`Sequence`] entries. Each
//! sequence is a command string (typed character by character during
//! playback) followed by a list of timed output lines. Scripts are defined
//! at startup: either the built-in catalog compiled into the binary, or a
//! TOML/JSON file loaded from disk.

mod builtin;

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default reveal delay for an output line, in milliseconds.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 300;

/// Errors raised while loading or validating a demo script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to read script file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML script: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON script: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported script format {extension:?} (expected .toml or .json)")]
    UnsupportedFormat { extension: String },

    #[error("script contains no sequences")]
    EmptyCatalog,

    #[error("sequence {index} has an empty command")]
    EmptyCommand { index: usize },
}

/// Visual style tag carried by an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Plain output, no emphasis
    #[default]
    None,
    /// Informational/progress line (rendered dimmed)
    Info,
    /// Success line (rendered in the success color)
    Success,
}

/// One timed output line of a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    /// Literal text to append to the output area
    pub text: String,
    /// Delay before this line appears, in milliseconds
    #[serde(default = "default_reveal_delay")]
    pub delay_ms: u64,
    /// Optional style tag
    #[serde(default)]
    pub style: LineStyle,
}

fn default_reveal_delay() -> u64 {
    DEFAULT_REVEAL_DELAY_MS
}

impl OutputLine {
    /// Plain line with the default reveal delay.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            delay_ms: DEFAULT_REVEAL_DELAY_MS,
            style: LineStyle::None,
        }
    }

    /// Line with an explicit delay and style.
    pub fn styled(text: impl Into<String>, delay_ms: u64, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            delay_ms,
            style,
        }
    }

    /// Reveal delay as a [`Duration`].
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// One catalog entry: a command and its scripted output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    /// Literal command string, typed character by character
    pub command: String,
    /// Output lines revealed after the command, in order
    #[serde(default)]
    pub outputs: Vec<OutputLine>,
}

impl Sequence {
    /// Number of characters the typing phase will produce.
    pub fn command_len(&self) -> usize {
        self.command.chars().count()
    }
}

/// The full demo catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoScript {
    /// Sequences played in order, wrapping back to the first
    pub sequences: Vec<Sequence>,
}

impl DemoScript {
    /// The catalog compiled into the binary, used when no script file is
    /// given.
    pub fn builtin() -> Self {
        Self {
            sequences: builtin::sequences(),
        }
    }

    /// Load a script from a TOML or JSON file, dispatching on the file
    /// extension, and validate it.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        let script: DemoScript = match extension.as_str() {
            "toml" => toml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            _ => return Err(ScriptError::UnsupportedFormat { extension }),
        };

        script.validate()?;
        Ok(script)
    }

    /// Validate catalog invariants: at least one sequence, no empty
    /// commands.
    pub fn validate(&self) -> Result<(), ScriptError> {
        if self.sequences.is_empty() {
            return Err(ScriptError::EmptyCatalog);
        }
        for (index, sequence) in self.sequences.iter().enumerate() {
            if sequence.command.chars().count() == 0 {
                return Err(ScriptError::EmptyCommand { index });
            }
        }
        Ok(())
    }

    /// Number of sequences in the catalog.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Total number of output lines across all sequences.
    pub fn total_lines(&self) -> usize {
        self.sequences.iter().map(|s| s.outputs.len()).sum()
    }
}
