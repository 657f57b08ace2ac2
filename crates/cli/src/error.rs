//! Errors surfaced by the `color-fusion` binary.
//!
//! | exit | meaning |
//! |------|---------|
//! | 0    | success |
//! | 2    | rejected by clap before `run` starts |
//! | 10   | bad color, step count, or canvas size |
//! | 11   | the PNG could not be written |
//! | 12   | bad mode name, `--params` JSON, or swatch selection |
//! | 13   | JSON output failed |

use color_fusion_core::FusionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Fusion(FusionError),

    /// Carries the full "failed to save file: ..." text.
    #[error("{0}")]
    Io(String),

    #[error("{0}")]
    Input(String),

    #[error("could not encode output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Fusion(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl From<FusionError> for CliError {
    fn from(e: FusionError) -> Self {
        if let FusionError::ExportIo(_) = e {
            CliError::Io(e.to_string())
        } else {
            CliError::Fusion(e)
        }
    }
}
