//! BoxMark headless host
//!
//! Stands in for an interactive surface: reads a recorded gesture session,
//! feeds it to an [`Editor`] step by step, and hands back the resulting shapes.

use boxmark_core::{Editor, EditorConfig, EditorError, HostEvent, Mode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Host errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Replay aborted at step {step}: {source}")]
    Editor { step: usize, source: EditorError },
}

/// One recorded action from the host: a mode selection or a surface event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    SetMode { mode: Mode },
    Event { event: HostEvent },
}

/// A recorded gesture session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub steps: Vec<Step>,
}

impl Session {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Counters collected while replaying a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Steps applied, including ignored events.
    pub steps: usize,
    /// Events that created or moved a shape.
    pub mutations: usize,
    /// Events the store rejected.
    pub rejected: usize,
}

fn read(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the editor configuration, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<EditorConfig, AppError> {
    match path {
        Some(path) => {
            let config = EditorConfig::from_json(&read(path)?)?;
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(EditorConfig::default()),
    }
}

/// Load a recorded session.
pub fn load_session(path: &Path) -> Result<Session, AppError> {
    Session::from_json(&read(path)?)
}

/// Apply every step of `session` to `editor` in order.
///
/// Rejected events are logged and skipped, unless `strict` is set, in which
/// case the first one aborts the replay.
pub fn replay(
    editor: &mut Editor,
    session: &Session,
    strict: bool,
) -> Result<ReplaySummary, AppError> {
    let mut summary = ReplaySummary::default();
    for (index, step) in session.steps.iter().enumerate() {
        summary.steps += 1;
        match step {
            Step::SetMode { mode } => {
                editor.set_mode(*mode);
            }
            Step::Event { event } => match editor.handle_event(event.clone()) {
                Ok(outcome) => {
                    log::debug!("Step {}: {:?}", index, outcome);
                    if outcome.mutated() {
                        summary.mutations += 1;
                    }
                }
                Err(source) if strict => {
                    return Err(AppError::Editor {
                        step: index,
                        source,
                    });
                }
                Err(e) => {
                    log::warn!("Step {} rejected: {}", index, e);
                    summary.rejected += 1;
                }
            },
        }
    }
    Ok(summary)
}
