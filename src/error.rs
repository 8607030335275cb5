//! Error types for favor

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can abort a favor run.
///
/// Per-branch scan failures are not represented here: an unreadable directory
/// is logged and treated as having no children.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unable to read configuration file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse configuration file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unable to load votes file {path}")]
    VotesLoad {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("unable to save votes file {path}")]
    VotesSave {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("unable to start picker {command:?}")]
    PickerSpawn {
        command: Vec<String>,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to {action} picker")]
    PickerIo {
        action: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("picker execution failed: {0}")]
    PickerFailed(ExitStatus),

    #[error("picker {command:?} returned invalid output {output:?}, expected format 'name: dir'")]
    InvalidOutput { command: Vec<String>, output: String },

    #[error("invalid picker output: unexpected choice {name:?}: {dir:?}")]
    UnexpectedChoice { name: String, dir: String },
}

pub type Result<T> = std::result::Result<T, Error>;
