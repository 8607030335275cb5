//! Interactive selection through an external picker process
//!
//! The picker (usually `fzf`) reads one `<tree name>: <dir>` line per
//! candidate on stdin, most preferred first, and prints the chosen line on
//! stdout. Exit status 130 means the user quit without choosing.

use std::io::{self, Read, Write};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};
use crate::scan::Candidate;

/// Exit status of a picker interrupted without a choice.
const EXIT_INTERRUPTED: i32 = 130;

pub struct Picker {
    command: Vec<String>,
}

impl Picker {
    /// Create a picker from a command line; the first element is the executable.
    pub fn new(command: Vec<String>) -> Result<Self> {
        if command.first().is_none_or(|exe| exe.is_empty()) {
            return Err(Error::InvalidConfig("picker command is empty".to_string()));
        }
        Ok(Self { command })
    }

    /// Present `candidates` and return the chosen one, or `None` when the user
    /// made no choice.
    pub fn pick<'c, 'a>(&self, candidates: &'c [Candidate<'a>]) -> Result<Option<&'c Candidate<'a>>> {
        let output = self.run(candidates)?;

        if output.is_empty() {
            tracing::debug!("picker returned no selection");
            return Ok(None);
        }

        let (name, dir) = parse_line(&output).ok_or_else(|| Error::InvalidOutput {
            command: self.command.clone(),
            output: output.clone(),
        })?;

        candidates
            .iter()
            .find(|candidate| candidate.matches(name, dir))
            .map(Some)
            .ok_or_else(|| Error::UnexpectedChoice {
                name: name.to_string(),
                dir: dir.to_string(),
            })
    }

    /// Feed the candidates to the picker and return its trimmed output.
    fn run(&self, candidates: &[Candidate<'_>]) -> Result<String> {
        let (exe, args) = self
            .command
            .split_first()
            .ok_or_else(|| Error::InvalidConfig("picker command is empty".to_string()))?;

        tracing::debug!(command = ?self.command, candidates = candidates.len(), "starting picker");

        let mut child = Command::new(exe)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| Error::PickerSpawn {
                command: self.command.clone(),
                source,
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| Error::PickerIo {
            action: "pipe stdin for",
            source: io::Error::other("stdin not captured"),
        })?;

        for candidate in candidates {
            // The picker may exit before reading everything
            if let Err(e) = writeln!(stdin, "{}", format_line(candidate)) {
                tracing::debug!(error = %e, "picker stopped reading input");
                break;
            }
        }
        drop(stdin);

        let mut stdout = child.stdout.take().ok_or_else(|| Error::PickerIo {
            action: "pipe stdout for",
            source: io::Error::other("stdout not captured"),
        })?;

        let mut contents = Vec::new();
        stdout
            .read_to_end(&mut contents)
            .map_err(|source| Error::PickerIo {
                action: "read stdout of",
                source,
            })?;

        let status = child.wait().map_err(|source| Error::PickerIo {
            action: "wait for",
            source,
        })?;

        if status.code() == Some(EXIT_INTERRUPTED) {
            tracing::debug!("picker interrupted");
            return Ok(String::new());
        }
        if !status.success() {
            return Err(Error::PickerFailed(status));
        }

        Ok(String::from_utf8_lossy(&contents).trim().to_string())
    }
}

/// Line presented to the picker for `candidate`.
pub fn format_line(candidate: &Candidate<'_>) -> String {
    candidate.to_string()
}

/// Split a picker answer into tree name and directory.
///
/// The line must contain exactly one `:`.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(dir), None) => Some((name.trim(), dir.trim())),
        _ => None,
    }
}
