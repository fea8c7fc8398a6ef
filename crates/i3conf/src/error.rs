//! Error types for specification loading, validation, and rendering.

use std::{
    cmp::{max, min},
    fmt::Write as _,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

/// Convenient result type for i3conf operations.
pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors produced while loading, validating, or rendering a specification.
pub enum Error {
    #[error("{message}")]
    /// I/O or filesystem read error.
    Read {
        /// Optional path associated with the read error.
        path: Option<PathBuf>,
        /// Human-readable error message.
        message: String,
    },
    #[error("{message}")]
    /// YAML parse error, with a location when the parser reports one.
    Parse {
        /// Optional path associated with the parse error.
        path: Option<PathBuf>,
        /// 1-based line number, when known.
        line: Option<usize>,
        /// 1-based column number, when known.
        col: Option<usize>,
        /// Human-readable error message.
        message: String,
        /// Rendered excerpt including a caret at the error location.
        excerpt: Option<String>,
    },
    /// A mandatory key is absent from a mode, command, or variable mapping.
    #[error("Missing parameter: {param}")]
    MissingRequiredParameter {
        /// Name of the missing key.
        param: String,
    },
    /// A command mapping has no `shortcut`.
    #[error("Command #{index} in mode {mode:?} is missing shortcut")]
    MissingShortcutForCommand {
        /// Mode owning the command.
        mode: String,
        /// 1-based position of the command within the mode.
        index: usize,
    },
    /// A command has no template of its own and its mode has no fallback.
    #[error("Command {shortcut:?} in mode {mode:?} has no template and the mode has no command_template")]
    MissingTemplateForCommand {
        /// Mode owning the command.
        mode: String,
        /// Shortcut of the offending command.
        shortcut: String,
    },
    /// A command mapping has neither `template_args` nor `command`.
    #[error("Command {shortcut:?} in mode {mode:?} is missing template_args")]
    MissingTemplateArgsForCommand {
        /// Mode owning the command.
        mode: String,
        /// Shortcut of the offending command.
        shortcut: String,
    },
    /// Two mutually exclusive keys were given together.
    #[error("Can not define {first} and {second} together")]
    ConflictingParameters {
        /// First key.
        first: &'static str,
        /// Second key.
        second: &'static str,
    },
    /// Slot/argument mismatch or malformed braces in a command template.
    #[error("Format error: {message}")]
    Format {
        /// Human-readable error message.
        message: String,
    },
}

impl Error {
    /// Helper to build a `MissingRequiredParameter` error.
    pub fn missing<P: Into<String>>(param: P) -> Self {
        Self::MissingRequiredParameter {
            param: param.into(),
        }
    }

    /// Helper to build a `Format` error from an arbitrary message.
    pub fn format<M: Into<String>>(msg: M) -> Self {
        Self::Format {
            message: msg.into(),
        }
    }

    /// Render a human-friendly error message including location and an excerpt when available.
    pub fn pretty(&self) -> String {
        match self {
            Self::Read { path, message } => match path {
                Some(p) => format!("Read error at {}: {}", p.display(), message),
                None => format!("Read error: {}", message),
            },
            Self::Parse {
                path,
                line,
                col,
                message,
                excerpt,
            } => {
                let loc = match (line, col) {
                    (Some(l), Some(c)) => format!("{}:{}", l, c),
                    (Some(l), None) => format!("{}", l),
                    _ => String::new(),
                };
                let head = match path {
                    Some(p) if !loc.is_empty() => {
                        format!("Spec parse error at {}:{}", p.display(), loc)
                    }
                    Some(p) => format!("Spec parse error at {}", p.display()),
                    None if !loc.is_empty() => format!("Spec parse error at {}", loc),
                    None => "Spec parse error".to_string(),
                };
                match excerpt {
                    Some(ex) => format!("{}\n{}\n{}", head, message, ex),
                    None => format!("{}\n{}", head, message),
                }
            }
            other => format!("Spec error: {}", other),
        }
    }

    /// Access the optional path attached to this error.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path.as_deref(),
            _ => None,
        }
    }

    /// Attach `path` to read and parse errors that do not carry one yet.
    pub(crate) fn with_path(self, path: &Path) -> Self {
        match self {
            Self::Read {
                path: None,
                message,
            } => Self::Read {
                path: Some(path.to_path_buf()),
                message,
            },
            Self::Parse {
                path: None,
                line,
                col,
                message,
                excerpt,
            } => Self::Parse {
                path: Some(path.to_path_buf()),
                line,
                col,
                message,
                excerpt,
            },
            other => other,
        }
    }
}

/// Build a small 2-3 line excerpt with a caret at `(line_no, col_no)`.
pub fn excerpt_at(source: &str, line_no: usize, col_no: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let total = lines.len();
    let start = max(1usize, line_no.saturating_sub(2));
    let end = min(total, line_no + 1);

    let mut out = String::new();
    for n in start..=end {
        let text = lines.get(n - 1).copied().unwrap_or("");
        let _ignored = writeln!(out, " {:>4} | {}", n, text);
        if n == line_no {
            let prefix = format!(" {:>4} | ", n);
            let _ignored = writeln!(
                out,
                "{}{}^",
                " ".repeat(prefix.len()),
                " ".repeat(col_no.saturating_sub(1))
            );
        }
    }
    out
}
