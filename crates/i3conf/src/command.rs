//! A single keybinding entry within a mode.

use crate::{Result, format::fill_slots};

/// Clause appended to a binding that returns to the default mode.
pub const ESCAPE_CLAUSE: &str = "; mode \"default\"";

/// One bindable action line: a shortcut, a template, and the template's arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Opaque trigger passed through to the binding.
    shortcut: String,
    /// Template with one `{}` slot per argument.
    template: String,
    /// Positional arguments for `template`.
    template_args: Vec<String>,
}

impl CommandSpec {
    /// Create a command. Slot counts are only checked at render time.
    pub fn new(
        shortcut: impl Into<String>,
        template: impl Into<String>,
        template_args: Vec<String>,
    ) -> Self {
        Self {
            shortcut: shortcut.into(),
            template: template.into(),
            template_args,
        }
    }

    /// Trigger shortcut.
    pub fn shortcut(&self) -> &str {
        &self.shortcut
    }

    /// Command template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Positional template arguments.
    pub fn template_args(&self) -> &[String] {
        &self.template_args
    }

    /// Render as `bind <shortcut> <template>`, optionally followed by the
    /// escape clause, with the arguments filled into the combined line.
    pub fn render(&self, escape_after: bool) -> Result<String> {
        let mut line = format!("bind {} {}", self.shortcut, self.template);
        if escape_after {
            line.push_str(ESCAPE_CLAUSE);
        }
        fill_slots(&line, &self.template_args)
    }
}
