//! A named modal block of keybindings.

use crate::{CommandSpec, Result};

/// Fixed binding that leaves every mode.
pub const ESCAPE_BINDING: &str = "    bind Escape mode \"default\"\n";

/// Indentation applied to each command line inside a mode block.
const INDENT: &str = "    ";

/// Represents the specification for an i3 mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSpec {
    /// Mode name, used in `$mode_<name>` and the `{{MODE_<name>}}` marker.
    name: String,
    /// Template that commands without their own fell back to.
    command_template: Option<String>,
    /// Commands in render order.
    commands: Vec<CommandSpec>,
    /// Value bound to `$mode_<name>`.
    description: Option<String>,
    /// Shortcut that enters the mode.
    shortcut: Option<String>,
    /// Append the escape clause to every command.
    escape_after_each_command: bool,
}

impl ModeSpec {
    /// Create a mode with no description or shortcut that escapes after each command.
    pub fn new(name: impl Into<String>, commands: Vec<CommandSpec>) -> Self {
        Self {
            name: name.into(),
            command_template: None,
            commands,
            description: None,
            shortcut: None,
            escape_after_each_command: true,
        }
    }

    /// Set the mode-level command template.
    pub fn with_command_template(mut self, template: Option<String>) -> Self {
        self.command_template = template;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Set the shortcut that enters the mode.
    pub fn with_shortcut(mut self, shortcut: Option<String>) -> Self {
        self.shortcut = shortcut;
        self
    }

    /// Control whether each command returns to the default mode.
    pub fn with_escape_after_each_command(mut self, escape: bool) -> Self {
        self.escape_after_each_command = escape;
        self
    }

    /// Mode name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mode-level command template, if any.
    pub fn command_template(&self) -> Option<&str> {
        self.command_template.as_deref()
    }

    /// Commands in render order.
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    /// Description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Entry shortcut, if any.
    pub fn shortcut(&self) -> Option<&str> {
        self.shortcut.as_deref()
    }

    /// Whether commands return to the default mode.
    pub fn escape_after_each_command(&self) -> bool {
        self.escape_after_each_command
    }

    /// The literal marker this mode replaces.
    pub fn marker(&self) -> String {
        mode_marker(&self.name)
    }

    /// Render the mode as a complete block.
    pub fn render(&self) -> Result<String> {
        let mut out = self.render_description();
        out.push_str(&format!("mode \"$mode_{}\" {{\n", self.name));
        for command in &self.commands {
            out.push_str(INDENT);
            out.push_str(&command.render(self.escape_after_each_command)?);
            out.push('\n');
        }
        out.push_str(ESCAPE_BINDING);
        out.push_str("}\n");
        out.push_str(&self.render_shortcut());
        Ok(out)
    }

    /// `set $mode_<name> <description>` line, or nothing.
    fn render_description(&self) -> String {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => format!("set $mode_{} {}\n", self.name, d),
            _ => String::new(),
        }
    }

    /// `bind <shortcut> mode "$mode_<name>"` line, or nothing.
    fn render_shortcut(&self) -> String {
        match self.shortcut.as_deref() {
            Some(s) if !s.is_empty() => format!("bind {} mode \"$mode_{}\"\n", s, self.name),
            _ => String::new(),
        }
    }
}

/// Marker text for the mode called `name`.
pub fn mode_marker(name: &str) -> String {
    format!("{{{{MODE_{}}}}}", name)
}
