//! Validation and normalization of raw mode mappings into typed specs.

use tracing::debug;

use crate::{
    CommandSpec, Error, ModeSpec, Result,
    raw::{RawCommand, RawMode},
};

/// Builds [`ModeSpec`] values from raw mappings.
///
/// The raw mapping is only borrowed; building never modifies it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ModeSpecBuilder;

impl ModeSpecBuilder {
    /// Validate `raw` and build the typed mode.
    pub fn build(raw: &RawMode) -> Result<ModeSpec> {
        let name = raw.name.as_deref().ok_or_else(|| Error::missing("name"))?;
        let raw_commands = raw
            .commands
            .as_deref()
            .ok_or_else(|| Error::missing("commands"))?;
        let command_template = Self::mode_template(raw)?;

        // Every entry is checked for arguments before any template is resolved.
        let validated = raw_commands
            .iter()
            .enumerate()
            .map(|(i, c)| Self::validate_command(name, i + 1, c))
            .collect::<Result<Vec<_>>>()?;
        let commands = validated
            .into_iter()
            .zip(raw_commands)
            .map(|((shortcut, args), c)| {
                let template = Self::resolve_template(name, command_template.as_deref(), c)?;
                Ok(CommandSpec::new(shortcut, template, args))
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(mode = name, commands = commands.len(), "built mode");

        Ok(ModeSpec::new(name, commands)
            .with_command_template(command_template)
            .with_description(raw.description.clone())
            .with_shortcut(raw.shortcut.clone())
            .with_escape_after_each_command(raw.escape_after_each_command.unwrap_or(true)))
    }

    /// Resolve the mode-level template from `command_template` or `command_prefix`.
    fn mode_template(raw: &RawMode) -> Result<Option<String>> {
        match (&raw.command_template, &raw.command_prefix) {
            (Some(_), Some(_)) => Err(Error::ConflictingParameters {
                first: "command_template",
                second: "command_prefix",
            }),
            (Some(t), None) => Ok(Some(t.clone())),
            (None, Some(p)) => Ok(Some(format!("{}{{}}", p))),
            (None, None) => Ok(None),
        }
    }

    /// Check a command entry's required fields, returning its shortcut and arguments.
    ///
    /// `index` is the 1-based position of the entry, used to locate it in errors.
    fn validate_command<'a>(
        mode: &str,
        index: usize,
        raw: &'a RawCommand,
    ) -> Result<(&'a str, Vec<String>)> {
        let shortcut = raw
            .shortcut
            .as_deref()
            .ok_or_else(|| Error::MissingShortcutForCommand {
                mode: mode.to_string(),
                index,
            })?;

        let template_args = match (&raw.template_args, &raw.command) {
            (Some(_), Some(_)) => {
                return Err(Error::ConflictingParameters {
                    first: "template_args",
                    second: "command",
                });
            }
            (Some(args), None) => args.clone(),
            (None, Some(cmd)) => vec![cmd.clone()],
            (None, None) => {
                return Err(Error::MissingTemplateArgsForCommand {
                    mode: mode.to_string(),
                    shortcut: shortcut.to_string(),
                });
            }
        };
        Ok((shortcut, template_args))
    }

    /// The command's own template, or the mode fallback.
    fn resolve_template<'a>(
        mode: &str,
        fallback: Option<&'a str>,
        raw: &'a RawCommand,
    ) -> Result<&'a str> {
        raw.template
            .as_deref()
            .or(fallback)
            .ok_or_else(|| Error::MissingTemplateForCommand {
                mode: mode.to_string(),
                shortcut: raw.shortcut.clone().unwrap_or_default(),
            })
    }
}
