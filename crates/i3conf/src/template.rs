//! Placeholder expansion over the static config template.

use tracing::debug;

use crate::{ModeSpec, Result, VariableSpec};

/// Represents the template for the i3 configuration.
///
/// The original text is never modified; every call to [`render`](Self::render)
/// starts from it afresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEngine {
    /// Unmodified template text.
    original: String,
}

impl TemplateEngine {
    /// Wrap the raw template text.
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
        }
    }

    /// The unmodified template text.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Render the template into the final config.
    ///
    /// All `{{MODE_<name>}}` markers are replaced first, in `modes` order, then
    /// all `{{VAR_<name>}}` markers, in `vars` order. Markers that do not occur
    /// are skipped.
    pub fn render(&self, modes: &[ModeSpec], vars: &[VariableSpec]) -> Result<String> {
        let mut out = self.original.clone();
        for mode in modes {
            out = substitute_mode(mode, &out)?;
        }
        for var in vars {
            out = substitute_var(var, &out);
        }
        Ok(out)
    }
}

/// Replace every marker for `mode` in `text`.
///
/// The mode is rendered even when its marker is absent, so a slot mismatch in
/// any mode of the document is reported.
pub fn substitute_mode(mode: &ModeSpec, text: &str) -> Result<String> {
    let rendered = mode.render()?;
    let marker = mode.marker();
    if !text.contains(&marker) {
        debug!(mode = mode.name(), "mode marker not found; skipping");
        return Ok(text.to_string());
    }
    Ok(text.replace(&marker, &rendered))
}

/// Replace every marker for `var` in `text`.
pub fn substitute_var(var: &VariableSpec, text: &str) -> String {
    let marker = var.marker();
    if !text.contains(&marker) {
        debug!(var = var.name(), "variable marker not found; skipping");
        return text.to_string();
    }
    text.replace(&marker, var.value())
}
