//! Parse and load the specification document.

use std::{collections::HashSet, fs, path::Path};

use tracing::{debug, warn};

use crate::{
    Error, ModeSpec, ModeSpecBuilder, Result, TemplateEngine, VariableSpec, error::excerpt_at,
    raw::RawDocument,
};

/// Fully built specification document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Modes in document order.
    pub modes: Vec<ModeSpec>,
    /// Variables in document order.
    pub vars: Vec<VariableSpec>,
}

impl Document {
    /// Build every mode and variable from a raw document.
    pub fn from_raw(raw: &RawDocument) -> Result<Self> {
        let modes = raw
            .modes
            .iter()
            .map(ModeSpecBuilder::build)
            .collect::<Result<Vec<_>>>()?;
        let vars = raw
            .vars
            .iter()
            .map(VariableSpec::from_raw)
            .collect::<Result<Vec<_>>>()?;
        warn_duplicate_modes(&modes);
        debug!(modes = modes.len(), vars = vars.len(), "loaded spec document");
        Ok(Self { modes, vars })
    }

    /// Render `template` with this document's modes and variables.
    pub fn render(&self, template: &TemplateEngine) -> Result<String> {
        template.render(&self.modes, &self.vars)
    }
}

/// Mode names collide on the same marker; only the first mode can ever be injected.
fn warn_duplicate_modes(modes: &[ModeSpec]) {
    let mut seen = HashSet::new();
    for mode in modes {
        if !seen.insert(mode.name()) {
            warn!(mode = mode.name(), "duplicate mode name; later definitions are ignored");
        }
    }
}

/// Parse a YAML specification document from a string.
///
/// `path` is only used to annotate errors.
pub fn load_from_str(text: &str, path: Option<&Path>) -> Result<Document> {
    parse_raw(text)
        .and_then(|raw| Document::from_raw(&raw))
        .map_err(|e| match path {
            Some(p) => e.with_path(p),
            None => e,
        })
}

/// Deserialize the raw document, treating an empty file as an empty document.
fn parse_raw(text: &str) -> Result<RawDocument> {
    if text.trim().is_empty() {
        return Ok(RawDocument::default());
    }
    serde_yaml::from_str::<Option<RawDocument>>(text)
        .map(Option::unwrap_or_default)
        .map_err(|e| {
            let (line, col) = match e.location() {
                Some(loc) => (Some(loc.line()), Some(loc.column())),
                None => (None, None),
            };
            Error::Parse {
                path: None,
                line,
                col,
                message: e.to_string(),
                excerpt: line.zip(col).map(|(l, c)| excerpt_at(text, l, c)),
            }
        })
}

/// Load and build a specification document from a YAML file at `path`.
pub fn load_from_path(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;
    load_from_str(&text, Some(path))
}

/// Load a template file into a [`TemplateEngine`].
pub fn load_template(path: &Path) -> Result<TemplateEngine> {
    let text = fs::read_to_string(path).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;
    Ok(TemplateEngine::new(text))
}
