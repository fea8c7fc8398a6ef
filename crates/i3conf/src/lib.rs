//! Generate an i3 configuration from a template and a declarative
//! specification of modes and variables.
//!
//! The pipeline is: YAML document -> [`raw::RawDocument`] -> typed
//! [`ModeSpec`] / [`VariableSpec`] values (via [`ModeSpecBuilder`]) ->
//! [`TemplateEngine::render`].

use std::{
    env,
    path::{Path, PathBuf},
};

mod builder;
mod command;
mod error;
pub mod format;
mod loader;
mod mode;
pub mod raw;
mod template;
mod var;

#[cfg(test)]
mod test_paths;
#[cfg(test)]
mod test_render;

pub use builder::ModeSpecBuilder;
pub use command::{CommandSpec, ESCAPE_CLAUSE};
pub use error::{Error, Result, excerpt_at};
pub use loader::{Document, load_from_path, load_from_str, load_template};
pub use mode::{ESCAPE_BINDING, ModeSpec, mode_marker};
pub use template::{TemplateEngine, substitute_mode, substitute_var};
pub use var::{VariableSpec, var_marker};

/// File name of the default spec.
const CONFIG_FILE: &str = "config.yaml";
/// File name of the default template.
const TEMPLATE_FILE: &str = "template";

/// The user's home directory, from `$HOME`.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var_os("HOME").unwrap_or_default())
}

/// Directory holding the default config and template under `home`.
fn config_dir(home: &Path) -> PathBuf {
    home.join(".config").join("i3-dynamic-conf")
}

/// Default spec location (`~/.config/i3-dynamic-conf/config.yaml`).
pub fn default_config_path() -> PathBuf {
    config_dir(&home_dir()).join(CONFIG_FILE)
}

/// Default template location (`~/.config/i3-dynamic-conf/template`).
pub fn default_template_path() -> PathBuf {
    config_dir(&home_dir()).join(TEMPLATE_FILE)
}

/// Resolve the effective spec path: `explicit` when provided, else the default when it exists.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    resolve(explicit, default_config_path(), "spec")
}

/// Resolve the effective template path: `explicit` when provided, else the default when it exists.
pub fn resolve_template_path(explicit: Option<&Path>) -> Result<PathBuf> {
    resolve(explicit, default_template_path(), "template")
}

/// Shared policy for the two resolvers.
fn resolve(explicit: Option<&Path>, preferred: PathBuf, what: &str) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if preferred.exists() {
        return Ok(preferred);
    }
    let message = format!("No {} found at {}", what, preferred.display());
    Err(Error::Read {
        path: Some(preferred),
        message,
    })
}

/// Load the spec and template from disk and render the final config.
pub fn generate(config: &Path, template: &Path) -> Result<String> {
    let document = load_from_path(config)?;
    let engine = load_template(template)?;
    document.render(&engine)
}
