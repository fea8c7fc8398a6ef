//! Named values substituted into `{{VAR_<name>}}` markers.

use crate::{Error, Result, raw::RawVariable};

/// A variable, with a name and a value, that can be substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableSpec {
    /// Name used in the `{{VAR_<name>}}` marker.
    name: String,
    /// Replacement text.
    value: String,
}

impl VariableSpec {
    /// Create a variable from a name and a value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Build a variable from its raw mapping, requiring both fields.
    pub fn from_raw(raw: &RawVariable) -> Result<Self> {
        let name = raw.name.as_ref().ok_or_else(|| Error::missing("name"))?;
        let value = raw.value.as_ref().ok_or_else(|| Error::missing("value"))?;
        Ok(Self::new(name.as_str(), value.as_str()))
    }

    /// Variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variable value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The literal marker this variable replaces.
    pub fn marker(&self) -> String {
        var_marker(&self.name)
    }
}

/// Marker text for the variable called `name`.
pub fn var_marker(name: &str) -> String {
    format!("{{{{VAR_{}}}}}", name)
}
