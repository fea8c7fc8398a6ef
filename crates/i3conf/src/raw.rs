//! Raw, loosely-typed specification document as read from YAML.
//!
//! Every field is optional here; presence checks and defaulting happen in the
//! builder, which turns these into the typed specs.

use serde::{
    Deserialize, Deserializer,
    de::{Error as _, Unexpected},
};
use serde_yaml::Value;

/// Accept any YAML scalar (string, number, bool) as its textual form.
///
/// Numbers keep their written form (`1.0` stays `1.0`, large `u64` values are exact).
fn de_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Err(D::Error::invalid_type(Unexpected::Unit, &"a scalar")),
        Value::Sequence(_) => Err(D::Error::invalid_type(Unexpected::Seq, &"a scalar")),
        Value::Mapping(_) => Err(D::Error::invalid_type(Unexpected::Map, &"a scalar")),
        Value::Tagged(t) => Err(D::Error::custom(format!(
            "expected a scalar, found tagged value {}",
            t.tag
        ))),
    }
}

/// Optional variant of [`de_scalar`].
fn de_opt_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    /// Newtype so the scalar helper can be used inside `Option`.
    struct Wrap(#[serde(deserialize_with = "de_scalar")] String);
    Ok(Option::<Wrap>::deserialize(deserializer)?.map(|Wrap(s)| s))
}

/// Optional list of scalars, each rendered as text.
fn de_opt_scalar_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    /// Newtype so the scalar helper can be used inside `Vec`.
    struct Wrap(#[serde(deserialize_with = "de_scalar")] String);
    Ok(Option::<Vec<Wrap>>::deserialize(deserializer)?
        .map(|items| items.into_iter().map(|Wrap(s)| s).collect()))
}

/// Top-level specification document: `modes` and `vars`, both optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawDocument {
    /// Mode mappings, in render order.
    #[serde(default)]
    pub modes: Vec<RawMode>,
    /// Variable mappings, in substitution order.
    #[serde(default)]
    pub vars: Vec<RawVariable>,
}

/// One mode mapping.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawMode {
    /// Mode name; required.
    #[serde(default)]
    pub name: Option<String>,
    /// Command entries; required.
    #[serde(default)]
    pub commands: Option<Vec<RawCommand>>,
    /// Template used by commands that have none of their own.
    #[serde(default)]
    pub command_template: Option<String>,
    /// Shorthand for `command_template: "<prefix>{}"`.
    #[serde(default)]
    pub command_prefix: Option<String>,
    /// Text bound to `$mode_<name>`.
    #[serde(default, deserialize_with = "de_opt_scalar")]
    pub description: Option<String>,
    /// Shortcut that enters the mode.
    #[serde(default, deserialize_with = "de_opt_scalar")]
    pub shortcut: Option<String>,
    /// Return to the default mode after each command. Defaults to true.
    #[serde(default)]
    pub escape_after_each_command: Option<bool>,
}

/// One command mapping inside a mode.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawCommand {
    /// Trigger shortcut; required.
    #[serde(default, deserialize_with = "de_opt_scalar")]
    pub shortcut: Option<String>,
    /// Command template; falls back to the mode's template.
    #[serde(default)]
    pub template: Option<String>,
    /// Positional arguments for the template.
    #[serde(default, deserialize_with = "de_opt_scalar_list")]
    pub template_args: Option<Vec<String>>,
    /// Shorthand for `template_args: [command]`.
    #[serde(default, deserialize_with = "de_opt_scalar")]
    pub command: Option<String>,
}

/// One `{name, value}` variable mapping.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawVariable {
    /// Variable name; required.
    #[serde(default, deserialize_with = "de_opt_scalar")]
    pub name: Option<String>,
    /// Substituted value; required.
    #[serde(default, deserialize_with = "de_opt_scalar")]
    pub value: Option<String>,
}
