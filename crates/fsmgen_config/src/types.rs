//! Configuration types deserialized from `fsmgen.toml`.

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

/// The top-level generator configuration.
///
/// Every section is optional; an empty file yields [`GeneratorConfig::default`].
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Verilog emitter settings.
    #[serde(default)]
    pub verilog: VerilogConfig,
    /// Lint pass settings.
    #[serde(default)]
    pub lint: LintConfig,
}

/// Settings for the Verilog emitter.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerilogConfig {
    /// Wrap the emitted text in generated-code banner lines.
    #[serde(default)]
    pub banner: bool,
}

/// Lint rule severity overrides.
///
/// Rules are named by code (`W101`) or by name (`undeclared-target`).
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    /// Rules to treat as errors.
    #[serde(default, deserialize_with = "deserialize_string_or_vec")]
    pub deny: Vec<String>,
    /// Rules to suppress.
    #[serde(default, deserialize_with = "deserialize_string_or_vec")]
    pub allow: Vec<String>,
}

impl LintConfig {
    /// Returns `true` if the rule is suppressed.
    pub fn is_allowed(&self, code: &str, name: &str) -> bool {
        names_rule(&self.allow, code, name)
    }

    /// Returns `true` if the rule is promoted to an error.
    pub fn is_denied(&self, code: &str, name: &str) -> bool {
        names_rule(&self.deny, code, name)
    }
}

fn names_rule(list: &[String], code: &str, name: &str) -> bool {
    list.iter().any(|entry| entry == code || entry == name)
}

/// Deserializes a field that can be either a single string or a list of strings.
///
/// Allows `deny = "W101"` as well as `deny = ["W101", "W102"]`.
fn deserialize_string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(vec![v.to_string()])
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut vec = Vec::new();
            while let Some(val) = seq.next_element::<String>()? {
                vec.push(val);
            }
            Ok(vec)
        }
    }

    deserializer.deserialize_any(StringOrVec)
}
