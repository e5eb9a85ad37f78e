//! Structured config documents for the config viewer.
//!
//! YAML and TOML are both parsed into a single [`ConfigNode`] tree that keeps
//! the source key order, so one component renders both formats.

use super::error::ConfigError;
use crate::models::ConfigFormat;

/// Scalar flavour, used for styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarKind {
    Null,
    Bool,
    Number,
    String,
}

/// A node of a parsed config document.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigNode {
    Scalar { text: String, kind: ScalarKind },
    List(Vec<ConfigNode>),
    Map(Vec<(String, ConfigNode)>),
}

impl ConfigNode {
    fn scalar(text: impl Into<String>, kind: ScalarKind) -> Self {
        Self::Scalar {
            text: text.into(),
            kind,
        }
    }

    /// Number of direct children (0 for scalars).
    pub fn child_count(&self) -> usize {
        match self {
            Self::Scalar { .. } => 0,
            Self::List(items) => items.len(),
            Self::Map(entries) => entries.len(),
        }
    }

    /// Look up a child by dotted path (`"items.sword.damage"`; list
    /// indices are numeric segments).
    #[cfg(test)]
    pub fn get(&self, dotted: &str) -> Option<&ConfigNode> {
        dotted
            .split('.')
            .filter(|s| !s.is_empty())
            .try_fold(self, |node, segment| match node {
                Self::Map(entries) => entries.iter().find(|(k, _)| k == segment).map(|(_, v)| v),
                Self::List(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                Self::Scalar { .. } => None,
            })
    }
}

/// Parse config text in the given format.
pub fn parse(format: ConfigFormat, text: &str) -> Result<ConfigNode, ConfigError> {
    match format {
        ConfigFormat::Yaml => {
            let value: serde_yaml::Value = serde_yaml::from_str(text)?;
            Ok(from_yaml(value))
        }
        ConfigFormat::Toml => {
            let table: toml::Table = text.parse()?;
            Ok(from_toml(toml::Value::Table(table)))
        }
    }
}

// =============================================================================
// YAML
// =============================================================================

fn from_yaml(value: serde_yaml::Value) -> ConfigNode {
    use serde_yaml::Value;

    match value {
        Value::Null => ConfigNode::scalar("null", ScalarKind::Null),
        Value::Bool(b) => ConfigNode::scalar(b.to_string(), ScalarKind::Bool),
        Value::Number(n) => ConfigNode::scalar(n.to_string(), ScalarKind::Number),
        Value::String(s) => ConfigNode::scalar(s, ScalarKind::String),
        Value::Sequence(items) => ConfigNode::List(items.into_iter().map(from_yaml).collect()),
        Value::Mapping(mapping) => ConfigNode::Map(
            mapping
                .into_iter()
                .map(|(k, v)| (yaml_key(k), from_yaml(v)))
                .collect(),
        ),
        Value::Tagged(tagged) => from_yaml(tagged.value),
    }
}

/// Render a mapping key; non-scalar keys fall back to inline YAML.
fn yaml_key(key: serde_yaml::Value) -> String {
    use serde_yaml::Value;

    match key {
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}

// =============================================================================
// TOML
// =============================================================================

fn from_toml(value: toml::Value) -> ConfigNode {
    use toml::Value;

    match value {
        Value::String(s) => ConfigNode::scalar(s, ScalarKind::String),
        Value::Integer(i) => ConfigNode::scalar(i.to_string(), ScalarKind::Number),
        Value::Float(f) => ConfigNode::scalar(f.to_string(), ScalarKind::Number),
        Value::Boolean(b) => ConfigNode::scalar(b.to_string(), ScalarKind::Bool),
        Value::Datetime(d) => ConfigNode::scalar(d.to_string(), ScalarKind::String),
        Value::Array(items) => ConfigNode::List(items.into_iter().map(from_toml).collect()),
        Value::Table(table) => {
            ConfigNode::Map(table.into_iter().map(|(k, v)| (k, from_toml(v))).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS_YAML: &str = r#"
items:
  ruby:
    material: ruby.png
    stack: 64
    glint: true
  sword:
    damage: 7.5
    lore:
      - Sharp
      - Shiny
empty:
"#;

    #[test]
    fn test_yaml_preserves_key_order() {
        let doc = parse(ConfigFormat::Yaml, ITEMS_YAML).unwrap();
        let ConfigNode::Map(entries) = doc.get("items").unwrap() else {
            panic!("items should be a map");
        };
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["ruby", "sword"]);
    }

    #[test]
    fn test_yaml_scalars() {
        let doc = parse(ConfigFormat::Yaml, ITEMS_YAML).unwrap();
        assert_eq!(
            doc.get("items.ruby.stack"),
            Some(&ConfigNode::scalar("64", ScalarKind::Number))
        );
        assert_eq!(
            doc.get("items.ruby.glint"),
            Some(&ConfigNode::scalar("true", ScalarKind::Bool))
        );
        assert_eq!(
            doc.get("items.sword.lore.1"),
            Some(&ConfigNode::scalar("Shiny", ScalarKind::String))
        );
        assert_eq!(
            doc.get("empty"),
            Some(&ConfigNode::scalar("null", ScalarKind::Null))
        );
        assert_eq!(doc.get("items.sword.lore").map(ConfigNode::child_count), Some(2));
    }

    #[test]
    fn test_yaml_empty_document() {
        let doc = parse(ConfigFormat::Yaml, "").unwrap();
        assert_eq!(doc, ConfigNode::scalar("null", ScalarKind::Null));
    }

    #[test]
    fn test_yaml_error() {
        let err = parse(ConfigFormat::Yaml, "key: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_toml_document() {
        let text = r#"
name = "pack"
version = 3

[textures]
block = ["tnt.png", "ore.png"]
"#;
        let doc = parse(ConfigFormat::Toml, text).unwrap();
        let ConfigNode::Map(entries) = &doc else {
            panic!("root should be a map");
        };
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["name", "version", "textures"]);
        assert_eq!(
            doc.get("textures.block.0"),
            Some(&ConfigNode::scalar("tnt.png", ScalarKind::String))
        );
    }

    #[test]
    fn test_toml_error() {
        let err = parse(ConfigFormat::Toml, "name = ").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
