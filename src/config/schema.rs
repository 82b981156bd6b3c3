use serde::{Deserialize, Serialize};

use crate::criteria::{default_criteria, Criterion};

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Reworded criterion set. Still validated to exactly six entries
    /// with unique ids.
    #[serde(default)]
    pub criteria: Option<Vec<Criterion>>,

    /// "dark", "light", or "auto" (default)
    #[serde(default)]
    pub theme: Option<String>,
}

impl Config {
    /// The criterion set this config selects: its own, or the built-ins.
    pub fn effective_criteria(&self) -> Vec<Criterion> {
        self.criteria.clone().unwrap_or_else(default_criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_builtin_criteria() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert!(config.criteria.is_none());
        assert!(config.theme.is_none());
        assert_eq!(config.effective_criteria(), default_criteria());
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
theme: light
criteria:
  - id: one
    label: "First question?"
    description: "What a yes means."
  - id: two
    label: "Second question?"
    description: ""
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.theme.as_deref(), Some("light"));

        let criteria = config.criteria.unwrap();
        assert_eq!(criteria.len(), 2);
        assert_eq!(criteria[0].id, "one");
        assert_eq!(criteria[1].label, "Second question?");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "colour_scheme: dark";
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            criteria: Some(default_criteria()),
            theme: Some("auto".to_string()),
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(parsed.criteria.unwrap(), default_criteria());
        assert_eq!(parsed.theme.as_deref(), Some("auto"));
    }
}
