use crate::search::alphabeta::SearchParams;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

impl SearchParams {
    /// Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("invalid search config")
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading search config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_config_keeps_defaults() {
        let p = SearchParams::from_json_str(r#"{ "max_depth": 3, "use_pruning": false }"#).unwrap();
        assert_eq!(
            p,
            SearchParams { max_depth: 3, use_pruning: false, ..SearchParams::default() }
        );
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SearchParams::from_json_str("{}").unwrap(), SearchParams::default());
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(SearchParams::from_json_str(r#"{ "max_depth": "deep" }"#).is_err());
    }

    #[test]
    fn missing_file_has_context() {
        let err = SearchParams::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(format!("{err:#}").contains("reading search config"));
    }
}
