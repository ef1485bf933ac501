//! Application configuration. Schema rules and log filter.

use serde::Deserialize;

/// Log filter used when neither config nor RUST_LOG provides one.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Comma-separated required fields, each `name` or `name:kind` (e.g. `symbol:string,price:number`).
    /// Read from ML_SIGNAL_REQUIRED_FIELDS.
    #[serde(default)]
    pub required_fields: Option<String>,

    /// Accept messages with no fields at all. Read from ML_SIGNAL_ALLOW_EMPTY.
    #[serde(default)]
    pub allow_empty: Option<bool>,

    /// tracing-subscriber filter directive. Read from ML_SIGNAL_LOG_FILTER.
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("ML_SIGNAL"));
        if let Ok(path) = std::env::var("ML_SIGNAL_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns whether empty messages pass validation. Defaults to false.
    pub fn allow_empty_or_default(&self) -> bool {
        self.allow_empty.unwrap_or(false)
    }

    /// Returns the log filter directive. Defaults to DEFAULT_LOG_FILTER.
    pub fn log_filter_or_default(&self) -> String {
        self.log_filter
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }

    /// Splits `required_fields` into `(name, kind)` pairs. Kind is None when omitted.
    pub fn required_field_rules(&self) -> Vec<(String, Option<String>)> {
        let Some(raw) = self.required_fields.as_deref() else {
            return Vec::new();
        };
        raw.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.split_once(':') {
                Some((name, kind)) => (name.trim().to_string(), Some(kind.trim().to_string())),
                None => (entry.to_string(), None),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert!(!cfg.allow_empty_or_default());
        assert_eq!(cfg.log_filter_or_default(), "info");
        assert!(cfg.required_field_rules().is_empty());
    }

    #[test]
    fn test_required_field_rules() {
        let cfg = AppConfig {
            required_fields: Some(" symbol:string, price : number,,volume ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            cfg.required_field_rules(),
            vec![
                ("symbol".to_string(), Some("string".to_string())),
                ("price".to_string(), Some("number".to_string())),
                ("volume".to_string(), None),
            ]
        );
    }
}
