// Configuration type definitions

use serde::Deserialize;

use crate::suggest::{DEFAULT_DEBOUNCE_MS, SearchScope};

pub const DEFAULT_LOCAL_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_PRODUCTION_BASE_URL: &str = "https://lawgg.onrender.com";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_MAX_VISIBLE: usize = 10;

/// Lookup API section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Explicit origin; bypasses host-based selection when set
    pub base_url: Option<String>,
    pub local_base_url: String,
    pub production_base_url: String,
    /// Hostname the client runs under, used to pick local vs production
    pub host: String,
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: None,
            local_base_url: DEFAULT_LOCAL_BASE_URL.to_string(),
            production_base_url: DEFAULT_PRODUCTION_BASE_URL.to_string(),
            host: "localhost".to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    /// Origin of the lookup endpoints for the configured host
    pub fn base_url(&self) -> String {
        self.base_url_for(&self.host)
    }

    /// Origin of the lookup endpoints when served from `host`
    pub fn base_url_for(&self, host: &str) -> String {
        let url = match self.base_url.as_deref().filter(|u| !u.trim().is_empty()) {
            Some(explicit) => explicit,
            None if is_loopback_host(host) => &self.local_base_url,
            None => &self.production_base_url,
        };
        url.trim().trim_end_matches('/').to_string()
    }
}

/// Whether `host` names the local machine
pub fn is_loopback_host(host: &str) -> bool {
    let host = host.trim().to_ascii_lowercase();
    match host.as_str() {
        "localhost" | "::1" | "[::1]" => true,
        _ => host
            .parse::<std::net::Ipv4Addr>()
            .map(|ip| ip.is_loopback())
            .unwrap_or(false),
    }
}

/// Suggestion behaviour section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    pub debounce_ms: u64,
    /// Minimum characters before a search is issued
    pub min_query_len: usize,
    /// Rows shown in the dropdown before scrolling
    pub max_visible: usize,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_len: 1,
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

/// One searchable input field
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldConfig {
    pub id: String,
    #[serde(default)]
    pub scope: SearchScope,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub title: Option<String>,
}

impl FieldConfig {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }
}

/// Global search plus the bill field of the proposal form
pub fn default_fields() -> Vec<FieldConfig> {
    vec![
        FieldConfig {
            id: "searchInput".to_string(),
            scope: SearchScope::All,
            primary: true,
            title: Some("국회의원·법률안 검색".to_string()),
        },
        FieldConfig {
            id: "target_law".to_string(),
            scope: SearchScope::Bills,
            primary: false,
            title: Some("대상 법안".to_string()),
        },
    ]
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
    #[serde(default = "default_fields")]
    pub fields: Vec<FieldConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api: ApiConfig::default(),
            autocomplete: AutocompleteConfig::default(),
            fields: default_fields(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.autocomplete.debounce_ms, 300);
        assert_eq!(config.autocomplete.min_query_len, 1);
        assert_eq!(config.api.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.fields, default_fields());
    }

    #[test]
    fn test_fields_parse() {
        let config: Config = toml::from_str(
            r#"
[[fields]]
id = "target_law"
scope = "bills"

[[fields]]
id = "q"
primary = true
"#,
        )
        .unwrap();

        assert_eq!(config.fields.len(), 2);
        assert_eq!(config.fields[0].scope, SearchScope::Bills);
        assert!(!config.fields[0].primary);
        assert_eq!(config.fields[1].scope, SearchScope::All);
        assert!(config.fields[1].primary);
        assert_eq!(config.fields[1].title(), "q");
    }

    #[test]
    fn test_invalid_scope_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
[[fields]]
id = "x"
scope = "laws"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_loopback_host_uses_local_origin() {
        let api = ApiConfig::default();
        assert_eq!(api.base_url_for("localhost"), "http://localhost:5000");
        assert_eq!(api.base_url_for("127.0.0.1"), "http://localhost:5000");
        assert_eq!(api.base_url_for("[::1]"), "http://localhost:5000");
    }

    #[test]
    fn test_other_host_uses_production_origin() {
        let api = ApiConfig::default();
        assert_eq!(api.base_url_for("lawgg.kr"), DEFAULT_PRODUCTION_BASE_URL);
        assert_eq!(api.base_url_for("10.0.0.5"), DEFAULT_PRODUCTION_BASE_URL);
    }

    #[test]
    fn test_explicit_base_url_wins_and_is_trimmed() {
        let api = ApiConfig {
            base_url: Some("http://api.test:8080/".to_string()),
            ..ApiConfig::default()
        };
        assert_eq!(api.base_url_for("localhost"), "http://api.test:8080");
        assert_eq!(api.base_url_for("lawgg.kr"), "http://api.test:8080");
    }

    #[test]
    fn test_blank_base_url_is_ignored() {
        let api = ApiConfig {
            base_url: Some("  ".to_string()),
            host: "example.org".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(api.base_url(), DEFAULT_PRODUCTION_BASE_URL);
    }

    // Any subset of sections may be omitted; missing values fall back to defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_api in prop::bool::ANY,
            include_autocomplete in prop::bool::ANY,
            debounce_ms in 0u64..2000,
        ) {
            let mut toml_content = String::new();
            if include_api {
                toml_content.push_str("[api]\nhost = \"lawgg.kr\"\n");
            }
            if include_autocomplete {
                toml_content.push_str(&format!("[autocomplete]\ndebounce_ms = {}\n", debounce_ms));
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");
            let config = config.unwrap();

            prop_assert_eq!(&config.api.local_base_url, DEFAULT_LOCAL_BASE_URL);
            prop_assert_eq!(config.autocomplete.min_query_len, 1);
            if include_autocomplete {
                prop_assert_eq!(config.autocomplete.debounce_ms, debounce_ms);
            } else {
                prop_assert_eq!(config.autocomplete.debounce_ms, DEFAULT_DEBOUNCE_MS);
            }
            if include_api {
                prop_assert_eq!(&config.api.host, "lawgg.kr");
            }
        }
    }
}
