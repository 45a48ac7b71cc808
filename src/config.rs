use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Nominatim geocoder base URL
    #[serde(default = "default_nominatim_url")]
    pub nominatim_url: String,

    /// User-Agent sent to Nominatim (required by its usage policy)
    #[serde(default = "default_nominatim_user_agent")]
    pub nominatim_user_agent: String,

    /// Half-size of the supermarket search box, in degrees
    #[serde(default = "default_search_radius_deg")]
    pub supermarket_search_radius_deg: f64,

    /// Maximum places requested per supermarket search
    #[serde(default = "default_result_limit")]
    pub supermarket_result_limit: usize,

    /// Sites used to build shopping search links (comma separated)
    #[serde(default = "default_search_sites")]
    pub supermarket_search_sites: Vec<String>,

    /// Optional JSON file replacing the built-in synonym table
    #[serde(default)]
    pub synonyms_path: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_nominatim_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_nominatim_user_agent() -> String {
    concat!("despensa-api/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_search_radius_deg() -> f64 {
    0.1
}

fn default_result_limit() -> usize {
    10
}

fn default_search_sites() -> Vec<String> {
    vec![
        "lider.cl".to_string(),
        "jumbo.cl".to_string(),
        "tottus.cl".to_string(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            nominatim_url: default_nominatim_url(),
            nominatim_user_agent: default_nominatim_user_agent(),
            supermarket_search_radius_deg: default_search_radius_deg(),
            supermarket_result_limit: default_result_limit(),
            supermarket_search_sites: default_search_sites(),
            synonyms_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !self.supermarket_search_radius_deg.is_finite() || self.supermarket_search_radius_deg <= 0.0 {
            anyhow::bail!(
                "SUPERMARKET_SEARCH_RADIUS_DEG must be positive, got {}",
                self.supermarket_search_radius_deg
            );
        }
        if self.supermarket_result_limit == 0 {
            anyhow::bail!("SUPERMARKET_RESULT_LIMIT must be at least 1");
        }
        Ok(())
    }

    /// Address to bind the HTTP listener to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:4000");
        assert_eq!(config.nominatim_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.supermarket_search_radius_deg, 0.1);
        assert_eq!(config.supermarket_result_limit, 10);
        assert_eq!(
            config.supermarket_search_sites,
            vec!["lider.cl", "jumbo.cl", "tottus.cl"]
        );
        assert!(config.synonyms_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(vars(&[
            ("PORT", "8080"),
            ("SUPERMARKET_SEARCH_SITES", "unimarc.cl,santaisabel.cl"),
            ("SUPERMARKET_RESULT_LIMIT", "5"),
            ("SYNONYMS_PATH", "/etc/despensa/synonyms.json"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.supermarket_search_sites, vec!["unimarc.cl", "santaisabel.cl"]);
        assert_eq!(config.supermarket_result_limit, 5);
        assert_eq!(
            config.synonyms_path.as_deref(),
            Some("/etc/despensa/synonyms.json")
        );
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(Config::from_vars(vars(&[("PORT", "not-a-port")])).is_err());
        assert!(Config::from_vars(vars(&[("SUPERMARKET_SEARCH_RADIUS_DEG", "-1")])).is_err());
        assert!(Config::from_vars(vars(&[("SUPERMARKET_RESULT_LIMIT", "0")])).is_err());
    }
}
