use url::Url;

use crate::gateway::error::GatewayError;

/// Connection settings for the Supabase gateway, baked in at compile time
/// (`SUPABASE_URL` / `SUPABASE_ANON_KEY`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co` (no trailing slash).
    pub url: String,
    /// Public anon key, sent as the `apikey` header on every request.
    pub anon_key: String,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_parts(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
    }

    pub fn from_parts(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, GatewayError> {
        let url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| GatewayError::Config("SUPABASE_URL is not set".to_string()))?;
        let anon_key = anon_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| GatewayError::Config("SUPABASE_ANON_KEY is not set".to_string()))?;

        let parsed = Url::parse(url)
            .map_err(|e| GatewayError::Config(format!("invalid SUPABASE_URL '{}': {}", url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GatewayError::Config(format!(
                "invalid SUPABASE_URL '{}': expected an http(s) URL",
                url
            )));
        }

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_settings() {
        let config =
            GatewayConfig::from_parts(Some("https://abc.supabase.co"), Some("anon-key")).unwrap();
        assert_eq!(config.url, "https://abc.supabase.co");
        assert_eq!(config.anon_key, "anon-key");
    }

    #[test]
    fn trims_trailing_slash_from_url() {
        let config =
            GatewayConfig::from_parts(Some("https://abc.supabase.co/"), Some("key")).unwrap();
        assert_eq!(config.url, "https://abc.supabase.co");
    }

    #[test]
    fn rejects_missing_url() {
        let err = GatewayConfig::from_parts(None, Some("key")).unwrap_err();
        assert_eq!(err, GatewayError::Config("SUPABASE_URL is not set".into()));
    }

    #[test]
    fn rejects_empty_key() {
        let err = GatewayConfig::from_parts(Some("https://abc.supabase.co"), Some("  ")).unwrap_err();
        assert_eq!(err, GatewayError::Config("SUPABASE_ANON_KEY is not set".into()));
    }

    #[test]
    fn rejects_unparsable_url() {
        let err = GatewayConfig::from_parts(Some("not a url"), Some("key")).unwrap_err();
        assert!(matches!(err, GatewayError::Config(_)));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = GatewayConfig::from_parts(Some("ftp://abc.supabase.co"), Some("key")).unwrap_err();
        assert!(matches!(err, GatewayError::Config(_)));
    }
}
