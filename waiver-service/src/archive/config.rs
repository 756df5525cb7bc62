use std::env;

pub const DEFAULT_EXCEL_FILE_PATH: &str = "/Shared Documents/waiver_submissions.xlsx";
pub const DEFAULT_WORKSHEET_NAME: &str = "Sheet1";
pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.microsoft.com/v1.0";
pub const DEFAULT_LOGIN_BASE_URL: &str = "https://login.microsoftonline.com";

fn parse_env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string()).trim().to_string()
}

fn parse_env_secret(name: &str) -> Option<String> {
    env::var(name).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

/// Archival target settings, read once at startup. Absence of the
/// three credential values disables archival entirely; that is a
/// normal deployment mode, not an error.
#[derive(Debug, Clone)]
pub struct SharePointConfig {
    pub tenant_id: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub site_url: String,
    pub excel_file_path: String,
    pub worksheet_name: String,
    /// Overridable so tests can point the pipeline at a local server.
    pub graph_base_url: String,
    pub login_base_url: String,
}

impl SharePointConfig {
    pub fn from_env() -> Self {
        SharePointConfig {
            tenant_id: parse_env_secret("AZURE_TENANT_ID"),
            client_id: parse_env_secret("AZURE_CLIENT_ID"),
            client_secret: parse_env_secret("AZURE_CLIENT_SECRET"),
            site_url: parse_env_string("SHAREPOINT_SITE_URL", ""),
            excel_file_path: parse_env_string("SHAREPOINT_EXCEL_FILE_PATH", DEFAULT_EXCEL_FILE_PATH),
            worksheet_name: parse_env_string("SHAREPOINT_WORKSHEET_NAME", DEFAULT_WORKSHEET_NAME),
            graph_base_url: parse_env_string("GRAPH_BASE_URL", DEFAULT_GRAPH_BASE_URL),
            login_base_url: parse_env_string("GRAPH_LOGIN_BASE_URL", DEFAULT_LOGIN_BASE_URL),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.tenant_id.is_some() && self.client_id.is_some() && self.client_secret.is_some()
    }

    /// The Graph site reference `hostname:/path` derived from the
    /// configured site URL, e.g.
    /// `contoso.sharepoint.com:/sites/waivers`.
    pub fn site_reference(&self) -> Option<String> {
        let url = reqwest::Url::parse(&self.site_url).ok()?;
        let host = url.host_str()?;
        let path = url.path().trim_end_matches('/');
        if path.is_empty() {
            Some(host.to_string())
        } else {
            Some(format!("{}:{}", host, path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_config() -> SharePointConfig {
        SharePointConfig {
            tenant_id: None,
            client_id: None,
            client_secret: None,
            site_url: String::new(),
            excel_file_path: DEFAULT_EXCEL_FILE_PATH.to_string(),
            worksheet_name: DEFAULT_WORKSHEET_NAME.to_string(),
            graph_base_url: DEFAULT_GRAPH_BASE_URL.to_string(),
            login_base_url: DEFAULT_LOGIN_BASE_URL.to_string(),
        }
    }

    #[test]
    fn test_unconfigured_without_all_three_credentials() {
        let mut config = bare_config();
        assert!(!config.is_configured());
        config.tenant_id = Some("tenant".to_string());
        config.client_id = Some("client".to_string());
        assert!(!config.is_configured());
        config.client_secret = Some("secret".to_string());
        assert!(config.is_configured());
    }

    #[test]
    fn test_site_reference_includes_path() {
        let mut config = bare_config();
        config.site_url = "https://contoso.sharepoint.com/sites/waivers".to_string();
        assert_eq!(config.site_reference().as_deref(), Some("contoso.sharepoint.com:/sites/waivers"));
    }

    #[test]
    fn test_site_reference_root_site() {
        let mut config = bare_config();
        config.site_url = "https://contoso.sharepoint.com/".to_string();
        assert_eq!(config.site_reference().as_deref(), Some("contoso.sharepoint.com"));
    }

    #[test]
    fn test_site_reference_rejects_garbage() {
        let mut config = bare_config();
        config.site_url = "not a url".to_string();
        assert!(config.site_reference().is_none());
    }
}
