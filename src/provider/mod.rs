use async_trait::async_trait;
use thiserror::Error;
use url::Url;

use crate::config::ProviderConfig;

/// Errors from the identity provider's administrative interface.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("identity provider is not configured")]
    Unconfigured,

    #[error("invalid identity provider URL: {0}")]
    InvalidUrl(String),

    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned status {0}")]
    Status(u16),
}

/// Administrative interface to the external identity provider. The only
/// operation this service needs is account deletion (account-erase phase 2).
#[async_trait]
pub trait IdentityAdmin: Send + Sync {
    async fn delete_user(&self, user_id: &str) -> Result<(), ProviderError>;
}

/// Supabase-style admin client: `DELETE {base}/auth/v1/admin/users/{id}`
/// authenticated with a service-role key.
pub struct HttpIdentityAdmin {
    http: reqwest::Client,
    base_url: Option<String>,
    service_key: Option<String>,
}

impl HttpIdentityAdmin {
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.url.clone(),
            service_key: config.service_key.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some() && self.service_key.is_some()
    }

    fn admin_user_endpoint(&self, user_id: &str) -> Result<Url, ProviderError> {
        let base = self.base_url.as_deref().ok_or(ProviderError::Unconfigured)?;
        let mut url = Url::parse(base).map_err(|_| ProviderError::InvalidUrl(base.to_string()))?;

        // Url::join would discard any path already on the base, so extend
        // segments instead. This also percent-encodes the user id.
        url.path_segments_mut()
            .map_err(|_| ProviderError::InvalidUrl(base.to_string()))?
            .pop_if_empty()
            .extend(["auth", "v1", "admin", "users", user_id]);

        Ok(url)
    }
}

#[async_trait]
impl IdentityAdmin for HttpIdentityAdmin {
    async fn delete_user(&self, user_id: &str) -> Result<(), ProviderError> {
        let key = self
            .service_key
            .as_deref()
            .ok_or(ProviderError::Unconfigured)?;
        let url = self.admin_user_endpoint(user_id)?;

        let response = self
            .http
            .delete(url)
            .bearer_auth(key)
            .header("apikey", key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().as_u16()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin(url: Option<&str>, key: Option<&str>) -> HttpIdentityAdmin {
        HttpIdentityAdmin::from_config(&ProviderConfig {
            url: url.map(String::from),
            service_key: key.map(String::from),
        })
    }

    #[test]
    fn builds_admin_endpoint() {
        let client = admin(Some("https://abc.supabase.co"), Some("key"));
        let url = client.admin_user_endpoint("user-123").unwrap();
        assert_eq!(
            url.as_str(),
            "https://abc.supabase.co/auth/v1/admin/users/user-123"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_fine() {
        let client = admin(Some("https://abc.supabase.co/"), Some("key"));
        let url = client.admin_user_endpoint("u").unwrap();
        assert_eq!(url.as_str(), "https://abc.supabase.co/auth/v1/admin/users/u");
    }

    #[test]
    fn unconfigured_base_url_errors() {
        let client = admin(None, Some("key"));
        assert!(matches!(
            client.admin_user_endpoint("u").unwrap_err(),
            ProviderError::Unconfigured
        ));
        assert!(!client.is_configured());
    }
}
