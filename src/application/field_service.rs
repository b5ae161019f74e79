//! Field-service API endpoint - base URL and credential shared by workflows.

use secrecy::{ExposeSecret, Secret};

use crate::config::ServiceConfig;
use crate::ports::OutboundRequest;

/// Header carrying the service credential.
pub const JWT_HEADER: &str = "x-jwt-token";

/// Beat creation endpoint.
pub const SERVICE_BEAT_PATH: &str = "/service-flow/service-beat";

/// Admin endpoint that drops a single cache key.
pub const CACHE_DELETE_PATH: &str = "/fse/admin/redis/delete";

/// Where the field-service API lives and how to authenticate against it.
#[derive(Debug, Clone)]
pub struct FieldServiceEndpoint {
    base_url: String,
    jwt_token: Secret<String>,
}

impl FieldServiceEndpoint {
    pub fn new(base_url: impl Into<String>, jwt_token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            jwt_token: Secret::new(jwt_token.into()),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(config.base_url(), config.jwt_token())
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// An authenticated POST to `path`.
    pub fn post(&self, path: &str) -> OutboundRequest {
        OutboundRequest::post(self.url(path))
            .with_header(JWT_HEADER, self.jwt_token.expose_secret().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_without_double_slash() {
        let endpoint = FieldServiceEndpoint::new("https://fse.example.com/", "tok");
        assert_eq!(
            endpoint.url(SERVICE_BEAT_PATH),
            "https://fse.example.com/service-flow/service-beat"
        );
    }

    #[test]
    fn post_carries_credential() {
        let endpoint = FieldServiceEndpoint::new("https://fse.example.com", "tok");
        let request = endpoint.post(CACHE_DELETE_PATH);
        assert_eq!(request.header(JWT_HEADER), Some("tok"));
        assert!(request.body.is_none());
    }

    #[test]
    fn debug_hides_token() {
        let endpoint = FieldServiceEndpoint::new("https://fse.example.com", "very-secret");
        assert!(!format!("{:?}", endpoint).contains("very-secret"));
    }
}
