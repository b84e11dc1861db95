//! Token providers

use async_trait::async_trait;
use roster_core::{DomainError, RepoResult, TokenProvider};

/// Token provider returning a fixed, preconfigured token
#[derive(Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenProvider")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn token(&self) -> RepoResult<String> {
        if self.token.is_empty() {
            return Err(DomainError::Token("no API token configured".to_string()));
        }
        Ok(self.token.clone())
    }
}
