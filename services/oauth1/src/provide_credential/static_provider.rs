use oauth1_signer_core::{Context, ProvideCredential, Result};

use crate::Credential;

/// StaticCredentialProvider provides static credentials that are provided at initialization time.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with a consumer key and shared secret.
    pub fn new(consumer_key: &str, shared_secret: &str) -> Self {
        Self {
            credential: Credential::new(consumer_key, shared_secret),
        }
    }

    /// Add a token and its secret for requests made on behalf of a user.
    pub fn with_token(mut self, token: &str, token_secret: &str) -> Self {
        self.credential = self.credential.with_token(token, token_secret);
        self
    }
}

impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_credential_provider() -> anyhow::Result<()> {
        let ctx = Context::new();

        let provider = StaticCredentialProvider::new("test_key", "test_secret");
        let cred = provider.provide_credential(&ctx)?;
        assert_eq!(cred, Some(Credential::new("test_key", "test_secret")));

        let provider = provider.with_token("test_token", "test_token_secret");
        let cred = provider.provide_credential(&ctx)?.unwrap();
        assert_eq!(cred.token.as_deref(), Some("test_token"));
        assert_eq!(cred.token_secret.as_deref(), Some("test_token_secret"));

        Ok(())
    }
}
