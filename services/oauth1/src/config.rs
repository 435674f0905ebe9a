use std::fmt::{Debug, Formatter};

use oauth1_signer_core::{utils::Redact, Context};

use crate::constants::*;
use crate::credential::Credential;

/// Config carries the credential settings for OAuth 1.0 signing.
#[derive(Clone, Default)]
pub struct Config {
    /// `consumer_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `OAUTH1_CONSUMER_KEY`
    pub consumer_key: Option<String>,
    /// `shared_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `OAUTH1_SHARED_SECRET`
    pub shared_secret: Option<String>,
    /// `token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `OAUTH1_TOKEN`
    pub token: Option<String>,
    /// `token_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `OAUTH1_TOKEN_SECRET`
    pub token_secret: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set consumer_key
    pub fn with_consumer_key(mut self, consumer_key: impl Into<String>) -> Self {
        self.consumer_key = Some(consumer_key.into());
        self
    }

    /// Set shared_secret
    pub fn with_shared_secret(mut self, shared_secret: impl Into<String>) -> Self {
        self.shared_secret = Some(shared_secret.into());
        self
    }

    /// Set token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set token_secret
    pub fn with_token_secret(mut self, token_secret: impl Into<String>) -> Self {
        self.token_secret = Some(token_secret.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(OAUTH1_CONSUMER_KEY) {
            self.consumer_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH1_SHARED_SECRET) {
            self.shared_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH1_TOKEN) {
            self.token.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH1_TOKEN_SECRET) {
            self.token_secret.get_or_insert(v);
        }

        self
    }
}

impl From<Config> for Credential {
    fn from(config: Config) -> Self {
        Credential {
            consumer_key: config.consumer_key,
            shared_secret: config.shared_secret,
            token: config.token,
            token_secret: config.token_secret,
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("consumer_key", &self.consumer_key.as_ref().map(Redact::from))
            .field("shared_secret", &self.shared_secret.as_ref().map(Redact::from))
            .field("token", &self.token.as_ref().map(Redact::from))
            .field("token_secret", &self.token_secret.as_ref().map(Redact::from))
            .finish()
    }
}
