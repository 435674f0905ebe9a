// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};

use log::debug;
use oauth1_signer_core::utils::Redact;
use oauth1_signer_core::{Error, Result, SigningCredential};

use crate::constants::*;

/// Credential holds the consumer key and secret plus an optional token pair.
///
/// Fields are keyed by their canonical names: `oauth_consumer_key`,
/// `shared_secret`, `oauth_token` and `oauth_secret`. Empty strings are treated
/// as absent.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Consumer key, sent as `oauth_consumer_key`.
    pub consumer_key: Option<String>,
    /// Shared secret of the consumer.
    pub shared_secret: Option<String>,
    /// Token, sent as `oauth_token`.
    pub token: Option<String>,
    /// Secret of the token.
    pub token_secret: Option<String>,
}

impl Credential {
    /// Create a consumer-only credential, enough for one-legged requests.
    pub fn new(consumer_key: impl Into<String>, shared_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: Some(consumer_key.into()),
            shared_secret: Some(shared_secret.into()),
            ..Default::default()
        }
    }

    /// Attach a token and its secret.
    pub fn with_token(mut self, token: impl Into<String>, token_secret: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self.token_secret = Some(token_secret.into());
        self
    }

    /// Look up a credential by canonical name.
    ///
    /// Aliases such as `api_key` are rewritten on the way in, so they never resolve here.
    pub fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            OAUTH_CONSUMER_KEY => &self.consumer_key,
            SHARED_SECRET => &self.shared_secret,
            OAUTH_TOKEN => &self.token,
            OAUTH_SECRET => &self.token_secret,
            _ => return None,
        };
        non_empty(value)
    }

    /// Merge named secrets into this credential.
    ///
    /// Canonical names are applied first and aliases second, so an alias wins
    /// when both spellings are given at once. Names that are set overwrite the
    /// existing value; names that are not given keep it. Unknown names are ignored.
    pub fn merge<I, K, V>(&mut self, secrets: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut aliased = Vec::new();
        for (name, value) in secrets {
            let name = name.as_ref();
            if let Some((_, canonical)) = CREDENTIAL_ALIASES.iter().find(|(a, _)| *a == name) {
                aliased.push((*canonical, value.into()));
            } else if !self.set(name, value.into()) {
                debug!("ignore unrecognized credential name: {name}");
            }
        }

        for (canonical, value) in aliased {
            self.set(canonical, value);
        }
    }

    /// Build a credential from a JSON object, see [`Credential::merge_json`].
    pub fn from_json(input: &str) -> Result<Self> {
        let mut cred = Self::default();
        cred.merge_json(input)?;
        Ok(cred)
    }

    /// Merge secrets given as a JSON object such as `{"api_key": "...", "shared_secret": "..."}`.
    ///
    /// Fails with `InvalidInputType` if the input is not an object or any value is
    /// neither a string nor `null`. `null` values are skipped.
    pub fn merge_json(&mut self, input: &str) -> Result<()> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        let serde_json::Value::Object(map) = value else {
            return Err(Error::invalid_input_type(
                "credentials must be given as a JSON object",
            ));
        };

        let mut secrets = Vec::with_capacity(map.len());
        for (name, value) in map {
            match value {
                serde_json::Value::String(v) => secrets.push((name, v)),
                serde_json::Value::Null => continue,
                _ => {
                    return Err(Error::invalid_input_type(format!(
                        "credential {name} must be a string"
                    )))
                }
            }
        }

        self.merge(secrets);
        Ok(())
    }

    /// Overlay another credential: fields set in `other` replace ours.
    pub fn extend(&mut self, other: Credential) {
        let Credential {
            consumer_key,
            shared_secret,
            token,
            token_secret,
        } = other;

        if consumer_key.is_some() {
            self.consumer_key = consumer_key;
        }
        if shared_secret.is_some() {
            self.shared_secret = shared_secret;
        }
        if token.is_some() {
            self.token = token;
        }
        if token_secret.is_some() {
            self.token_secret = token_secret;
        }
    }

    /// Check that the credential is complete enough to sign with.
    pub fn check(&self) -> Result<()> {
        if non_empty(&self.consumer_key).is_none() {
            return Err(Error::missing_credential(
                "Missing required oauth_consumer_key",
            ));
        }
        if non_empty(&self.shared_secret).is_none() {
            return Err(Error::missing_credential("Missing required shared_secret"));
        }
        if non_empty(&self.token).is_some() && non_empty(&self.token_secret).is_none() {
            return Err(Error::missing_credential(
                "Missing oauth_secret for supplied oauth_token",
            ));
        }

        Ok(())
    }

    fn set(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            OAUTH_CONSUMER_KEY => &mut self.consumer_key,
            SHARED_SECRET => &mut self.shared_secret,
            OAUTH_TOKEN => &mut self.token,
            OAUTH_SECRET => &mut self.token_secret,
            _ => return false,
        };
        *slot = Some(value);
        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("consumer_key", &Redact::from(&self.consumer_key))
            .field("shared_secret", &Redact::from(&self.shared_secret))
            .field("token", &Redact::from(&self.token))
            .field("token_secret", &Redact::from(&self.token_secret))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        self.check().is_ok()
    }
}
