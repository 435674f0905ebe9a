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

use log::debug;
use oauth1_signer_core::{Context, ProvideCredential, Result};

use crate::{Config, Credential};

/// EnvCredentialProvider loads OAuth 1.0 credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `OAUTH1_CONSUMER_KEY`: The consumer key
/// - `OAUTH1_SHARED_SECRET`: The consumer's shared secret
/// - `OAUTH1_TOKEN`: The token (optional)
/// - `OAUTH1_TOKEN_SECRET`: The token secret (required if a token is set)
///
/// Nothing is returned unless both the consumer key and the shared secret are set.
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider {}

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self {}
    }
}

impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = Config::default().from_env(ctx);

        match (&config.consumer_key, &config.shared_secret) {
            (Some(_), Some(_)) => Ok(Some(config.into())),
            _ => {
                debug!("oauth1 consumer key or shared secret not found in env, skipped");
                Ok(None)
            }
        }
    }
}
