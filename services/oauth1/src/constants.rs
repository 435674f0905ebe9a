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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Protocol parameters.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_NONCE: &str = "oauth_nonce";
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_TOKEN: &str = "oauth_token";
pub const OAUTH_VERSION: &str = "oauth_version";

/// Prefix shared by every protocol parameter that goes into the `Authorization` header.
pub const OAUTH_PARAM_PREFIX: &str = "oauth_";

// Secret names, never signed.
pub const SHARED_SECRET: &str = "shared_secret";
pub const OAUTH_SECRET: &str = "oauth_secret";

// Credential aliases and the canonical names they are rewritten to.
pub const CREDENTIAL_ALIASES: [(&str, &str); 4] = [
    ("api_key", OAUTH_CONSUMER_KEY),
    ("consumer_key", OAUTH_CONSUMER_KEY),
    ("access_token", OAUTH_TOKEN),
    ("access_token_secret", OAUTH_SECRET),
];

// Env values used to configure credentials.
pub const OAUTH1_CONSUMER_KEY: &str = "OAUTH1_CONSUMER_KEY";
pub const OAUTH1_SHARED_SECRET: &str = "OAUTH1_SHARED_SECRET";
pub const OAUTH1_TOKEN: &str = "OAUTH1_TOKEN";
pub const OAUTH1_TOKEN_SECRET: &str = "OAUTH1_TOKEN_SECRET";

// Signature methods.
pub const HMAC_SHA1: &str = "HMAC-SHA1";
pub const PLAINTEXT: &str = "PLAINTEXT";

pub const OAUTH_VERSION_1_0: &str = "1.0";
pub const DEFAULT_ACTION: &str = "GET";
pub const DEFAULT_NONCE_LENGTH: usize = 5;

/// AsciiSet for [OAuth 1.0 percent encoding](https://datatracker.ietf.org/doc/html/rfc5849#section-3.6)
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static OAUTH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
