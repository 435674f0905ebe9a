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

//! OAuth 1.0 request signer
use std::fmt;
use std::str::FromStr;

use http::HeaderValue;
use log::debug;
use oauth1_signer_core::hash::base64_hmac_sha1;
use oauth1_signer_core::time::{now, unix_timestamp, DateTime};
use oauth1_signer_core::{Context, Error, ProvideCredential, Result};

use crate::constants::*;
use crate::credential::Credential;
use crate::nonce::generate_nonce;
use crate::normalize::{is_secret_name, normalize, oauth_escape};
use crate::parameters::Parameters;

/// Signature methods supported by [`RequestSigner`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignatureMethod {
    /// HMAC-SHA1 over the signature base string.
    #[default]
    HmacSha1,
    /// The encoded secret key is sent as the signature.
    Plaintext,
}

impl SignatureMethod {
    /// The value sent as `oauth_signature_method`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureMethod::HmacSha1 => HMAC_SHA1,
            SignatureMethod::Plaintext => PLAINTEXT,
        }
    }
}

impl FromStr for SignatureMethod {
    type Err = Error;

    /// Parse a method name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            HMAC_SHA1 => Ok(SignatureMethod::HmacSha1),
            PLAINTEXT => Ok(SignatureMethod::Plaintext),
            _ => Err(Error::unsupported_signature_method(format!(
                "Unsupported signature method: {s}"
            ))),
        }
    }
}

impl fmt::Display for SignatureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Last-mile overrides applied by [`RequestSigner::sign`].
#[derive(Debug, Clone, Default)]
pub struct SignArgs {
    /// HTTP verb, replaces the configured action.
    pub action: Option<String>,
    /// Target URL without query string, replaces the configured path.
    pub path: Option<String>,
    /// Signature method name, e.g. `HMAC-SHA1`.
    pub method: Option<String>,
    /// Extra secrets, merged the same way as [`RequestSigner::set_credentials`].
    pub credentials: Vec<(String, String)>,
    /// Extra parameters, merged the same way as [`RequestSigner::set_parameters`].
    pub parameters: Option<Parameters>,
}

impl SignArgs {
    /// Create empty args: sign with what the signer already holds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set action
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Set path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set signature method
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Add credentials under canonical or alias names.
    pub fn with_credentials<I, K, V>(mut self, secrets: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.credentials
            .extend(secrets.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Add parameters, either structured or as a query string.
    pub fn with_parameters(mut self, parameters: impl Into<Parameters>) -> Self {
        match &mut self.parameters {
            Some(existing) => existing.merge(parameters.into()),
            None => self.parameters = Some(parameters.into()),
        }
        self
    }
}

/// Output of a successful [`RequestSigner::sign`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// Every parameter that was signed, plus `oauth_signature`.
    pub parameters: Parameters,
    /// The percent-encoded signature.
    pub signature: String,
    /// `path?normalized` including `oauth_signature`, usable as the request target.
    pub signed_url: String,
    /// Value of the `Authorization` header, starting with `OAuth `.
    ///
    /// Carries every `oauth_*` parameter except names containing `_secret`,
    /// which are never sent.
    pub header: String,
    /// The signature base string. Empty for `PLAINTEXT`.
    pub sbs: String,
}

impl SignedRequest {
    /// Build the `Authorization` header value, marked as sensitive.
    pub fn authorization_header(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&self.header)?;
        value.set_sensitive(true);
        Ok(value)
    }
}

/// RequestSigner that implements [OAuth 1.0](https://datatracker.ietf.org/doc/html/rfc5849) signing.
///
/// A signer is one signing session. Populate it with credentials, a target and
/// parameters, then call [`RequestSigner::sign`]. Call [`RequestSigner::reset`]
/// before reusing it for another request.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credential: Credential,
    parameters: Parameters,
    action: String,
    path: Option<String>,
    sbs: String,
    time: Option<DateTime>,
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self {
            credential: Credential::default(),
            parameters: Parameters::default(),
            action: DEFAULT_ACTION.to_string(),
            path: None,
            sbs: String::new(),
            time: None,
        }
    }
}

impl RequestSigner {
    /// Create an empty signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a signer for one-legged requests with a consumer key and its shared secret.
    pub fn with_consumer(consumer_key: &str, shared_secret: &str) -> Self {
        Self {
            credential: Credential::new(consumer_key, shared_secret),
            ..Default::default()
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Load credentials from a provider and merge them into this signer.
    pub fn with_credential_provider<P>(mut self, ctx: &Context, provider: &P) -> Result<Self>
    where
        P: ProvideCredential<Credential = Credential>,
    {
        let cred = provider
            .provide_credential(ctx)?
            .ok_or_else(|| Error::missing_credential("No credential loaded from provider"))?;
        self.credential.extend(cred);
        self.credential.check()?;
        Ok(self)
    }

    /// Merge secrets under canonical or alias names, then validate the result.
    pub fn set_credentials<I, K, V>(mut self, secrets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.credential.merge(secrets);
        self.credential.check()?;
        Ok(self)
    }

    /// Alias of [`RequestSigner::set_credentials`].
    pub fn set_tokens_and_secrets<I, K, V>(self, secrets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.set_credentials(secrets)
    }

    /// Merge secrets given as a JSON object, then validate the result.
    pub fn set_credentials_json(mut self, input: &str) -> Result<Self> {
        self.credential.merge_json(input)?;
        self.credential.check()?;
        Ok(self)
    }

    /// Merge parameters and fill the protocol defaults that are still missing.
    pub fn set_parameters(mut self, parameters: impl Into<Parameters>) -> Result<Self> {
        self.apply_parameters(parameters.into())?;
        Ok(self)
    }

    /// Alias of [`RequestSigner::set_parameters`] for a raw query string.
    pub fn set_query_string(self, query: &str) -> Result<Self> {
        self.set_parameters(Parameters::parse(query))
    }

    /// Set the HTTP verb. Input is uppercased and must only contain letters.
    pub fn set_action(mut self, action: &str) -> Result<Self> {
        self.apply_action(action)?;
        Ok(self)
    }

    /// Set the target URL, without query string.
    pub fn set_path(mut self, path: &str) -> Result<Self> {
        self.apply_path(path)?;
        Ok(self)
    }

    /// Alias of [`RequestSigner::set_path`].
    pub fn set_url(self, url: &str) -> Result<Self> {
        self.set_path(url)
    }

    /// Set `oauth_signature_method`, ignoring ASCII case.
    pub fn set_signature_method(mut self, method: &str) -> Result<Self> {
        self.apply_signature_method(method)?;
        Ok(self)
    }

    /// Drop parameters, path and the last signature base string.
    ///
    /// Credentials and action are kept.
    pub fn reset(&mut self) -> &mut Self {
        self.parameters.clear();
        self.path = None;
        self.sbs.clear();
        self
    }

    /// Parameters collected so far.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Credential used for signing.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Signature base string of the last HMAC-SHA1 signature.
    pub fn signature_base_string(&self) -> &str {
        &self.sbs
    }

    /// Normalize the current parameters.
    pub fn normalize(&self) -> String {
        normalize(&self.parameters)
    }

    /// Compute the raw, unescaped signature over `normalized`.
    pub fn generate_signature(&mut self, normalized: &str) -> Result<String> {
        let method = self
            .parameters
            .get_single(OAUTH_SIGNATURE_METHOD)
            .unwrap_or_default()
            .to_string();
        if method != PLAINTEXT && method != HMAC_SHA1 {
            return Err(Error::unsupported_signature_method(format!(
                "Unsupported signature method: {method}"
            )));
        }

        let shared_secret = self
            .credential
            .get(SHARED_SECRET)
            .ok_or_else(|| Error::missing_credential("Missing required shared_secret"))?;
        let token_secret = self.credential.get(OAUTH_SECRET).unwrap_or_default();
        let secret_key = format!(
            "{}&{}",
            oauth_escape(shared_secret),
            oauth_escape(token_secret)
        );

        if method == PLAINTEXT {
            self.sbs.clear();
            return Ok(secret_key);
        }

        let path = self
            .path
            .as_deref()
            .ok_or_else(|| Error::missing_path("No path specified"))?;
        self.sbs = format!(
            "{}&{}&{}",
            oauth_escape(&self.action),
            oauth_escape(path),
            normalized
        );
        debug!("signature base string: {}", self.sbs);

        Ok(base64_hmac_sha1(
            secret_key.as_bytes(),
            self.sbs.as_bytes(),
        ))
    }

    /// Sign the request and return the signature together with its renderings.
    pub fn sign(&mut self, args: SignArgs) -> Result<SignedRequest> {
        let SignArgs {
            action,
            path,
            method,
            credentials,
            parameters,
        } = args;

        if let Some(action) = action {
            self.apply_action(&action)?;
        }
        if let Some(path) = path {
            self.apply_path(&path)?;
        }
        if let Some(method) = method {
            self.apply_signature_method(&method)?;
        }
        self.credential.merge(credentials);
        self.credential.check()?;

        let path = self
            .path
            .clone()
            .ok_or_else(|| Error::missing_path("No path specified"))?;

        self.parameters.remove(OAUTH_SIGNATURE);
        self.apply_parameters(parameters.unwrap_or_default())?;

        let normalized = self.normalize();
        let signature = self.generate_signature(&normalized)?;
        self.parameters.insert(OAUTH_SIGNATURE, signature.as_str());

        let signed_url = format!("{path}?{}", self.normalize());

        Ok(SignedRequest {
            parameters: self.parameters.clone(),
            signature: oauth_escape(&signature),
            signed_url,
            header: self.render_header(),
            sbs: self.sbs.clone(),
        })
    }

    /// Build the `Authorization` header value, signing first if needed.
    ///
    /// Emits `name="value"` for every `oauth_*` parameter in name order, one pair
    /// per value with values sorted. Names containing `_secret` (for example
    /// `oauth_extra_secret`) are skipped like they are in the normalized string.
    pub fn header_string(&mut self) -> Result<String> {
        if !self.parameters.has_value(OAUTH_SIGNATURE) {
            self.sign(SignArgs::default())?;
        }
        Ok(self.render_header())
    }

    fn apply_action(&mut self, action: &str) -> Result<()> {
        let action = action.to_ascii_uppercase();
        if action.is_empty() || !action.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(Error::invalid_action("Invalid action specified"));
        }

        self.action = action;
        Ok(())
    }

    fn apply_path(&mut self, path: &str) -> Result<()> {
        if path.is_empty() {
            return Err(Error::missing_path("No path specified"));
        }

        self.path = Some(path.to_string());
        Ok(())
    }

    fn apply_signature_method(&mut self, method: &str) -> Result<()> {
        let method = SignatureMethod::from_str(method)?;
        self.parameters
            .insert(OAUTH_SIGNATURE_METHOD, method.as_str());
        Ok(())
    }

    fn apply_parameters(&mut self, parameters: Parameters) -> Result<()> {
        self.parameters.merge(parameters);
        self.fill_defaults()
    }

    fn fill_defaults(&mut self) -> Result<()> {
        let now = self.time.unwrap_or_else(now);

        if !self.parameters.has_value(OAUTH_NONCE) {
            self.parameters
                .insert(OAUTH_NONCE, generate_nonce(DEFAULT_NONCE_LENGTH));
        }
        if !self.parameters.has_value(OAUTH_TIMESTAMP) {
            self.parameters
                .insert(OAUTH_TIMESTAMP, unix_timestamp(now));
        }
        if !self.parameters.has_value(OAUTH_CONSUMER_KEY) {
            let consumer_key = self
                .credential
                .get(OAUTH_CONSUMER_KEY)
                .ok_or_else(|| Error::missing_credential("No oauth_consumer_key set"))?;
            self.parameters.insert(OAUTH_CONSUMER_KEY, consumer_key);
        }
        if !self.parameters.has_value(OAUTH_TOKEN) && self.credential.get(OAUTH_SECRET).is_some()
        {
            let token = self
                .credential
                .get(OAUTH_TOKEN)
                .ok_or_else(|| Error::missing_credential("No oauth_token set"))?;
            self.parameters.insert(OAUTH_TOKEN, token);
        }
        if !self.parameters.has_value(OAUTH_SIGNATURE_METHOD) {
            self.parameters
                .insert(OAUTH_SIGNATURE_METHOD, SignatureMethod::default().as_str());
        }
        if !self.parameters.has_value(OAUTH_VERSION) {
            self.parameters.insert(OAUTH_VERSION, OAUTH_VERSION_1_0);
        }

        Ok(())
    }

    fn render_header(&self) -> String {
        let pairs: Vec<String> = self
            .parameters
            .iter()
            .filter(|(name, _)| name.starts_with(OAUTH_PARAM_PREFIX) && !is_secret_name(name))
            .flat_map(|(name, value)| {
                let mut values: Vec<&str> = value.iter().collect();
                values.sort_unstable();
                values
                    .into_iter()
                    .map(move |v| format!("{name}=\"{}\"", oauth_escape(v)))
            })
            .collect();

        format!("OAuth {}", pairs.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use oauth1_signer_core::time::parse_rfc3339;
    use oauth1_signer_core::ErrorKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    const NETFLIX_PATH: &str = "http://api.netflix.com/catalog/titles";
    const NETFLIX_QUERY: &str = "term=mac%20and+me&expand=formats,synopsis&max_results=1&v=2.0&output=json";

    fn netflix_signer() -> RequestSigner {
        RequestSigner::with_consumer("v9s778n692e9qvd83wfj9t8c", "54XqbMADta")
            .with_time(parse_rfc3339("2007-10-01T12:34:56Z").expect("time must be valid"))
            .set_path(NETFLIX_PATH)
            .expect("path must be valid")
    }

    #[test]
    fn test_sign_hmac_sha1() -> anyhow::Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut signer = netflix_signer()
            .set_query_string(NETFLIX_QUERY)?
            .set_parameters(vec![("oauth_nonce", "kllo9")])?;
        let signed = signer.sign(SignArgs::new())?;

        assert_eq!(signed.signature, "kfXmijaukS5GxSgaW7%2Bakz3lOrI%3D");
        assert_eq!(
            signed.parameters.get_single(OAUTH_SIGNATURE),
            Some("kfXmijaukS5GxSgaW7+akz3lOrI=")
        );
        assert_eq!(
            signed.sbs,
            "GET&http%3A%2F%2Fapi.netflix.com%2Fcatalog%2Ftitles&expand=formats%2Csynopsis&max_results=1&oauth_consumer_key=v9s778n692e9qvd83wfj9t8c&oauth_nonce=kllo9&oauth_signature_method=HMAC-SHA1&oauth_timestamp=1191242096&oauth_version=1.0&output=json&term=mac%20and%20me&v=2.0"
        );
        assert_eq!(signer.signature_base_string(), signed.sbs);
        Ok(())
    }

    #[test]
    fn test_sign_with_token() -> anyhow::Result<()> {
        let mut signer = RequestSigner::new()
            .set_credentials([
                ("consumer_key", "ck"),
                ("shared_secret", "cs"),
                ("access_token", "tok"),
                ("access_token_secret", "ts"),
            ])?
            .set_action("post")?
            .set_url("https://example.com/resource")?;

        let mut params = Parameters::new();
        params.insert("a", vec!["2", "1"]);
        params.insert("b", "x y");
        params.insert(OAUTH_NONCE, "nonce");
        params.insert(OAUTH_TIMESTAMP, "1300000000");

        let signed = signer.sign(SignArgs::new().with_parameters(params))?;

        assert_eq!(
            signed.parameters.get_single(OAUTH_SIGNATURE),
            Some("IAZ6PPjlo4PE3jEo/EE9ls5bSQg=")
        );
        assert_eq!(signed.parameters.get_single(OAUTH_TOKEN), Some("tok"));
        assert!(signed.sbs.starts_with("POST&https%3A%2F%2Fexample.com%2Fresource&a=1&a=2&b=x%20y&"));
        Ok(())
    }

    #[test_case("S", None, "S&"; "no token secret")]
    #[test_case("s&cret", Some("t/s"), "s%26cret&t%2Fs"; "escaped secrets")]
    fn test_generate_signature_plaintext(shared_secret: &str, token_secret: Option<&str>, expected: &str) {
        let mut signer = RequestSigner::with_consumer("ck", shared_secret);
        if let Some(ts) = token_secret {
            signer = signer
                .set_credentials([("oauth_token", "tok"), ("oauth_secret", ts)])
                .expect("credentials must be valid");
        }
        let mut signer = signer
            .set_signature_method("plaintext")
            .expect("method must be supported");

        let signature = signer.generate_signature("").expect("must sign");
        assert_eq!(signature, expected);
        assert_eq!(signer.signature_base_string(), "");
    }

    #[test]
    fn test_generate_signature_unsupported() {
        let mut signer = RequestSigner::with_consumer("ck", "cs")
            .set_path(NETFLIX_PATH)
            .expect("path must be valid");

        // Missing method.
        let err = signer.generate_signature("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedSignatureMethod);

        let mut signer = signer
            .set_parameters(vec![(OAUTH_SIGNATURE_METHOD, "RSA-SHA1")])
            .expect("parameters must be accepted");
        let err = signer.generate_signature("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedSignatureMethod);
    }

    #[test_case("HMAC-SHA1", Ok(SignatureMethod::HmacSha1); "hmac")]
    #[test_case("hmac-sha1", Ok(SignatureMethod::HmacSha1); "hmac lowercase")]
    #[test_case("PlainText", Ok(SignatureMethod::Plaintext); "plaintext mixed case")]
    #[test_case("RSA-SHA1", Err(ErrorKind::UnsupportedSignatureMethod); "rsa")]
    #[test_case("", Err(ErrorKind::UnsupportedSignatureMethod); "empty")]
    fn test_signature_method_from_str(input: &str, expected: std::result::Result<SignatureMethod, ErrorKind>) {
        let got = SignatureMethod::from_str(input).map_err(|e| e.kind());
        assert_eq!(got, expected);
    }

    #[test_case("get", Ok("GET"); "lowercase")]
    #[test_case("Delete", Ok("DELETE"); "mixed case")]
    #[test_case("", Err(ErrorKind::InvalidAction); "empty")]
    #[test_case("GET1", Err(ErrorKind::InvalidAction); "digit")]
    #[test_case("GE T", Err(ErrorKind::InvalidAction); "space")]
    fn test_set_action(input: &str, expected: std::result::Result<&str, ErrorKind>) {
        let got = RequestSigner::new()
            .set_action(input)
            .map(|s| s.action)
            .map_err(|e| e.kind());
        assert_eq!(got.as_deref().map_err(|e| *e), expected);
    }

    #[test]
    fn test_set_path_empty() {
        let err = RequestSigner::new().set_path("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingPath);
        assert_eq!(err.to_string(), "No path specified");
    }

    #[test]
    fn test_set_parameters_fills_defaults() -> anyhow::Result<()> {
        let signer = netflix_signer().set_parameters("a=1")?;
        let params = signer.parameters();

        assert_eq!(params.get_single(OAUTH_NONCE).map(str::len), Some(DEFAULT_NONCE_LENGTH));
        assert_eq!(params.get_single(OAUTH_TIMESTAMP), Some("1191242096"));
        assert_eq!(
            params.get_single(OAUTH_CONSUMER_KEY),
            Some("v9s778n692e9qvd83wfj9t8c")
        );
        assert_eq!(params.get_single(OAUTH_SIGNATURE_METHOD), Some(HMAC_SHA1));
        assert_eq!(params.get_single(OAUTH_VERSION), Some(OAUTH_VERSION_1_0));
        assert!(!params.contains_key(OAUTH_TOKEN));
        Ok(())
    }

    #[test]
    fn test_set_parameters_keeps_supplied_values() -> anyhow::Result<()> {
        let signer = netflix_signer().set_parameters(vec![
            (OAUTH_NONCE, "fixed"),
            (OAUTH_TIMESTAMP, "42"),
            (OAUTH_VERSION, "1.0a"),
        ])?;
        let params = signer.parameters();

        assert_eq!(params.get_single(OAUTH_NONCE), Some("fixed"));
        assert_eq!(params.get_single(OAUTH_TIMESTAMP), Some("42"));
        assert_eq!(params.get_single(OAUTH_VERSION), Some("1.0a"));
        Ok(())
    }

    #[test]
    fn test_set_parameters_without_consumer_key() {
        let err = RequestSigner::new().set_parameters("a=1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingCredential);
        assert_eq!(err.to_string(), "No oauth_consumer_key set");
    }

    #[test]
    fn test_set_parameters_token_secret_without_token() -> anyhow::Result<()> {
        let signer = RequestSigner::with_consumer("ck", "cs").set_credentials([("oauth_secret", "ts")])?;

        let err = signer.set_parameters("a=1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingCredential);
        assert_eq!(err.to_string(), "No oauth_token set");
        Ok(())
    }

    #[test]
    fn test_sign_without_path() {
        let err = RequestSigner::with_consumer("ck", "cs")
            .sign(SignArgs::new())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingPath);
    }

    #[test]
    fn test_sign_without_credentials() {
        let err = RequestSigner::new()
            .sign(SignArgs::new().with_path(NETFLIX_PATH))
            .unwrap_err();
        assert!(err.is_credential_error());
    }

    #[test]
    fn test_sign_twice_replaces_signature() -> anyhow::Result<()> {
        let mut signer = netflix_signer()
            .set_query_string(NETFLIX_QUERY)?
            .set_parameters(vec![("oauth_nonce", "kllo9")])?;

        let first = signer.sign(SignArgs::new())?;
        let second = signer.sign(SignArgs::new())?;

        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_header_string_signs_on_demand() -> anyhow::Result<()> {
        let mut signer = netflix_signer()
            .set_query_string(NETFLIX_QUERY)?
            .set_parameters(vec![("oauth_nonce", "kllo9")])?;

        let header = signer.header_string()?;
        assert_eq!(
            header,
            r#"OAuth oauth_consumer_key="v9s778n692e9qvd83wfj9t8c", oauth_nonce="kllo9", oauth_signature="kfXmijaukS5GxSgaW7%2Bakz3lOrI%3D", oauth_signature_method="HMAC-SHA1", oauth_timestamp="1191242096", oauth_version="1.0""#
        );
        Ok(())
    }

    #[test]
    fn test_header_string_multi_valued_sorted() -> anyhow::Result<()> {
        let mut params = Parameters::new();
        params.insert("oauth_callback", vec!["b", "a"]);
        params.insert(OAUTH_NONCE, "nonce");
        params.insert(OAUTH_TIMESTAMP, "1300000000");

        let mut signer = RequestSigner::with_consumer("ck", "cs")
            .set_path("https://example.com/resource")?
            .set_signature_method("PLAINTEXT")?
            .set_parameters(params)?;
        let signed = signer.sign(SignArgs::new())?;

        assert_eq!(
            signed.header,
            r#"OAuth oauth_callback="a", oauth_callback="b", oauth_consumer_key="ck", oauth_nonce="nonce", oauth_signature="cs%26", oauth_signature_method="PLAINTEXT", oauth_timestamp="1300000000", oauth_version="1.0""#
        );
        assert!(signed
            .signed_url
            .starts_with("https://example.com/resource?oauth_callback=a&oauth_callback=b&"));
        Ok(())
    }

    #[test]
    fn test_header_string_skips_secret_names() -> anyhow::Result<()> {
        let mut signer = netflix_signer().set_parameters(vec![("oauth_extra_secret", "hidden")])?;

        let header = signer.header_string()?;
        assert!(!header.contains("oauth_extra_secret"));
        assert!(!header.contains("hidden"));
        Ok(())
    }

    #[test]
    fn test_reset() -> anyhow::Result<()> {
        let mut signer = netflix_signer().set_query_string(NETFLIX_QUERY)?;
        signer.sign(SignArgs::new())?;

        signer.reset();
        assert!(signer.parameters().is_empty());
        assert_eq!(signer.signature_base_string(), "");
        assert_eq!(signer.credential(), &Credential::new("v9s778n692e9qvd83wfj9t8c", "54XqbMADta"));
        Ok(())
    }

    #[test]
    fn test_authorization_header_is_sensitive() -> anyhow::Result<()> {
        let mut signer = netflix_signer();
        let signed = signer.sign(SignArgs::new())?;

        let value = signed.authorization_header()?;
        assert!(value.is_sensitive());
        assert_eq!(value.to_str()?, signed.header);
        Ok(())
    }
}
