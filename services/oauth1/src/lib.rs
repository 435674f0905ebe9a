//! OAuth 1.0 request signing.
//!
//! This crate computes [OAuth 1.0](https://datatracker.ietf.org/doc/html/rfc5849)
//! signatures for a single, fully specified request. It never sends the request
//! itself: the output is a signed URL and an `Authorization` header value that the
//! caller attaches to whatever HTTP client it uses.
//!
//! ## Overview
//!
//! Signing runs in one direction:
//!
//! 1. [`Credential`] holds the consumer key and shared secret, plus an optional
//!    token and token secret.
//! 2. [`Parameters`] collects the request parameters together with the protocol
//!    parameters (`oauth_nonce`, `oauth_timestamp`, ...) that [`RequestSigner`] fills in.
//! 3. [`normalize`] encodes and orders the parameters.
//! 4. [`RequestSigner::sign`] builds the signature base string, signs it with
//!    `HMAC-SHA1` or `PLAINTEXT`, and returns a [`SignedRequest`].
//!
//! ## Quick Start
//!
//! ```
//! use oauth1_signer::{RequestSigner, SignArgs};
//!
//! fn main() -> oauth1_signer_core::Result<()> {
//!     let mut signer = RequestSigner::with_consumer("consumer-key", "shared-secret")
//!         .set_path("http://api.example.com/catalog/titles")?
//!         .set_query_string("term=mac and me&max_results=1")?;
//!
//!     let signed = signer.sign(SignArgs::new())?;
//!     assert!(signed.signed_url.contains("oauth_signature="));
//!     assert!(signed.header.starts_with("OAuth "));
//!     Ok(())
//! }
//! ```
//!
//! ## Credential Sources
//!
//! Credentials can be set directly, merged from `(name, value)` pairs or JSON, or
//! loaded through a [`oauth1_signer_core::ProvideCredential`] implementation:
//!
//! - [`StaticCredentialProvider`]: fixed values given at construction.
//! - [`EnvCredentialProvider`]: reads `OAUTH1_CONSUMER_KEY`, `OAUTH1_SHARED_SECRET`,
//!   `OAUTH1_TOKEN` and `OAUTH1_TOKEN_SECRET`.
//!
//! ```
//! use oauth1_signer::{EnvCredentialProvider, RequestSigner};
//! use oauth1_signer_core::{Context, OsEnv};
//!
//! let ctx = Context::new().with_env(OsEnv);
//! match RequestSigner::new().with_credential_provider(&ctx, &EnvCredentialProvider::new()) {
//!     Ok(signer) => println!("loaded {:?}", signer.credential()),
//!     Err(err) => println!("no credential: {err}"),
//! }
//! ```

#![warn(missing_docs)]

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod parameters;
pub use parameters::{ParamValue, Parameters};

mod normalize;
pub use normalize::{normalize, oauth_escape};

mod nonce;
pub use nonce::generate_nonce;

mod sign_request;
pub use sign_request::{RequestSigner, SignArgs, SignatureMethod, SignedRequest};

mod provide_credential;
pub use provide_credential::*;
