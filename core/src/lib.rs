//! Core components for signing OAuth 1.0 requests.
//!
//! This crate provides the foundational types and traits shared by the signer crates.
//! It carries nothing protocol specific: the OAuth 1.0 normalization and signing rules
//! live in `oauth1-signer`.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds the environment implementation used to load configuration
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and credential validation (`SigningCredential`)
//! - **Error**: A single error type whose [`ErrorKind`] tells callers which input to fix
//!
//! ## Example
//!
//! ```
//! use oauth1_signer_core::{Context, ProvideCredential, Result, SigningCredential, StaticEnv};
//! use std::collections::HashMap;
//!
//! // Define your credential type
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty() && !self.secret.is_empty()
//!     }
//! }
//!
//! // Implement credential loader
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
//!         let (Some(key), Some(secret)) = (ctx.env_var("MY_KEY"), ctx.env_var("MY_SECRET")) else {
//!             return Ok(None);
//!         };
//!         Ok(Some(MyCredential { key, secret }))
//!     }
//! }
//!
//! let ctx = Context::new().with_env(StaticEnv {
//!     envs: HashMap::from([
//!         ("MY_KEY".to_string(), "key".to_string()),
//!         ("MY_SECRET".to_string(), "secret".to_string()),
//!     ]),
//! });
//!
//! let cred = MyLoader.provide_credential(&ctx).unwrap().unwrap();
//! assert!(cred.is_valid());
//! ```
//!
//! ## Utilities
//!
//! The crate also provides utility modules:
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, NoopEnv, OsEnv, StaticEnv};

mod api;
pub use api::{ProvideCredential, SigningCredential};

mod error;
pub use error::{Error, ErrorKind, Result};
