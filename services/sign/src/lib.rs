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

//! Aliyun OpenSearch request signing.
//!
//! This crate implements the `OPENSEARCH` signature used by the OpenSearch
//! v3 open API, together with credential loading from static values, a
//! [`Config`] and environment variables.
//!
//! ## Overview
//!
//! Every request carries an `Authorization: OPENSEARCH {ak}:{signature}`
//! header. The signature is the base64 encoded HMAC-SHA1 of a canonical
//! string built from the method, `Content-Md5`, `Content-Type`, `Date`, all
//! `X-Opensearch-*` headers and the request resource. See
//! [`SigningContext::string_to_sign`] for the exact layout.
//!
//! ## Quick Start
//!
//! ```no_run
//! use opensearch_core::{Context, OsEnv, Result, Signer};
//! use opensearch_sign::{DefaultCredentialProvider, RequestSigner};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new().with_env(OsEnv);
//!     let signer = Signer::new(ctx, DefaultCredentialProvider::new(), RequestSigner::new());
//!
//!     let mut req = http::Request::get("http://opensearch-cn-hangzhou.aliyuncs.com/v3/openapi/apps")
//!         .body(())
//!         .unwrap()
//!         .into_parts()
//!         .0;
//!
//!     signer.sign(&mut req, None).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Credential Sources
//!
//! ```bash
//! export ALIBABA_CLOUD_ACCESS_KEY_ID=your-access-key-id
//! export ALIBABA_CLOUD_ACCESS_KEY_SECRET=your-access-key-secret
//! ```
//!
//! Use [`DefaultCredentialProvider::with_config`] to prefer explicit values
//! and fall back to the environment.

#![warn(missing_docs)]

mod canonical;
pub use canonical::{
    canonicalize_pairs, encode_path, natural_cmp_ignore_case, query_string, SigningContext,
};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod nonce;
pub use nonce::generate_nonce;

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;

/// Header names, fixed values and encode sets used by OpenSearch.
pub mod constants;
