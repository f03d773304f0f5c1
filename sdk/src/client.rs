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

use std::fmt::Write;

use bytes::Bytes;
use http::header::{AUTHORIZATION, USER_AGENT};
use http::{Method, Request, StatusCode};
use log::debug;
use opensearch_core::hash::hex_md5;
use opensearch_core::utils::Redact;
use opensearch_core::{Context, ProvideCredential, Result, Signer};
use opensearch_sign::constants::CONTENT_MD5;
use opensearch_sign::{encode_path, query_string, Credential, RequestSigner};

use crate::ClientConfig;

/// Every API path starts with this prefix: `/v{version}/{type}`.
pub const API_PATH_PREFIX: &str = "/v3/openapi";

/// Version reported in the user agent.
const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// OpenSearchResult is the raw outcome of one API call.
///
/// Non-2xx responses are results too: check [`OpenSearchResult::is_success`]
/// and read the body for the service error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenSearchResult {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// Response body.
    pub result: String,
    /// Request line and headers, only filled in debug mode.
    pub trace_info: Option<String>,
}

impl OpenSearchResult {
    /// Returns `true` for 2xx responses.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Parse the body as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.result)?)
    }
}

/// OpenSearchClient signs and sends requests to the OpenSearch open API.
///
/// The client is cheap to clone; clones share the cached credential.
#[derive(Debug, Clone)]
pub struct OpenSearchClient {
    endpoint: String,
    debug: bool,
    signer: Signer<Credential>,
}

impl OpenSearchClient {
    /// Create a client that sends requests through `ctx` and loads
    /// credentials from `provider`.
    pub fn new(
        ctx: Context,
        config: &ClientConfig,
        provider: impl ProvideCredential<Credential = Credential>,
    ) -> Self {
        Self::with_signer(ctx, config, provider, RequestSigner::new())
    }

    /// Create a client with a custom [`RequestSigner`].
    pub fn with_signer(
        ctx: Context,
        config: &ClientConfig,
        provider: impl ProvideCredential<Credential = Credential>,
        signer: RequestSigner,
    ) -> Self {
        Self {
            endpoint: config.endpoint(),
            debug: config.debug,
            signer: Signer::new(ctx, provider, signer),
        }
    }

    /// Create a client with the default context and credential chain.
    ///
    /// Host and credentials missing from `config` are read from env.
    #[cfg(feature = "default-context")]
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let ctx = crate::default_context(&config)?;
        let config = config.from_env(&ctx);
        Ok(Self::new(
            ctx,
            &config,
            opensearch_sign::DefaultCredentialProvider::new(),
        ))
    }

    /// Create a client with the default context and a fixed access key.
    #[cfg(feature = "default-context")]
    pub fn from_access_key(
        access_key_id: &str,
        access_key_secret: &str,
        config: ClientConfig,
    ) -> Result<Self> {
        let ctx = crate::default_context(&config)?;
        Ok(Self::new(
            ctx,
            &config,
            opensearch_sign::StaticCredentialProvider::new(access_key_id, access_key_secret),
        ))
    }

    /// Endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send a GET request with URL parameters.
    pub async fn get(&self, uri: &str, params: &[(String, String)]) -> Result<OpenSearchResult> {
        self.call(uri, params, "", Method::GET).await
    }

    /// Send a POST request with a JSON body.
    pub async fn post(&self, uri: &str, body: &str) -> Result<OpenSearchResult> {
        self.call(uri, &[], body, Method::POST).await
    }

    /// Send a PUT request with a JSON body.
    pub async fn put(&self, uri: &str, body: &str) -> Result<OpenSearchResult> {
        self.call(uri, &[], body, Method::PUT).await
    }

    /// Send a DELETE request with a JSON body.
    pub async fn delete(&self, uri: &str, body: &str) -> Result<OpenSearchResult> {
        self.call(uri, &[], body, Method::DELETE).await
    }

    /// Send a PATCH request with a JSON body.
    pub async fn patch(&self, uri: &str, body: &str) -> Result<OpenSearchResult> {
        self.call(uri, &[], body, Method::PATCH).await
    }

    /// Sign and send one request.
    ///
    /// - `uri` is relative to [`API_PATH_PREFIX`].
    /// - `params` become the query string of GET requests, in the given order.
    /// - `body` is sent, together with its `Content-Md5`, by non-GET requests
    ///   when it's not empty.
    pub async fn call(
        &self,
        uri: &str,
        params: &[(String, String)],
        body: &str,
        method: Method,
    ) -> Result<OpenSearchResult> {
        let path = format!("{API_PATH_PREFIX}{uri}");
        let mut url = format!("{}{}", self.endpoint, encode_path(&path));

        let mut builder = Request::builder()
            .header(USER_AGENT, format!("opensearch/rust sdk {SDK_VERSION}"));
        let mut content = Bytes::new();

        if method == Method::GET {
            if !params.is_empty() {
                url.push('?');
                url.push_str(&query_string(params.iter().map(|(k, v)| (k, v))));
            }
        } else if !body.is_empty() {
            builder = builder.header(CONTENT_MD5, hex_md5(body.as_bytes()));
            content = Bytes::copy_from_slice(body.as_bytes());
        }

        debug!("sending request: {method} {url}");
        let req = builder.method(method).uri(url).body(content)?;

        let (mut parts, content) = req.into_parts();
        self.signer.sign(&mut parts, None).await?;
        let trace_info = self.debug.then(|| trace(&parts));
        let req = Request::from_parts(parts, content);

        let resp = self.signer.context().http_send_as_string(req).await?;
        debug!("got response: {}", resp.status());

        Ok(OpenSearchResult {
            status: resp.status(),
            result: resp.into_body(),
            trace_info,
        })
    }
}

/// Request line and headers with the authorization redacted.
fn trace(parts: &http::request::Parts) -> String {
    let mut s = String::new();
    let _ = writeln!(&mut s, "{} {}", parts.method, parts.uri);
    for (name, value) in parts.headers.iter() {
        let value = String::from_utf8_lossy(value.as_bytes());
        if *name == AUTHORIZATION {
            let _ = writeln!(&mut s, "{name}: {}", Redact::from(value.as_ref()));
        } else {
            let _ = writeln!(&mut s, "{name}: {value}");
        }
    }
    s
}
