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

//! Aliyun OpenSearch client.
//!
//! This crate wires [`opensearch_sign`] and [`opensearch_query`] into an HTTP
//! client for the OpenSearch v3 open API, with thin clients for apps,
//! documents, search and suggestions.
//!
//! ## Quick Start
//!
//! ```no_run
//! use opensearch_sdk::query::SearchParamsBuilder;
//! use opensearch_sdk::{ClientConfig, OpenSearchClient, Result, SearchClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Credentials come from ALIBABA_CLOUD_ACCESS_KEY_ID and
//!     // ALIBABA_CLOUD_ACCESS_KEY_SECRET.
//!     let client = OpenSearchClient::from_config(
//!         ClientConfig::new().with_host("http://opensearch-cn-hangzhou.aliyuncs.com"),
//!     )?;
//!
//!     let params = SearchParamsBuilder::new()
//!         .with_app_name("shop")
//!         .with_query("'phone'")
//!         .with_hits(10)
//!         .build();
//!
//!     let result = SearchClient::new(client).execute(&params).await?;
//!     println!("{}", result.result);
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_docs)]

pub use opensearch_core::{Context, Error, ErrorKind, OsEnv, Result, Signer, StaticEnv};

/// Request signing.
pub mod sign {
    pub use opensearch_sign::*;
}

/// Search parameters.
pub mod query {
    pub use opensearch_query::*;
}

mod config;
pub use config::{ClientConfig, OPENSEARCH_HOST};

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

mod client;
pub use client::{OpenSearchClient, OpenSearchResult, API_PATH_PREFIX};

mod app;
pub use app::{AppClient, Pageable};

mod document;
pub use document::{Command, Document, DocumentClient};

mod search;
pub use search::{SearchClient, SuggestClient};

mod engine;
pub use engine::{SearchEngine, DEFAULT_HITS};
