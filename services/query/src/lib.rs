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

//! Search parameters for Aliyun OpenSearch.
//!
//! This crate turns a structured [`SearchParams`] into the URL parameters a
//! search request carries. The heart of it is the `query` parameter, a list of
//! clauses joined by `&&`:
//!
//! ```text
//! config=start:10,hit:20,format:fulljson&&query='phone'&&sort=-price
//! ```
//!
//! ## Example
//!
//! ```
//! use opensearch_query::{Order, SearchFormat, SearchParamsBuilder, UrlParams};
//!
//! let params = SearchParamsBuilder::new()
//!     .with_app_name("shop")
//!     .with_start(10)
//!     .with_hits(20)
//!     .with_format(SearchFormat::FullJson)
//!     .with_query("'phone'")
//!     .add_sort("price", Some(Order::Decrease))
//!     .with_fetch_fields(["title", "price"])
//!     .build();
//!
//! let url = UrlParams::from(&params);
//! assert_eq!(
//!     url.get("query"),
//!     Some("config=start:10,hit:20,format:fulljson&&query='phone'&&sort=-price")
//! );
//! assert_eq!(url.get("fetch_fields"), Some("title;price"));
//! ```
//!
//! Serialization is total: specs missing a mandatory key are skipped rather
//! than rejected, so the output stays accepted by the service.

mod builder;
pub use builder::SearchParamsBuilder;

mod clause;
pub use clause::{ClauseBuilder, ClauseDictionary, ClauseKey};

mod model;
pub use model::{
    Aggregate, DeepPaging, Distinct, Order, Rank, SearchConfig, SearchFormat, SearchParams,
    SortField, Suggest, Summary,
};

mod suggest;
pub use suggest::SuggestParamsBuilder;

mod url_params;
pub use url_params::UrlParams;

mod constants;
