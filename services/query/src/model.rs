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

//! Structured representation of one search request.
//!
//! Every optional field is skipped by the serializers when it's `None`; no
//! placeholder syntax is ever emitted for it.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use opensearch_core::Error;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Output format of search results.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchFormat {
    /// XML document.
    Xml,
    /// Compact JSON.
    Json,
    /// JSON with full hit details.
    #[default]
    FullJson,
}

impl SearchFormat {
    /// Wire name used in the config clause.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchFormat::Xml => "xml",
            SearchFormat::Json => "json",
            SearchFormat::FullJson => "fulljson",
        }
    }
}

impl Display for SearchFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchFormat {
    type Err = Error;

    /// Parse a format name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xml" => Ok(SearchFormat::Xml),
            "json" => Ok(SearchFormat::Json),
            "fulljson" => Ok(SearchFormat::FullJson),
            v => Err(Error::config_invalid(format!("unknown search format: {v}"))),
        }
    }
}

/// Sort direction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Smallest value first.
    Increase,
    /// Largest value first.
    #[default]
    Decrease,
}

impl Order {
    /// Token prepended to the field name in the sort clause.
    pub fn token(&self) -> &'static str {
        match self {
            Order::Increase => SORT_CLAUSE_INCREASE,
            Order::Decrease => SORT_CLAUSE_DECREASE,
        }
    }
}

/// Config of a search request.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Apps to search in, joined by `,` in the request path.
    pub app_names: Vec<String>,
    /// Offset of the first hit.
    pub start: Option<u32>,
    /// Number of hits to return.
    pub hits: Option<u32>,
    /// Result format.
    pub search_format: Option<SearchFormat>,
    /// Extra `key:value` pairs appended to the config clause in order.
    pub custom_config: Option<Vec<(String, String)>>,
    /// Fields to return.
    pub fetch_fields: Option<Vec<String>>,
    /// Route value for apps with a routing field.
    pub route_value: Option<String>,
    /// Raw kvpairs clause.
    pub kvpairs: Option<String>,
}

/// One field of the sort clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    /// Field or expression to sort by.
    pub field: String,
    /// Sort direction.
    #[serde(default)]
    pub order: Order,
}

/// Rank settings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rank {
    /// Coarse rank profile.
    pub first_rank_name: Option<String>,
    /// Fine rank profile.
    pub second_rank_name: Option<String>,
    /// Number of documents the fine rank looks at.
    pub re_rank_size: Option<u32>,
}

/// Deduplication by key.
///
/// A distinct without a non-empty `key` is skipped when serialized. Zero
/// counts and empty strings are left out of the group.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Distinct {
    pub key: Option<String>,
    pub dist_count: Option<u32>,
    pub dist_times: Option<u32>,
    pub reserved: Option<bool>,
    pub dist_filter: Option<String>,
    pub update_total_hit: Option<bool>,
    pub grade: Option<String>,
}

/// Statistics over a group of documents.
///
/// An aggregate without `group_key` or `agg_fun` is skipped when serialized.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Aggregate {
    pub group_key: Option<String>,
    pub agg_fun: Option<String>,
    pub range: Option<String>,
    pub max_group: Option<u32>,
    pub agg_filter: Option<String>,
    pub agg_sampler_threshold: Option<u32>,
    pub agg_sampler_step: Option<u32>,
}

/// Summary and highlight settings of one field.
///
/// A summary without `summary_field` is skipped when serialized.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    pub summary_field: Option<String>,
    pub summary_len: Option<u32>,
    pub summary_ellipsis: Option<String>,
    pub summary_snippet: Option<u32>,
    pub summary_element: Option<String>,
    pub summary_element_prefix: Option<String>,
    pub summary_element_postfix: Option<String>,
}

/// Scroll state of a deep paging search.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeepPaging {
    /// Scroll id returned by the previous page; absent on the first request.
    pub scroll_id: Option<String>,
    /// How long the scroll stays alive, for example `1m`.
    pub scroll_expire: Option<String>,
}

/// Suggestion settings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Suggest {
    /// Name of the suggestion rule.
    pub suggest_name: String,
}

/// SearchParams is everything needed to run one search request.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub config: SearchConfig,
    /// Free text query. `Some("")` is emitted, `None` is not.
    pub query: Option<String>,
    pub filter: Option<String>,
    pub sort: Option<Vec<SortField>>,
    pub rank: Rank,
    pub distincts: Option<Vec<Distinct>>,
    pub aggregates: Option<Vec<Aggregate>>,
    pub summaries: Option<Vec<Summary>>,
    pub query_processor_names: Option<Vec<String>>,
    pub disable_functions: Option<Vec<String>>,
    /// Extra URL parameters, applied after every other parameter.
    pub custom_param: Option<Vec<(String, String)>>,
    pub deep_paging: Option<DeepPaging>,
    pub suggest: Option<Suggest>,
}

/// Insert `key` into an ordered list of pairs.
///
/// An existing key keeps its position and takes the new value.
pub(crate) fn upsert(pairs: &mut Vec<(String, String)>, key: String, value: String) {
    match pairs.iter_mut().find(|(k, _)| *k == key) {
        Some((_, v)) => *v = value,
        None => pairs.push((key, value)),
    }
}
