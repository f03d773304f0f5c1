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

// Clause names inside the `query` parameter.
pub const CONFIG_KEY: &str = "config";
pub const QUERY_KEY: &str = "query";
pub const SORT_KEY: &str = "sort";
pub const FILTER_KEY: &str = "filter";
pub const DISTINCT_KEY: &str = "distinct";
pub const AGGREGATE_KEY: &str = "aggregate";
pub const KVPAIRS_KEY: &str = "kvpairs";

// Separators of the clause grammar.
pub const CLAUSE_SEPARATOR: &str = "&&";
pub const CLAUSE_KV_SEPARATOR: &str = "=";
pub const CLAUSE_CONFIG_SEPARATOR: &str = ",";
pub const CLAUSE_SORT_SEPARATOR: &str = ";";
pub const CLAUSE_GROUP_SEPARATOR: &str = ";";
pub const CLAUSE_GROUP_SUB_SEPARATOR: &str = ",";
pub const CLAUSE_TOKEN_KV_SEPARATOR: &str = ":";

// Config clause tokens.
pub const CONFIG_CLAUSE_START: &str = "start";
pub const CONFIG_CLAUSE_HIT: &str = "hit";
pub const CONFIG_CLAUSE_FORMAT: &str = "format";
pub const CONFIG_CLAUSE_RERANK_SIZE: &str = "rerank_size";

// Sort clause tokens.
pub const SORT_CLAUSE_INCREASE: &str = "+";
pub const SORT_CLAUSE_DECREASE: &str = "-";

// Distinct clause tokens.
pub const DISTINCT_CLAUSE_DIST_KEY: &str = "dist_key";
pub const DISTINCT_CLAUSE_DIST_COUNT: &str = "dist_count";
pub const DISTINCT_CLAUSE_DIST_TIMES: &str = "dist_times";
pub const DISTINCT_CLAUSE_RESERVED: &str = "reserved";
pub const DISTINCT_CLAUSE_DIST_FILTER: &str = "dist_filter";
pub const DISTINCT_CLAUSE_UPDATE_TOTAL_HIT: &str = "update_total_hit";
pub const DISTINCT_CLAUSE_GRADE: &str = "grade";

// Aggregate clause tokens.
pub const AGGREGATE_CLAUSE_GROUP_KEY: &str = "group_key";
pub const AGGREGATE_CLAUSE_AGG_FUN: &str = "agg_fun";
pub const AGGREGATE_CLAUSE_RANGE: &str = "range";
pub const AGGREGATE_CLAUSE_MAX_GROUP: &str = "max_group";
pub const AGGREGATE_CLAUSE_AGG_FILTER: &str = "agg_filter";
pub const AGGREGATE_CLAUSE_AGG_SAMPLER_THRESHOLD: &str = "agg_sampler_threshold";
pub const AGGREGATE_CLAUSE_AGG_SAMPLER_STEP: &str = "agg_sampler_step";

// Summary parameter tokens.
pub const SUMMARY_PARAM_SUMMARY_FIELD: &str = "summary_field";
pub const SUMMARY_PARAM_SUMMARY_LEN: &str = "summary_len";
pub const SUMMARY_PARAM_SUMMARY_ELLIPSIS: &str = "summary_ellipsis";
pub const SUMMARY_PARAM_SUMMARY_SNIPPET: &str = "summary_snippet";
pub const SUMMARY_PARAM_SUMMARY_ELEMENT: &str = "summary_element";
pub const SUMMARY_PARAM_SUMMARY_ELEMENT_PREFIX: &str = "summary_element_prefix";
pub const SUMMARY_PARAM_SUMMARY_ELEMENT_POSTFIX: &str = "summary_element_postfix";

// Top level URL parameters of a search request.
pub const QUERY: &str = "query";
pub const HITS: &str = "hits";
pub const FIRST_RANK_NAME: &str = "first_rank_name";
pub const SECOND_RANK_NAME: &str = "second_rank_name";
pub const SUMMARY: &str = "summary";
pub const FETCH_FIELDS: &str = "fetch_fields";
pub const QP: &str = "qp";
pub const DISABLE: &str = "disable";
pub const ROUTE_VALUE: &str = "route_value";
pub const SCROLL_EXPIRE: &str = "scroll";
pub const SCROLL_ID: &str = "scroll_id";
pub const SEARCH_TYPE: &str = "search_type";

// Separators of the top level URL parameters.
pub const FETCH_FIELDS_SEPARATOR: &str = ";";
pub const QP_SEPARATOR: &str = ",";
pub const DISABLE_FUNCTIONS_SEPARATOR: &str = ";";
pub const SUMMARY_SEPARATOR: &str = ";";
pub const SUMMARY_SUB_SEPARATOR: &str = ",";

/// `search_type` used to open a scroll when no scroll id is known yet.
pub const SEARCH_TYPE_SCAN: &str = "scan";

/// Condition used by `add_filter` when none is given.
pub const DEFAULT_FILTER_CONDITION: &str = "AND";
