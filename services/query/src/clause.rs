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

//! Serialization of [`SearchParams`] into the `query` parameter.
//!
//! The grammar is `name=value(&&name=value)*` where the clauses always come
//! in this order: config, query, sort, filter, distinct, aggregate, kvpairs.

use std::fmt::{Display, Formatter};

use crate::constants::*;
use crate::model::*;

/// Name of a clause inside the `query` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseKey {
    /// `config`
    Config,
    /// `query`
    Query,
    /// `sort`
    Sort,
    /// `filter`
    Filter,
    /// `distinct`
    Distinct,
    /// `aggregate`
    Aggregate,
    /// `kvpairs`
    Kvpairs,
}

impl ClauseKey {
    /// Wire name of this clause.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClauseKey::Config => CONFIG_KEY,
            ClauseKey::Query => QUERY_KEY,
            ClauseKey::Sort => SORT_KEY,
            ClauseKey::Filter => FILTER_KEY,
            ClauseKey::Distinct => DISTINCT_KEY,
            ClauseKey::Aggregate => AGGREGATE_KEY,
            ClauseKey::Kvpairs => KVPAIRS_KEY,
        }
    }
}

/// Serialized clauses in emission order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClauseDictionary {
    clauses: Vec<(ClauseKey, String)>,
}

impl ClauseDictionary {
    /// Serialized value of `key`, if that clause was emitted.
    pub fn get(&self, key: ClauseKey) -> Option<&str> {
        self.clauses
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over emitted clauses in order.
    pub fn iter(&self) -> impl Iterator<Item = (ClauseKey, &str)> {
        self.clauses.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Number of emitted clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Returns `true` if no clause was emitted.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl Display for ClauseDictionary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (idx, (k, v)) in self.clauses.iter().enumerate() {
            if idx != 0 {
                f.write_str(CLAUSE_SEPARATOR)?;
            }
            write!(f, "{}{CLAUSE_KV_SEPARATOR}{v}", k.as_str())?;
        }
        Ok(())
    }
}

/// ClauseBuilder turns [`SearchParams`] into a [`ClauseDictionary`].
///
/// Building never fails: a distinct without key or an aggregate without
/// group key or function contributes nothing to its clause.
#[derive(Debug, Clone, Copy)]
pub struct ClauseBuilder<'a> {
    params: &'a SearchParams,
}

impl<'a> ClauseBuilder<'a> {
    /// Create a builder borrowing `params`.
    pub fn new(params: &'a SearchParams) -> Self {
        Self { params }
    }

    /// Build every clause.
    pub fn build(&self) -> ClauseDictionary {
        let mut clauses = Vec::with_capacity(7);

        clauses.push((ClauseKey::Config, self.config_clause()));
        if let Some(query) = &self.params.query {
            clauses.push((ClauseKey::Query, query.clone()));
        }
        if let Some(sort) = self.sort_clause() {
            clauses.push((ClauseKey::Sort, sort));
        }
        if let Some(filter) = &self.params.filter {
            clauses.push((ClauseKey::Filter, filter.clone()));
        }
        if let Some(distinct) = self.distinct_clause() {
            clauses.push((ClauseKey::Distinct, distinct));
        }
        if let Some(aggregate) = self.aggregate_clause() {
            clauses.push((ClauseKey::Aggregate, aggregate));
        }
        if let Some(kvpairs) = &self.params.config.kvpairs {
            clauses.push((ClauseKey::Kvpairs, kvpairs.clone()));
        }

        ClauseDictionary { clauses }
    }

    fn config_clause(&self) -> String {
        let config = &self.params.config;
        let mut tokens = Vec::new();

        if let Some(v) = config.start {
            tokens.push(token(CONFIG_CLAUSE_START, v));
        }
        if let Some(v) = config.hits {
            tokens.push(token(CONFIG_CLAUSE_HIT, v));
        }
        if let Some(v) = config.search_format {
            tokens.push(token(CONFIG_CLAUSE_FORMAT, v.as_str()));
        }
        if let Some(v) = self.params.rank.re_rank_size {
            tokens.push(token(CONFIG_CLAUSE_RERANK_SIZE, v));
        }
        for (k, v) in config.custom_config.iter().flatten() {
            tokens.push(token(k, v));
        }

        tokens.join(CLAUSE_CONFIG_SEPARATOR)
    }

    fn sort_clause(&self) -> Option<String> {
        let sort = self.params.sort.as_ref()?;
        let fields: Vec<String> = sort
            .iter()
            .map(|v| format!("{}{}", v.order.token(), v.field))
            .collect();
        Some(fields.join(CLAUSE_SORT_SEPARATOR))
    }

    fn distinct_clause(&self) -> Option<String> {
        let distincts = self.params.distincts.as_ref()?;
        let groups: Vec<String> = distincts
            .iter()
            .filter_map(|d| {
                let key = non_empty(&d.key)?;
                let mut tokens = vec![token(DISTINCT_CLAUSE_DIST_KEY, key)];
                // Zero counts and empty strings are left out, explicit booleans are kept.
                push_token(&mut tokens, DISTINCT_CLAUSE_DIST_COUNT, &non_zero(d.dist_count));
                push_token(&mut tokens, DISTINCT_CLAUSE_DIST_TIMES, &non_zero(d.dist_times));
                push_token(&mut tokens, DISTINCT_CLAUSE_RESERVED, &d.reserved);
                push_token(&mut tokens, DISTINCT_CLAUSE_DIST_FILTER, &non_empty(&d.dist_filter));
                push_token(
                    &mut tokens,
                    DISTINCT_CLAUSE_UPDATE_TOTAL_HIT,
                    &d.update_total_hit,
                );
                push_token(&mut tokens, DISTINCT_CLAUSE_GRADE, &non_empty(&d.grade));
                Some(tokens.join(CLAUSE_GROUP_SUB_SEPARATOR))
            })
            .collect();
        Some(groups.join(CLAUSE_GROUP_SEPARATOR))
    }

    fn aggregate_clause(&self) -> Option<String> {
        let aggregates = self.params.aggregates.as_ref()?;
        let groups: Vec<String> = aggregates
            .iter()
            .filter_map(|a| {
                let (group_key, agg_fun) = (a.group_key.as_ref()?, a.agg_fun.as_ref()?);
                let mut tokens = vec![
                    token(AGGREGATE_CLAUSE_GROUP_KEY, group_key),
                    token(AGGREGATE_CLAUSE_AGG_FUN, agg_fun),
                ];
                push_token(&mut tokens, AGGREGATE_CLAUSE_RANGE, &a.range);
                push_token(&mut tokens, AGGREGATE_CLAUSE_MAX_GROUP, &a.max_group);
                push_token(&mut tokens, AGGREGATE_CLAUSE_AGG_FILTER, &a.agg_filter);
                push_token(
                    &mut tokens,
                    AGGREGATE_CLAUSE_AGG_SAMPLER_THRESHOLD,
                    &a.agg_sampler_threshold,
                );
                push_token(
                    &mut tokens,
                    AGGREGATE_CLAUSE_AGG_SAMPLER_STEP,
                    &a.agg_sampler_step,
                );
                Some(tokens.join(CLAUSE_GROUP_SUB_SEPARATOR))
            })
            .collect();
        Some(groups.join(CLAUSE_GROUP_SEPARATOR))
    }
}

/// `key:value`
pub(crate) fn token(key: &str, value: impl Display) -> String {
    format!("{key}{CLAUSE_TOKEN_KV_SEPARATOR}{value}")
}

pub(crate) fn push_token<T: Display>(tokens: &mut Vec<String>, key: &str, value: &Option<T>) {
    if let Some(v) = value {
        tokens.push(token(key, v));
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn non_zero(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchParamsBuilder;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_params_still_emit_config() {
        let params = SearchParams::default();
        let clauses = ClauseBuilder::new(&params).build();

        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses.get(ClauseKey::Config), Some(""));
        assert_eq!(clauses.to_string(), "config=");
    }

    #[test]
    fn test_empty_query_is_emitted() {
        let params = SearchParamsBuilder::new().with_query("").build();
        let clauses = ClauseBuilder::new(&params).build();

        assert_eq!(clauses.to_string(), "config=&&query=");
    }

    #[test]
    fn test_config_clause_order() {
        let params = SearchParamsBuilder::new()
            .with_custom_config("timeout", 100)
            .with_re_rank_size(200)
            .with_format(SearchFormat::Json)
            .with_hits(5)
            .with_start(0)
            .build();
        let clauses = ClauseBuilder::new(&params).build();

        assert_eq!(
            clauses.get(ClauseKey::Config),
            Some("start:0,hit:5,format:json,rerank_size:200,timeout:100")
        );
    }

    #[test]
    fn test_clause_order_ignores_construction_order() {
        let params = SearchParamsBuilder::new()
            .with_kvpairs("uid:1")
            .add_aggregate(Aggregate {
                group_key: Some("brand".to_string()),
                agg_fun: Some("count()".to_string()),
                ..Default::default()
            })
            .add_distinct(Distinct {
                key: Some("shop_id".to_string()),
                ..Default::default()
            })
            .with_filter("price>10")
            .add_sort("price", Some(Order::Increase))
            .with_query("'phone'")
            .build();
        let clauses = ClauseBuilder::new(&params).build();

        let keys: Vec<&str> = clauses.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["config", "query", "sort", "filter", "distinct", "aggregate", "kvpairs"]
        );
    }

    #[test]
    fn test_distinct_clause() {
        let params = SearchParamsBuilder::new()
            .add_distinct(Distinct {
                key: Some("shop_id".to_string()),
                dist_count: Some(1),
                dist_times: Some(2),
                reserved: Some(false),
                dist_filter: Some("price>10".to_string()),
                update_total_hit: Some(true),
                grade: Some("3.0".to_string()),
            })
            .add_distinct(Distinct {
                dist_count: Some(1),
                ..Default::default()
            })
            .add_distinct(Distinct {
                key: Some("brand".to_string()),
                ..Default::default()
            })
            .build();
        let clauses = ClauseBuilder::new(&params).build();

        assert_eq!(
            clauses.get(ClauseKey::Distinct),
            Some(
                "dist_key:shop_id,dist_count:1,dist_times:2,reserved:false,dist_filter:price>10,update_total_hit:true,grade:3.0;dist_key:brand"
            )
        );
    }

    #[test]
    fn test_distinct_clause_skips_empty_fields() {
        let params = SearchParamsBuilder::new()
            .add_distinct(Distinct {
                key: Some("shop_id".to_string()),
                dist_count: Some(0),
                dist_times: Some(0),
                reserved: Some(false),
                dist_filter: Some(String::new()),
                update_total_hit: None,
                grade: Some(String::new()),
            })
            .add_distinct(Distinct {
                key: Some(String::new()),
                dist_count: Some(2),
                ..Default::default()
            })
            .build();
        let clauses = ClauseBuilder::new(&params).build();

        assert_eq!(
            clauses.get(ClauseKey::Distinct),
            Some("dist_key:shop_id,reserved:false")
        );
        assert_eq!(
            clauses.to_string(),
            "config=&&distinct=dist_key:shop_id,reserved:false"
        );
    }

    #[test]
    fn test_aggregate_clause_skips_incomplete() {
        let params = SearchParamsBuilder::new()
            .add_aggregate(Aggregate {
                group_key: Some("brand".to_string()),
                ..Default::default()
            })
            .add_aggregate(Aggregate {
                group_key: Some("price".to_string()),
                agg_fun: Some("count()#max(price)".to_string()),
                range: Some("0~100~1000".to_string()),
                max_group: Some(10),
                agg_filter: Some("price>0".to_string()),
                agg_sampler_threshold: Some(1000),
                agg_sampler_step: Some(5),
            })
            .build();
        let clauses = ClauseBuilder::new(&params).build();

        assert_eq!(
            clauses.get(ClauseKey::Aggregate),
            Some(
                "group_key:price,agg_fun:count()#max(price),range:0~100~1000,max_group:10,agg_filter:price>0,agg_sampler_threshold:1000,agg_sampler_step:5"
            )
        );
    }

    #[test]
    fn test_all_skipped_groups_leave_empty_clause() {
        let params = SearchParamsBuilder::new()
            .add_aggregate(Aggregate::default())
            .build();
        let clauses = ClauseBuilder::new(&params).build();

        assert_eq!(clauses.get(ClauseKey::Aggregate), Some(""));
    }

    #[test]
    fn test_build_is_idempotent() {
        let params = SearchParamsBuilder::new()
            .with_start(0)
            .with_query("'a'")
            .add_sort("RANK", None)
            .add_sort("id", Some(Order::Increase))
            .build();
        let builder = ClauseBuilder::new(&params);

        assert_eq!(builder.build().to_string(), builder.build().to_string());
        assert_eq!(
            builder.build().to_string(),
            "config=start:0&&query='a'&&sort=-RANK;+id"
        );
    }
}
