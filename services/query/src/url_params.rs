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

use log::debug;

use crate::clause::{push_token, token, ClauseBuilder};
use crate::constants::*;
use crate::model::*;

/// Ordered URL parameters of a search request.
///
/// Inserting an existing key replaces its value and keeps its position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UrlParams {
    params: Vec<(String, String)>,
}

impl UrlParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        upsert(&mut self.params, key.into(), value.into());
    }

    /// Value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over parameters in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if there is no parameter.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Consume into the inner pairs.
    pub fn into_vec(self) -> Vec<(String, String)> {
        self.params
    }

    /// Build the URL parameters of a search request.
    ///
    /// Order: `query`, scroll, rank names, `fetch_fields`, `summary`, `qp`,
    /// `disable`, `route_value`, then custom params.
    pub fn from_search_params(params: &SearchParams) -> Self {
        let mut url = Self::new();

        let query = ClauseBuilder::new(params).build().to_string();
        debug!("built query clause: {query}");
        url.insert(QUERY, query);

        if let Some(paging) = &params.deep_paging {
            match paging.scroll_id.as_deref() {
                Some(id) if !id.is_empty() => url.insert(SCROLL_ID, id),
                _ => url.insert(SEARCH_TYPE, SEARCH_TYPE_SCAN),
            }
            if let Some(expire) = &paging.scroll_expire {
                url.insert(SCROLL_EXPIRE, expire.as_str());
            }
        }

        if let Some(v) = &params.rank.first_rank_name {
            url.insert(FIRST_RANK_NAME, v.as_str());
        }
        if let Some(v) = &params.rank.second_rank_name {
            url.insert(SECOND_RANK_NAME, v.as_str());
        }
        if let Some(fields) = &params.config.fetch_fields {
            url.insert(FETCH_FIELDS, fields.join(FETCH_FIELDS_SEPARATOR));
        }
        if let Some(summaries) = &params.summaries {
            url.insert(SUMMARY, summary_param(summaries));
        }
        if let Some(names) = &params.query_processor_names {
            url.insert(QP, names.join(QP_SEPARATOR));
        }
        if let Some(names) = &params.disable_functions {
            url.insert(DISABLE, names.join(DISABLE_FUNCTIONS_SEPARATOR));
        }
        if let Some(v) = &params.config.route_value {
            url.insert(ROUTE_VALUE, v.as_str());
        }
        for (k, v) in params.custom_param.iter().flatten() {
            url.insert(k.as_str(), v.as_str());
        }

        url
    }
}

impl From<&SearchParams> for UrlParams {
    fn from(params: &SearchParams) -> Self {
        Self::from_search_params(params)
    }
}

impl IntoIterator for UrlParams {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

fn summary_param(summaries: &[Summary]) -> String {
    let groups: Vec<String> = summaries
        .iter()
        .filter_map(|s| {
            let field = s.summary_field.as_ref()?;
            let mut tokens = vec![token(SUMMARY_PARAM_SUMMARY_FIELD, field)];
            push_token(&mut tokens, SUMMARY_PARAM_SUMMARY_LEN, &s.summary_len);
            push_token(&mut tokens, SUMMARY_PARAM_SUMMARY_ELLIPSIS, &s.summary_ellipsis);
            push_token(&mut tokens, SUMMARY_PARAM_SUMMARY_SNIPPET, &s.summary_snippet);
            push_token(&mut tokens, SUMMARY_PARAM_SUMMARY_ELEMENT, &s.summary_element);
            push_token(
                &mut tokens,
                SUMMARY_PARAM_SUMMARY_ELEMENT_PREFIX,
                &s.summary_element_prefix,
            );
            push_token(
                &mut tokens,
                SUMMARY_PARAM_SUMMARY_ELEMENT_POSTFIX,
                &s.summary_element_postfix,
            );
            Some(tokens.join(SUMMARY_SUB_SEPARATOR))
        })
        .collect();
    groups.join(SUMMARY_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchParamsBuilder;
    use pretty_assertions::assert_eq;

    fn keys(url: &UrlParams) -> Vec<&str> {
        url.iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn test_fetch_fields() {
        let params = SearchParamsBuilder::new()
            .with_fetch_fields(["a", "b"])
            .build();
        let url = UrlParams::from(&params);

        assert_eq!(url.get(FETCH_FIELDS), Some("a;b"));
    }

    #[test]
    fn test_parameter_order() {
        let params = SearchParamsBuilder::new()
            .with_route_value("r")
            .add_disable_function("qp")
            .add_query_processor("spell_check")
            .add_query_processor("stop_word")
            .add_summary(Summary {
                summary_field: Some("title".to_string()),
                ..Default::default()
            })
            .with_fetch_fields(["id"])
            .with_second_rank_name("fine")
            .with_first_rank_name("coarse")
            .with_scroll_expire("1m")
            .build();
        let url = UrlParams::from(&params);

        assert_eq!(
            keys(&url),
            vec![
                "query",
                "search_type",
                "scroll",
                "first_rank_name",
                "second_rank_name",
                "fetch_fields",
                "summary",
                "qp",
                "disable",
                "route_value"
            ]
        );
        assert_eq!(url.get(SEARCH_TYPE), Some("scan"));
        assert_eq!(url.get(QP), Some("spell_check,stop_word"));
    }

    #[test]
    fn test_scroll_id_replaces_scan() {
        let params = SearchParamsBuilder::new()
            .with_scroll_id("sid")
            .with_scroll_expire("3m")
            .build();
        let url = UrlParams::from(&params);

        assert_eq!(url.get(SCROLL_ID), Some("sid"));
        assert_eq!(url.get(SEARCH_TYPE), None);
        assert_eq!(url.get(SCROLL_EXPIRE), Some("3m"));
    }

    #[test]
    fn test_summary_param() {
        let params = SearchParamsBuilder::new()
            .add_summary(Summary {
                summary_field: Some("title".to_string()),
                summary_len: Some(50),
                summary_ellipsis: Some("...".to_string()),
                summary_snippet: Some(1),
                summary_element: Some("em".to_string()),
                ..Default::default()
            })
            .add_summary(Summary {
                summary_len: Some(10),
                ..Default::default()
            })
            .add_summary(Summary {
                summary_field: Some("body".to_string()),
                summary_element_prefix: Some("<b>".to_string()),
                summary_element_postfix: Some("</b>".to_string()),
                ..Default::default()
            })
            .build();
        let url = UrlParams::from(&params);

        assert_eq!(
            url.get(SUMMARY),
            Some("summary_field:title,summary_len:50,summary_ellipsis:...,summary_snippet:1,summary_element:em;summary_field:body,summary_element_prefix:<b>,summary_element_postfix:</b>")
        );
    }

    #[test]
    fn test_custom_params_override_in_place() {
        let params = SearchParamsBuilder::new()
            .with_fetch_fields(["id"])
            .with_custom_param("fetch_fields", "title")
            .with_custom_param("user_id", 7)
            .build();
        let url = UrlParams::from(&params);

        assert_eq!(keys(&url), vec!["query", "fetch_fields", "user_id"]);
        assert_eq!(url.get(FETCH_FIELDS), Some("title"));
        assert_eq!(url.get("user_id"), Some("7"));
    }
}
