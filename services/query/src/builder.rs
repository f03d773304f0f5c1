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

use crate::constants::DEFAULT_FILTER_CONDITION;
use crate::model::*;

/// SearchParamsBuilder assembles [`SearchParams`] step by step.
///
/// ```
/// use opensearch_query::{Order, SearchFormat, SearchParamsBuilder};
///
/// let params = SearchParamsBuilder::new()
///     .with_app_name("shop")
///     .with_start(10)
///     .with_hits(20)
///     .with_format(SearchFormat::FullJson)
///     .with_query("'phone'")
///     .add_sort("price", Some(Order::Decrease))
///     .build();
///
/// assert_eq!(params.config.app_names, vec!["shop".to_string()]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct SearchParamsBuilder {
    params: SearchParams,
}

impl SearchParamsBuilder {
    /// Create a builder with an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the offset of the first hit.
    pub fn with_start(mut self, start: u32) -> Self {
        self.params.config.start = Some(start);
        self
    }

    /// Set the number of hits.
    pub fn with_hits(mut self, hits: u32) -> Self {
        self.params.config.hits = Some(hits);
        self
    }

    /// Set the result format. Use [`str::parse`] to get one from a name.
    pub fn with_format(mut self, format: SearchFormat) -> Self {
        self.params.config.search_format = Some(format);
        self
    }

    /// Search in a single app.
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.params.config.app_names = vec![app_name.into()];
        self
    }

    /// Search in several apps at once.
    pub fn with_app_names<I, S>(mut self, app_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.config.app_names = app_names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the query clause.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.params.query = Some(query.into());
        self
    }

    /// Set the kvpairs clause.
    pub fn with_kvpairs(mut self, kvpairs: impl Into<String>) -> Self {
        self.params.config.kvpairs = Some(kvpairs.into());
        self
    }

    /// Set the fields to return.
    pub fn with_fetch_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.config.fetch_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Set the route value.
    pub fn with_route_value(mut self, route_value: impl Into<String>) -> Self {
        self.params.config.route_value = Some(route_value.into());
        self
    }

    /// Add a `key:value` pair to the config clause.
    ///
    /// Setting the same key again replaces the value in place.
    pub fn with_custom_config(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        let pairs = self.params.config.custom_config.get_or_insert_with(Vec::new);
        upsert(pairs, key.into(), value.to_string());
        self
    }

    /// Replace the filter clause.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.params.filter = Some(filter.into());
        self
    }

    /// Append a filter joined to the existing one by `condition`, `AND` if `None`.
    pub fn add_filter(mut self, filter: impl AsRef<str>, condition: Option<&str>) -> Self {
        let filter = filter.as_ref();
        self.params.filter = Some(match self.params.filter.take() {
            None => filter.to_string(),
            Some(existing) => format!(
                "{existing} {} {filter}",
                condition.unwrap_or(DEFAULT_FILTER_CONDITION)
            ),
        });
        self
    }

    /// Append a sort field, [`Order::Decrease`] if `order` is `None`.
    pub fn add_sort(mut self, field: impl Into<String>, order: Option<Order>) -> Self {
        self.params.sort.get_or_insert_with(Vec::new).push(SortField {
            field: field.into(),
            order: order.unwrap_or_default(),
        });
        self
    }

    /// Set the coarse rank profile.
    pub fn with_first_rank_name(mut self, name: impl Into<String>) -> Self {
        self.params.rank.first_rank_name = Some(name.into());
        self
    }

    /// Set the fine rank profile.
    pub fn with_second_rank_name(mut self, name: impl Into<String>) -> Self {
        self.params.rank.second_rank_name = Some(name.into());
        self
    }

    /// Set the number of documents the fine rank looks at.
    pub fn with_re_rank_size(mut self, size: u32) -> Self {
        self.params.rank.re_rank_size = Some(size);
        self
    }

    /// Append an aggregate.
    pub fn add_aggregate(mut self, aggregate: Aggregate) -> Self {
        self.params
            .aggregates
            .get_or_insert_with(Vec::new)
            .push(aggregate);
        self
    }

    /// Append a distinct.
    pub fn add_distinct(mut self, distinct: Distinct) -> Self {
        self.params
            .distincts
            .get_or_insert_with(Vec::new)
            .push(distinct);
        self
    }

    /// Append a summary.
    pub fn add_summary(mut self, summary: Summary) -> Self {
        self.params
            .summaries
            .get_or_insert_with(Vec::new)
            .push(summary);
        self
    }

    /// Append a query processor.
    pub fn add_query_processor(mut self, name: impl Into<String>) -> Self {
        self.params
            .query_processor_names
            .get_or_insert_with(Vec::new)
            .push(name.into());
        self
    }

    /// Append a function to disable.
    pub fn add_disable_function(mut self, name: impl Into<String>) -> Self {
        self.params
            .disable_functions
            .get_or_insert_with(Vec::new)
            .push(name.into());
        self
    }

    /// Set a custom URL parameter.
    ///
    /// Custom parameters are applied last and win over any parameter
    /// computed from the other settings.
    pub fn with_custom_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        let pairs = self.params.custom_param.get_or_insert_with(Vec::new);
        upsert(pairs, key.into(), value.to_string());
        self
    }

    /// Set how long the scroll stays alive, for example `1m`.
    pub fn with_scroll_expire(mut self, expire: impl Into<String>) -> Self {
        self.params
            .deep_paging
            .get_or_insert_with(DeepPaging::default)
            .scroll_expire = Some(expire.into());
        self
    }

    /// Set the scroll id returned by the previous page.
    pub fn with_scroll_id(mut self, scroll_id: impl Into<String>) -> Self {
        self.params
            .deep_paging
            .get_or_insert_with(DeepPaging::default)
            .scroll_id = Some(scroll_id.into());
        self
    }

    /// Finish building.
    pub fn build(self) -> SearchParams {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_filter() {
        let params = SearchParamsBuilder::new()
            .add_filter("price>100", None)
            .add_filter("stock>0", None)
            .add_filter("brand=\"x\"", Some("OR"))
            .build();

        assert_eq!(
            params.filter.as_deref(),
            Some("price>100 AND stock>0 OR brand=\"x\"")
        );
    }

    #[test]
    fn test_add_sort_defaults_to_decrease() {
        let params = SearchParamsBuilder::new()
            .add_sort("RANK", None)
            .add_sort("price", Some(Order::Increase))
            .build();

        let sort = params.sort.unwrap();
        assert_eq!(sort[0].order, Order::Decrease);
        assert_eq!(sort[1].order, Order::Increase);
    }

    #[test]
    fn test_custom_config_overwrite_keeps_position() {
        let params = SearchParamsBuilder::new()
            .with_custom_config("a", 1)
            .with_custom_config("b", 2)
            .with_custom_config("a", 3)
            .build();

        assert_eq!(
            params.config.custom_config.unwrap(),
            vec![
                ("a".to_string(), "3".to_string()),
                ("b".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_scroll_settings_share_deep_paging() {
        let params = SearchParamsBuilder::new()
            .with_scroll_expire("1m")
            .with_scroll_id("abc")
            .build();

        assert_eq!(
            params.deep_paging,
            Some(DeepPaging {
                scroll_id: Some("abc".to_string()),
                scroll_expire: Some("1m".to_string()),
            })
        );
    }

    #[test]
    fn test_app_names() {
        let params = SearchParamsBuilder::new()
            .with_app_names(["a", "b"])
            .build();
        assert_eq!(params.config.app_names, vec!["a", "b"]);

        let params = SearchParamsBuilder::new()
            .with_app_names(["a", "b"])
            .with_app_name("c")
            .build();
        assert_eq!(params.config.app_names, vec!["c"]);
    }
}
