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

//! A ready made search engine on top of the resource clients.
//!
//! It indexes documents keyed by an `id` field and searches them ranked by
//! relevance, which is what most application search integrations need.

use log::debug;
use opensearch_core::{Error, Result};
use opensearch_query::{Order, SearchFormat, SearchParamsBuilder};
use serde_json::{Map, Value};

use crate::{Command, Document, DocumentClient, OpenSearchClient, OpenSearchResult, SearchClient};

/// Hits returned by [`SearchEngine::search`].
pub const DEFAULT_HITS: u32 = 20;

/// SearchEngine indexes and searches documents of one app.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    documents: DocumentClient,
    searcher: SearchClient,
}

impl SearchEngine {
    /// Create a new SearchEngine.
    pub fn new(client: OpenSearchClient) -> Self {
        Self {
            documents: DocumentClient::new(client.clone()),
            searcher: SearchClient::new(client),
        }
    }

    /// Add or replace `docs` in `table` of `app`.
    ///
    /// Returns `None` without sending anything when there is nothing to push.
    pub async fn update(
        &self,
        app: &str,
        table: &str,
        docs: Vec<Map<String, Value>>,
    ) -> Result<Option<OpenSearchResult>> {
        self.perform(Command::Add, app, table, docs).await
    }

    /// Delete `docs` from `table` of `app`.
    ///
    /// Returns `None` without sending anything when there is nothing to push.
    pub async fn delete(
        &self,
        app: &str,
        table: &str,
        docs: Vec<Map<String, Value>>,
    ) -> Result<Option<OpenSearchResult>> {
        self.perform(Command::Delete, app, table, docs).await
    }

    /// First [`DEFAULT_HITS`] hits of `query`, optionally restricted to `index`.
    pub async fn search(
        &self,
        app: &str,
        index: Option<&str>,
        query: &str,
    ) -> Result<OpenSearchResult> {
        self.perform_search(app, index, query, 0, DEFAULT_HITS)
            .await
    }

    /// One page of hits, `page` starting from 1.
    ///
    /// Fails with [`Error::request_invalid`] when the start offset overflows.
    pub async fn paginate(
        &self,
        app: &str,
        index: Option<&str>,
        query: &str,
        per_page: u32,
        page: u32,
    ) -> Result<OpenSearchResult> {
        let start = page.saturating_sub(1).checked_mul(per_page).ok_or_else(|| {
            Error::request_invalid(format!(
                "page {page} with {per_page} hits per page is out of range"
            ))
        })?;
        self.perform_search(app, index, query, start, per_page)
            .await
    }

    /// Values of `fields.id` of every hit.
    ///
    /// Returns an empty list for responses without hits or with a body that
    /// isn't JSON.
    pub fn map_ids(result: &OpenSearchResult) -> Vec<Value> {
        let Ok(body) = result.json() else {
            return Vec::new();
        };
        let num = body.pointer("/result/num").and_then(Value::as_u64);
        if num.unwrap_or(0) == 0 {
            return Vec::new();
        }

        body.pointer("/result/items")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .map(|item| item.pointer("/fields/id").cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Total number of matched documents, 0 if unknown.
    pub fn total_count(result: &OpenSearchResult) -> u64 {
        result
            .json()
            .ok()
            .and_then(|body| body.pointer("/result/total").and_then(Value::as_u64))
            .unwrap_or(0)
    }

    async fn perform(
        &self,
        cmd: Command,
        app: &str,
        table: &str,
        docs: Vec<Map<String, Value>>,
    ) -> Result<Option<OpenSearchResult>> {
        let docs: Vec<Document> = docs
            .into_iter()
            .filter(|fields| !fields.is_empty())
            .map(|fields| Document::new(cmd, fields))
            .collect();
        if docs.is_empty() {
            debug!("no documents to push into {app}/{table}");
            return Ok(None);
        }

        let json = serde_json::to_string(&docs)?;
        self.documents.push(&json, app, table).await.map(Some)
    }

    async fn perform_search(
        &self,
        app: &str,
        index: Option<&str>,
        query: &str,
        start: u32,
        hits: u32,
    ) -> Result<OpenSearchResult> {
        let query = match index {
            Some(index) if !index.is_empty() => format!("{index}:'{query}'"),
            _ => format!("'{query}'"),
        };
        let params = SearchParamsBuilder::new()
            .with_start(start)
            .with_hits(hits)
            .with_app_name(app)
            .with_query(query)
            .with_format(SearchFormat::FullJson)
            .add_sort("RANK", Some(Order::Decrease))
            .build();

        self.searcher.execute(&params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use serde_json::json;

    fn result(body: Value) -> OpenSearchResult {
        OpenSearchResult {
            status: StatusCode::OK,
            result: body.to_string(),
            trace_info: None,
        }
    }

    #[test]
    fn test_map_ids() {
        let res = result(json!({
            "status": "OK",
            "result": {
                "num": 2,
                "total": 57,
                "items": [{"fields": {"id": "1"}}, {"fields": {"id": "7"}}]
            }
        }));

        assert_eq!(SearchEngine::map_ids(&res), vec![json!("1"), json!("7")]);
        assert_eq!(SearchEngine::total_count(&res), 57);
    }

    #[test]
    fn test_map_ids_without_hits() {
        let res = result(json!({"status": "OK", "result": {"num": 0, "items": []}}));
        assert!(SearchEngine::map_ids(&res).is_empty());
        assert_eq!(SearchEngine::total_count(&res), 0);

        let res = OpenSearchResult {
            status: StatusCode::BAD_GATEWAY,
            result: "<html>".to_string(),
            trace_info: None,
        };
        assert!(SearchEngine::map_ids(&res).is_empty());
        assert_eq!(SearchEngine::total_count(&res), 0);
    }
}
