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

use opensearch_core::Result;

use crate::{OpenSearchClient, OpenSearchResult};

const APP_PATH: &str = "/apps";

/// Page of a listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pageable {
    /// Page number, starting from 1.
    pub page: u32,
    /// Items per page.
    pub size: u32,
}

impl Default for Pageable {
    fn default() -> Self {
        Self { page: 1, size: 10 }
    }
}

/// AppClient manages apps.
#[derive(Debug, Clone)]
pub struct AppClient {
    client: OpenSearchClient,
}

impl AppClient {
    /// Create a new AppClient.
    pub fn new(client: OpenSearchClient) -> Self {
        Self { client }
    }

    /// Create an app from its JSON definition.
    pub async fn save(&self, app: &str) -> Result<OpenSearchResult> {
        self.client.post(APP_PATH, app).await
    }

    /// Get an app by name or id.
    pub async fn get_by_id(&self, id: &str) -> Result<OpenSearchResult> {
        self.client.get(&format!("{APP_PATH}/{id}"), &[]).await
    }

    /// List apps page by page.
    pub async fn list_all(&self, pageable: Pageable) -> Result<OpenSearchResult> {
        let params = [
            ("page".to_string(), pageable.page.to_string()),
            ("size".to_string(), pageable.size.to_string()),
        ];
        self.client.get(APP_PATH, &params).await
    }

    /// Remove an app.
    pub async fn remove_by_id(&self, id: &str) -> Result<OpenSearchResult> {
        self.client.delete(&format!("{APP_PATH}/{id}"), "").await
    }

    /// Update an app with a partial JSON definition.
    pub async fn update_by_id(&self, id: &str, app: &str) -> Result<OpenSearchResult> {
        self.client.patch(&format!("{APP_PATH}/{id}"), app).await
    }

    /// Rebuild the index of an app.
    pub async fn reindex_by_id(&self, id: &str) -> Result<OpenSearchResult> {
        self.client
            .post(&format!("{APP_PATH}/{id}/actions/reindex"), "")
            .await
    }
}
