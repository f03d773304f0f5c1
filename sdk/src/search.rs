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

use opensearch_core::{Error, Result};
use opensearch_query::{SearchParams, SuggestParamsBuilder, UrlParams};

use crate::{OpenSearchClient, OpenSearchResult};

/// SearchClient runs search requests.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: OpenSearchClient,
}

impl SearchClient {
    /// Create a new SearchClient.
    pub fn new(client: OpenSearchClient) -> Self {
        Self { client }
    }

    /// Search the apps named in `params`.
    pub async fn execute(&self, params: &SearchParams) -> Result<OpenSearchResult> {
        let path = format!("/apps/{}/search", params.config.app_names.join(","));
        let url = UrlParams::from(params).into_vec();
        self.client.get(&path, &url).await
    }
}

/// SuggestClient asks a suggestion rule for completions.
#[derive(Debug, Clone)]
pub struct SuggestClient {
    client: OpenSearchClient,
}

impl SuggestClient {
    /// Create a new SuggestClient.
    pub fn new(client: OpenSearchClient) -> Self {
        Self { client }
    }

    /// Run a suggestion built by [`SuggestParamsBuilder::build`].
    pub async fn execute(&self, params: &SearchParams) -> Result<OpenSearchResult> {
        let app = params
            .config
            .app_names
            .first()
            .ok_or_else(|| Error::request_invalid("suggest request needs an app name"))?;
        let suggest = params
            .suggest
            .as_ref()
            .ok_or_else(|| Error::request_invalid("suggest request needs a suggest name"))?;

        let path = format!("/apps/{app}/suggest/{}/search", suggest.suggest_name);
        let url = SuggestParamsBuilder::query_params(params).into_vec();
        self.client.get(&path, &url).await
    }
}
