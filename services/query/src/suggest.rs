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

use crate::constants::{HITS, QUERY};
use crate::model::{SearchConfig, SearchParams, Suggest};
use crate::UrlParams;

/// SuggestParamsBuilder builds the parameters of a suggestion request.
#[derive(Debug, Default, Clone, Copy)]
pub struct SuggestParamsBuilder;

impl SuggestParamsBuilder {
    /// Build [`SearchParams`] asking `suggest_name` of `app_name` for at most
    /// `hits` suggestions of `query`.
    pub fn build(
        app_name: impl Into<String>,
        suggest_name: impl Into<String>,
        query: impl Into<String>,
        hits: u32,
    ) -> SearchParams {
        SearchParams {
            config: SearchConfig {
                app_names: vec![app_name.into()],
                hits: Some(hits),
                ..Default::default()
            },
            query: Some(query.into()),
            suggest: Some(Suggest {
                suggest_name: suggest_name.into(),
            }),
            ..Default::default()
        }
    }

    /// URL parameters of a suggestion request: `query` and `hits`.
    pub fn query_params(params: &SearchParams) -> UrlParams {
        let mut url = UrlParams::new();
        if let Some(query) = &params.query {
            url.insert(QUERY, query.as_str());
        }
        if let Some(hits) = params.config.hits {
            url.insert(HITS, hits.to_string());
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_params() {
        let params = SuggestParamsBuilder::build("shop", "title_suggest", "pho", 5);
        assert_eq!(params.config.app_names, vec!["shop"]);
        assert_eq!(
            params.suggest.as_ref().map(|v| v.suggest_name.as_str()),
            Some("title_suggest")
        );

        let url = SuggestParamsBuilder::query_params(&params);
        assert_eq!(
            url.into_vec(),
            vec![
                ("query".to_string(), "pho".to_string()),
                ("hits".to_string(), "5".to_string())
            ]
        );
    }
}
