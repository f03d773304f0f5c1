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

use anyhow::Result;
use opensearch_sdk::query::{Order, SearchParamsBuilder};
use opensearch_sdk::{ClientConfig, OpenSearchClient, SearchClient, SearchEngine};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Host comes from OPENSEARCH_HOST, keys from ALIBABA_CLOUD_ACCESS_KEY_ID
    // and ALIBABA_CLOUD_ACCESS_KEY_SECRET.
    let client = OpenSearchClient::from_config(ClientConfig::new().with_gzip(true))?;

    let params = SearchParamsBuilder::new()
        .with_app_name("shop")
        .with_start(0)
        .with_hits(10)
        .with_query("title:'phone'")
        .add_filter("price>100", None)
        .add_sort("RANK", Some(Order::Decrease))
        .with_fetch_fields(["id", "title", "price"])
        .build();

    let result = SearchClient::new(client).execute(&params).await?;
    if !result.is_success() {
        eprintln!("search failed with {}: {}", result.status, result.result);
        return Ok(());
    }

    println!("total: {}", SearchEngine::total_count(&result));
    for id in SearchEngine::map_ids(&result) {
        println!("hit: {id}");
    }

    Ok(())
}
