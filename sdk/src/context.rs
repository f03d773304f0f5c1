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

use opensearch_core::{Context, Error, OsEnv, Result};
use opensearch_http_send_reqwest::ReqwestHttpSend;

use crate::ClientConfig;

/// Create a [`Context`] that sends requests with reqwest and reads the OS
/// environment.
///
/// The reqwest client honors the timeouts and gzip setting of `config`.
pub fn default_context(config: &ClientConfig) -> Result<Context> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .gzip(config.gzip)
        .build()
        .map_err(|e| Error::config_invalid("build http client failed").with_source(e))?;

    Ok(Context::new()
        .with_http_send(ReqwestHttpSend::new(client))
        .with_env(OsEnv))
}
