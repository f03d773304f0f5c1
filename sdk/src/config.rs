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

use std::time::Duration;

use opensearch_core::Context;

/// Env name of the OpenSearch endpoint.
pub const OPENSEARCH_HOST: &str = "OPENSEARCH_HOST";

/// ClientConfig carries the connection settings of [`crate::OpenSearchClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Endpoint such as `http://opensearch-cn-hangzhou.aliyuncs.com`.
    ///
    /// Loaded from [`OPENSEARCH_HOST`] when empty.
    pub host: String,
    /// Timeout of a whole request.
    pub timeout: Duration,
    /// Timeout of establishing a connection.
    pub connect_timeout: Duration,
    /// Ask for gzip encoded responses.
    pub gzip: bool,
    /// Attach trace info to every result.
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(1),
            gzip: false,
            debug: false,
        }
    }
}

impl ClientConfig {
    /// Create a config with default timeouts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Enable or disable gzip.
    pub fn with_gzip(mut self, gzip: bool) -> Self {
        self.gzip = gzip;
        self
    }

    /// Enable or disable debug trace info.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if self.host.trim().is_empty() {
            if let Some(v) = ctx.env_var(OPENSEARCH_HOST) {
                self.host = v;
            }
        }
        self
    }

    /// Host trimmed, with `http://` added when no scheme is given and
    /// without trailing `/`.
    pub fn endpoint(&self) -> String {
        let host = self.host.trim().trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{host}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opensearch_core::StaticEnv;
    use std::collections::HashMap;

    #[test]
    fn test_endpoint() {
        let cases = vec![
            (" opensearch.example.com ", "http://opensearch.example.com"),
            ("https://opensearch.example.com/", "https://opensearch.example.com"),
            ("http://127.0.0.1:8080", "http://127.0.0.1:8080"),
        ];

        for (input, expected) in cases {
            assert_eq!(ClientConfig::new().with_host(input).endpoint(), expected);
        }
    }

    #[test]
    fn test_from_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([(
                OPENSEARCH_HOST.to_string(),
                "env.example.com".to_string(),
            )]),
        });

        let config = ClientConfig::new().from_env(&ctx);
        assert_eq!(config.host, "env.example.com");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.connect_timeout, Duration::from_secs(1));

        let config = ClientConfig::new().with_host("explicit.com").from_env(&ctx);
        assert_eq!(config.host, "explicit.com");
    }
}
