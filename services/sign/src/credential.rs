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

use opensearch_core::utils::Redact;
use opensearch_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential that holds the access key id and secret.
#[derive(Default, Clone)]
pub struct Credential {
    /// Access key id for OpenSearch.
    pub access_key_id: String,
    /// Access key secret for OpenSearch.
    pub access_key_secret: String,
}

impl Credential {
    /// Create a credential, trimming surrounding whitespace from both keys.
    pub fn new(access_key_id: &str, access_key_secret: &str) -> Self {
        Self {
            access_key_id: access_key_id.trim().to_string(),
            access_key_secret: access_key_secret.trim().to_string(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("access_key_secret", &Redact::from(&self.access_key_secret))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.access_key_id.is_empty() && !self.access_key_secret.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_trim_and_validity() {
        let cred = Credential::new("  LTAI5tExampleKeyId \n", "\tsecret ");
        assert_eq!(cred.access_key_id, "LTAI5tExampleKeyId");
        assert_eq!(cred.access_key_secret, "secret");
        assert!(cred.is_valid());

        assert!(!Credential::new("ak", "").is_valid());
        assert!(!Credential::default().is_valid());
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let cred = Credential::new("LTAI5tExampleKeyId", "very-secret-value");
        let output = format!("{cred:?}");
        assert!(!output.contains("very-secret-value"));
        assert!(output.contains("LTA***yId"));
    }
}
