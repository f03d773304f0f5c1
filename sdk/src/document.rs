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
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{OpenSearchClient, OpenSearchResult};

/// Operation applied to one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Command {
    /// Insert or replace.
    Add,
    /// Update the given fields.
    Update,
    /// Delete by primary key.
    Delete,
}

/// One entry of a bulk push, serialized as `{"cmd": ..., "fields": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Operation.
    pub cmd: Command,
    /// Document fields, or only the primary key for deletion.
    pub fields: Map<String, Value>,
}

impl Document {
    /// Create a new document.
    pub fn new(cmd: Command, fields: Map<String, Value>) -> Self {
        Self { cmd, fields }
    }
}

/// DocumentClient pushes documents into an app table.
///
/// Documents added with [`DocumentClient::add`], [`DocumentClient::update`]
/// and [`DocumentClient::remove`] are kept in a buffer until
/// [`DocumentClient::commit`] sends them.
#[derive(Debug, Clone)]
pub struct DocumentClient {
    client: OpenSearchClient,
    docs: Vec<Document>,
}

impl DocumentClient {
    /// Create a new DocumentClient with an empty buffer.
    pub fn new(client: OpenSearchClient) -> Self {
        Self {
            client,
            docs: Vec::new(),
        }
    }

    /// Buffer an ADD.
    pub fn add(&mut self, fields: Map<String, Value>) {
        self.docs.push(Document::new(Command::Add, fields));
    }

    /// Buffer an UPDATE.
    pub fn update(&mut self, fields: Map<String, Value>) {
        self.docs.push(Document::new(Command::Update, fields));
    }

    /// Buffer a DELETE.
    pub fn remove(&mut self, fields: Map<String, Value>) {
        self.docs.push(Document::new(Command::Delete, fields));
    }

    /// Documents waiting for commit.
    pub fn pending(&self) -> &[Document] {
        &self.docs
    }

    /// Send buffered documents to `table` of `app`.
    ///
    /// The buffer is emptied before sending, whatever the outcome.
    pub async fn commit(&mut self, app: &str, table: &str) -> Result<OpenSearchResult> {
        let docs = std::mem::take(&mut self.docs);
        let json = serde_json::to_string(&docs)?;
        self.push(&json, app, table).await
    }

    /// Send a JSON array of documents to `table` of `app`.
    pub async fn push(&self, docs_json: &str, app: &str, table: &str) -> Result<OpenSearchResult> {
        self.client
            .post(&format!("/apps/{app}/{table}/actions/bulk"), docs_json)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_serialization() {
        let fields = json!({"id": 1, "title": "phone"})
            .as_object()
            .cloned()
            .unwrap();
        let docs = vec![
            Document::new(Command::Add, fields),
            Document::new(Command::Delete, json!({"id": 2}).as_object().cloned().unwrap()),
        ];

        assert_eq!(
            serde_json::to_string(&docs).unwrap(),
            r#"[{"cmd":"ADD","fields":{"id":1,"title":"phone"}},{"cmd":"DELETE","fields":{"id":2}}]"#
        );
    }
}
