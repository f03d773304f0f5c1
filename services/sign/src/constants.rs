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

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Hex encoded MD5 of the request body.
pub const CONTENT_MD5: &str = "content-md5";
/// Per request nonce, signed together with the other `x-opensearch-` headers.
pub const X_OPENSEARCH_NONCE: &str = "x-opensearch-nonce";
/// Headers starting with this prefix take part in signing.
pub const X_OPENSEARCH_PREFIX: &str = "x-opensearch-";

/// The only content type OpenSearch accepts.
pub const CONTENT_TYPE_JSON: &str = "application/json";
/// Default `Accept-Language`.
pub const ACCEPT_LANGUAGE_ZH_CN: &str = "zh-cn";

/// Scheme name used in the `Authorization` header.
pub const AUTHORIZATION_SCHEME: &str = "OPENSEARCH";

/// Parameters and headers with this exact name never take part in signing.
pub const SIGNATURE_KEY: &str = "Signature";

/// Env name of the access key id.
pub const ALIBABA_CLOUD_ACCESS_KEY_ID: &str = "ALIBABA_CLOUD_ACCESS_KEY_ID";
/// Env name of the access key secret.
pub const ALIBABA_CLOUD_ACCESS_KEY_SECRET: &str = "ALIBABA_CLOUD_ACCESS_KEY_SECRET";

/// AsciiSet for RFC 3986 component encoding.
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
/// - Space becomes `%20`, never `+`.
pub static OPENSEARCH_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// AsciiSet for the canonicalized resource path.
///
/// Same as [`OPENSEARCH_QUERY_ENCODE_SET`] but keeps `/` unescaped.
pub static OPENSEARCH_URI_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
