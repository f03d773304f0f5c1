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

//! Canonicalization of OpenSearch requests.
//!
//! Everything in this module is a pure function of its input: the same
//! [`SigningContext`] always produces the same string to sign, no matter in
//! which order headers or query parameters were inserted.

use std::cmp::Ordering;
use std::fmt::Write;

use http::Method;
use log::debug;
use opensearch_core::hash::base64_hmac_sha1;
use percent_encoding::utf8_percent_encode;

use crate::constants::*;

/// SigningContext carries every input of the OpenSearch signature.
///
/// It is built fresh for one outgoing request, consumed by the signer and
/// then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningContext {
    /// HTTP method.
    pub method: Method,
    /// Request path, already prefixed with version and api type, not percent encoded.
    pub path: String,
    /// Hex encoded MD5 of the body, empty if there is no body.
    pub content_md5: String,
    /// Value of the `Content-Type` header.
    pub content_type: String,
    /// Value of the `Date` header, `%Y-%m-%dT%H:%M:%SZ` in UTC.
    pub date: String,
    /// OpenSearch specific headers, such as `X-Opensearch-Nonce`.
    pub headers: Vec<(String, String)>,
    /// Query parameters. An empty value means the parameter is absent.
    pub query: Vec<(String, String)>,
}

impl SigningContext {
    /// Create a context for `method` and `path` with an `application/json`
    /// content type and everything else empty.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            content_md5: String::new(),
            content_type: CONTENT_TYPE_JSON.to_string(),
            date: String::new(),
            headers: Vec::new(),
            query: Vec::new(),
        }
    }

    /// Construct string to sign
    ///
    /// ## Format
    ///
    /// ```text
    /// VERB + "\n" +
    /// Content-MD5 + "\n" +
    /// Content-Type + "\n" +
    /// Date + "\n" +
    /// CanonicalizedOpenSearchHeaders +
    /// CanonicalizedResource;
    /// ```
    pub fn string_to_sign(&self) -> String {
        let mut s = String::with_capacity(128);
        // Writing into a String never fails.
        let _ = writeln!(&mut s, "{}", self.method.as_str().to_ascii_uppercase());
        let _ = writeln!(&mut s, "{}", self.content_md5);
        let _ = writeln!(&mut s, "{}", self.content_type);
        let _ = writeln!(&mut s, "{}", self.date);
        s.push_str(&self.canonicalized_headers());
        s.push_str(&self.canonicalized_resource());

        debug!("string to sign: {}", &s);
        s
    }

    /// Base64 encoded HMAC-SHA1 of [`SigningContext::string_to_sign`].
    pub fn signature(&self, secret: &str) -> String {
        base64_hmac_sha1(secret.as_bytes(), self.string_to_sign().as_bytes())
    }

    /// Every filtered header as `lowercase(name):value\n`.
    pub fn canonicalized_headers(&self) -> String {
        let mut s = String::new();
        for (k, v) in canonicalize_pairs(&self.headers) {
            s.push_str(&k.to_lowercase());
            s.push(':');
            s.push_str(v);
            s.push('\n');
        }
        s
    }

    /// Encoded path followed by `?` and the deterministic query string when
    /// any query parameter survives filtering.
    pub fn canonicalized_resource(&self) -> String {
        let resource = encode_path(&self.path);
        let query = query_string(canonicalize_pairs(&self.query));

        if query.is_empty() {
            resource
        } else {
            format!("{resource}?{query}")
        }
    }
}

/// Filter and sort pairs before they take part in signing.
///
/// - Pairs whose key is exactly `Signature` are dropped.
/// - Pairs with an empty value are dropped.
/// - Survivors are sorted by key with [`natural_cmp_ignore_case`]; keys that
///   compare equal fall back to byte order so the result is total.
pub fn canonicalize_pairs<K, V>(pairs: &[(K, V)]) -> Vec<(&str, &str)>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut pairs: Vec<(&str, &str)> = pairs
        .iter()
        .map(|(k, v)| (k.as_ref(), v.as_ref()))
        .filter(|(k, v)| *k != SIGNATURE_KEY && !v.is_empty())
        .collect();

    pairs.sort_by(|(ka, va), (kb, vb)| {
        natural_cmp_ignore_case(ka, kb)
            .then_with(|| ka.cmp(kb))
            .then_with(|| va.cmp(vb))
    });
    pairs
}

/// Build a query string, keeping the given order.
///
/// Keys and values are percent encoded per RFC 3986, pairs are joined by `&`.
///
/// ```shell
/// [(a, b c), (d, e)] => "a=b%20c&d=e"
/// ```
pub fn query_string<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut s = String::new();
    for (idx, (k, v)) in pairs.into_iter().enumerate() {
        if idx != 0 {
            s.push('&');
        }
        s.extend(utf8_percent_encode(k.as_ref(), &OPENSEARCH_QUERY_ENCODE_SET));
        s.push('=');
        s.extend(utf8_percent_encode(v.as_ref(), &OPENSEARCH_QUERY_ENCODE_SET));
    }
    s
}

/// Percent encode a request path, leaving `/` untouched.
pub fn encode_path(path: &str) -> String {
    utf8_percent_encode(path, &OPENSEARCH_URI_ENCODE_SET).to_string()
}

/// Natural order, case-insensitive comparison.
///
/// Runs of ASCII digits compare by numeric value, so `page2` sorts before
/// `page10`; everything else compares byte by byte after ASCII lowercasing.
///
/// This is an approximation of natural ordering: zero-padded digit runs
/// compare by value rather than as fractions, and whitespace is never
/// skipped. Neither case occurs in OpenSearch parameter names.
pub fn natural_cmp_ignore_case(a: &str, b: &str) -> Ordering {
    let (mut a, mut b) = (a.as_bytes(), b.as_bytes());

    loop {
        match (a.first(), b.first()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let (da, ra) = split_digits(a);
                let (db, rb) = split_digits(b);
                match cmp_digits(da, db) {
                    Ordering::Equal => {
                        a = ra;
                        b = rb;
                    }
                    ord => return ord,
                }
            }
            (Some(x), Some(y)) => match x.to_ascii_lowercase().cmp(&y.to_ascii_lowercase()) {
                Ordering::Equal => {
                    a = &a[1..];
                    b = &b[1..];
                }
                ord => return ord,
            },
        }
    }
}

fn split_digits(s: &[u8]) -> (&[u8], &[u8]) {
    let end = s.iter().position(|c| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn cmp_digits(a: &[u8], b: &[u8]) -> Ordering {
    fn trim_zeros(s: &[u8]) -> &[u8] {
        let start = s.iter().position(|c| *c != b'0').unwrap_or(s.len());
        &s[start..]
    }
    let (ta, tb) = (trim_zeros(a), trim_zeros(b));

    ta.len()
        .cmp(&tb.len())
        .then_with(|| ta.cmp(tb))
        // More leading zeros sort first.
        .then_with(|| b.len().cmp(&a.len()))
}
