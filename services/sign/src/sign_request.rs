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

use async_trait::async_trait;
use http::header::{ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE, DATE};
use http::{HeaderValue, Method};
use log::debug;
use opensearch_core::time::{format_iso8601, now, DateTime};
use opensearch_core::{Context, Error, Result, SignRequest};
use percent_encoding::percent_decode_str;

use crate::canonical::SigningContext;
use crate::constants::*;
use crate::nonce::generate_nonce;
use crate::Credential;

/// RequestSigner that implements the OpenSearch signature.
///
/// - [OpenSearch: Signature](https://help.aliyun.com/document_detail/54237.html)
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
    nonce: Option<String>,
}

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Specify the nonce used when the request doesn't carry one.
    ///
    /// # Note
    ///
    /// Reusing a nonce will be rejected by the server.
    /// Only use this function for testing.
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
        expires_in: Option<Duration>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid(
                "no credential available to sign the request",
            ));
        };
        if expires_in.is_some() {
            return Err(Error::request_invalid(
                "OpenSearch doesn't support presigned requests",
            ));
        }

        let signing_time = self.time.unwrap_or_else(now);

        if !req.headers.contains_key(CONTENT_TYPE) {
            req.headers
                .insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        }
        if !req.headers.contains_key(ACCEPT_LANGUAGE) {
            req.headers.insert(
                ACCEPT_LANGUAGE,
                HeaderValue::from_static(ACCEPT_LANGUAGE_ZH_CN),
            );
        }
        if req.method == Method::GET || !req.headers.contains_key(CONTENT_MD5) {
            req.headers
                .insert(CONTENT_MD5, HeaderValue::from_static(""));
        }
        if !req.headers.contains_key(X_OPENSEARCH_NONCE) {
            let nonce = match &self.nonce {
                Some(v) => v.clone(),
                None => generate_nonce(signing_time),
            };
            req.headers.insert(X_OPENSEARCH_NONCE, nonce.parse()?);
        }
        req.headers
            .insert(DATE, format_iso8601(signing_time).parse()?);

        let ctx = build_signing_context(req)?;
        let signature = ctx.signature(&cred.access_key_secret);
        debug!("calculated signature: {signature}");

        let mut value: HeaderValue =
            format!("{} {}:{}", AUTHORIZATION_SCHEME, cred.access_key_id, signature).parse()?;
        value.set_sensitive(true);
        req.headers.insert(AUTHORIZATION, value);

        Ok(())
    }
}

/// Collect every signature input from request parts.
fn build_signing_context(req: &http::request::Parts) -> Result<SigningContext> {
    let path = percent_decode_str(req.uri.path()).decode_utf8()?;
    let mut ctx = SigningContext::new(req.method.clone(), path);

    ctx.content_md5 = header_value(req, CONTENT_MD5)?;
    ctx.content_type = header_value(req, CONTENT_TYPE.as_str())?;
    ctx.date = header_value(req, DATE.as_str())?;

    for (name, value) in req.headers.iter() {
        if name.as_str().starts_with(X_OPENSEARCH_PREFIX) {
            ctx.headers
                .push((name.as_str().to_string(), value.to_str()?.to_string()));
        }
    }

    if let Some(query) = req.uri.query() {
        ctx.query = parse_query(query)?;
    }

    Ok(ctx)
}

/// Split a raw query into decoded pairs. `+` stays a literal plus.
fn parse_query(query: &str) -> Result<Vec<(String, String)>> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            Ok((
                percent_decode_str(k).decode_utf8()?.into_owned(),
                percent_decode_str(v).decode_utf8()?.into_owned(),
            ))
        })
        .collect()
}

fn header_value(req: &http::request::Parts, name: &str) -> Result<String> {
    match req.headers.get(name) {
        Some(v) => Ok(v.to_str()?.to_string()),
        None => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opensearch_core::time::parse_iso8601;
    use pretty_assertions::assert_eq;

    fn signer() -> RequestSigner {
        RequestSigner::new()
            .with_time(parse_iso8601("2024-01-01T00:00:00Z").unwrap())
            .with_nonce("170406720000012345")
    }

    fn cred() -> Credential {
        Credential::new("ak", "sk")
    }

    #[tokio::test]
    async fn test_sign_get_request() -> Result<()> {
        let mut req = http::Request::get("http://example.com/v3/openapi/apps?page=1")
            .body(())?
            .into_parts()
            .0;

        signer()
            .sign_request(&Context::new(), &mut req, Some(&cred()), None)
            .await?;

        assert_eq!(req.headers[CONTENT_TYPE], "application/json");
        assert_eq!(req.headers[ACCEPT_LANGUAGE], "zh-cn");
        assert_eq!(req.headers[CONTENT_MD5], "");
        assert_eq!(req.headers[DATE], "2024-01-01T00:00:00Z");
        assert_eq!(req.headers[X_OPENSEARCH_NONCE], "170406720000012345");

        let mut expected = SigningContext::new(Method::GET, "/v3/openapi/apps");
        expected.date = "2024-01-01T00:00:00Z".to_string();
        expected.headers = vec![(
            X_OPENSEARCH_NONCE.to_string(),
            "170406720000012345".to_string(),
        )];
        expected.query = vec![("page".to_string(), "1".to_string())];

        let authorization = req.headers[AUTHORIZATION].to_str()?;
        assert_eq!(authorization, format!("OPENSEARCH ak:{}", expected.signature("sk")));
        assert!(req.headers[AUTHORIZATION].is_sensitive());

        Ok(())
    }

    #[tokio::test]
    async fn test_sign_get_ignores_content_md5() -> Result<()> {
        let mut req = http::Request::get("http://example.com/v3/openapi/apps")
            .header(CONTENT_MD5, "d41d8cd98f00b204e9800998ecf8427e")
            .body(())?
            .into_parts()
            .0;

        signer()
            .sign_request(&Context::new(), &mut req, Some(&cred()), None)
            .await?;

        assert_eq!(req.headers[CONTENT_MD5], "");
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_keeps_existing_nonce_and_md5() -> Result<()> {
        let mut req = http::Request::post("http://example.com/v3/openapi/apps/app/table/actions/bulk")
            .header(CONTENT_MD5, "0cc175b9c0f1b6a831c399e269772661")
            .header(X_OPENSEARCH_NONCE, "99")
            .body(())?
            .into_parts()
            .0;

        signer()
            .sign_request(&Context::new(), &mut req, Some(&cred()), None)
            .await?;

        assert_eq!(req.headers[CONTENT_MD5], "0cc175b9c0f1b6a831c399e269772661");
        assert_eq!(req.headers[X_OPENSEARCH_NONCE], "99");

        let ctx = build_signing_context(&req)?;
        assert_eq!(
            ctx.string_to_sign(),
            "POST\n0cc175b9c0f1b6a831c399e269772661\napplication/json\n2024-01-01T00:00:00Z\nx-opensearch-nonce:99\n/v3/openapi/apps/app/table/actions/bulk"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_path_is_reencoded() -> Result<()> {
        let req = http::Request::get("http://example.com/v3/openapi/apps/my%20app?q=a%20b")
            .header(DATE, "2024-01-01T00:00:00Z")
            .body(())?
            .into_parts()
            .0;

        let ctx = build_signing_context(&req)?;
        assert_eq!(ctx.path, "/v3/openapi/apps/my app");
        assert_eq!(
            ctx.canonicalized_resource(),
            "/v3/openapi/apps/my%20app?q=a%20b"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_without_credential() -> Result<()> {
        let mut req = http::Request::get("http://example.com/v3/openapi/apps")
            .body(())?
            .into_parts()
            .0;

        let err = signer()
            .sign_request(&Context::new(), &mut req, None, None)
            .await
            .unwrap_err();
        assert!(err.is_credential_error());
        assert!(!req.headers.contains_key(AUTHORIZATION));
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_rejects_presign() -> Result<()> {
        let mut req = http::Request::get("http://example.com/v3/openapi/apps")
            .body(())?
            .into_parts()
            .0;

        let err = signer()
            .sign_request(
                &Context::new(),
                &mut req,
                Some(&cred()),
                Some(Duration::from_secs(60)),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind(), opensearch_core::ErrorKind::RequestInvalid);
        Ok(())
    }
}
