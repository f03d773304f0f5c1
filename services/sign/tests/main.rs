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

use std::collections::HashMap;

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use http::header::AUTHORIZATION;
use log::debug;
use opensearch_core::{Context, Result, Signer, StaticEnv};
use opensearch_sign::constants::*;
use opensearch_sign::{
    DefaultCredentialProvider, RequestSigner, SigningContext, StaticCredentialProvider,
};
use pretty_assertions::assert_eq;
use sha1::Sha1;
use test_case::test_case;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn reference_signature(secret: &str, string_to_sign: &str) -> String {
    let mut mac = Hmac::<Sha1>::new_from_slice(secret.as_bytes()).expect("any key length is valid");
    mac.update(string_to_sign.as_bytes());
    BASE64_STANDARD.encode(mac.finalize().into_bytes())
}

fn fixed_time() -> opensearch_core::time::DateTime {
    chrono::DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("time must be valid")
        .into()
}

#[test]
fn test_documented_string_to_sign() {
    init_logger();

    let mut ctx = SigningContext::new(http::Method::GET, "/v3/openapi/apps");
    ctx.date = "2024-01-01T00:00:00Z".to_string();
    ctx.query = vec![("page".to_string(), "1".to_string())];

    let expected = "GET\n\napplication/json\n2024-01-01T00:00:00Z\n/v3/openapi/apps?page=1";
    assert_eq!(ctx.string_to_sign(), expected);
    assert_eq!(ctx.signature("secret"), reference_signature("secret", expected));
}

#[test_case(
    "/v3/openapi/apps/app/search?query=config%3Dstart%3A0&fetch_fields=title%3Bbody",
    "/v3/openapi/apps/app/search?fetch_fields=title%3Bbody&query=config%3Dstart%3A0";
    "query params are sorted"
)]
#[test_case(
    "/v3/openapi/apps?page2=a&page10=b&Signature=x&empty=",
    "/v3/openapi/apps?page2=a&page10=b";
    "natural order and filtered"
)]
#[test_case("/v3/openapi/apps/%E4%B8%AD", "/v3/openapi/apps/%E4%B8%AD"; "unicode path")]
#[test_case(
    "/v3/openapi/apps/a/search?sort=+price&kvpairs=a%2Bb",
    "/v3/openapi/apps/a/search?kvpairs=a%2Bb&sort=%2Bprice";
    "plus is a literal"
)]
#[tokio::test]
async fn test_signer_resource(uri: &str, resource: &str) -> Result<()> {
    init_logger();

    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new("ak", "sk"),
        RequestSigner::new()
            .with_time(fixed_time())
            .with_nonce("170406720000054321"),
    );

    let mut req = http::Request::get(format!("http://opensearch.example.com{uri}"))
        .body(())?
        .into_parts()
        .0;
    signer.sign(&mut req, None).await?;
    debug!("signed request: {req:?}");

    let string_to_sign = format!(
        "GET\n\napplication/json\n2024-01-01T00:00:00Z\nx-opensearch-nonce:170406720000054321\n{resource}"
    );
    let expected = format!("OPENSEARCH ak:{}", reference_signature("sk", &string_to_sign));
    assert_eq!(req.headers[AUTHORIZATION].to_str()?, expected);

    Ok(())
}

#[tokio::test]
async fn test_signer_with_env_credential() -> Result<()> {
    init_logger();

    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from([
            (ALIBABA_CLOUD_ACCESS_KEY_ID.to_string(), "env_ak".to_string()),
            (
                ALIBABA_CLOUD_ACCESS_KEY_SECRET.to_string(),
                "env_sk".to_string(),
            ),
        ]),
    });
    let signer = Signer::new(
        ctx,
        DefaultCredentialProvider::new(),
        RequestSigner::new().with_time(fixed_time()),
    );

    let mut req = http::Request::post("http://opensearch.example.com/v3/openapi/apps")
        .header(CONTENT_MD5, "0cc175b9c0f1b6a831c399e269772661")
        .body(())?
        .into_parts()
        .0;
    signer.sign(&mut req, None).await?;

    let nonce = req.headers[X_OPENSEARCH_NONCE].to_str()?.to_string();
    assert!(nonce.starts_with("1704067200000"));
    assert_eq!(nonce.len(), 18);

    let string_to_sign = format!(
        "POST\n0cc175b9c0f1b6a831c399e269772661\napplication/json\n2024-01-01T00:00:00Z\nx-opensearch-nonce:{nonce}\n/v3/openapi/apps"
    );
    let expected = format!("OPENSEARCH env_ak:{}", reference_signature("env_sk", &string_to_sign));
    assert_eq!(req.headers[AUTHORIZATION].to_str()?, expected);

    Ok(())
}

#[tokio::test]
async fn test_signer_without_credential() -> Result<()> {
    init_logger();

    let signer = Signer::new(
        Context::new().with_env(StaticEnv::default()),
        DefaultCredentialProvider::new(),
        RequestSigner::new(),
    );

    let mut req = http::Request::get("http://opensearch.example.com/v3/openapi/apps")
        .body(())?
        .into_parts()
        .0;
    let err = signer.sign(&mut req, None).await.unwrap_err();
    assert!(err.is_credential_error());

    Ok(())
}
