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
use std::time::Duration;

use async_trait::async_trait;
use http::request::Parts;
use opensearch_core::hash::base64_hmac_sha1;
use opensearch_core::time::{format_iso8601, now};
use opensearch_core::{
    Context, Error, ProvideCredential, ProvideCredentialChain, Result, SignRequest, Signer,
    SigningCredential, StaticEnv,
};

#[derive(Clone, Debug)]
struct TokenCredential {
    key: String,
    secret: String,
}

impl SigningCredential for TokenCredential {
    fn is_valid(&self) -> bool {
        !self.key.is_empty() && !self.secret.is_empty()
    }
}

/// Loads `TOKEN_KEY` / `TOKEN_SECRET` from the context env.
#[derive(Debug)]
struct EnvTokenProvider;

#[async_trait]
impl ProvideCredential for EnvTokenProvider {
    type Credential = TokenCredential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        match (ctx.env_var("TOKEN_KEY"), ctx.env_var("TOKEN_SECRET")) {
            (Some(key), Some(secret)) => Ok(Some(TokenCredential { key, secret })),
            _ => Ok(None),
        }
    }
}

/// Always returns the same credential.
#[derive(Debug)]
struct FixedTokenProvider(TokenCredential);

#[async_trait]
impl ProvideCredential for FixedTokenProvider {
    type Credential = TokenCredential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.0.clone()))
    }
}

/// Signs `METHOD\nDATE\nPATH` with HMAC-SHA1.
#[derive(Debug)]
struct TokenSigner;

#[async_trait]
impl SignRequest for TokenSigner {
    type Credential = TokenCredential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        credential: Option<&Self::Credential>,
        _: Option<Duration>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("no credential"))?;

        let date = format_iso8601(now());
        let string_to_sign = format!("{}\n{}\n{}", req.method, date, req.uri.path());
        let signature = base64_hmac_sha1(cred.secret.as_bytes(), string_to_sign.as_bytes());

        req.headers.insert(http::header::DATE, date.parse()?);
        req.headers.insert(
            http::header::AUTHORIZATION,
            format!("TOKEN {}:{}", cred.key, signature).parse()?,
        );
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Only the key is set, so the env provider is skipped.
    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from([("TOKEN_KEY".to_string(), "from-env".to_string())]),
    });

    let chain = ProvideCredentialChain::new()
        .push(EnvTokenProvider)
        .push(FixedTokenProvider(TokenCredential {
            key: "fallback-key".to_string(),
            secret: "fallback-secret".to_string(),
        }));
    let signer = Signer::new(ctx, chain, TokenSigner);

    let mut parts = http::Request::get("http://127.0.0.1:8080/v3/openapi/apps")
        .body(())?
        .into_parts()
        .0;

    match signer.sign(&mut parts, None).await {
        Ok(()) => println!("signed headers: {:?}", parts.headers),
        Err(err) => eprintln!("failed to sign request: {err}"),
    }

    Ok(())
}
