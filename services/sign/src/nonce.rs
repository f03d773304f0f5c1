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

use opensearch_core::time::{timestamp_millis, DateTime};
use rand::Rng;

/// Generate a value for `X-Opensearch-Nonce`.
///
/// The nonce is the millisecond timestamp of `now` followed by a random
/// five digit number.
pub fn generate_nonce(now: DateTime) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(10000..=99999);
    format!("{}{}", timestamp_millis(now), suffix)
}
