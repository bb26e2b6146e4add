// File: sourcecode.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::detectors::{Detector, PHP_VERSION_RE};
use crate::http::HttpClient;
use async_trait::async_trait;

pub struct SourceCodeDetector;

#[async_trait]
impl Detector for SourceCodeDetector {
    fn name(&self) -> &'static str {
        "source-code"
    }

    // Unlike the header probes this one insists on a 2xx response before
    // trusting anything found in the body.
    async fn probe(&self, http: &HttpClient, target: &str) -> Option<String> {
        let response = http.get(target).await;
        if !response.success() || !response.is_status_success() {
            return None;
        }

        PHP_VERSION_RE
            .find(response.body())
            .map(|m| m.as_str().to_string())
    }
}
