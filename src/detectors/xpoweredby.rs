// File: xpoweredby.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::detectors::Detector;
use crate::http::HttpClient;
use async_trait::async_trait;

pub struct XPoweredByDetector;

#[async_trait]
impl Detector for XPoweredByDetector {
    fn name(&self) -> &'static str {
        "x-powered-by"
    }

    // The header value is returned unmodified, whatever it says.
    async fn probe(&self, http: &HttpClient, target: &str) -> Option<String> {
        let response = http.get(target).await;
        if !response.success() {
            return None;
        }
        response.header("X-Powered-By").map(str::to_string)
    }
}
