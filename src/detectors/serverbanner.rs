// File: serverbanner.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::detectors::Detector;
use crate::http::HttpClient;
use async_trait::async_trait;

pub struct ServerBannerDetector;

#[async_trait]
impl Detector for ServerBannerDetector {
    fn name(&self) -> &'static str {
        "server-banner"
    }

    // "PHP" is matched case-sensitively; a banner like "Apache (php)" is
    // skipped on purpose.
    async fn probe(&self, http: &HttpClient, target: &str) -> Option<String> {
        let response = http.get(target).await;
        if !response.success() {
            return None;
        }

        response
            .header("Server")
            .filter(|banner| banner.contains("PHP"))
            .map(str::to_string)
    }
}
