// File: errormessage.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::detectors::{Detector, PHP_VERSION_RE};
use crate::http::HttpClient;
use async_trait::async_trait;
use log::debug;

pub struct ErrorMessageDetector;

#[async_trait]
impl Detector for ErrorMessageDetector {
    fn name(&self) -> &'static str {
        "error-message"
    }

    // A fatal-error page only counts when it also leaks a version string.
    async fn probe(&self, http: &HttpClient, target: &str) -> Option<String> {
        let response = http.get(target).await;
        if !response.success() {
            return None;
        }

        if !response.body().contains("PHP Fatal error") {
            return None;
        }

        let matched = PHP_VERSION_RE
            .find(response.body())
            .map(|m| m.as_str().to_string());
        if matched.is_none() {
            debug!("{} shows a PHP fatal error without a version", target);
        }
        matched
    }
}
