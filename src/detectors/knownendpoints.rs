// File: knownendpoints.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::detectors::{Detector, PHP_VERSION_RE};
use crate::http::HttpClient;
use async_trait::async_trait;
use log::debug;

pub struct KnownEndpointsDetector;

// Diagnostic pages commonly left reachable on PHP hosts, probed in order.
const KNOWN_ENDPOINTS: [&str; 3] = ["phpinfo.php", "info.php", "test.php"];

#[async_trait]
impl Detector for KnownEndpointsDetector {
    fn name(&self) -> &'static str {
        "known-endpoints"
    }

    async fn probe(&self, http: &HttpClient, target: &str) -> Option<String> {
        for endpoint in KNOWN_ENDPOINTS {
            let probe_url = format!("{}/{}", target, endpoint);
            let response = http.get(&probe_url).await;

            if !response.success() || !response.is_status_ok() {
                debug!("{} not usable (status {})", probe_url, response.status());
                continue;
            }

            if let Some(m) = PHP_VERSION_RE.find(response.body()) {
                return Some(m.as_str().to_string());
            }
        }
        None
    }
}
