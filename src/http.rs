// File: http.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::config::ConfigParameter;
use crate::response::HttpResponse;
use crate::scanstate::ScanState;
use log::warn;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpClient {
    state_ptr: Arc<ScanState>,
    client: reqwest::Client,
    timeout: u64,
}

impl HttpClient {
    pub fn new(state_ptr: Arc<ScanState>, config_ptr: &ConfigParameter) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("Failed to build reqwest client");
        HttpClient {
            state_ptr,
            client,
            timeout: config_ptr.timeout(),
        }
    }

    // One GET, redirects followed by the client. Transport errors never
    // propagate: they are logged and folded into the returned response.
    pub async fn get(&self, url: &str) -> HttpResponse {
        self.state_ptr.add_request();

        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(self.timeout))
            .send()
            .await;

        match response {
            Ok(resp) => {
                let final_url = resp.url().to_string();
                let status = resp.status().as_u16();
                let headers = resp.headers().clone();
                match resp.text().await {
                    Ok(body) => HttpResponse::new(final_url, status, headers, body),
                    Err(e) => {
                        self.state_ptr.add_request_failure();
                        warn!("Error reading body from {}: {}", final_url, e);
                        HttpResponse::failed_with_status(
                            final_url,
                            status,
                            headers,
                            format!("Failed to read body: {}", e),
                        )
                    }
                }
            }
            Err(e) => {
                self.state_ptr.add_request_failure();
                warn!("Error accessing {}: {}", url, e);
                HttpResponse::failed(url.to_string(), e.to_string())
            }
        }
    }
}
