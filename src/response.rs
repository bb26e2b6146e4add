// File: response.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use reqwest::header::HeaderMap;

#[derive(Debug)]
pub struct HttpResponse {
    url: String,
    status: u16,
    headers: HeaderMap,
    body: String,
    error: Option<String>,
}

impl HttpResponse {
    pub fn new(url: String, status: u16, headers: HeaderMap, body: String) -> Self {
        HttpResponse {
            url,
            status,
            headers,
            body,
            error: None,
        }
    }

    // A request that never produced a usable response. Status 0, empty body,
    // the reason kept verbatim so callers and tests can inspect it.
    pub fn failed(url: String, reason: String) -> Self {
        HttpResponse {
            url,
            status: 0,
            headers: HeaderMap::new(),
            body: String::new(),
            error: Some(reason),
        }
    }

    pub fn failed_with_status(
        url: String,
        status: u16,
        headers: HeaderMap,
        reason: String,
    ) -> Self {
        HttpResponse {
            url,
            status,
            headers,
            body: String::new(),
            error: Some(reason),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_status_ok(&self) -> bool {
        self.status == 200
    }

    pub fn is_status_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    // Header lookup is case-insensitive; values that are not valid UTF-8
    // count as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}
