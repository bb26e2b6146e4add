// File: common/mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(dead_code)]

use phpprobe::config::ConfigParameter;
use phpprobe::http::HttpClient;
use phpprobe::scanstate::ScanState;
use std::collections::HashMap;
use std::sync::Arc;
use wiremock::{MockServer, ResponseTemplate};

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_state() -> Arc<ScanState> {
    Arc::new(ScanState::new())
}

pub fn test_http_client(state: Arc<ScanState>) -> HttpClient {
    HttpClient::new(state, &ConfigParameter::new())
}

pub fn create_mock_response(
    status: u16,
    body: &str,
    headers: HashMap<&str, &str>,
) -> ResponseTemplate {
    let mut response = ResponseTemplate::new(status).set_body_string(body);
    for (key, value) in headers {
        response = response.append_header(key, value);
    }
    response
}

pub fn create_html_response(content: &str) -> ResponseTemplate {
    let mut headers = HashMap::new();
    headers.insert("content-type", "text/html");
    create_mock_response(200, content, headers)
}

pub fn sample_phpinfo_page() -> String {
    r#"<!DOCTYPE html>
<html>
<head><title>phpinfo()</title></head>
<body>
<div class="center">
    <table>
        <tr class="h"><td><h1 class="p">PHP Version 8.0.1</h1></td></tr>
    </table>
</div>
</body>
</html>"#
        .to_string()
}

pub fn sample_generator_page() -> String {
    r#"<!DOCTYPE html>
<html>
<head>
    <title>Test Site</title>
    <meta charset="utf-8">
    <meta name="Generator" content="PHP 7.4">
</head>
<body>
    <h1>Welcome to Test Site</h1>
</body>
</html>"#
        .to_string()
}

pub fn sample_plain_page() -> String {
    r#"<!DOCTYPE html>
<html>
<head><title>Nothing here</title></head>
<body><p>A perfectly ordinary page.</p></body>
</html>"#
        .to_string()
}
