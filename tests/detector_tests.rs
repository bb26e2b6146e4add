// File: detector_tests.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

mod common;

use common::*;
use phpprobe::detectors::DetectorPipeline;
use serial_test::serial;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
#[serial]
async fn test_powered_by_header_takes_precedence() {
    let mock_server = setup_mock_server().await;

    // Header, meta tag and banner all present; only the header may win.
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            create_html_response(&sample_generator_page())
                .append_header("x-powered-by", "PHP/8.1.2")
                .append_header("server", "Apache/2.4.41 PHP/8.1.2"),
        )
        .mount(&mock_server)
        .await;

    let state = test_state();
    let http = test_http_client(state.clone());
    let pipeline = DetectorPipeline::new();

    let outcome = pipeline.run(&http, &mock_server.uri()).await;
    let detection = outcome.detection.unwrap();

    assert_eq!(detection.detector, "x-powered-by");
    assert_eq!(detection.value, "PHP/8.1.2");
    assert_eq!(outcome.attempted, vec!["x-powered-by"]);
    assert_eq!(state.requests(), 1);
}

#[tokio::test]
#[serial]
async fn test_falls_back_to_meta_generator() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(create_html_response(&sample_generator_page()))
        .mount(&mock_server)
        .await;

    let state = test_state();
    let http = test_http_client(state);
    let pipeline = DetectorPipeline::new();

    let outcome = pipeline.run(&http, &mock_server.uri()).await;
    let detection = outcome.detection.unwrap();

    assert_eq!(detection.detector, "meta-generator");
    assert_eq!(detection.value, "PHP 7.4");
    assert_eq!(outcome.attempted, vec!["x-powered-by", "meta-generator"]);
}

#[tokio::test]
#[serial]
async fn test_falls_back_to_known_endpoints() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(create_html_response(&sample_plain_page()))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/info.php"))
        .respond_with(create_html_response(&sample_phpinfo_page()))
        .mount(&mock_server)
        .await;

    let state = test_state();
    let http = test_http_client(state);
    let pipeline = DetectorPipeline::new();

    let outcome = pipeline.run(&http, &mock_server.uri()).await;
    let detection = outcome.detection.unwrap();

    assert_eq!(detection.detector, "known-endpoints");
    assert_eq!(detection.value, "PHP Version 8.0.1");
    assert_eq!(
        outcome.attempted,
        vec!["x-powered-by", "meta-generator", "known-endpoints"]
    );
}

#[tokio::test]
#[serial]
async fn test_falls_back_to_source_code_scan() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(create_html_response(
            "<html><!-- PHP Version 8.2.7 --></html>",
        ))
        .mount(&mock_server)
        .await;

    let state = test_state();
    let http = test_http_client(state);
    let pipeline = DetectorPipeline::new();

    let outcome = pipeline.run(&http, &mock_server.uri()).await;
    let detection = outcome.detection.unwrap();

    assert_eq!(detection.detector, "source-code");
    assert_eq!(detection.value, "PHP Version 8.2.7");
}

#[tokio::test]
#[serial]
async fn test_falls_back_to_server_banner() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            create_html_response(&sample_plain_page())
                .append_header("server", "Apache/2.4.41 (Unix) PHP/7.4.3"),
        )
        .mount(&mock_server)
        .await;

    let state = test_state();
    let http = test_http_client(state);
    let pipeline = DetectorPipeline::new();

    let outcome = pipeline.run(&http, &mock_server.uri()).await;
    let detection = outcome.detection.unwrap();

    assert_eq!(detection.detector, "server-banner");
    assert_eq!(detection.value, "Apache/2.4.41 (Unix) PHP/7.4.3");
}

#[tokio::test]
#[serial]
async fn test_falls_back_to_error_message() {
    let mock_server = setup_mock_server().await;

    // 500 keeps the source-code scan out; the fatal-error page itself
    // carries the version.
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string(
            "PHP Fatal error: Uncaught Error in index.php on line 3\nPHP Version 8.1.2",
        ))
        .mount(&mock_server)
        .await;

    let state = test_state();
    let http = test_http_client(state);
    let pipeline = DetectorPipeline::new();

    let outcome = pipeline.run(&http, &mock_server.uri()).await;
    let detection = outcome.detection.unwrap();

    assert_eq!(detection.detector, "error-message");
    assert_eq!(detection.value, "PHP Version 8.1.2");
}

#[tokio::test]
#[serial]
async fn test_exhaustion_runs_all_detectors() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(create_html_response(&sample_plain_page()))
        .mount(&mock_server)
        .await;

    let state = test_state();
    let http = test_http_client(state.clone());
    let pipeline = DetectorPipeline::new();

    let outcome = pipeline.run(&http, &mock_server.uri()).await;

    assert!(outcome.detection.is_none());
    assert_eq!(
        outcome.attempted,
        vec![
            "x-powered-by",
            "meta-generator",
            "known-endpoints",
            "source-code",
            "server-banner",
            "error-message",
            "file-metadata",
        ]
    );
    // Five single-request detectors plus three endpoint probes; the inert
    // file-metadata stage issues nothing.
    assert_eq!(state.requests(), 8);
}
