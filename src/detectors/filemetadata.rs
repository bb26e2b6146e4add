// File: filemetadata.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::detectors::Detector;
use crate::http::HttpClient;
use async_trait::async_trait;

// Intentionally inert: version hints in file metadata (VCS artifacts,
// deployment manifests) need access a plain HTTP GET does not provide.
// The stage stays registered so the pipeline keeps its fixed seven steps.
pub struct FileMetadataDetector;

#[async_trait]
impl Detector for FileMetadataDetector {
    fn name(&self) -> &'static str {
        "file-metadata"
    }

    async fn probe(&self, _http: &HttpClient, _target: &str) -> Option<String> {
        None
    }
}
