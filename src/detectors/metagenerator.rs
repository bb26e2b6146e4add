// File: metagenerator.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::detectors::Detector;
use crate::http::HttpClient;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

pub struct MetaGeneratorDetector;

// Attributes are pulled out of each tag separately, so their order inside
// the tag does not matter.
static META_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<meta\s[^>]*>").unwrap());

static NAME_ATTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)\bname\s*=\s*["']?([^"'>\s]+)["']?"#).unwrap());

static CONTENT_ATTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)\bcontent\s*=\s*("([^"]*)"|'([^']*)'|[^"'>\s]+)"#).unwrap());

fn generator_content(tag: &str) -> Option<String> {
    let name = NAME_ATTR_RE.captures(tag)?.get(1)?.as_str();
    if !name.eq_ignore_ascii_case("generator") {
        return None;
    }

    let captures = CONTENT_ATTR_RE.captures(tag)?;
    let content = captures
        .get(2)
        .or_else(|| captures.get(3))
        .or_else(|| captures.get(1))?
        .as_str();

    if content.to_lowercase().contains("php") {
        Some(content.to_string())
    } else {
        None
    }
}

#[async_trait]
impl Detector for MetaGeneratorDetector {
    fn name(&self) -> &'static str {
        "meta-generator"
    }

    async fn probe(&self, http: &HttpClient, target: &str) -> Option<String> {
        let response = http.get(target).await;
        if !response.success() {
            return None;
        }

        META_TAG_RE
            .find_iter(response.body())
            .find_map(|tag| generator_content(tag.as_str()))
    }
}
