// File: scanner.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::config::ConfigParameter;
use crate::detectors::{Detection, DetectorPipeline};
use crate::http::HttpClient;
use crate::scanstate::ScanState;
use std::sync::Arc;

pub const NOT_FOUND_SENTINEL: &str = "PHP version not found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetState {
    Pending,
    Detected(Detection),
    Exhausted,
}

#[derive(Debug)]
pub struct TargetReport {
    pub url: String,
    pub state: TargetState,
    pub attempted: Vec<&'static str>,
}

impl TargetReport {
    pub fn detected(&self) -> bool {
        matches!(self.state, TargetState::Detected(_))
    }

    pub fn result_text(&self) -> &str {
        match &self.state {
            TargetState::Detected(detection) => &detection.value,
            _ => NOT_FOUND_SENTINEL,
        }
    }
}

pub struct Scanner {
    http: HttpClient,
    pipeline: DetectorPipeline,
}

impl Scanner {
    pub fn new(state_ptr: Arc<ScanState>, config_ptr: &ConfigParameter) -> Self {
        Scanner {
            http: HttpClient::new(state_ptr, config_ptr),
            pipeline: DetectorPipeline::new(),
        }
    }

    // One target, detectors strictly in order, first match short-circuits.
    pub async fn scan_target(&self, url: &str) -> TargetReport {
        let outcome = self.pipeline.run(&self.http, url).await;
        let state = match outcome.detection {
            Some(detection) => TargetState::Detected(detection),
            None => TargetState::Exhausted,
        };

        TargetReport {
            url: url.to_string(),
            state,
            attempted: outcome.attempted,
        }
    }
}
