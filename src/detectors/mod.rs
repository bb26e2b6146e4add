// File: mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

pub mod errormessage;
pub mod filemetadata;
pub mod knownendpoints;
pub mod metagenerator;
pub mod serverbanner;
pub mod sourcecode;
pub mod xpoweredby;

use crate::http::HttpClient;
use async_trait::async_trait;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;

// The whole match is the result, e.g. "PHP Version 8.1.2".
pub static PHP_VERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"PHP Version \d+\.\d+\.\d+").unwrap());

// One heuristic probe. Each detector issues its own requests; responses are
// never shared between detectors. Transport failures are a non-match.
#[async_trait]
pub trait Detector {
    fn name(&self) -> &'static str;
    async fn probe(&self, http: &HttpClient, target: &str) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub detector: &'static str,
    pub value: String,
}

#[derive(Debug)]
pub struct PipelineOutcome {
    pub detection: Option<Detection>,
    pub attempted: Vec<&'static str>,
}

pub struct DetectorPipeline {
    detectors: Vec<Box<dyn Detector + Send + Sync>>,
}

impl DetectorPipeline {
    pub fn new() -> Self {
        let mut pipeline = Self {
            detectors: Vec::new(),
        };
        pipeline.register_known_detectors();
        pipeline
    }

    // Registration order is the priority order. First match wins.
    pub fn register_known_detectors(&mut self) {
        self.detectors
            .push(Box::new(xpoweredby::XPoweredByDetector));
        self.detectors
            .push(Box::new(metagenerator::MetaGeneratorDetector));
        self.detectors
            .push(Box::new(knownendpoints::KnownEndpointsDetector));
        self.detectors
            .push(Box::new(sourcecode::SourceCodeDetector));
        self.detectors
            .push(Box::new(serverbanner::ServerBannerDetector));
        self.detectors
            .push(Box::new(errormessage::ErrorMessageDetector));
        self.detectors
            .push(Box::new(filemetadata::FileMetadataDetector));
    }

    pub fn list(&self) -> Vec<&'static str> {
        self.detectors.iter().map(|detector| detector.name()).collect()
    }

    pub async fn run(&self, http: &HttpClient, target: &str) -> PipelineOutcome {
        let mut attempted = Vec::new();

        for detector in &self.detectors {
            attempted.push(detector.name());
            if let Some(value) = detector.probe(http, target).await {
                info!("{} matched on {}: {}", detector.name(), target, value);
                return PipelineOutcome {
                    detection: Some(Detection {
                        detector: detector.name(),
                        value,
                    }),
                    attempted,
                };
            }
            debug!("{} found nothing on {}", detector.name(), target);
        }

        PipelineOutcome {
            detection: None,
            attempted,
        }
    }
}
