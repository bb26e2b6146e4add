// File: scanstate.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

// Run-wide counters, shared between the HTTP layer and the scan loop.
#[derive(Debug, Default)]
pub struct ScanState {
    targets_total: AtomicU64,
    requests: AtomicU64,
    request_failures: AtomicU64,
    detected: AtomicU64,
    not_found: AtomicU64,
    start_time: AtomicU64,
    end_time: AtomicU64,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_targets_total(&self, total: u64) {
        self.targets_total.store(total, Ordering::Relaxed);
    }

    pub fn targets_total(&self) -> u64 {
        self.targets_total.load(Ordering::Relaxed)
    }

    pub fn add_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    pub fn add_request_failure(&self) {
        self.request_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn request_failures(&self) -> u64 {
        self.request_failures.load(Ordering::Relaxed)
    }

    pub fn add_detected(&self) {
        self.detected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn detected(&self) -> u64 {
        self.detected.load(Ordering::Relaxed)
    }

    pub fn add_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn not_found(&self) -> u64 {
        self.not_found.load(Ordering::Relaxed)
    }

    pub fn mark_start(&self) {
        self.start_time.store(now_millis(), Ordering::Relaxed);
    }

    pub fn mark_end(&self) {
        self.end_time.store(now_millis(), Ordering::Relaxed);
    }

    pub fn start_time(&self) -> u64 {
        self.start_time.load(Ordering::Relaxed)
    }

    pub fn end_time(&self) -> u64 {
        self.end_time.load(Ordering::Relaxed)
    }

    pub fn elapsed_millis(&self) -> u64 {
        self.end_time().saturating_sub(self.start_time())
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
