//! Processing statistics tracking.
//!
//! This module provides thread-safe counters for errors and informational
//! metrics recorded while a run is in flight.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{ErrorType, InfoType};

/// Thread-safe processing statistics tracker.
///
/// Every counter is created up front in `new()`, so increments from concurrent
/// tasks only touch atomics and never the maps themselves.
pub struct ProcessingStats {
    errors: HashMap<ErrorType, AtomicUsize>,
    info: HashMap<InfoType, AtomicUsize>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    pub fn new() -> Self {
        let errors = ErrorType::iter()
            .map(|error| (error, AtomicUsize::new(0)))
            .collect();
        let info = InfoType::iter()
            .map(|info_type| (info_type, AtomicUsize::new(0)))
            .collect();

        ProcessingStats { errors, info }
    }

    /// Increment an error counter.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map",
                error
            );
        }
    }

    /// Increment an info counter by `n`.
    pub fn add_info(&self, info_type: InfoType, n: usize) {
        if let Some(counter) = self.info.get(&info_type) {
            counter.fetch_add(n, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment info counter for {:?} which is not in the map",
                info_type
            );
        }
    }

    /// Increment an info counter.
    pub fn increment_info(&self, info_type: InfoType) {
        self.add_info(info_type, 1);
    }

    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        self.info
            .get(&info_type)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get total error count across all error types.
    pub fn total_errors(&self) -> usize {
        ErrorType::iter().map(|e| self.get_error_count(e)).sum()
    }

    /// Logs every non-zero counter at info level.
    pub fn log_summary(&self) {
        for info_type in InfoType::iter() {
            let count = self.get_info_count(info_type);
            if count > 0 {
                log::info!("{}: {}", info_type, count);
            }
        }
        for error_type in ErrorType::iter() {
            let count = self.get_error_count(error_type);
            if count > 0 {
                log::info!("{}: {}", error_type, count);
            }
        }
    }
}
