//! Progress reporting.
//!
//! The engine hands periodic grid snapshots and a status line to a
//! [`ProgressSink`]. How (or whether) they are displayed is up to the sink.

use std::thread;
use std::time::Duration;

use waygrid_core::Grid;

/// Receives grid snapshots and human-readable status strings.
pub trait ProgressSink {
    /// Called on a fixed step cadence and once when a run ends.
    fn report(&mut self, grid: &Grid, status: &str);
}

impl<S: ProgressSink + ?Sized> ProgressSink for &mut S {
    fn report(&mut self, grid: &Grid, status: &str) {
        (**self).report(grid, status);
    }
}

impl<S: ProgressSink + ?Sized> ProgressSink for Box<S> {
    fn report(&mut self, grid: &Grid, status: &str) {
        (**self).report(grid, status);
    }
}

/// Discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl ProgressSink for NoopSink {
    fn report(&mut self, _grid: &Grid, _status: &str) {}
}

/// One recorded call to [`ProgressSink::report`].
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub grid: Grid,
    pub status: String,
}

/// Keeps every report. Handy as a test double.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub reports: Vec<Report>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent report, if any.
    pub fn last(&self) -> Option<&Report> {
        self.reports.last()
    }
}

impl ProgressSink for RecordingSink {
    fn report(&mut self, grid: &Grid, status: &str) {
        self.reports.push(Report {
            grid: grid.clone(),
            status: status.to_string(),
        });
    }
}

/// Forwards status strings to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ProgressSink for LogSink {
    fn report(&mut self, _grid: &Grid, status: &str) {
        log::info!("{status}");
    }
}

/// Wraps a sink and pauses after each report so a human can follow along.
pub struct Paced<S> {
    inner: S,
    delay: Duration,
}

impl<S: ProgressSink> Paced<S> {
    pub fn new(inner: S, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Unwrap the inner sink.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ProgressSink> ProgressSink for Paced<S> {
    fn report(&mut self, grid: &Grid, status: &str) {
        self.inner.report(grid, status);
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}
