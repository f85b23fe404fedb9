//! Measurement boundary.
//!
//! Algorithms report timings, counters, and accepted Pareto points to a
//! caller-supplied [`MeasurementSink`]. A failing sink never aborts a
//! run: the failure is logged with `tracing::warn!` and the run goes on.

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{info, warn};

use crate::weight::Weight;

/// Timer around the whole search.
pub const ALGORITHM: &str = "ALGORITHM";
/// Timer around path reconstruction.
pub const BACKTRACKING: &str = "BACKTRACKING";
/// Size of the destination cost frontier.
pub const FRONTIER_SIZE: &str = "FRONTIER_SIZE";
/// Number of path extensions attempted.
pub const PATH_EXTENSIONS: &str = "PATH_EXTENSIONS";
/// Number of reconstructed solutions.
pub const SOLUTIONS: &str = "SOLUTIONS";

/// A sink refused or failed to store a measurement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("measurement sink failed: {0}")]
pub struct SinkError(pub String);

/// A single reported fact.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Measurement {
    /// A run began.
    ExperimentStarted {
        /// Algorithm name.
        name: String,
    },
    /// A named phase began.
    TimerStarted {
        /// Phase name.
        name: String,
    },
    /// A named phase ended.
    TimerStopped {
        /// Phase name.
        name: String,
        /// Wall-clock time since the matching start.
        elapsed: Duration,
    },
    /// An integer counter.
    Metric {
        /// Metric name.
        name: String,
        /// Value.
        value: i64,
    },
    /// An accepted solution.
    ParetoPoint {
        /// Vector cost of the solution.
        cost: Weight,
        /// Node sequence, e.g. `n0-n1-n4-n5`.
        label: String,
    },
}

/// Consumer of measurements.
pub trait MeasurementSink {
    /// Stores one measurement.
    fn record(&mut self, measurement: Measurement) -> Result<(), SinkError>;
}

/// Discards every measurement.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl MeasurementSink for NoopSink {
    fn record(&mut self, _measurement: Measurement) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Forwards measurements as `tracing::info!` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl MeasurementSink for TracingSink {
    fn record(&mut self, measurement: Measurement) -> Result<(), SinkError> {
        match measurement {
            Measurement::ExperimentStarted { name } => info!(%name, "experiment started"),
            Measurement::TimerStarted { name } => info!(%name, "timer started"),
            Measurement::TimerStopped { name, elapsed } => {
                info!(%name, elapsed_us = elapsed.as_micros() as u64, "timer stopped")
            }
            Measurement::Metric { name, value } => info!(%name, value, "metric"),
            Measurement::ParetoPoint { cost, label } => info!(%cost, %label, "pareto point"),
        }
        Ok(())
    }
}

/// Keeps every measurement in memory.
///
/// # Examples
///
/// ```
/// use u_mograph::measure::{Measurement, MeasurementSink, RecordingSink};
///
/// let mut sink = RecordingSink::new();
/// sink.record(Measurement::Metric { name: "SOLUTIONS".into(), value: 4 }).unwrap();
/// assert_eq!(sink.metric("SOLUTIONS"), Some(4));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    records: Vec<Measurement>,
}

impl RecordingSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All measurements in arrival order.
    pub fn records(&self) -> &[Measurement] {
        &self.records
    }

    /// The last value reported for metric `name`.
    pub fn metric(&self, name: &str) -> Option<i64> {
        self.records.iter().rev().find_map(|m| match m {
            Measurement::Metric { name: n, value } if n == name => Some(*value),
            _ => None,
        })
    }

    /// Reported Pareto points as `(cost, label)` pairs.
    pub fn pareto_points(&self) -> Vec<(&Weight, &str)> {
        self.records
            .iter()
            .filter_map(|m| match m {
                Measurement::ParetoPoint { cost, label } => Some((cost, label.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Names of stopped timers, in order.
    pub fn stopped_timers(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|m| match m {
                Measurement::TimerStopped { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl MeasurementSink for RecordingSink {
    fn record(&mut self, measurement: Measurement) -> Result<(), SinkError> {
        self.records.push(measurement);
        Ok(())
    }
}

/// Wraps a sink so that failures are logged and swallowed.
pub(crate) struct Reporter<'a> {
    sink: &'a mut dyn MeasurementSink,
}

impl<'a> Reporter<'a> {
    pub(crate) fn new(sink: &'a mut dyn MeasurementSink) -> Self {
        Self { sink }
    }

    pub(crate) fn experiment(&mut self, name: &str) {
        self.emit(Measurement::ExperimentStarted { name: name.into() });
    }

    pub(crate) fn start(&mut self, name: &str) -> Instant {
        self.emit(Measurement::TimerStarted { name: name.into() });
        Instant::now()
    }

    pub(crate) fn stop(&mut self, name: &str, started: Instant) {
        self.emit(Measurement::TimerStopped {
            name: name.into(),
            elapsed: started.elapsed(),
        });
    }

    pub(crate) fn metric(&mut self, name: &str, value: usize) {
        self.emit(Measurement::Metric {
            name: name.into(),
            value: i64::try_from(value).unwrap_or(i64::MAX),
        });
    }

    pub(crate) fn pareto_point(&mut self, cost: &Weight, label: String) {
        self.emit(Measurement::ParetoPoint {
            cost: cost.clone(),
            label,
        });
    }

    fn emit(&mut self, measurement: Measurement) {
        if let Err(err) = self.sink.record(measurement) {
            warn!(error = %err, "dropping measurement");
        }
    }
}
