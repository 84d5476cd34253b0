//! The `CommandWriter` trait implemented by all backend writers.

use crate::{OutputResult, RouteReport};

/// Trait implemented by the CSV and JSON writers.
pub trait CommandWriter {
    /// Write one compiled route under the caller-chosen `route_id`.
    fn write_route(&mut self, route_id: u32, report: &RouteReport) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.  Writing after `finish`
    /// returns [`OutputError::Finished`](crate::OutputError::Finished).
    fn finish(&mut self) -> OutputResult<()>;
}
