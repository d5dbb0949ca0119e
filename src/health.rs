//! Health payload evaluation.
//!
//! Parses a LocalStack `/health` response and decides whether every listed
//! service has reached the "running" state. The decision is returned as an
//! [`Outcome`] value so the logic stays testable independent of process-exit
//! mechanics; mapping outcomes to exit codes is the binary's job.

use serde::Deserialize;

use crate::error::HealthError;

/// The one status string that counts as healthy
pub const RUNNING_STATUS: &str = "running";

/// Line emitted when every service is running
pub const ALL_RUNNING_MESSAGE: &str = "All localstack services are running!";

/// Parsed `/health` response.
///
/// The payload looks like `{"services": {"s3": "running", "sqs": "starting"}}`.
/// `serde_json::Map` preserves key order (the `preserve_order` feature), so
/// iteration visits services in the order the payload listed them.
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub services: serde_json::Map<String, serde_json::Value>,
}

/// Terminal outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every service (vacuously including none) reported "running"
    AllRunning,
    /// The first service in payload order that reported something else
    NotRunning { service: String, status: String },
}

impl Outcome {
    /// The single line this outcome writes to stdout.
    pub fn message(&self) -> String {
        match self {
            Outcome::AllRunning => ALL_RUNNING_MESSAGE.to_string(),
            Outcome::NotRunning { service, status } => {
                format!("{} is not running; Current status is {}", service, status)
            }
        }
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::AllRunning => 0,
            Outcome::NotRunning { .. } => 1,
        }
    }
}

/// Evaluate a raw health payload.
///
/// Returns the first non-running service in payload order, or
/// [`Outcome::AllRunning`] when there is none. Invalid JSON, a missing
/// `services` field, or a non-string status all propagate as errors rather
/// than masquerading as a result; the orchestrating script is responsible
/// for piping in a well-formed response.
pub fn evaluate(input: &str) -> Result<Outcome, HealthError> {
    let response: HealthResponse = serde_json::from_str(input)?;

    for (service, status) in &response.services {
        let status = status
            .as_str()
            .ok_or_else(|| HealthError::NonStringStatus {
                service: service.clone(),
            })?;

        if status != RUNNING_STATUS {
            tracing::debug!(service = %service, status = %status, "service not running");
            return Ok(Outcome::NotRunning {
                service: service.clone(),
                status: status.to_string(),
            });
        }
    }

    tracing::debug!(
        services = response.services.len(),
        "all services running"
    );
    Ok(Outcome::AllRunning)
}
