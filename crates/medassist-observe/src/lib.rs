//! Observability setup for MedAssist: structured logging and optional
//! OpenTelemetry trace export.

pub mod tracing_setup;
