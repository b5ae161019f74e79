//! FSM QA Tools - Field-service QA automation
//!
//! This crate exposes three tools used to set up field-service test data:
//! raising a service beat (with read-after-write verification), cloning an
//! employee's latest check-in, and echoing check-out events.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
