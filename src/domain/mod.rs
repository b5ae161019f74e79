//! Domain layer containing the tool workflows' types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (identifiers, timestamps, input shapes, errors)
//! - `beat` - Service beat requests and the remote payload
//! - `attendance` - Check-in cloning and check-out events
//! - `delivery` - Attempt logs and response bodies of outbound calls
//! - `outcome` - Flat result records returned by every tool

pub mod attendance;
pub mod beat;
pub mod delivery;
pub mod foundation;
pub mod outcome;
