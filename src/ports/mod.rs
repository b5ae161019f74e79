//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the tool workflows and the outside world. Adapters implement these ports.
//!
//! - `HttpTransport` - Single outbound HTTP POST to the field-service API
//! - `BeatReader` - Read-after-write lookup of persisted beats
//! - `CheckinRepository` - Transactional clone of check-in rows

mod beat_reader;
mod checkin_repository;
mod http_transport;

pub use beat_reader::BeatReader;
pub use checkin_repository::{CheckinClone, CheckinRepository};
pub use http_transport::{HttpTransport, OutboundRequest, OutboundResponse, TransportError};
