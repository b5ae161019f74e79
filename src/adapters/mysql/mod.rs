//! MySQL adapters - Database implementations for the persistence ports.
//!
//! - `MySqlBeatReader` - Read-after-write lookup in `fse_beat_mapping`
//! - `MySqlCheckinRepository` - Transactional clone in `fse_checkin_checkout`

mod beat_reader;
mod checkin_repository;
mod connection;

pub use beat_reader::MySqlBeatReader;
pub use checkin_repository::MySqlCheckinRepository;
pub use connection::MySqlConnector;
