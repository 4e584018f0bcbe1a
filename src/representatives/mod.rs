//! Representative profiles per domain.
//!
//! A [`ProfileStore`] keeps at most `max_per_domain` entries per domain and
//! evicts the oldest one of that domain before inserting past the bound.
//! Persistence goes through a [`StoreBackend`]; [`CsvFileBackend`] is the
//! durable one.

mod backend;
mod entry;
mod store;

pub use backend::{CsvFileBackend, MemoryBackend, StoreBackend};
pub use entry::{RepresentativeEntry, STORE_COLUMNS, UNKNOWN_IDENTITY};
pub use store::{ProfileStore, DEFAULT_MAX_PER_DOMAIN};
