//! Application state: the central container plus the value types it holds.

pub mod app_state;
pub mod types;

pub use app_state::{AppState, RECENT_CAPACITY, recent_capacity};
pub use types::{Focus, LinkRecord, Row, Section, SectionKind};
