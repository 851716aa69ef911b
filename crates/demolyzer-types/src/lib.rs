pub mod error;
pub mod record;
pub mod schema;
pub mod table;

pub use error::{Error, Result};
pub use record::{LifecycleState, PlayerId, PlayerRecord, Position, TickRecord};
pub use schema::{Column, ColumnLayout};
pub use table::TelemetryTable;
