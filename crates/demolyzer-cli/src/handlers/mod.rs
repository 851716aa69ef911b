mod context;

pub mod angles;
pub mod deaths;
pub mod export;
pub mod players;
pub mod states;
pub mod summary;

pub use context::HandlerContext;
