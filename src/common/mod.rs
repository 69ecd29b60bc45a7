pub mod logger;
pub mod snapshot;
pub mod theme;
