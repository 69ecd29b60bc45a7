pub mod actor;
pub mod board;
pub mod error;
pub mod models;
pub mod projector;
pub mod view;

pub use actor::BoardHandle;
pub use board::{EngineEvent, TaskBoard};
pub use error::DownloadError;
pub use models::{DownloadTask, MusicItem, TaskStatus};
pub use projector::{TaskIntent, clear_terminal, count_active, has_clearable, project, remove};
pub use view::{DrawerView, TaskSummary};
