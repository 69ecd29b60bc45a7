use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("任务未找到: {0}")]
    TaskNotFound(String),

    #[error("任务已存在: {0}")]
    TaskAlreadyExists(String),

    #[error("任务 {id} 无法从 {from} 迁移到 {to}")]
    InvalidTransition {
        id: String,
        from: &'static str,
        to: &'static str,
    },

    #[error("无效的状态: {0}")]
    InvalidState(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("快照解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("任务板已关闭")]
    BoardClosed,
}

pub type Result<T> = std::result::Result<T, DownloadError>;
