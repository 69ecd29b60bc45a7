use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DownloadError;

/// 曲目信息，由曲库模型维护，这里只做透传
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MusicItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub album: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>, // 秒
}

impl MusicItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }
}

// --------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Downloading,
    Completed,
    Error(String), // 失败原因，原样展示
}

impl TaskStatus {
    pub fn is_downloading(&self) -> bool {
        matches!(self, TaskStatus::Downloading)
    }

    /// 已完成或失败，不会再自动迁移
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Error(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Downloading => "downloading",
            TaskStatus::Completed => "completed",
            TaskStatus::Error(_) => "error",
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            TaskStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord", into = "TaskRecord")]
pub struct DownloadTask {
    pub id: String,
    pub music_item: MusicItem,
    pub status: TaskStatus,
    pub progress: f64, // 0 ~ 100
    pub file_name: String,
    pub start_time: i64, // 毫秒
}

impl DownloadTask {
    /// 新建等待中的任务，id 由曲目 id 加创建时间组成
    pub fn new(music_item: MusicItem, file_name: impl Into<String>, start_time: i64) -> Self {
        Self {
            id: format!("{}-{}", music_item.id, start_time),
            music_item,
            status: TaskStatus::Pending,
            progress: 0.0,
            file_name: file_name.into(),
            start_time,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.status.error_message()
    }
}

/// JSON 中的任务记录，status 与 error 分开存放
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskRecord {
    id: String,
    music_item: MusicItem,
    status: String,
    #[serde(default)]
    progress: f64,
    #[serde(default)]
    file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    start_time: i64,
}

impl TryFrom<TaskRecord> for DownloadTask {
    type Error = DownloadError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let status = match record.status.as_str() {
            "pending" => TaskStatus::Pending,
            "downloading" => TaskStatus::Downloading,
            "completed" => TaskStatus::Completed,
            "error" => match record.error {
                Some(msg) => TaskStatus::Error(msg),
                None => {
                    return Err(DownloadError::InvalidState(format!(
                        "任务 {} 状态为 error 但缺少错误信息",
                        record.id
                    )));
                }
            },
            other => {
                return Err(DownloadError::InvalidState(format!(
                    "未知的任务状态: {}",
                    other
                )));
            }
        };

        Ok(Self {
            id: record.id,
            music_item: record.music_item,
            status,
            progress: record.progress.clamp(0.0, 100.0),
            file_name: record.file_name,
            start_time: record.start_time,
        })
    }
}

impl From<DownloadTask> for TaskRecord {
    fn from(task: DownloadTask) -> Self {
        let (status, error) = match task.status {
            TaskStatus::Error(msg) => ("error".to_string(), Some(msg)),
            other => (other.name().to_string(), None),
        };
        Self {
            id: task.id,
            music_item: task.music_item,
            status,
            progress: if task.progress.is_nan() {
                0.0
            } else {
                task.progress
            },
            file_name: task.file_name,
            error,
            start_time: task.start_time,
        }
    }
}
