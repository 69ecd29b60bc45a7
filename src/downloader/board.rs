use chrono::Utc;
use tracing::{debug, info, warn};

use super::error::{DownloadError, Result};
use super::models::{DownloadTask, MusicItem, TaskStatus};
use super::projector::{self, TaskIntent};

/// 下载引擎上报的状态变化
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Started { id: String },
    Progress { id: String, percent: f64 },
    Finished { id: String },
    Failed { id: String, message: String },
}

impl EngineEvent {
    pub fn task_id(&self) -> &str {
        match self {
            EngineEvent::Started { id }
            | EngineEvent::Progress { id, .. }
            | EngineEvent::Finished { id }
            | EngineEvent::Failed { id, .. } => id,
        }
    }
}

/// 任务集合的唯一写入者
#[derive(Debug, Default)]
pub struct TaskBoard {
    tasks: Vec<DownloadTask>,
    last_start_time: i64,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从已有快照恢复，id 重复时报错
    pub fn from_tasks(tasks: Vec<DownloadTask>) -> Result<Self> {
        let mut board = Self::new();
        for task in tasks {
            if board.get(&task.id).is_some() {
                return Err(DownloadError::TaskAlreadyExists(task.id));
            }
            board.last_start_time = board.last_start_time.max(task.start_time);
            board.tasks.push(task);
        }
        Ok(board)
    }

    pub fn tasks(&self) -> &[DownloadTask] {
        &self.tasks
    }

    pub fn snapshot(&self) -> Vec<DownloadTask> {
        self.tasks.clone()
    }

    pub fn get(&self, id: &str) -> Option<&DownloadTask> {
        self.tasks.iter().find(|t| t.id == id)
    }

    // 添加新的下载任务
    pub fn enqueue(
        &mut self,
        music_item: MusicItem,
        file_name: impl Into<String>,
    ) -> Result<DownloadTask> {
        let start_time = self.next_start_time(Utc::now().timestamp_millis())?;
        let task = DownloadTask::new(music_item, file_name, start_time);
        info!("添加下载任务: {} ({})", task.id, task.music_item.title);
        self.tasks.push(task.clone());
        Ok(task)
    }

    // 同一毫秒内创建的任务顺延，保证开始时间严格递增
    fn next_start_time(&mut self, now: i64) -> Result<i64> {
        let next = self.last_start_time.checked_add(1).ok_or_else(|| {
            DownloadError::InvalidState("开始时间已达上限，无法创建新任务".to_string())
        })?;
        let start_time = now.max(next);
        self.last_start_time = start_time;
        Ok(start_time)
    }

    pub fn apply_event(&mut self, event: EngineEvent) -> Result<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == event.task_id())
            .ok_or_else(|| DownloadError::TaskNotFound(event.task_id().to_string()))?;

        let to = match &event {
            EngineEvent::Started { .. } | EngineEvent::Progress { .. } => "downloading",
            EngineEvent::Finished { .. } => "completed",
            EngineEvent::Failed { .. } => "error",
        };
        let from = task.status.name();

        match event {
            EngineEvent::Started { .. } if task.status == TaskStatus::Pending => {
                debug!("任务开始下载: {}", task.id);
                task.status = TaskStatus::Downloading;
            }
            EngineEvent::Progress { percent, .. } if task.status.is_downloading() => {
                let percent = percent.clamp(0.0, 100.0);
                if percent.is_nan() || percent < task.progress {
                    debug!(
                        "忽略回退的进度: {} {:.1} -> {:.1}",
                        task.id, task.progress, percent
                    );
                } else {
                    task.progress = percent;
                }
            }
            EngineEvent::Finished { .. } if task.status.is_downloading() => {
                info!("下载完成: {}", task.id);
                task.status = TaskStatus::Completed;
            }
            EngineEvent::Failed { message, .. } if !task.status.is_terminal() => {
                warn!("下载失败: {} - {}", task.id, message);
                task.status = TaskStatus::Error(message);
            }
            _ => {
                return Err(DownloadError::InvalidTransition {
                    id: task.id.clone(),
                    from,
                    to,
                });
            }
        }
        Ok(())
    }

    pub fn apply_intent(&mut self, intent: &TaskIntent) {
        let before = self.tasks.len();
        self.tasks = intent.apply(&self.tasks);
        debug!("执行 {:?}，移除 {} 个任务", intent, before - self.tasks.len());
    }

    pub fn remove_task(&mut self, id: &str) {
        self.apply_intent(&TaskIntent::RemoveTask(id.to_string()));
    }

    pub fn clear_completed(&mut self) {
        self.apply_intent(&TaskIntent::ClearCompleted);
    }

    pub fn ordered(&self) -> Vec<DownloadTask> {
        projector::project(&self.tasks)
    }
}
