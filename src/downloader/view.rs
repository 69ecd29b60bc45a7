use super::models::{DownloadTask, TaskStatus};
use super::projector;

pub const EMPTY_HINT: &str = "还没有下载任务哦";
pub const IDLE_HEADLINE: &str = "暂无进行中的任务";
pub const CLEAR_ACTION: &str = "清空已完成/失败任务";

/// 状态文字对应的色调
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
    Active,
    Idle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub cover: Option<String>,
    pub label: String,
    pub tone: Tone,
    pub progress: f64,
    pub error: Option<String>,
}

impl TaskRow {
    pub fn from_task(task: &DownloadTask) -> Self {
        Self {
            id: task.id.clone(),
            title: task.music_item.title.clone(),
            cover: task.music_item.cover.clone(),
            label: status_label(task),
            tone: tone(&task.status),
            progress: task.progress,
            error: task.error().map(str::to_string),
        }
    }
}

pub fn status_label(task: &DownloadTask) -> String {
    match &task.status {
        TaskStatus::Completed => "已完成".to_string(),
        TaskStatus::Error(_) => "失败".to_string(),
        TaskStatus::Downloading => format!("{}%", task.progress.round() as u32),
        TaskStatus::Pending => "等待中".to_string(),
    }
}

pub fn tone(status: &TaskStatus) -> Tone {
    match status {
        TaskStatus::Completed => Tone::Success,
        TaskStatus::Error(_) => Tone::Failure,
        TaskStatus::Downloading => Tone::Active,
        TaskStatus::Pending => Tone::Idle,
    }
}

/// 下载抽屉的展示数据，每次快照变化后重新生成
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerView {
    pub rows: Vec<TaskRow>,
    pub active_count: usize,
    pub can_clear: bool,
}

impl DrawerView {
    pub fn from_tasks(tasks: &[DownloadTask]) -> Self {
        Self {
            rows: projector::project(tasks)
                .iter()
                .map(TaskRow::from_task)
                .collect(),
            active_count: projector::count_active(tasks),
            can_clear: projector::has_clearable(tasks),
        }
    }

    pub fn has_active(&self) -> bool {
        self.active_count > 0
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headline(&self) -> String {
        if self.has_active() {
            format!("{} 个任务进行中", self.active_count)
        } else {
            IDLE_HEADLINE.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskSummary {
    pub total: usize,
    pub pending: usize,
    pub downloading: usize,
    pub completed: usize,
    pub failed: usize,
}

impl TaskSummary {
    pub fn from_tasks(tasks: &[DownloadTask]) -> Self {
        tasks.iter().fold(Self::default(), |mut acc, task| {
            acc.total += 1;
            match task.status {
                TaskStatus::Pending => acc.pending += 1,
                TaskStatus::Downloading => acc.downloading += 1,
                TaskStatus::Completed => acc.completed += 1,
                TaskStatus::Error(_) => acc.failed += 1,
            }
            acc
        })
    }
}
