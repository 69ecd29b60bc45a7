//! 任务列表的排序、统计与清理。
//!
//! 所有函数都只读入一份快照并返回新的结果，不持有任何状态，
//! 任务集合本身由下载引擎（或 [`TaskBoard`](super::board::TaskBoard)）负责修改。

use std::cmp::Ordering;

use super::models::DownloadTask;

/// 用户发起的修改意图，交给任务集合的所有者执行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskIntent {
    RemoveTask(String),
    ClearCompleted,
}

impl TaskIntent {
    pub fn apply(&self, tasks: &[DownloadTask]) -> Vec<DownloadTask> {
        match self {
            TaskIntent::RemoveTask(id) => remove(tasks, id),
            TaskIntent::ClearCompleted => clear_terminal(tasks),
        }
    }
}

/// 下载中的任务在前，其余按开始时间倒序；时间相同保持输入顺序
pub fn project(tasks: &[DownloadTask]) -> Vec<DownloadTask> {
    let mut ordered = tasks.to_vec();
    // sort_by 是稳定排序
    ordered.sort_by(display_order);
    ordered
}

fn display_order(a: &DownloadTask, b: &DownloadTask) -> Ordering {
    b.status
        .is_downloading()
        .cmp(&a.status.is_downloading())
        .then_with(|| b.start_time.cmp(&a.start_time))
}

pub fn count_active(tasks: &[DownloadTask]) -> usize {
    tasks.iter().filter(|t| t.status.is_downloading()).count()
}

/// 是否存在可以一键清空的任务（已完成或失败）
pub fn has_clearable(tasks: &[DownloadTask]) -> bool {
    tasks.iter().any(|t| t.status.is_terminal())
}

/// 删除第一个 id 匹配的任务，不存在时原样返回
pub fn remove(tasks: &[DownloadTask], id: &str) -> Vec<DownloadTask> {
    let mut rest = tasks.to_vec();
    if let Some(pos) = rest.iter().position(|t| t.id == id) {
        rest.remove(pos);
    }
    rest
}

pub fn clear_terminal(tasks: &[DownloadTask]) -> Vec<DownloadTask> {
    tasks
        .iter()
        .filter(|t| !t.status.is_terminal())
        .cloned()
        .collect()
}
