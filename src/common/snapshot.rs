use std::path::Path;

use tracing::{debug, info};

use crate::downloader::board::TaskBoard;
use crate::downloader::error::Result;
use crate::downloader::models::DownloadTask;

/// 读取任务快照，文件不存在时视为空列表
pub async fn load(path: impl AsRef<Path>) -> Result<Vec<DownloadTask>> {
    let path = path.as_ref();
    if !tokio::fs::try_exists(path).await? {
        info!("快照文件不存在，使用空列表: {:?}", path);
        return Ok(Vec::new());
    }

    let data = tokio::fs::read(path).await?;
    if data.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let tasks: Vec<DownloadTask> = serde_json::from_slice(&data)?;
    debug!("从 {:?} 读取了 {} 个任务", path, tasks.len());
    Ok(tasks)
}

pub async fn save(path: impl AsRef<Path>, tasks: &[DownloadTask]) -> Result<()> {
    let path = path.as_ref();
    let data = serde_json::to_vec_pretty(tasks)?;
    tokio::fs::write(path, data).await?;
    debug!("已写入 {} 个任务到 {:?}", tasks.len(), path);
    Ok(())
}

/// 读取快照并恢复为任务板，校验 id 唯一
pub async fn load_board(path: impl AsRef<Path>) -> Result<TaskBoard> {
    TaskBoard::from_tasks(load(path).await?)
}
