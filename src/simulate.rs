//! 模拟下载引擎：并发推进若干任务，用来演示抽屉随快照刷新。

use std::time::Duration;

use tracing::{debug, warn};

use crate::common::logger::PrettyLogger;
use crate::common::theme::Theme;
use crate::downloader::error::Result;
use crate::downloader::{BoardHandle, DownloadTask, DrawerView, EngineEvent, MusicItem, TaskBoard};

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub tracks: usize,
    pub step: Duration,
    /// 每隔多少首失败一次，0 表示全部成功
    pub fail_every: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tracks: 3,
            step: Duration::from_millis(200),
            fail_every: 3,
        }
    }
}

fn demo_track(index: usize) -> MusicItem {
    MusicItem {
        artist: "Coco".to_string(),
        album: "Demo".to_string(),
        ..MusicItem::new(format!("track{}", index + 1), format!("示例曲目 {}", index + 1))
    }
}

/// 驱动单个任务走完整个生命周期
async fn drive(handle: BoardHandle, task: DownloadTask, fails: bool, step: Duration) -> Result<()> {
    tokio::time::sleep(step).await;
    handle.report(EngineEvent::Started { id: task.id.clone() }).await?;

    for percent in [20.0, 45.0, 70.0, 100.0] {
        tokio::time::sleep(step).await;
        if fails && percent > 50.0 {
            return handle
                .report(EngineEvent::Failed {
                    id: task.id.clone(),
                    message: "网络连接中断".to_string(),
                })
                .await;
        }
        handle
            .report(EngineEvent::Progress {
                id: task.id.clone(),
                percent,
            })
            .await?;
    }

    handle.report(EngineEvent::Finished { id: task.id }).await
}

/// 运行模拟，结束时返回最终快照
pub async fn run(config: SimulationConfig, theme: Theme) -> Result<Vec<DownloadTask>> {
    let handle = BoardHandle::spawn(TaskBoard::new(), 64);
    let mut updates = handle.subscribe();

    let mut workers = Vec::with_capacity(config.tracks);
    for index in 0..config.tracks {
        let music_item = demo_track(index);
        let file_name = format!("{}.mp3", music_item.title);
        let task = handle.enqueue(music_item, file_name).await?;
        let fails = config.fail_every > 0 && (index + 1) % config.fail_every == 0;
        workers.push(tokio::spawn(drive(handle.clone(), task, fails, config.step)));
    }

    let render = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let tasks = updates.borrow_and_update().clone();
            PrettyLogger::drawer(&DrawerView::from_tasks(&tasks), theme);
            println!();
        }
    });

    for worker in workers {
        match worker.await {
            Ok(result) => result?,
            Err(e) => warn!("模拟任务异常退出: {}", e),
        }
    }

    let tasks = handle.snapshot().await?;
    debug!("模拟结束，共 {} 个任务", tasks.len());
    drop(handle);
    render.abort();
    Ok(tasks)
}
