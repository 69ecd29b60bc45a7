//! 任务板 Actor：串行处理引擎事件与用户意图，每次变更后广播新快照。

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

use super::board::{EngineEvent, TaskBoard};
use super::error::{DownloadError, Result};
use super::models::{DownloadTask, MusicItem};
use super::projector::TaskIntent;

/// Actor 消息类型
pub enum BoardMessage {
    Enqueue {
        music_item: MusicItem,
        file_name: String,
        reply: oneshot::Sender<Result<DownloadTask>>,
    },
    Event {
        event: EngineEvent,
        reply: oneshot::Sender<Result<()>>,
    },
    /// 用户意图 (fire-and-forget)，删除不存在的任务不算错误
    Intent(TaskIntent),
    Snapshot {
        reply: oneshot::Sender<Vec<DownloadTask>>,
    },
}

/// 任务板的对外接口
#[derive(Clone)]
pub struct BoardHandle {
    sender: mpsc::Sender<BoardMessage>,
    snapshots: watch::Receiver<Vec<DownloadTask>>,
}

impl BoardHandle {
    /// 启动 Actor，返回句柄；buffer 至少为 1
    pub fn spawn(board: TaskBoard, buffer: usize) -> Self {
        let (sender, receiver) = mpsc::channel(buffer.max(1));
        let (publisher, snapshots) = watch::channel(board.snapshot());
        let actor = BoardActor {
            board,
            receiver,
            publisher,
        };
        tokio::spawn(actor.run());
        Self { sender, snapshots }
    }

    pub async fn enqueue(
        &self,
        music_item: MusicItem,
        file_name: impl Into<String>,
    ) -> Result<DownloadTask> {
        let (reply, rx) = oneshot::channel();
        self.sender
            .send(BoardMessage::Enqueue {
                music_item,
                file_name: file_name.into(),
                reply,
            })
            .await
            .map_err(|_| DownloadError::BoardClosed)?;
        rx.await.map_err(|_| DownloadError::BoardClosed)?
    }

    pub async fn report(&self, event: EngineEvent) -> Result<()> {
        let (reply, rx) = oneshot::channel();
        self.sender
            .send(BoardMessage::Event { event, reply })
            .await
            .map_err(|_| DownloadError::BoardClosed)?;
        rx.await.map_err(|_| DownloadError::BoardClosed)?
    }

    pub async fn remove_task(&self, id: &str) -> Result<()> {
        self.send_intent(TaskIntent::RemoveTask(id.to_string())).await
    }

    pub async fn clear_completed(&self) -> Result<()> {
        self.send_intent(TaskIntent::ClearCompleted).await
    }

    pub async fn send_intent(&self, intent: TaskIntent) -> Result<()> {
        self.sender
            .send(BoardMessage::Intent(intent))
            .await
            .map_err(|_| DownloadError::BoardClosed)
    }

    pub async fn snapshot(&self) -> Result<Vec<DownloadTask>> {
        let (reply, rx) = oneshot::channel();
        self.sender
            .send(BoardMessage::Snapshot { reply })
            .await
            .map_err(|_| DownloadError::BoardClosed)?;
        rx.await.map_err(|_| DownloadError::BoardClosed)
    }

    /// 订阅快照变化，视图在每次更新后重新计算
    pub fn subscribe(&self) -> watch::Receiver<Vec<DownloadTask>> {
        self.snapshots.clone()
    }
}

struct BoardActor {
    board: TaskBoard,
    receiver: mpsc::Receiver<BoardMessage>,
    publisher: watch::Sender<Vec<DownloadTask>>,
}

impl BoardActor {
    async fn run(mut self) {
        info!("任务板已启动");

        while let Some(msg) = self.receiver.recv().await {
            self.handle_message(msg);
        }

        info!("任务板已停止");
    }

    fn handle_message(&mut self, msg: BoardMessage) {
        match msg {
            BoardMessage::Enqueue {
                music_item,
                file_name,
                reply,
            } => {
                let result = self.board.enqueue(music_item, file_name);
                match &result {
                    Ok(_) => self.publish(),
                    Err(e) => warn!("添加任务失败: {}", e),
                }
                let _ = reply.send(result);
            }

            BoardMessage::Event { event, reply } => {
                let result = self.board.apply_event(event);
                match &result {
                    Ok(()) => self.publish(),
                    Err(e) => warn!("处理引擎事件失败: {}", e),
                }
                let _ = reply.send(result);
            }

            BoardMessage::Intent(intent) => {
                self.board.apply_intent(&intent);
                self.publish();
            }

            BoardMessage::Snapshot { reply } => {
                let _ = reply.send(self.board.snapshot());
            }
        }
    }

    fn publish(&self) {
        // 没有订阅者时 send_replace 依旧更新值
        self.publisher.send_replace(self.board.snapshot());
        debug!("已发布快照，共 {} 个任务", self.board.tasks().len());
    }
}
