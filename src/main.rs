use clap::Parser;
use colored::Colorize;
use std::time::Duration;
use tracing::{debug, info};

use coco_downloader::cli::{Cli, Command};
use coco_downloader::common::logger::PrettyLogger;
use coco_downloader::common::snapshot;
use coco_downloader::common::theme::Theme;
use coco_downloader::downloader::{DrawerView, TaskIntent, TaskSummary};
use coco_downloader::simulate::{self, SimulationConfig};
use coco_downloader::{log_info, log_success, log_warning};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 执行用户意图并写回快照
async fn apply_intent(args: &Cli, intent: TaskIntent) -> Result<()> {
    let mut board = snapshot::load_board(&args.snapshot).await?;
    let before = board.tasks().len();
    board.apply_intent(&intent);
    let removed = before - board.tasks().len();
    debug!("{:?}: {} -> {}", intent, before, board.tasks().len());

    if removed == 0 {
        log_warning!("没有需要删除的任务");
        return Ok(());
    }
    snapshot::save(&args.snapshot, board.tasks()).await?;
    log_success!("已删除 {} 个任务", removed);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // 初始化日志
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let theme = args.theme;
    match &args.command {
        Command::List => {
            let board = snapshot::load_board(&args.snapshot).await?;
            PrettyLogger::drawer(&DrawerView::from_tasks(board.tasks()), theme);
        }
        Command::Summary => {
            let board = snapshot::load_board(&args.snapshot).await?;
            PrettyLogger::summary(&TaskSummary::from_tasks(board.tasks()), theme);
        }
        Command::Remove { id } => {
            apply_intent(&args, TaskIntent::RemoveTask(id.clone())).await?;
        }
        Command::Clear => {
            apply_intent(&args, TaskIntent::ClearCompleted).await?;
        }
        Command::Theme { current } => {
            let current = Theme::resolve(*current, Some(theme));
            let next = current.toggled();
            log_info!("{} -> {}", current, next.to_string().bold());
        }
        Command::Simulate {
            tracks,
            step_ms,
            fail_every,
            save,
        } => {
            let config = SimulationConfig {
                tracks: *tracks,
                step: Duration::from_millis(*step_ms),
                fail_every: *fail_every,
            };
            info!("开始模拟下载: {} 首", config.tracks);
            let tasks = simulate::run(config, theme).await?;
            PrettyLogger::drawer(&DrawerView::from_tasks(&tasks), theme);
            if *save {
                snapshot::save(&args.snapshot, &tasks).await?;
                log_success!("已保存到 {:?}", args.snapshot);
            }
        }
    }

    info!("{}", "完成".green());
    Ok(())
}
