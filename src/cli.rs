use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::common::theme::Theme;

/// 音乐下载任务管理
#[derive(Parser, Debug)]
#[command(name = "cocodl")]
#[command(version = "1.0")]
#[command(about = "查看和整理音乐下载任务", long_about = None)]
pub struct Cli {
    /// 任务快照文件 (JSON)
    #[arg(long, value_name = "FILE", global = true)]
    #[arg(default_value = "downloads.json")]
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub snapshot: PathBuf,

    /// 显示主题
    #[arg(long, value_name = "THEME", global = true)]
    #[arg(default_value = "light")]
    #[arg(help = "显示主题: light 或 dark")]
    pub theme: Theme,

    /// 输出调试日志
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 显示下载抽屉
    List,
    /// 显示任务统计
    Summary,
    /// 删除一条任务记录
    Remove {
        #[arg(long, value_name = "ID")]
        id: String,
    },
    /// 清空已完成/失败任务
    Clear,
    /// 切换主题
    Theme {
        #[arg(long, value_name = "THEME")]
        current: Option<Theme>,
    },
    /// 运行模拟下载引擎
    Simulate {
        #[arg(long, value_name = "N", default_value_t = 3)]
        tracks: usize,
        #[arg(long, value_name = "MS", default_value_t = 200)]
        step_ms: u64,
        #[arg(long, value_name = "N", default_value_t = 3)]
        #[arg(help = "每隔 N 首失败一次，0 表示全部成功")]
        fail_every: usize,
        /// 结束后把结果写入快照文件
        #[arg(long)]
        save: bool,
    },
}
