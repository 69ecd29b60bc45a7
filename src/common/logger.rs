use colored::*;

use super::theme::Theme;
use crate::downloader::view::{CLEAR_ACTION, DrawerView, EMPTY_HINT, TaskRow, TaskSummary, Tone};

/// 终端输出工具
pub struct PrettyLogger;

impl PrettyLogger {
    /// 显示成功消息
    pub fn success(message: impl AsRef<str>) {
        println!("{} {}", "✓".green().bold(), message.as_ref());
    }

    /// 显示信息消息
    pub fn info(message: impl AsRef<str>) {
        println!("{} {}", "ℹ".blue().bold(), message.as_ref());
    }

    /// 显示警告消息
    pub fn warning(message: impl AsRef<str>) {
        println!("{} {}", "⚠".yellow().bold(), message.as_ref());
    }

    /// 显示分割线
    pub fn separator(theme: Theme) {
        println!("{}", "─".repeat(50).color(theme.muted()));
    }

    /// 显示标题
    pub fn title(text: impl AsRef<str>, theme: Theme) {
        let text = text.as_ref();
        let width = text.chars().count().min(48);
        let padding = (48 - width) / 2;
        println!(
            "{} {} {}",
            "─".repeat(padding).color(theme.muted()),
            text.bold(),
            "─".repeat(48 - padding - width).color(theme.muted())
        );
    }

    /// 渲染整个下载抽屉
    pub fn drawer(view: &DrawerView, theme: Theme) {
        let marker = if view.has_active() {
            "⬇".color(theme.accent()).bold().blink()
        } else {
            "⬇".color(theme.accent()).bold()
        };
        println!("{} {}", marker, "下载任务".bold());
        println!("  {}", view.headline().color(theme.muted()));
        Self::separator(theme);

        if view.is_empty() {
            println!("  {}", EMPTY_HINT.color(theme.muted()));
            return;
        }

        for row in &view.rows {
            Self::task_row(row, theme);
        }

        if view.can_clear {
            Self::separator(theme);
            println!("  {} {}", "🗑".bold(), CLEAR_ACTION);
        }
    }

    /// 单个任务：标题、状态、进度条、错误信息
    pub fn task_row(row: &TaskRow, theme: Theme) {
        let label = match row.tone {
            Tone::Success => row.label.green(),
            Tone::Failure => row.label.red(),
            Tone::Active => row.label.color(theme.accent()),
            Tone::Idle => row.label.color(theme.muted()),
        };
        println!("{} {} {}", "♪".bold(), row.title.bold(), label);

        let bar_width = 30;
        let filled = ((row.progress / 100.0) * bar_width as f64).round() as usize;
        let filled = filled.min(bar_width);
        let fill = "█".repeat(filled);
        let fill = match row.tone {
            Tone::Success => fill.green(),
            Tone::Failure => fill.red(),
            _ => fill.color(theme.accent()),
        };
        println!(
            "  [{}{}] {}",
            fill,
            "░".repeat(bar_width - filled).color(theme.muted()),
            row.id.color(theme.muted())
        );

        if let Some(error) = &row.error {
            println!("  {}", error.red());
        }
    }

    /// 显示统计信息
    pub fn summary(summary: &TaskSummary, theme: Theme) {
        Self::title("任务统计", theme);
        println!("  总数:   {}", summary.total);
        println!("  等待中: {}", summary.pending);
        println!("  下载中: {}", summary.downloading.to_string().color(theme.accent()));
        println!("  已完成: {}", summary.completed.to_string().green());
        println!("  失败:   {}", summary.failed.to_string().red());
    }
}

/// 便捷宏用于漂亮的日志输出
#[macro_export]
macro_rules! log_success {
    ($($arg:tt)*) => {
        $crate::common::logger::PrettyLogger::success(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::common::logger::PrettyLogger::info(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        $crate::common::logger::PrettyLogger::warning(format!($($arg)*))
    };
}
