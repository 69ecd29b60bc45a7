pub mod cli;
pub mod common;
pub mod downloader;
pub mod simulate;
