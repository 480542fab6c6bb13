use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "punch-report", author, version, about, long_about = None)]
pub struct Config {
    /// Base URL of the report proxy
    #[arg(long, env = "PUNCH_PROXY_URL", default_value = "http://localhost:3001")]
    pub proxy_url: String,

    /// Display language (tr, en, de, fr, ru, ja, zh); unknown codes fall back to en
    #[arg(long = "lang", env = "PUNCH_LANG", default_value = "en")]
    pub language: Language,

    /// Report cache file
    #[arg(long, env = "PUNCH_CACHE_FILE", default_value = ".punch-report-cache.json")]
    pub cache_file: PathBuf,

    /// Discard today's cached report for the selected language and fetch a new one
    #[arg(long)]
    pub refresh: bool,

    /// Keep the cache in memory only
    #[arg(long)]
    pub no_cache: bool,

    /// Log output format (logs go to stderr)
    #[arg(long, env = "RUST_LOG_FORMAT", value_enum, default_value = "text")]
    pub log_format: LogFormat,
}
