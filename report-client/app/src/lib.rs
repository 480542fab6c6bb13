#![warn(rust_2018_idioms)]
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned
)]

pub mod activity;
pub mod app;
pub mod clock;
pub mod coordinator;
pub mod domain;
pub mod error;
pub mod language;
pub mod prompt;
pub mod proxy_client;
pub mod render;
pub mod store;

// Re-export main types for easy access
pub use app::Config;
pub use coordinator::{ReportCoordinator, ReportState, ReportView, Trigger};
pub use language::Language;
