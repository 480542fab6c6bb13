pub mod fallback;
pub mod generate;
pub mod health;
