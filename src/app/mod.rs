pub mod app;
pub mod calc;
pub mod config;
pub mod import;
pub mod portfolio;
pub mod report;
pub mod ui;
pub mod utils;

pub use app::App;
pub use config::{Config, InvariantPolicy};
pub use portfolio::Portfolio;
