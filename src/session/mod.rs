pub mod messages;
pub mod setup;
pub mod tui_mode;

pub use setup::{SessionData, build_source, setup_session};
pub use tui_mode::run_tui_mode;
