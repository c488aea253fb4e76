// 工具模块

pub mod error;

pub mod format;

pub mod logging;

pub use error::{app_error, AppError, AppResult};
pub use format::{format_duration, truncate_chars};
pub use logging::init_logging;
