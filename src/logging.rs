// logging.rs
// Timestamped log lines for the bingo binaries

use chrono::Local;

/// Log level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
    Warning,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
        }
    }
}

/// Build a log line with the current local timestamp
pub fn format_message(level: LogLevel, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("{} - {} - {}", timestamp, level.as_str(), message)
}

/// Format and print a log message with timestamp
pub fn log_message(level: LogLevel, message: &str) {
    println!("{}", format_message(level, message));
}

/// Log an info message
pub fn log_info(message: &str) {
    log_message(LogLevel::Info, message);
}

/// Log a warning message
pub fn log_warning(message: &str) {
    log_message(LogLevel::Warning, message);
}

/// Format and print an error log message to stderr with timestamp
pub fn log_error_stderr(message: &str) {
    eprintln!("{}", format_message(LogLevel::Error, message));
}
