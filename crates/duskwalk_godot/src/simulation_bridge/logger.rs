//! GodotLogger implementation
//!
//! Bridges Rust logging to Godot's godot_print!/godot_error! + logs/game.log file.

use std::sync::atomic::{AtomicBool, Ordering};

use duskwalk_simulation::{LogLevel, LogPrinter};

// Ошибку открытия файла логируем один раз, не каждый message
static OPEN_ERROR_LOGGED: AtomicBool = AtomicBool::new(false);

pub struct GodotLogger;

impl LogPrinter for GodotLogger {
    fn log(&self, level: LogLevel, message: &str) {
        if level >= *duskwalk_simulation::LOGGER_LEVEL.lock().unwrap() {
            self.print_message(level, message);
        }
    }
}

impl GodotLogger {
    pub fn clear_log_file() {
        let log_path = std::path::Path::new("../logs/game.log");
        let _ = std::fs::remove_file(log_path);
    }

    fn print_message(&self, level: LogLevel, message: &str) {
        use std::io::Write;

        if level == LogLevel::Error {
            godot::prelude::godot_error!("[{}] {}", level.as_str(), message);
        }
        godot::prelude::godot_print!("[{}] {}", level.as_str(), message);

        // Пишем в файл logs/game.log (append mode)
        // Godot запускается из godot/ директории, путь относительно project root
        let log_path = std::path::Path::new("../logs/game.log");

        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
        {
            Ok(mut file) => {
                let _ = writeln!(file, "{}", message);
            }
            Err(e) => {
                if !OPEN_ERROR_LOGGED.swap(true, Ordering::Relaxed) {
                    godot::prelude::godot_error!(
                        "Failed to open log file {:?}: {}",
                        log_path,
                        e
                    );
                }
            }
        }
    }
}
