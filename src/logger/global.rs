// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::LevelFilter;
use crate::logger::Logger;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Returns the process-wide default logger.
///
/// It is initialized on first use with [`Logger::default`] unless [`set_default_logger`] (or
/// [`LoggerBuilder::apply`](crate::LoggerBuilder::apply)) ran before.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(Logger::default)
}

/// Sets the process-wide default logger.
///
/// # Errors
///
/// Returns the logger back if the default logger has already been initialized.
pub fn set_default_logger(logger: Logger) -> Result<(), Logger> {
    DEFAULT_LOGGER.set(logger)
}

/// Sets the file of the default logger; see [`Logger::set_file`].
///
/// A failure is fatal: it goes to the logger's trap, which aborts the process by default. Returns
/// the path of the active log file, or `None` if the trap let a failure through.
///
/// # Examples
///
/// ```no_run
/// dayroll::set_file("logs", "test.log");
/// dayroll::info!("hello world {}", "test");
/// ```
pub fn set_file(directory: impl AsRef<Path>, filename: impl AsRef<str>) -> Option<PathBuf> {
    let logger = default_logger();
    match logger.set_file(directory, filename) {
        Ok(path) => Some(path),
        Err(err) => {
            logger.trap(&err);
            None
        }
    }
}

/// Sets the minimum level of the default logger.
pub fn set_level(level: impl Into<LevelFilter>) {
    default_logger().set_level(level);
}

/// Sets whether the default logger writes source files in caller locations.
pub fn set_show_file_name(show: bool) {
    default_logger().set_show_file_name(show);
}
