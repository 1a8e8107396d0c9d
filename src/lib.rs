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

//! Dayroll is a file logger with three levels, a log file that rotates at each change of the
//! local date, and the caller location on every line.
//!
//! # Overview
//!
//! A host process points the logger at a file once, then emits messages from any thread:
//!
//! ```no_run
//! use dayroll::Level;
//!
//! dayroll::set_file("logs", "test.log");
//! dayroll::set_level(Level::Info);
//!
//! dayroll::info!("hello world {}", "test");
//! dayroll::debug!("dropped, below the minimum level");
//! ```
//!
//! This appends a line like the following to `<cwd>/logs/test.log`:
//!
//! ```text
//! [INFO] 2024/08/10 17:12:52 app::main:6 hello world test
//! ```
//!
//! When the first message of a new day arrives, the file is renamed to
//! `test.log.<yesterday's date>` and a fresh `test.log` takes its place.
//!
//! Loggers can also be built explicitly and passed around instead of using the default one:
//!
//! ```no_run
//! use dayroll::Level;
//!
//! let logger = dayroll::builder()
//!     .level(Level::Debug)
//!     .show_file_name(true)
//!     .build();
//! logger.set_file("logs", "worker").unwrap();
//!
//! dayroll::info!(logger: logger, "worker {} started", 3);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod bridge;
pub mod caller;
pub mod file;
pub mod trap;

mod error;
mod layout;
mod level;
mod logger;
mod macros;

#[cfg(feature = "bridge-log")]
pub use self::bridge::setup_log_crate;
pub use self::caller::CallSite;
pub use self::caller::CallerLocator;
pub use self::error::Error;
pub use self::error::ErrorKind;
pub use self::level::Level;
pub use self::level::LevelFilter;
pub use self::level::ParseLevelError;
pub use self::logger::*;
pub use self::trap::Trap;
