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

use std::path::PathBuf;

use crate::CallerLocator;
use crate::LevelFilter;
use crate::Trap;
use crate::caller::SiteLocator;
use crate::file::Clock;
use crate::logger::Logger;
use crate::logger::set_default_logger;
use crate::trap::AbortTrap;

/// Create a new [`LoggerBuilder`] with the default configuration.
///
/// # Examples
///
/// ```
/// use dayroll::Level;
///
/// let logger = dayroll::builder()
///     .level(Level::Info)
///     .show_file_name(true)
///     .build();
/// assert!(!logger.enabled(Level::Debug));
/// ```
pub fn builder() -> LoggerBuilder {
    LoggerBuilder::new()
}

/// A builder for configuring a [`Logger`].
///
/// Defaults:
///
/// * minimum level [`LevelFilter::Debug`], so everything is written;
/// * caller locations without the source file;
/// * paths resolved against the current working directory;
/// * [`SiteLocator`] for caller locations;
/// * [`AbortTrap`] for fatal errors.
#[must_use = "call `build` to create the logger or `apply` to set the default logger"]
#[derive(Debug)]
pub struct LoggerBuilder {
    level: LevelFilter,
    show_file_name: bool,
    base_dir: Option<PathBuf>,
    locator: Box<dyn CallerLocator>,
    trap: Box<dyn Trap>,
    clock: Clock,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Creates a new [`LoggerBuilder`].
    pub fn new() -> Self {
        Self {
            level: LevelFilter::Debug,
            show_file_name: false,
            base_dir: None,
            locator: Box::new(SiteLocator::default()),
            trap: Box::new(AbortTrap::default()),
            clock: Clock::DefaultClock,
        }
    }

    /// Sets the minimum level.
    pub fn level(mut self, level: impl Into<LevelFilter>) -> Self {
        self.level = level.into();
        self
    }

    /// Sets whether caller locations include the source file.
    pub fn show_file_name(mut self, show: bool) -> Self {
        self.show_file_name = show;
        self
    }

    /// Resolves log directories against `base_dir` instead of the current working directory.
    pub fn base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Sets the locator resolving caller locations.
    ///
    /// # Examples
    ///
    /// ```
    /// use dayroll::caller::NoLocator;
    ///
    /// let logger = dayroll::builder().locator(NoLocator::default()).build();
    /// ```
    pub fn locator(mut self, locator: impl Into<Box<dyn CallerLocator>>) -> Self {
        self.locator = locator.into();
        self
    }

    /// Sets the trap receiving fatal setup and rotation errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use dayroll::trap::StderrTrap;
    ///
    /// let logger = dayroll::builder().trap(StderrTrap::default()).build();
    /// ```
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    #[cfg(test)]
    pub(crate) fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Builds the [`Logger`].
    pub fn build(self) -> Logger {
        let Self {
            level,
            show_file_name,
            base_dir,
            locator,
            trap,
            clock,
        } = self;
        Logger::new(level, show_file_name, base_dir, locator, trap, clock)
    }

    /// Builds the logger and sets it as the default logger.
    ///
    /// # Errors
    ///
    /// Returns the logger back if the default logger has already been initialized.
    pub fn try_apply(self) -> Result<(), Logger> {
        set_default_logger(self.build())
    }

    /// Builds the logger and sets it as the default logger.
    ///
    /// This should be called early in the execution of a Rust program, before anything reads the
    /// default logger.
    ///
    /// # Panics
    ///
    /// Panic if the default logger has already been initialized.
    pub fn apply(self) {
        self.try_apply()
            .expect("LoggerBuilder::apply must be called before the default logger initialized");
    }
}
