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

use std::env;
use std::fmt::Arguments;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering;

use crate::Error;
use crate::Level;
use crate::LevelFilter;
use crate::Trap;
use crate::caller::CallSite;
use crate::caller::CallerLocator;
use crate::file::Clock;
use crate::file::DailyFile;
use crate::file::ensure_extension;
use crate::file::resolve_path;
use crate::layout::TextLayout;
use crate::logger::LoggerBuilder;

/// A logger writing leveled lines to a log file that rotates at each change of the local date.
///
/// A logger starts without a file; messages emitted before [`Logger::set_file`] succeeds are
/// dropped. Every emit at or above the minimum level takes the file lock once, rotates the file
/// when the date changed since it was opened, and writes its line.
///
/// # Examples
///
/// ```no_run
/// use dayroll::Level;
///
/// let logger = dayroll::builder().level(Level::Info).build();
/// logger.set_file("logs", "app").unwrap();
///
/// dayroll::info!(logger: logger, "listening on {}", 8080);
/// dayroll::debug!(logger: logger, "dropped, below the minimum level");
/// ```
#[derive(Debug)]
pub struct Logger {
    level: AtomicU8,
    show_file_name: AtomicBool,
    base_dir: Option<PathBuf>,
    locator: Box<dyn CallerLocator>,
    trap: Box<dyn Trap>,
    layout: TextLayout,
    clock: Clock,
    file: Mutex<Option<DailyFile>>,
}

impl Default for Logger {
    fn default() -> Self {
        LoggerBuilder::new().build()
    }
}

impl Logger {
    pub(super) fn new(
        level: LevelFilter,
        show_file_name: bool,
        base_dir: Option<PathBuf>,
        locator: Box<dyn CallerLocator>,
        trap: Box<dyn Trap>,
        clock: Clock,
    ) -> Logger {
        Logger {
            level: AtomicU8::new(level as u8),
            show_file_name: AtomicBool::new(show_file_name),
            base_dir,
            locator,
            trap,
            layout: TextLayout::default(),
            clock,
            file: Mutex::new(None),
        }
    }

    /// Opens `<base>/<directory>/<filename>` for appending and makes it the active log file.
    ///
    /// `filename` gets the `.log` extension if it contains no `.`. The base is the builder's
    /// [`base_dir`](LoggerBuilder::base_dir), or the current working directory. The log
    /// directory is created when missing. Calling it again with the same arguments reopens the
    /// same file.
    ///
    /// Returns the path of the active log file.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::Setup`](crate::ErrorKind::Setup) error if the working directory
    /// cannot be resolved, or if the log directory or file cannot be created.
    pub fn set_file(
        &self,
        directory: impl AsRef<Path>,
        filename: impl AsRef<str>,
    ) -> Result<PathBuf, Error> {
        let directory = directory.as_ref();
        let filename = ensure_extension(filename.as_ref());

        let base = match &self.base_dir {
            Some(base) => base.clone(),
            None => env::current_dir()
                .map_err(|err| Error::setup_io("failed to resolve working directory", err))?,
        };

        let log_dir = base.join(directory);
        fs::create_dir_all(&log_dir).map_err(|err| {
            Error::setup_io("failed to create log directory", err)
                .with_context("directory", log_dir.display())
        })?;

        let path = resolve_path(&base, directory, &filename);
        let mut state = self.state();
        *state = Some(DailyFile::open(path.clone(), &self.clock.now())?);
        Ok(path)
    }

    /// Sets the minimum level; messages below it are dropped.
    pub fn set_level(&self, level: impl Into<LevelFilter>) {
        self.level.store(level.into() as u8, Ordering::Relaxed);
    }

    /// Returns the minimum level.
    pub fn level(&self) -> LevelFilter {
        LevelFilter::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Sets whether caller locations include the source file.
    pub fn set_show_file_name(&self, show: bool) {
        self.show_file_name.store(show, Ordering::Relaxed);
    }

    /// Returns whether caller locations include the source file.
    pub fn show_file_name(&self) -> bool {
        self.show_file_name.load(Ordering::Relaxed)
    }

    /// Returns the path of the active log file, if one is set.
    pub fn file_path(&self) -> Option<PathBuf> {
        self.state().as_ref().map(|file| file.path().to_path_buf())
    }

    /// Returns whether a message of `level` would be written.
    pub fn enabled(&self, level: Level) -> bool {
        self.level().allows(level)
    }

    /// Emits one message.
    ///
    /// This is what the [`debug!`](crate::debug), [`info!`](crate::info) and
    /// [`error!`](crate::error) macros call. It never fails: write errors are ignored, and a
    /// failed rotation is handed to the trap after the line is written.
    pub fn log(&self, level: Level, site: &CallSite, args: Arguments) {
        // errors resolve their caller even when they are filtered out
        let caller = match level {
            Level::Error => Some(self.locator.locate(site)),
            Level::Debug | Level::Info => None,
        };

        if !self.enabled(level) {
            return;
        }

        let caller = caller.unwrap_or_else(|| self.locator.locate(site));
        let show_file_name = self.show_file_name();

        let rotate_err = {
            let mut state = self.state();
            let Some(file) = state.as_mut() else {
                return;
            };

            let now = self.clock.now();
            let rotate_err = if file.should_rotate(&now) {
                file.rotate(&now).err()
            } else {
                None
            };

            let line = self
                .layout
                .format(level, &now, &caller, show_file_name, args);
            let _ = file.write_line(&line);
            rotate_err
        };

        if let Some(err) = rotate_err {
            self.trap(&err);
        }
    }

    /// Flushes the active log file.
    pub fn flush(&self) {
        if let Some(file) = self.state().as_mut() {
            let _ = file.flush();
        }
    }

    pub(crate) fn trap(&self, err: &Error) {
        self.trap.trap(err);
    }

    fn state(&self) -> MutexGuard<'_, Option<DailyFile>> {
        // a poisoned state is still valid
        self.file.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    pub(crate) fn with_file<R>(&self, f: impl FnOnce(&DailyFile) -> R) -> Option<R> {
        self.state().as_ref().map(f)
    }
}
