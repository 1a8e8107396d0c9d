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

use crate::Level;
use crate::Logger;
use crate::caller::CallSite;
use crate::logger::default_logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        Logger::enabled(self, metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        let site = CallSite::new(
            record.module_path().unwrap_or_default(),
            record.file().unwrap_or_default(),
            record.line().unwrap_or_default(),
        );
        Logger::log(self, Level::from(record.level()), &site, *record.args());
    }

    fn flush(&self) {
        Logger::flush(self);
    }
}

/// Routes the `log` crate facade into the [default logger](crate::default_logger).
///
/// `Trace` and `Debug` records are written as debug, `Info` as info, `Warn` and `Error` as error.
/// The module path of the record stands in for the function name.
///
/// # Errors
///
/// Returns an error if another `log` implementation has already been installed.
///
/// # Examples
///
/// ```no_run
/// dayroll::set_file("logs", "app");
/// dayroll::setup_log_crate().unwrap();
///
/// log::info!("written to logs/app.log");
/// ```
pub fn setup_log_crate() -> Result<(), log::SetLoggerError> {
    log::set_logger(default_logger())?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
