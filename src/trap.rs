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

//! Handlers for fatal logger errors.

use std::fmt;
use std::io;
use std::io::Write;

use crate::Error;

/// A trap receives the fatal errors of a logger: a log file that cannot be set up and a rotation
/// that cannot complete.
///
/// Write failures are never trapped; logging is best effort once the file is open.
pub trait Trap: fmt::Debug + Send + Sync + 'static {
    /// Handle a fatal error.
    fn trap(&self, err: &Error);
}

impl<T: Trap> From<T> for Box<dyn Trap> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// The default trap: reports the error to standard error and aborts the process.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct AbortTrap {}

impl Trap for AbortTrap {
    fn trap(&self, err: &Error) {
        let _ = writeln!(io::stderr(), "dayroll: {err}");
        std::process::abort();
    }
}

/// A trap that sends errors to standard error if possible and lets the process continue.
///
/// If standard error is not available, it does nothing.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct StderrTrap {}

impl Trap for StderrTrap {
    fn trap(&self, err: &Error) {
        let _ = writeln!(io::stderr(), "dayroll: {err}");
    }
}
