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

use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use jiff::Zoned;
use jiff::civil::Date;

use crate::Error;
use crate::file::history_path;

/// The active log file together with the date it was opened on.
///
/// A `None` writer means the last reopen failed; writes are dropped until the file is set again.
#[derive(Debug)]
pub(crate) struct DailyFile {
    path: PathBuf,
    opened_on: Date,
    writer: Option<File>,
}

impl DailyFile {
    pub(crate) fn open(path: PathBuf, now: &Zoned) -> Result<DailyFile, Error> {
        let writer = open_append(&path).map_err(|err| {
            Error::setup_io("failed to open log file", err).with_context("path", path.display())
        })?;
        Ok(DailyFile {
            path,
            opened_on: now.date(),
            writer: Some(writer),
        })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(test)]
    pub(crate) fn opened_on(&self) -> Date {
        self.opened_on
    }

    pub(crate) fn should_rotate(&self, now: &Zoned) -> bool {
        now.date() != self.opened_on
    }

    /// Archives the current file under its history name and starts a fresh one at the same path.
    ///
    /// The new date is recorded even on failure, so a failed rotation is reported once per day
    /// instead of on every line.
    pub(crate) fn rotate(&mut self, now: &Zoned) -> Result<PathBuf, Error> {
        self.opened_on = now.date();
        let history = history_path(&self.path, now)?;

        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }

        let renamed = fs::rename(&self.path, &history).map_err(|err| {
            Error::rotation_io("failed to rename log file", err)
                .with_context("from", self.path.display())
                .with_context("to", history.display())
        });

        let writer = open_append(&self.path).map_err(|err| {
            Error::rotation_io("failed to reopen log file", err)
                .with_context("path", self.path.display())
        })?;
        self.writer = Some(writer);

        renamed.map(|()| history)
    }

    pub(crate) fn flush(&mut self) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        }
    }

    pub(crate) fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writer.write_all(line),
            None => Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "log file is not open",
            )),
        }
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().append(true).create(true).open(path)
}
