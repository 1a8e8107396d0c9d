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

use std::fmt::Arguments;
use std::fmt::Write;

use jiff::Zoned;

use crate::Level;
use crate::caller::Caller;

/// Formats log lines as plain text.
///
/// Output format:
///
/// ```text
/// [ERROR] 2024/08/11 22:44:57 app::server::run:51 Hello error!
/// [INFO] 2024/08/11 22:44:57 app::server::run:53 Hello info!
/// [DEBUG] 2024/08/11 22:44:57 src/server.rs->app::server::run:54 Hello debug!
/// ```
///
/// The timestamp is rendered in the time zone of the provided clock reading, which is the system
/// time zone outside of tests.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TextLayout {}

impl TextLayout {
    pub(crate) fn format(
        &self,
        level: Level,
        time: &Zoned,
        caller: &Caller,
        show_file_name: bool,
        message: Arguments,
    ) -> Vec<u8> {
        let tag = level.tag();
        let time = time.strftime("%Y/%m/%d %H:%M:%S");
        let caller = caller.display(show_file_name);

        let mut text = String::new();
        // SAFETY: write to a string always succeeds
        writeln!(&mut text, "{tag} {time} {caller} {message}").unwrap();
        text.into_bytes()
    }
}
