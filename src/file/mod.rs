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

//! The rotating log file and the helpers that name it.

pub use self::naming::DEFAULT_EXTENSION;
pub use self::naming::ensure_extension;
pub use self::naming::history_path;
pub use self::naming::resolve_path;

pub(crate) use self::clock::Clock;
#[cfg(test)]
pub(crate) use self::clock::ManualClock;
pub(crate) use self::daily::DailyFile;

mod clock;
mod daily;
mod naming;
