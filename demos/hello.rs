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

use dayroll::Level;

fn main() {
    dayroll::set_file("logs", "test.log");
    dayroll::set_level(Level::Debug);

    dayroll::info!("hello world {}", "test");
    dayroll::debug!("hello world {}", "test");
    dayroll::error!("hello world {}", std::io::Error::other("test error"));
}
