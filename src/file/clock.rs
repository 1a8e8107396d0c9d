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

#[cfg(test)]
use std::sync::Arc;
#[cfg(test)]
use std::sync::Mutex;

use jiff::Zoned;

#[derive(Debug, Clone)]
pub(crate) enum Clock {
    DefaultClock,
    #[cfg(test)]
    ManualClock(Arc<ManualClock>),
}

impl Clock {
    pub(crate) fn now(&self) -> Zoned {
        match self {
            Clock::DefaultClock => Zoned::now(),
            #[cfg(test)]
            Clock::ManualClock(clock) => clock.now(),
        }
    }
}

/// A clock shared between a test and the logger it drives.
#[derive(Debug)]
#[cfg(test)]
pub(crate) struct ManualClock {
    now: Mutex<Zoned>,
}

#[cfg(test)]
impl ManualClock {
    pub(crate) fn new(now: Zoned) -> Arc<ManualClock> {
        Arc::new(ManualClock {
            now: Mutex::new(now),
        })
    }

    pub(crate) fn now(&self) -> Zoned {
        self.now.lock().unwrap().clone()
    }

    pub(crate) fn set_now(&self, now: Zoned) {
        *self.now.lock().unwrap() = now;
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_manual_clock_adjusting() {
        let now = Zoned::from_str("2023-01-01T12:00:00[UTC]").unwrap();
        let manual = ManualClock::new(now.clone());
        let clock = Clock::ManualClock(manual.clone());
        assert_eq!(clock.now(), now);

        let now = Zoned::from_str("2024-01-01T12:00:00[UTC]").unwrap();
        manual.set_now(now.clone());
        assert_eq!(clock.now(), now);
    }
}
