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

use std::borrow::Cow;
use std::path::Path;
use std::path::PathBuf;

use jiff::Span;
use jiff::Zoned;

use crate::Error;

/// The extension given to file names that carry none.
pub const DEFAULT_EXTENSION: &str = "log";

/// Appends [`DEFAULT_EXTENSION`] to `filename` unless it already contains a `.`.
///
/// # Examples
///
/// ```
/// use dayroll::file::ensure_extension;
///
/// assert_eq!(ensure_extension("app"), "app.log");
/// assert_eq!(ensure_extension("app.txt"), "app.txt");
/// ```
pub fn ensure_extension(filename: &str) -> Cow<'_, str> {
    if filename.contains('.') {
        Cow::Borrowed(filename)
    } else {
        Cow::Owned(format!("{filename}.{DEFAULT_EXTENSION}"))
    }
}

/// Joins `base`, `directory` and `filename` into the path of the active log file.
pub fn resolve_path(base: &Path, directory: impl AsRef<Path>, filename: &str) -> PathBuf {
    base.join(directory).join(filename)
}

/// Returns the path the active file at `path` is archived to when rotating at `now`.
///
/// The suffix is the date 24 hours before `now`, formatted as `YYYY-MM-DD`, and the archive stays
/// in the same directory:
///
/// ```
/// use std::path::Path;
/// use std::str::FromStr;
///
/// use dayroll::file::history_path;
/// use jiff::Zoned;
///
/// let now = Zoned::from_str("2024-08-11T00:00:03[UTC]").unwrap();
/// let history = history_path(Path::new("/var/log/app.log"), &now).unwrap();
/// assert_eq!(history, Path::new("/var/log/app.log.2024-08-10"));
/// ```
pub fn history_path(path: &Path, now: &Zoned) -> Result<PathBuf, Error> {
    let yesterday = now.checked_sub(Span::new().hours(24)).map_err(|err| {
        Error::rotation("failed to compute the date of yesterday")
            .with_context("now", now)
            .with_source(err)
    })?;

    let mut history = path.as_os_str().to_os_string();
    history.push(".");
    history.push(yesterday.strftime("%Y-%m-%d").to_string());
    Ok(PathBuf::from(history))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_ensure_extension() {
        assert_eq!(ensure_extension("test"), "test.log");
        assert_eq!(ensure_extension("test.log"), "test.log");
        assert_eq!(ensure_extension("test.txt"), "test.txt");
        // any dot counts, even a leading one
        assert_eq!(ensure_extension(".hidden"), ".hidden");
        assert!(matches!(ensure_extension("a.b"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_resolve_path() {
        let path = resolve_path(Path::new("/srv/app"), "logs", "test.log");
        assert_eq!(path, Path::new("/srv/app").join("logs").join("test.log"));

        let path = resolve_path(Path::new("/srv/app"), "logs/nested", "test.log");
        assert!(path.ends_with("logs/nested/test.log"));
    }

    #[test]
    fn test_history_path_uses_yesterday() {
        let path = Path::new("/srv/app/logs/test.log");

        let now = Zoned::from_str("2024-03-01T00:00:01[UTC]").unwrap();
        assert_eq!(
            history_path(path, &now).unwrap(),
            Path::new("/srv/app/logs/test.log.2024-02-29")
        );

        // the suffix is relative to the moment of rotation, not to the day the file covers
        let now = Zoned::from_str("2024-03-05T23:59:59[UTC]").unwrap();
        assert_eq!(
            history_path(path, &now).unwrap(),
            Path::new("/srv/app/logs/test.log.2024-03-04")
        );
    }
}
