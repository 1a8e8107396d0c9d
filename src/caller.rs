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

//! Caller locations attached to every log line.

use std::borrow::Cow;
use std::fmt;

/// The name of the marker function that the emit macros declare at the call site.
///
/// Its type name is the path of the enclosing function followed by this suffix.
#[doc(hidden)]
pub const MARKER_SUFFIX: &str = "::__dayroll_callsite";

/// Static facts about the place a message was emitted from.
///
/// The emit macros capture it at compile time; the `log` bridge builds it from a
/// [`log::Record`](https://docs.rs/log/latest/log/struct.Record.html).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    function: &'a str,
    file: &'a str,
    line: u32,
}

impl<'a> CallSite<'a> {
    /// Creates a new call site.
    ///
    /// `function` is either a plain function path or the type name of a marker function declared
    /// inside the caller (see [`MARKER_SUFFIX`]).
    pub const fn new(function: &'a str, file: &'a str, line: u32) -> Self {
        Self {
            function,
            file,
            line,
        }
    }

    /// A call site nothing is known about.
    pub const fn unknown() -> CallSite<'static> {
        CallSite::new("", "", 0)
    }

    /// The raw function name as captured.
    pub fn function(&self) -> &'a str {
        self.function
    }

    /// The source file.
    pub fn file(&self) -> &'a str {
        self.file
    }

    /// The line in the source file.
    pub fn line(&self) -> u32 {
        self.line
    }
}

/// The resolved location of the code that emitted a message.
///
/// The function path never contains spaces, so a caller is always one token on the line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Caller<'a> {
    /// Path of the calling function, empty if unknown.
    pub function: Cow<'a, str>,
    /// Source file of the caller, empty if unknown.
    pub file: &'a str,
    /// Line number of the caller, zero if unknown.
    pub line: u32,
}

impl<'a> Caller<'a> {
    /// The descriptor used when the caller cannot be resolved.
    pub const fn unknown() -> Caller<'static> {
        Caller {
            function: Cow::Borrowed(""),
            file: "",
            line: 0,
        }
    }

    /// Returns a [`Display`](fmt::Display) formatting the caller as `<function>:<line>`, or as
    /// `<file>-><function>:<line>` when `show_file_name` is set.
    pub fn display(&self, show_file_name: bool) -> CallerDisplay<'_> {
        CallerDisplay {
            caller: self,
            show_file_name,
        }
    }
}

/// Display adapter returned by [`Caller::display`].
#[derive(Debug)]
pub struct CallerDisplay<'a> {
    caller: &'a Caller<'a>,
    show_file_name: bool,
}

impl fmt::Display for CallerDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Caller {
            function,
            file,
            line,
        } = self.caller;
        if self.show_file_name {
            write!(f, "{file}->{function}:{line}")
        } else {
            write!(f, "{function}:{line}")
        }
    }
}

/// Resolves a [`CallSite`] to the [`Caller`] written on the log line.
///
/// Implementations must never fail: an unresolvable site maps to [`Caller::unknown`].
pub trait CallerLocator: fmt::Debug + Send + Sync + 'static {
    /// Resolve the caller of an emit operation.
    fn locate<'a>(&self, site: &CallSite<'a>) -> Caller<'a>;
}

impl<T: CallerLocator> From<T> for Box<dyn CallerLocator> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// The default locator, reporting the call site captured by the emit macros.
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct SiteLocator {}

impl CallerLocator for SiteLocator {
    fn locate<'a>(&self, site: &CallSite<'a>) -> Caller<'a> {
        Caller {
            function: enclosing_function(site.function),
            file: site.file,
            line: site.line,
        }
    }
}

/// A locator that never resolves anything, for hosts that do not want locations in the log.
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct NoLocator {}

impl CallerLocator for NoLocator {
    fn locate<'a>(&self, _: &CallSite<'a>) -> Caller<'a> {
        Caller::unknown()
    }
}

fn enclosing_function(raw: &str) -> Cow<'_, str> {
    let function = raw.strip_suffix(MARKER_SUFFIX).unwrap_or(raw);
    if function.contains(' ') {
        Cow::Owned(squash_function(function))
    } else {
        Cow::Borrowed(function)
    }
}

/// Rewrites qualified paths such as `<app::Worker as app::Job>::run` to `app::Worker::run` and
/// drops any remaining spaces, e.g. in `dyn` types or tuples.
fn squash_function(function: &str) -> String {
    let mut out = String::with_capacity(function.len());
    // one entry per open `<`: whether it opens a qualified path rather than generic arguments
    let mut qualified: Vec<bool> = Vec::new();
    // depth of the qualified path whose trait is being skipped
    let mut skip_to: Option<usize> = None;
    let mut rest = function;
    while let Some(c) = rest.chars().next() {
        if skip_to.is_none() && qualified.last() == Some(&true) && rest.starts_with(" as ") {
            skip_to = Some(qualified.len());
            rest = &rest[" as ".len()..];
            continue;
        }
        if skip_to.is_none() && rest.starts_with("dyn ") && !ends_with_ident(&out) {
            rest = &rest["dyn ".len()..];
            continue;
        }
        rest = &rest[c.len_utf8()..];
        match c {
            '<' => {
                let is_qualified = !ends_with_ident(&out) || skip_to.is_some();
                qualified.push(is_qualified);
                if skip_to.is_none() && !is_qualified {
                    out.push(c);
                }
            }
            '>' => {
                let depth = qualified.len();
                let was_qualified = qualified.pop().unwrap_or(false);
                if skip_to == Some(depth) {
                    skip_to = None;
                } else if skip_to.is_none() && !was_qualified {
                    out.push(c);
                }
            }
            ' ' => {}
            c if skip_to.is_none() => out.push(c),
            _ => {}
        }
    }
    out
}

fn ends_with_ident(s: &str) -> bool {
    s.ends_with(|c: char| c.is_alphanumeric() || c == '_')
}
