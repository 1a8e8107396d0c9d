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

/// Emits a debug message.
///
/// Writes to the [default logger](crate::default_logger), or to the logger given with a
/// `logger:` prefix. Arguments use [`format_args!`] syntax.
///
/// # Examples
///
/// ```no_run
/// let logger = dayroll::builder().build();
///
/// dayroll::debug!("cache warmed with {} entries", 42);
/// dayroll::debug!(logger: logger, "cache warmed with {} entries", 42);
/// ```
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Level::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log!($crate::default_logger(), $crate::Level::Debug, $($arg)+)
    };
}

/// Emits an info message.
///
/// See [`debug!`] for the accepted forms.
///
/// # Examples
///
/// ```no_run
/// dayroll::info!("hello world {}", "test");
/// ```
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Level::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log!($crate::default_logger(), $crate::Level::Info, $($arg)+)
    };
}

/// Emits an error message.
///
/// The caller location is resolved even when errors are below the minimum level.
///
/// # Examples
///
/// ```no_run
/// let err = std::io::Error::other("disk full");
/// dayroll::error!("failed to persist snapshot: {err}");
/// ```
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::__log!($logger, $crate::Level::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__log!($crate::default_logger(), $crate::Level::Error, $($arg)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        // its type name is the path of the enclosing function, see `caller::MARKER_SUFFIX`
        fn __dayroll_callsite() {}
        let site = $crate::CallSite::new(
            ::std::any::type_name_of_val(&__dayroll_callsite),
            ::std::file!(),
            ::std::line!(),
        );
        $logger.log($level, &site, ::std::format_args!($($arg)+));
    }};
}
