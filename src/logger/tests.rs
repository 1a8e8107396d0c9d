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

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::Barrier;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::thread;

use jiff::Zoned;
use jiff::civil::date;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use tempfile::TempDir;

use crate::CallSite;
use crate::CallerLocator;
use crate::Error;
use crate::ErrorKind;
use crate::Level;
use crate::LevelFilter;
use crate::Logger;
use crate::Trap;
use crate::caller::Caller;
use crate::caller::NoLocator;
use crate::caller::SiteLocator;
use crate::file::Clock;
use crate::file::ManualClock;
use crate::logger::LoggerBuilder;

#[derive(Debug, Default, Clone)]
struct RecordingTrap {
    errors: Arc<Mutex<Vec<(ErrorKind, String)>>>,
}

impl RecordingTrap {
    fn errors(&self) -> Vec<(ErrorKind, String)> {
        self.errors.lock().unwrap().clone()
    }
}

impl Trap for RecordingTrap {
    fn trap(&self, err: &Error) {
        let entry = (err.kind(), err.message().to_string());
        self.errors.lock().unwrap().push(entry);
    }
}

#[derive(Debug, Default, Clone)]
struct CountingLocator {
    count: Arc<AtomicUsize>,
}

impl CallerLocator for CountingLocator {
    fn locate<'a>(&self, site: &CallSite<'a>) -> Caller<'a> {
        self.count.fetch_add(1, Ordering::SeqCst);
        SiteLocator::default().locate(site)
    }
}

fn start_time() -> Zoned {
    Zoned::from_str("2024-08-10T23:59:30[UTC]").unwrap()
}

fn next_day() -> Zoned {
    Zoned::from_str("2024-08-11T00:00:10[UTC]").unwrap()
}

fn test_builder(dir: &TempDir, clock: &Arc<ManualClock>) -> LoggerBuilder {
    LoggerBuilder::new()
        .base_dir(dir.path())
        .clock(Clock::ManualClock(clock.clone()))
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn count_entries(path: &Path) -> usize {
    fs::read_dir(path).unwrap().count()
}

fn generate_random_string() -> String {
    let mut rng = rand::rng();
    let len = rng.random_range(50..=100);
    let random_string: String = std::iter::repeat(())
        .map(|()| rng.sample(Alphanumeric))
        .map(char::from)
        .take(len)
        .collect();

    random_string
}

#[test]
fn test_end_to_end_line_format() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let clock = ManualClock::new(start_time());
    let logger = test_builder(&temp_dir, &clock).build();

    let path = logger.set_file("logs", "test.log").unwrap();
    assert_eq!(path, temp_dir.path().join("logs").join("test.log"));

    crate::info!(logger: logger, "hello world {}", "test");

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1);
    let pattern =
        Regex::new(r"^\[INFO\] \d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} \S+:\d+ hello world test$")
            .unwrap();
    assert!(pattern.is_match(&lines[0]), "{}", lines[0]);
    assert!(
        lines[0].starts_with(
            "[INFO] 2024/08/10 23:59:30 dayroll::logger::tests::test_end_to_end_line_format:"
        ),
        "{}",
        lines[0]
    );
}

trait Job {
    fn run(&self, logger: &Logger);
}

struct Worker;

impl Job for Worker {
    fn run(&self, logger: &Logger) {
        crate::info!(logger: logger, "hello world {}", "test");
    }
}

#[test]
fn test_trait_method_caller_is_one_token() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let clock = ManualClock::new(start_time());
    let logger = test_builder(&temp_dir, &clock).build();
    let path = logger.set_file("logs", "test.log").unwrap();

    Worker.run(&logger);

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1);
    let pattern =
        Regex::new(r"^\[INFO\] \d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} \S+:\d+ hello world test$")
            .unwrap();
    assert!(pattern.is_match(&lines[0]), "{}", lines[0]);
    assert!(
        lines[0].contains("dayroll::logger::tests::Worker::run:"),
        "{}",
        lines[0]
    );
}

#[test]
fn test_emit_before_set_file_is_dropped() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let clock = ManualClock::new(start_time());
    let logger = test_builder(&temp_dir, &clock).build();

    crate::error!(logger: logger, "nowhere to go");
    assert!(logger.file_path().is_none());
    assert_eq!(count_entries(temp_dir.path()), 0);
}

#[test]
fn test_min_level_drops_messages_without_io() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let clock = ManualClock::new(start_time());
    let logger = test_builder(&temp_dir, &clock).level(Level::Info).build();
    let path = logger.set_file("logs", "test").unwrap();

    crate::debug!(logger: logger, "dropped {}", 1);
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);

    crate::info!(logger: logger, "kept {}", 2);
    crate::error!(logger: logger, "kept {}", 3);
    let size = fs::metadata(&path).unwrap().len();

    logger.set_level(Level::Error);
    crate::info!(logger: logger, "dropped {}", 4);
    crate::debug!(logger: logger, "dropped {}", 5);
    assert_eq!(fs::metadata(&path).unwrap().len(), size);

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("[INFO] ") && lines[0].ends_with(" kept 2"));
    assert!(lines[1].starts_with("[ERROR] ") && lines[1].ends_with(" kept 3"));
}

#[test]
fn test_set_file_twice_reopens_same_file() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let clock = ManualClock::new(start_time());
    let logger = test_builder(&temp_dir, &clock).build();

    let first = logger.set_file("logs", "test.log").unwrap();
    crate::info!(logger: logger, "first");
    let second = logger.set_file("logs", "test.log").unwrap();
    crate::info!(logger: logger, "second");

    assert_eq!(first, second);
    assert_eq!(logger.file_path(), Some(first.clone()));
    assert_eq!(count_entries(&temp_dir.path().join("logs")), 1);
    assert_eq!(read_lines(&first).len(), 2);
}

#[test]
fn test_set_file_extension_rule() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let clock = ManualClock::new(start_time());
    let logger = test_builder(&temp_dir, &clock).build();

    let path = logger.set_file("logs", "test").unwrap();
    assert!(path.ends_with("logs/test.log"), "{}", path.display());

    let path = logger.set_file("logs", "test.txt").unwrap();
    assert!(path.ends_with("logs/test.txt"), "{}", path.display());
    assert!(path.exists());
}

#[test]
fn test_set_file_fails_when_directory_cannot_be_created() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let base = temp_dir.path().join("not-a-dir");
    fs::write(&base, "").unwrap();

    let clock = ManualClock::new(start_time());
    let logger = LoggerBuilder::new()
        .base_dir(&base)
        .clock(Clock::ManualClock(clock))
        .build();

    let err = logger.set_file("logs", "test.log").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Setup);
    assert_eq!(err.message(), "failed to create log directory");
    assert!(logger.file_path().is_none());
}

#[test]
fn test_rotation_on_day_change() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let clock = ManualClock::new(start_time());
    let trap = RecordingTrap::default();
    let logger = test_builder(&temp_dir, &clock).trap(trap.clone()).build();
    let path = logger.set_file("logs", "test.log").unwrap();
    let log_dir = temp_dir.path().join("logs");

    crate::info!(logger: logger, "before {}", 1);
    crate::error!(logger: logger, "before {}", 2);
    let before = fs::read_to_string(&path).unwrap();

    clock.set_now(next_day());
    crate::info!(logger: logger, "after {}", 1);

    let history = log_dir.join("test.log.2024-08-10");
    assert_eq!(count_entries(&log_dir), 2);
    assert_eq!(fs::read_to_string(&history).unwrap(), before);

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("[INFO] 2024/08/11 00:00:10 "));
    assert!(lines[0].ends_with(" after 1"));
    assert_eq!(
        logger.with_file(|file| file.opened_on()),
        Some(date(2024, 8, 11))
    );

    // later on the same day nothing rotates
    clock.set_now(Zoned::from_str("2024-08-11T18:00:00[UTC]").unwrap());
    crate::info!(logger: logger, "after {}", 2);
    assert_eq!(count_entries(&log_dir), 2);
    assert_eq!(read_lines(&path).len(), 2);
    assert!(trap.errors().is_empty());
}

#[test]
fn test_rotation_on_same_day_of_next_month() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let clock = ManualClock::new(start_time());
    let logger = test_builder(&temp_dir, &clock).build();
    let path = logger.set_file("logs", "test.log").unwrap();

    crate::info!(logger: logger, "august");
    clock.set_now(Zoned::from_str("2024-09-10T08:00:00[UTC]").unwrap());
    crate::info!(logger: logger, "september");

    let history = temp_dir.path().join("logs").join("test.log.2024-09-09");
    assert_eq!(read_lines(&history).len(), 1);
    assert_eq!(read_lines(&path).len(), 1);
}

#[test]
fn test_rotation_rename_failure_is_trapped_once() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let clock = ManualClock::new(start_time());
    let trap = RecordingTrap::default();
    let logger = test_builder(&temp_dir, &clock).trap(trap.clone()).build();
    let path = logger.set_file("logs", "test.log").unwrap();

    crate::info!(logger: logger, "before");
    fs::create_dir(temp_dir.path().join("logs").join("test.log.2024-08-10")).unwrap();

    clock.set_now(next_day());
    crate::info!(logger: logger, "after {}", 1);
    crate::info!(logger: logger, "after {}", 2);

    assert_eq!(
        trap.errors(),
        vec![(ErrorKind::Rotation, "failed to rename log file".to_string())]
    );
    let lines = read_lines(&path);
    assert_eq!(lines.len(), 3);
    assert!(lines[2].ends_with(" after 2"));
}

#[test]
fn test_concurrent_emits_across_day_boundary() {
    const THREADS: usize = 128;
    const BEFORE: usize = 10;

    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let clock = ManualClock::new(start_time());
    let trap = RecordingTrap::default();
    let logger = Arc::new(test_builder(&temp_dir, &clock).trap(trap.clone()).build());
    let path = logger.set_file("logs", "test.log").unwrap();
    let log_dir = temp_dir.path().join("logs");

    for i in 0..BEFORE {
        crate::info!(logger: logger, "before {i}");
    }
    let before = fs::read_to_string(&path).unwrap();

    clock.set_now(next_day());
    let barrier = Arc::new(Barrier::new(THREADS));
    let handles = (0..THREADS)
        .map(|i| {
            let logger = logger.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                let payload = generate_random_string();
                barrier.wait();
                crate::info!(logger: logger, "thread {i} {payload}");
            })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        handle.join().unwrap();
    }

    // exactly one rotation: a second one would have replaced the archive with the new lines
    assert_eq!(count_entries(&log_dir), 2);
    assert_eq!(
        fs::read_to_string(log_dir.join("test.log.2024-08-10")).unwrap(),
        before
    );
    assert!(trap.errors().is_empty());

    let pattern =
        Regex::new(r"^\[INFO\] 2024/08/11 00:00:10 \S+:\d+ thread (\d+) [0-9A-Za-z]{50,100}$")
            .unwrap();
    let lines = read_lines(&path);
    assert_eq!(lines.len(), THREADS);
    let threads = lines
        .iter()
        .map(|line| {
            let captures = pattern.captures(line).unwrap_or_else(|| panic!("{line}"));
            captures[1].parse::<usize>().unwrap()
        })
        .collect::<BTreeSet<_>>();
    assert_eq!(threads, (0..THREADS).collect::<BTreeSet<_>>());
}

#[test]
fn test_error_locates_caller_even_when_filtered() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let clock = ManualClock::new(start_time());
    let locator = CountingLocator::default();
    let logger = test_builder(&temp_dir, &clock)
        .locator(locator.clone())
        .level(LevelFilter::Off)
        .build();
    let path = logger.set_file("logs", "test.log").unwrap();

    crate::debug!(logger: logger, "dropped");
    crate::info!(logger: logger, "dropped");
    assert_eq!(locator.count.load(Ordering::SeqCst), 0);

    crate::error!(logger: logger, "dropped");
    assert_eq!(locator.count.load(Ordering::SeqCst), 1);
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);

    logger.set_level(Level::Error);
    crate::error!(logger: logger, "kept");
    assert_eq!(locator.count.load(Ordering::SeqCst), 2);
    assert_eq!(read_lines(&path).len(), 1);
}

#[test]
fn test_show_file_name() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let clock = ManualClock::new(start_time());
    let logger = test_builder(&temp_dir, &clock).build();
    let path = logger.set_file("logs", "test.log").unwrap();

    crate::info!(logger: logger, "short");
    logger.set_show_file_name(true);
    assert!(logger.show_file_name());
    crate::info!(logger: logger, "long");

    let lines = read_lines(&path);
    let function = "dayroll::logger::tests::test_show_file_name";
    assert!(lines[0].contains(&format!(" {function}:")), "{}", lines[0]);
    assert!(
        lines[1].contains(&format!("tests.rs->{function}:")),
        "{}",
        lines[1]
    );
}

#[test]
fn test_no_locator_writes_empty_caller() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let clock = ManualClock::new(start_time());
    let logger = test_builder(&temp_dir, &clock)
        .locator(NoLocator::default())
        .build();
    let path = logger.set_file("logs", "test.log").unwrap();

    logger.log(Level::Info, &CallSite::unknown(), format_args!("anonymous"));
    assert_eq!(
        read_lines(&path),
        vec!["[INFO] 2024/08/10 23:59:30 :0 anonymous".to_string()]
    );
}

#[test]
fn test_default_logger_is_unconfigured() {
    let logger = Logger::default();
    assert_eq!(logger.level(), LevelFilter::Debug);
    assert!(!logger.show_file_name());
    assert!(logger.file_path().is_none());
}
