//! Logger setup and log file retention.

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use crate::paths;

const LATEST: &str = "latest.log";

/// A directory holding `latest.log` plus archives of earlier runs.
///
/// Archives are named after the time their run last wrote to the log.
#[derive(Debug, Clone)]
pub struct LogDir {
    dir: PathBuf,
    keep: usize,
}

impl LogDir {
    /// Logs in `dir`, keeping at most `keep` archives.
    pub fn new(dir: impl Into<PathBuf>, keep: usize) -> Self {
        Self {
            dir: dir.into(),
            keep,
        }
    }

    /// Path of the log file for the current run.
    pub fn latest(&self) -> PathBuf {
        self.dir.join(LATEST)
    }

    /// Archive the previous run's log and drop the oldest archives.
    pub fn rotate(&self) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;

        let latest = self.latest();
        if latest.exists() {
            let written: DateTime<Local> = fs::metadata(&latest)?.modified()?.into();
            let archived = self.archive_path(&written.format("%Y%m%d_%H%M%S").to_string());
            fs::rename(&latest, archived)?;
        }

        let archives = self.archives()?;
        let excess = archives.len().saturating_sub(self.keep);
        for path in &archives[..excess] {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Archived logs, oldest first.
    pub fn archives(&self) -> io::Result<Vec<PathBuf>> {
        let mut archives = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if !name.ends_with(".log") || name == LATEST || !entry.file_type()?.is_file() {
                continue;
            }
            let modified = entry.metadata()?.modified()?;
            archives.push((modified, entry.path()));
        }
        archives.sort();
        Ok(archives.into_iter().map(|(_, path)| path).collect())
    }

    /// First free archive name for a timestamp.
    fn archive_path(&self, stamp: &str) -> PathBuf {
        let mut path = self.dir.join(format!("{stamp}.log"));
        let mut n = 1;
        while path.exists() {
            path = self.dir.join(format!("{stamp}_{n}.log"));
            n += 1;
        }
        path
    }
}

/// Log to `latest.log` in the cache directory, or warnings to stderr when
/// there is no usable cache directory.
pub fn init(level: LevelFilter, keep: usize) {
    let file = paths::cache_dir().and_then(|dir| {
        let logs = LogDir::new(dir, keep);
        if let Err(e) = logs.rotate() {
            eprintln!("Failed to rotate logs: {}", e);
        }
        File::create(logs.latest()).ok()
    });

    let result = match file {
        Some(file) => WriteLogger::init(level, Config::default(), file),
        None => TermLogger::init(
            level.min(LevelFilter::Warn),
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    };

    if let Err(e) = result {
        eprintln!("Failed to initialize logger: {}", e);
    }
}
