use crate::config::{LoggingConfig, Section};
use crate::paths::resolve_under;
use std::{
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex},
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    filter::FilterFn,
    fmt::{self, time::UtcTime},
    prelude::*,
    Layer, Registry,
};

use file_rotate::{compression::Compression, suffix::AppendCount, ContentLimit, FileRotate};

const DEFAULT_SECTION: &str = "default";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;
type TargetFilter = FilterFn<Box<dyn Fn(&tracing::Metadata<'_>) -> bool + Send + Sync + 'static>>;

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(LevelFilter::TRACE),
        "debug" => Some(LevelFilter::DEBUG),
        "warn" => Some(LevelFilter::WARN),
        "error" => Some(LevelFilter::ERROR),
        "off" | "none" => None,
        _ => Some(LevelFilter::INFO),
    }
}

/// True if `target` is `prefix` itself or lives under `prefix::`.
fn matches_prefix(target: &str, prefix: &str) -> bool {
    target
        .strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
}

/// Which log targets a section owns.
enum Selector {
    /// An explicit subsystem: everything under one target prefix.
    Prefix(String),
    /// The "default" section: everything no explicit subsystem claims.
    Rest(Vec<String>),
}

impl Selector {
    fn for_section(name: &str, explicit: &[String]) -> Self {
        if name == DEFAULT_SECTION {
            Self::Rest(explicit.to_vec())
        } else {
            Self::Prefix(name.to_string())
        }
    }

    fn owns(&self, target: &str) -> bool {
        match self {
            Self::Prefix(p) => matches_prefix(target, p),
            Self::Rest(claimed) => !claimed.iter().any(|p| matches_prefix(target, p)),
        }
    }

    fn filter(self, max: LevelFilter) -> TargetFilter {
        FilterFn::new(Box::new(move |meta: &tracing::Metadata<'_>| {
            max >= *meta.level() && self.owns(meta.target())
        }))
    }
}

/// Size-rotated log file shared by every writer handle of a section.
#[derive(Clone)]
struct RotatingFile(Arc<Mutex<FileRotate<AppendCount>>>);

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?
            .write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?
            .flush()
    }
}

impl<'a> fmt::MakeWriter<'a> for RotatingFile {
    type Writer = RotatingFile;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn open_rotating_file(path: &Path, section: &Section) -> io::Result<RotatingFile> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let max_bytes = section.max_size_mb.unwrap_or(100) * 1024 * 1024;
    let rot = FileRotate::new(
        path,
        AppendCount::new(section.max_backups.unwrap_or(3)),
        ContentLimit::BytesSurpassed(max_bytes as usize),
        Compression::None,
        #[cfg(unix)]
        None,
    );
    Ok(RotatingFile(Arc::new(Mutex::new(rot))))
}

fn section_file(name: &str, section: &Section, base_dir: &Path) -> Option<RotatingFile> {
    if section.file.trim().is_empty() {
        return None;
    }
    let path = resolve_under(&section.file, base_dir);
    match open_rotating_file(&path, section) {
        Ok(file) => Some(file),
        Err(e) => {
            // The subscriber is not installed yet, so stderr is the only channel.
            eprintln!(
                "failed to open log file '{}' for section '{}': {}",
                path.display(),
                name,
                e
            );
            None
        }
    }
}

fn section_layers(
    name: &str,
    section: &Section,
    explicit: &[String],
    base_dir: &Path,
    ansi: bool,
) -> Vec<BoxedLayer> {
    let mut layers = Vec::new();

    if let Some(level) = parse_level(&section.console_level) {
        layers.push(
            fmt::layer()
                .with_ansi(ansi)
                .with_target(true)
                .with_timer(UtcTime::rfc_3339())
                .with_filter(Selector::for_section(name, explicit).filter(level))
                .boxed(),
        );
    }

    if let (Some(file), Some(level)) = (
        section_file(name, section, base_dir),
        parse_level(&section.file_level),
    ) {
        layers.push(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_target(true)
                .with_timer(UtcTime::rfc_3339())
                .with_writer(file)
                .with_filter(Selector::for_section(name, explicit).filter(level))
                .boxed(),
        );
    }

    layers
}

/// Install the global subscriber described by `cfg`.
///
/// Each section gets a console sink and, when `file` is set, a JSON file sink
/// rotated by size. Relative file paths resolve against `base_dir` (the
/// server home dir). Calling this twice is harmless: the second install is ignored.
pub fn init_logging_from_config(cfg: &LoggingConfig, base_dir: &Path) {
    // Bridge `log` records before the subscriber goes in.
    let _ = tracing_log::LogTracer::init();

    if cfg.is_empty() {
        let _ = tracing_subscriber::fmt()
            .with_target(true)
            .with_timer(UtcTime::rfc_3339())
            .try_init();
        return;
    }

    let explicit: Vec<String> = cfg
        .keys()
        .filter(|k| k.as_str() != DEFAULT_SECTION)
        .cloned()
        .collect();
    let ansi = io::stdout().is_terminal();

    let layers: Vec<BoxedLayer> = cfg
        .iter()
        .flat_map(|(name, section)| section_layers(name, section, &explicit, base_dir, ansi))
        .collect();

    let _ = Registry::default().with(layers).try_init();
}
