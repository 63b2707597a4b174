use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Ordered from least to most output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

/// Where log events are written. Never stdout, which carries the credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Sink,
    Stderr,
}

impl Verbosity {
    /// Maps `-q` and the `-v` count to a level. `-q` wins over any `-v`.
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    fn to_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    fn to_filter(self) -> String {
        let level = self.to_level();
        format!("regcred={level}")
    }

    pub fn target(self) -> LogTarget {
        match self {
            Self::Quiet => LogTarget::Sink,
            _ => LogTarget::Stderr,
        }
    }

    /// File and line are printed from `-vv` up.
    pub fn shows_location(self) -> bool {
        self >= Self::Debug
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides `verbosity`.
pub fn init(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.to_filter()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(verbosity.shows_location())
        .with_line_number(verbosity.shows_location())
        .compact();

    match (verbosity.target(), verbosity) {
        (LogTarget::Sink, _) => {
            subscriber.with_writer(std::io::sink).init();
        }
        (LogTarget::Stderr, Verbosity::Normal) => {
            subscriber.with_writer(std::io::stderr).without_time().init();
        }
        (LogTarget::Stderr, _) => {
            subscriber.with_writer(std::io::stderr).init();
        }
    }
}
