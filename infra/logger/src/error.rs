/// Errors that can occur during logger initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Failure when configuring the rolling file appender (e.g., invalid path).
    #[error("rolling file appender error: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    /// A global tracing subscriber has already been initialized in this process.
    #[error("tracing subscriber error: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),

    /// Log directory could not be created.
    #[error("failed to prepare log directory {path}: {source}")]
    Io {
        #[source]
        source: std::io::Error,
        path: String,
    },

    /// Invalid configuration supplied to the logger builder.
    #[error("invalid logger configuration: {message}")]
    InvalidConfiguration { message: &'static str },

    /// The programmatic env filter did not parse.
    #[error("invalid env filter '{filter}': {source}")]
    InvalidFilter {
        #[source]
        source: tracing_subscriber::filter::ParseError,
        filter: String,
    },
}
