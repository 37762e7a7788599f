use {snafu::prelude::*, std::path::PathBuf};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum Error {
    #[snafu(display("invalid log filter \"{}\": {}", filter, source))]
    LogFilter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },

    #[snafu(display("failed to read \"{}\": {}", path.display(), source))]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("failed to read stdin: {}", source))]
    ReadStdin { source: std::io::Error },

    #[snafu(display("{}", source))]
    Parse { source: parser::Error },

    #[snafu(display("failed to write output: {}", source))]
    WriteOutput { source: std::io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
