mod error;

pub use error::{Error, Result};

use {
    error::{LogFilterSnafu, ParseSnafu, ReadFileSnafu, ReadStdinSnafu, WriteOutputSnafu},
    parser::{ast::Query, parse_query, CancellationToken},
    snafu::prelude::*,
    std::{
        fs,
        io::{Read, Write},
        path::PathBuf,
    },
    tracing::debug,
    tracing_subscriber::EnvFilter,
};

/// Where the SQL text comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Sql(String),
    File(PathBuf),
    Stdin,
}

/// Installs the global subscriber; logs go to stderr so stdout only carries statements.
pub fn init_logging(filter: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(filter).context(LogFilterSnafu { filter })?;

    // a subscriber installed earlier (e.g. by a test harness) is kept
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    Ok(())
}

pub fn read_input(input: Input, mut stdin: impl Read) -> Result<String> {
    match input {
        Input::Sql(sql) => Ok(sql),
        Input::File(path) => {
            debug!(path = %path.display(), "reading sql file");
            fs::read_to_string(&path).context(ReadFileSnafu { path })
        }
        Input::Stdin => {
            let mut sql = String::new();
            stdin.read_to_string(&mut sql).context(ReadStdinSnafu)?;
            Ok(sql)
        }
    }
}

/// Writes every statement pretty-printed, separated by blank lines.
pub fn render(query: &Query, mut out: impl Write) -> Result<()> {
    for (i, stmt) in query.statements.iter().enumerate() {
        if i > 0 {
            writeln!(out).context(WriteOutputSnafu)?;
        }
        writeln!(out, "{:#?}", stmt).context(WriteOutputSnafu)?;
    }

    out.flush().context(WriteOutputSnafu)
}

/// Parses the SQL named by `input` and prints the statements to `out`.
pub fn run(ctx: &CancellationToken, input: Input, stdin: impl Read, out: impl Write) -> Result<()> {
    let sql = read_input(input, stdin)?;
    let query = parse_query(ctx, &sql).context(ParseSnafu)?;

    render(&query, out)
}
