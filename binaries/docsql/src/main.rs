use {
    clap::{arg, Command},
    docsql::cmd::{self, Error as CommandError, Input},
    parser::CancellationToken,
    snafu::prelude::*,
    std::{env, io, path::PathBuf, process},
};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("{}", source))]
    ExecuteCommand { source: CommandError },
}

pub type Result<T> = std::result::Result<T, Error>;

const DOCSQL_LOG: &str = "DOCSQL_LOG";

const DEFAULT_LOG_LEVEL: &str = "warn";

fn cli() -> Command {
    let pkg_name = env!("CARGO_PKG_NAME");

    Command::new(pkg_name)
        .bin_name(pkg_name)
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(arg!([SQL] "statements to parse, read from stdin when neither this nor --file is given"))
        .arg(arg!(-f --file <PATH> "read statements from a file").conflicts_with("SQL"))
        .arg(arg!(--"log-level" <FILTER> "tracing filter, defaults to $DOCSQL_LOG or `warn`"))
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", err);
        process::exit(2);
    }
}

fn try_main() -> Result<()> {
    let matches = cli().get_matches();

    let log_level = match matches.get_one::<String>("log-level") {
        Some(level) => level.clone(),
        None => env::var(DOCSQL_LOG).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
    };
    cmd::init_logging(&log_level).context(ExecuteCommandSnafu)?;

    let input = if let Some(sql) = matches.get_one::<String>("SQL") {
        Input::Sql(sql.clone())
    } else if let Some(path) = matches.get_one::<String>("file") {
        Input::File(PathBuf::from(path))
    } else {
        Input::Stdin
    };

    cmd::run(&CancellationToken::new(), input, io::stdin().lock(), io::stdout().lock())
        .context(ExecuteCommandSnafu)
}
