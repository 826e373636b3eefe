use clap::Parser;
use colored::Colorize;
use linkrank_core::cli::{self, Cli};
use linkrank_core::exit::LinkRankExit;
use tracing_subscriber::EnvFilter;

fn main() -> LinkRankExit {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = if cli.init {
        cli::handlers::handle_init()
    } else if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(LinkRankExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            LinkRankExit::for_error(&e)
        }
    }
}

fn init_tracing(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose, env.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

/// `--verbose` forces `debug`; otherwise `RUST_LOG` wins, falling back to `warn`.
fn env_filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    env.filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}
