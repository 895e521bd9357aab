//! Bootleg - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use bootleg::{
    cli::{Args, InputFormat},
    config::{validate_urls, ApiTokens, Config},
    download::{resolve_all, run_queue},
    downloaders::{Downloader, InstagramDownloader},
    error::{exit_codes, Error, Result},
    input::read_lines,
    output::{create_item_bar, print_banner, print_error, print_info, print_run_summary,
        print_warning},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::TomlParse(_)
                | Error::Io(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::NoDownloader(_)
                | Error::WrongHost { .. }
                | Error::UnsupportedProfile(_)
                | Error::UnexpectedMediaType(_)
                | Error::UrlParse(_) => ExitCode::from(exit_codes::RESOLVE_ERROR as u8),
                Error::Api(_)
                | Error::Download(_)
                | Error::NotImplemented { .. }
                | Error::Http(_) => ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load the URL list, either from a config or from a plain line file
    let (urls, api_tokens) = match args.format {
        InputFormat::Config => {
            let config = Config::load(&args.file)?;
            (config.urls, config.api_tokens)
        }
        InputFormat::List => {
            let urls = read_lines(&args.file)?;
            validate_urls(&urls)?;
            (urls, ApiTokens::default())
        }
    };

    let downloaders: Vec<Box<dyn Downloader>> =
        vec![Box::new(InstagramDownloader::new(api_tokens.instagram)?)];

    print_info(&format!("Resolving {} URL(s)", urls.len()));
    let (tasks, unresolved) = resolve_all(&downloaders, &urls).await?;

    let progress = create_item_bar(tasks.len() as u64, "Downloading");
    let outcomes = run_queue(tasks, &args.dir, args.concurrency.get(), &progress).await;
    progress.finish_and_clear();

    let completed = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
    let failed = outcomes.len() - completed;

    if failed > 0 {
        print_warning(&format!("{} download(s) failed", failed));
    }
    print_run_summary(completed, failed, unresolved);

    Ok(())
}
