use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Duration;

use eyre::{Result, bail};
use log::{debug, info};

mod cli;

use cli::Cli;
use urlsum::config::{Config, DEFAULT_TIMEOUT_SECS, Settings};
use urlsum::{ContentDocument, SummaryMode};

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("urlsum.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("urlsum")
        .join("logs")
}

fn build_after_help() -> String {
    let log_path = log_dir().join("urlsum.log");
    format!(
        "ENVIRONMENT:\n  GROQ_API_KEY         required, used for summarization\n  LANGSMITH_API_KEY    optional tracing key\n\nLogs are written to: {}",
        log_path.display()
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Load config file (non-fatal if missing/invalid)
    let config = Config::load().unwrap_or_default();

    // Required API key is checked up front, before any request runs
    let settings = Settings::from_env()?;

    // CLI flag takes priority over config default
    let mode = match cli.mode {
        Some(m) => m.into(),
        None => config
            .default_mode
            .as_deref()
            .and_then(SummaryMode::parse)
            .unwrap_or(SummaryMode::ThreeSentence),
    };

    let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

    let client = reqwest::Client::new();

    // Collect URLs: from arg or stdin
    let urls = if let Some(ref url) = cli.url {
        vec![url.clone()]
    } else {
        let stdin = io::stdin();
        stdin.lock().lines().collect::<Result<Vec<_>, _>>()?
    };

    if urls.iter().all(|u| u.trim().is_empty()) {
        bail!("no URL provided\n\nUsage: urlsum <URL>\n       echo <URL> | urlsum");
    }

    let mut failed = false;
    for url_input in &urls {
        let url_input = url_input.trim();
        if url_input.is_empty() {
            continue;
        }

        // One handler per URL: any pipeline failure is reported and the next
        // input still runs
        if let Err(e) = run(&client, &settings, url_input, mode, timeout, &cli).await {
            eprintln!("Error: {e}");
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

/// One pipeline pass: validate, classify, retrieve, summarize, render
async fn run(
    client: &reqwest::Client,
    settings: &Settings,
    url_input: &str,
    mode: SummaryMode,
    timeout: Duration,
    cli: &Cli,
) -> Result<()> {
    if !urlsum::is_valid_url(url_input) {
        bail!(
            "not a valid URL: {url_input}\n\nProvide a full URL with scheme and host, e.g.\n  https://example.com/article\n  https://www.youtube.com/watch?v=ID\n  https://youtu.be/ID"
        );
    }

    let documents: Vec<ContentDocument> = if urlsum::is_youtube_url(url_input) {
        let acquisition = urlsum::youtube::acquire(client, url_input).await;

        // The thumbnail renders whenever the ID resolved, even if the
        // transcript fetch failed. Metadata goes to stderr so stdout stays
        // pipeable summary output.
        if let Some(ref video_id) = acquisition.video_id {
            eprintln!("Thumbnail: {}", urlsum::output::thumbnail_url(video_id));
        }

        match acquisition.outcome {
            Ok(doc) => vec![doc],
            Err(failure) => bail!("{failure}"),
        }
    } else {
        vec![urlsum::page::fetch(url_input, timeout).await?]
    };

    if cli.verbose {
        for doc in &documents {
            let source = doc.metadata.get("source").map(String::as_str).unwrap_or("?");
            let video_id = doc.metadata.get("video_id").map(String::as_str).unwrap_or("-");
            eprintln!(
                "Source: {source}\nVideo ID: {video_id}\nCharacters: {}",
                doc.page_content.len()
            );
        }
    }

    debug!("Summarizing {url_input}");
    let summary = urlsum::summarize::summarize(client, settings, &documents, mode).await?;
    let rendered = urlsum::output::render_summary(&summary);

    if let Some(ref path) = cli.output {
        std::fs::write(path, &rendered)?;
        if cli.verbose {
            eprintln!("Summary written to: {}", path.display());
        }
    } else {
        println!("{rendered}");
    }

    Ok(())
}
