use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use vidscribe_core::{
    ApiClient, ProcessError, SearchQuery, SourceType, format_record_readable,
    format_result_readable,
};

#[derive(Parser)]
#[command(name = "vidscribe")]
#[command(about = "Submit video URLs to the processing API and read back transcripts and summaries")]
struct Cli {
    /// Base URL of the processing API (defaults to VIDSCRIBE_API_URL or http://localhost:8000)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit a video URL for processing and print the transcript and summary
    Process {
        /// Video URL (YouTube, Instagram, Facebook, TikTok, ...)
        url: String,
    },
    /// Look up an already processed video by its original URL
    Show {
        /// Video URL as it was submitted
        url: String,
    },
    /// Search processed videos
    Search {
        /// Keyword matched against transcripts
        #[arg(short, long)]
        keyword: Option<String>,

        /// Restrict to one platform (youtube, instagram, facebook, tiktok, ...)
        #[arg(short, long)]
        source_type: Option<String>,

        /// Only videos processed on or after this date (YYYY-MM-DD)
        #[arg(long)]
        since: Option<NaiveDate>,

        /// Only videos processed on or before this date (YYYY-MM-DD)
        #[arg(long)]
        until: Option<NaiveDate>,
    },
    /// Check that the processing API is reachable
    Health,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn fail(err: ProcessError) -> ! {
    eprintln!("{} {}", style("Error:").red().bold(), err.user_message());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let client = match cli.api_url {
        Some(api_url) => ApiClient::new(api_url),
        None => ApiClient::from_env(),
    };

    println!(
        "\n{}  {}\n",
        style("vidscribe").cyan().bold(),
        style("Video Transcripts & Summaries").dim()
    );

    match cli.command {
        Command::Process { url } => {
            let spinner = create_spinner("Processing video...");
            let video = match client.process(&url).await {
                Ok(video) => video,
                Err(err) => {
                    spinner.finish_and_clear();
                    fail(err);
                }
            };
            spinner.finish_with_message(format!(
                "{} Successfully processed {} video!",
                style("✓").green().bold(),
                video.source_type.badge()
            ));

            println!("\n{}", style("─".repeat(60)).dim());
            println!("{}", format_result_readable(&video));
        }
        Command::Show { url } => {
            let record = match client.fetch(&url).await {
                Ok(record) => record,
                Err(err) => fail(err),
            };
            println!("{}", format_record_readable(&record));
            if let Some(transcript) = &record.transcript {
                println!("{}", style("─".repeat(60)).dim());
                println!("{}", transcript.trim());
            }
        }
        Command::Search {
            keyword,
            source_type,
            since,
            until,
        } => {
            let query = SearchQuery {
                keyword,
                source_type: source_type.map(SourceType::from),
                start_date: since,
                end_date: until,
            };
            let hits = match client.search(&query).await {
                Ok(hits) => hits,
                Err(err) => fail(err),
            };
            if hits.is_empty() {
                println!("{}", style("No videos matched.").dim());
            } else {
                println!(
                    "{} {}\n",
                    style(hits.len()).green().bold(),
                    style("video(s) matched").dim()
                );
                for record in &hits {
                    println!("{}", format_record_readable(record));
                }
            }
        }
        Command::Health => match client.health().await {
            Ok(health) => println!(
                "{} API at {} is {}",
                style("✓").green().bold(),
                style(client.base_url()).cyan(),
                style(&health.status).green()
            ),
            Err(err) => fail(err),
        },
    }

    Ok(())
}
