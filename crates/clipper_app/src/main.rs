mod cli;

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clipper_engine::{
    fetch_movie, fetch_quote, harvest, movie_fetch_settings, save_page, FetchSettings,
    HarvestOptions, HarvestReport, ReqwestFetcher, SiteProfile,
};
use clipper_logging::LogDestination;

use cli::{Cli, Command};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            2
        }
    };
    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    clipper_logging::initialize(LogDestination::Both, cli.verbose);

    match cli.command {
        Some(Command::Harvest {
            pages,
            article_type,
            start_page,
            flat,
            output,
        }) => run_harvest(pages, article_type, start_page, flat, output).await,
        Some(Command::Quote { url }) => run_quote(url).await,
        Some(Command::Movie { url }) => run_movie(url).await,
        Some(Command::Snapshot { url, output }) => run_snapshot(url, output).await,
        // No subcommand: the interactive surface, prompting for both inputs.
        None => run_harvest(None, None, 1, false, PathBuf::from(".")).await,
    }
}

async fn run_harvest(
    pages: Option<u32>,
    article_type: Option<String>,
    start_page: u32,
    flat: bool,
    output: PathBuf,
) -> Result<i32> {
    let page_count = match pages {
        Some(count) => count,
        None => prompt("Number of pages:")?
            .trim()
            .parse()
            .context("the number of pages must be an integer")?,
    };
    let article_type = match article_type {
        Some(label) => label,
        None => prompt("Article type:")?.trim().to_string(),
    };

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let profile = SiteProfile::nature();
    let options = HarvestOptions {
        page_count,
        article_type,
        start_page,
        create_directories: !flat,
        output_root: output,
    };

    let report = harvest(&fetcher, &profile, &options).await?;
    print_report(&report);
    Ok(if report.failures.is_empty() { 0 } else { 1 })
}

fn print_report(report: &HarvestReport) {
    println!(
        "Visited {} page(s); saved {} article(s), {} failure(s).",
        report.pages_visited,
        report.saved.len(),
        report.failures.len()
    );
    for failure in &report.failures {
        match (&failure.title, &failure.url) {
            (Some(title), Some(url)) => {
                println!("  page {}: {title:?} ({url}): {}", failure.page, failure.message)
            }
            _ => println!("  page {}: {}", failure.page, failure.message),
        }
    }
}

async fn run_quote(url: Option<String>) -> Result<i32> {
    let url = resolve_url(url)?;
    let fetcher = ReqwestFetcher::new(FetchSettings::unrestricted());
    match fetch_quote(&fetcher, &url).await {
        Ok(content) => {
            println!("{content}");
            Ok(0)
        }
        Err(err) => {
            println!("{err}");
            Ok(1)
        }
    }
}

async fn run_movie(url: Option<String>) -> Result<i32> {
    let url = resolve_url(url)?;
    let fetcher = ReqwestFetcher::new(movie_fetch_settings());
    match fetch_movie(&fetcher, &url).await {
        Ok(summary) => {
            println!("Title: {}", summary.title);
            println!("Description: {}", summary.description);
            Ok(0)
        }
        Err(err) => {
            println!("{err}");
            Ok(1)
        }
    }
}

async fn run_snapshot(url: Option<String>, output: PathBuf) -> Result<i32> {
    let url = resolve_url(url)?;
    let fetcher = ReqwestFetcher::new(FetchSettings::unrestricted());
    match save_page(&fetcher, &url, &output).await {
        Ok(path) => {
            log::info!("snapshot written to {}", path.display());
            println!("Content saved");
            Ok(0)
        }
        Err(err) => {
            println!("{err}");
            Ok(1)
        }
    }
}

fn resolve_url(url: Option<String>) -> Result<String> {
    match url {
        Some(url) => Ok(url),
        None => Ok(prompt("Input the URL:")?.trim().to_string()),
    }
}

fn prompt(label: &str) -> Result<String> {
    println!("{label}");
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading standard input")?;
    Ok(line)
}
