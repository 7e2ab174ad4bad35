// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notionfolio::output::{deliver, DeliveryTarget};
use notionfolio::{
    listing, AppError, AppState, CommandLineInput, LocalPostStore, NotionHttpClient, PageFetcher,
    PostFeed, PostListing, PostSource, RemotePostStore, SiteConfig, Task,
};
use std::fs;
use std::sync::Arc;

/// Sets up logging configuration.
///
/// Console output goes to stderr so JSON printed on stdout stays pipeable.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file_path = std::env::temp_dir().join("notionfolio.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}"
    } else {
        "[{l}] {m}{n}"
    };

    let console_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Builds the page fetcher from the resolved configuration.
fn page_fetcher(config: &SiteConfig) -> Result<PageFetcher, AppError> {
    let client = NotionHttpClient::new(config.api_base.clone(), config.token.as_ref())?;
    if config.token.is_some() {
        log::info!("Using session token for private pages");
    }
    Ok(PageFetcher::new(Arc::new(client)).with_timeout(config.page_timeout))
}

async fn run(config: SiteConfig) -> Result<(), AppError> {
    let local = LocalPostStore::in_public_dir(&config.public_dir);

    match &config.task {
        Task::Serve { addr } => {
            let state = AppState {
                posts: Arc::new(local),
                pages: page_fetcher(&config)?,
                public_dir: config.public_dir.clone(),
            };
            notionfolio::serve(*addr, state).await
        }
        Task::Page { id, output_file } => {
            let fetcher = page_fetcher(&config)?;
            // A missing page still yields `null`, the same shape the site consumes.
            let tree = fetcher.fetch_page_blocks(id).await;
            let json = serde_json::to_string_pretty(&tree)?;
            deliver(&DeliveryTarget::file_or_stdout(output_file.clone(), json))?;
            Ok(())
        }
        Task::Posts {
            site,
            category,
            newest_first,
        } => {
            let feed = match site {
                Some(site) => {
                    let remote: Arc<dyn PostSource> = Arc::new(RemotePostStore::for_site(site));
                    PostFeed::new(remote).with_fallback(Arc::new(local))
                }
                None => PostFeed::new(Arc::new(local)),
            };

            let mut posts = match feed.best_available().await {
                PostListing::Available(posts) => posts,
                unavailable @ PostListing::Unavailable => {
                    let message = unavailable.error_message().unwrap_or_default();
                    return Err(AppError::Unavailable(message.to_string()));
                }
            };

            if let Some(category) = category {
                posts = listing::in_category(&posts, category)
                    .into_iter()
                    .cloned()
                    .collect();
            }
            if *newest_first {
                listing::sort_by_date_desc(&mut posts);
            }

            let json = serde_json::to_string_pretty(&posts)?;
            deliver(&DeliveryTarget::PrintToStdout { content: json })?;
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = SiteConfig::resolve(cli)?;

    run(config).await?;

    Ok(())
}
