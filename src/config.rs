use crate::constants::{NOTION_API_BASE_URL, PAGE_FETCH_TIMEOUT, PUBLIC_DIR};
use crate::error::AppError;
use crate::types::{AuthToken, PageId, ValidatedUrl};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    #[command(subcommand)]
    pub command: Command,

    /// Directory of the exported site (holds data/postMeta.json)
    #[arg(long, global = true, default_value = PUBLIC_DIR)]
    pub public_dir: PathBuf,

    /// Seconds a page fetch may take before it is abandoned
    #[arg(long, global = true, default_value_t = PAGE_FETCH_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Base URL of Notion's v3 API
    #[arg(long, global = true, env = "NOTION_API_BASE", default_value = NOTION_API_BASE_URL)]
    pub api_base: String,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve /api/posts, /api/pages/{id} and the static /data assets
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
    /// Fetch a page's block tree and emit it as JSON
    Page {
        /// Notion page URL or ID
        page: String,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output_file: Option<String>,
    },
    /// Emit the post list as JSON
    Posts {
        /// Fetch from a deployed site's /data/postMeta.json, falling back to the local file
        #[arg(long)]
        site: Option<String>,

        /// Only posts in this category
        #[arg(long)]
        category: Option<String>,

        /// Sort newest first instead of file order
        #[arg(long, default_value_t = false)]
        newest_first: bool,
    },
}

/// What the binary was asked to do, with every input validated.
#[derive(Debug, Clone)]
pub enum Task {
    Serve {
        addr: SocketAddr,
    },
    Page {
        id: PageId,
        output_file: Option<PathBuf>,
    },
    Posts {
        site: Option<ValidatedUrl>,
        category: Option<String>,
        newest_first: bool,
    },
}

/// Resolved configuration: validated and ready to build clients from.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub task: Task,
    pub public_dir: PathBuf,
    pub page_timeout: Duration,
    pub api_base: ValidatedUrl,
    pub token: Option<AuthToken>,
    pub verbose: bool,
}

impl SiteConfig {
    /// Resolves a complete configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let token = std::env::var("NOTION_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());
        Self::resolve_with_token(cli, token)
    }

    /// Like [`resolve`](Self::resolve) with the session token supplied directly.
    pub fn resolve_with_token(
        cli: CommandLineInput,
        token: Option<String>,
    ) -> Result<Self, AppError> {
        if cli.timeout == 0 {
            return Err(AppError::MissingConfiguration(
                "--timeout must be at least 1 second".to_string(),
            ));
        }

        let task = match cli.command {
            Command::Serve { addr } => Task::Serve { addr },
            Command::Page { page, output_file } => Task::Page {
                id: PageId::parse(&page)?,
                output_file: output_file.map(PathBuf::from),
            },
            Command::Posts {
                site,
                category,
                newest_first,
            } => Task::Posts {
                site: site.as_deref().map(ValidatedUrl::parse).transpose()?,
                category,
                newest_first,
            },
        };

        Ok(SiteConfig {
            task,
            public_dir: cli.public_dir,
            page_timeout: Duration::from_secs(cli.timeout),
            api_base: ValidatedUrl::parse(&cli.api_base)?,
            token: token.map(AuthToken::new).transpose()?,
            verbose: cli.verbose,
        })
    }
}
