mod browse;
mod render;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use jobboard_client::{ClientError, JobBoardClient};
use jobboard_core::present::DetailSummary;
use jobboard_core::{JobPostFilters, ViewState};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "jobboard")]
#[command(about = "Browse job posts from the job posts API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List job posts, newest first
    List {
        /// Page to show (1-based)
        #[arg(long, default_value = "1")]
        page: u32,
        /// Free-text search
        #[arg(long)]
        search: Option<String>,
        /// Only posts carrying this tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Posts per page, 1 to 100 (defaults to `JOBBOARD_PAGE_SIZE`)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
        page_size: Option<u32>,
    },
    /// Show one job post
    Show {
        /// Job post id
        id: String,
    },
    /// List every known tag
    Tags,
    /// Show dataset statistics
    Stats,
    /// Check the upstream API
    Health,
    /// Interactive browsing session on stdin
    Browse,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = jobboard_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = JobBoardClient::from_config(&config)?;
    tracing::debug!(api = %client.base_url(), env = %config.env, "client ready");

    match cli.command {
        Some(Commands::List {
            page,
            search,
            tags,
            page_size,
        }) => {
            let view = ViewState {
                page: page.max(1),
                search: search.unwrap_or_default().trim().to_owned(),
                tags,
            };
            let filters = JobPostFilters::for_view(&view, page_size.unwrap_or(config.page_size));
            let listing = client.list_job_posts(&filters).await.map_err(failure)?;
            print!("{}", render::render_listing(&listing));
        }
        Some(Commands::Show { id }) => {
            let Some(id) = browse::parse_job_id(&id) else {
                anyhow::bail!(render::NOT_FOUND);
            };
            let post = client.get_job_post(id).await.map_err(failure)?;
            print!("{}", render::render_detail(&DetailSummary::from_post(&post)));
        }
        Some(Commands::Tags) => {
            let tags = client.list_tags().await.map_err(failure)?;
            print!("{}", render::render_tags(&tags));
        }
        Some(Commands::Stats) => {
            let stats = client.get_stats().await.map_err(failure)?;
            print!("{}", render::render_stats(&stats));
        }
        Some(Commands::Health) => {
            let health = client.health().await.map_err(failure)?;
            println!(
                "upstream: {} (database: {})",
                health.status,
                health.database.as_deref().unwrap_or("unknown")
            );
        }
        Some(Commands::Browse) | None => {
            browse::run_browse(Arc::new(client), config.page_size).await?;
        }
    }

    Ok(())
}

/// Turns a client error into the message the user sees.
fn failure(err: ClientError) -> anyhow::Error {
    tracing::debug!(error = ?err, "command failed");
    anyhow::anyhow!(err.display_message())
}
