mod render;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use frontpage_client::{DEFAULT_SUBREDDIT, HackerNewsAdapter, RedditAdapter, ReqwestFetcher};
use frontpage_core::ListingService;
use frontpage_core::models::Target;
use frontpage_core::traits::SourceAdapter;

use render::Theme;

#[derive(Parser)]
#[command(
    name = "frontpage",
    version,
    about = "Terminal front pages for Hacker News and Reddit"
)]
struct Cli {
    /// Print records as pretty JSON instead of the colorized layout
    #[arg(long, global = true)]
    json: bool,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "FRONTPAGE_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hacker News front page
    Hn {
        /// Listing page number (1 = front page)
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },
    /// Subreddit front page (old.reddit.com)
    Reddit {
        /// Subreddit name, without the r/ prefix
        #[arg(short, long, default_value = DEFAULT_SUBREDDIT)]
        sub: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Setup tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("frontpage_core=info".parse()?)
                .add_directive("frontpage_client=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (adapter, target): (Box<dyn SourceAdapter>, Target) = match cli.command {
        Commands::Hn { page } => (Box::new(HackerNewsAdapter), Target::Page(page)),
        Commands::Reddit { sub } => (Box::new(RedditAdapter), Target::Collection(sub)),
    };

    let fetcher =
        ReqwestFetcher::with_timeout(adapter.user_agent(), Duration::from_secs(cli.timeout))?;
    let service = ListingService::new(fetcher);

    let records = service.run(adapter.as_ref(), &target).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    render::render(&Theme::default(), adapter.source_id(), &target, &records);
    Ok(())
}
