//! Portfolio blog main entry point
//!
//! This is the command-line interface for the portfolio blog pipeline.

use anyhow::Context;
use clap::{Parser, Subcommand};
use portfolio_blog::app::{load_featured, Debouncer};
use portfolio_blog::config::{load_config_with_hash, resolve_endpoint, Config};
use portfolio_blog::render::{article_detail, document, Notification};
use portfolio_blog::router::{FragmentChannel, RouteOutcome};
use portfolio_blog::{AppContext, BlogPage, Router, SortMode, UserEvent};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Portfolio blog: article listings from a headless CMS
///
/// Fetches articles from the content API (or the embedded fallback set when
/// the API is unreachable) and renders listings, the featured section and
/// article detail views as HTML.
#[derive(Parser, Debug)]
#[command(name = "portfolio-blog")]
#[command(version = "1.0.0")]
#[command(about = "Article listings from a headless CMS", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Hostname the site is served from (overrides the config file)
    #[arg(long, value_name = "HOST", global = true)]
    hostname: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the blog listing
    List {
        /// Search term
        #[arg(long)]
        search: Option<String>,

        /// Only articles carrying this tag
        #[arg(long)]
        tag: Option<String>,

        /// Sort order: newest, oldest or popular
        #[arg(long, default_value = "newest")]
        sort: SortMode,

        /// Page to show
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Print the store snapshot as JSON instead of HTML
        #[arg(long)]
        json: bool,

        /// Write to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Render the homepage featured section
    Featured {
        /// Number of articles (defaults to the configured featured limit)
        #[arg(long)]
        limit: Option<u32>,

        /// Write to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Render the detail view a URL fragment routes to
    Open {
        /// Fragment such as `#article/spring-boot-optimization`
        fragment: String,

        /// Write to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// List the tags known to the content API
    Tags,

    /// Read search input line by line from stdin and re-render as it settles
    SearchLive,

    /// Show the API endpoint a hostname resolves to
    Endpoint {
        hostname: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli).await {
        tracing::error!("{:#}", e);
        eprintln!(
            "{}",
            Notification::error("Something went wrong. Please try again.", Some(format!("{:#}", e)))
        );
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Command::Endpoint { hostname } = &cli.command {
        let endpoint = resolve_endpoint(hostname);
        println!("{:?}: {}", endpoint, endpoint.base_url());
        return Ok(());
    }

    let mut config = load(cli.config.as_deref())?;
    if let Some(hostname) = cli.hostname {
        config.api.hostname = hostname;
    }

    let ctx = AppContext::init(config)?;

    match cli.command {
        Command::List {
            search,
            tag,
            sort,
            page,
            json,
            out,
        } => handle_list(ctx, search, tag, sort, page, json, out.as_deref()).await,
        Command::Featured { limit, out } => handle_featured(&ctx, limit, out.as_deref()).await,
        Command::Open { fragment, out } => handle_open(ctx, fragment, out.as_deref()).await,
        Command::Tags => handle_tags(&ctx).await,
        Command::SearchLive => handle_search_live(ctx).await,
        Command::Endpoint { .. } => Ok(()),
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("portfolio_blog=info,warn"),
            1 => EnvFilter::new("portfolio_blog=debug,info"),
            2 => EnvFilter::new("portfolio_blog=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // stdout carries rendered output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file if one was given, otherwise the defaults
fn load(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No configuration file, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    Ok(config)
}

/// Writes `content` to `out`, or stdout when no file is given
fn emit(content: &str, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

/// Handles `list`: loads one listing page
async fn handle_list(
    ctx: Arc<AppContext>,
    search: Option<String>,
    tag: Option<String>,
    sort: SortMode,
    page: u32,
    json: bool,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    let mut blog = BlogPage::new(ctx);

    // Build the query before the first load
    if let Some(search) = search {
        blog.apply(UserEvent::Search(search));
    }
    blog.apply(UserEvent::FilterTag(tag));
    blog.apply(UserEvent::Sort(sort));
    blog.load().await;

    // The page guard needs `total_pages` from the first load, so any page
    // after the first costs a second request
    if page != 1 && !blog.handle(UserEvent::GoToPage(page)).await {
        tracing::warn!(
            "Page {} is out of range (1..={}), showing page 1",
            page,
            blog.store().pagination().total_pages
        );
    }

    if json {
        let snapshot = blog.store().snapshot();
        emit(&serde_json::to_string_pretty(&snapshot)?, out)
    } else {
        emit(&document("Blog", &blog.render()), out)
    }
}

/// Handles `featured`: loads the homepage featured section
async fn handle_featured(
    ctx: &AppContext,
    limit: Option<u32>,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    let limit = limit.unwrap_or(ctx.config().blog.featured_limit).max(1);
    let section = load_featured(ctx, limit).await;
    tracing::info!(
        "Featured section: {} articles ({:?})",
        section.articles.len(),
        section.source
    );
    emit(&document("Featured Articles", &section.render()), out)
}

/// Handles `open`: routes one fragment to the detail view
async fn handle_open(
    ctx: Arc<AppContext>,
    fragment: String,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    let fragments = FragmentChannel::new(fragment.as_str());
    let mut router = Router::new(ctx, fragments);

    match router.handle_fragment(&fragment).await {
        RouteOutcome::Opened(article) => {
            emit(&document(&article.title, &article_detail(&article)), out)
        }
        RouteOutcome::NotFound { .. } | RouteOutcome::Unavailable { .. } => Ok(()),
        RouteOutcome::Closed | RouteOutcome::Ignored => {
            tracing::info!("'{}' does not route to an article", fragment);
            Ok(())
        }
    }
}

/// Handles `tags`: prints one tag per line
async fn handle_tags(ctx: &AppContext) -> anyhow::Result<()> {
    match ctx.client().list_tags().await {
        Ok(tags) => {
            for tag in tags {
                println!("{}", tag);
            }
        }
        Err(e) => tracing::warn!("Error loading tags: {}", e),
    }
    Ok(())
}

/// Handles `search-live`: each stdin line is the current search box value
async fn handle_search_live(ctx: Arc<AppContext>) -> anyhow::Result<()> {
    let delay = Duration::from_millis(ctx.config().blog.search_debounce_ms);
    let mut blog = BlogPage::new(ctx);

    blog.load().await;
    println!("{}", blog.render());

    let (tx, mut debouncer) = Debouncer::new(delay);
    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if tx.send(line).is_err() {
                break;
            }
        }
        Ok::<_, std::io::Error>(())
    });

    blog.drive_search(&mut debouncer, |html, snapshot| {
        tracing::info!("{} results ({})", snapshot.total_count, snapshot.state);
        println!("{}", html);
    })
    .await;

    reader
        .await
        .context("stdin reader panicked")?
        .context("Failed to read search input")?;

    Ok(())
}
