use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use reelfinder::{
    config::Config,
    models::{Algorithm, Movie},
    services::{
        query, BrowseService, DetailModal, GenreSection, HttpRecommendationProvider, ModalView,
        RecommendationProvider,
    },
    view::render,
};

/// ReelFinder - terminal front end for a movie recommendation API
#[derive(Parser)]
#[command(name = "reelfinder")]
#[command(about = "Browse genres, search and find similar movies", long_about = None)]
struct Cli {
    /// Recommendation API base URL (overrides API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one row of popular movies per genre
    Browse {
        /// Movies per genre row (defaults to GENRE_ROW_LIMIT)
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Show the most popular movies overall
    Popular,

    /// Search for recommendations with a free-text query
    Search {
        query: String,

        /// Ranking algorithm, for backends that support it
        #[arg(long, value_enum)]
        algorithm: Option<Algorithm>,

        /// Number of results, for backends that support it
        #[arg(long)]
        top_n: Option<u32>,
    },

    /// Show the details of one movie from a search or a genre row
    Details {
        #[command(flatten)]
        target: PickArgs,
    },

    /// Find movies similar to one movie from a search or a genre row
    Similar {
        #[command(flatten)]
        target: PickArgs,
    },

    /// Print the similarity query for a movie record (JSON file or stdin)
    Synthesize { file: Option<PathBuf> },

    /// Check that the recommendation API is up
    Health,
}

#[derive(Args)]
struct PickArgs {
    /// Search query whose results the movie is picked from
    #[arg(required_unless_present = "genre", conflicts_with = "genre")]
    query: Option<String>,

    /// Genre row to pick the movie from instead of a search
    #[arg(long)]
    genre: Option<String>,

    /// Position of the movie to open (1-based)
    #[arg(long, default_value = "1")]
    pick: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(api_url) = cli.api_url {
        config = config.with_api_url(api_url);
    }

    let provider: Arc<dyn RecommendationProvider> = Arc::new(
        HttpRecommendationProvider::from_config(&config)
            .context("Failed to create recommendation client")?,
    );
    let browse = BrowseService::new(provider.clone())
        .with_ranking(config.default_algorithm, config.default_top_n);

    match cli.command {
        Commands::Browse { limit } => {
            handle_browse(&browse, limit.unwrap_or(config.genre_row_limit)).await
        }
        Commands::Popular => handle_popular(provider.as_ref()).await?,
        Commands::Search {
            query,
            algorithm,
            top_n,
        } => {
            let browse = browse.with_ranking(
                algorithm.or(config.default_algorithm),
                top_n.or(config.default_top_n),
            );
            let results = browse.search(&query).await;
            print!("{}", render::recommendation_grid(&query, &results));
        }
        Commands::Details { target } => {
            handle_details(&browse, &target, config.genre_row_limit).await?
        }
        Commands::Similar { target } => {
            handle_similar(&browse, &target, config.genre_row_limit).await?
        }
        Commands::Health => handle_health(provider.as_ref()).await?,
        Commands::Synthesize { file } => handle_synthesize(file.as_ref())?,
    }

    Ok(())
}

async fn handle_browse(browse: &BrowseService, limit: u32) {
    let sections = browse.genre_sections(limit).await;
    if sections.is_empty() {
        println!("{}", "No genres available.".dimmed());
    }
    for section in &sections {
        println!("{}", render::genre_row(section));
    }
}

async fn handle_popular(provider: &dyn RecommendationProvider) -> Result<()> {
    let movies = provider
        .popular_movies()
        .await
        .context("Failed to load popular movies")?;
    let section = GenreSection {
        genre: "Popular".to_string(),
        row_id: "popular".to_string(),
        movies,
    };
    print!("{}", render::genre_row(&section));
    Ok(())
}

/// Opens the picked movie in the detail view.
///
/// A search result carries the rest of the grid as its similar strip; a
/// genre row pick leaves the strip to be fetched.
async fn open_pick(
    browse: &BrowseService,
    modal: &mut DetailModal,
    target: &PickArgs,
    row_limit: u32,
) -> Result<ModalView> {
    let index = target
        .pick
        .checked_sub(1)
        .ok_or_else(|| anyhow!("--pick starts at 1"))?;

    let (view, available) = match (&target.genre, &target.query) {
        (Some(genre), _) => {
            let row = browse.genre_movies(genre, row_limit).await;
            (modal.open_from_row(&row, index), row.len())
        }
        (None, Some(search_query)) => {
            let results = browse.search(search_query).await;
            (
                modal.open_from_grid(&results.movies, index),
                results.movies.len(),
            )
        }
        (None, None) => return Err(anyhow!("Give a search query or --genre")),
    };

    view.ok_or_else(|| {
        anyhow!(
            "Movie {} not found; only {} movies to pick from",
            target.pick,
            available
        )
    })
}

async fn handle_details(browse: &BrowseService, target: &PickArgs, row_limit: u32) -> Result<()> {
    let mut modal = DetailModal::new();
    let view = open_pick(browse, &mut modal, target, row_limit).await?;

    let similar = browse.similar_for(&view).await;
    print!("{}", render::detail_view(&view.movie, &similar));
    modal.close();
    Ok(())
}

async fn handle_similar(browse: &BrowseService, target: &PickArgs, row_limit: u32) -> Result<()> {
    let mut modal = DetailModal::new();
    let view = open_pick(browse, &mut modal, target, row_limit).await?;

    let (similar_query, results) = browse
        .find_similar(&mut modal)
        .await
        .ok_or_else(|| anyhow!("No movie open"))?;

    println!("{} {}", "Similar to".bold(), view.movie.title);
    println!("{} {}", "Query:".bold(), similar_query);
    println!();
    print!("{}", render::recommendation_grid(&similar_query, &results));
    Ok(())
}

fn handle_synthesize(file: Option<&PathBuf>) -> Result<()> {
    let json = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read movie from stdin")?;
            buf
        }
    };

    let movie: Movie = serde_json::from_str(&json).context("Invalid movie record")?;
    println!("{}", query::synthesize(&movie));
    Ok(())
}

async fn handle_health(provider: &dyn RecommendationProvider) -> Result<()> {
    let health = provider
        .health()
        .await
        .context("Recommendation API is unreachable")?;

    println!("{} {}", "Status:".bold(), health.status.green());
    if let Some(count) = health.movies_loaded {
        println!("{} {}", "Movies loaded:".bold(), count);
    }
    if let Some(model) = health.sbert_model {
        println!("{} {}", "Embedding model:".bold(), model);
    }
    Ok(())
}
