use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{DataIndex, LoadConfig, DEFAULT_GRAPH_FILE, DEFAULT_MOVIES_FILE};
use engine::{Recommendation, RecommendError, RecommendationEngine};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// ReelGraph - Movie Recommendation Engine
#[derive(Parser)]
#[command(name = "reel-graph")]
#[command(about = "Movie recommendations from a co-occurrence graph and movie attributes", long_about = None)]
struct Cli {
    /// Directory holding the graph and movie data files
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// Edge list file, relative to the data directory
    #[arg(long, default_value = DEFAULT_GRAPH_FILE)]
    graph_file: PathBuf,

    /// Movie attribute file, relative to the data directory
    #[arg(long, default_value = DEFAULT_MOVIES_FILE)]
    movies_file: PathBuf,

    /// Show debug logging (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,

    /// Without a subcommand, asks for a movie interactively
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Get recommendations for a movie
    Recommend {
        /// Movie to get recommendations for
        #[arg(long)]
        movie: String,

        /// Show which attributes matched and how far away each movie is
        #[arg(long)]
        explain: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a movie's attributes and direct neighbors
    Movie {
        /// Movie to display
        #[arg(long)]
        movie: String,
    },

    /// Show how much data was loaded
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = LoadConfig::new(
        cli.data_dir.join(&cli.graph_file),
        cli.data_dir.join(&cli.movies_file),
    );

    // Missing sources are reported, then we carry on with what loaded
    let start = Instant::now();
    let report = DataIndex::load_from_files(&config);
    for failure in &report.failures {
        eprintln!("{} {}", "Error:".red().bold(), failure);
    }
    let (movies, edges, records) = report.index.counts();
    eprintln!(
        "{} Loaded {} movies / {} edges and {} movie records in {:?}",
        "✓".green(),
        movies,
        edges,
        records,
        start.elapsed()
    );

    let engine = RecommendationEngine::new(Arc::new(report.index));

    // Dispatch to appropriate command handler
    match cli.command {
        Some(Commands::Recommend {
            movie,
            explain,
            json,
        }) => handle_recommend(&engine, &movie, explain, json)?,
        Some(Commands::Movie { movie }) => handle_movie(&engine, &movie),
        Some(Commands::Stats) => handle_stats(&engine),
        None => handle_interactive(&engine)?,
    }

    Ok(())
}

/// Prompt for a movie on stdin and recommend for it
fn handle_interactive(engine: &RecommendationEngine) -> Result<()> {
    print!("Enter a movie name for recommendations: ");
    io::stdout().flush().context("Failed to write prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read movie name")?;

    match first_token(&line) {
        Some(movie) => handle_recommend(engine, movie, false, false),
        None => {
            println!("{}", "No movie name entered.".yellow());
            Ok(())
        }
    }
}

/// Movie ids never contain whitespace, so only the first word counts
fn first_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

/// Handle the 'recommend' command
fn handle_recommend(
    engine: &RecommendationEngine,
    movie: &str,
    explain: bool,
    json: bool,
) -> Result<()> {
    let recommendations = match engine.recommend(movie) {
        Ok(recommendations) => recommendations,
        Err(RecommendError::NotFound(_)) => {
            println!("{}", format!("Movie not found in the graph: {movie}").red());
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to compute recommendations"),
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&recommendations)
                .context("Failed to serialize recommendations")?
        );
    } else {
        print_recommendations(movie, &recommendations, explain);
    }
    Ok(())
}

/// Handle the 'movie' command
fn handle_movie(engine: &RecommendationEngine, movie: &str) {
    let index = engine.data_index();
    let attributes = index.attributes().attributes_of(movie);
    let neighbors = index.graph().neighbors_of(movie);

    if attributes.is_none() && neighbors.is_empty() {
        println!("{}", format!("Movie {movie} not found").red());
        return;
    }

    println!("{}", format!("Movie: {movie}").bold().blue());
    match attributes {
        Some(attrs) => {
            println!("{}Genre: {}", "• ".green(), attrs.genre);
            println!("{}Director: {}", "• ".green(), attrs.director);
            println!("{}Year: {}", "• ".green(), attrs.year);
        }
        None => println!("{}No movie data", "• ".yellow()),
    }

    println!("{}Connected to {} movies:", "• ".cyan(), neighbors.len());
    for neighbor in neighbors {
        println!("  - {neighbor}");
    }
}

/// Handle the 'stats' command
fn handle_stats(engine: &RecommendationEngine) {
    let (movies, edges, records) = engine.data_index().counts();
    println!("{}", "Loaded data:".bold().blue());
    println!("{}Movies in graph: {}", "• ".green(), movies);
    println!("{}Edges: {}", "• ".green(), edges);
    println!("{}Movie records: {}", "• ".green(), records);
}

/// Helper function to format and print recommendations
fn print_recommendations(seed: &str, recommendations: &[Recommendation], explain: bool) {
    println!("{}", format!("Recommendations for {seed}:").bold().blue());

    if recommendations.is_empty() {
        println!("  (no recommendations: no connected movies with movie data)");
        return;
    }

    for (i, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} (Similarity: {}%)",
            (i + 1).to_string().green(),
            rec.movie_id,
            rec.similarity_percent()
        );
        if explain {
            let matched = rec.matched.matched_names();
            let matched = if matched.is_empty() {
                "nothing".to_string()
            } else {
                matched.join(", ")
            };
            println!("   Matched: {}; {} hop(s) away", matched, rec.hops);
        }
    }
}
