//! moviedb - query TheMovieDB from the command line.

/// Application configuration (TOML).
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use moviedb_api::model::{Configuration, MovieBasic, MovieInfo, PersonInfo, TvBasic, TvInfo};
use moviedb_api::{ResultList, SearchMovieParams, SearchTvParams, TmdbClient};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;
use url::Url;

use crate::config::{API_KEY_ENV, AppConfig};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Get movie details.
    Movie(MovieArgs),
    /// Get TV series details.
    Tv(TvArgs),
    /// Get person details.
    Person(PersonArgs),
    /// Search for movies.
    SearchMovie(SearchMovieArgs),
    /// Search for TV series.
    SearchTv(SearchTvArgs),
    /// Show the API configuration (image base URLs and sizes).
    Configuration,
    /// Build a full image URL from a file path and size.
    ImageUrl(ImageUrlArgs),
}

/// Arguments for the `movie` subcommand.
#[derive(clap::Args)]
struct MovieArgs {
    /// TMDB movie ID.
    #[arg(long, required = true)]
    id: u64,
    /// Response language (default: config `[tmdb] language`).
    #[arg(long)]
    language: Option<String>,
    /// Comma-separated sub-resources to embed (e.g. "credits,images").
    #[arg(long, value_delimiter = ',')]
    append: Vec<String>,
}

/// Arguments for the `tv` subcommand.
#[derive(clap::Args)]
struct TvArgs {
    /// TMDB series ID.
    #[arg(long, required = true)]
    id: u64,
    /// Response language (default: config `[tmdb] language`).
    #[arg(long)]
    language: Option<String>,
}

/// Arguments for the `person` subcommand.
#[derive(clap::Args)]
struct PersonArgs {
    /// TMDB person ID.
    #[arg(long, required = true)]
    id: u64,
    /// Response language (default: config `[tmdb] language`).
    #[arg(long)]
    language: Option<String>,
}

/// Arguments for the `search-movie` subcommand.
#[derive(clap::Args)]
struct SearchMovieArgs {
    /// Search query (e.g. "The Matrix").
    #[arg(long, required = true)]
    query: String,
    /// Filter by year.
    #[arg(long)]
    year: Option<u32>,
    /// Result page.
    #[arg(long)]
    page: Option<u32>,
}

/// Arguments for the `search-tv` subcommand.
#[derive(clap::Args)]
struct SearchTvArgs {
    /// Search query (e.g. "Game of Thrones").
    #[arg(long, required = true)]
    query: String,
    /// Filter by first air year.
    #[arg(long)]
    year: Option<u32>,
}

/// Arguments for the `image-url` subcommand.
#[derive(clap::Args)]
struct ImageUrlArgs {
    /// Image file path as returned by the API (e.g. "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg").
    #[arg(long, required = true)]
    path: String,
    /// Image size (e.g. "w500", "original").
    #[arg(long, required = true)]
    size: String,
}

/// Client plus the configured default language.
struct Tmdb {
    client: TmdbClient,
    language: Option<String>,
}

impl Tmdb {
    /// `explicit` when given, otherwise the configured language.
    fn language<'a>(&'a self, explicit: Option<&'a str>) -> Option<&'a str> {
        explicit.or(self.language.as_deref())
    }
}

/// Builds a `TmdbClient` from `config.toml` and the `TMDB_API_KEY` environment variable.
///
/// # Errors
///
/// Returns an error if the config cannot be read, no API key is configured,
/// or the client fails to build.
#[instrument(skip_all)]
fn build_tmdb(dir: Option<&PathBuf>) -> Result<Tmdb> {
    let path = AppConfig::path(dir.map(PathBuf::as_path), std::env::var_os("HOME"))?;
    let config = AppConfig::load(&path)?;
    let api_key = config
        .api_key(std::env::var(API_KEY_ENV).ok())
        .with_context(|| {
            format!(
                "no TMDB API key configured: set {API_KEY_ENV} or [tmdb] api_key in {}",
                path.display()
            )
        })?;

    let mut builder = TmdbClient::builder().api_key(api_key).user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(base_url) = config.tmdb.base_url.as_deref() {
        let url = Url::parse(base_url)
            .with_context(|| format!("invalid [tmdb] base_url: {base_url}"))?;
        builder = builder.base_url(url);
    }
    let client = builder.build().context("failed to build TMDB client")?;

    Ok(Tmdb {
        client,
        language: config.tmdb.language,
    })
}

/// Runs the `movie` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all, fields(id = args.id))]
async fn run_movie(args: &MovieArgs, dir: Option<&PathBuf>) -> Result<()> {
    let tmdb = build_tmdb(dir)?;
    let append: Vec<&str> = args.append.iter().map(String::as_str).collect();

    let movie = tmdb
        .client
        .movie_info(args.id, tmdb.language(args.language.as_deref()), &append)
        .await
        .context("TMDB movie request failed")?;

    log_movie(&movie);
    Ok(())
}

/// Runs the `tv` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all, fields(id = args.id))]
async fn run_tv(args: &TvArgs, dir: Option<&PathBuf>) -> Result<()> {
    let tmdb = build_tmdb(dir)?;

    let tv = tmdb
        .client
        .tv_info(args.id, tmdb.language(args.language.as_deref()), &[])
        .await
        .context("TMDB tv request failed")?;

    log_tv(&tv);
    Ok(())
}

/// Runs the `person` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all, fields(id = args.id))]
async fn run_person(args: &PersonArgs, dir: Option<&PathBuf>) -> Result<()> {
    let tmdb = build_tmdb(dir)?;

    let person = tmdb
        .client
        .person_info(args.id, tmdb.language(args.language.as_deref()), &[])
        .await
        .context("TMDB person request failed")?;

    log_person(&person);
    Ok(())
}

/// Runs the `search-movie` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_search_movie(args: &SearchMovieArgs, dir: Option<&PathBuf>) -> Result<()> {
    let tmdb = build_tmdb(dir)?;

    let mut params = SearchMovieParams::new(&args.query);
    if let Some(language) = tmdb.language(None) {
        params = params.language(language);
    }
    if let Some(year) = args.year {
        params = params.year(year);
    }
    if let Some(page) = args.page {
        params = params.page(page);
    }

    let results = tmdb
        .client
        .search_movie(&params)
        .await
        .context("TMDB search/movie request failed")?;

    log_movie_results(&results);
    Ok(())
}

/// Runs the `search-tv` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_search_tv(args: &SearchTvArgs, dir: Option<&PathBuf>) -> Result<()> {
    let tmdb = build_tmdb(dir)?;

    let mut params = SearchTvParams::new(&args.query);
    if let Some(language) = tmdb.language(None) {
        params = params.language(language);
    }
    if let Some(year) = args.year {
        params = params.first_air_date_year(year);
    }

    let results = tmdb
        .client
        .search_tv(&params)
        .await
        .context("TMDB search/tv request failed")?;

    log_tv_results(&results);
    Ok(())
}

/// Runs the `configuration` subcommand.
///
/// # Errors
///
/// Returns an error if the TMDB client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_configuration(dir: Option<&PathBuf>) -> Result<()> {
    let tmdb = build_tmdb(dir)?;

    let configuration = tmdb
        .client
        .configuration()
        .await
        .context("TMDB configuration request failed")?;

    log_configuration(&configuration);
    Ok(())
}

/// Runs the `image-url` subcommand.
///
/// # Errors
///
/// Returns an error if the configuration cannot be fetched or the size is unknown.
#[instrument(skip_all)]
async fn run_image_url(args: &ImageUrlArgs, dir: Option<&PathBuf>) -> Result<()> {
    let tmdb = build_tmdb(dir)?;

    let url = tmdb
        .client
        .create_image_url(&args.path, &args.size)
        .await
        .with_context(|| format!("failed to build image URL for size '{}'", args.size))?;

    tracing::info!("{url}");
    Ok(())
}

/// Logs movie details.
fn log_movie(movie: &MovieInfo) {
    tracing::info!("ID: {}", movie.id);
    tracing::info!("Title: {}", movie.title);
    tracing::info!("Original Title: {}", movie.original_title);
    tracing::info!(
        "Release Date: {}",
        movie.release_date.as_deref().unwrap_or("-")
    );
    tracing::info!(
        "Runtime: {}",
        movie
            .runtime
            .map_or_else(|| String::from("-"), |r| format!("{r}min"))
    );
    tracing::info!("IMDb: {}", movie.imdb_id.as_deref().unwrap_or("-"));
    let genres: Vec<&str> = movie.genres.iter().map(|g| g.name.as_str()).collect();
    tracing::info!("Genres: {}", genres.join(", "));
    if let Some(collection) = &movie.belongs_to_collection {
        tracing::info!("Collection: {} ({})", collection.name, collection.id);
    }
    if let Some(credits) = &movie.credits {
        tracing::info!("---");
        for cast in credits.cast.iter().take(10) {
            tracing::info!("  {} as {}", cast.name, cast.character);
        }
    }
}

/// Logs series details with its seasons.
fn log_tv(tv: &TvInfo) {
    tracing::info!("ID: {}", tv.id);
    tracing::info!("Name: {}", tv.name);
    tracing::info!("Original Name: {}", tv.original_name);
    tracing::info!(
        "First Air Date: {}",
        tv.first_air_date.as_deref().unwrap_or("-")
    );
    tracing::info!("Status: {}", tv.status.as_deref().unwrap_or("-"));
    tracing::info!("Seasons: {}", tv.number_of_seasons);
    tracing::info!("Episodes: {}", tv.number_of_episodes);
    tracing::info!("---");
    for season in &tv.seasons {
        tracing::info!(
            "  Season {}: {} episodes (air_date: {})",
            season.season_number,
            season.episode_count,
            season.air_date.as_deref().unwrap_or("-"),
        );
    }
}

/// Logs person details.
fn log_person(person: &PersonInfo) {
    tracing::info!("ID: {}", person.id);
    tracing::info!("Name: {}", person.name);
    tracing::info!("Known For: {}", person.known_for_department);
    tracing::info!("Birthday: {}", person.birthday.as_deref().unwrap_or("-"));
    tracing::info!("Deathday: {}", person.deathday.as_deref().unwrap_or("-"));
    tracing::info!(
        "Place of Birth: {}",
        person.place_of_birth.as_deref().unwrap_or("-")
    );
}

/// Logs one page of movie results.
fn log_movie_results(results: &ResultList<MovieBasic>) {
    tracing::info!(
        "Total results: {} (page {}/{})",
        results.total_results,
        results.page,
        results.total_pages
    );
    tracing::info!("ID\tTitle\t\t\tOrigLang\tReleaseDate");
    for movie in &results.results {
        tracing::info!(
            "{}\t{}\t{}\t\t{}",
            movie.id,
            movie.title,
            movie.original_language,
            movie.release_date.as_deref().unwrap_or("-"),
        );
    }
}

/// Logs one page of series results.
fn log_tv_results(results: &ResultList<TvBasic>) {
    tracing::info!(
        "Total results: {} (page {}/{})",
        results.total_results,
        results.page,
        results.total_pages
    );
    tracing::info!("ID\tName\t\t\tOrigLang\tCountry\t\tFirstAirDate");
    for tv in &results.results {
        tracing::info!(
            "{}\t{}\t{}\t\t{}\t\t{}",
            tv.id,
            tv.name,
            tv.original_language,
            tv.origin_country.join(","),
            tv.first_air_date.as_deref().unwrap_or("-"),
        );
    }
}

/// Logs image base URLs and sizes.
fn log_configuration(configuration: &Configuration) {
    let images = &configuration.images;
    tracing::info!("Base URL: {}", images.base_url);
    tracing::info!("Secure Base URL: {}", images.secure_base_url);
    tracing::info!("Backdrop Sizes: {}", images.backdrop_sizes.join(","));
    tracing::info!("Logo Sizes: {}", images.logo_sizes.join(","));
    tracing::info!("Poster Sizes: {}", images.poster_sizes.join(","));
    tracing::info!("Profile Sizes: {}", images.profile_sizes.join(","));
    tracing::info!("Still Sizes: {}", images.still_sizes.join(","));
    tracing::info!("Change Keys: {}", configuration.change_keys.len());
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    let dir = cli.dir.as_ref();
    match cli.command {
        Commands::Movie(args) => run_movie(&args, dir).await,
        Commands::Tv(args) => run_tv(&args, dir).await,
        Commands::Person(args) => run_person(&args, dir).await,
        Commands::SearchMovie(args) => run_search_movie(&args, dir).await,
        Commands::SearchTv(args) => run_search_tv(&args, dir).await,
        Commands::Configuration => run_configuration(dir).await,
        Commands::ImageUrl(args) => run_image_url(&args, dir).await,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use tracing::subscriber::with_default;
    use tracing_mock::{expect, subscriber};

    use super::*;

    const MOVIE: &str = include_str!("../../../fixtures/tmdb/movie_603.json");
    const SEARCH: &str = include_str!("../../../fixtures/tmdb/search_movie_matrix.json");

    #[test]
    fn test_log_movie_header_lines() {
        // Arrange
        let movie: MovieInfo = serde_json::from_str(MOVIE).unwrap();
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg("ID: 603")))
            .event(expect::event().with_fields(expect::msg("Title: The Matrix")))
            .event(expect::event().with_fields(expect::msg("Original Title: The Matrix")))
            .event(expect::event().with_fields(expect::msg("Release Date: 1999-03-31")))
            .event(expect::event().with_fields(expect::msg("Runtime: 136min")))
            .event(expect::event().with_fields(expect::msg("IMDb: tt0133093")))
            .event(expect::event().with_fields(expect::msg("Genres: Action, Science Fiction")))
            .event(
                expect::event()
                    .with_fields(expect::msg("Collection: The Matrix Collection (2344)")),
            )
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || {
            log_movie(&movie);
        });

        // Assert
        handle.assert_finished();
    }

    #[test]
    fn test_log_movie_results_summary() {
        // Arrange
        let results: ResultList<MovieBasic> = serde_json::from_str(SEARCH).unwrap();
        let (subscriber, handle) = subscriber::mock()
            .event(
                expect::event()
                    .at_level(tracing::Level::INFO)
                    .with_fields(expect::msg("Total results: 100 (page 1/5)")),
            )
            .run_with_handle();

        // Act
        with_default(subscriber, || {
            log_movie_results(&results);
        });

        // Assert
        handle.assert_finished();
    }

    #[test]
    fn test_explicit_language_wins() {
        // Arrange
        let tmdb = Tmdb {
            client: TmdbClient::builder().api_key("KEY").build().unwrap(),
            language: Some(String::from("ja-JP")),
        };

        // Act & Assert
        assert_eq!(tmdb.language(Some("en-US")), Some("en-US"));
        assert_eq!(tmdb.language(None), Some("ja-JP"));
    }

    #[test]
    fn test_build_tmdb_reads_config_dir() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[tmdb]\napi_key = \"KEY\"\nlanguage = \"de-DE\"\nbase_url = \"http://127.0.0.1:9/3/\"\n",
        )
        .unwrap();

        // Act
        let tmdb = build_tmdb(Some(&dir.path().to_path_buf())).unwrap();

        // Assert
        assert_eq!(tmdb.language.as_deref(), Some("de-DE"));
        assert_eq!(tmdb.client.base_url().as_str(), "http://127.0.0.1:9/3/");
    }
}
