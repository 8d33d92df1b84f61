//! cinedex command-line interface

mod format;

use clap::{Parser, Subcommand, ValueEnum};
use cinedex::data::{FavoriteEntry, FavoritesStore, MediaKind, Theme, ThemeStore};
use cinedex::error::Result;
use cinedex::providers::{
    CatalogProvider, MediaSummary, MovieDetails, SearchFilter, TmdbProvider, TrendingWindow,
    TvDetails,
};
use format::{format_money, format_rating, format_runtime, format_year};

#[derive(Parser)]
#[command(name = "cinedex", version, about = "Browse movies and TV shows from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search movies and TV shows
    Search {
        /// Text to search for
        query: String,
        /// Result page (1-based)
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Only return this media kind
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        /// Only return titles released in this year
        #[arg(long)]
        year: Option<u16>,
    },
    /// Show trending titles
    Trending {
        /// Trending window
        #[arg(long, value_enum, default_value_t = WindowArg::Day)]
        window: WindowArg,
    },
    /// Show full details for a movie
    Movie {
        /// TMDB movie id
        id: u64,
    },
    /// Show full details for a TV show
    Tv {
        /// TMDB TV show id
        id: u64,
    },
    /// Manage favorites
    #[command(subcommand)]
    Fav(FavCommand),
    /// Manage the color theme
    #[command(subcommand)]
    Theme(ThemeCommand),
}

#[derive(Subcommand)]
enum FavCommand {
    /// List saved favorites
    List,
    /// Add a title to favorites
    Add {
        #[arg(value_enum)]
        kind: KindArg,
        id: u64,
    },
    /// Remove a title from favorites
    Remove {
        #[arg(value_enum)]
        kind: KindArg,
        id: u64,
    },
    /// Add the title if absent, remove it otherwise
    Toggle {
        #[arg(value_enum)]
        kind: KindArg,
        id: u64,
    },
    /// Remove all favorites
    Clear,
}

#[derive(Subcommand)]
enum ThemeCommand {
    /// Print the current theme
    Show,
    /// Set the theme
    Set {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
    /// Flip between light and dark
    Toggle,
    /// Drop the saved preference and return to the ambient default
    Reset,
}

/// Media kinds addressable from the command line (people cannot be favorited)
#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Movie,
    Tv,
}

impl From<KindArg> for MediaKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Movie => MediaKind::Movie,
            KindArg::Tv => MediaKind::Tv,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum WindowArg {
    Day,
    Week,
}

impl From<WindowArg> for TrendingWindow {
    fn from(window: WindowArg) -> Self {
        match window {
            WindowArg::Day => TrendingWindow::Day,
            WindowArg::Week => TrendingWindow::Week,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Search {
            query,
            page,
            kind,
            year,
        } => {
            let provider = TmdbProvider::from_env()?;
            let filter = SearchFilter {
                kind: kind.map(Into::into),
                year,
            };
            let results = provider.search(&query, page, filter)?;
            print_listing(&results.results);
            if results.has_more() {
                println!("\npage {} of {}", results.page, results.total_pages);
            }
            Ok(())
        }
        Command::Trending { window } => {
            let provider = TmdbProvider::from_env()?;
            let results = provider.trending(window.into())?;
            print_listing(&results.results);
            Ok(())
        }
        Command::Movie { id } => {
            let provider = TmdbProvider::from_env()?;
            let details = provider.movie_details(id)?;
            let credits = provider.credits(MediaKind::Movie, id).unwrap_or_default();
            print_movie(&details, &credits);
            Ok(())
        }
        Command::Tv { id } => {
            let provider = TmdbProvider::from_env()?;
            let details = provider.tv_details(id)?;
            let credits = provider.credits(MediaKind::Tv, id).unwrap_or_default();
            print_tv(&details, &credits);
            Ok(())
        }
        Command::Fav(fav) => run_fav(fav),
        Command::Theme(theme) => run_theme(theme),
    }
}

fn run_fav(command: FavCommand) -> Result<()> {
    let mut store = FavoritesStore::open_default()?;
    store.load();

    match command {
        FavCommand::List => {
            if store.is_empty() {
                println!("no favorites saved");
            } else {
                for entry in store.entries() {
                    println!(
                        "{:>9}  {:<6} {} ({})  {}",
                        entry.id,
                        entry.media_type,
                        entry.display_title,
                        entry.year().unwrap_or("----"),
                        format_rating(entry.vote_average),
                    );
                }
                let stats = store.stats();
                println!(
                    "\n{} movie(s), {} tv show(s), avg rating {:.1}",
                    stats.movies, stats.tv_shows, stats.average_rating
                );
            }
            Ok(())
        }
        FavCommand::Add { kind, id } => {
            let kind = MediaKind::from(kind);
            if store.contains(id, kind) {
                println!("already a favorite");
                return Ok(());
            }
            let entry = fetch_entry(id, kind)?;
            let title = entry.display_title.clone();
            store.add(entry);
            println!("added {title}");
            Ok(())
        }
        FavCommand::Remove { kind, id } => {
            if store.remove(id, kind.into()) {
                println!("removed");
            } else {
                println!("not a favorite");
            }
            Ok(())
        }
        FavCommand::Toggle { kind, id } => {
            let kind = MediaKind::from(kind);
            if store.contains(id, kind) {
                store.remove(id, kind);
                println!("removed");
            } else {
                let entry = fetch_entry(id, kind)?;
                let title = entry.display_title.clone();
                store.add(entry);
                println!("added {title}");
            }
            Ok(())
        }
        FavCommand::Clear => {
            let count = store.len();
            store.clear();
            println!("removed {count} favorite(s)");
            Ok(())
        }
    }
}

fn run_theme(command: ThemeCommand) -> Result<()> {
    let mut store = ThemeStore::open_default()?;
    store.load();

    match command {
        ThemeCommand::Show => println!("{}", store.theme()),
        ThemeCommand::Set { theme } => {
            store.set(theme.into());
            println!("{}", store.theme());
        }
        ThemeCommand::Toggle => println!("{}", store.toggle()),
        ThemeCommand::Reset => {
            if store.reset()? {
                println!("saved preference dropped, now {}", store.theme());
            } else {
                println!("no saved preference, now {}", store.theme());
            }
        }
    }
    Ok(())
}

/// Fetch title details and convert into a favorite entry
fn fetch_entry(id: u64, kind: MediaKind) -> Result<FavoriteEntry> {
    let provider = TmdbProvider::from_env()?;
    match kind {
        MediaKind::Movie => Ok(provider.movie_details(id)?.to_favorite()),
        _ => Ok(provider.tv_details(id)?.to_favorite()),
    }
}

fn print_listing(results: &[MediaSummary]) {
    if results.is_empty() {
        println!("no results");
        return;
    }
    for item in results {
        let kind = item
            .media_type
            .map(|k| k.as_str())
            .unwrap_or("?");
        println!(
            "{:>9}  {:<6} {} ({})  {}",
            item.id,
            kind,
            item.display_title(),
            format_year(item.primary_date()),
            format_rating(item.vote_average),
        );
    }
}

fn print_movie(details: &MovieDetails, credits: &cinedex::providers::Credits) {
    println!("{} ({})", details.title, format_year(details.release_date.as_deref()));
    if !details.tagline.is_empty() {
        println!("{}", details.tagline);
    }
    println!();
    if !details.overview.is_empty() {
        println!("{}\n", details.overview);
    }
    println!("rating:   {} ({} votes)", format_rating(details.vote_average), details.vote_count);
    println!("runtime:  {}", format_runtime(details.runtime));
    println!("genres:   {}", join_genres(&details.genres));
    println!("status:   {}", details.status);
    println!("budget:   {}", format_money(details.budget));
    println!("revenue:  {}", format_money(details.revenue));
    print_credits(credits);
}

fn print_tv(details: &TvDetails, credits: &cinedex::providers::Credits) {
    println!("{} ({})", details.name, format_year(details.first_air_date.as_deref()));
    if !details.tagline.is_empty() {
        println!("{}", details.tagline);
    }
    println!();
    if !details.overview.is_empty() {
        println!("{}\n", details.overview);
    }
    println!("rating:   {} ({} votes)", format_rating(details.vote_average), details.vote_count);
    println!("seasons:  {} ({} episodes)", details.number_of_seasons, details.number_of_episodes);
    println!("genres:   {}", join_genres(&details.genres));
    println!(
        "status:   {}{}",
        details.status,
        if details.in_production { " (in production)" } else { "" }
    );
    print_credits(credits);

    let seasons: Vec<_> = details.regular_seasons().collect();
    if !seasons.is_empty() {
        println!();
        for season in seasons {
            println!(
                "  {:<12} {:>3} episode(s)  {}",
                season.name,
                season.episode_count,
                season.air_date.as_deref().unwrap_or(""),
            );
        }
    }
}

fn print_credits(credits: &cinedex::providers::Credits) {
    let directors = credits.directors();
    if !directors.is_empty() {
        let names: Vec<&str> = directors.iter().map(|d| d.name.as_str()).collect();
        println!("director: {}", names.join(", "));
    }
    let cast = credits.top_billed(5);
    if !cast.is_empty() {
        let names: Vec<&str> = cast.iter().map(|c| c.name.as_str()).collect();
        println!("starring: {}", names.join(", "));
    }
}

fn join_genres(genres: &[cinedex::providers::Genre]) -> String {
    if genres.is_empty() {
        return "N/A".to_string();
    }
    genres
        .iter()
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
