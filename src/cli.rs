//! One-shot subcommands. The interactive UI is the default when no
//! subcommand is given.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use crate::catalog::{CastMember, Movie, MovieDetail};
use crate::context::AppContext;
use crate::store::{PageState, SearchState};

#[derive(Parser, Debug)]
#[command(name = "cinedex", version, about = "Browse popular movies, search the catalog, keep favorites")]
pub struct Cli {
    /// Config file to use instead of the platform default
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List popular movies
    Popular {
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },
    /// Search movies by title
    Search {
        query: String,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },
    /// Show details and top cast for one movie
    Show { id: i64 },
    /// Manage the favorites list
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommand,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum FavoritesCommand {
    /// Print saved favorites, newest first
    List,
    /// Fetch a movie and add it to favorites
    Add { id: i64 },
    /// Remove a movie from favorites
    Remove { id: i64 },
    /// Remove every favorite
    Clear,
}

/// Run `command` to completion and print its output to stdout.
pub async fn run(command: Command, ctx: &AppContext) -> Result<()> {
    let output = execute(command, ctx).await?;
    print!("{}", output);
    Ok(())
}

async fn execute(command: Command, ctx: &AppContext) -> Result<String> {
    let stores = &ctx.stores;
    match command {
        Command::Popular { page } => {
            let movies = &stores.movies;
            movies.fetch_first_page().await;
            while movies.state().page < page && movies.state().has_more {
                let before = movies.state().page;
                movies.fetch_next_page().await;
                if movies.state().error.is_some() || movies.state().page == before {
                    break;
                }
            }
            let state = movies.state();
            if let Some(error) = &state.error {
                bail!("{}", error);
            }
            Ok(format_page("Popular movies", &state, true))
        }
        Command::Search { query, page } => {
            stores.search.set_query(query.clone());
            stores.search.search(&query, page).await;
            let state = stores.search.state();
            if let Some(error) = &state.results.error {
                bail!("{}", error);
            }
            Ok(format_search(&state))
        }
        Command::Show { id } => {
            stores.favorites.load().await;
            stores.detail.fetch_details(id).await;
            let state = stores.detail.state();
            match (state.movie, state.error) {
                (_, Some(error)) => bail!("{}", error),
                (Some(movie), None) => Ok(format_detail(&movie, &state.cast, ctx)),
                (None, None) => bail!("{}", crate::catalog::GatewayError::Unexpected),
            }
        }
        Command::Favorites { command } => run_favorites(command, ctx).await,
    }
}

async fn run_favorites(command: FavoritesCommand, ctx: &AppContext) -> Result<String> {
    let favorites = &ctx.stores.favorites;
    favorites.load().await;

    match command {
        FavoritesCommand::List => Ok(format_favorites(&favorites.favorites())),
        FavoritesCommand::Add { id } => {
            if favorites.is_favorite(id) {
                return Ok(format!("Movie {} is already a favorite\n", id));
            }
            let detail = &ctx.stores.detail;
            detail.fetch_details(id).await;
            let state = detail.state();
            if let Some(error) = state.error {
                bail!("{}", error);
            }
            let Some(movie) = state.movie else {
                bail!("{}", crate::catalog::GatewayError::Unexpected);
            };
            let title = movie.movie.title.clone();
            if !favorites.add(movie.summary()).await {
                bail!("Failed to save favorites");
            }
            Ok(format!("Added \"{}\" to favorites\n", title))
        }
        FavoritesCommand::Remove { id } => {
            if !favorites.is_favorite(id) {
                return Ok(format!("Movie {} is not a favorite\n", id));
            }
            if !favorites.remove(id).await {
                bail!("Failed to save favorites");
            }
            Ok(format!("Removed movie {} from favorites\n", id))
        }
        FavoritesCommand::Clear => {
            if !favorites.clear().await {
                bail!("Failed to clear favorites");
            }
            Ok("Cleared favorites\n".to_string())
        }
    }
}

/// `  12345  Title (2024)  ★ 7.8`
pub fn format_movie_line(movie: &Movie) -> String {
    let year = release_year(&movie.release_date);
    let mut line = format!("{:>8}  {}", movie.id, movie.title);
    if let Some(year) = year {
        let _ = write!(line, " ({})", year);
    }
    let _ = write!(line, "  ★ {:.1}", movie.vote_average);
    line
}

pub fn release_year(date: &str) -> Option<&str> {
    date.get(..4).filter(|year| year.chars().all(|c| c.is_ascii_digit()))
}

/// `accumulated` lists hold every page up to `state.page`.
fn format_page(title: &str, state: &PageState, accumulated: bool) -> String {
    let mut out = if accumulated && state.page > 1 {
        format!("{} (pages 1-{} of {})\n", title, state.page, state.total_pages)
    } else {
        format!("{} (page {} of {})\n", title, state.page, state.total_pages)
    };
    if state.movies.is_empty() {
        out.push_str("No movies found.\n");
    }
    for movie in &state.movies {
        out.push_str(&format_movie_line(movie));
        out.push('\n');
    }
    out
}

fn format_search(state: &SearchState) -> String {
    if !state.has_searched {
        return "Enter a search term.\n".to_string();
    }
    format_page(
        &format!("Results for \"{}\"", state.query.trim()),
        &state.results,
        false,
    )
}

fn format_favorites(favorites: &[Movie]) -> String {
    if favorites.is_empty() {
        return "No favorites yet.\n".to_string();
    }
    let mut out = format!("Favorites ({})\n", favorites.len());
    for movie in favorites {
        out.push_str(&format_movie_line(movie));
        out.push('\n');
    }
    out
}

fn format_detail(movie: &MovieDetail, cast: &[CastMember], ctx: &AppContext) -> String {
    let summary = &movie.movie;
    let mut out = String::new();
    let _ = writeln!(out, "{}", format_movie_line(summary).trim_start());
    if !movie.tagline.is_empty() {
        let _ = writeln!(out, "\"{}\"", movie.tagline);
    }
    let genres: Vec<&str> = movie.genres.iter().map(|g| g.name.as_str()).collect();
    if !genres.is_empty() {
        let _ = writeln!(out, "Genres: {}", genres.join(", "));
    }
    if let Some(runtime) = movie.runtime.filter(|minutes| *minutes > 0) {
        let _ = writeln!(out, "Runtime: {}h {}m", runtime / 60, runtime % 60);
    }
    if !movie.status.is_empty() {
        let _ = writeln!(out, "Status: {}", movie.status);
    }
    let _ = writeln!(out, "Votes: {}", summary.vote_count);
    if let Some(poster) = ctx.images.poster_url(summary.poster_path.as_deref()) {
        let _ = writeln!(out, "Poster: {}", poster);
    }
    if !summary.overview.is_empty() {
        let _ = writeln!(out, "\n{}", summary.overview);
    }
    if !cast.is_empty() {
        let _ = writeln!(out, "\nCast:");
        for member in cast {
            if member.character.is_empty() {
                let _ = writeln!(out, "  {}", member.name);
            } else {
                let _ = writeln!(out, "  {} as {}", member.name, member.character);
            }
            if let Some(photo) = ctx.images.profile_url(member.profile_path.as_deref()) {
                let _ = writeln!(out, "    {}", photo);
            }
        }
    }
    if ctx.stores.favorites.is_favorite(summary.id) {
        let _ = writeln!(out, "\n★ In your favorites");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, title: &str, date: &str, vote: f64) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            poster_path: None,
            backdrop_path: None,
            overview: String::new(),
            release_date: date.to_string(),
            vote_average: vote,
            vote_count: 0,
            popularity: 0.0,
            genre_ids: Vec::new(),
        }
    }

    #[test]
    fn parses_popular_with_page() {
        let cli = Cli::try_parse_from(["cinedex", "popular", "--page", "3"]).unwrap();
        assert_eq!(cli.command, Some(Command::Popular { page: 3 }));
    }

    #[test]
    fn rejects_page_zero() {
        assert!(Cli::try_parse_from(["cinedex", "popular", "--page", "0"]).is_err());
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["cinedex"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn config_flag_is_global() {
        let cli =
            Cli::try_parse_from(["cinedex", "favorites", "list", "--config", "/tmp/c.toml"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(
            cli.command,
            Some(Command::Favorites {
                command: FavoritesCommand::List
            })
        );
    }

    #[test]
    fn movie_line_includes_year_and_rating() {
        let line = format_movie_line(&movie(550, "Fight Club", "1999-10-15", 8.433));
        assert_eq!(line, "     550  Fight Club (1999)  ★ 8.4");
    }

    #[test]
    fn movie_line_without_release_date() {
        let line = format_movie_line(&movie(7, "Untitled", "", 0.0));
        assert_eq!(line, "       7  Untitled  ★ 0.0");
    }

    #[test]
    fn empty_favorites_message() {
        assert_eq!(format_favorites(&[]), "No favorites yet.\n");
    }
}
