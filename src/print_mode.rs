//! # Print Mode
//!
//! Non-interactive `--print` output: one page of results as plain lines.

use std::io::Write;

use anyhow::{Context, Result};

use crate::repl::models::MAX_API_PAGE;
use crate::repl::services::TmdbClient;
use crate::repl::view_models::{EMPTY_QUERY_MESSAGE, NO_RESULTS_MESSAGE};

/// Fetch `page` of `query` and write one line per movie to `out`
///
/// Pages past the API limit are clamped to the last page it serves.
pub async fn print_movies<W: Write>(
    client: &TmdbClient,
    query: &str,
    page: u32,
    out: &mut W,
) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        writeln!(out, "{EMPTY_QUERY_MESSAGE}").context("Failed to write output")?;
        return Ok(());
    }

    let page = page.clamp(1, MAX_API_PAGE);
    let movies = client.fetch_movie_list(query, page).await?;

    if movies.is_empty() {
        writeln!(out, "{NO_RESULTS_MESSAGE}").context("Failed to write output")?;
        return Ok(());
    }

    for movie in movies {
        writeln!(
            out,
            "{:>8}  {}  ({})  {}",
            movie.id,
            movie.title,
            movie.release_year().unwrap_or("----"),
            movie.rating_label()
        )
        .context("Failed to write output")?;
    }
    Ok(())
}
