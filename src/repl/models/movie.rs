//! # Movie Model
//!
//! API payload types for the movie search endpoint. Fields are passed
//! through as the server sends them; nothing here mutates them.

use crate::config::POSTER_BASE_URL;
use serde::Deserialize;

/// A single movie entry from a search result page
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
}

impl Movie {
    /// Year part of the release date, if the date is present
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .get(..4)
            .filter(|year| year.chars().all(|c| c.is_ascii_digit()))
    }

    /// Full poster image URL
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{POSTER_BASE_URL}{path}"))
    }

    /// Rating formatted for display, e.g. `7.3/10`
    pub fn rating_label(&self) -> String {
        format!("{:.1}/10", self.vote_average)
    }
}

/// One page of search results
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieSearchResponse {
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}

impl MovieSearchResponse {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "page": 1,
        "results": [
            {
                "adult": false,
                "backdrop_path": "/frDS8A5vIP927KYAxTVVKRIbqZw.jpg",
                "id": 268,
                "original_title": "Batman",
                "overview": "Batman must face his most ruthless nemesis.",
                "poster_path": "/cij4dd21v2Rk2YtUQbV5kW69WB2.jpg",
                "release_date": "1989-06-21",
                "title": "Batman",
                "vote_average": 7.231
            },
            {
                "id": 272,
                "title": "Batman Begins",
                "overview": "Driven by tragedy, billionaire Bruce Wayne dedicates his life.",
                "poster_path": null,
                "release_date": "",
                "vote_average": 7.7
            }
        ],
        "total_pages": 3,
        "total_results": 54
    }"#;

    #[test]
    fn response_should_keep_api_fields() {
        let response: MovieSearchResponse = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(response.page, 1);
        assert_eq!(response.total_pages, 3);
        assert_eq!(response.total_results, 54);
        assert_eq!(response.len(), 2);

        let batman = &response.results[0];
        assert_eq!(batman.id, 268);
        assert_eq!(batman.title, "Batman");
        assert_eq!(
            batman.poster_path.as_deref(),
            Some("/cij4dd21v2Rk2YtUQbV5kW69WB2.jpg")
        );
        assert_eq!(batman.release_date, "1989-06-21");
        assert_eq!(batman.vote_average, 7.231);
    }

    #[test]
    fn empty_response_should_parse() {
        let response: MovieSearchResponse =
            serde_json::from_str(r#"{"results": [], "total_pages": 0}"#).unwrap();
        assert!(response.is_empty());
        assert_eq!(response.total_pages, 0);
        assert_eq!(response.page, 1);
    }

    #[test]
    fn release_year_should_handle_missing_date() {
        let response: MovieSearchResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.results[0].release_year(), Some("1989"));
        assert_eq!(response.results[1].release_year(), None);
    }

    #[test]
    fn poster_url_should_prefix_image_base() {
        let response: MovieSearchResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(
            response.results[0].poster_url().as_deref(),
            Some("https://image.tmdb.org/t/p/w500/cij4dd21v2Rk2YtUQbV5kW69WB2.jpg")
        );
        assert_eq!(response.results[1].poster_url(), None);
    }

    #[test]
    fn rating_label_should_use_one_decimal() {
        let response: MovieSearchResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.results[0].rating_label(), "7.2/10");
    }
}
