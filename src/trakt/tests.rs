//! Unit tests for the Trakt fetch and transform stages

use super::http::{fetch_list, parse_ratings};
use super::transform::{watch_entry, UNKNOWN_TITLE};
use super::types::{TraktKind, WatchEntry, WatchSnapshot, WatchStatus};
use super::*;
use crate::config::{Config, Credentials, Endpoints};
use crate::core::http::trakt_headers;
use reqwest::Client;
use serde_json::{json, Value};
use std::collections::HashMap;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn movie(trakt: u64, tmdb: u64, title: &str, slug: &str) -> Value {
    json!({
        "plays": 1,
        "movie": {
            "title": title,
            "year": 1999,
            "ids": { "trakt": trakt, "slug": slug, "tmdb": tmdb }
        }
    })
}

fn mock_config(server: &MockServer, tmdb_api_key: Option<&str>) -> Config {
    Config::new(Credentials {
        trakt_client_id: Some("client".to_string()),
        tmdb_api_key: tmdb_api_key.map(str::to_string),
    })
    .with_username("tester")
    .with_endpoints(Endpoints {
        anilist: server.uri(),
        trakt: server.uri(),
        tmdb: format!("{}/tmdb", server.uri()),
        tmdb_images: "https://img".to_string(),
    })
}

#[cfg(test)]
mod transform_tests {
    use super::*;

    #[test]
    fn test_entry_joins_rating_and_poster() {
        let snapshot = WatchSnapshot {
            ratings: HashMap::from([(10, 9)]),
            posters: HashMap::from([(603, "https://img/matrix.jpg".to_string())]),
            ..Default::default()
        };

        let e = watch_entry(&movie(10, 603, "The Matrix", "the-matrix-1999"), TraktKind::Movies, &snapshot);

        assert_eq!(
            e,
            WatchEntry {
                id: Some(10),
                title: "The Matrix".to_string(),
                year: Some(1999),
                poster_image: "https://img/matrix.jpg".to_string(),
                rating: 9,
                url: "https://trakt.tv/movies/the-matrix-1999".to_string(),
            }
        );
    }

    #[test]
    fn test_bare_item_and_missing_fields() {
        let snapshot = WatchSnapshot::default();

        let bare = watch_entry(
            &json!({ "title": "Bare", "ids": { "trakt": 5, "slug": "bare" } }),
            TraktKind::Movies,
            &snapshot,
        );
        assert_eq!(bare.id, Some(5));
        assert_eq!(bare.title, "Bare");
        assert_eq!(bare.rating, 0);
        assert_eq!(bare.poster_image, "");

        let empty = watch_entry(&json!({}), TraktKind::Shows, &snapshot);
        assert_eq!(empty.id, None);
        assert_eq!(empty.title, UNKNOWN_TITLE);
        assert_eq!(empty.year, None);
        assert_eq!(empty.url, "https://trakt.tv/shows/");
    }

    #[test]
    fn test_shows_use_show_key() {
        let item = json!({ "show": { "title": "Dark", "year": 2017, "ids": { "trakt": 3, "slug": "dark" } } });
        let e = watch_entry(&item, TraktKind::Shows, &WatchSnapshot::default());

        assert_eq!(e.title, "Dark");
        assert_eq!(e.url, "https://trakt.tv/shows/dark");
    }

    #[test]
    fn test_transform_orders_and_sorts() {
        let snapshot = WatchSnapshot {
            ratings: HashMap::from([(1, 7), (2, 10), (3, 7)]),
            watched: vec![
                movie(1, 11, "heat", "heat"),
                movie(2, 12, "Alien", "alien"),
                movie(3, 13, "Brazil", "brazil"),
            ],
            watchlist: vec![movie(4, 14, "Zodiac", "zodiac")],
            ..Default::default()
        };

        let catalog = transform_watch_lists(&snapshot, "tester", TraktKind::Movies);

        assert_eq!(catalog.total_count(), 4);
        let watched = &catalog.categories()[0];
        assert_eq!(watched.status(), "watched");
        assert_eq!(watched.display_name(), "Watched");
        let titles: Vec<&str> = watched.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Alien", "Brazil", "heat"]);

        let watchlist = &catalog.categories()[1];
        assert_eq!(watchlist.display_name(), "Watchlist");
        assert_eq!(watchlist.order(), 1);
    }

    #[test]
    fn test_empty_list_is_omitted() {
        let snapshot = WatchSnapshot {
            watchlist: vec![movie(4, 14, "Zodiac", "zodiac")],
            ..Default::default()
        };

        let catalog = transform_watch_lists(&snapshot, "tester", TraktKind::Movies);
        assert_eq!(catalog.categories().len(), 1);
        assert_eq!(catalog.categories()[0].status(), "watchlist");
    }

    #[test]
    fn test_parse_ratings() {
        let v = json!([
            { "rating": 8, "movie": { "ids": { "trakt": 1 } } },
            { "rating": 6, "movie": { "ids": {} } },
            { "movie": { "ids": { "trakt": 2 } } },
            { "rating": 9, "show": { "ids": { "trakt": 3 } } }
        ]);

        let ratings = parse_ratings(&v, TraktKind::Movies);
        assert_eq!(ratings, HashMap::from([(1, 8), (2, 0)]));
        assert!(parse_ratings(&json!({ "error": "nope" }), TraktKind::Movies).is_empty());
    }
}

#[cfg(test)]
mod http_tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_list_sends_trakt_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/tester/watchlist/shows"))
            .and(query_param("extended", "full"))
            .and(header("trakt-api-version", "2"))
            .and(header("trakt-api-key", "client"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "show": { "title": "Dark" } }])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let items = fetch_list(
            &Client::new(),
            &mock_server.uri(),
            "tester",
            TraktKind::Shows,
            WatchStatus::Watchlist,
            &trakt_headers("client").unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_ratings_default_to_zero() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/tester/ratings/movies"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/tester/watched/movies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([movie(1, 11, "Heat", "heat")])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/tester/watchlist/movies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([movie(2, 12, "Alien", "alien")])))
            .mount(&mock_server)
            .await;

        let config = mock_config(&mock_server, None);
        let snapshot = fetch_watch_snapshot(&Client::new(), &config, "client", TraktKind::Movies)
            .await
            .unwrap();

        assert!(snapshot.ratings.is_empty());
        let catalog = transform_watch_lists(&snapshot, &config.username, TraktKind::Movies);
        assert_eq!(catalog.categories().len(), 2);
        for category in catalog.categories() {
            assert!(category.entries().iter().all(|e| e.rating == 0));
        }
    }

    #[tokio::test]
    async fn test_failed_list_is_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/tester/ratings/movies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "rating": 10, "movie": { "ids": { "trakt": 2 } } }
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/tester/watched/movies"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/tester/watchlist/movies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([movie(2, 12, "Alien", "alien")])))
            .mount(&mock_server)
            .await;

        let config = mock_config(&mock_server, None);
        let snapshot = fetch_watch_snapshot(&Client::new(), &config, "client", TraktKind::Movies)
            .await
            .unwrap();

        assert!(snapshot.watched.is_empty());
        assert_eq!(snapshot.watchlist.len(), 1);
        assert_eq!(snapshot.ratings.get(&2), Some(&10));
    }

    #[tokio::test]
    async fn test_invalid_client_id_is_error() {
        let mock_server = MockServer::start().await;
        let config = mock_config(&mock_server, None);

        let result =
            fetch_watch_snapshot(&Client::new(), &config, "bad\nid", TraktKind::Movies).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_resolve_posters_once_per_tmdb_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tmdb/movie/11"))
            .and(query_param("api_key", "tmdb-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "poster_path": "/heat.jpg" })))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/tmdb/movie/12"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;

        let snapshot = WatchSnapshot {
            watched: vec![movie(1, 11, "Heat", "heat"), movie(2, 12, "Alien", "alien")],
            watchlist: vec![movie(1, 11, "Heat", "heat")],
            ..Default::default()
        };

        let config = mock_config(&mock_server, Some("tmdb-key"));
        let posters = resolve_posters(&Client::new(), &config, TraktKind::Movies, &snapshot).await;

        assert_eq!(posters.get(&11).map(String::as_str), Some("https://img/heat.jpg"));
        assert_eq!(posters.get(&12).map(String::as_str), Some(""));
    }

    #[tokio::test]
    async fn test_resolve_posters_without_key_makes_no_requests() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let snapshot = WatchSnapshot {
            watched: vec![movie(1, 11, "Heat", "heat")],
            ..Default::default()
        };

        let config = mock_config(&mock_server, None);
        let posters = resolve_posters(&Client::new(), &config, TraktKind::Movies, &snapshot).await;
        assert!(posters.is_empty());
    }
}
