//! API integration tests driving the router in process

mod common;

use axum::http::{Method, StatusCode};
use common::{build_test_app, catalog_with_films, get_json, request, FailingStore};
use movies_api::{
    models::{Filmwork, FilmworkType, Genre, Person, PersonRole},
    repository::MemoryCatalog,
};

#[tokio::test]
async fn test_health_check() {
    let app = build_test_app(MemoryCatalog::new());
    let (status, body) = get_json(app, "/api/v1/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_first_page_of_120_films() {
    let app = build_test_app(catalog_with_films(120));
    let (status, body) = get_json(app, "/api/v1/films/?page=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 120);
    assert_eq!(body["total_pages"], 3);
    assert!(body["prev"].is_null());
    assert_eq!(body["next"], 2);
    assert_eq!(body["results"].as_array().unwrap().len(), 50);
    assert_eq!(body["results"][0]["title"], "Film 000");
    assert_eq!(body["results"][49]["title"], "Film 049");
}

#[tokio::test]
async fn test_last_page_of_120_films() {
    let app = build_test_app(catalog_with_films(120));
    let (status, body) = get_json(app, "/api/v1/films/?page=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prev"], 2);
    assert!(body["next"].is_null());
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 20);
    assert_eq!(results[0]["title"], "Film 100");
}

#[tokio::test]
async fn test_page_sizes_across_all_pages() {
    let app = build_test_app(catalog_with_films(100));

    for page in 1..=2 {
        let (status, body) = get_json(app.clone(), &format!("/api/v1/films/?page={}", page)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_pages"], 2);
        assert_eq!(body["results"].as_array().unwrap().len(), 50);
    }

    let (status, _) = get_json(app, "/api/v1/films/?page=3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_page_defaults_to_first() {
    let app = build_test_app(catalog_with_films(60));
    let (status, body) = get_json(app.clone(), "/api/v1/films/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["prev"].is_null());
    assert_eq!(body["next"], 2);

    let (status, _) = get_json(app, "/api/v1/films").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_invalid_page_is_client_error() {
    let app = build_test_app(catalog_with_films(10));

    for page in ["0", "-1", "abc", "1.5", ""] {
        let (status, body) = get_json(app.clone(), &format!("/api/v1/films/?page={}", page)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "page={:?}", page);
        assert_eq!(body["detail"], "Invalid page parameter.");
        assert_eq!(body.as_object().unwrap().len(), 1);
    }
}

#[tokio::test]
async fn test_page_beyond_last_is_error() {
    let app = build_test_app(catalog_with_films(120));
    let (status, body) = get_json(app, "/api/v1/films/?page=4").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Page not found.");
    assert!(body.get("results").is_none());
}

#[tokio::test]
async fn test_page_too_large_for_i64_is_not_found() {
    let app = build_test_app(catalog_with_films(3));

    for page in ["99999999999999999999", "9223372036854775808"] {
        let (status, body) = get_json(app.clone(), &format!("/api/v1/films/?page={}", page)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "page={:?}", page);
        assert_eq!(body["detail"], "Page not found.");
    }
}

#[tokio::test]
async fn test_empty_catalog_has_no_pages() {
    let app = build_test_app(MemoryCatalog::new());
    let (status, body) = get_json(app, "/api/v1/films/").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Page not found.");
}

#[tokio::test]
async fn test_result_item_shape_and_aggregation() {
    let mut catalog = MemoryCatalog::new();
    let mut film = Filmwork::new("Pulp Fiction", FilmworkType::Movie);
    film.description = Some("Crime stories".to_string());
    film.rating = Some(89.0);
    let film_id = catalog.insert_filmwork(film).unwrap();

    // Two genre rows whose names coincide
    let crime = catalog.insert_genre(Genre::new("Crime")).unwrap();
    let crime_again = catalog.insert_genre(Genre::new("Crime")).unwrap();
    let drama = catalog.insert_genre(Genre::new("Drama")).unwrap();
    catalog.link_genre(film_id, crime).unwrap();
    catalog.link_genre(film_id, crime_again).unwrap();
    catalog.link_genre(film_id, drama).unwrap();

    let qt = catalog.insert_person(Person::new("Quentin Tarantino")).unwrap();
    let uma = catalog.insert_person(Person::new("Uma Thurman")).unwrap();
    catalog.credit_person(film_id, qt, PersonRole::Actor).unwrap();
    catalog.credit_person(film_id, qt, PersonRole::Writer).unwrap();
    catalog.credit_person(film_id, qt, PersonRole::Director).unwrap();
    catalog.credit_person(film_id, uma, PersonRole::Actor).unwrap();

    // A film with no associations at all
    catalog
        .insert_filmwork(Filmwork::new("Quiet Film", FilmworkType::TvShow))
        .unwrap();

    let app = build_test_app(catalog);
    let (status, body) = get_json(app, "/api/v1/films/?page=1").await;
    assert_eq!(status, StatusCode::OK);

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);

    let pulp = &results[0];
    let mut keys: Vec<_> = pulp.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        [
            "actors",
            "creation_date",
            "description",
            "directors",
            "genres",
            "id",
            "rating",
            "title",
            "type",
            "writers"
        ]
    );
    assert_eq!(pulp["id"], film_id.to_string());
    assert_eq!(pulp["type"], "movie");
    assert_eq!(pulp["rating"], 89.0);
    assert_eq!(pulp["genres"], serde_json::json!(["Crime", "Drama"]));
    assert_eq!(
        pulp["actors"],
        serde_json::json!(["Quentin Tarantino", "Uma Thurman"])
    );
    assert_eq!(pulp["writers"], serde_json::json!(["Quentin Tarantino"]));
    assert_eq!(pulp["directors"], serde_json::json!(["Quentin Tarantino"]));

    let quiet = &results[1];
    assert_eq!(quiet["type"], "tv_show");
    for key in ["genres", "actors", "directors", "writers"] {
        assert_eq!(quiet[key], serde_json::json!([]), "{} must be empty", key);
    }
    assert!(quiet["rating"].is_null());
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let app = build_test_app(catalog_with_films(75));

    let (first_status, first) = request(app.clone(), Method::GET, "/api/v1/films/?page=2").await;
    let (second_status, second) = request(app, Method::GET, "/api/v1/films/?page=2").await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_get_film_by_id() {
    let mut catalog = MemoryCatalog::new();
    let id = catalog
        .insert_filmwork(Filmwork::new("Solaris", FilmworkType::Movie))
        .unwrap();
    let person = catalog.insert_person(Person::new("Andrei Tarkovsky")).unwrap();
    catalog.credit_person(id, person, PersonRole::Director).unwrap();

    let app = build_test_app(catalog);
    let (status, body) = get_json(app.clone(), &format!("/api/v1/films/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Solaris");
    assert_eq!(body["directors"], serde_json::json!(["Andrei Tarkovsky"]));
    assert!(body.get("results").is_none());

    let (status, body) = get_json(
        app.clone(),
        "/api/v1/films/00000000-0000-0000-0000-000000000000",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Film not found.");

    let (status, body) = get_json(app, "/api/v1/films/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Invalid film id.");
}

#[tokio::test]
async fn test_only_get_is_accepted() {
    let app = build_test_app(catalog_with_films(1));

    let (status, _) = request(app.clone(), Method::POST, "/api/v1/films/").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = request(app, Method::DELETE, "/api/v1/films/").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_store_failure_is_server_error() {
    let app = build_test_app(FailingStore);

    let (status, body) = get_json(app.clone(), "/api/v1/films/?page=1").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Database error");

    let (status, _) = get_json(app, "/api/v1/ready").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_invalid_page_checked_before_store() {
    // The failing store would turn any query into a 500
    let app = build_test_app(FailingStore);
    let (status, body) = get_json(app, "/api/v1/films/?page=abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Invalid page parameter.");
}
