use axum::http::StatusCode;
use serde_json::json;

mod helpers;
use helpers::{delete, get, make_app, post_json};

#[tokio::test]
async fn stats_on_empty_store() {
    let (app, _tmp) = make_app();

    let (status, v) = get(&app, "/api/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["total"], 0);
    assert_eq!(v["average_rating"], 0.0);
    for rating in 1..=5 {
        assert_eq!(v["ratings_count"][rating.to_string()], 0);
    }
    assert!(v.get("latest_review").is_none());
}

#[tokio::test]
async fn stats_aggregates_ratings() {
    let (app, _tmp) = make_app();

    for (author, rating) in [("a", 5), ("b", 3), ("c", 5)] {
        post_json(
            &app,
            "/api/reviews",
            json!({"author": author, "rating": rating, "text": "review"}),
        )
        .await;
    }

    let (status, v) = get(&app, "/api/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["total"], 3);
    assert_eq!(v["average_rating"], 4.33);
    assert_eq!(v["ratings_count"]["1"], 0);
    assert_eq!(v["ratings_count"]["3"], 1);
    assert_eq!(v["ratings_count"]["5"], 2);
    assert_eq!(v["latest_review"]["author"], "c");
}

#[tokio::test]
async fn latest_review_is_positional() {
    let (app, _tmp) = make_app();

    for author in ["a", "b", "c"] {
        post_json(
            &app,
            "/api/reviews",
            json!({"author": author, "rating": 4, "text": "review"}),
        )
        .await;
    }

    // Deleting the last record promotes the previous one
    let (_, list) = get(&app, "/api/reviews").await;
    let last_id = list
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["author"] == "c")
        .unwrap()["id"]
        .as_f64()
        .unwrap();
    delete(&app, &format!("/api/reviews/{}", last_id)).await;

    let (_, v) = get(&app, "/api/stats").await;
    assert_eq!(v["total"], 2);
    assert_eq!(v["latest_review"]["author"], "b");
}
