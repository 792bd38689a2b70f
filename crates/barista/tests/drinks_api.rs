//! HTTP-level integration tests for the drinks endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    barista_token, body_json, delete_auth, get, get_auth, manager_token, patch_json_auth,
    post_json_auth,
};
use sqlx::PgPool;

use ensemble_barista::models::drink::Ingredient;
use ensemble_barista::repositories::DrinkRepo;

/// Insert a drink directly through the repository.
async fn seed_drink(pool: &PgPool, title: &str) -> i64 {
    let recipe = vec![
        Ingredient {
            name: "espresso".to_string(),
            color: "brown".to_string(),
            parts: 1,
        },
        Ingredient {
            name: "steamed milk".to_string(),
            color: "white".to_string(),
            parts: 3,
        },
    ];
    let created = DrinkRepo::create(pool, title, &recipe).await.unwrap();
    created.id
}

// ---------------------------------------------------------------------------
// Public menu (short form)
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_public_menu_shows_short_form(pool: PgPool) {
    seed_drink(&pool, "Flat White").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/drinks").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let drink = &json["drinks"][0];
    assert_eq!(drink["title"], "Flat White");

    // Short form keeps color and parts but withholds the ingredient name.
    let layer = &drink["recipe"][0];
    assert_eq!(layer["color"], "brown");
    assert_eq!(layer["parts"], 1);
    assert!(layer.get("name").is_none());
}

#[sqlx::test]
async fn test_public_menu_empty_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/drinks").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 404);
    assert_eq!(json["message"], "resource not found");
}

// ---------------------------------------------------------------------------
// Detail (long form)
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_detail_requires_a_token(pool: PgPool) {
    seed_drink(&pool, "Cortado").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/drinks-detail").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn test_detail_returns_long_form_for_barista(pool: PgPool) {
    seed_drink(&pool, "Cortado").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/drinks-detail", &barista_token()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let layer = &json["drinks"][0]["recipe"][0];
    assert_eq!(layer["name"], "espresso");
    assert_eq!(layer["color"], "brown");
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_barista_cannot_create_drinks(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/drinks",
        serde_json::json!({
            "title": "Matcha Latte",
            "recipe": [{"name": "matcha", "color": "green", "parts": 1}]
        }),
        &barista_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Permission not found: post:drinks");
}

#[sqlx::test]
async fn test_manager_creates_drink_with_array_recipe(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/drinks",
        serde_json::json!({
            "title": "Mocha",
            "recipe": [
                {"name": "espresso", "color": "brown", "parts": 1},
                {"name": "chocolate", "color": "dark brown", "parts": 1},
                {"name": "steamed milk", "color": "white", "parts": 2}
            ]
        }),
        &manager_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    // The response carries only the created drink, in long form.
    let drinks = json["drinks"].as_array().unwrap();
    assert_eq!(drinks.len(), 1);
    assert_eq!(drinks[0]["title"], "Mocha");
    assert_eq!(drinks[0]["recipe"].as_array().unwrap().len(), 3);
    assert_eq!(drinks[0]["recipe"][1]["name"], "chocolate");
}

#[sqlx::test]
async fn test_bare_ingredient_object_is_accepted(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/drinks",
        serde_json::json!({
            "title": "Espresso",
            "recipe": {"name": "espresso", "color": "brown", "parts": 1}
        }),
        &manager_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let recipe = json["drinks"][0]["recipe"].as_array().unwrap();
    assert_eq!(recipe.len(), 1);
    assert_eq!(recipe[0]["name"], "espresso");
}

#[sqlx::test]
async fn test_duplicate_title_returns_422(pool: PgPool) {
    seed_drink(&pool, "Flat White").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/drinks",
        serde_json::json!({
            "title": "Flat White",
            "recipe": [{"name": "espresso", "color": "brown", "parts": 1}]
        }),
        &manager_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 422);
    assert_eq!(json["message"], "unprocessable");
}

#[sqlx::test]
async fn test_create_without_recipe_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/drinks",
        serde_json::json!({"title": "Just A Name"}),
        &manager_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Patch
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_patch_title_keeps_the_recipe(pool: PgPool) {
    let id = seed_drink(&pool, "Working Name").await;

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/drinks/{id}"),
        serde_json::json!({"title": "Flat White"}),
        &manager_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let drink = &json["drinks"][0];
    assert_eq!(drink["title"], "Flat White");
    assert_eq!(drink["recipe"].as_array().unwrap().len(), 2);
    assert_eq!(drink["recipe"][0]["name"], "espresso");
}

#[sqlx::test]
async fn test_patch_replaces_the_whole_recipe(pool: PgPool) {
    let id = seed_drink(&pool, "Seasonal Special").await;

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        &format!("/drinks/{id}"),
        serde_json::json!({
            "recipe": [{"name": "pumpkin syrup", "color": "orange", "parts": 1}]
        }),
        &manager_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let recipe = json["drinks"][0]["recipe"].as_array().unwrap();
    assert_eq!(recipe.len(), 1);
    assert_eq!(recipe[0]["name"], "pumpkin syrup");
}

#[sqlx::test]
async fn test_patch_unknown_drink_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        "/drinks/999999",
        serde_json::json!({"title": "Ghost"}),
        &manager_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_delete_drink_returns_delete_key(pool: PgPool) {
    let id = seed_drink(&pool, "Discontinued").await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/drinks/{id}"), &manager_token()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["delete"], id);

    assert!(DrinkRepo::find_by_id(&pool, id).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_barista_cannot_delete_drinks(pool: PgPool) {
    let id = seed_drink(&pool, "Protected").await;

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/drinks/{id}"), &barista_token()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test]
async fn test_delete_unknown_drink_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete_auth(app, "/drinks/999999", &manager_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
