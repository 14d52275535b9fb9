//! Integration tests for the typed endpoint wrappers
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use sc_application::ApplicationError;
use sc_domain::account::{LoginPayload, VerifyWhatsappPayload};
use sc_domain::catalog::{LocationQuery, LocationType};
use sc_domain::listing::ListingPatch;
use sc_domain::pro::{PageQuery, ProSearchParams};
use sc_domain::{HttpMethod, Session};
use serde_json::json;

use common::{ScriptedBackend, client_with_session, signed_in_client};

fn credentials() -> LoginPayload {
    LoginPayload {
        phone: "+221770000000".into(),
        password: "s3cret".into(),
    }
}

fn pro(id: u64, name: &str) -> serde_json::Value {
    json!({ "id": id, "nom_commercial": name, "is_premium": false, "est_en_ligne": true })
}

#[tokio::test]
async fn test_login_stores_issued_tokens() {
    let backend = ScriptedBackend::new("a1");
    backend.public_route(
        HttpMethod::Post,
        "/api/auth/login/",
        200,
        json!({ "access": "a1", "refresh": "r1" }),
    );
    let (client, storage) = client_with_session(&backend, Session::default()).await;

    let session = client.login(&credentials()).await.expect("login should succeed");

    assert_eq!(session, Session::new("a1", Some("r1".into())));
    assert_eq!(storage.stored(), Some(session));
    let login = &backend.seen()[0];
    assert_eq!(
        login.body,
        Some(json!({ "phone": "+221770000000", "password": "s3cret" }))
    );
    assert_eq!(login.authorization, None);
}

#[tokio::test]
async fn test_login_accepts_token_alias() {
    let backend = ScriptedBackend::new("k1");
    backend.public_route(HttpMethod::Post, "/api/auth/login/", 200, json!({ "token": "k1" }));
    let (client, _storage) = client_with_session(&backend, Session::default()).await;

    let session = client.login(&credentials()).await.unwrap();

    assert_eq!(session, Session::new("k1", None));
}

#[tokio::test]
async fn test_login_without_access_token_is_rejected() {
    let backend = ScriptedBackend::new("a1");
    backend.public_route(HttpMethod::Post, "/api/auth/login/", 200, json!({ "detail": "ok" }));
    let (client, storage) = client_with_session(&backend, Session::default()).await;

    let error = client.login(&credentials()).await.expect_err("no token issued");

    assert!(matches!(error, ApplicationError::InvalidResponse(_)));
    assert_eq!(storage.stored(), None);
}

#[tokio::test]
async fn test_verify_whatsapp_signs_in() {
    let backend = ScriptedBackend::new("a9");
    backend.public_route(
        HttpMethod::Post,
        "/api/auth/verify-whatsapp/",
        200,
        json!({
            "detail": "Numéro vérifié",
            "user_id": 7,
            "phone": "+221770000000",
            "whatsapp_verified": true,
            "access": "a9",
            "refresh": "r9"
        }),
    );
    let (client, storage) = client_with_session(&backend, Session::default()).await;

    let verified = client
        .verify_whatsapp(&VerifyWhatsappPayload {
            phone: "+221770000000".into(),
            code: "123456".into(),
        })
        .await
        .unwrap();

    assert_eq!(verified.user_id, 7);
    assert_eq!(storage.stored(), Some(Session::new("a9", Some("r9".into()))));
}

#[tokio::test]
async fn test_logout_clears_session() {
    let backend = ScriptedBackend::new("t1");
    let (client, storage) = signed_in_client(&backend).await;

    client.logout().await;

    assert!(!client.session().is_authenticated().await);
    assert_eq!(storage.stored(), None);
}

#[tokio::test]
async fn test_search_pros_sends_filters_and_reads_pages() {
    let backend = ScriptedBackend::new("t1");
    backend.public_route(
        HttpMethod::Get,
        "/api/pros/recherche/",
        200,
        json!({
            "count": 41,
            "next": "http://api.test/api/pros/recherche/?page=3",
            "previous": null,
            "results": [pro(1, "Plomberie Diop")]
        }),
    );
    let (client, _storage) = client_with_session(&backend, Session::default()).await;

    let page = client
        .search_pros(&ProSearchParams {
            search: Some("plombier".into()),
            page: Some(2),
            ..ProSearchParams::default()
        })
        .await
        .unwrap();

    assert_eq!(page.count, 41);
    assert!(page.has_next());
    assert_eq!(page.results[0].display_name(), Some("Plomberie Diop"));
    assert_eq!(backend.seen()[0].query.as_deref(), Some("search=plombier&page=2"));
}

#[tokio::test]
async fn test_favorites_accept_bare_arrays() {
    let backend = ScriptedBackend::new("t1");
    backend.route(
        HttpMethod::Get,
        "/api/pros/favoris/",
        200,
        json!([{
            "id": 3,
            "professionnel": 1,
            "professionnel_details": pro(1, "Plomberie Diop"),
            "cree_le": "2024-05-01T10:00:00Z"
        }]),
    );
    let (client, _storage) = signed_in_client(&backend).await;

    let favorites = client.list_favorites(PageQuery::default()).await.unwrap();

    assert_eq!(favorites.count, 1);
    assert!(!favorites.has_next());
    assert_eq!(favorites.results[0].professionnel, 1);
}

#[tokio::test]
async fn test_favorites_are_added_and_removed_by_professional() {
    let backend = ScriptedBackend::new("t1");
    backend.route(
        HttpMethod::Post,
        "/api/pros/favoris/",
        201,
        json!({
            "id": 3,
            "professionnel": 12,
            "professionnel_details": pro(12, "Menuiserie Fall"),
            "cree_le": "2024-05-01T10:00:00Z"
        }),
    );
    backend.route(HttpMethod::Delete, "/api/pros/favoris/12/", 204, json!(null));
    let (client, _storage) = signed_in_client(&backend).await;

    let added = client.add_favorite(12).await.unwrap();
    client.remove_favorite(12).await.unwrap();

    assert_eq!(added.id, 3);
    let seen = backend.seen();
    assert_eq!(seen[0].body, Some(json!({ "professionnel": 12 })));
    assert_eq!(seen[1].method, HttpMethod::Delete);
    assert_eq!(seen[1].path, "/api/pros/favoris/12/");
}

#[tokio::test]
async fn test_listings_filters_and_partial_update() {
    let backend = ScriptedBackend::new("t1");
    let listing = json!({
        "id": 5,
        "titre": "Peinture villa",
        "type": "demande",
        "ville": "Thiès",
        "prix": "75000.00",
        "est_approuvee": true
    });
    backend.public_route(
        HttpMethod::Get,
        "/api/annonces/",
        200,
        json!({ "count": 1, "results": [listing.clone()] }),
    );
    backend.route(HttpMethod::Patch, "/api/annonces/5/", 200, listing);
    let (client, _storage) = signed_in_client(&backend).await;

    let filters = BTreeMap::from([("ville".to_string(), "Thiès".to_string())]);
    let listings = client.list_listings(&filters).await.unwrap();
    let updated = client
        .update_listing(
            5,
            &ListingPatch {
                titre: Some("Peinture villa".into()),
                ..ListingPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].prix.as_ref().and_then(|p| p.amount()), Some(75000.0));
    assert_eq!(updated.id, 5);
    let seen = backend.seen();
    assert_eq!(seen[0].query.as_deref(), Some("ville=Thi%C3%A8s"));
    assert_eq!(seen[1].body, Some(json!({ "titre": "Peinture villa" })));
}

#[tokio::test]
async fn test_checkout_omits_default_amount() {
    let backend = ScriptedBackend::new("t1");
    backend.route(
        HttpMethod::Post,
        "/api/billing/checkout/",
        200,
        json!({ "checkout_url": "https://pay.example/s/abc" }),
    );
    let (client, _storage) = signed_in_client(&backend).await;

    let session = client.checkout(None).await.unwrap();

    assert_eq!(session.checkout_url, "https://pay.example/s/abc");
    assert_eq!(backend.seen()[0].body, Some(json!({})));
}

#[tokio::test]
async fn test_subscription_reads_legacy_field_names() {
    let backend = ScriptedBackend::new("t1");
    backend.route(
        HttpMethod::Get,
        "/api/billing/me/",
        200,
        json!({ "active": true, "expires_at": "2030-01-01T00:00:00Z" }),
    );
    let (client, _storage) = signed_in_client(&backend).await;

    let subscription = client.subscription().await.unwrap();

    assert!(subscription.is_active);
    assert!(subscription.end_at.is_some());
}

#[tokio::test]
async fn test_locations_tree_returns_sorted_regions() {
    let backend = ScriptedBackend::new("t1");
    backend.public_route(
        HttpMethod::Get,
        "/api/catalog/locations/tree/",
        200,
        json!({
            "id": 1,
            "name": "Sénégal",
            "type": "COUNTRY",
            "children": [
                { "id": 3, "name": "Thiès", "type": "REGION", "children": [] },
                { "id": 2, "name": "Dakar", "type": "REGION", "children": [
                    { "id": 20, "name": "Pikine", "type": "DEPARTMENT" }
                ] }
            ]
        }),
    );
    let (client, _storage) = client_with_session(&backend, Session::default()).await;

    let regions = client.locations_tree().await.unwrap();

    let names: Vec<&str> = regions.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Dakar", "Thiès"]);
    assert_eq!(regions[0].children[0].kind, LocationType::Department);
}

#[tokio::test]
async fn test_locations_query_and_jobs_page_size() {
    let backend = ScriptedBackend::new("t1");
    backend.public_route(HttpMethod::Get, "/api/catalog/locations/", 200, json!([]));
    backend.public_route(HttpMethod::Get, "/api/catalog/jobs/", 200, json!({ "results": [] }));
    let (client, _storage) = client_with_session(&backend, Session::default()).await;

    client
        .locations(&LocationQuery {
            kind: Some(LocationType::Region),
            ..LocationQuery::default()
        })
        .await
        .unwrap();
    let jobs = client.jobs().await.unwrap();

    assert!(jobs.is_empty());
    let seen = backend.seen();
    assert_eq!(seen[0].query.as_deref(), Some("type=REGION&page_size=1000"));
    assert_eq!(seen[1].query.as_deref(), Some("page_size=1000"));
}

#[tokio::test]
async fn test_catalog_errors_are_propagated() {
    let backend = ScriptedBackend::new("t1");
    backend.public_route(HttpMethod::Get, "/api/catalog/categories/tree/", 500, json!({}));
    let (client, _storage) = client_with_session(&backend, Session::default()).await;

    let error = client.categories_tree().await.expect_err("server error");

    assert_eq!(error.status().map(|s| s.0), Some(500));
}

#[tokio::test]
async fn test_ad_click_failures_are_swallowed() {
    let backend = ScriptedBackend::new("t1");
    backend.public_route(HttpMethod::Post, "/api/ads/4/click/", 500, json!({}));
    let (client, _storage) = client_with_session(&backend, Session::default()).await;

    client.track_ad_click(4).await;

    assert_eq!(backend.seen()[0].path, "/api/ads/4/click/");
}
