//! API router
//!
//! Route paths (trailing slashes included) mirror the frontend's existing
//! API client, so they are registered flat rather than nested.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    routing::get,
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::TenancyService;
use crate::domain::RepositoryProvider;
use crate::interfaces::http::modules::finance::{self, FinanceState};
use crate::interfaces::http::modules::health::{self, HealthState};
use crate::interfaces::http::modules::payments::{self, PaymentState};
use crate::interfaces::http::modules::room_types::{self, RoomTypeState};
use crate::interfaces::http::modules::rooms::{self, RoomState};
use crate::interfaces::http::modules::tenants::{self, TenantState};

/// Unified state for all routes. Axum hands each handler its module state
/// via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub tenancy: Arc<TenancyService>,
    pub db: DatabaseConnection,
    pub started_at: Arc<Instant>,
}

impl FromRef<AppState> for RoomTypeState {
    fn from_ref(s: &AppState) -> Self {
        RoomTypeState {
            repos: Arc::clone(&s.repos),
        }
    }
}

impl FromRef<AppState> for RoomState {
    fn from_ref(s: &AppState) -> Self {
        RoomState {
            repos: Arc::clone(&s.repos),
        }
    }
}

impl FromRef<AppState> for TenantState {
    fn from_ref(s: &AppState) -> Self {
        TenantState {
            repos: Arc::clone(&s.repos),
            tenancy: Arc::clone(&s.tenancy),
        }
    }
}

impl FromRef<AppState> for PaymentState {
    fn from_ref(s: &AppState) -> Self {
        PaymentState {
            repos: Arc::clone(&s.repos),
        }
    }
}

impl FromRef<AppState> for FinanceState {
    fn from_ref(s: &AppState) -> Self {
        FinanceState { db: s.db.clone() }
    }
}

impl FromRef<AppState> for HealthState {
    fn from_ref(s: &AppState) -> Self {
        HealthState {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    tenancy: Arc<TenancyService>,
    db: DatabaseConnection,
) -> Router {
    let state = AppState {
        repos,
        tenancy,
        db,
        started_at: Arc::new(Instant::now()),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // --- Room types ---
        .route(
            "/tipe-kamar/",
            get(room_types::handlers::list_room_types).post(room_types::handlers::create_room_type),
        )
        .route(
            "/tipe-kamar/{id}/",
            get(room_types::handlers::get_room_type)
                .put(room_types::handlers::replace_room_type)
                .patch(room_types::handlers::update_room_type)
                .delete(room_types::handlers::delete_room_type),
        )
        // --- Rooms ---
        .route(
            "/kamar/",
            get(rooms::handlers::list_rooms).post(rooms::handlers::create_room),
        )
        .route(
            "/kamar/{id}/",
            get(rooms::handlers::get_room)
                .put(rooms::handlers::replace_room)
                .patch(rooms::handlers::update_room)
                .delete(rooms::handlers::delete_room),
        )
        // --- Tenants ---
        .route(
            "/penyewa/",
            get(tenants::handlers::list_tenants).post(tenants::handlers::create_tenant),
        )
        .route(
            "/penyewa/{id}/",
            get(tenants::handlers::get_tenant)
                .put(tenants::handlers::replace_tenant)
                .patch(tenants::handlers::update_tenant)
                .delete(tenants::handlers::delete_tenant),
        )
        // --- Payments ---
        .route(
            "/riwayat-bayar/",
            get(payments::handlers::list_payments).post(payments::handlers::create_payment),
        )
        .route(
            "/riwayat-bayar/{id}/",
            get(payments::handlers::get_payment)
                .put(payments::handlers::update_payment)
                .patch(payments::handlers::update_payment)
                .delete(payments::handlers::delete_payment),
        )
        // --- Reports ---
        .route("/financial-summary/", get(finance::handlers::financial_summary))
        // --- Health ---
        .route("/health", get(health::handlers::health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use sea_orm::{ConnectOptions, Database};
    use sea_orm_migration::MigratorTrait;
    use serde_json::{json, Value};

    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::SeaOrmRepositoryProvider;

    async fn test_app() -> Router {
        let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
        opts.max_connections(1);
        let db = Database::connect(opts).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        create_api_router(
            Arc::new(SeaOrmRepositoryProvider::new(db.clone())),
            Arc::new(TenancyService::new(db.clone())),
            db,
        )
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        use tower::Service;
        let mut svc = app.clone().into_service();
        let resp = svc.call(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn req(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        match body {
            Some(v) => builder.body(Body::from(serde_json::to_vec(&v).unwrap())).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    /// Seed one type and one room; returns (tipe_id, kamar_id).
    async fn seed(app: &Router) -> (i64, i64) {
        let (status, tipe) = send(
            app,
            req(
                "POST",
                "/tipe-kamar/",
                Some(json!({
                    "nama_tipe": "Standard",
                    "harga_per_bulan": 500000,
                    "fasilitas": "Kasur, lemari, meja"
                })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, kamar) = send(
            app,
            req(
                "POST",
                "/kamar/",
                Some(json!({
                    "nomor_kamar": "A01",
                    "tipe": tipe["id"],
                    "lantai": 1
                })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        (tipe["id"].as_i64().unwrap(), kamar["id"].as_i64().unwrap())
    }

    #[tokio::test]
    async fn check_in_and_out_drive_room_status_over_http() {
        let app = test_app().await;
        let (_, kamar_id) = seed(&app).await;

        let (status, budi) = send(
            &app,
            req(
                "POST",
                "/penyewa/",
                Some(json!({
                    "nama_lengkap": "Budi Santoso",
                    "nomor_hp": "081234567890",
                    "kamar": kamar_id,
                    "tanggal_masuk": "2025-03-01",
                    "durasi_sewa_bulan": 6
                })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(budi["kamar_detail"]["status"], "ISI");

        // A follow-up read observes the committed status.
        let (status, room) = send(
            &app,
            req("GET", &format!("/kamar/{}/", kamar_id), None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(room["status"], "ISI");

        let (status, _) = send(
            &app,
            req("DELETE", &format!("/penyewa/{}/", budi["id"]), None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, room) = send(
            &app,
            req("GET", &format!("/kamar/{}/", kamar_id), None),
        )
        .await;
        assert_eq!(room["status"], "KOSONG");
    }

    #[tokio::test]
    async fn occupied_room_rejects_a_second_tenant() {
        let app = test_app().await;
        let (_, kamar_id) = seed(&app).await;

        let tenant = |nama: &str| {
            json!({
                "nama_lengkap": nama,
                "nomor_hp": "0812000000",
                "kamar": kamar_id,
                "tanggal_masuk": "2025-03-01"
            })
        };

        let (status, _) = send(&app, req("POST", "/penyewa/", Some(tenant("Budi")))).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(&app, req("POST", "/penyewa/", Some(tenant("Siti")))).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["success"], false);

        let (_, tenants) = send(&app, req("GET", "/penyewa/", None)).await;
        assert_eq!(tenants.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn referenced_room_type_cannot_be_deleted() {
        let app = test_app().await;
        let (tipe_id, _) = seed(&app).await;

        let (status, _) = send(
            &app,
            req("DELETE", &format!("/tipe-kamar/{}/", tipe_id), None),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        // Still there, and still listed.
        let (_, list) = send(&app, req("GET", "/tipe-kamar/", None)).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn direct_status_edit_to_isi_is_rejected() {
        let app = test_app().await;
        let (_, kamar_id) = seed(&app).await;

        let (status, _) = send(
            &app,
            req(
                "PATCH",
                &format!("/kamar/{}/", kamar_id),
                Some(json!({"status": "ISI"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            req(
                "PATCH",
                &format!("/kamar/{}/", kamar_id),
                Some(json!({"status": "MAINTENANCE"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn payment_listing_honours_the_page_size() {
        let app = test_app().await;
        let (_, kamar_id) = seed(&app).await;

        let (_, budi) = send(
            &app,
            req(
                "POST",
                "/penyewa/",
                Some(json!({
                    "nama_lengkap": "Budi Santoso",
                    "nomor_hp": "081234567890",
                    "kamar": kamar_id,
                    "tanggal_masuk": "2025-03-01"
                })),
            ),
        )
        .await;

        for i in 0..12 {
            let (status, _) = send(
                &app,
                req(
                    "POST",
                    "/riwayat-bayar/",
                    Some(json!({
                        "penyewa": budi["id"],
                        "jumlah": 500000,
                        "keterangan": format!("Bayar ke-{}", i + 1)
                    })),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, page) = send(&app, req("GET", "/riwayat-bayar/", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["items"].as_array().unwrap().len(), 10);
        assert_eq!(page["total"], 12);
        assert_eq!(page["total_pages"], 2);

        let (_, page2) = send(&app, req("GET", "/riwayat-bayar/?page=2", None)).await;
        assert_eq!(page2["items"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn financial_summary_reflects_recorded_payments() {
        let app = test_app().await;
        let (_, kamar_id) = seed(&app).await;

        let (status, summary) = send(&app, req("GET", "/financial-summary/", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(summary["total_pendapatan"], 0);
        assert_eq!(summary["recent_transactions"].as_array().unwrap().len(), 0);

        let (_, budi) = send(
            &app,
            req(
                "POST",
                "/penyewa/",
                Some(json!({
                    "nama_lengkap": "Budi Santoso",
                    "nomor_hp": "081234567890",
                    "kamar": kamar_id,
                    "tanggal_masuk": "2025-03-01"
                })),
            ),
        )
        .await;
        let (_, _) = send(
            &app,
            req(
                "POST",
                "/riwayat-bayar/",
                Some(json!({"penyewa": budi["id"], "jumlah": 750000, "keterangan": "Bayar"})),
            ),
        )
        .await;

        let (_, summary) = send(&app, req("GET", "/financial-summary/", None)).await;
        assert_eq!(summary["total_pendapatan"], 750000);
        assert_eq!(summary["pendapatan_bulan_ini"], 750000);
        assert_eq!(summary["grafik"]["data"].as_array().unwrap().len(), 1);
        assert_eq!(
            summary["recent_transactions"][0]["penyewa"],
            "Budi Santoso"
        );
    }

    #[tokio::test]
    async fn tenant_transfer_moves_occupancy_between_rooms() {
        let app = test_app().await;
        let (tipe_id, kamar_a) = seed(&app).await;

        let (_, kamar_b) = send(
            &app,
            req(
                "POST",
                "/kamar/",
                Some(json!({"nomor_kamar": "B02", "tipe": tipe_id, "lantai": 2})),
            ),
        )
        .await;
        let kamar_b = kamar_b["id"].as_i64().unwrap();

        let (_, budi) = send(
            &app,
            req(
                "POST",
                "/penyewa/",
                Some(json!({
                    "nama_lengkap": "Budi Santoso",
                    "nomor_hp": "081234567890",
                    "kamar": kamar_a,
                    "tanggal_masuk": "2025-03-01"
                })),
            ),
        )
        .await;

        let (status, moved) = send(
            &app,
            req(
                "PATCH",
                &format!("/penyewa/{}/", budi["id"]),
                Some(json!({"kamar": kamar_b})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(moved["kamar_detail"]["nomor_kamar"], "B02");

        let (_, room_a) = send(&app, req("GET", &format!("/kamar/{}/", kamar_a), None)).await;
        let (_, room_b) = send(&app, req("GET", &format!("/kamar/{}/", kamar_b), None)).await;
        assert_eq!(room_a["status"], "KOSONG");
        assert_eq!(room_b["status"], "ISI");
    }
}
