//src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

// Importações principais
use crate::config::AppState;
use crate::docs::ApiDoc;
use crate::middleware::auth::auth_middleware;

#[tokio::main]
async fn main() {
    // Inicializa o logger, que movemos para o main.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // Lida com o Result retornado por AppState::new()
    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Faz o app rodar as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas públicas do site: vitrine, formulários e KPIs agregados
    let public_routes = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route(
            "/universities",
            get(handlers::universities::list_universities),
        )
        .route("/events", get(handlers::events::list_events))
        .route("/events/{id}", get(handlers::events::get_event))
        .route("/events/{id}/ics", get(handlers::events::download_event_ics))
        .route("/media", get(handlers::media::list_public_media))
        .route(
            "/join-requests",
            post(handlers::join_requests::create_join_request),
        )
        .route("/submissions", post(handlers::submissions::create_submission))
        .route("/kpis", get(handlers::kpis::get_public_kpis))
        .route("/kpis/history", get(handlers::kpis::get_kpi_history));

    // Rotas do portal (protegidas pelo middleware de autenticação)
    let portal_routes = Router::new()
        .route(
            "/me",
            get(handlers::auth::get_me).patch(handlers::auth::update_me),
        )
        .route(
            "/auth/bootstrap-admin",
            post(handlers::auth::bootstrap_admin),
        )
        .route("/profiles", get(handlers::profiles::list_profiles))
        .route("/profiles/roles", get(handlers::profiles::list_role_options))
        .route(
            "/profiles/{id}/role",
            patch(handlers::profiles::update_profile_role),
        )
        .route(
            "/reports",
            post(handlers::reports::create_report).get(handlers::reports::list_reports),
        )
        .route(
            "/reports/{id}",
            get(handlers::reports::get_report).put(handlers::reports::update_report),
        )
        .route("/reports/{id}/review", post(handlers::reports::review_report))
        .route("/dashboard/stats", get(handlers::dashboard::get_stats))
        .route(
            "/dashboard/compliance",
            get(handlers::dashboard::get_compliance),
        )
        .route(
            "/exports/reports.csv",
            get(handlers::exports::export_reports_csv),
        )
        .route(
            "/exports/national-report.pdf",
            get(handlers::exports::export_national_pdf),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    // Área administrativa: gestão de conteúdo e triagem dos formulários públicos
    let admin_routes = Router::new()
        .route("/events", post(handlers::events::create_event))
        .route(
            "/events/{id}",
            put(handlers::events::update_event).delete(handlers::events::delete_event),
        )
        .route(
            "/media",
            get(handlers::media::list_all_media).post(handlers::media::create_media),
        )
        .route("/media/{id}", delete(handlers::media::delete_media))
        .route(
            "/join-requests",
            get(handlers::join_requests::list_join_requests),
        )
        .route(
            "/join-requests/{id}/review",
            post(handlers::join_requests::review_join_request),
        )
        .route("/submissions", get(handlers::submissions::list_submissions))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(
            "/api",
            public_routes
                .merge(portal_routes)
                .nest("/admin", admin_routes),
        )
        .with_state(app_state);

    // Inicia o servidor
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app) // .into_make_service() não é mais necessário nas versões recentes de Axum
        .await
        .expect("Erro no servidor Axum");
}
