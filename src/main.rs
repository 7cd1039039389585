// src/main.rs

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é aceitável aqui: se a configuração falhar, a aplicação
    // não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas públicas: só o login fica fora do guard de autenticação.
    let public_routes = Router::new().route("/api/login", post(handlers::auth::login));

    // Rotas protegidas: o guard verifica o token e anexa a identidade;
    // as capacidades por papel são checadas em cada handler.
    let protected_routes = Router::new()
        .route("/api/me", get(handlers::auth::me))
        .route(
            "/api/company/settings",
            get(handlers::company::get_settings).put(handlers::company::update_settings),
        )
        .route(
            "/api/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route("/api/users/{id}", put(handlers::users::update_user))
        .route("/api/customers", get(handlers::crm::list_customers))
        .route("/api/contracts", get(handlers::crm::list_contracts))
        .route("/api/vehicles", get(handlers::fleet::list_vehicles))
        .route("/api/deliveries", get(handlers::fleet::list_deliveries))
        .route("/api/invoices", get(handlers::finance::list_invoices))
        .route(
            "/api/payment-requests",
            get(handlers::finance::list_payment_requests)
                .post(handlers::finance::create_payment_request),
        )
        .route("/api/people", get(handlers::people::list_people))
        .route("/api/bot-messages", get(handlers::people::list_bot_messages))
        .route("/api/uploads/signed-url", post(handlers::uploads::signed_url))
        .route("/api/dashboard-stats", get(handlers::dashboard::get_stats))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .merge(public_routes)
        .merge(protected_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state.clone());

    let addr = format!("0.0.0.0:{}", app_state.settings.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
