// src/config.rs

use std::{env, sync::Arc, time::Duration};

use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{
    db::{
        CompanyRepository, CrmRepository, DashboardRepository, FinanceRepository,
        FleetRepository, PeopleRepository, UserRepository,
    },
    services::{
        auth::AuthService,
        dashboard_service::DashboardService,
        mailer::{LogMailer, Mailer, SmtpMailer},
        storage::StorageService,
    },
};

// Segredo de fallback herdado do portal original. Qualquer implantação
// séria precisa sobrescrever JWT_SECRET: com o padrão, os tokens são
// forjáveis por quem leu este arquivo.
const DEFAULT_JWT_SECRET: &str = "default_secret_change_me";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

// O que fazer quando o e-mail de notificação falha: derrubar a requisição
// ou só registrar o aviso.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyMode {
    Required,
    BestEffort,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub environment: Environment,
    pub notify_mode: NotifyMode,
}

impl Settings {
    fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3333);

        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        };

        let notify_mode = match env::var("MAIL_NOTIFY_MODE").as_deref() {
            Ok("required") => NotifyMode::Required,
            _ => NotifyMode::BestEffort,
        };

        Self {
            port,
            environment,
            notify_mode,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub settings: Settings,
    pub auth_service: AuthService,
    pub dashboard_service: DashboardService,
    pub user_repo: UserRepository,
    pub company_repo: CompanyRepository,
    pub crm_repo: CrmRepository,
    pub fleet_repo: FleetRepository,
    pub finance_repo: FinanceRepository,
    pub people_repo: PeopleRepository,
    pub mailer: Arc<dyn Mailer>,
    pub storage: StorageService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let settings = Settings::from_env();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!(
                "JWT_SECRET não definido; usando o segredo padrão. Tokens são forjáveis!"
            );
            DEFAULT_JWT_SECRET.to_string()
        });

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // Em desenvolvimento não há SMTP de verdade: a notificação vai para o log.
        let mailer: Arc<dyn Mailer> = match settings.environment {
            Environment::Production => Arc::new(SmtpMailer::from_env()?),
            Environment::Development => Arc::new(LogMailer),
        };

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let auth_service = AuthService::new(user_repo.clone(), jwt_secret);
        let dashboard_service = DashboardService::new(DashboardRepository::new(db_pool.clone()));

        Ok(Self {
            settings,
            auth_service,
            dashboard_service,
            user_repo,
            company_repo: CompanyRepository::new(db_pool.clone()),
            crm_repo: CrmRepository::new(db_pool.clone()),
            fleet_repo: FleetRepository::new(db_pool.clone()),
            finance_repo: FinanceRepository::new(db_pool.clone()),
            people_repo: PeopleRepository::new(db_pool.clone()),
            mailer,
            storage: StorageService::from_env(),
            db_pool,
        })
    }
}
