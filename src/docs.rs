// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,
        handlers::auth::me,

        // --- Company ---
        handlers::company::get_settings,
        handlers::company::update_settings,

        // --- Users ---
        handlers::users::list_users,
        handlers::users::create_user,
        handlers::users::update_user,

        // --- CRM ---
        handlers::crm::list_customers,
        handlers::crm::list_contracts,

        // --- Fleet ---
        handlers::fleet::list_vehicles,
        handlers::fleet::list_deliveries,

        // --- Finance ---
        handlers::finance::list_invoices,
        handlers::finance::list_payment_requests,
        handlers::finance::create_payment_request,

        // --- People ---
        handlers::people::list_people,
        handlers::people::list_bot_messages,

        // --- Uploads ---
        handlers::uploads::signed_url,

        // --- Dashboard ---
        handlers::dashboard::get_stats,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::Role,
            models::auth::User,
            models::auth::LoginPayload,
            models::auth::AuthResponse,
            models::auth::CreateUserPayload,
            models::auth::UpdateUserPayload,

            // --- Company ---
            models::company::Company,
            models::company::CompanyProfile,
            models::company::UpdateCompanyPayload,

            // --- CRM ---
            models::crm::CustomerStatus,
            models::crm::ContractStatus,
            models::crm::Customer,
            models::crm::Contract,

            // --- Fleet ---
            models::fleet::VehicleStatus,
            models::fleet::DeliveryStatus,
            models::fleet::Vehicle,
            models::fleet::Delivery,
            models::fleet::DeliveryLocation,

            // --- Finance ---
            models::finance::InvoiceStatus,
            models::finance::PaymentStatus,
            models::finance::PaymentCategory,
            models::finance::PaymentPriority,
            models::finance::Invoice,
            models::finance::PaymentRequest,
            models::finance::CreatePaymentRequestPayload,
            models::finance::PaymentRequestCreated,

            // --- People ---
            models::people::PersonStatus,
            models::people::BotSender,
            models::people::Person,
            models::people::BotMessage,

            // --- Uploads ---
            models::uploads::SignedUrlPayload,
            models::uploads::SignedUrlResponse,

            // --- Dashboard ---
            models::dashboard::DashboardStats,
        )
    ),
    tags(
        (name = "Auth", description = "Login e identidade da sessão"),
        (name = "Company", description = "Perfil da empresa"),
        (name = "Users", description = "Administração de usuários"),
        (name = "CRM", description = "Clientes e contratos"),
        (name = "Fleet", description = "Frota e entregas"),
        (name = "Finance", description = "Faturas e solicitações de pagamento"),
        (name = "People", description = "Pessoas e mensagens do bot"),
        (name = "Uploads", description = "URLs de upload pré-assinadas"),
        (name = "Dashboard", description = "Indicadores agregados")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
