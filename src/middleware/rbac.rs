// src/middleware/rbac.rs

use axum::{extract::FromRequestParts, http::request::Parts};
use std::marker::PhantomData;

use crate::{common::error::AppError, models::auth::{Claims, Role}};

// As capacidades do portal, espelhando o mapa de navegação do frontend.
// A tabela é estática: papel e capacidade se resolvem sem tocar no banco.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Dashboard,
    Finance,
    PaymentApproval,
    DeliveryAudit,
    Fleet,
    People,
    Bot,
    Crm,
    Administration,
}

impl Capability {
    pub fn slug(self) -> &'static str {
        match self {
            Capability::Dashboard => "dashboard",
            Capability::Finance => "finance",
            Capability::PaymentApproval => "payment-approval",
            Capability::DeliveryAudit => "delivery-audit",
            Capability::Fleet => "fleet",
            Capability::People => "people",
            Capability::Bot => "bot",
            Capability::Crm => "crm",
            Capability::Administration => "administration",
        }
    }

    pub fn allowed_roles(self) -> &'static [Role] {
        use Role::*;
        match self {
            Capability::Dashboard => &[Gestor],
            Capability::Finance => &[Gestor, Financeiro],
            Capability::PaymentApproval => &[Gestor, Financeiro],
            Capability::DeliveryAudit => &[Gestor, Auditor, Operacional],
            Capability::Fleet => &[Gestor, Operacional],
            Capability::People => &[Gestor],
            Capability::Bot => &[Gestor, Operacional],
            Capability::Crm => &[Comercial],
            Capability::Administration => &[Gestor],
        }
    }

    pub fn permits(self, role: Role) -> bool {
        self.allowed_roles().contains(&role)
    }
}

/// O trait que liga um tipo marcador à sua capacidade
pub trait CapabilityDef: Send + Sync + 'static {
    fn capability() -> Capability;
}

/// O extractor (guardião): nega com 403 quando o papel embutido no token
/// não cobre a capacidade exigida pela rota.
pub struct RequireCapability<T>(pub PhantomData<T>);

impl<T, S> FromRequestParts<S> for RequireCapability<T>
where
    T: CapabilityDef,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<Claims>()
            .ok_or(AppError::InvalidToken)?;

        let required = T::capability();
        if !required.permits(claims.role) {
            return Err(AppError::MissingCapability(required.slug()));
        }

        Ok(RequireCapability(PhantomData))
    }
}

// ---
// DEFINIÇÃO DAS CAPACIDADES (TIPOS)
// ---

macro_rules! capability_marker {
    ($name:ident => $cap:expr) => {
        pub struct $name;
        impl CapabilityDef for $name {
            fn capability() -> Capability {
                $cap
            }
        }
    };
}

capability_marker!(CapDashboard => Capability::Dashboard);
capability_marker!(CapFinance => Capability::Finance);
capability_marker!(CapPaymentApproval => Capability::PaymentApproval);
capability_marker!(CapDeliveryAudit => Capability::DeliveryAudit);
capability_marker!(CapFleet => Capability::Fleet);
capability_marker!(CapPeople => Capability::People);
capability_marker!(CapBot => Capability::Bot);
capability_marker!(CapCrm => Capability::Crm);
capability_marker!(CapAdministration => Capability::Administration);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gestor_reaches_management_views_but_not_crm() {
        assert!(Capability::Dashboard.permits(Role::Gestor));
        assert!(Capability::People.permits(Role::Gestor));
        assert!(Capability::Administration.permits(Role::Gestor));
        assert!(!Capability::Crm.permits(Role::Gestor));
    }

    #[test]
    fn financeiro_sees_finance_but_not_fleet() {
        assert!(Capability::Finance.permits(Role::Financeiro));
        assert!(Capability::PaymentApproval.permits(Role::Financeiro));
        assert!(!Capability::Fleet.permits(Role::Financeiro));
        assert!(!Capability::Dashboard.permits(Role::Financeiro));
    }

    #[test]
    fn crm_is_exclusive_to_comercial() {
        for role in [Role::Gestor, Role::Financeiro, Role::Operacional, Role::Auditor] {
            assert!(!Capability::Crm.permits(role));
        }
        assert!(Capability::Crm.permits(Role::Comercial));
    }

    #[test]
    fn auditor_is_limited_to_delivery_audit() {
        assert!(Capability::DeliveryAudit.permits(Role::Auditor));
        for cap in [
            Capability::Dashboard,
            Capability::Finance,
            Capability::PaymentApproval,
            Capability::Fleet,
            Capability::People,
            Capability::Bot,
            Capability::Crm,
            Capability::Administration,
        ] {
            assert!(!cap.permits(Role::Auditor), "{:?}", cap);
        }
    }
}
