// src/services/dashboard_service.rs

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    common::error::AppError,
    db::{DashboardRepository, dashboard_repo::DashboardSnapshot},
    models::{crm::ContractStatus, dashboard::DashboardStats},
};

#[derive(Clone)]
pub struct DashboardService {
    repo: DashboardRepository,
}

impl DashboardService {
    pub fn new(repo: DashboardRepository) -> Self {
        Self { repo }
    }

    pub async fn get_stats(&self) -> Result<DashboardStats, AppError> {
        let snapshot = self.repo.snapshot().await?;
        Ok(compute_stats(&snapshot))
    }
}

// O motor de agregação: função pura sobre um snapshot das tabelas.
// Volumes consideram apenas contratos ativos; a porcentagem tem guarda
// explícita contra divisão por zero.
pub fn compute_stats(snapshot: &DashboardSnapshot) -> DashboardStats {
    let (total_contract_volume, total_consumed_volume) = snapshot
        .contracts
        .iter()
        .filter(|c| c.status == ContractStatus::Ativo)
        .fold((0.0_f64, 0.0_f64), |(total, consumed), c| {
            (total + c.total_volume, consumed + c.consumed_volume)
        });

    let consumption_percentage = if total_contract_volume > 0.0 {
        (total_consumed_volume / total_contract_volume * 100.0).round() as i64
    } else {
        0
    };

    let total_open_amount = snapshot
        .open_invoice_amounts
        .iter()
        .copied()
        .sum::<Decimal>()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    DashboardStats {
        total_invoices: snapshot.counts.total_invoices,
        open_invoices: snapshot.counts.open_invoices,
        overdue_invoices: snapshot.counts.overdue_invoices,
        active_contracts: snapshot.counts.active_contracts,
        pending_payments: snapshot.counts.pending_payments,
        total_customers: snapshot.counts.total_customers,
        active_vehicles: snapshot.counts.active_vehicles,
        total_consumed_volume: total_consumed_volume.round() as i64,
        total_contract_volume: total_contract_volume.round() as i64,
        consumption_percentage,
        total_open_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dashboard::{ContractVolume, ResourceCounts};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn contract(status: ContractStatus, total: f64, consumed: f64) -> ContractVolume {
        ContractVolume {
            status,
            total_volume: total,
            consumed_volume: consumed,
        }
    }

    fn snapshot(contracts: Vec<ContractVolume>, amounts: Vec<Decimal>) -> DashboardSnapshot {
        DashboardSnapshot {
            counts: ResourceCounts::default(),
            contracts,
            open_invoice_amounts: amounts,
        }
    }

    #[test]
    fn volumes_ignore_inactive_contracts() {
        let snap = snapshot(
            vec![
                contract(ContractStatus::Ativo, 100.0, 90.0),
                contract(ContractStatus::Cancelado, 50.0, 10.0),
            ],
            vec![],
        );

        let stats = compute_stats(&snap);

        assert_eq!(stats.total_contract_volume, 100);
        assert_eq!(stats.total_consumed_volume, 90);
        assert_eq!(stats.consumption_percentage, 90);
    }

    #[test]
    fn percentage_guards_division_by_zero() {
        let snap = snapshot(vec![contract(ContractStatus::Concluido, 80.0, 80.0)], vec![]);

        let stats = compute_stats(&snap);

        assert_eq!(stats.total_contract_volume, 0);
        assert_eq!(stats.consumption_percentage, 0);
    }

    #[test]
    fn volumes_round_to_nearest_integer() {
        let snap = snapshot(vec![contract(ContractStatus::Ativo, 100.4, 50.6)], vec![]);

        let stats = compute_stats(&snap);

        assert_eq!(stats.total_contract_volume, 100);
        assert_eq!(stats.total_consumed_volume, 51);
    }

    #[test]
    fn open_amount_rounds_to_two_decimals() {
        let snap = snapshot(
            vec![],
            vec![dec("1000.005"), dec("250.10")],
        );

        let stats = compute_stats(&snap);

        assert_eq!(stats.total_open_amount, dec("1250.11"));
    }

    #[test]
    fn recomputation_on_same_snapshot_is_identical() {
        let snap = snapshot(
            vec![
                contract(ContractStatus::Ativo, 150_000.0, 95_000.0),
                contract(ContractStatus::Ativo, 200_000.0, 120_000.0),
            ],
            vec![dec("5432.10")],
        );

        assert_eq!(compute_stats(&snap), compute_stats(&snap));
    }
}
