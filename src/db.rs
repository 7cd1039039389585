pub mod user_repo;
pub use user_repo::UserRepository;
pub mod company_repo;
pub use company_repo::CompanyRepository;
pub mod crm_repo;
pub use crm_repo::CrmRepository;
pub mod fleet_repo;
pub use fleet_repo::FleetRepository;
pub mod finance_repo;
pub use finance_repo::FinanceRepository;
pub mod people_repo;
pub use people_repo::PeopleRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
