pub mod auth;
pub mod company;
pub mod crm;
pub mod dashboard;
pub mod finance;
pub mod fleet;
pub mod people;
pub mod uploads;
pub mod users;
