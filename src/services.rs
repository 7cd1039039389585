pub mod auth;
pub mod dashboard_service;
pub mod mailer;
pub mod storage;
