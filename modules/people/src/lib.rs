//! People records module: domain service, storage adapter, and the HTML
//! surface for listing, searching, and editing person records.

pub mod api;
pub mod config;
pub mod contract;
pub mod domain;
pub mod infra;

pub use config::PeopleConfig;
pub use domain::service::Service;
