// src/handlers.rs

pub mod auth;
pub mod dashboard;
pub mod events;
pub mod exports;
pub mod join_requests;
pub mod kpis;
pub mod media;
pub mod profiles;
pub mod reports;
pub mod submissions;
pub mod universities;
