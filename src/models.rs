// src/models.rs

pub mod auth;
pub mod event;
pub mod join;
pub mod kpi;
pub mod media;
pub mod report;
pub mod submission;
pub mod university;
