// src/common.rs

pub mod csv;
pub mod error;
pub mod ics;
