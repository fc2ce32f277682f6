//! Tabular data import service for the Siox operations platform.
//!
//! Uploaded CSV/XLSX files move through a strict job lifecycle
//! (UPLOADED -> MAPPED -> VALIDATED -> IMPORTING -> IMPORTED | FAILED)
//! before their rows land in the domain tables.

pub mod database;
pub mod errors;
pub mod import;
pub mod server;
pub mod services;
