// server/src/services/mod.rs

pub mod admin_service;
