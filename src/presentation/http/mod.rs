// src/presentation/http/mod.rs
pub mod controllers;
pub mod error;
pub mod openapi;
pub mod routes;
