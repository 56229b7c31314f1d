pub mod controller;
pub mod errors;
pub mod models;
pub mod repository;
pub mod service;

pub const UPLOAD_FIELD_NAME: &str = "file";
