pub mod controller;
pub mod env;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod router;
pub mod util;
