pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod routers;
pub mod validation;
