// Wire DTOs - request/response bodies, PascalCase field names on the wire
pub mod auth;
pub mod common;
pub mod user;
