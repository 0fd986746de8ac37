//! Database access built on SQLx and MySQL

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::{MySqlUnitOfWork, MySqlUserRepository};
