//! Database connection management and SeaORM repositories.

mod connections;
pub mod entity;
mod query;
mod repository;

pub use connections::{DatabaseConfig, connect};
pub use sea_orm::DbConn;
pub use repository::{SeaOrmEventRepository, SeaOrmNewsRepository, SeaOrmProgramRepository};

#[cfg(test)]
mod tests;
