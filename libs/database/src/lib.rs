//! Database library providing the PostgreSQL connector and utilities
//!
//! # Examples
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config(config).await?;
//! postgres::check_health(&db).await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
