#![deny(
    asm_sub_register,
    deprecated,
    missing_abi,
    unsafe_code,
    unused_macros,
    unused_must_use,
    unused_unsafe
)]
#![deny(clippy::from_over_into, clippy::needless_question_mark)]
#![cfg_attr(
    not(debug_assertions),
    deny(unused_imports, unused_mut, unused_variables,)
)]

pub mod config;
pub mod database;
pub mod error;

use anyhow::Result;

use config::Config;
use database::migration::{Migrator, MigratorTrait};

/// Runs all pending database migrations.
pub async fn run_migrations(config: Config) -> Result<()> {
    eprintln!("Running migrations...");

    let db = database::connect(&config.database).await?;
    Migrator::up(&db, None).await?;

    Ok(())
}

/// Reports which migrations have been applied and which are pending.
pub async fn migration_status(config: Config) -> Result<()> {
    let db = database::connect(&config.database).await?;
    Migrator::status(&db).await?;

    Ok(())
}
