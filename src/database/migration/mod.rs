//! Database migrations.

pub use sea_orm_migration::*;

mod m20240118_000001_create_object_table;
mod m20240725_000001_normalize_object_columns;


pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240118_000001_create_object_table::Migration),
            Box::new(m20240725_000001_normalize_object_columns::Migration),
        ]
    }
}
