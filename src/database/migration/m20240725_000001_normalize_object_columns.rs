use sea_orm::{ColumnTrait, ConnectionTrait, DatabaseBackend, TransactionTrait};
use sea_orm_migration::prelude::*;

use crate::database::entity::object::*;

pub struct Migration;

const TEMP_OBJECT_TABLE: &str = "objects_v0_new";

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240725_000001_normalize_object_columns"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        eprintln!("* Normalizing object columns...");

        // Backfill nulls with the engine defaults. Each column gets
        // its own statement so only rows actually missing the value
        // are touched.
        let backfill_object_type = Query::update()
            .table(Entity)
            .value(Column::ObjectType, 0i16)
            .and_where(Column::ObjectType.is_null())
            .to_owned();

        let backfill_color = Query::update()
            .table(Entity)
            .value(Column::Color, 0i16)
            .and_where(Column::Color.is_null())
            .to_owned();

        let backfill_position = Query::update()
            .table(Entity)
            .value(Column::Position, "")
            .and_where(Column::Position.is_null())
            .to_owned();

        let backfill_size = Query::update()
            .table(Entity)
            .value(Column::Size, "")
            .and_where(Column::Size.is_null())
            .to_owned();

        let backend = manager.get_database_backend();

        // Actually run the backfill
        let txn = manager.get_connection().begin().await?;
        txn.execute(backend.build(&backfill_object_type)).await?;
        txn.execute(backend.build(&backfill_color)).await?;
        txn.execute(backend.build(&backfill_position)).await?;
        txn.execute(backend.build(&backfill_size)).await?;
        txn.commit().await?;

        // With no nulls left, the columns can be made required.
        if backend == DatabaseBackend::Sqlite {
            // SQLite cannot add constraints to existing columns, so
            // copy all data to a new table
            manager
                .create_table(
                    Table::create()
                        .table(Alias::new(TEMP_OBJECT_TABLE))
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Column::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Column::ObjectType)
                                .small_integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Column::Color).small_integer().not_null())
                        .col(ColumnDef::new(Column::Position).string_len(255).not_null())
                        .col(ColumnDef::new(Column::Size).string_len(255).not_null())
                        .to_owned(),
                )
                .await?;

            let columns = [
                Column::Id.into_iden(),
                Column::ObjectType.into_iden(),
                Column::Color.into_iden(),
                Column::Position.into_iden(),
                Column::Size.into_iden(),
            ];

            let select_objects = Query::select()
                .from(Entity)
                .columns(columns.clone())
                .to_owned();

            let insertion = Query::insert()
                .into_table(Alias::new(TEMP_OBJECT_TABLE))
                .columns(columns.clone())
                .select_from(select_objects)
                .unwrap()
                .to_owned();

            let insertion_stmt = backend.build(&insertion);
            manager.get_connection().execute(insertion_stmt).await?;

            manager
                .drop_table(Table::drop().table(Entity).to_owned())
                .await?;

            manager
                .rename_table(
                    Table::rename()
                        .table(Alias::new(TEMP_OBJECT_TABLE), Entity)
                        .to_owned(),
                )
                .await?;
        } else {
            // Add the constraints in place
            manager
                .alter_table(
                    Table::alter()
                        .table(Entity)
                        .modify_column(
                            ColumnDef::new(Column::ObjectType)
                                .small_integer()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .alter_table(
                    Table::alter()
                        .table(Entity)
                        .modify_column(ColumnDef::new(Column::Color).small_integer().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .alter_table(
                    Table::alter()
                        .table(Entity)
                        .modify_column(ColumnDef::new(Column::Position).string_len(255).not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .alter_table(
                    Table::alter()
                        .table(Entity)
                        .modify_column(ColumnDef::new(Column::Size).string_len(255).not_null())
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}
