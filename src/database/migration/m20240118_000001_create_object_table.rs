use sea_orm_migration::prelude::*;

use crate::database::entity::object::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240118_000001_create_object_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The original table layout, as created by the first editor
        // release. All attribute columns were nullable.
        manager
            .create_table(
                Table::create()
                    .table(Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Column::ObjectType).small_integer().null())
                    .col(ColumnDef::new(Column::Color).small_integer().null())
                    .col(ColumnDef::new(Column::Position).string_len(255).null())
                    .col(ColumnDef::new(Column::Size).string_len(255).null())
                    .to_owned(),
            )
            .await
    }
}
