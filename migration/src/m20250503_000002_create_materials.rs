use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Materials reference the consumed item by name, not id, because the
        // recipe export keys on display names. items.name carries a unique
        // index so the foreign key is valid.
        manager
            .create_table(
                Table::create()
                    .table(Materials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Materials::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Materials::ProductionId).integer().not_null())
                    .col(ColumnDef::new(Materials::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Materials::Quantity).integer().not_null())
                    .col(
                        ColumnDef::new(Materials::Created)
                            .timestamp()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .col(
                        ColumnDef::new(Materials::Updated)
                            .timestamp()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_materials_production_id")
                            .from(Materials::Table, Materials::ProductionId)
                            .to(Productions::Table, Productions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_materials_item_name")
                            .from(Materials::Table, Materials::Name)
                            .to(Items::Table, Items::Name)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_materials_production_id")
                    .table(Materials::Table)
                    .col(Materials::ProductionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Materials::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Materials {
    Table,
    Id,
    ProductionId,
    Name,
    Quantity,
    Created,
    Updated,
}

#[derive(Iden)]
enum Productions {
    Table,
    Id,
}

#[derive(Iden)]
enum Items {
    Table,
    Name,
}
