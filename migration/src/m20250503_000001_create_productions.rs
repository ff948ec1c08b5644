use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Productions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Productions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Productions::ItemId).integer().not_null())
                    .col(ColumnDef::new(Productions::Ticks).integer().not_null())
                    .col(ColumnDef::new(Productions::Facilities).string_len(100).not_null())
                    .col(ColumnDef::new(Productions::Members).boolean().not_null())
                    .col(ColumnDef::new(Productions::Cost).big_integer().not_null())
                    .col(ColumnDef::new(Productions::Quantity).integer().not_null())
                    .col(
                        ColumnDef::new(Productions::Created)
                            .timestamp()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .col(
                        ColumnDef::new(Productions::Updated)
                            .timestamp()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_productions_item_id")
                            .from(Productions::Table, Productions::ItemId)
                            .to(Items::Table, Items::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_productions_item_id")
                    .table(Productions::Table)
                    .col(Productions::ItemId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Productions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Productions {
    Table,
    Id,
    ItemId,
    Ticks,
    Facilities,
    Members,
    Cost,
    Quantity,
    Created,
    Updated,
}

#[derive(Iden)]
enum Items {
    Table,
    Id,
}
