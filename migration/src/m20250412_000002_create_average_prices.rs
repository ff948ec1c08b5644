use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AveragePrices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AveragePrices::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AveragePrices::ItemId).integer().not_null())
                    .col(ColumnDef::new(AveragePrices::LowPrice).big_integer().not_null())
                    .col(ColumnDef::new(AveragePrices::HighPrice).big_integer().not_null())
                    .col(ColumnDef::new(AveragePrices::LowVolume).big_integer().not_null())
                    .col(ColumnDef::new(AveragePrices::HighVolume).big_integer().not_null())
                    .col(ColumnDef::new(AveragePrices::Timestamp).timestamp().not_null())
                    .col(
                        ColumnDef::new(AveragePrices::Created)
                            .timestamp()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .col(
                        ColumnDef::new(AveragePrices::Updated)
                            .timestamp()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_average_prices_item_id")
                            .from(AveragePrices::Table, AveragePrices::ItemId)
                            .to(Items::Table, Items::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One averaged observation per minute bucket across the table
        manager
            .create_index(
                Index::create()
                    .name("idx_average_prices_timestamp")
                    .table(AveragePrices::Table)
                    .col(AveragePrices::Timestamp)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_average_prices_item_id")
                    .table(AveragePrices::Table)
                    .col(AveragePrices::ItemId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AveragePrices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum AveragePrices {
    Table,
    Id,
    ItemId,
    LowPrice,
    HighPrice,
    LowVolume,
    HighVolume,
    Timestamp,
    Created,
    Updated,
}

#[derive(Iden)]
enum Items {
    Table,
    Id,
}
