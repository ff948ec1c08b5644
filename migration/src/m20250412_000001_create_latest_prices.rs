use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LatestPrices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LatestPrices::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LatestPrices::ItemId).integer().not_null())
                    .col(ColumnDef::new(LatestPrices::LowPrice).big_integer().not_null())
                    .col(ColumnDef::new(LatestPrices::HighPrice).big_integer().not_null())
                    .col(ColumnDef::new(LatestPrices::Timestamp).timestamp().not_null())
                    .col(
                        ColumnDef::new(LatestPrices::Created)
                            .timestamp()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .col(
                        ColumnDef::new(LatestPrices::Updated)
                            .timestamp()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_latest_prices_item_id")
                            .from(LatestPrices::Table, LatestPrices::ItemId)
                            .to(Items::Table, Items::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Composite index for newest-per-item lookups: (item_id, timestamp DESC)
        manager
            .create_index(
                Index::create()
                    .name("idx_latest_prices_item_time")
                    .table(LatestPrices::Table)
                    .col(LatestPrices::ItemId)
                    .col((LatestPrices::Timestamp, IndexOrder::Desc))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LatestPrices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum LatestPrices {
    Table,
    Id,
    ItemId,
    LowPrice,
    HighPrice,
    Timestamp,
    Created,
    Updated,
}

#[derive(Iden)]
enum Items {
    Table,
    Id,
}
