use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DailyPrices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DailyPrices::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DailyPrices::ItemId).integer().not_null())
                    .col(ColumnDef::new(DailyPrices::Price).big_integer().not_null())
                    .col(ColumnDef::new(DailyPrices::Volume).big_integer().not_null())
                    .col(ColumnDef::new(DailyPrices::Date).date().not_null())
                    .col(
                        ColumnDef::new(DailyPrices::Created)
                            .timestamp()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .col(
                        ColumnDef::new(DailyPrices::Updated)
                            .timestamp()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_daily_prices_item_id")
                            .from(DailyPrices::Table, DailyPrices::ItemId)
                            .to(Items::Table, Items::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One daily observation per calendar date across the table
        manager
            .create_index(
                Index::create()
                    .name("idx_daily_prices_date")
                    .table(DailyPrices::Table)
                    .col(DailyPrices::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_daily_prices_item_id")
                    .table(DailyPrices::Table)
                    .col(DailyPrices::ItemId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DailyPrices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DailyPrices {
    Table,
    Id,
    ItemId,
    Price,
    Volume,
    Date,
    Created,
    Updated,
}

#[derive(Iden)]
enum Items {
    Table,
    Id,
}
