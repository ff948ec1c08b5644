use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create items table. The id comes from the game data export, so no
        // auto_increment on the primary key.
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Items::Id).integer().not_null().primary_key())
                    .col(ColumnDef::new(Items::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Items::Market).integer().not_null())
                    .col(ColumnDef::new(Items::Limit).integer().not_null())
                    .col(ColumnDef::new(Items::Members).boolean().not_null())
                    .col(ColumnDef::new(Items::HighAlch).integer().not_null())
                    .col(ColumnDef::new(Items::LowAlch).integer().not_null())
                    .col(
                        ColumnDef::new(Items::Created)
                            .timestamp()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .col(
                        ColumnDef::new(Items::Updated)
                            .timestamp()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique name; materials reference items by name
        manager
            .create_index(
                Index::create()
                    .name("idx_items_name")
                    .table(Items::Table)
                    .col(Items::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Items {
    Table,
    Id,
    Name,
    Market,
    Limit,
    Members,
    HighAlch,
    LowAlch,
    Created,
    Updated,
}
