use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Skills::ProductionId).integer().not_null())
                    .col(ColumnDef::new(Skills::Experience).integer().not_null())
                    .col(ColumnDef::new(Skills::Level).integer().not_null())
                    .col(ColumnDef::new(Skills::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Skills::Boostable).boolean().not_null())
                    .col(
                        ColumnDef::new(Skills::Created)
                            .timestamp()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .col(
                        ColumnDef::new(Skills::Updated)
                            .timestamp()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_skills_production_id")
                            .from(Skills::Table, Skills::ProductionId)
                            .to(Productions::Table, Productions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_skills_production_id")
                    .table(Skills::Table)
                    .col(Skills::ProductionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Skills {
    Table,
    Id,
    ProductionId,
    Experience,
    Level,
    Name,
    Boostable,
    Created,
    Updated,
}

#[derive(Iden)]
enum Productions {
    Table,
    Id,
}
