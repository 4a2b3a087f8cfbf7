use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut slug = ColumnDef::new(QrCode::Slug);
        slug.string().not_null().primary_key();
        // MySQL 默认排序规则不区分大小写，slug 需要精确匹配
        if manager.get_database_backend() == sea_orm::DatabaseBackend::MySql {
            slug.extra("COLLATE utf8mb4_bin");
        }

        manager
            .create_table(
                Table::create()
                    .table(QrCode::Table)
                    .if_not_exists()
                    .col(&mut slug)
                    .col(
                        ColumnDef::new(QrCode::Title)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(QrCode::RedirectUrl).text().not_null())
                    .col(
                        ColumnDef::new(QrCode::VisitCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(QrCode::OwnerId).string().not_null())
                    .col(
                        ColumnDef::new(QrCode::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 按所有者列出时使用
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_qr_codes_owner_id")
                    .table(QrCode::Table)
                    .col(QrCode::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_qr_codes_owner_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(QrCode::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum QrCode {
    #[sea_orm(iden = "qr_codes")]
    Table,
    Slug,
    Title,
    RedirectUrl,
    VisitCount,
    OwnerId,
    CreatedAt,
}
