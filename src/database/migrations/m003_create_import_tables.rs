use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ImportMappings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ImportMappings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ImportMappings::Name).string().not_null())
                    .col(ColumnDef::new(ImportMappings::JobType).string().not_null())
                    .col(ColumnDef::new(ImportMappings::SourceHash).string())
                    .col(ColumnDef::new(ImportMappings::ConfigJson).text().not_null())
                    .col(ColumnDef::new(ImportMappings::CreatedById).integer())
                    .col(ColumnDef::new(ImportMappings::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(ImportMappings::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_import_mappings_job_type")
                    .table(ImportMappings::Table)
                    .col(ImportMappings::JobType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_import_mappings_source_hash")
                    .table(ImportMappings::Table)
                    .col(ImportMappings::SourceHash)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ImportJobs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ImportJobs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ImportJobs::JobType).string().not_null())
                    .col(ColumnDef::new(ImportJobs::FileName).string().not_null())
                    .col(ColumnDef::new(ImportJobs::FilePath).string().not_null())
                    .col(ColumnDef::new(ImportJobs::MimeType).string())
                    .col(
                        ColumnDef::new(ImportJobs::Status)
                            .string()
                            .not_null()
                            .default("UPLOADED"),
                    )
                    .col(
                        ColumnDef::new(ImportJobs::RowCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ImportJobs::SuccessCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ImportJobs::ErrorCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(ImportJobs::ErrorRows).text())
                    .col(ColumnDef::new(ImportJobs::ErrorMessage).string())
                    .col(ColumnDef::new(ImportJobs::MappingId).integer())
                    .col(ColumnDef::new(ImportJobs::CreatedById).integer())
                    .col(ColumnDef::new(ImportJobs::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(ImportJobs::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_import_jobs_mapping_id")
                            .from(ImportJobs::Table, ImportJobs::MappingId)
                            .to(ImportMappings::Table, ImportMappings::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_import_jobs_status")
                    .table(ImportJobs::Table)
                    .col(ImportJobs::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_import_jobs_job_type")
                    .table(ImportJobs::Table)
                    .col(ImportJobs::JobType)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_import_jobs_job_type").to_owned())
            .await
            .ok();
        manager
            .drop_index(Index::drop().name("idx_import_jobs_status").to_owned())
            .await
            .ok();
        manager
            .drop_index(Index::drop().name("idx_import_mappings_source_hash").to_owned())
            .await
            .ok();
        manager
            .drop_index(Index::drop().name("idx_import_mappings_job_type").to_owned())
            .await
            .ok();

        manager
            .drop_table(Table::drop().table(ImportJobs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ImportMappings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ImportMappings {
    Table,
    Id,
    Name,
    JobType,
    SourceHash,
    ConfigJson,
    CreatedById,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ImportJobs {
    Table,
    Id,
    JobType,
    FileName,
    FilePath,
    MimeType,
    Status,
    RowCount,
    SuccessCount,
    ErrorCount,
    ErrorRows,
    ErrorMessage,
    MappingId,
    CreatedById,
    CreatedAt,
    UpdatedAt,
}
