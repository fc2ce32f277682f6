use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ventures::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ventures::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Ventures::Name).string().not_null())
                    .col(ColumnDef::new(Ventures::VentureType).string().not_null())
                    .col(
                        ColumnDef::new(Ventures::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Ventures::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HotelProperties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HotelProperties::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HotelProperties::VentureId).integer().not_null())
                    .col(ColumnDef::new(HotelProperties::Name).string().not_null())
                    .col(ColumnDef::new(HotelProperties::City).string())
                    .col(ColumnDef::new(HotelProperties::State).string())
                    .col(ColumnDef::new(HotelProperties::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_properties_venture_id")
                            .from(HotelProperties::Table, HotelProperties::VentureId)
                            .to(Ventures::Table, Ventures::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Loads::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Loads::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Loads::VentureId).integer().not_null())
                    .col(ColumnDef::new(Loads::Reference).string().not_null())
                    .col(
                        ColumnDef::new(Loads::LoadStatus)
                            .string()
                            .not_null()
                            .default("OPEN"),
                    )
                    .col(ColumnDef::new(Loads::PickupDate).date())
                    .col(ColumnDef::new(Loads::DropDate).date())
                    .col(ColumnDef::new(Loads::ShipperName).string())
                    .col(ColumnDef::new(Loads::CustomerName).string())
                    .col(ColumnDef::new(Loads::PickupCity).string())
                    .col(ColumnDef::new(Loads::PickupState).string())
                    .col(ColumnDef::new(Loads::PickupZip).string())
                    .col(ColumnDef::new(Loads::DropCity).string())
                    .col(ColumnDef::new(Loads::DropState).string())
                    .col(ColumnDef::new(Loads::DropZip).string())
                    .col(ColumnDef::new(Loads::EquipmentType).string())
                    .col(ColumnDef::new(Loads::WeightLbs).double())
                    .col(ColumnDef::new(Loads::Rate).double())
                    .col(ColumnDef::new(Loads::CreatedById).integer())
                    .col(ColumnDef::new(Loads::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_loads_venture_id")
                            .from(Loads::Table, Loads::VentureId)
                            .to(Ventures::Table, Ventures::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LogisticsShippers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LogisticsShippers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LogisticsShippers::VentureId).integer().not_null())
                    .col(ColumnDef::new(LogisticsShippers::Name).string().not_null())
                    .col(ColumnDef::new(LogisticsShippers::ContactName).string())
                    .col(ColumnDef::new(LogisticsShippers::Email).string())
                    .col(ColumnDef::new(LogisticsShippers::Phone).string())
                    .col(ColumnDef::new(LogisticsShippers::AddressLine1).string())
                    .col(ColumnDef::new(LogisticsShippers::City).string())
                    .col(ColumnDef::new(LogisticsShippers::State).string())
                    .col(ColumnDef::new(LogisticsShippers::PostalCode).string())
                    .col(ColumnDef::new(LogisticsShippers::Notes).string())
                    .col(ColumnDef::new(LogisticsShippers::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_logistics_shippers_venture_id")
                            .from(LogisticsShippers::Table, LogisticsShippers::VentureId)
                            .to(Ventures::Table, Ventures::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Carriers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Carriers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Carriers::Name).string().not_null())
                    .col(ColumnDef::new(Carriers::McNumber).string())
                    .col(ColumnDef::new(Carriers::DotNumber).string())
                    .col(ColumnDef::new(Carriers::Phone).string())
                    .col(ColumnDef::new(Carriers::Email).string())
                    .col(ColumnDef::new(Carriers::AddressLine1).string())
                    .col(ColumnDef::new(Carriers::City).string())
                    .col(ColumnDef::new(Carriers::State).string())
                    .col(ColumnDef::new(Carriers::PostalCode).string())
                    .col(ColumnDef::new(Carriers::EquipmentTypes).string())
                    .col(ColumnDef::new(Carriers::LanesJson).text())
                    .col(ColumnDef::new(Carriers::Notes).string())
                    .col(ColumnDef::new(Carriers::CreatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_loads_venture_id")
                    .table(Loads::Table)
                    .col(Loads::VentureId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_loads_reference")
                    .table(Loads::Table)
                    .col(Loads::Reference)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_loads_reference").to_owned())
            .await
            .ok();
        manager
            .drop_index(Index::drop().name("idx_loads_venture_id").to_owned())
            .await
            .ok();

        manager
            .drop_table(Table::drop().table(Carriers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LogisticsShippers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Loads::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HotelProperties::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Ventures::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Ventures {
    Table,
    Id,
    Name,
    VentureType,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum HotelProperties {
    Table,
    Id,
    VentureId,
    Name,
    City,
    State,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Loads {
    Table,
    Id,
    VentureId,
    Reference,
    LoadStatus,
    PickupDate,
    DropDate,
    ShipperName,
    CustomerName,
    PickupCity,
    PickupState,
    PickupZip,
    DropCity,
    DropState,
    DropZip,
    EquipmentType,
    WeightLbs,
    Rate,
    CreatedById,
    CreatedAt,
}

#[derive(DeriveIden)]
enum LogisticsShippers {
    Table,
    Id,
    VentureId,
    Name,
    ContactName,
    Email,
    Phone,
    AddressLine1,
    City,
    State,
    PostalCode,
    Notes,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Carriers {
    Table,
    Id,
    Name,
    McNumber,
    DotNumber,
    Phone,
    Email,
    AddressLine1,
    City,
    State,
    PostalCode,
    EquipmentTypes,
    LanesJson,
    Notes,
    CreatedAt,
}
