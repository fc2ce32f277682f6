use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HotelKpiDaily::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HotelKpiDaily::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HotelKpiDaily::HotelId).integer().not_null())
                    .col(ColumnDef::new(HotelKpiDaily::VentureId).integer())
                    .col(ColumnDef::new(HotelKpiDaily::Date).date().not_null())
                    .col(ColumnDef::new(HotelKpiDaily::OccupancyPct).double())
                    .col(ColumnDef::new(HotelKpiDaily::Adr).double())
                    .col(ColumnDef::new(HotelKpiDaily::Revpar).double())
                    .col(ColumnDef::new(HotelKpiDaily::RoomRevenue).double())
                    .col(ColumnDef::new(HotelKpiDaily::RoomsSold).integer())
                    .col(ColumnDef::new(HotelKpiDaily::RoomsAvailable).integer())
                    .col(ColumnDef::new(HotelKpiDaily::TotalRevenue).double())
                    .col(ColumnDef::new(HotelKpiDaily::OtherRevenue).double())
                    .col(ColumnDef::new(HotelKpiDaily::GrossOperatingProfit).double())
                    .col(ColumnDef::new(HotelKpiDaily::Goppar).double())
                    .col(ColumnDef::new(HotelKpiDaily::Cancellations).integer())
                    .col(ColumnDef::new(HotelKpiDaily::NoShows).integer())
                    .col(ColumnDef::new(HotelKpiDaily::Walkins).integer())
                    .col(ColumnDef::new(HotelKpiDaily::Complaints).integer())
                    .col(ColumnDef::new(HotelKpiDaily::RoomsOutOfOrder).integer())
                    .col(ColumnDef::new(HotelKpiDaily::ReviewScore).double())
                    .col(ColumnDef::new(HotelKpiDaily::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(HotelKpiDaily::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_hotel_kpi_daily_hotel_date")
                    .table(HotelKpiDaily::Table)
                    .col(HotelKpiDaily::HotelId)
                    .col(HotelKpiDaily::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HotelDailyReports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HotelDailyReports::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HotelDailyReports::HotelId).integer().not_null())
                    .col(ColumnDef::new(HotelDailyReports::Date).date().not_null())
                    .col(ColumnDef::new(HotelDailyReports::TotalRoom).integer())
                    .col(ColumnDef::new(HotelDailyReports::RoomSold).integer())
                    .col(ColumnDef::new(HotelDailyReports::Cash).double())
                    .col(ColumnDef::new(HotelDailyReports::Credit).double())
                    .col(ColumnDef::new(HotelDailyReports::Online).double())
                    .col(ColumnDef::new(HotelDailyReports::Refund).double())
                    .col(ColumnDef::new(HotelDailyReports::Total).double())
                    .col(ColumnDef::new(HotelDailyReports::Dues).double())
                    .col(ColumnDef::new(HotelDailyReports::LostDues).double())
                    .col(ColumnDef::new(HotelDailyReports::Occupancy).double())
                    .col(ColumnDef::new(HotelDailyReports::Adr).double())
                    .col(ColumnDef::new(HotelDailyReports::Revpar).double())
                    .col(
                        ColumnDef::new(HotelDailyReports::HighLossFlag)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(HotelDailyReports::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(HotelDailyReports::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_hotel_daily_reports_hotel_date")
                    .table(HotelDailyReports::Table)
                    .col(HotelDailyReports::HotelId)
                    .col(HotelDailyReports::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FreightKpiDaily::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FreightKpiDaily::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FreightKpiDaily::VentureId).integer().not_null())
                    .col(ColumnDef::new(FreightKpiDaily::Date).date().not_null())
                    .col(ColumnDef::new(FreightKpiDaily::LoadsInbound).integer())
                    .col(ColumnDef::new(FreightKpiDaily::LoadsQuoted).integer())
                    .col(ColumnDef::new(FreightKpiDaily::LoadsCovered).integer())
                    .col(ColumnDef::new(FreightKpiDaily::LoadsLost).integer())
                    .col(ColumnDef::new(FreightKpiDaily::TotalRevenue).double())
                    .col(ColumnDef::new(FreightKpiDaily::TotalCost).double())
                    .col(ColumnDef::new(FreightKpiDaily::TotalProfit).double())
                    .col(ColumnDef::new(FreightKpiDaily::AvgMarginPct).double())
                    .col(ColumnDef::new(FreightKpiDaily::ActiveShippers).integer())
                    .col(ColumnDef::new(FreightKpiDaily::NewShippers).integer())
                    .col(ColumnDef::new(FreightKpiDaily::ChurnedShippers).integer())
                    .col(ColumnDef::new(FreightKpiDaily::ReactivatedShippers).integer())
                    .col(ColumnDef::new(FreightKpiDaily::AtRiskShippers).integer())
                    .col(ColumnDef::new(FreightKpiDaily::ActiveCarriers).integer())
                    .col(ColumnDef::new(FreightKpiDaily::NewCarriers).integer())
                    .col(ColumnDef::new(FreightKpiDaily::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(FreightKpiDaily::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_freight_kpi_daily_venture_date")
                    .table(FreightKpiDaily::Table)
                    .col(FreightKpiDaily::VentureId)
                    .col(FreightKpiDaily::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BpoDailyMetrics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BpoDailyMetrics::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BpoDailyMetrics::CampaignId).integer().not_null())
                    .col(ColumnDef::new(BpoDailyMetrics::Date).date().not_null())
                    .col(ColumnDef::new(BpoDailyMetrics::OutboundCalls).integer())
                    .col(ColumnDef::new(BpoDailyMetrics::HandledCalls).integer())
                    .col(ColumnDef::new(BpoDailyMetrics::TalkTimeMin).double())
                    .col(ColumnDef::new(BpoDailyMetrics::LeadsCreated).integer())
                    .col(ColumnDef::new(BpoDailyMetrics::DemosBooked).integer())
                    .col(ColumnDef::new(BpoDailyMetrics::SalesClosed).integer())
                    .col(ColumnDef::new(BpoDailyMetrics::FteCount).double())
                    .col(ColumnDef::new(BpoDailyMetrics::Revenue).double())
                    .col(ColumnDef::new(BpoDailyMetrics::Cost).double())
                    .col(ColumnDef::new(BpoDailyMetrics::AvgQaScore).double())
                    .col(ColumnDef::new(BpoDailyMetrics::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(BpoDailyMetrics::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_bpo_daily_metrics_campaign_date")
                    .table(BpoDailyMetrics::Table)
                    .col(BpoDailyMetrics::CampaignId)
                    .col(BpoDailyMetrics::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HotelDisputes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HotelDisputes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HotelDisputes::PropertyId).integer().not_null())
                    .col(ColumnDef::new(HotelDisputes::DisputeType).string().not_null())
                    .col(ColumnDef::new(HotelDisputes::Channel).string())
                    .col(
                        ColumnDef::new(HotelDisputes::Status)
                            .string()
                            .not_null()
                            .default("NEW"),
                    )
                    .col(ColumnDef::new(HotelDisputes::DisputedAmount).double())
                    .col(ColumnDef::new(HotelDisputes::OriginalAmount).double())
                    .col(ColumnDef::new(HotelDisputes::ReservationId).string())
                    .col(ColumnDef::new(HotelDisputes::FolioNumber).string())
                    .col(ColumnDef::new(HotelDisputes::GuestName).string())
                    .col(ColumnDef::new(HotelDisputes::GuestEmail).string())
                    .col(ColumnDef::new(HotelDisputes::GuestPhone).string())
                    .col(ColumnDef::new(HotelDisputes::PostedDate).date())
                    .col(ColumnDef::new(HotelDisputes::StayFrom).date())
                    .col(ColumnDef::new(HotelDisputes::StayTo).date())
                    .col(ColumnDef::new(HotelDisputes::EvidenceDueDate).date())
                    .col(ColumnDef::new(HotelDisputes::Reason).string())
                    .col(ColumnDef::new(HotelDisputes::CreatedById).integer())
                    .col(ColumnDef::new(HotelDisputes::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_disputes_property_id")
                            .from(HotelDisputes::Table, HotelDisputes::PropertyId)
                            .to(HotelProperties::Table, HotelProperties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HotelReviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HotelReviews::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HotelReviews::HotelId).integer().not_null())
                    .col(ColumnDef::new(HotelReviews::Rating).double())
                    .col(ColumnDef::new(HotelReviews::Source).string())
                    .col(ColumnDef::new(HotelReviews::ReviewerName).string())
                    .col(ColumnDef::new(HotelReviews::ReviewDate).date())
                    .col(ColumnDef::new(HotelReviews::Title).string())
                    .col(ColumnDef::new(HotelReviews::Comment).text())
                    .col(ColumnDef::new(HotelReviews::ResponseText).text())
                    .col(ColumnDef::new(HotelReviews::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_reviews_hotel_id")
                            .from(HotelReviews::Table, HotelReviews::HotelId)
                            .to(HotelProperties::Table, HotelProperties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HotelReviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HotelDisputes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BpoDailyMetrics::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FreightKpiDaily::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HotelDailyReports::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HotelKpiDaily::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum HotelKpiDaily {
    Table,
    Id,
    HotelId,
    VentureId,
    Date,
    OccupancyPct,
    Adr,
    Revpar,
    RoomRevenue,
    RoomsSold,
    RoomsAvailable,
    TotalRevenue,
    OtherRevenue,
    GrossOperatingProfit,
    Goppar,
    Cancellations,
    NoShows,
    Walkins,
    Complaints,
    RoomsOutOfOrder,
    ReviewScore,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum HotelDailyReports {
    Table,
    Id,
    HotelId,
    Date,
    TotalRoom,
    RoomSold,
    Cash,
    Credit,
    Online,
    Refund,
    Total,
    Dues,
    LostDues,
    Occupancy,
    Adr,
    Revpar,
    HighLossFlag,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum FreightKpiDaily {
    Table,
    Id,
    VentureId,
    Date,
    LoadsInbound,
    LoadsQuoted,
    LoadsCovered,
    LoadsLost,
    TotalRevenue,
    TotalCost,
    TotalProfit,
    AvgMarginPct,
    ActiveShippers,
    NewShippers,
    ChurnedShippers,
    ReactivatedShippers,
    AtRiskShippers,
    ActiveCarriers,
    NewCarriers,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum BpoDailyMetrics {
    Table,
    Id,
    CampaignId,
    Date,
    OutboundCalls,
    HandledCalls,
    TalkTimeMin,
    LeadsCreated,
    DemosBooked,
    SalesClosed,
    FteCount,
    Revenue,
    Cost,
    AvgQaScore,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum HotelDisputes {
    Table,
    Id,
    PropertyId,
    DisputeType,
    Channel,
    Status,
    DisputedAmount,
    OriginalAmount,
    ReservationId,
    FolioNumber,
    GuestName,
    GuestEmail,
    GuestPhone,
    PostedDate,
    StayFrom,
    StayTo,
    EvidenceDueDate,
    Reason,
    CreatedById,
    CreatedAt,
}

#[derive(DeriveIden)]
enum HotelReviews {
    Table,
    Id,
    HotelId,
    Rating,
    Source,
    ReviewerName,
    ReviewDate,
    Title,
    Comment,
    ResponseText,
    CreatedAt,
}

#[derive(DeriveIden)]
enum HotelProperties {
    Table,
    Id,
}
