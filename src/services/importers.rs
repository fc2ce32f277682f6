//! Per-type row importers for the commit stage.
//!
//! Each importer takes one coerced record and writes the corresponding
//! domain row. Create-style targets (loads, shippers, carriers, disputes,
//! reviews) insert unconditionally; metric tables upsert on their natural
//! key so re-importing a corrected file overwrites earlier figures.
//!
//! Importers return `ImportError::CommitFailed` for row-level problems;
//! the commit loop records the message and moves on.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::database::entities::{
    bpo_daily_metrics, carriers, freight_kpi_daily, hotel_daily_reports, hotel_disputes,
    hotel_kpi_daily, hotel_properties, hotel_reviews, loads, logistics_shippers,
};
use crate::errors::{ImportError, ImportResult};
use crate::import::Record;

use super::venture_resolver::VentureResolver;

fn row_error(message: impl Into<String>) -> ImportError {
    ImportError::CommitFailed(message.into())
}

/// Non-zero integer from the first matching field. Zero ids are treated
/// as absent, matching the validator's presence rule for foreign keys.
fn id_field(record: &Record, names: &[&str]) -> Option<i32> {
    record.first_int(names).filter(|id| *id != 0)
}

fn int_field(record: &Record, names: &[&str]) -> Option<i32> {
    record.first_number(names).map(|n| n as i32)
}

async fn find_property(
    db: &DatabaseConnection,
    id: i32,
) -> ImportResult<hotel_properties::Model> {
    hotel_properties::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| row_error(format!("Hotel property {} not found", id)))
}

pub async fn import_load(
    db: &DatabaseConnection,
    resolver: &dyn VentureResolver,
    record: &Record,
    created_by_id: Option<i32>,
) -> ImportResult<()> {
    let venture_id = resolver.resolve(id_field(record, &["ventureId"])).await?;

    let reference = record
        .first_text(&["referenceNumber", "reference"])
        .unwrap_or_else(|| format!("IMP-{}", Utc::now().timestamp_millis()));

    loads::ActiveModel {
        venture_id: Set(venture_id),
        reference: Set(reference),
        load_status: Set("OPEN".to_string()),
        pickup_date: Set(record.date("pickupDate")),
        drop_date: Set(record.date("deliveryDate")),
        shipper_name: Set(record.text("shipperName")),
        customer_name: Set(record.text("customerName")),
        pickup_city: Set(record.first_text(&["originCity", "pickupCity"])),
        pickup_state: Set(record.first_text(&["originState", "pickupState"])),
        pickup_zip: Set(record.first_text(&["originZip", "pickupZip"])),
        drop_city: Set(record.first_text(&["destCity", "dropCity"])),
        drop_state: Set(record.first_text(&["destState", "dropState"])),
        drop_zip: Set(record.first_text(&["destZip", "dropZip"])),
        equipment_type: Set(record.first_text(&["equipment", "equipmentType"])),
        weight_lbs: Set(record.first_number(&["weight", "weightLbs"])),
        rate: Set(record.first_number(&["customerRate", "rate"])),
        created_by_id: Set(created_by_id),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(())
}

pub async fn import_shipper(
    db: &DatabaseConnection,
    resolver: &dyn VentureResolver,
    record: &Record,
) -> ImportResult<()> {
    let venture_id = resolver.resolve(id_field(record, &["ventureId"])).await?;
    let name = record
        .text("name")
        .ok_or_else(|| row_error("name is required"))?;

    logistics_shippers::ActiveModel {
        venture_id: Set(venture_id),
        name: Set(name),
        contact_name: Set(record.first_text(&["contact", "contactName"])),
        email: Set(record.text("email")),
        phone: Set(record.text("phone")),
        address_line1: Set(record.first_text(&["address", "addressLine1"])),
        city: Set(record.text("city")),
        state: Set(record.text("state")),
        postal_code: Set(record.first_text(&["zip", "postalCode"])),
        notes: Set(record.text("notes")),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(())
}

pub async fn import_carrier(db: &DatabaseConnection, record: &Record) -> ImportResult<()> {
    let name = record
        .text("name")
        .ok_or_else(|| row_error("name is required"))?;

    carriers::ActiveModel {
        name: Set(name),
        mc_number: Set(record.text("mcNumber")),
        dot_number: Set(record.text("dotNumber")),
        phone: Set(record.text("phone")),
        email: Set(record.text("email")),
        address_line1: Set(record.first_text(&["address", "addressLine1"])),
        city: Set(record.text("city")),
        state: Set(record.text("state")),
        postal_code: Set(record.first_text(&["zip", "postalCode"])),
        equipment_types: Set(record.first_text(&["equipment", "equipmentTypes"])),
        lanes_json: Set(record.text("lanes")),
        notes: Set(record.text("notes")),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(())
}

pub async fn import_hotel_kpi(db: &DatabaseConnection, record: &Record) -> ImportResult<()> {
    let hotel_id = id_field(record, &["hotelId", "propertyId"]);
    let date = record.date("date");
    let (Some(hotel_id), Some(date)) = (hotel_id, date) else {
        return Err(row_error("hotelId/propertyId and date are required"));
    };

    let property = find_property(db, hotel_id).await?;
    let venture_id = id_field(record, &["ventureId"]).unwrap_or(property.venture_id);

    let existing = hotel_kpi_daily::Entity::find()
        .filter(hotel_kpi_daily::Column::HotelId.eq(hotel_id))
        .filter(hotel_kpi_daily::Column::Date.eq(date))
        .one(db)
        .await?;

    let now = Utc::now();
    match existing {
        Some(model) => {
            // Update branch: only overwrite fields the file supplied.
            let mut active: hotel_kpi_daily::ActiveModel = model.into();
            if let Some(v) = record.first_number(&["occupancy", "occupancyPct"]) {
                active.occupancy_pct = Set(Some(v));
            }
            if let Some(v) = record.number("adr") {
                active.adr = Set(Some(v));
            }
            if let Some(v) = record.number("revpar") {
                active.revpar = Set(Some(v));
            }
            if let Some(v) = record.number("roomRevenue") {
                active.room_revenue = Set(Some(v));
            }
            if let Some(v) = int_field(record, &["roomsSold"]) {
                active.rooms_sold = Set(Some(v));
            }
            if let Some(v) = int_field(record, &["roomsAvailable"]) {
                active.rooms_available = Set(Some(v));
            }
            if let Some(v) = record.number("totalRevenue") {
                active.total_revenue = Set(Some(v));
            }
            if let Some(v) = record.number("otherRevenue") {
                active.other_revenue = Set(Some(v));
            }
            if let Some(v) = record.number("grossOperatingProfit") {
                active.gross_operating_profit = Set(Some(v));
            }
            if let Some(v) = record.number("goppar") {
                active.goppar = Set(Some(v));
            }
            if let Some(v) = int_field(record, &["cancellations"]) {
                active.cancellations = Set(Some(v));
            }
            if let Some(v) = int_field(record, &["noShows"]) {
                active.no_shows = Set(Some(v));
            }
            if let Some(v) = int_field(record, &["walkins"]) {
                active.walkins = Set(Some(v));
            }
            if let Some(v) = int_field(record, &["complaints"]) {
                active.complaints = Set(Some(v));
            }
            if let Some(v) = int_field(record, &["roomsOutOfOrder"]) {
                active.rooms_out_of_order = Set(Some(v));
            }
            if let Some(v) = record.number("reviewScore") {
                active.review_score = Set(Some(v));
            }
            active.updated_at = Set(now);
            active.update(db).await?;
        }
        None => {
            hotel_kpi_daily::ActiveModel {
                hotel_id: Set(hotel_id),
                venture_id: Set(Some(venture_id)),
                date: Set(date),
                occupancy_pct: Set(Some(
                    record.first_number(&["occupancy", "occupancyPct"]).unwrap_or(0.0),
                )),
                adr: Set(Some(record.number("adr").unwrap_or(0.0))),
                revpar: Set(Some(record.number("revpar").unwrap_or(0.0))),
                room_revenue: Set(Some(record.number("roomRevenue").unwrap_or(0.0))),
                rooms_sold: Set(Some(int_field(record, &["roomsSold"]).unwrap_or(0))),
                rooms_available: Set(Some(int_field(record, &["roomsAvailable"]).unwrap_or(0))),
                total_revenue: Set(Some(record.number("totalRevenue").unwrap_or(0.0))),
                other_revenue: Set(Some(record.number("otherRevenue").unwrap_or(0.0))),
                gross_operating_profit: Set(Some(
                    record.number("grossOperatingProfit").unwrap_or(0.0),
                )),
                goppar: Set(Some(record.number("goppar").unwrap_or(0.0))),
                cancellations: Set(Some(int_field(record, &["cancellations"]).unwrap_or(0))),
                no_shows: Set(Some(int_field(record, &["noShows"]).unwrap_or(0))),
                walkins: Set(Some(int_field(record, &["walkins"]).unwrap_or(0))),
                complaints: Set(Some(int_field(record, &["complaints"]).unwrap_or(0))),
                rooms_out_of_order: Set(Some(
                    int_field(record, &["roomsOutOfOrder"]).unwrap_or(0),
                )),
                review_score: Set(record.number("reviewScore")),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
    }

    Ok(())
}

/// Lost dues at or above this absolute amount flag the day.
const LOST_DUES_ABS_THRESHOLD: f64 = 100.0;
/// Lost dues at or above this share of total revenue flag the day.
const LOST_DUES_RATIO_THRESHOLD: f64 = 0.05;

pub async fn import_hotel_daily_report(
    db: &DatabaseConnection,
    record: &Record,
) -> ImportResult<()> {
    let hotel_id = id_field(record, &["hotelId", "propertyId"]);
    let date = record.date("date");
    let (Some(hotel_id), Some(date)) = (hotel_id, date) else {
        return Err(row_error("hotelId and date are required"));
    };

    let property = find_property(db, hotel_id).await?;

    let total_room = int_field(record, &["totalRoom"]).unwrap_or(0);
    let room_sold = int_field(record, &["roomSold"]).unwrap_or(0);
    let cash = record.number("cash").unwrap_or(0.0);
    let credit = record.number("credit").unwrap_or(0.0);
    let online = record.number("online").unwrap_or(0.0);
    let refund = record.number("refund").unwrap_or(0.0);
    let total = record.number("total").unwrap_or(0.0);
    let dues = record.number("dues").unwrap_or(0.0);
    let lost_dues = record.number("lostDues").unwrap_or(0.0);
    let occupancy = record.number("occupancy").unwrap_or(0.0);
    let revpar = record.number("revpar").unwrap_or(0.0);

    // Net ADR excludes lost dues from the day's collected revenue.
    let adr_net = if room_sold > 0 {
        (total - lost_dues) / room_sold as f64
    } else {
        0.0
    };

    let mut high_loss_flag = false;
    if lost_dues > 0.0 && total > 0.0 {
        let ratio = lost_dues / total;
        if lost_dues >= LOST_DUES_ABS_THRESHOLD || ratio >= LOST_DUES_RATIO_THRESHOLD {
            high_loss_flag = true;
        }
    }

    let now = Utc::now();
    let existing = hotel_daily_reports::Entity::find()
        .filter(hotel_daily_reports::Column::HotelId.eq(hotel_id))
        .filter(hotel_daily_reports::Column::Date.eq(date))
        .one(db)
        .await?;

    let mut active = match existing {
        Some(model) => {
            let mut active: hotel_daily_reports::ActiveModel = model.into();
            active.updated_at = Set(now);
            active
        }
        None => hotel_daily_reports::ActiveModel {
            hotel_id: Set(hotel_id),
            date: Set(date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        },
    };
    let is_insert = active.id.is_not_set();

    active.total_room = Set(Some(total_room));
    active.room_sold = Set(Some(room_sold));
    active.cash = Set(Some(cash));
    active.credit = Set(Some(credit));
    active.online = Set(Some(online));
    active.refund = Set(Some(refund));
    active.total = Set(Some(total));
    active.dues = Set(Some(dues));
    active.lost_dues = Set(Some(lost_dues));
    active.occupancy = Set(Some(occupancy));
    active.adr = Set(Some(adr_net));
    active.revpar = Set(Some(revpar));
    active.high_loss_flag = Set(high_loss_flag);

    if is_insert {
        active.insert(db).await?;
    } else {
        active.update(db).await?;
    }

    // Keep the denormalised KPI table in step with the close sheet.
    let rooms_available = total_room;
    let occ_pct = if rooms_available > 0 {
        (room_sold as f64 / rooms_available as f64) * 100.0
    } else {
        0.0
    };
    let revpar_net = if rooms_available > 0 {
        (total - lost_dues) / rooms_available as f64
    } else {
        0.0
    };

    let existing_kpi = hotel_kpi_daily::Entity::find()
        .filter(hotel_kpi_daily::Column::HotelId.eq(hotel_id))
        .filter(hotel_kpi_daily::Column::Date.eq(date))
        .one(db)
        .await?;

    let mut kpi = match existing_kpi {
        Some(model) => {
            let mut active: hotel_kpi_daily::ActiveModel = model.into();
            active.updated_at = Set(now);
            active
        }
        None => hotel_kpi_daily::ActiveModel {
            hotel_id: Set(hotel_id),
            date: Set(date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        },
    };
    let kpi_is_insert = kpi.id.is_not_set();

    kpi.venture_id = Set(Some(property.venture_id));
    kpi.rooms_sold = Set(Some(room_sold));
    kpi.rooms_available = Set(Some(rooms_available));
    kpi.occupancy_pct = Set(Some(occ_pct));
    kpi.room_revenue = Set(Some(total));
    kpi.adr = Set(Some(adr_net));
    kpi.revpar = Set(Some(revpar_net));
    kpi.total_revenue = Set(Some(total));
    kpi.other_revenue = Set(Some(0.0));

    if kpi_is_insert {
        kpi.insert(db).await?;
    } else {
        kpi.update(db).await?;
    }

    Ok(())
}

pub async fn import_freight_kpi(db: &DatabaseConnection, record: &Record) -> ImportResult<()> {
    let venture_id = id_field(record, &["ventureId"]);
    let date = record.date("date");
    let (Some(venture_id), Some(date)) = (venture_id, date) else {
        return Err(row_error("ventureId and date are required"));
    };

    let now = Utc::now();
    let existing = freight_kpi_daily::Entity::find()
        .filter(freight_kpi_daily::Column::VentureId.eq(venture_id))
        .filter(freight_kpi_daily::Column::Date.eq(date))
        .one(db)
        .await?;

    let loads_quoted = int_field(record, &["totalLoads", "loadsQuoted"]);
    let loads_covered = int_field(record, &["coveredLoads", "loadsCovered"]);
    let total_revenue = record.first_number(&["revenue", "totalRevenue"]);
    let total_cost = record.first_number(&["cost", "totalCost"]);
    let total_profit = record.first_number(&["margin", "totalProfit"]);
    let avg_margin_pct = record.first_number(&["marginPercent", "avgMarginPct"]);

    match existing {
        Some(model) => {
            let mut active: freight_kpi_daily::ActiveModel = model.into();
            if let Some(v) = int_field(record, &["loadsInbound"]) {
                active.loads_inbound = Set(Some(v));
            }
            if let Some(v) = loads_quoted {
                active.loads_quoted = Set(Some(v));
            }
            if let Some(v) = loads_covered {
                active.loads_covered = Set(Some(v));
            }
            if let Some(v) = int_field(record, &["loadsLost"]) {
                active.loads_lost = Set(Some(v));
            }
            if let Some(v) = total_revenue {
                active.total_revenue = Set(Some(v));
            }
            if let Some(v) = total_cost {
                active.total_cost = Set(Some(v));
            }
            if let Some(v) = total_profit {
                active.total_profit = Set(Some(v));
            }
            if let Some(v) = avg_margin_pct {
                active.avg_margin_pct = Set(Some(v));
            }
            if let Some(v) = int_field(record, &["activeShippers"]) {
                active.active_shippers = Set(Some(v));
            }
            if let Some(v) = int_field(record, &["newShippers"]) {
                active.new_shippers = Set(Some(v));
            }
            if let Some(v) = int_field(record, &["churnedShippers"]) {
                active.churned_shippers = Set(Some(v));
            }
            if let Some(v) = int_field(record, &["reactivatedShippers"]) {
                active.reactivated_shippers = Set(Some(v));
            }
            if let Some(v) = int_field(record, &["atRiskShippers"]) {
                active.at_risk_shippers = Set(Some(v));
            }
            if let Some(v) = int_field(record, &["activeCarriers"]) {
                active.active_carriers = Set(Some(v));
            }
            if let Some(v) = int_field(record, &["newCarriers"]) {
                active.new_carriers = Set(Some(v));
            }
            active.updated_at = Set(now);
            active.update(db).await?;
        }
        None => {
            freight_kpi_daily::ActiveModel {
                venture_id: Set(venture_id),
                date: Set(date),
                loads_inbound: Set(Some(int_field(record, &["loadsInbound"]).unwrap_or(0))),
                loads_quoted: Set(Some(loads_quoted.unwrap_or(0))),
                loads_covered: Set(Some(loads_covered.unwrap_or(0))),
                loads_lost: Set(Some(int_field(record, &["loadsLost"]).unwrap_or(0))),
                total_revenue: Set(Some(total_revenue.unwrap_or(0.0))),
                total_cost: Set(Some(total_cost.unwrap_or(0.0))),
                total_profit: Set(Some(total_profit.unwrap_or(0.0))),
                avg_margin_pct: Set(Some(avg_margin_pct.unwrap_or(0.0))),
                active_shippers: Set(Some(int_field(record, &["activeShippers"]).unwrap_or(0))),
                new_shippers: Set(Some(int_field(record, &["newShippers"]).unwrap_or(0))),
                churned_shippers: Set(Some(
                    int_field(record, &["churnedShippers"]).unwrap_or(0),
                )),
                reactivated_shippers: Set(Some(
                    int_field(record, &["reactivatedShippers"]).unwrap_or(0),
                )),
                at_risk_shippers: Set(Some(int_field(record, &["atRiskShippers"]).unwrap_or(0))),
                active_carriers: Set(Some(int_field(record, &["activeCarriers"]).unwrap_or(0))),
                new_carriers: Set(Some(int_field(record, &["newCarriers"]).unwrap_or(0))),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
    }

    Ok(())
}

/// Raw channel labels collapse onto the dispute channel taxonomy.
fn normalize_channel(raw: &str) -> String {
    match raw {
        "DIRECT" => "DIRECT_GUEST",
        "BOOKING" | "BOOKING_COM" | "BOOKING.COM" | "EXPEDIA" | "AIRBNB" | "HOTELS_COM"
        | "HOTELS.COM" | "VRBO" | "OTHER_OTA" => "OTA",
        "CREDIT_CARD" | "CC" | "VISA" | "MASTERCARD" | "AMEX" => "CREDIT_CARD_PROCESSOR",
        other => other,
    }
    .to_string()
}

pub async fn import_hotel_dispute(
    db: &DatabaseConnection,
    record: &Record,
    created_by_id: Option<i32>,
) -> ImportResult<()> {
    let Some(property_id) = id_field(record, &["propertyId"]) else {
        return Err(row_error("propertyId is required"));
    };
    find_property(db, property_id).await?;

    let dispute_type = record.text("type").unwrap_or_else(|| "CHARGEBACK".to_string());
    let channel = normalize_channel(&record.text("channel").unwrap_or_else(|| "OTHER".to_string()));

    hotel_disputes::ActiveModel {
        property_id: Set(property_id),
        dispute_type: Set(dispute_type),
        channel: Set(Some(channel)),
        status: Set("NEW".to_string()),
        disputed_amount: Set(Some(record.number("disputedAmount").unwrap_or(0.0))),
        original_amount: Set(record.number("originalAmount")),
        reservation_id: Set(record.text("reservationId")),
        folio_number: Set(record.text("folioNumber")),
        guest_name: Set(record.text("guestName")),
        guest_email: Set(record.text("guestEmail")),
        guest_phone: Set(record.text("guestPhone")),
        posted_date: Set(record.date("postedDate")),
        stay_from: Set(record.date("stayFrom")),
        stay_to: Set(record.date("stayTo")),
        evidence_due_date: Set(record.date("evidenceDueDate")),
        reason: Set(record.text("reason")),
        created_by_id: Set(created_by_id),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(())
}

pub async fn import_hotel_review(db: &DatabaseConnection, record: &Record) -> ImportResult<()> {
    let Some(hotel_id) = id_field(record, &["propertyId", "hotelId"]) else {
        return Err(row_error("hotelId/propertyId is required"));
    };
    find_property(db, hotel_id).await?;

    hotel_reviews::ActiveModel {
        hotel_id: Set(hotel_id),
        rating: Set(Some(record.number("rating").unwrap_or(0.0))),
        source: Set(Some(
            record.text("source").unwrap_or_else(|| "OTHER".to_string()),
        )),
        reviewer_name: Set(record.first_text(&["guestName", "reviewerName"])),
        review_date: Set(Some(
            record.date("reviewDate").unwrap_or_else(|| Utc::now().date_naive()),
        )),
        title: Set(record.text("title")),
        comment: Set(record.first_text(&["reviewText", "comment"])),
        response_text: Set(record.text("responseText")),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(())
}

pub async fn import_bpo_metric(db: &DatabaseConnection, record: &Record) -> ImportResult<()> {
    let campaign_id = id_field(record, &["campaignId"]);
    let date = record.date("date");
    let (Some(campaign_id), Some(date)) = (campaign_id, date) else {
        return Err(row_error("campaignId and date are required"));
    };

    let now = Utc::now();
    let existing = bpo_daily_metrics::Entity::find()
        .filter(bpo_daily_metrics::Column::CampaignId.eq(campaign_id))
        .filter(bpo_daily_metrics::Column::Date.eq(date))
        .one(db)
        .await?;

    let handled = int_field(record, &["inboundCalls", "handledCalls"]);
    let leads = int_field(record, &["leads", "leadsCreated"]);
    let demos = int_field(record, &["demos", "demosBooked"]);
    let sales = int_field(record, &["sales", "salesClosed"]);
    let qa = record.first_number(&["qaScore", "avgQaScore"]);

    match existing {
        Some(model) => {
            let mut active: bpo_daily_metrics::ActiveModel = model.into();
            if let Some(v) = int_field(record, &["outboundCalls"]) {
                active.outbound_calls = Set(Some(v));
            }
            if let Some(v) = handled {
                active.handled_calls = Set(Some(v));
            }
            if let Some(v) = record.number("talkTimeMin") {
                active.talk_time_min = Set(Some(v));
            }
            if let Some(v) = leads {
                active.leads_created = Set(Some(v));
            }
            if let Some(v) = demos {
                active.demos_booked = Set(Some(v));
            }
            if let Some(v) = sales {
                active.sales_closed = Set(Some(v));
            }
            if let Some(v) = record.number("fteCount") {
                active.fte_count = Set(Some(v));
            }
            if let Some(v) = record.number("revenue") {
                active.revenue = Set(Some(v));
            }
            if let Some(v) = record.number("cost") {
                active.cost = Set(Some(v));
            }
            if let Some(v) = qa {
                active.avg_qa_score = Set(Some(v));
            }
            active.updated_at = Set(now);
            active.update(db).await?;
        }
        None => {
            bpo_daily_metrics::ActiveModel {
                campaign_id: Set(campaign_id),
                date: Set(date),
                outbound_calls: Set(Some(int_field(record, &["outboundCalls"]).unwrap_or(0))),
                handled_calls: Set(Some(handled.unwrap_or(0))),
                talk_time_min: Set(record.number("talkTimeMin")),
                leads_created: Set(Some(leads.unwrap_or(0))),
                demos_booked: Set(Some(demos.unwrap_or(0))),
                sales_closed: Set(Some(sales.unwrap_or(0))),
                fte_count: Set(record.number("fteCount")),
                revenue: Set(Some(record.number("revenue").unwrap_or(0.0))),
                cost: Set(Some(record.number("cost").unwrap_or(0.0))),
                avg_qa_score: Set(qa),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_normalization() {
        assert_eq!(normalize_channel("BOOKING.COM"), "OTA");
        assert_eq!(normalize_channel("EXPEDIA"), "OTA");
        assert_eq!(normalize_channel("VISA"), "CREDIT_CARD_PROCESSOR");
        assert_eq!(normalize_channel("DIRECT"), "DIRECT_GUEST");
        assert_eq!(normalize_channel("BANK"), "BANK");
    }
}
