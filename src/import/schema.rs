//! Field typing and per-type requirement tables for tabular imports.
//!
//! The validator and committer both look up a target field's kind here, so
//! the date/number/integer field sets exist in exactly one place.

use serde::{Deserialize, Serialize};

/// Target domain table group for an import job.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportType {
    Loads,
    Shippers,
    Carriers,
    HotelKpis,
    HotelDaily,
    FreightKpis,
    HotelDisputes,
    HotelReviews,
    BpoMetrics,
    Generic,
}

impl ImportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportType::Loads => "LOADS",
            ImportType::Shippers => "SHIPPERS",
            ImportType::Carriers => "CARRIERS",
            ImportType::HotelKpis => "HOTEL_KPIS",
            ImportType::HotelDaily => "HOTEL_DAILY",
            ImportType::FreightKpis => "FREIGHT_KPIS",
            ImportType::HotelDisputes => "HOTEL_DISPUTES",
            ImportType::HotelReviews => "HOTEL_REVIEWS",
            ImportType::BpoMetrics => "BPO_METRICS",
            ImportType::Generic => "GENERIC",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "LOADS" => Some(ImportType::Loads),
            "SHIPPERS" => Some(ImportType::Shippers),
            "CARRIERS" => Some(ImportType::Carriers),
            "HOTEL_KPIS" => Some(ImportType::HotelKpis),
            "HOTEL_DAILY" => Some(ImportType::HotelDaily),
            "FREIGHT_KPIS" => Some(ImportType::FreightKpis),
            "HOTEL_DISPUTES" => Some(ImportType::HotelDisputes),
            "HOTEL_REVIEWS" => Some(ImportType::HotelReviews),
            "BPO_METRICS" => Some(ImportType::BpoMetrics),
            "GENERIC" => Some(ImportType::Generic),
            _ => None,
        }
    }

    pub fn all() -> &'static [ImportType] {
        &[
            ImportType::Loads,
            ImportType::Shippers,
            ImportType::Carriers,
            ImportType::HotelKpis,
            ImportType::HotelDaily,
            ImportType::FreightKpis,
            ImportType::HotelDisputes,
            ImportType::HotelReviews,
            ImportType::BpoMetrics,
        ]
    }
}

/// Semantic kind of a target field, driving cell coercion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Date,
    Number,
    Integer,
    Text,
}

const DATE_FIELDS: &[&str] = &[
    "date",
    "pickupDate",
    "deliveryDate",
    "postedDate",
    "stayFrom",
    "stayTo",
    "reviewDate",
    "evidenceDueDate",
];

const INTEGER_FIELDS: &[&str] = &["hotelId", "ventureId", "campaignId", "propertyId"];

const NUMBER_FIELDS: &[&str] = &[
    "amount",
    "disputedAmount",
    "originalAmount",
    "customerRate",
    "carrierRate",
    "margin",
    "weight",
    "miles",
    "occupancy",
    "occupancyPct",
    "adr",
    "revpar",
    "roomRevenue",
    "roomsSold",
    "roomsAvailable",
    "totalRevenue",
    "otherRevenue",
    "grossOperatingProfit",
    "goppar",
    "cancellations",
    "noShows",
    "walkins",
    "complaints",
    "roomsOutOfOrder",
    "reviewScore",
    "totalRoom",
    "roomSold",
    "cash",
    "credit",
    "online",
    "refund",
    "total",
    "dues",
    "lostDues",
    "loadsInbound",
    "loadsQuoted",
    "loadsCovered",
    "loadsLost",
    "totalCost",
    "totalProfit",
    "avgMarginPct",
    "activeShippers",
    "newShippers",
    "churnedShippers",
    "reactivatedShippers",
    "atRiskShippers",
    "activeCarriers",
    "newCarriers",
    "revenue",
    "cost",
    "marginPercent",
    "coverageRate",
    "totalLoads",
    "coveredLoads",
    "rating",
    "outboundCalls",
    "inboundCalls",
    "handledCalls",
    "talkTimeMin",
    "leads",
    "leadsCreated",
    "demos",
    "demosBooked",
    "sales",
    "salesClosed",
    "fteCount",
    "avgQaScore",
    "qaScore",
    "quotesGiven",
];

/// Classify a target field name. Unknown fields are plain text.
pub fn field_kind(field: &str) -> FieldKind {
    if DATE_FIELDS.contains(&field) {
        FieldKind::Date
    } else if INTEGER_FIELDS.contains(&field) {
        FieldKind::Integer
    } else if NUMBER_FIELDS.contains(&field) {
        FieldKind::Number
    } else {
        FieldKind::Text
    }
}

/// Fields every row of the given import type must carry to validate.
/// Each entry is a group of interchangeable names; any one of them
/// satisfies the requirement, mirroring the committer's aliasing
/// (a HOTEL_KPIS file may carry `hotelId` instead of `propertyId`).
pub fn required_fields(import_type: ImportType) -> &'static [&'static [&'static str]] {
    match import_type {
        ImportType::Loads => &[&["referenceNumber"]],
        ImportType::Shippers => &[&["name"]],
        ImportType::Carriers => &[&["name"]],
        ImportType::HotelKpis => &[&["date"], &["propertyId", "hotelId"]],
        ImportType::FreightKpis => &[&["date"], &["ventureId"]],
        ImportType::HotelDisputes => &[&["propertyId"], &["type"], &["disputedAmount"]],
        ImportType::HotelReviews => &[&["propertyId", "hotelId"], &["rating"]],
        ImportType::BpoMetrics => &[&["date"], &["campaignId"]],
        ImportType::HotelDaily | ImportType::Generic => &[],
    }
}

/// Downloadable CSV template: headers plus one sample row.
pub struct Template {
    pub headers: &'static [&'static str],
    pub sample_row: &'static [&'static str],
}

pub fn template_for(import_type: ImportType) -> Option<Template> {
    let (headers, sample_row): (&'static [&'static str], &'static [&'static str]) =
        match import_type {
            ImportType::Loads => (
                &[
                    "referenceNumber",
                    "pickupDate",
                    "deliveryDate",
                    "shipperName",
                    "customerName",
                    "originCity",
                    "originState",
                    "originZip",
                    "destCity",
                    "destState",
                    "destZip",
                    "equipment",
                    "weight",
                    "customerRate",
                    "carrierRate",
                    "margin",
                    "notes",
                ],
                &[
                    "LD-12345",
                    "2024-01-15",
                    "2024-01-17",
                    "ABC Shipper",
                    "XYZ Customer",
                    "Chicago",
                    "IL",
                    "60601",
                    "Dallas",
                    "TX",
                    "75201",
                    "VAN",
                    "42000",
                    "2500",
                    "1800",
                    "700",
                    "Priority load",
                ],
            ),
            ImportType::Shippers => (
                &["name", "contact", "email", "phone", "address", "city", "state", "zip", "notes"],
                &[
                    "ABC Manufacturing",
                    "John Smith",
                    "john@abc.com",
                    "555-123-4567",
                    "123 Industrial Blvd",
                    "Chicago",
                    "IL",
                    "60601",
                    "Top shipper",
                ],
            ),
            ImportType::Carriers => (
                &[
                    "name", "mcNumber", "dotNumber", "phone", "email", "address", "city", "state",
                    "zip", "equipment", "lanes", "notes",
                ],
                &[
                    "Fast Freight LLC",
                    "MC123456",
                    "DOT789012",
                    "555-987-6543",
                    "dispatch@fastfreight.com",
                    "456 Trucking Way",
                    "Dallas",
                    "TX",
                    "75201",
                    "VAN,FLATBED",
                    "TX-IL,IL-CA",
                    "Reliable carrier",
                ],
            ),
            ImportType::HotelKpis => (
                &[
                    "date",
                    "hotelId",
                    "ventureId",
                    "roomsSold",
                    "roomsAvailable",
                    "occupancyPct",
                    "roomRevenue",
                    "adr",
                    "revpar",
                    "otherRevenue",
                    "totalRevenue",
                    "grossOperatingProfit",
                    "goppar",
                    "cancellations",
                    "noShows",
                    "walkins",
                    "complaints",
                    "roomsOutOfOrder",
                    "reviewScore",
                ],
                &[
                    "2024-01-15",
                    "1",
                    "1",
                    "85",
                    "100",
                    "85",
                    "12750",
                    "150",
                    "127.50",
                    "2500",
                    "15250",
                    "6100",
                    "61",
                    "3",
                    "2",
                    "5",
                    "1",
                    "2",
                    "4.5",
                ],
            ),
            ImportType::HotelDaily => (
                &[
                    "date", "hotelId", "totalRoom", "roomSold", "cash", "credit", "online",
                    "refund", "total", "dues", "lostDues", "occupancy", "revpar",
                ],
                &[
                    "2024-01-15",
                    "1",
                    "100",
                    "85",
                    "2500",
                    "8500",
                    "1500",
                    "150",
                    "12350",
                    "450",
                    "75",
                    "85",
                    "123.50",
                ],
            ),
            ImportType::FreightKpis => (
                &[
                    "date",
                    "ventureId",
                    "loadsInbound",
                    "loadsQuoted",
                    "loadsCovered",
                    "loadsLost",
                    "totalRevenue",
                    "totalCost",
                    "totalProfit",
                    "avgMarginPct",
                    "activeShippers",
                    "newShippers",
                    "churnedShippers",
                    "reactivatedShippers",
                    "atRiskShippers",
                    "activeCarriers",
                    "newCarriers",
                ],
                &[
                    "2024-01-15",
                    "1",
                    "50",
                    "45",
                    "40",
                    "5",
                    "125000",
                    "95000",
                    "30000",
                    "24",
                    "25",
                    "3",
                    "1",
                    "2",
                    "4",
                    "40",
                    "5",
                ],
            ),
            ImportType::HotelDisputes => (
                &[
                    "propertyId",
                    "type",
                    "disputedAmount",
                    "originalAmount",
                    "channel",
                    "reservationId",
                    "folioNumber",
                    "guestName",
                    "guestEmail",
                    "guestPhone",
                    "postedDate",
                    "stayFrom",
                    "stayTo",
                    "reason",
                    "evidenceDueDate",
                ],
                &[
                    "1",
                    "CHARGEBACK",
                    "250.00",
                    "275.00",
                    "OTA",
                    "RES-12345",
                    "FOL-67890",
                    "Jane Doe",
                    "jane@email.com",
                    "555-123-4567",
                    "2024-01-10",
                    "2024-01-05",
                    "2024-01-07",
                    "Card not present",
                    "2024-01-25",
                ],
            ),
            ImportType::HotelReviews => (
                &[
                    "propertyId",
                    "rating",
                    "source",
                    "guestName",
                    "reviewDate",
                    "title",
                    "reviewText",
                    "responseText",
                ],
                &[
                    "1",
                    "4.5",
                    "GOOGLE",
                    "John Guest",
                    "2024-01-15",
                    "Great experience",
                    "Great stay, friendly staff!",
                    "Thank you for your feedback!",
                ],
            ),
            ImportType::BpoMetrics => (
                &[
                    "date",
                    "campaignId",
                    "outboundCalls",
                    "handledCalls",
                    "talkTimeMin",
                    "leadsCreated",
                    "demosBooked",
                    "salesClosed",
                    "fteCount",
                    "avgQaScore",
                    "revenue",
                    "cost",
                ],
                &[
                    "2024-01-15",
                    "1",
                    "500",
                    "350",
                    "1200",
                    "45",
                    "12",
                    "8",
                    "10.5",
                    "92.5",
                    "25000",
                    "18000",
                ],
            ),
            ImportType::Generic => return None,
        };

    Some(Template { headers, sample_row })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_type_round_trip() {
        for ty in ImportType::all() {
            assert_eq!(ImportType::parse(ty.as_str()), Some(*ty));
        }
        assert_eq!(ImportType::parse("NOT_A_TYPE"), None);
    }

    #[test]
    fn test_field_kinds() {
        assert_eq!(field_kind("date"), FieldKind::Date);
        assert_eq!(field_kind("stayFrom"), FieldKind::Date);
        assert_eq!(field_kind("hotelId"), FieldKind::Integer);
        assert_eq!(field_kind("lostDues"), FieldKind::Number);
        assert_eq!(field_kind("guestName"), FieldKind::Text);
    }

    #[test]
    fn test_required_fields_table() {
        let kpi = required_fields(ImportType::HotelKpis);
        assert_eq!(kpi.len(), 2);
        assert!(kpi[1].contains(&"hotelId"));
        assert_eq!(required_fields(ImportType::Loads), &[&["referenceNumber"]]);
        assert!(required_fields(ImportType::HotelDaily).is_empty());
    }

    #[test]
    fn test_templates_align_headers_and_samples() {
        for ty in ImportType::all() {
            let template = template_for(*ty).expect("template for commit type");
            assert_eq!(template.headers.len(), template.sample_row.len());
        }
        assert!(template_for(ImportType::Generic).is_none());
    }
}
