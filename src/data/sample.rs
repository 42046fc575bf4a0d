// src/data/sample.rs

use crate::domain::property::PropertyRecord;

fn field(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// The fixed sample set served when the real dataset cannot be loaded.
/// Three records, one per status code, so the board stays demonstrable
/// (and testable) without any data source at all.
pub fn sample_properties() -> Vec<PropertyRecord> {
    vec![
        PropertyRecord {
            area: field("JP Road"),
            status: field("RTMI"),
            project_name: field("Naman Habitat"),
            configuration: field("2bhk"),
            carpet: field("769"),
            pricing: field("3.24cr all in"),
            elevation: field("2B+4P+15"),
            flats_lifts: field("4flats/2lifts"),
            amenities: field("All Amenities"),
            possession: field("Part OC Received"),
        },
        PropertyRecord {
            area: field("JP Road"),
            status: field("UC"),
            project_name: field("Alpine Primo"),
            configuration: field("1bhk"),
            carpet: field("423"),
            pricing: field("1.55cr all in"),
            elevation: field("G+2P+14"),
            flats_lifts: field("5flats/2lifts"),
            amenities: field("All Amenities"),
            possession: field("Dec 2025"),
        },
        PropertyRecord {
            area: field("Lokhandwala"),
            status: field("NP"),
            project_name: field("72 West"),
            configuration: field("2bhk"),
            carpet: field("783"),
            pricing: field("3.05cr all in"),
            elevation: field("G+35"),
            flats_lifts: field("6flats/5lifts"),
            amenities: field("All Amenities"),
            possession: field("Dec 2025"),
        },
    ]
}
