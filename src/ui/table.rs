use crate::parcel::Parcel;
use crate::storage::TrackerStats;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ParcelRow {
    #[tabled(rename = "Number")]
    number: i64,
    #[tabled(rename = "Client")]
    client: i64,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Registered")]
    created_at: String,
}

impl From<&Parcel> for ParcelRow {
    fn from(parcel: &Parcel) -> Self {
        Self {
            number: parcel.number,
            client: parcel.client,
            status: parcel.status.to_string(),
            address: parcel.address.clone(),
            created_at: parcel.created_at.clone(),
        }
    }
}

/// Render a list of parcels as a table; empty input renders nothing.
pub fn parcel_table(parcels: &[Parcel]) -> String {
    if parcels.is_empty() {
        return String::new();
    }

    Table::new(parcels.iter().map(ParcelRow::from))
        .with(Style::rounded())
        .to_string()
}

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Parcels")]
    count: usize,
}

/// Render per-status parcel counts as a table
pub fn stats_table(stats: &TrackerStats) -> String {
    let rows = vec![
        StatusRow {
            status: "registered".to_string(),
            count: stats.registered,
        },
        StatusRow {
            status: "sent".to_string(),
            count: stats.sent,
        },
        StatusRow {
            status: "delivered".to_string(),
            count: stats.delivered,
        },
        StatusRow {
            status: "total".to_string(),
            count: stats.total(),
        },
    ];

    Table::new(rows).with(Style::rounded()).to_string()
}
