use crate::parcel::ParcelStatus;

pub struct Icons;

impl Icons {
    pub const PACKAGE: &str = "📦";
    pub const TRUCK: &str = "🚚";
    pub const HOUSE: &str = "🏠";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const STATS: &str = "📊";
    pub const PERSON: &str = "👤";
    pub const PIN: &str = "📍";
    pub const CLOCK: &str = "⏱️";
    pub const TRASH: &str = "🗑️";
    pub const PEN: &str = "📝";
}

/// Icon for a parcel's current lifecycle state
pub fn status_icon(status: ParcelStatus) -> &'static str {
    match status {
        ParcelStatus::Registered => Icons::PACKAGE,
        ParcelStatus::Sent => Icons::TRUCK,
        ParcelStatus::Delivered => Icons::HOUSE,
    }
}
