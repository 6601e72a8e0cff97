pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::{status_icon, Icons};
pub use output::{error, field, header, success, warn};
pub use table::{parcel_table, stats_table};
pub use theme::{theme, Theme};
