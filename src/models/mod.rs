pub mod overview;
pub mod record;

pub use overview::{MonthAggregate, Overview, YearAggregate};
pub use record::TimeRecord;
