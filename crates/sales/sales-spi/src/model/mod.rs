//! Model module containing sales data types

mod aggregate;
mod month;
mod raw_table;
mod series;
mod transaction;

pub use aggregate::{MonthlyAggregate, RankedEntry};
pub use month::{add_months, month_label, month_start, months_between};
pub use raw_table::{CanonicalField, RawTable};
pub use series::{DateDimension, MonthlySeries, SeriesPoint};
pub use transaction::{CleanTransaction, NormalizedBatch, UNCATEGORIZED, UNKNOWN_COUNTRY};
