//! Table and cell types shared by every stage.

mod table;
mod value;

pub use table::Table;
pub use value::{Value, format_datetime, format_number, format_offset_datetime, is_midnight};
