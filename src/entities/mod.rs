//! Read-side table definitions. Rows are written by upstream WMS extracts and
//! the `seed-data` binary; this service never mutates them.

pub mod pick_detail;
pub mod putwall;
pub mod replenishment;
pub mod unitsort;
