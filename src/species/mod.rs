//! Species reference data: metadata lookup, conservation categories,
//! and status display hints.

mod category;
mod db;
mod status;

pub use category::category_for;
pub use db::{SpeciesDb, SpeciesInfo};
pub use status::{StatusDisplay, status_display};
