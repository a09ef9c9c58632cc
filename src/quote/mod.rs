//! Quote and customer data structures and input loading

mod data;
pub mod loader;

pub use data::{AddOn, CoverageType, CustomerProfile, Quote};
pub use loader::{load_customer, load_quotes, load_quotes_csv, load_quotes_from_reader};
