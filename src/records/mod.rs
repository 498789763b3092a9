pub mod data;
pub mod lookup;
pub mod types;

pub use data::{FARMERS, GOVT_RECIPIENTS, OFFICERS};
pub use lookup::{farmer_listing, farmers_in_village, officer_email, officer_names};
pub use types::{Farmer, FarmerListing, FarmerQuery, Officer, Recipient};
