use log::warn;

use crate::error::AppError;
use crate::records::{
    data::{FARMERS, OFFICERS},
    types::{Farmer, FarmerListing, FarmerQuery},
};

/// Farmers registered in `village`, compared case-insensitively.
pub fn farmers_in_village(village: &str) -> Vec<&'static Farmer> {
    let wanted = village.to_lowercase();
    FARMERS
        .iter()
        .filter(|farmer| farmer.village.to_lowercase() == wanted)
        .collect()
}

/// Decodes a `?village=` query string and lists the farmers registered there.
pub fn farmer_listing(query: &str) -> Result<FarmerListing, AppError> {
    let query: FarmerQuery = serde_qs::from_str(query).map_err(|e| {
        warn!("Rejected farmer query: {}", e);
        AppError::MissingVillage
    })?;

    let village = match query.village.as_deref().map(str::trim) {
        Some(village) if !village.is_empty() => village.to_string(),
        _ => return Err(AppError::MissingVillage),
    };

    let farmers = farmers_in_village(&village);
    Ok(FarmerListing {
        count: farmers.len(),
        village,
        farmers,
    })
}

pub fn officer_email(name: &str) -> Option<&'static str> {
    OFFICERS
        .iter()
        .find(|officer| officer.name == name)
        .map(|officer| officer.email)
}

pub fn officer_names() -> Vec<&'static str> {
    OFFICERS.iter().map(|officer| officer.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::GOVT_RECIPIENTS;

    fn ids(farmers: &[&Farmer]) -> Vec<&'static str> {
        farmers.iter().map(|f| f.id).collect()
    }

    #[test]
    fn village_match_ignores_case() {
        let lower = farmers_in_village("shendurjane");
        let proper = farmers_in_village("Shendurjane");
        assert_eq!(ids(&lower), vec!["FARM101", "FARM102"]);
        assert_eq!(lower, proper);
        assert_eq!(ids(&farmers_in_village("KUMTHA")), vec!["FARM104"]);
    }

    #[test]
    fn village_match_is_whole_name() {
        assert!(farmers_in_village("Wai").is_empty());
        assert!(farmers_in_village("Atlantis").is_empty());
        assert_eq!(ids(&farmers_in_village("wai gaon")), vec!["FARM103"]);
    }

    #[test]
    fn listing_needs_a_village() {
        for query in ["", "village=", "village=%20", "city=Kumtha"] {
            assert!(
                matches!(farmer_listing(query), Err(AppError::MissingVillage)),
                "query {:?}",
                query
            );
        }
    }

    #[test]
    fn malformed_listing_query_is_rejected() {
        assert!(matches!(
            farmer_listing("village[a]=Kumtha"),
            Err(AppError::MissingVillage)
        ));
    }

    #[test]
    fn listing_matches_village_case_insensitively() {
        let listing = farmer_listing("village=kumtha").unwrap();
        assert_eq!(listing.village, "kumtha");
        assert_eq!(listing.count, 1);
        assert_eq!(ids(&listing.farmers), vec!["FARM104"]);

        let listing = farmer_listing("village=Wai%20Gaon").unwrap();
        assert_eq!(ids(&listing.farmers), vec!["FARM103"]);
    }

    #[test]
    fn officer_lookup() {
        assert_eq!(
            officer_email("Yogesh Kadam"),
            Some("kadamyogiraj412@gmail.com")
        );
        assert_eq!(officer_email("yogesh kadam"), None);
        assert_eq!(officer_email("Nobody"), None);
        assert_eq!(officer_names().len(), 4);
    }

    #[test]
    fn four_government_recipients() {
        assert_eq!(
            GOVT_RECIPIENTS.iter().map(|r| r.email).collect::<Vec<_>>(),
            vec![
                "atharvakulkarrni@gmail.com",
                "atharvak706@gmail.com",
                "2022bec014@sggs.ac.in",
                "adityakulkarni2608@gmail.com",
            ]
        );
    }
}
