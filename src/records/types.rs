use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Farmer {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub village: &'static str,
    pub bank_account: &'static str,
    pub financial_status: &'static str,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipient {
    pub role: &'static str,
    pub email: &'static str,
    /// Local ten digit number, without the country prefix.
    pub phone: &'static str,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Officer {
    pub name: &'static str,
    pub email: &'static str,
}

#[derive(Deserialize, Debug, Default)]
pub struct FarmerQuery {
    pub village: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct FarmerListing {
    pub village: String,
    pub count: usize,
    pub farmers: Vec<&'static Farmer>,
}
