//! API Endpoints
//!
//! Endpoint names and how they map onto request paths.

pub const PROVINCE: &str = "province";
pub const CITY: &str = "city";
pub const SUBDISTRICT: &str = "subdistrict";
pub const COST: &str = "cost";
pub const CURRENCY: &str = "currency";
pub const INTERNATIONAL_ORIGIN: &str = "internationalOrigin";
pub const INTERNATIONAL_DESTINATION: &str = "internationalDestination";
pub const INTERNATIONAL_COST: &str = "internationalCost";

/// Path of an endpoint relative to the tier's API URL.
///
/// International endpoints live under `/v2`, everything else sits directly
/// below the base URL.
pub fn endpoint_path(endpoint: &str) -> String {
    match endpoint {
        INTERNATIONAL_ORIGIN | INTERNATIONAL_DESTINATION | INTERNATIONAL_COST => {
            format!("/v2/{}", endpoint)
        }
        _ => format!("/{}", endpoint),
    }
}

/// Join a base URL and an endpoint
pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!("{}{}", base_url, endpoint_path(endpoint))
}
