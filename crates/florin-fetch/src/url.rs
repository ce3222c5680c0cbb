//! Source endpoint URL construction.

/// Base URL for ONS time-series CSV exports.
pub const ONS_BASE_URL: &str = "https://www.ons.gov.uk/generator";

/// Base URL for Land Registry UK House Price Index CSV exports.
pub const LAND_REGISTRY_BASE_URL: &str =
    "https://landregistry.data.gov.uk/app/ukhpi/download/new.csv";

/// URL of the Bank of England official bank rate page.
///
/// The rate history lives in an HTML table on this page; there is no CSV
/// export for it.
pub const BOE_BANK_RATE_URL: &str =
    "https://www.bankofengland.co.uk/boeapps/database/Bank-Rate.asp";

/// Builds the URL for an ONS time-series CSV export.
///
/// URL format: `{ONS_BASE_URL}?format=csv&uri=/economy/inflationandpriceindices/timeseries/{series}/{dataset}`
///
/// # Example
///
/// ```
/// use florin_fetch::url::ons_csv_url;
///
/// let url = ons_csv_url("l522", "mm23");
/// assert_eq!(
///     url,
///     "https://www.ons.gov.uk/generator?format=csv&uri=/economy/inflationandpriceindices/timeseries/l522/mm23"
/// );
/// ```
#[must_use]
pub fn ons_csv_url(series: &str, dataset: &str) -> String {
    format!(
        "{ONS_BASE_URL}?format=csv&uri=/economy/inflationandpriceindices/timeseries/{series}/{dataset}"
    )
}

/// Builds the URL for a Land Registry house price index CSV export.
///
/// The `location` query parameter carries a percent-encoded resource URI;
/// only the trailing region segment varies. The date bounds are fixed wide
/// open so the export always covers the full published history.
#[must_use]
pub fn land_registry_url(region: &str) -> String {
    format!(
        "{LAND_REGISTRY_BASE_URL}?from=1900-01-01&to=2100-01-01\
         &location=http%3A%2F%2Flandregistry.data.gov.uk%2Fid%2Fregion%2F{region}\
         &thm%5B%5D=property_type&in%5B%5D=avg&lang=en"
    )
}
