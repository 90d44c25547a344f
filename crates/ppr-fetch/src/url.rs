//! Property Price Register URL construction.

use crate::FetchError;

/// URL of the zip archive holding the whole register.
pub const ALL_URL: &str = "https://www.propertypriceregister.ie/website/npsra/ppr/npsra-ppr.nsf/Downloads/PPR-ALL.zip/$FILE/PPR-ALL.zip";

/// Template for a single county and month.
///
/// `{year}`, `{month}` and `{county}` are substituted; `$FILE` is literal.
pub const MONTH_URL_TEMPLATE: &str = "https://www.propertypriceregister.ie/website/npsra/ppr/npsra-ppr.nsf/Downloads/PPR-{year}-{month}-{county}.csv/$FILE/PPR-{year}-{month}-{county}.csv";

/// Builds the URL for one county's sales in one month.
///
/// URL format: `.../Downloads/PPR-{YEAR}-{MONTH}-{COUNTY}.csv/$FILE/PPR-{YEAR}-{MONTH}-{COUNTY}.csv`
///
/// The month is zero-padded to two digits.
///
/// # Errors
///
/// Returns an error if `month` is not in 1..=12.
///
/// # Example
///
/// ```
/// use ppr_fetch::url::month_url;
///
/// let url = month_url("Carlow", 2011, 6).unwrap();
/// assert_eq!(
///     url,
///     "https://www.propertypriceregister.ie/website/npsra/ppr/npsra-ppr.nsf/Downloads/PPR-2011-06-Carlow.csv/$FILE/PPR-2011-06-Carlow.csv"
/// );
/// ```
pub fn month_url(county: &str, year: i32, month: u32) -> Result<String, FetchError> {
    expand_template(MONTH_URL_TEMPLATE, county, year, month)
}

/// Substitutes county, year and month into a URL template.
///
/// # Errors
///
/// Returns an error if `month` is not in 1..=12.
pub fn expand_template(
    template: &str,
    county: &str,
    year: i32,
    month: u32,
) -> Result<String, FetchError> {
    if !(1..=12).contains(&month) {
        return Err(FetchError::InvalidMonth(month));
    }
    Ok(template
        .replace("{year}", &year.to_string())
        .replace("{month}", &format!("{month:02}"))
        .replace("{county}", county))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_urls_share_download_root() {
        let root = "https://www.propertypriceregister.ie/website/npsra/ppr/npsra-ppr.nsf/Downloads/";
        assert!(ALL_URL.starts_with(root));
        assert!(MONTH_URL_TEMPLATE.starts_with(root));
    }

    #[test]
    fn test_month_url_zero_padded() {
        let url = month_url("Carlow", 2011, 6).unwrap();
        assert!(url.ends_with("/PPR-2011-06-Carlow.csv/$FILE/PPR-2011-06-Carlow.csv"));
    }

    #[test]
    fn test_month_url_december() {
        let url = month_url("Dublin", 2023, 12).unwrap();
        assert!(url.contains("PPR-2023-12-Dublin.csv"));
    }

    #[test]
    fn test_month_url_invalid_month() {
        assert!(matches!(
            month_url("Cork", 2020, 0),
            Err(FetchError::InvalidMonth(0))
        ));
        assert!(matches!(
            month_url("Cork", 2020, 13),
            Err(FetchError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_custom_template() {
        let url = expand_template("http://localhost/{county}/{year}/{month}", "Mayo", 2019, 3)
            .unwrap();
        assert_eq!(url, "http://localhost/Mayo/2019/03");
    }
}
