//! Filter criteria for register records.

use chrono::NaiveDate;

use crate::{FilterError, Record};

/// Optional bounds on sale date and price plus an optional county set.
///
/// All bounds are inclusive and combine with logical AND. A bound that is
/// not set imposes no constraint. County names are compared ignoring case;
/// an empty county set matches nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    // Stored lowercased.
    counties: Option<Vec<String>>,
}

impl Filter {
    /// Creates a filter with no constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the earliest sale date (inclusive).
    #[must_use]
    pub fn with_min_date(mut self, date: NaiveDate) -> Self {
        self.min_date = Some(date);
        self
    }

    /// Sets the latest sale date (inclusive).
    #[must_use]
    pub fn with_max_date(mut self, date: NaiveDate) -> Self {
        self.max_date = Some(date);
        self
    }

    /// Sets the lowest price (inclusive).
    #[must_use]
    pub fn with_min_price(mut self, price: f64) -> Self {
        self.min_price = Some(price);
        self
    }

    /// Sets the highest price (inclusive).
    #[must_use]
    pub fn with_max_price(mut self, price: f64) -> Self {
        self.max_price = Some(price);
        self
    }

    /// Restricts matches to the given counties.
    #[must_use]
    pub fn with_counties<I, S>(mut self, counties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.counties = Some(
            counties
                .into_iter()
                .map(|c| c.as_ref().to_lowercase())
                .collect(),
        );
        self
    }

    /// Returns the earliest sale date, if set.
    #[must_use]
    pub const fn min_date(&self) -> Option<NaiveDate> {
        self.min_date
    }

    /// Returns the latest sale date, if set.
    #[must_use]
    pub const fn max_date(&self) -> Option<NaiveDate> {
        self.max_date
    }

    /// Returns the lowest price, if set.
    #[must_use]
    pub const fn min_price(&self) -> Option<f64> {
        self.min_price
    }

    /// Returns the highest price, if set.
    #[must_use]
    pub const fn max_price(&self) -> Option<f64> {
        self.max_price
    }

    /// Returns the lowercased county set, if set.
    #[must_use]
    pub fn counties(&self) -> Option<&[String]> {
        self.counties.as_deref()
    }

    /// Returns true if no criterion is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min_date.is_none()
            && self.max_date.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.counties.is_none()
    }

    /// Checks that the bounds can be satisfied.
    ///
    /// # Errors
    ///
    /// Returns an error if a minimum exceeds its maximum or a price bound
    /// is NaN.
    pub fn validate(&self) -> Result<(), FilterError> {
        if let (Some(min), Some(max)) = (self.min_date, self.max_date)
            && min > max
        {
            return Err(FilterError::InvalidDateRange { min, max });
        }
        if self.min_price.is_some_and(f64::is_nan) || self.max_price.is_some_and(f64::is_nan) {
            return Err(FilterError::NanPrice);
        }
        if let (Some(min), Some(max)) = (self.min_price, self.max_price)
            && min > max
        {
            return Err(FilterError::InvalidPriceRange { min, max });
        }
        Ok(())
    }

    /// Returns true if the record satisfies every criterion.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        if self.min_date.is_some_and(|d| record.sale_date < d)
            || self.max_date.is_some_and(|d| record.sale_date > d)
        {
            return false;
        }
        if self.min_price.is_some_and(|p| record.price < p)
            || self.max_price.is_some_and(|p| record.price > p)
        {
            return false;
        }
        match &self.counties {
            Some(counties) => {
                let county = record.county.to_lowercase();
                counties.iter().any(|c| *c == county)
            }
            None => true,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unbounded() {
            return write!(f, "all records");
        }
        let mut parts = Vec::new();
        match (self.min_date, self.max_date) {
            (Some(min), Some(max)) => parts.push(format!("sold {min} to {max}")),
            (Some(min), None) => parts.push(format!("sold from {min}")),
            (None, Some(max)) => parts.push(format!("sold until {max}")),
            (None, None) => {}
        }
        match (self.min_price, self.max_price) {
            (Some(min), Some(max)) => parts.push(format!("price {min} to {max}")),
            (Some(min), None) => parts.push(format!("price >= {min}")),
            (None, Some(max)) => parts.push(format!("price <= {max}")),
            (None, None) => {}
        }
        if let Some(counties) = &self.counties {
            parts.push(format!("counties [{}]", counties.join(", ")));
        }
        write!(f, "{}", parts.join(", "))
    }
}
