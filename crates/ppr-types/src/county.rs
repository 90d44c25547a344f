//! Counties of the Republic of Ireland as used by the register.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Historic province a county belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Province {
    /// Connacht.
    Connacht,
    /// Leinster.
    Leinster,
    /// Munster.
    Munster,
    /// Ulster (the three counties within the State).
    Ulster,
}

impl Province {
    /// Returns the province name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Connacht => "Connacht",
            Self::Leinster => "Leinster",
            Self::Munster => "Munster",
            Self::Ulster => "Ulster",
        }
    }
}

impl std::fmt::Display for Province {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A county under which a sale can be registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum County {
    Carlow,
    Cavan,
    Clare,
    Cork,
    Donegal,
    Dublin,
    Galway,
    Kerry,
    Kildare,
    Kilkenny,
    Laois,
    Leitrim,
    Limerick,
    Longford,
    Louth,
    Mayo,
    Meath,
    Monaghan,
    Offaly,
    Roscommon,
    Sligo,
    Tipperary,
    Waterford,
    Westmeath,
    Wexford,
    Wicklow,
}

impl County {
    /// Returns every county in alphabetical order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Carlow,
            Self::Cavan,
            Self::Clare,
            Self::Cork,
            Self::Donegal,
            Self::Dublin,
            Self::Galway,
            Self::Kerry,
            Self::Kildare,
            Self::Kilkenny,
            Self::Laois,
            Self::Leitrim,
            Self::Limerick,
            Self::Longford,
            Self::Louth,
            Self::Mayo,
            Self::Meath,
            Self::Monaghan,
            Self::Offaly,
            Self::Roscommon,
            Self::Sligo,
            Self::Tipperary,
            Self::Waterford,
            Self::Westmeath,
            Self::Wexford,
            Self::Wicklow,
        ]
    }

    /// Returns the name as spelled in the register and its download URLs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Carlow => "Carlow",
            Self::Cavan => "Cavan",
            Self::Clare => "Clare",
            Self::Cork => "Cork",
            Self::Donegal => "Donegal",
            Self::Dublin => "Dublin",
            Self::Galway => "Galway",
            Self::Kerry => "Kerry",
            Self::Kildare => "Kildare",
            Self::Kilkenny => "Kilkenny",
            Self::Laois => "Laois",
            Self::Leitrim => "Leitrim",
            Self::Limerick => "Limerick",
            Self::Longford => "Longford",
            Self::Louth => "Louth",
            Self::Mayo => "Mayo",
            Self::Meath => "Meath",
            Self::Monaghan => "Monaghan",
            Self::Offaly => "Offaly",
            Self::Roscommon => "Roscommon",
            Self::Sligo => "Sligo",
            Self::Tipperary => "Tipperary",
            Self::Waterford => "Waterford",
            Self::Westmeath => "Westmeath",
            Self::Wexford => "Wexford",
            Self::Wicklow => "Wicklow",
        }
    }

    /// Returns the province the county lies in.
    #[must_use]
    pub const fn province(&self) -> Province {
        match self {
            Self::Cavan | Self::Donegal | Self::Monaghan => Province::Ulster,
            Self::Galway | Self::Leitrim | Self::Mayo | Self::Roscommon | Self::Sligo => {
                Province::Connacht
            }
            Self::Clare
            | Self::Cork
            | Self::Kerry
            | Self::Limerick
            | Self::Tipperary
            | Self::Waterford => Province::Munster,
            _ => Province::Leinster,
        }
    }

    /// Returns counties in the given province.
    pub fn in_province(province: Province) -> impl Iterator<Item = Self> {
        Self::all()
            .iter()
            .copied()
            .filter(move |c| c.province() == province)
    }
}

impl std::fmt::Display for County {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for County {
    type Err = CountyParseError;

    /// Parses a county name, ignoring case and an optional "Co." prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_lowercase();
        let name = lower
            .strip_prefix("co.")
            .or_else(|| lower.strip_prefix("county "))
            .map_or(lower.as_str(), str::trim_start);

        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| CountyParseError(s.to_string()))
    }
}

/// Error returned when parsing an unknown county name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountyParseError(String);

impl CountyParseError {
    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown county '{}'", self.0)
    }
}

impl std::error::Error for CountyParseError {}

impl From<CountyParseError> for crate::PprError {
    fn from(err: CountyParseError) -> Self {
        Self::UnknownCounty(err.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_six_counties() {
        assert_eq!(County::all().len(), 26);
        let total: usize = [
            Province::Connacht,
            Province::Leinster,
            Province::Munster,
            Province::Ulster,
        ]
        .into_iter()
        .map(|p| County::in_province(p).count())
        .sum();
        assert_eq!(total, 26);
        assert_eq!(County::in_province(Province::Leinster).count(), 12);
    }

    #[test]
    fn test_county_parse() {
        assert_eq!("carlow".parse::<County>().unwrap(), County::Carlow);
        assert_eq!("DUBLIN".parse::<County>().unwrap(), County::Dublin);
        assert_eq!("Co. Cork".parse::<County>().unwrap(), County::Cork);
        assert_eq!("county kerry".parse::<County>().unwrap(), County::Kerry);
        assert!("Antrim".parse::<County>().is_err());
    }

    #[test]
    fn test_parse_error_converts() {
        let err = "Atlantis".parse::<County>().unwrap_err();
        assert_eq!(err.input(), "Atlantis");
        let err: crate::PprError = err.into();
        assert!(matches!(err, crate::PprError::UnknownCounty(name) if name == "Atlantis"));
    }
}
