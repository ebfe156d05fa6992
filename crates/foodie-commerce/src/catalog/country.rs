//! Country partition.

use crate::money::Currency;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A country partition.
///
/// Restaurants, sessions, and currency conventions are scoped per country;
/// there is no cross-country visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    India,
    America,
}

impl Country {
    /// Get the country as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::India => "india",
            Country::America => "america",
        }
    }

    /// Get the display name (e.g., "India").
    pub fn display_name(&self) -> &'static str {
        match self {
            Country::India => "India",
            Country::America => "America",
        }
    }

    /// Get the currency convention for this country.
    pub fn currency(&self) -> Currency {
        match self {
            Country::India => Currency::INR,
            Country::America => Currency::USD,
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Country {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "india" => Ok(Country::India),
            "america" => Ok(Country::America),
            _ => Err(()),
        }
    }
}
