//! `venue` query parameter of the iframe URL.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};


/// Id of the venue the embedding page restricts the search to, if any.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct VenueParam(pub Option<u64>);

impl From<Option<u64>> for VenueParam {
    fn from(value: Option<u64>) -> Self {
        VenueParam(value)
    }
}

// Display the param in a way that can be parsed by FromStr
impl Display for VenueParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(id) = self.0 {
            write!(f, "{}", id)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum VenueParamParseError {
    NotANumber(std::num::ParseIntError),
    Zero,
}

impl std::fmt::Display for VenueParamParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber(err) => write!(f, "Venue id is not a number: {}", err),
            Self::Zero => write!(f, "Venue id must be positive"),
        }
    }
}

impl FromStr for VenueParam {
    type Err = VenueParamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(VenueParam(None));
        }
        let id = s.parse::<u64>().map_err(VenueParamParseError::NotANumber)?;
        if id == 0 {
            return Err(VenueParamParseError::Zero);
        }
        Ok(VenueParam(Some(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_prints_venue_ids() {
        assert_eq!("42".parse::<VenueParam>().unwrap(), VenueParam(Some(42)));
        assert_eq!("".parse::<VenueParam>().unwrap(), VenueParam(None));
        assert_eq!(VenueParam(Some(42)).to_string(), "42");
        assert_eq!(VenueParam(None).to_string(), "");
        assert!("abc".parse::<VenueParam>().is_err());
        assert!("0".parse::<VenueParam>().is_err());
    }
}
