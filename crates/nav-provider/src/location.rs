//! `"lat,lon"` location strings.
//!
//! A location is either a coordinate pair or a free-form address.  Pairs are
//! two plain decimals (optional leading `-`, digits, optional fractional part)
//! separated by a run of commas and whitespace.  Surrounding whitespace is
//! ignored; a leading or trailing comma makes the input an address.
//!
//! | Input             | Result                          |
//! |-------------------|---------------------------------|
//! | `"52.52,13.405"`  | `Some((52.52, 13.405))`         |
//! | `"52.52, 13.405"` | `Some((52.52, 13.405))`         |
//! | `"-33.9 151.2"`   | `Some((-33.9, 151.2))`          |
//! | `"52,13,"`        | `None`                          |
//! | `"Berlin"`        | `None` (geocode it elsewhere)   |
//! | `"95,10"`         | error: latitude out of range    |

use std::sync::LazyLock;

use regex::Regex;

use nav_core::GeoPoint;

use crate::{ProviderError, ProviderResult};

static COORDINATE_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?[0-9]+\.?[0-9]*)[,\s]+(-?[0-9]+\.?[0-9]*)$")
        .expect("coordinate pair pattern is valid")
});

/// Parse a coordinate pair, or return `Ok(None)` for anything that is not one.
pub fn parse_location(input: &str) -> ProviderResult<Option<GeoPoint>> {
    let Some(caps) = COORDINATE_PAIR.captures(input.trim()) else {
        return Ok(None);
    };
    let (lat, lon) = (&caps[1], &caps[2]);

    let lat: f64 = lat
        .parse()
        .map_err(|e| ProviderError::Parse(format!("latitude {lat:?}: {e}")))?;
    let lon: f64 = lon
        .parse()
        .map_err(|e| ProviderError::Parse(format!("longitude {lon:?}: {e}")))?;

    if !(-90.0..=90.0).contains(&lat) {
        return Err(ProviderError::Parse(format!("latitude {lat} outside [-90, 90]")));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(ProviderError::Parse(format!("longitude {lon} outside [-180, 180]")));
    }

    Ok(Some(GeoPoint::new(lat, lon)))
}
