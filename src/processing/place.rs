//! City extraction from stringified place data.
//!
//! Places are dumped as a python-like dictionary rendering,
//! e.g. `{u'country': u'france', u'name': u'paris'}`.
//! Only the `name` entry is recovered. Any other rendering yields nothing.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CITY: Regex = Regex::new(r"u?'name': u?'([\w\s]+)'").unwrap();
}

/// Get the first city name found in `place`.
pub fn find_city(place: &str) -> Option<&str> {
    CITY.captures(place)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
