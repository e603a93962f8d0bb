//! Geographic reference data lookup.

use crate::error::IntakeError;

/// Read-only directory of recognized (state, city) combinations.
///
/// The host supplies an implementation over its reference dataset; intake
/// only ever asks whether a pair exists.
pub trait GeoDirectory {
    /// Whether the pair names a known location.
    fn contains(&self, state: &str, city: &str) -> bool;
}

impl<T: GeoDirectory + ?Sized> GeoDirectory for &T {
    fn contains(&self, state: &str, city: &str) -> bool {
        (**self).contains(state, city)
    }
}

/// Check a submitted state/city pair against the directory.
///
/// # Errors
///
/// Returns [`IntakeError::UnknownLocation`] when the pair is not recognized.
pub fn validate_location(
    geo: &impl GeoDirectory,
    state: &str,
    city: &str,
) -> Result<(), IntakeError> {
    if geo.contains(state, city) {
        Ok(())
    } else {
        Err(IntakeError::UnknownLocation {
            state: state.to_owned(),
            city: city.to_owned(),
        })
    }
}

/// In-memory directory for tests and development wiring.
#[derive(Debug, Clone, Default)]
pub struct StaticGeoDirectory {
    pairs: Vec<(String, String)>,
}

impl StaticGeoDirectory {
    /// Build a directory from (state, city) pairs.
    #[must_use]
    pub fn new<S: Into<String>>(pairs: impl IntoIterator<Item = (S, S)>) -> Self {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(state, city)| (state.into(), city.into()))
                .collect(),
        }
    }
}

impl GeoDirectory for StaticGeoDirectory {
    fn contains(&self, state: &str, city: &str) -> bool {
        self.pairs.iter().any(|(s, c)| s == state && c == city)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_known_pair_passes() {
        let geo = StaticGeoDirectory::new([("Oregon", "Portland")]);
        assert!(validate_location(&geo, "Oregon", "Portland").is_ok());
    }

    #[test]
    fn test_unknown_pair_is_rejected_with_context() {
        let geo = StaticGeoDirectory::new([("Oregon", "Portland")]);
        let err = validate_location(&geo, "Oregon", "Atlantis").unwrap_err();
        match err {
            IntakeError::UnknownLocation { state, city } => {
                assert_eq!(state, "Oregon");
                assert_eq!(city, "Atlantis");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_pairing_is_exact() {
        // Both state and city exist, but not together.
        let geo = StaticGeoDirectory::new([("Oregon", "Portland"), ("Maine", "Augusta")]);
        assert!(validate_location(&geo, "Maine", "Portland").is_err());
    }
}
