use thiserror::Error;

/// A filter value that could not be parsed as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is not a number")]
pub struct InvalidParameter(pub &'static str);

/// Inclusive bounds applied to the listings query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingFilter {
    pub min_price: i64,
    pub max_price: i64,
    pub min_bed: i64,
    pub max_bed: i64,
    pub min_bath: i64,
    pub max_bath: i64,
}

impl Default for ListingFilter {
    fn default() -> Self {
        Self {
            min_price: 0,
            max_price: 300_000,
            min_bed: 0,
            max_bed: 5,
            min_bath: 0,
            max_bath: 3,
        }
    }
}

impl ListingFilter {
    /// Resolve the filter from raw query pairs, falling back to the defaults.
    ///
    /// The first occurrence of a key wins and an empty value counts as absent.
    /// Keys are validated in declaration order, so the first bad one is reported.
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self, InvalidParameter> {
        let mut filter = Self::default();
        for (key, slot) in filter.bounds_mut() {
            let supplied = pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str());

            match supplied {
                None | Some("") => {}
                Some(raw) => *slot = raw.parse().map_err(|_| InvalidParameter(key))?,
            }
        }
        Ok(filter)
    }

    fn bounds_mut(&mut self) -> [(&'static str, &mut i64); 6] {
        [
            ("min_price", &mut self.min_price),
            ("max_price", &mut self.max_price),
            ("min_bed", &mut self.min_bed),
            ("max_bed", &mut self.max_bed),
            ("min_bath", &mut self.min_bath),
            ("max_bath", &mut self.max_bath),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn no_parameters_yields_defaults() {
        let filter = ListingFilter::from_pairs(&[]).unwrap();

        assert_eq!(
            filter,
            ListingFilter {
                min_price: 0,
                max_price: 300_000,
                min_bed: 0,
                max_bed: 5,
                min_bath: 0,
                max_bath: 3,
            }
        );
    }

    #[test]
    fn supplied_values_override_defaults() {
        let filter = ListingFilter::from_pairs(&pairs(&[
            ("min_price", "100000"),
            ("max_price", "200000"),
            ("min_bed", "2"),
            ("max_bed", "3"),
            ("unrelated", "ignored"),
        ]))
        .unwrap();

        assert_eq!(filter.min_price, 100_000);
        assert_eq!(filter.max_price, 200_000);
        assert_eq!(filter.min_bed, 2);
        assert_eq!(filter.max_bed, 3);
        assert_eq!(filter.min_bath, 0);
        assert_eq!(filter.max_bath, 3);
    }

    #[test]
    fn empty_value_keeps_default() {
        let filter = ListingFilter::from_pairs(&pairs(&[("max_bed", "")])).unwrap();
        assert_eq!(filter.max_bed, 5);
    }

    #[test]
    fn first_occurrence_wins() {
        let filter =
            ListingFilter::from_pairs(&pairs(&[("min_bath", "2"), ("min_bath", "oops")])).unwrap();
        assert_eq!(filter.min_bath, 2);
    }

    #[test]
    fn negative_values_are_accepted() {
        let filter = ListingFilter::from_pairs(&pairs(&[("min_price", "-5")])).unwrap();
        assert_eq!(filter.min_price, -5);
    }

    #[test]
    fn non_numeric_value_names_the_parameter() {
        let err = ListingFilter::from_pairs(&pairs(&[("min_price", "abc")])).unwrap_err();

        assert_eq!(err, InvalidParameter("min_price"));
        assert_eq!(err.to_string(), "min_price is not a number");
    }

    #[test]
    fn overflow_is_rejected_like_any_other_parse_failure() {
        let err =
            ListingFilter::from_pairs(&pairs(&[("max_price", "99999999999999999999")])).unwrap_err();
        assert_eq!(err, InvalidParameter("max_price"));

        for bad in ["1.5", " 3", "+", "2e5"] {
            let err = ListingFilter::from_pairs(&pairs(&[("max_bath", bad)])).unwrap_err();
            assert_eq!(err, InvalidParameter("max_bath"), "value {bad:?}");
        }
    }

    #[test]
    fn first_bad_key_in_declaration_order_is_reported() {
        let err = ListingFilter::from_pairs(&pairs(&[("max_bath", "x"), ("min_bed", "y")]))
            .unwrap_err();
        assert_eq!(err, InvalidParameter("min_bed"));
    }
}
