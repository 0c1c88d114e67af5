//! Property tests for value object parsing.

use proptest::prelude::*;

use shipyard::domain::value_objects::{AppName, Url};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: url parsing never panics.
    #[test]
    fn property_url_parse_never_panics(raw in ".{0,64}") {
        let _ = Url::parse(&raw);
    }

    /// PROPERTY: parsing a normalized url gives it back unchanged.
    #[test]
    fn property_url_is_normalized(
        secure in any::<bool>(),
        host in "[a-z]{1,12}(\\.[a-z]{2,6}){0,2}",
        slash in any::<bool>(),
    ) {
        let raw = format!(
            "{}://{}{}",
            if secure { "https" } else { "http" },
            host,
            if slash { "/" } else { "" }
        );

        let url = Url::parse(&raw).unwrap();
        prop_assert_eq!(url.is_secure(), secure);
        prop_assert!(!url.as_str().ends_with('/'));

        let again = Url::parse(url.as_str()).unwrap();
        prop_assert_eq!(again, url);
    }

    /// PROPERTY: valid app names are accepted as is.
    #[test]
    fn property_valid_app_names(raw in "[a-z][a-z0-9-]{0,20}") {
        let name = AppName::parse(&raw).unwrap();
        prop_assert_eq!(name.as_str(), raw.as_str());
    }

    /// PROPERTY: names with uppercase or spaces are rejected.
    #[test]
    fn property_invalid_app_names(raw in "[a-z]{0,4}[A-Z ][a-z]{0,4}") {
        prop_assert!(AppName::parse(&raw).is_err());
    }
}
