//! Country name localization for report headings.

/// Resolves a target identifier to a human-readable display name.
pub trait Localizer {
    /// Returns the localized name, or `None` for unknown identifiers.
    ///
    /// Callers fall back to the raw identifier on `None`, so an incomplete
    /// table degrades the heading text rather than the pipeline.
    fn translate(&self, target: &str) -> Option<String>;
}

/// Bundled English display names for common target identifiers.
///
/// Codes are ISO 3166-1 alpha-2, matched case-insensitively; full country
/// names are accepted as well and resolve to their canonical spelling.  The
/// `all` sentinel resolves to a global label.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishCountryNames;

const NAMES: &[(&str, &str)] = &[
    ("all", "Worldwide"),
    ("ar", "Argentina"),
    ("at", "Austria"),
    ("au", "Australia"),
    ("be", "Belgium"),
    ("br", "Brazil"),
    ("ca", "Canada"),
    ("ch", "Switzerland"),
    ("cl", "Chile"),
    ("cn", "China"),
    ("co", "Colombia"),
    ("cz", "Czechia"),
    ("de", "Germany"),
    ("dk", "Denmark"),
    ("eg", "Egypt"),
    ("es", "Spain"),
    ("fi", "Finland"),
    ("fr", "France"),
    ("gb", "United Kingdom"),
    ("gr", "Greece"),
    ("hu", "Hungary"),
    ("id", "Indonesia"),
    ("ie", "Ireland"),
    ("il", "Israel"),
    ("in", "India"),
    ("it", "Italy"),
    ("jp", "Japan"),
    ("kr", "South Korea"),
    ("mx", "Mexico"),
    ("ng", "Nigeria"),
    ("nl", "Netherlands"),
    ("no", "Norway"),
    ("nz", "New Zealand"),
    ("pe", "Peru"),
    ("ph", "Philippines"),
    ("pl", "Poland"),
    ("pt", "Portugal"),
    ("ro", "Romania"),
    ("ru", "Russia"),
    ("se", "Sweden"),
    ("sg", "Singapore"),
    ("tr", "Turkey"),
    ("ua", "Ukraine"),
    ("us", "USA"),
    ("vn", "Vietnam"),
    ("za", "South Africa"),
];

impl Localizer for EnglishCountryNames {
    fn translate(&self, target: &str) -> Option<String> {
        let needle = target.trim();
        NAMES.iter().find_map(|(code, name)| {
            if code.eq_ignore_ascii_case(needle) || name.eq_ignore_ascii_case(needle) {
                Some((*name).to_string())
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{EnglishCountryNames, Localizer};

    #[test]
    fn codes_resolve_to_display_names() {
        assert_eq!(EnglishCountryNames.translate("de"), Some("Germany".to_string()));
        assert_eq!(EnglishCountryNames.translate("GB"), Some("United Kingdom".to_string()));
    }

    #[test]
    fn the_global_sentinel_has_a_label() {
        assert_eq!(EnglishCountryNames.translate("all"), Some("Worldwide".to_string()));
    }

    #[test]
    fn full_names_resolve_to_their_canonical_spelling() {
        assert_eq!(
            EnglishCountryNames.translate("germany"),
            Some("Germany".to_string())
        );
    }

    #[test]
    fn unknown_identifiers_stay_untranslated() {
        assert_eq!(EnglishCountryNames.translate("atlantis"), None);
    }
}
