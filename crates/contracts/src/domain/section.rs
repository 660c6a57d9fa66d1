use serde::{Deserialize, Serialize};

/// Named in-page scroll targets. These ids are the public navigation
/// surface: the navigation bar, the mobile menu, and any in-page link must
/// stay inside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    Top,
    About,
    CeoOffice,
    Growth,
    Product,
    Fpa,
    Ops,
    EverythingElse,
}

impl Anchor {
    /// Anchors listed in the navigation bar, in display order. `Top` is
    /// reserved for the logo/name click and is not listed.
    pub const NAV: [Anchor; 7] = [
        Anchor::About,
        Anchor::CeoOffice,
        Anchor::Growth,
        Anchor::Product,
        Anchor::Fpa,
        Anchor::Ops,
        Anchor::EverythingElse,
    ];

    /// The element id this anchor resolves against.
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::Top => "top",
            Anchor::About => "about",
            Anchor::CeoOffice => "ceo-office",
            Anchor::Growth => "growth",
            Anchor::Product => "product",
            Anchor::Fpa => "fpa",
            Anchor::Ops => "ops",
            Anchor::EverythingElse => "everything-else",
        }
    }

    /// Label shown for this anchor in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Anchor::Top => "Top",
            Anchor::About => "About",
            Anchor::CeoOffice => "Office of the CEO",
            Anchor::Growth => "Growth / GTM",
            Anchor::Product => "Product",
            Anchor::Fpa => "FP&A",
            Anchor::Ops => "Ops",
            Anchor::EverythingElse => "Everything Else",
        }
    }
}

/// One themed block of the home page: an anchor, a heading, and the two
/// catalogued case studies it presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDef {
    pub anchor: Anchor,
    pub heading: &'static str,
    pub project_ids: [&'static str; 2],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_ids_are_stable() {
        let ids: Vec<&str> = Anchor::NAV.iter().map(|a| a.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "about",
                "ceo-office",
                "growth",
                "product",
                "fpa",
                "ops",
                "everything-else"
            ]
        );
        assert_eq!(Anchor::Top.as_str(), "top");
    }

    #[test]
    fn test_serde_matches_element_ids() {
        for anchor in Anchor::NAV {
            let json = serde_json::to_string(&anchor).unwrap();
            assert_eq!(json, format!("\"{}\"", anchor.as_str()));
        }
    }

    #[test]
    fn test_nav_excludes_top() {
        assert!(!Anchor::NAV.contains(&Anchor::Top));
    }
}
