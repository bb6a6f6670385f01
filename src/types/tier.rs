use serde::{Deserialize, Serialize};

/// Content tier a request classifies into. Web applications pick one
/// template variant per tier.
///
/// The tiers are mutually exclusive by construction: tablets are never
/// phones, and the rich-CSS and generic buckets both exclude everything
/// already claimed by a better tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    /// Large-screen HTML5-capable slates: iPad, Android tablets, PlayBook,
    /// WebOS and Ubuntu tablets.
    Tablet,
    /// Touchscreen smartphones that render iPhone-optimized content:
    /// iPhone/iPod, Android phones, Windows Phone, BB10 and friends.
    Iphone,
    /// Capable non-touch browsers: good CSS support, but not worth serving
    /// the touch-optimized variant.
    RichCss,
    /// Everything else that is still a mobile device.
    GenericMobile,
}

impl Tier {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tablet" => Some(Self::Tablet),
            "iphone" => Some(Self::Iphone),
            "rich-css" => Some(Self::RichCss),
            "generic-mobile" => Some(Self::GenericMobile),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tablet => "tablet",
            Self::Iphone => "iphone",
            Self::RichCss => "rich-css",
            Self::GenericMobile => "generic-mobile",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_names() {
        for tier in [Tier::Tablet, Tier::Iphone, Tier::RichCss, Tier::GenericMobile] {
            assert_eq!(Tier::from_str(tier.as_str()), Some(tier));
        }
        assert_eq!(Tier::from_str("desktop"), None);
    }

    #[test]
    fn serializes_as_kebab_case() {
        assert_eq!(serde_json::to_string(&Tier::RichCss).unwrap(), "\"rich-css\"");
        assert_eq!(
            serde_json::from_str::<Tier>("\"generic-mobile\"").unwrap(),
            Tier::GenericMobile
        );
    }
}
