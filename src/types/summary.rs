use serde::{Deserialize, Serialize};

/// The classification results computed eagerly for one request, as one
/// plain value. Convenient for handing the whole decision to a template
/// layer or serializing into an access log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSummary {
    pub tablet: bool,
    pub iphone: bool,
    pub rich_css: bool,
    pub generic_mobile: bool,
    /// The quick mobile-phone check; false for tablets by design.
    pub mobile: bool,
}
