use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

use crate::signatures::*;

/// Build a containment scanner over a fixed set of literal signatures.
///
/// Used for detectors that accept any one of several tokens; a single
/// automaton pass replaces a chain of substring searches. Inputs are
/// pre-lowercased, so no case handling is needed here.
fn literal_set(tokens: &[&str]) -> AhoCorasick {
    AhoCorasick::new(tokens).expect("signature literals are valid patterns")
}

/// BlackBerry touchscreen model prefixes: Storm, Torch, Bold Touch,
/// Curve Touch. The PlayBook is deliberately not in this set.
pub(crate) static BLACKBERRY_TOUCH_MODELS: Lazy<AhoCorasick> = Lazy::new(|| {
    literal_set(&[
        DEVICE_BB_STORM,
        DEVICE_BB_TORCH,
        DEVICE_BB_BOLD_TOUCH,
        DEVICE_BB_CURVE_TOUCH,
    ])
});

/// Any Symbian OS generation, including browsers running on those devices.
pub(crate) static SYMBIAN_PLATFORMS: Lazy<AhoCorasick> = Lazy::new(|| {
    literal_set(&[DEVICE_SYMBIAN, DEVICE_S60, DEVICE_S70, DEVICE_S80, DEVICE_S90])
});

/// Nintendo consoles, handheld and otherwise.
pub(crate) static NINTENDO_DEVICES: Lazy<AhoCorasick> =
    Lazy::new(|| literal_set(&[DEVICE_NINTENDO, DEVICE_WII, DEVICE_NINTENDO_DS]));

/// PalmOS markers: the Palm name plus the old Blazer and Xiino browsers.
pub(crate) static PALM_LEGACY_BROWSERS: Lazy<AhoCorasick> =
    Lazy::new(|| literal_set(&[DEVICE_PALM, ENGINE_BLAZER, ENGINE_XIINO]));

/// Windows Mobile 6.x-and-earlier tokens. "windows ce" is the common one;
/// some devices report "iemobile" or Pocket IE instead.
pub(crate) static WINDOWS_MOBILE_CORE: Lazy<AhoCorasick> =
    Lazy::new(|| literal_set(&[DEVICE_WIN_MOB, DEVICE_IE_MOB, ENGINE_PIE]));

/// Manufacturer and operator tokens that are sometimes the only evidence of
/// an older phone. Note "sonyericsson" also contains "ericsson"; the scan
/// only answers presence, so the overlap is harmless.
pub(crate) static LEGACY_CARRIER_TOKENS: Lazy<AhoCorasick> = Lazy::new(|| {
    literal_set(&[
        UPLINK,
        ENGINE_OPEN_WEB,
        MANU_SAMSUNG1,
        MANU_SONY_ERICSSON,
        MANU_ERICSSON,
        SVC_DOCOMO,
        SVC_KDDI,
        SVC_VODAFONE,
    ])
});

/// WAP/WML capability tokens, matched against the Accept header.
pub(crate) static WAP_ACCEPT_TOKENS: Lazy<AhoCorasick> =
    Lazy::new(|| literal_set(&[VND_WAP, WML]));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_any_member() {
        assert!(SYMBIAN_PLATFORMS.is_match("nokia series60/3.1"));
        assert!(SYMBIAN_PLATFORMS.is_match("symbianos/9.2"));
        assert!(!SYMBIAN_PLATFORMS.is_match("series40"));
    }

    #[test]
    fn wml_matches_inside_longer_accept_value() {
        assert!(WAP_ACCEPT_TOKENS.is_match("text/vnd.wap.wml"));
        assert!(!WAP_ACCEPT_TOKENS.is_match("text/html"));
    }

    #[test]
    fn playbook_is_not_a_touch_model() {
        assert!(BLACKBERRY_TOUCH_MODELS.is_match("blackberry 9800; en-us"));
        assert!(!BLACKBERRY_TOUCH_MODELS.is_match("playbook; rim tablet os"));
    }
}
