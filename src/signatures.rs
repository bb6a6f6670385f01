// ---------------------------------------------------------------------------
// Signature table: semantic token → lowercase literal substring.
//
// Matching is containment, not word-boundary: "mobi" is meant to hit inside
// "mobile" as well, since vendors use either spelling. Every literal here is
// already lowercase; the classifier lowercases both header strings once at
// construction.
// ---------------------------------------------------------------------------

// Rendering engines
pub(crate) const ENGINE_WEBKIT: &str = "webkit";

// Apple
pub(crate) const DEVICE_IPHONE: &str = "iphone";
pub(crate) const DEVICE_IPOD: &str = "ipod";
pub(crate) const DEVICE_IPAD: &str = "ipad";
/// Old Macintosh PowerPC desktops, used only to disambiguate the "ppc" token.
pub(crate) const DEVICE_MAC_PPC: &str = "macintosh";

// Android and Google
pub(crate) const DEVICE_ANDROID: &str = "android";
pub(crate) const DEVICE_GOOGLE_TV: &str = "googletv";

// Windows phones and Windows Mobile
pub(crate) const DEVICE_WIN_PHONE7: &str = "windows phone os 7";
pub(crate) const DEVICE_WIN_PHONE8: &str = "windows phone 8";
pub(crate) const DEVICE_WIN_PHONE10: &str = "windows phone 10";
pub(crate) const DEVICE_WIN_MOB: &str = "windows ce";
pub(crate) const DEVICE_WINDOWS: &str = "windows";
pub(crate) const DEVICE_IE_MOB: &str = "iemobile";
/// PocketPC.
pub(crate) const DEVICE_PPC: &str = "ppc";
/// Pocket IE on old Windows Mobile 5.
pub(crate) const ENGINE_PIE: &str = "wm5 pie";

// BlackBerry. Model prefixes cover the touch/high-tier split of the
// pre-WebKit OS 5 generation.
pub(crate) const DEVICE_BB: &str = "blackberry";
pub(crate) const DEVICE_BB10: &str = "bb10";
/// Shows up in the Accept header when BB devices emulate IE or Firefox.
pub(crate) const VND_RIM: &str = "vnd.rim";
pub(crate) const DEVICE_BB_STORM: &str = "blackberry95";
/// Bold 97x0, non-touch.
pub(crate) const DEVICE_BB_BOLD: &str = "blackberry97";
/// Bold 99x0, touchscreen.
pub(crate) const DEVICE_BB_BOLD_TOUCH: &str = "blackberry 99";
pub(crate) const DEVICE_BB_TOUR: &str = "blackberry96";
pub(crate) const DEVICE_BB_CURVE: &str = "blackberry89";
pub(crate) const DEVICE_BB_CURVE_TOUCH: &str = "blackberry 938";
pub(crate) const DEVICE_BB_TORCH: &str = "blackberry 98";
pub(crate) const DEVICE_BB_PLAYBOOK: &str = "playbook";

// Symbian family
pub(crate) const DEVICE_SYMBIAN: &str = "symbian";
pub(crate) const DEVICE_S60: &str = "series60";
pub(crate) const DEVICE_S70: &str = "series70";
pub(crate) const DEVICE_S80: &str = "series80";
pub(crate) const DEVICE_S90: &str = "series90";

// Palm and WebOS
pub(crate) const DEVICE_PALM: &str = "palm";
pub(crate) const DEVICE_WEBOS: &str = "webos";
/// LG smart TVs spell it with a zero.
pub(crate) const DEVICE_WEBOS_TV: &str = "web0s";
/// HP's WebOS line.
pub(crate) const DEVICE_WEBOS_HP: &str = "hpwos";
/// Pre-WebOS Palm browsers.
pub(crate) const ENGINE_BLAZER: &str = "blazer";
pub(crate) const ENGINE_XIINO: &str = "xiino";

// Niche mobile OSes
pub(crate) const DEVICE_NUVIFONE: &str = "nuvifone";
pub(crate) const DEVICE_BADA: &str = "bada";
pub(crate) const DEVICE_TIZEN: &str = "tizen";
pub(crate) const DEVICE_MEEGO: &str = "meego";
pub(crate) const DEVICE_SAILFISH: &str = "sailfish";
pub(crate) const DEVICE_UBUNTU: &str = "ubuntu";

// Amazon
/// The eInk readers only; the Fire line identifies as Android.
pub(crate) const DEVICE_KINDLE: &str = "kindle";
pub(crate) const ENGINE_SILK: &str = "silk-accelerated";

// WAP/WML capability markers, matched against the Accept header.
pub(crate) const VND_WAP: &str = "vnd.wap";
pub(crate) const WML: &str = "wml";

// Slates, game consoles and other devices
pub(crate) const DEVICE_TABLET: &str = "tablet";
pub(crate) const DEVICE_BREW: &str = "brew";
pub(crate) const DEVICE_DANGER: &str = "danger";
pub(crate) const DEVICE_HIPTOP: &str = "hiptop";
pub(crate) const DEVICE_PLAYSTATION: &str = "playstation";
pub(crate) const DEVICE_PLAYSTATION_VITA: &str = "vita";
/// Nintendo DS.
pub(crate) const DEVICE_NINTENDO_DS: &str = "nitro";
pub(crate) const DEVICE_NINTENDO: &str = "nintendo";
pub(crate) const DEVICE_WII: &str = "wii";
pub(crate) const DEVICE_XBOX: &str = "xbox";
pub(crate) const DEVICE_ARCHOS: &str = "archos";

// Mobile browsers and embedded engines
pub(crate) const ENGINE_FIREFOX: &str = "firefox";
pub(crate) const ENGINE_OPERA: &str = "opera";
pub(crate) const ENGINE_NETFRONT: &str = "netfront";
pub(crate) const ENGINE_UP_BROWSER: &str = "up.browser";
/// Transcoding by an OpenWave server.
pub(crate) const ENGINE_OPEN_WEB: &str = "openweb";
/// Mobile Java capability; appears in either header.
pub(crate) const DEVICE_MIDP: &str = "midp";
pub(crate) const UPLINK: &str = "up.link";
/// A feature-phone browser capable enough for rich CSS.
pub(crate) const ENGINE_TELECA_Q: &str = "teleca q";

// Generic mobile markers
pub(crate) const DEVICE_PDA: &str = "pda";
pub(crate) const MINI: &str = "mini";
pub(crate) const MOBILE: &str = "mobile";
pub(crate) const MOBI: &str = "mobi";

// Smart TV markers
/// Samsung Tizen TVs.
pub(crate) const SMART_TV1: &str = "smart-tv";
/// LG WebOS TVs.
pub(crate) const SMART_TV2: &str = "smarttv";

// Nokia Internet Tablets and the Sony Mylo
pub(crate) const MAEMO: &str = "maemo";
pub(crate) const LINUX: &str = "linux";
pub(crate) const QT_EMBEDDED: &str = "qt embedded";
pub(crate) const MYLO_COM2: &str = "com2";

// Manufacturers that are sometimes the only clue in the string
pub(crate) const MANU_SONY_ERICSSON: &str = "sonyericsson";
pub(crate) const MANU_ERICSSON: &str = "ericsson";
pub(crate) const MANU_SAMSUNG1: &str = "sec-sgh";
pub(crate) const MANU_SONY: &str = "sony";
pub(crate) const MANU_HTC: &str = "htc";

// Operators, same story
pub(crate) const SVC_DOCOMO: &str = "docomo";
pub(crate) const SVC_KDDI: &str = "kddi";
pub(crate) const SVC_VODAFONE: &str = "vodafone";

// Disambiguators
/// Separates "pda" the device class from "update" notices.
pub(crate) const DIS_UPDATE: &str = "update";
