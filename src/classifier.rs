use http::header;
use http::HeaderMap;

use crate::literal::*;
use crate::signatures::*;
use crate::types::{Tier, TierSummary};

/// Results memoized by the eager device scan. Written exactly once during
/// construction; `init_completed` flips last, after which every slot is
/// final for the life of the classifier.
#[derive(Debug, Default)]
struct ScanCache {
    init_completed: bool,
    is_webkit: bool,
    is_mobile_phone: bool,
    is_iphone: bool,
    is_android: bool,
    is_android_phone: bool,
    is_tier_tablet: bool,
    is_tier_iphone: bool,
    is_tier_rich_css: bool,
    is_tier_generic_mobile: bool,
}

/// Classifies one HTTP request's declared client into a device/browser
/// taxonomy, so the application can pick a device-appropriate content tier.
///
/// A classifier is built per request from the `User-Agent` and `Accept`
/// header values, lowercases both, and eagerly computes the handful of
/// results that the composite detectors reuse. Every `detect_*` method is a
/// pure function of the two stored strings: cached ones return in O(1), the
/// rest re-run their substring scan on each call. Nothing here can fail;
/// absent evidence simply reads as `false`.
///
/// Instances are cheap and single-request by design. Concurrent request
/// handlers each build their own; there is no shared mutable state.
pub struct DeviceClassifier {
    user_agent: String,
    http_accept: String,
    cache: ScanCache,
}

impl DeviceClassifier {
    /// Build a classifier from the raw `User-Agent` and `Accept` header
    /// values. Either may be empty; empty inputs fail every detector.
    pub fn new(user_agent: &str, http_accept: &str) -> Self {
        let mut classifier = Self {
            user_agent: user_agent.to_lowercase(),
            http_accept: http_accept.to_lowercase(),
            cache: ScanCache::default(),
        };
        classifier.run_device_scan();
        classifier
    }

    /// Build a classifier straight from a request's header map.
    ///
    /// Missing or non-UTF-8 header values are treated as empty strings:
    /// absence of evidence, never an error.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let user_agent = headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        let http_accept = headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        Self::new(user_agent, http_accept)
    }

    /// Compute and store the popular results, most-reused first. Later
    /// entries call earlier ones and observe the already-cached values.
    /// `init_completed` is set only after every slot is final.
    fn run_device_scan(&mut self) {
        self.cache.is_webkit = self.detect_webkit();
        self.cache.is_mobile_phone = self.detect_mobile_quick();
        self.cache.is_iphone = self.detect_iphone();
        self.cache.is_android = self.detect_android();
        self.cache.is_android_phone = self.detect_android_phone();
        self.cache.is_tier_iphone = self.detect_tier_iphone();
        self.cache.is_tier_tablet = self.detect_tier_tablet();
        self.cache.is_tier_rich_css = self.detect_tier_rich_css();
        self.cache.is_tier_generic_mobile = self.detect_tier_generic_mobile();
        self.cache.init_completed = true;

        #[cfg(feature = "logging")]
        tracing::debug!(
            tier = self.tier().map(|t| t.as_str()),
            mobile = self.cache.is_mobile_phone,
            "device scan complete"
        );
    }

    /// The normalized (lowercased) User-Agent value.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// The normalized (lowercased) Accept value.
    pub fn http_accept(&self) -> &str {
        &self.http_accept
    }

    /// The single content tier for this request, best first. `None` for
    /// desktop browsers and anything else that is not mobile at all.
    pub fn tier(&self) -> Option<Tier> {
        if self.detect_tier_tablet() {
            Some(Tier::Tablet)
        } else if self.detect_tier_iphone() {
            Some(Tier::Iphone)
        } else if self.detect_tier_rich_css() {
            Some(Tier::RichCss)
        } else if self.detect_tier_generic_mobile() {
            Some(Tier::GenericMobile)
        } else {
            None
        }
    }

    /// The eagerly computed tier flags as one value.
    pub fn summary(&self) -> TierSummary {
        TierSummary {
            tablet: self.detect_tier_tablet(),
            iphone: self.detect_tier_iphone(),
            rich_css: self.detect_tier_rich_css(),
            generic_mobile: self.detect_tier_generic_mobile(),
            mobile: self.detect_mobile_quick(),
        }
    }

    fn has(&self, token: &str) -> bool {
        self.user_agent.contains(token)
    }

    fn accept_has(&self, token: &str) -> bool {
        self.http_accept.contains(token)
    }

    // -----------------------------------------------------------------------
    // Device detection
    // -----------------------------------------------------------------------

    /// Detects if the current device is an iPhone.
    ///
    /// iPads and iPod Touches also carry iPhone-adjacent tokens, so both are
    /// checked first and excluded.
    pub fn detect_iphone(&self) -> bool {
        if self.cache.init_completed || self.cache.is_iphone {
            return self.cache.is_iphone;
        }
        if !self.has(DEVICE_IPHONE) {
            return false;
        }
        !(self.detect_ipad() || self.detect_ipod())
    }

    /// Detects if the current device is an iPod Touch.
    pub fn detect_ipod(&self) -> bool {
        self.has(DEVICE_IPOD)
    }

    /// Detects if the current device is an iPad. The WebKit check is
    /// required, not optional; it keeps desktop Mac Safari out.
    pub fn detect_ipad(&self) -> bool {
        self.has(DEVICE_IPAD) && self.detect_webkit()
    }

    /// Detects if the current device is an iPhone or iPod Touch. Some iPods
    /// report themselves as an iPhone, which is fine here.
    pub fn detect_iphone_or_ipod(&self) -> bool {
        self.detect_iphone() || self.detect_ipod()
    }

    /// Detects any iOS device: iPhone, iPod Touch or iPad.
    pub fn detect_ios(&self) -> bool {
        self.detect_iphone_or_ipod() || self.detect_ipad()
    }

    /// Detects any Android device: phone, tablet, media player, Google TV.
    pub fn detect_android(&self) -> bool {
        if self.cache.init_completed || self.cache.is_android {
            return self.cache.is_android;
        }
        self.has(DEVICE_ANDROID) || self.detect_google_tv()
    }

    /// Detects a small-ish Android device used for calling and multi-media.
    /// Android plus the "mobile" token means phone; Opera Mobile/Mini on
    /// Android also reports here.
    pub fn detect_android_phone(&self) -> bool {
        if self.cache.init_completed || self.cache.is_android_phone {
            return self.cache.is_android_phone;
        }
        if !self.detect_android() {
            return false;
        }
        self.has(MOBILE) || self.detect_opera_mobile()
    }

    /// Detects a self-reported Android tablet: Android without the "mobile"
    /// token. Opera Mobile/Mini is excluded; it does not distinguish phone
    /// from tablet and is counted as a phone.
    pub fn detect_android_tablet(&self) -> bool {
        if !self.detect_android() {
            return false;
        }
        if self.detect_opera_mobile() {
            return false;
        }
        !self.has(MOBILE)
    }

    /// Detects an Android device with a WebKit-based browser.
    pub fn detect_android_webkit(&self) -> bool {
        self.detect_android() && self.detect_webkit()
    }

    /// Detects a Google TV.
    pub fn detect_google_tv(&self) -> bool {
        self.has(DEVICE_GOOGLE_TV)
    }

    /// Detects if the current browser is based on WebKit.
    pub fn detect_webkit(&self) -> bool {
        if self.cache.init_completed || self.cache.is_webkit {
            return self.cache.is_webkit;
        }
        self.has(ENGINE_WEBKIT)
    }

    /// Detects a Windows Phone 7, 8 or 10 device.
    pub fn detect_windows_phone(&self) -> bool {
        self.detect_windows_phone7() || self.detect_windows_phone8() || self.detect_windows_phone10()
    }

    /// Detects a Windows Phone 7 device in mobile browsing mode.
    pub fn detect_windows_phone7(&self) -> bool {
        self.has(DEVICE_WIN_PHONE7)
    }

    /// Detects a Windows Phone 8 device in mobile browsing mode.
    pub fn detect_windows_phone8(&self) -> bool {
        self.has(DEVICE_WIN_PHONE8)
    }

    /// Detects a Windows Phone 10 device in mobile browsing mode.
    pub fn detect_windows_phone10(&self) -> bool {
        self.has(DEVICE_WIN_PHONE10)
    }

    /// Detects legacy Windows Mobile (6.x and earlier). Windows Phone 7+
    /// is excluded up front.
    pub fn detect_windows_mobile(&self) -> bool {
        if self.detect_windows_phone() {
            return false;
        }
        if WINDOWS_MOBILE_CORE.is_match(&self.user_agent) {
            return true;
        }
        // PocketPC, but not an old Macintosh PowerPC desktop.
        if self.has(DEVICE_PPC) && !self.has(DEVICE_MAC_PPC) {
            return true;
        }
        // Certain HTC devices only name the manufacturer and the OS.
        if self.has(MANU_HTC) && self.has(DEVICE_WINDOWS) {
            return true;
        }
        self.detect_wap_wml() && self.has(DEVICE_WINDOWS)
    }

    /// Detects any BlackBerry device, including BB10 phones but excluding
    /// the PlayBook.
    pub fn detect_blackberry(&self) -> bool {
        if self.has(DEVICE_BB) || self.accept_has(VND_RIM) {
            return true;
        }
        self.detect_blackberry10_phone()
    }

    /// Detects a BlackBerry 10 OS phone. Excludes tablets.
    pub fn detect_blackberry10_phone(&self) -> bool {
        self.has(DEVICE_BB10) && self.has(MOBILE)
    }

    /// Detects a BlackBerry tablet (PlayBook).
    pub fn detect_blackberry_tablet(&self) -> bool {
        self.has(DEVICE_BB_PLAYBOOK)
    }

    /// Detects a BlackBerry with a WebKit-based browser, the signature of
    /// BlackBerry OS 6+.
    pub fn detect_blackberry_webkit(&self) -> bool {
        self.detect_blackberry() && self.detect_webkit()
    }

    /// Detects a large-screen BlackBerry touch phone: Storm, Torch, Bold
    /// Touch, Curve Touch. Excludes the PlayBook.
    pub fn detect_blackberry_touch(&self) -> bool {
        BLACKBERRY_TOUCH_MODELS.is_match(&self.user_agent)
    }

    /// Detects a BlackBerry OS 5 device with the more capable browser of
    /// that generation: Storm, Bold, Tour, Curve2. The OS 6+ WebKit browser
    /// is explicitly not this tier.
    pub fn detect_blackberry_high(&self) -> bool {
        if self.detect_blackberry_webkit() {
            return false;
        }
        if !self.detect_blackberry() {
            return false;
        }
        self.detect_blackberry_touch()
            || self.has(DEVICE_BB_BOLD)
            || self.has(DEVICE_BB_TOUR)
            || self.has(DEVICE_BB_CURVE)
    }

    /// Detects a BlackBerry with an older, less capable browser: Pearl,
    /// 8800, Curve1. The residual tier: any BlackBerry that is neither High
    /// nor WebKit.
    pub fn detect_blackberry_low(&self) -> bool {
        if !self.detect_blackberry() {
            return false;
        }
        !(self.detect_blackberry_high() || self.detect_blackberry_webkit())
    }

    /// Detects the Nokia S60 Open Source browser: WebKit plus a Symbian or
    /// Series 60 token.
    pub fn detect_s60_oss_browser(&self) -> bool {
        if !self.detect_webkit() {
            return false;
        }
        self.has(DEVICE_SYMBIAN) || self.has(DEVICE_S60)
    }

    /// Detects any Symbian OS device: S60 through Series 90 and UIQ, or
    /// other browsers running on them.
    pub fn detect_symbian_os(&self) -> bool {
        SYMBIAN_PLATFORMS.is_match(&self.user_agent)
    }

    /// Detects a PalmOS device. Most report "palm", older ones only name
    /// the Blazer or Xiino browser. WebOS devices are excluded.
    pub fn detect_palm_os(&self) -> bool {
        if !PALM_LEGACY_BROWSERS.is_match(&self.user_agent) {
            return false;
        }
        !self.detect_palm_webos()
    }

    /// Detects a Palm device running WebOS.
    pub fn detect_palm_webos(&self) -> bool {
        self.has(DEVICE_WEBOS)
    }

    /// Detects an HP tablet running WebOS.
    pub fn detect_webos_tablet(&self) -> bool {
        self.has(DEVICE_WEBOS_HP) && self.has(DEVICE_TABLET)
    }

    /// Detects an LG smart TV running WebOS.
    pub fn detect_webos_tv(&self) -> bool {
        self.has(DEVICE_WEBOS_TV) && self.has(SMART_TV2)
    }

    /// Detects Opera Mobile or Opera Mini. The same UA shows up on phones
    /// and tablets alike, so this never answers which.
    pub fn detect_opera_mobile(&self) -> bool {
        self.has(ENGINE_OPERA) && (self.has(MINI) || self.has(MOBI))
    }

    /// Detects an Amazon Kindle in the eInk sense. The Kindle Fire says
    /// Android and must classify through the Android path instead.
    pub fn detect_kindle(&self) -> bool {
        self.has(DEVICE_KINDLE) && !self.detect_android()
    }

    /// Detects an Amazon device with Silk accelerated browsing turned on,
    /// typically a Kindle Fire.
    pub fn detect_amazon_silk(&self) -> bool {
        self.has(ENGINE_SILK)
    }

    /// Detects a Garmin Nuvifone.
    pub fn detect_garmin_nuvifone(&self) -> bool {
        self.has(DEVICE_NUVIFONE)
    }

    /// Detects a device running Samsung's Bada OS.
    pub fn detect_bada(&self) -> bool {
        self.has(DEVICE_BADA)
    }

    /// Detects a Tizen smartphone. The "mobile" token separates phones from
    /// Samsung's Tizen smart TVs.
    pub fn detect_tizen(&self) -> bool {
        self.has(DEVICE_TIZEN) && self.has(MOBILE)
    }

    /// Detects a Tizen smart TV.
    pub fn detect_tizen_tv(&self) -> bool {
        self.has(DEVICE_TIZEN) && self.has(SMART_TV1)
    }

    /// Detects any device running Meego OS.
    pub fn detect_meego(&self) -> bool {
        self.has(DEVICE_MEEGO)
    }

    /// Detects a Meego phone, including Opera browsers on Meego.
    pub fn detect_meego_phone(&self) -> bool {
        self.has(DEVICE_MEEGO) && self.has(MOBI)
    }

    /// Detects a mobile device probably running Firefox OS.
    pub fn detect_firefox_os(&self) -> bool {
        self.detect_firefox_os_phone() || self.detect_firefox_os_tablet()
    }

    /// Detects a phone probably running Firefox OS.
    ///
    /// Firefox emits no token that distinguishes its OS from its browser on
    /// other platforms, so ruling out the competing OSes is the primary
    /// signal.
    pub fn detect_firefox_os_phone(&self) -> bool {
        if self.detect_ios() || self.detect_android() || self.detect_sailfish() {
            return false;
        }
        self.has(ENGINE_FIREFOX) && self.has(MOBILE)
    }

    /// Detects a tablet probably running Firefox OS, by the same exclusion
    /// logic as the phone check.
    pub fn detect_firefox_os_tablet(&self) -> bool {
        if self.detect_ios() || self.detect_android() || self.detect_sailfish() {
            return false;
        }
        self.has(ENGINE_FIREFOX) && self.has(DEVICE_TABLET)
    }

    /// Detects a device running Sailfish OS.
    pub fn detect_sailfish(&self) -> bool {
        self.has(DEVICE_SAILFISH)
    }

    /// Detects a phone running Sailfish OS.
    pub fn detect_sailfish_phone(&self) -> bool {
        self.detect_sailfish() && self.has(MOBILE)
    }

    /// Detects a mobile device running Ubuntu Mobile OS.
    pub fn detect_ubuntu(&self) -> bool {
        self.detect_ubuntu_phone() || self.detect_ubuntu_tablet()
    }

    /// Detects a phone running Ubuntu Mobile OS.
    pub fn detect_ubuntu_phone(&self) -> bool {
        self.has(DEVICE_UBUNTU) && self.has(MOBILE)
    }

    /// Detects a tablet running Ubuntu Mobile OS.
    pub fn detect_ubuntu_tablet(&self) -> bool {
        self.has(DEVICE_UBUNTU) && self.has(DEVICE_TABLET)
    }

    /// Detects the Danger Hiptop.
    pub fn detect_danger_hiptop(&self) -> bool {
        self.has(DEVICE_DANGER) || self.has(DEVICE_HIPTOP)
    }

    /// Detects a Sony Mylo.
    pub fn detect_sony_mylo(&self) -> bool {
        self.has(MANU_SONY) && (self.has(QT_EMBEDDED) || self.has(MYLO_COM2))
    }

    /// Detects a Maemo-based Nokia Internet Tablet. The N810 needs the
    /// Linux-plus-tablet combination, minus anything that is really a WebOS
    /// tablet or Android device.
    pub fn detect_maemo_tablet(&self) -> bool {
        if self.has(MAEMO) {
            return true;
        }
        self.has(LINUX)
            && self.has(DEVICE_TABLET)
            && !self.detect_webos_tablet()
            && !self.detect_android()
    }

    /// Detects an Archos media player / Internet tablet.
    pub fn detect_archos(&self) -> bool {
        self.has(DEVICE_ARCHOS)
    }

    /// Detects an Internet-capable game console, handhelds included.
    pub fn detect_game_console(&self) -> bool {
        self.detect_sony_playstation() || self.detect_nintendo() || self.detect_xbox()
    }

    /// Detects a Sony PlayStation.
    pub fn detect_sony_playstation(&self) -> bool {
        self.has(DEVICE_PLAYSTATION)
    }

    /// Detects a handheld gaming device with a touchscreen and a modern
    /// iPhone-class browser, i.e. the PlayStation Vita.
    pub fn detect_gaming_handheld(&self) -> bool {
        self.has(DEVICE_PLAYSTATION) && self.has(DEVICE_PLAYSTATION_VITA)
    }

    /// Detects a Nintendo game device.
    pub fn detect_nintendo(&self) -> bool {
        NINTENDO_DEVICES.is_match(&self.user_agent)
    }

    /// Detects a Microsoft Xbox.
    pub fn detect_xbox(&self) -> bool {
        self.has(DEVICE_XBOX)
    }

    /// Detects a Brew-powered device.
    pub fn detect_brew_device(&self) -> bool {
        self.has(DEVICE_BREW)
    }

    /// Detects WAP or WML support, from the Accept header.
    pub fn detect_wap_wml(&self) -> bool {
        WAP_ACCEPT_TOKENS.is_match(&self.http_accept)
    }

    /// Detects MIDP (mobile Java) support, in either header.
    pub fn detect_midp_capable(&self) -> bool {
        self.has(DEVICE_MIDP) || self.accept_has(DEVICE_MIDP)
    }

    // -----------------------------------------------------------------------
    // Device classes
    // -----------------------------------------------------------------------

    /// Detects any smartphone-class device. For modern touchscreen devices
    /// the iPhone tier is the better question to ask.
    pub fn detect_smartphone(&self) -> bool {
        self.detect_tier_iphone()
            || self.detect_s60_oss_browser()
            || self.detect_symbian_os()
            || self.detect_windows_mobile()
            || self.detect_blackberry()
            || self.detect_meego_phone()
            || self.detect_palm_webos()
    }

    /// The quick check for a mobile device: most current feature phones and
    /// everything smartphone-class. Tablets never count as phones, so a
    /// tablet-tier match short-circuits to false.
    pub fn detect_mobile_quick(&self) -> bool {
        if self.cache.init_completed || self.cache.is_mobile_phone {
            return self.cache.is_mobile_phone;
        }
        if self.detect_tier_tablet() {
            return false;
        }
        if self.detect_smartphone() {
            return true;
        }
        if self.has(MOBILE) {
            return true;
        }
        if self.detect_opera_mobile() {
            return true;
        }
        if self.detect_kindle() || self.detect_amazon_silk() {
            return true;
        }
        if self.detect_wap_wml() || self.detect_midp_capable() || self.detect_brew_device() {
            return true;
        }
        self.has(ENGINE_NETFRONT) || self.has(ENGINE_UP_BROWSER)
    }

    /// The thorough check for a mobile device: everything the quick check
    /// finds, plus game consoles, Internet tablets, and the older and more
    /// obscure devices where a manufacturer or operator token is the only
    /// clue.
    pub fn detect_mobile_long(&self) -> bool {
        if self.detect_mobile_quick() {
            return true;
        }
        if self.detect_game_console() {
            return true;
        }
        if self.detect_danger_hiptop()
            || self.detect_maemo_tablet()
            || self.detect_sony_mylo()
            || self.detect_archos()
        {
            return true;
        }
        // Some devices self-report as PDAs; "update" notices do too.
        if self.has(DEVICE_PDA) && !self.has(DIS_UPDATE) {
            return true;
        }
        LEGACY_CARRIER_TOKENS.is_match(&self.user_agent)
    }

    // -----------------------------------------------------------------------
    // Content tiers
    // -----------------------------------------------------------------------

    /// The tier of HTML5-capable, larger-screen tablets: iPad, Android
    /// tablets, PlayBook, WebOS and friends.
    pub fn detect_tier_tablet(&self) -> bool {
        if self.cache.init_completed || self.cache.is_tier_tablet {
            return self.cache.is_tier_tablet;
        }
        self.detect_ipad()
            || self.detect_android_tablet()
            || self.detect_blackberry_tablet()
            || self.detect_firefox_os_tablet()
            || self.detect_ubuntu_tablet()
            || self.detect_webos_tablet()
    }

    /// The tier of devices that display iPhone-optimized content: iPhone
    /// and iPod Touch, Android phones, Windows Phone, BB10, the PS Vita and
    /// the rest of the touchscreen-smartphone generation.
    pub fn detect_tier_iphone(&self) -> bool {
        if self.cache.init_completed || self.cache.is_tier_iphone {
            return self.cache.is_tier_iphone;
        }
        if self.detect_iphone_or_ipod()
            || self.detect_android_phone()
            || self.detect_windows_phone()
            || self.detect_blackberry10_phone()
            || self.detect_palm_webos()
            || self.detect_bada()
            || self.detect_tizen()
            || self.detect_firefox_os_phone()
            || self.detect_sailfish_phone()
            || self.detect_ubuntu_phone()
            || self.detect_gaming_handheld()
        {
            return true;
        }
        // BlackBerry OS 6+ qualifies only on the touchscreen models.
        self.detect_blackberry_webkit() && self.detect_blackberry_touch()
    }

    /// The tier of devices likely to handle iPhone-optimized CSS but not
    /// necessarily JavaScript: the good-browser, not-touch-optimized
    /// bucket. Excludes everything in the iPhone tier and eInk Kindles.
    pub fn detect_tier_rich_css(&self) -> bool {
        if self.cache.init_completed || self.cache.is_tier_rich_css {
            return self.cache.is_tier_rich_css;
        }
        if !self.detect_mobile_quick() {
            return false;
        }
        if self.detect_tier_iphone() || self.detect_kindle() {
            return false;
        }
        self.detect_webkit()
            || self.detect_s60_oss_browser()
            || self.detect_blackberry_high()
            || self.detect_windows_mobile()
            || self.has(ENGINE_TELECA_Q)
    }

    /// The tier for all remaining phones: mobile by the thorough check but
    /// neither iPhone-tier nor rich-CSS-tier. Strictly residual.
    pub fn detect_tier_generic_mobile(&self) -> bool {
        if self.cache.init_completed || self.cache.is_tier_generic_mobile {
            return self.cache.is_tier_generic_mobile;
        }
        self.detect_mobile_long() && !self.detect_tier_iphone() && !self.detect_tier_rich_css()
    }
}
