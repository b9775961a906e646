//! Page configuration.
//!
//! Every selector, class name, text and endpoint the controllers rely on is
//! collected here. Use `SiteConfig::from_build_env()` to pick up the
//! compile-time overrides for the contact endpoint.

/// Google Apps Script endpoint receiving contact form submissions
pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbxLTZ4iCBXivqcNQ5s_YMjlateIW0sXuvKgFy5Y6UQLJX2INhdOrwynP16FlmAwnJ4/exec";

/// Google search results page listing the firm's reviews
pub const DEFAULT_REVIEWS_URL: &str = "https://www.google.com/search?q=gestionnaire+de+patrimoine+bourges&sca_esv=b338e4d9bf6df8e5&rlz=1C5CHFA_enFR972FR974&sxsrf=AE3TifPcQ3pEh5aX4q5dTZNzZyp2fd4Zjg:1765461598352&udm=1&lsack=Xs46aZubFYGckdUPp9_c6A4&sa=X&ved=2ahUKEwibwrz72LWRAxUBTqQEHacvF-0QjGp6BAgiEAE&biw=1439&bih=709&dpr=2#vhid=/g/11v5fb4fwv&vssid=rllrl";

/// Default scroll offset past which the header may hide
pub const DEFAULT_HIDE_THRESHOLD: f64 = 100.0;

/// Body encoding for the contact form submission.
///
/// `Json` is the default for custom endpoints. The Apps Script endpoint reads
/// URL-encoded parameters, so `ContactConfig::default()` pairs it with
/// `UrlEncoded`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PayloadEncoding {
    #[default]
    Json,
    UrlEncoded,
}

impl PayloadEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadEncoding::Json => "json",
            PayloadEncoding::UrlEncoded => "urlencoded",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Some(PayloadEncoding::Json),
            "urlencoded" | "form" => Some(PayloadEncoding::UrlEncoded),
            _ => None,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            PayloadEncoding::Json => "application/json",
            PayloadEncoding::UrlEncoded => "application/x-www-form-urlencoded;charset=UTF-8",
        }
    }
}

/// Mobile menu and dropdown selectors
#[derive(Debug, Clone)]
pub struct NavigationConfig {
    pub menu_toggle: &'static str,
    pub panel: &'static str,
    pub link: &'static str,
    pub dropdown_marker: &'static str,
    pub nav_item: &'static str,
    pub dropdown_link: &'static str,
    /// Class marking the menu (button and panel) as open
    pub open_class: &'static str,
    /// Class marking a dropdown item as expanded
    pub expanded_class: &'static str,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            menu_toggle: ".menu-toggle",
            panel: ".nav",
            link: ".nav-link",
            dropdown_marker: ".dropdown-arrow",
            nav_item: ".nav-item",
            dropdown_link: ".dropdown-link",
            open_class: "active",
            expanded_class: "open",
        }
    }
}

#[derive(Debug, Clone)]
pub struct HeaderConfig {
    pub selector: &'static str,
    pub hidden_class: &'static str,
    pub hide_threshold: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            selector: ".header",
            hidden_class: "hidden",
            hide_threshold: DEFAULT_HIDE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SmoothScrollConfig {
    /// In-page links intercepted for smooth scrolling
    pub anchor_selector: &'static str,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            anchor_selector: "a[href^=\"#\"]",
        }
    }
}

/// Entrance animation settings
#[derive(Debug, Clone)]
pub struct RevealConfig {
    pub targets: &'static str,
    pub revealed_class: &'static str,
    /// Fraction of the block that must be visible
    pub threshold: f64,
    /// Bottom root margin in pixels (negative triggers earlier)
    pub bottom_margin_px: i32,
}

impl RevealConfig {
    /// Root margin in the CSS shorthand `IntersectionObserver` expects
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.bottom_margin_px)
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            targets: ".service-card, .method-step",
            revealed_class: "fade-in-up",
            threshold: 0.2,
            bottom_margin_px: -50,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FaqConfig {
    pub item: &'static str,
    pub question: &'static str,
    pub expanded_class: &'static str,
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            item: ".faq-item",
            question: ".faq-question",
            expanded_class: "active",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActiveLinkConfig {
    pub link: &'static str,
    pub active_class: &'static str,
    /// Page name used when the path has no last segment
    pub home_page: &'static str,
}

impl Default for ActiveLinkConfig {
    fn default() -> Self {
        Self {
            link: ".nav-link",
            active_class: "active",
            home_page: "index.html",
        }
    }
}

/// Contact form wiring and user-facing texts
#[derive(Debug, Clone)]
pub struct ContactConfig {
    pub form_id: &'static str,
    pub submit_selector: &'static str,
    pub message_id: &'static str,
    pub endpoint: String,
    pub encoding: PayloadEncoding,
    pub sending_label: &'static str,
    pub success_class: &'static str,
    pub success_text: &'static str,
    pub failure_class: &'static str,
    pub failure_text: &'static str,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: "contactForm",
            submit_selector: "button[type=\"submit\"]",
            message_id: "formMessage",
            endpoint: DEFAULT_CONTACT_ENDPOINT.to_string(),
            encoding: PayloadEncoding::UrlEncoded,
            sending_label: "Envoi en cours...",
            success_class: "form-message success",
            success_text: "Merci ! Votre message a été envoyé avec succès. Nous vous répondrons dans les plus brefs délais.",
            failure_class: "form-message error",
            failure_text: "Une erreur est survenue. Veuillez réessayer ou nous contacter directement par téléphone.",
        }
    }
}

/// Testimonial strip placement and call-to-action
#[derive(Debug, Clone)]
pub struct ReviewsConfig {
    /// Section the strip is inserted after
    pub anchor: &'static str,
    pub section_class: &'static str,
    pub title: &'static str,
    pub reviews_url: &'static str,
    pub review_count: u32,
    /// How many times the source list is repeated on the track
    pub repeat: usize,
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            anchor: ".partners-section",
            section_class: "reviews-section-horizontal",
            title: "CE QUE DISENT NOS CLIENTS",
            reviews_url: DEFAULT_REVIEWS_URL,
            review_count: 10,
            repeat: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceCardConfig {
    pub selector: &'static str,
}

impl Default for ServiceCardConfig {
    fn default() -> Self {
        Self {
            selector: ".service-card",
        }
    }
}

/// Complete page configuration
#[derive(Debug, Clone, Default)]
pub struct SiteConfig {
    pub navigation: NavigationConfig,
    pub header: HeaderConfig,
    pub smooth_scroll: SmoothScrollConfig,
    pub reveal: RevealConfig,
    pub faq: FaqConfig,
    pub active_link: ActiveLinkConfig,
    pub contact: ContactConfig,
    pub reviews: ReviewsConfig,
    pub service_cards: ServiceCardConfig,
}

impl SiteConfig {
    /// Defaults, with `CONTACT_ENDPOINT` and `CONTACT_ENCODING` taken from
    /// the build environment when set.
    ///
    /// A custom endpoint without an explicit encoding gets JSON.
    pub fn from_build_env() -> Self {
        Self::with_overrides(
            option_env!("CONTACT_ENDPOINT"),
            option_env!("CONTACT_ENCODING"),
        )
    }

    fn with_overrides(endpoint: Option<&str>, encoding: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            config.contact.endpoint = endpoint.trim().to_string();
            config.contact.encoding = PayloadEncoding::default();
        }
        if let Some(encoding) = encoding.and_then(PayloadEncoding::parse) {
            config.contact.encoding = encoding;
        }
        config
    }
}
