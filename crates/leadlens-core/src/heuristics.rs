//! Raw web-presence signals supplied by the crawler for one business site.

use serde::{Deserialize, Serialize};

/// Presence signals extracted from a single crawled site.
///
/// The crawler contract is that every field is populated or explicitly
/// defaulted to the friction-increasing value (empty lists, `false`, `0`),
/// which is exactly what `#[serde(default)]` and [`Default`] produce. A
/// record deserialized from a sparse payload therefore scores as the
/// worst-case site rather than failing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeuristicResult {
    /// An online-booking widget or scheduling link was found.
    #[serde(default)]
    pub has_booking: bool,
    /// Vendor names of detected booking integrations (e.g. `calendly`).
    #[serde(default)]
    pub booking_services: Vec<String>,
    /// A live-chat widget was found.
    #[serde(default)]
    pub has_chat: bool,
    #[serde(default)]
    pub chat_services: Vec<String>,
    /// An instant-quote or estimator widget was found.
    #[serde(default)]
    pub has_instant_quote: bool,
    #[serde(default)]
    pub quote_services: Vec<String>,
    /// A file-upload input was found on a contact or quote form.
    #[serde(default)]
    pub has_file_upload: bool,
    /// A `<meta name="viewport">` tag was present.
    #[serde(default)]
    pub has_mobile_viewport: bool,
    /// Total input fields on the largest contact form.
    #[serde(default)]
    pub form_input_count: u32,
    /// How many of those inputs are marked required.
    #[serde(default)]
    pub form_required_count: u32,
    /// Email addresses discovered anywhere on the page.
    #[serde(default)]
    pub emails: Vec<String>,
    /// Phone numbers discovered anywhere on the page.
    #[serde(default)]
    pub phones: Vec<String>,
    /// Byte size of the fetched HTML document.
    #[serde(default)]
    pub html_size_bytes: u64,
    #[serde(default)]
    pub has_analytics: bool,
    #[serde(default)]
    pub has_tag_manager: bool,
    #[serde(default)]
    pub has_ads_tag: bool,
    #[serde(default)]
    pub has_pixel: bool,
    #[serde(default)]
    pub has_privacy_policy: bool,
    #[serde(default)]
    pub has_terms: bool,
}

/// The subset of crawl signals carried onto a [`crate::Business`] record
/// for reporting. Marketing tags do not enter the friction score; they are
/// kept for downstream qualification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteFlags {
    pub has_booking: bool,
    pub has_chat: bool,
    pub has_instant_quote: bool,
    pub has_file_upload: bool,
    pub has_mobile_viewport: bool,
    pub has_analytics: bool,
    pub has_tag_manager: bool,
    pub has_ads_tag: bool,
    pub has_pixel: bool,
    pub has_privacy_policy: bool,
    pub has_terms: bool,
}

impl From<&HeuristicResult> for SiteFlags {
    fn from(h: &HeuristicResult) -> Self {
        Self {
            has_booking: h.has_booking,
            has_chat: h.has_chat,
            has_instant_quote: h.has_instant_quote,
            has_file_upload: h.has_file_upload,
            has_mobile_viewport: h.has_mobile_viewport,
            has_analytics: h.has_analytics,
            has_tag_manager: h.has_tag_manager,
            has_ads_tag: h.has_ads_tag,
            has_pixel: h.has_pixel,
            has_privacy_policy: h.has_privacy_policy,
            has_terms: h.has_terms,
        }
    }
}
