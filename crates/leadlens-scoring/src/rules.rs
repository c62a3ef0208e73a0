//! The friction rule table.
//!
//! Each rule is a `(condition, delta, note)` entry evaluated in the fixed
//! order below. [`crate::scorer::score`] walks the table once; note strings
//! are appended in table order, so two runs over the same input produce
//! byte-identical note sequences.

use leadlens_core::HeuristicResult;

use crate::scorer::ScoringFactors;

/// Pages larger than this are penalized as poor mobile experiences. 1.2 MiB.
pub(crate) const MOBILE_HTML_BYTE_LIMIT: u64 = 6 * 1024 * 1024 / 5;

pub(crate) struct ScoreRule {
    /// Points added (friction) or subtracted (convenience credit).
    pub(crate) delta: i32,
    pub(crate) applies: fn(&HeuristicResult) -> bool,
    pub(crate) mark: fn(&mut ScoringFactors),
    pub(crate) note: fn(&HeuristicResult, &mut Vec<String>),
}

pub(crate) const RULES: &[ScoreRule] = &[
    ScoreRule {
        delta: 25,
        applies: |h| !h.has_booking,
        mark: |f| f.no_booking = true,
        note: |_, notes| notes.push("no_booking".to_owned()),
    },
    ScoreRule {
        delta: 20,
        applies: |h| h.form_input_count > 6 || h.form_required_count > 3,
        mark: |f| f.long_form = true,
        note: |h, notes| {
            notes.push(format!("form_{}_inputs", h.form_input_count));
            if h.form_required_count > 3 {
                notes.push(format!("{}_required_fields", h.form_required_count));
            }
        },
    },
    ScoreRule {
        delta: 10,
        applies: |h| h.phones.is_empty(),
        mark: |f| f.no_phone_link = true,
        note: |_, notes| notes.push("no_phone_link".to_owned()),
    },
    ScoreRule {
        delta: 10,
        applies: |h| h.emails.is_empty(),
        mark: |f| f.no_email = true,
        note: |_, notes| notes.push("no_email".to_owned()),
    },
    ScoreRule {
        delta: 10,
        applies: |h| !h.has_chat,
        mark: |f| f.no_chat = true,
        note: |_, notes| notes.push("no_chat".to_owned()),
    },
    ScoreRule {
        delta: 25,
        applies: |h| !h.has_instant_quote,
        mark: |f| f.no_instant_quote = true,
        note: |_, notes| notes.push("no_instant_quote".to_owned()),
    },
    ScoreRule {
        delta: 10,
        applies: |h| !h.has_file_upload,
        mark: |f| f.no_file_upload = true,
        note: |_, notes| notes.push("no_file_upload".to_owned()),
    },
    ScoreRule {
        delta: 5,
        applies: |h| !h.has_mobile_viewport || h.html_size_bytes > MOBILE_HTML_BYTE_LIMIT,
        mark: |f| f.poor_mobile = true,
        note: |h, notes| {
            if !h.has_mobile_viewport {
                notes.push("no_meta_viewport".to_owned());
            }
            if h.html_size_bytes > MOBILE_HTML_BYTE_LIMIT {
                notes.push(format!("html_{}kb", h.html_size_bytes / 1024));
            }
        },
    },
    ScoreRule {
        delta: -20,
        applies: |h| h.has_booking,
        mark: |f| f.has_online_booking = true,
        note: |h, notes| notes.push(credit_note("booking", &h.booking_services, "online_booking")),
    },
    ScoreRule {
        delta: -10,
        applies: |h| h.has_chat,
        mark: |f| f.has_chat_widget = true,
        note: |h, notes| notes.push(credit_note("chat", &h.chat_services, "chat_widget")),
    },
    ScoreRule {
        delta: -20,
        applies: |h| h.has_instant_quote,
        mark: |f| f.has_instant_quote_widget = true,
        note: |h, notes| notes.push(credit_note("instant", &h.quote_services, "instant_quote")),
    },
];

/// Note for a convenience credit: `<prefix>_<services joined by _>`, or the
/// fixed fallback when no vendor was identified.
fn credit_note(prefix: &str, services: &[String], fallback: &str) -> String {
    if services.is_empty() {
        fallback.to_owned()
    } else {
        format!("{prefix}_{}", services.join("_"))
    }
}
