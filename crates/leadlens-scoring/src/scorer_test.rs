use leadlens_core::{HeuristicResult, ScoreBand, TargetingTier};

use super::*;

/// A site with every convenience present and light forms; the best case
/// the scorer can see.
fn full_amenity_site() -> HeuristicResult {
    HeuristicResult {
        has_booking: true,
        booking_services: vec!["calendly".to_owned()],
        has_chat: true,
        chat_services: vec!["intercom".to_owned()],
        has_instant_quote: true,
        quote_services: vec!["hover".to_owned()],
        has_file_upload: true,
        has_mobile_viewport: true,
        form_input_count: 3,
        form_required_count: 1,
        emails: vec!["office@example.com".to_owned()],
        phones: vec!["303-555-0144".to_owned()],
        html_size_bytes: 400_000,
        ..HeuristicResult::default()
    }
}

/// The maximally frictionful site from the scoring scenario: no amenities,
/// a long strict form, no contact details, bloated page, no viewport.
fn worst_case_site() -> HeuristicResult {
    HeuristicResult {
        form_input_count: 8,
        form_required_count: 5,
        html_size_bytes: 2_000_000,
        ..HeuristicResult::default()
    }
}

// ---------------------------------------------------------------------------
// score: totals, clamping, bands
// ---------------------------------------------------------------------------

#[test]
fn worst_case_clamps_to_100_and_lands_in_band_a() {
    // 25+20+10+10+10+25+10+5 = 115, clamped to 100. The clamp runs before
    // banding, so a maximally frictionful site is top targeting priority.
    let outcome = score(&worst_case_site()).unwrap();
    assert_eq!(outcome.score, 100);
    assert_eq!(outcome.band(), ScoreBand::A);
    assert_eq!(outcome.band().tier(), TargetingTier::Priority);
}

#[test]
fn full_amenity_site_clamps_to_zero() {
    // Credits only: -20 -10 -20 = -50, clamped to 0.
    let outcome = score(&full_amenity_site()).unwrap();
    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.band(), ScoreBand::D);
}

#[test]
fn default_input_scores_all_friction_rules_except_long_form() {
    // Empty crawl: 25+10+10+10+25+10+5 = 95. A zero-input form is not a
    // long form.
    let outcome = score(&HeuristicResult::default()).unwrap();
    assert_eq!(outcome.score, 95);
    assert!(outcome.factors.no_booking);
    assert!(!outcome.factors.long_form);
    assert!(outcome.factors.poor_mobile);
}

#[test]
fn score_is_always_within_range() {
    for h in [
        HeuristicResult::default(),
        full_amenity_site(),
        worst_case_site(),
    ] {
        let outcome = score(&h).unwrap();
        assert!(outcome.score <= 100, "score {} out of range", outcome.score);
    }
}

#[test]
fn scoring_is_idempotent() {
    let h = worst_case_site();
    let first = score(&h).unwrap();
    let second = score(&h).unwrap();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// score: note content and ordering
// ---------------------------------------------------------------------------

#[test]
fn worst_case_notes_follow_rule_table_order() {
    let outcome = score(&worst_case_site()).unwrap();
    assert_eq!(
        outcome.notes,
        vec![
            "no_booking",
            "form_8_inputs",
            "5_required_fields",
            "no_phone_link",
            "no_email",
            "no_chat",
            "no_instant_quote",
            "no_file_upload",
            "no_meta_viewport",
            "html_1953kb",
        ]
    );
}

#[test]
fn long_form_by_required_count_only() {
    let h = HeuristicResult {
        form_input_count: 5,
        form_required_count: 4,
        ..HeuristicResult::default()
    };
    let outcome = score(&h).unwrap();
    assert!(outcome.factors.long_form);
    assert!(outcome.notes.contains(&"form_5_inputs".to_owned()));
    assert!(outcome.notes.contains(&"4_required_fields".to_owned()));
}

#[test]
fn long_form_by_input_count_omits_required_note() {
    let h = HeuristicResult {
        form_input_count: 8,
        form_required_count: 2,
        ..HeuristicResult::default()
    };
    let outcome = score(&h).unwrap();
    assert!(outcome.notes.contains(&"form_8_inputs".to_owned()));
    assert!(!outcome.notes.iter().any(|n| n.ends_with("_required_fields")));
}

#[test]
fn short_form_fires_no_long_form_rule() {
    let h = HeuristicResult {
        form_input_count: 6,
        form_required_count: 3,
        ..HeuristicResult::default()
    };
    let outcome = score(&h).unwrap();
    assert!(!outcome.factors.long_form);
}

#[test]
fn booking_credit_joins_service_names() {
    let h = HeuristicResult {
        has_booking: true,
        booking_services: vec!["calendly".to_owned(), "housecallpro".to_owned()],
        ..HeuristicResult::default()
    };
    let outcome = score(&h).unwrap();
    assert!(outcome.factors.has_online_booking);
    assert!(outcome
        .notes
        .contains(&"booking_calendly_housecallpro".to_owned()));
}

#[test]
fn booking_credit_without_vendor_uses_fallback_note() {
    let h = HeuristicResult {
        has_booking: true,
        ..HeuristicResult::default()
    };
    let outcome = score(&h).unwrap();
    assert!(outcome.notes.contains(&"online_booking".to_owned()));
}

#[test]
fn chat_credit_without_vendor_uses_fallback_note() {
    let h = HeuristicResult {
        has_chat: true,
        ..HeuristicResult::default()
    };
    let outcome = score(&h).unwrap();
    assert!(outcome.factors.has_chat_widget);
    assert!(outcome.notes.contains(&"chat_widget".to_owned()));
}

#[test]
fn instant_quote_credit_without_vendor_uses_fallback_note() {
    let h = HeuristicResult {
        has_instant_quote: true,
        ..HeuristicResult::default()
    };
    let outcome = score(&h).unwrap();
    assert!(outcome.factors.has_instant_quote_widget);
    assert!(outcome.notes.contains(&"instant_quote".to_owned()));
}

#[test]
fn instant_quote_credit_joins_service_names() {
    let h = HeuristicResult {
        has_instant_quote: true,
        quote_services: vec!["hover".to_owned()],
        ..HeuristicResult::default()
    };
    let outcome = score(&h).unwrap();
    assert!(outcome.notes.contains(&"instant_hover".to_owned()));
}

// ---------------------------------------------------------------------------
// score: poor_mobile branches
// ---------------------------------------------------------------------------

#[test]
fn oversized_page_with_viewport_notes_size_only() {
    let h = HeuristicResult {
        has_mobile_viewport: true,
        html_size_bytes: 2_000_000,
        ..HeuristicResult::default()
    };
    let outcome = score(&h).unwrap();
    assert!(outcome.factors.poor_mobile);
    assert!(outcome.notes.contains(&"html_1953kb".to_owned()));
    assert!(!outcome.notes.contains(&"no_meta_viewport".to_owned()));
}

#[test]
fn page_at_size_limit_does_not_fire_poor_mobile() {
    let h = HeuristicResult {
        has_mobile_viewport: true,
        html_size_bytes: crate::rules::MOBILE_HTML_BYTE_LIMIT,
        ..HeuristicResult::default()
    };
    let outcome = score(&h).unwrap();
    assert!(!outcome.factors.poor_mobile);
}

#[test]
fn missing_viewport_alone_fires_poor_mobile_once() {
    let h = HeuristicResult {
        html_size_bytes: 100_000,
        ..HeuristicResult::default()
    };
    let outcome = score(&h).unwrap();
    assert!(outcome.factors.poor_mobile);
    assert!(outcome.notes.contains(&"no_meta_viewport".to_owned()));
    assert!(!outcome.notes.iter().any(|n| n.starts_with("html_")));
}

#[test]
fn outcome_serializes_for_the_reporting_layer() {
    let outcome = score(&worst_case_site()).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["score"], 100);
    assert_eq!(json["factors"]["no_booking"], true);
    assert_eq!(json["notes"][0], "no_booking");
}

// ---------------------------------------------------------------------------
// score: contract violations
// ---------------------------------------------------------------------------

#[test]
fn required_count_above_input_count_fails_fast() {
    let h = HeuristicResult {
        form_input_count: 4,
        form_required_count: 5,
        ..HeuristicResult::default()
    };
    let err = score(&h).unwrap_err();
    assert!(
        matches!(err, ScoringError::InvalidHeuristics { ref reason } if reason.contains("exceeds")),
        "expected InvalidHeuristics, got: {err:?}"
    );
}
