//! Property tests for the invariants every goal must satisfy regardless of
//! its wording.

use proptest::prelude::*;

use smart_goals::domain::foundation::{GoalDomain, GoalErrorKind, Timestamp, Urgency, UserId};
use smart_goals::domain::nlp::{
    ConstraintExtractor, GoalIntent, IntentExtractor, MetricExtractor, TimeframeParser,
    MIN_DESCRIPTION_CHARS,
};
use smart_goals::domain::smart::SmartSynthesizer;

fn reference() -> Timestamp {
    Timestamp::from_datetime("2024-03-15T09:00:00Z".parse().unwrap())
}

fn domain() -> impl Strategy<Value = GoalDomain> {
    prop::sample::select(GoalDomain::all().to_vec())
}

fn urgency() -> impl Strategy<Value = Urgency> {
    prop::sample::select(vec![Urgency::Low, Urgency::Medium, Urgency::High])
}

fn intent(domain: GoalDomain, urgency: Urgency, context: Vec<String>) -> GoalIntent {
    GoalIntent {
        domain,
        action: "improve".to_string(),
        outcome: "my daily routine".to_string(),
        context,
        urgency,
    }
}

const GOAL_WORDS: &[&str] = &[
    "I", "want", "to", "lose", "save", "$250", "20", "pounds", "in", "3", "months", "by",
    "next", "year", "for", "weeks", "because", "budget", "morning", "run", "read", "books",
    "daily", "hours", "someday", "exactly", "first", "then", "step", "1:", "%",
];

fn goal_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(GOAL_WORDS.to_vec()), 0..30)
        .prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn prop_metrics_are_never_empty(text in "\\PC{0,120}") {
        match MetricExtractor::identify_metrics(&text) {
            Ok(metrics) => prop_assert!(!metrics.is_empty()),
            Err(err) => prop_assert_eq!(err.kind, GoalErrorKind::UnmeasurableGoal),
        }
    }

    #[test]
    fn prop_goal_phrases_always_yield_metrics(text in goal_text()) {
        let metrics = MetricExtractor::identify_metrics(&text).unwrap();
        prop_assert!(!metrics.is_empty());
        prop_assert!(metrics.iter().all(|m| m.target_value > 0.0));
    }

    #[test]
    fn prop_constraints_never_fail(text in "\\PC{0,200}") {
        let info = ConstraintExtractor::extract_constraints(&text);
        prop_assert_eq!(
            info.count(),
            info.time.len() + info.resource.len() + info.personal.len() + info.preference.len()
        );
        prop_assert_eq!(info, ConstraintExtractor::extract_constraints(&text));
    }

    #[test]
    fn prop_short_descriptions_are_insufficient(text in "[ \\t\\n]{0,4}[a-z]{0,2}[ \\t\\n]{0,4}") {
        let err = IntentExtractor::new().extract_intent(&text).unwrap_err();
        prop_assert_eq!(err.kind, GoalErrorKind::InsufficientDescription);
    }

    #[test]
    fn prop_longer_descriptions_are_not_rejected_for_length(text in goal_text()) {
        prop_assume!(text.trim().chars().count() >= MIN_DESCRIPTION_CHARS);
        let intent = IntentExtractor::new().extract_intent(&text).unwrap();
        prop_assert!(!intent.action.is_empty());
    }

    #[test]
    fn prop_extraction_is_deterministic(text in goal_text()) {
        let parser = TimeframeParser::with_reference(reference());
        prop_assert_eq!(
            parser.parse_timeframes(&text).unwrap(),
            parser.parse_timeframes(&text).unwrap()
        );
        prop_assert_eq!(
            MetricExtractor::identify_metrics(&text).unwrap(),
            MetricExtractor::identify_metrics(&text).unwrap()
        );
        let extractor = IntentExtractor::new();
        prop_assert_eq!(
            extractor.extract_intent(&text).ok(),
            extractor.extract_intent(&text).ok()
        );
    }

    #[test]
    fn prop_time_bound_is_ordered(
        domain in domain(),
        urgency in urgency(),
        days in prop::option::of(1u32..3000),
    ) {
        let text = match days {
            Some(days) => format!("Finish it in {days} days"),
            None => "Finish it".to_string(),
        };
        let timeframe = TimeframeParser::with_reference(reference())
            .parse_timeframes(&text)
            .unwrap();
        let synthesizer = SmartSynthesizer::with_reference(reference());

        let constraint = synthesizer
            .generate_time_bound(&timeframe, &intent(domain, urgency, Vec::new()))
            .unwrap()
            .content;

        prop_assert!(constraint.end_date > constraint.start_date);
        prop_assert!(constraint.milestones.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(constraint
            .milestones
            .iter()
            .all(|m| *m > constraint.start_date && *m < constraint.end_date));
    }

    #[test]
    fn prop_context_never_lowers_specific_confidence(
        domain in domain(),
        urgency in urgency(),
        phrase in "[a-z]{1,10}( [a-z]{1,10}){0,3}",
    ) {
        let synthesizer = SmartSynthesizer::with_reference(reference());
        let bare = synthesizer
            .generate_specific(&intent(domain, urgency, Vec::new()))
            .unwrap();
        let with_context = synthesizer
            .generate_specific(&intent(domain, urgency, vec![phrase.clone()]))
            .unwrap();

        prop_assert!(with_context.confidence >= bare.confidence);
        let expected_suffix = format!(" in order to {}", phrase);
        prop_assert!(with_context.content.ends_with(&expected_suffix));
    }

    #[test]
    fn prop_relevance_names_exactly_the_goal_domain(domain in domain(), urgency in urgency()) {
        let synthesizer = SmartSynthesizer::with_reference(reference());
        let relevant = synthesizer.generate_relevant(
            &intent(domain, urgency, Vec::new()),
            &UserId::anonymous(),
        );
        prop_assert_eq!(relevant.content.life_areas, vec![domain]);
        prop_assert!(!relevant.content.personal_values.is_empty());
    }
}
