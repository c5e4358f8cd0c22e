//! Integration tests for the goal pipeline.
//!
//! These tests verify the end-to-end flow:
//! 1. The rule-based analyzer extracts domain, intent, timeframe, metrics and constraints
//! 2. AnalyzeGoalHandler assembles and scores the analysis
//! 3. GenerateSmartGoalHandler synthesizes the five SMART components
//! 4. SmartGoalValidator grades the resulting draft
//!
//! Every date is resolved against a fixed reference instant.

use std::sync::Arc;

use smart_goals::adapters::rules::{RuleBasedGoalAnalyzer, TemplateSmartGenerator};
use smart_goals::application::{
    AnalyzeGoalCommand, AnalyzeGoalHandler, GenerateSmartGoalCommand, GenerateSmartGoalHandler,
};
use smart_goals::domain::analysis::{SmartGoalDraft, SmartGoalValidator};
use smart_goals::domain::foundation::{
    ConfidenceLevel, Flexibility, GoalDomain, GoalError, GoalErrorKind, Timestamp, Urgency,
    UserId,
};
use smart_goals::domain::nlp::{GoalDuration, GoalIntent, IntentExtractor, TimeframeInfo};
use smart_goals::domain::smart::{DifficultyLevel, SmartSynthesizer};

// =============================================================================
// Test Infrastructure
// =============================================================================

const WEDDING_GOAL: &str = "I want to lose 20 pounds in 6 months by working out 3 times a week because I have a wedding coming up";

fn reference() -> Timestamp {
    at("2024-03-15T09:00:00Z")
}

fn at(rfc3339: &str) -> Timestamp {
    Timestamp::from_datetime(rfc3339.parse().unwrap())
}

fn analyze_handler() -> AnalyzeGoalHandler {
    AnalyzeGoalHandler::new(Arc::new(
        RuleBasedGoalAnalyzer::new().with_reference(reference()),
    ))
}

fn generate_handler() -> GenerateSmartGoalHandler {
    GenerateSmartGoalHandler::new(
        analyze_handler(),
        Arc::new(TemplateSmartGenerator::with_reference(reference())),
    )
}

async fn generate(description: &str) -> Result<SmartGoalDraft, GoalError> {
    generate_handler()
        .handle(GenerateSmartGoalCommand {
            user_id: UserId::new("user-42").unwrap(),
            description: description.to_string(),
        })
        .await
}

// =============================================================================
// Analysis
// =============================================================================

#[tokio::test]
async fn gym_goal_is_fitness_with_low_urgency() {
    let analysis = analyze_handler()
        .handle(AnalyzeGoalCommand {
            description: "I want to start working out at the gym 3 times a week".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(analysis.domain, GoalDomain::Fitness);
    assert_eq!(analysis.intent.action, "start");
    assert_eq!(analysis.intent.urgency, Urgency::Low);
    assert!(analysis.summary.starts_with("This is a fitness goal to start"));
}

#[tokio::test]
async fn empty_description_is_rejected_with_suggestions() {
    let err = analyze_handler()
        .handle(AnalyzeGoalCommand {
            description: String::new(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, GoalErrorKind::InsufficientDescription);
    assert!(err.recoverable);
    assert_eq!(err.suggestions.len(), 3);
}

#[tokio::test]
async fn savings_goal_reads_currency_amount() {
    let analysis = analyze_handler()
        .handle(AnalyzeGoalCommand {
            description: "I want to save $5000 for an emergency fund".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(analysis.domain, GoalDomain::Finance);
    assert_eq!(analysis.intent.action, "save");
    let money = analysis
        .metrics
        .iter()
        .find(|m| m.target_value == 5000.0)
        .expect("currency metric");
    assert_eq!(money.unit, "dollars");
    assert_eq!(money.confidence, ConfidenceLevel::High);
}

#[tokio::test]
async fn wedding_goal_extracts_every_part() {
    let analysis = analyze_handler()
        .handle(AnalyzeGoalCommand {
            description: WEDDING_GOAL.to_string(),
        })
        .await
        .unwrap();

    assert_eq!(analysis.domain, GoalDomain::Fitness);
    assert!(analysis
        .intent
        .context
        .iter()
        .any(|phrase| phrase.contains("wedding coming up")));
    assert!(analysis
        .timeframe
        .extracted_phrases
        .contains(&"in 6 months".to_string()));
    assert_eq!(analysis.timeframe.end_date, Some(at("2024-09-15T09:00:00Z")));
    assert_eq!(analysis.timeframe.start_date, Some(reference()));

    let pounds = analysis
        .metrics
        .iter()
        .find(|m| m.target_value == 20.0)
        .expect("weight metric");
    assert_eq!(pounds.unit, "pounds");
    assert!(analysis.metrics.iter().any(|m| m.target_value == 3.0));
    assert!(!analysis.is_degraded());
}

#[tokio::test]
async fn total_duration_wins_over_daily_rate() {
    let analysis = analyze_handler()
        .handle(AnalyzeGoalCommand {
            description: "I want to spend 2 hours daily on this for 4 weeks".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(
        analysis.timeframe.duration,
        Some(GoalDuration {
            hours: 672.0,
            days: Some(28),
            weeks: Some(4),
        })
    );
}

#[tokio::test]
async fn vague_goal_still_gets_a_metric() {
    let analysis = analyze_handler()
        .handle(AnalyzeGoalCommand {
            description: "Be happier someday".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(analysis.metrics.len(), 1);
    assert_eq!(analysis.metrics[0].name, "completion");
    assert_eq!(analysis.timeframe.flexibility, Flexibility::VeryFlexible);
    assert!(!analysis.recommendations.is_empty());
}

// =============================================================================
// Synthesis
// =============================================================================

#[tokio::test]
async fn wedding_goal_produces_a_valid_draft() {
    let draft = generate(WEDDING_GOAL).await.unwrap();

    assert!(draft.specific.content.starts_with("I will lose 20 pounds"));
    assert!(draft.specific.content.contains(" in order to "));
    assert_eq!(draft.time_bound.content.start_date, reference());
    assert_eq!(draft.time_bound.content.end_date, at("2024-09-15T09:00:00Z"));
    assert!(draft
        .relevant
        .content
        .personal_values
        .contains(&"self-confidence".to_string()));
    assert_eq!(draft.relevant.content.life_areas, vec![GoalDomain::Fitness]);

    let report = SmartGoalValidator::default().validate(&draft);
    assert!(report.is_valid, "issues: {:?}", report.issues);
    assert_eq!(report.score, 100);
}

#[test]
fn time_bound_defaults_to_domain_window() {
    let synthesizer = SmartSynthesizer::with_reference(reference());
    let intent = IntentExtractor::new()
        .extract_intent("I want to run a marathon")
        .unwrap();
    assert_eq!(intent.domain, GoalDomain::Fitness);

    let medium = GoalIntent {
        urgency: Urgency::Medium,
        ..intent
    };
    let time_bound = synthesizer
        .generate_time_bound(&TimeframeInfo::default(), &medium)
        .unwrap();

    let constraint = time_bound.content;
    assert_eq!(constraint.start_date, reference());
    assert_eq!(constraint.span_days(), 90);
    assert_eq!(constraint.milestones.len(), 3);
    assert_eq!(constraint.milestones[1], at("2024-04-29T09:00:00Z"));
}

#[tokio::test]
async fn urgent_career_goal_is_difficult() {
    let draft = generate("I urgently need to get a promotion at work in 2 weeks")
        .await
        .unwrap();

    assert_eq!(draft.analysis.domain, GoalDomain::Career);
    assert_eq!(draft.analysis.intent.urgency, Urgency::High);
    assert_eq!(
        draft.achievable.content.difficulty_level,
        DifficultyLevel::Difficult
    );
}

#[tokio::test]
async fn drafts_are_deterministic_for_a_fixed_reference() {
    let first = generate(WEDDING_GOAL).await.unwrap();
    let second = generate(WEDDING_GOAL).await.unwrap();

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

// =============================================================================
// Long input
// =============================================================================

#[tokio::test]
async fn long_repeated_goal_scales_linearly() {
    const REPEATS: usize = 80;
    let phrase = "I want to lose 20 pounds in 6 months because I have a wedding coming up. ";
    let description = phrase.repeat(REPEATS);
    assert!(description.split_whitespace().count() > 1000);

    let draft = generate(&description).await.unwrap();
    let analysis = &draft.analysis;

    assert_eq!(analysis.domain, GoalDomain::Fitness);
    assert_eq!(analysis.intent.context.len(), REPEATS);
    assert_eq!(analysis.timeframe.extracted_phrases.len(), REPEATS);
    assert_eq!(analysis.metrics.len(), 2 * REPEATS);
    assert_eq!(analysis.timeframe.end_date, Some(at("2024-09-15T09:00:00Z")));
    assert!(!analysis.is_degraded());

    assert!(!draft.measurable.content.is_empty());
    assert_eq!(draft.time_bound.content.end_date, at("2024-09-15T09:00:00Z"));
    assert_eq!(draft.relevant.content.life_areas, vec![GoalDomain::Fitness]);
}
