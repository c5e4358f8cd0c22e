//! Per-domain lookup tables used by the SMART generators.
//!
//! Three domains carry a full template (statement, metrics, resources,
//! values). Every domain has a profile with its effort multiplier, default
//! time window and default motivation.

use crate::domain::foundation::{GoalDomain, Urgency};

/// A standard metric offered when the description names none.
pub struct MetricTemplate {
    pub name: &'static str,
    pub unit: &'static str,
    pub target_value: f64,
}

/// Bespoke content for a domain.
pub struct DomainTemplate {
    /// Statement with `{action}` and `{outcome}` placeholders.
    pub specific: &'static str,
    pub metrics: &'static [MetricTemplate],
    pub resources: &'static [&'static str],
    pub values: &'static [&'static str],
}

/// Statement used for domains without a template.
pub const GENERIC_SPECIFIC: &str = "I will {action} {outcome}";

pub const GENERIC_RESOURCES: &[&str] = &["dedicated time", "progress tracking"];

pub const GENERIC_VALUES: &[&str] = &["growth", "self-improvement"];

pub const GENERIC_MOTIVATION: &str =
    "Achieving this goal builds momentum and confidence for what comes next";

static FITNESS: DomainTemplate = DomainTemplate {
    specific: "I will {action} {outcome} through a consistent training routine",
    metrics: &[
        MetricTemplate {
            name: "workout_sessions",
            unit: "sessions per week",
            target_value: 3.0,
        },
        MetricTemplate {
            name: "active_minutes",
            unit: "minutes per week",
            target_value: 150.0,
        },
        MetricTemplate {
            name: "progress_checkins",
            unit: "check-ins",
            target_value: 12.0,
        },
    ],
    resources: &[
        "gym membership or home equipment",
        "workout schedule",
        "proper nutrition",
    ],
    values: &["health", "vitality", "self-discipline"],
};

static LEARNING: DomainTemplate = DomainTemplate {
    specific: "I will {action} {outcome} through structured study and practice",
    metrics: &[
        MetricTemplate {
            name: "study_hours",
            unit: "hours per week",
            target_value: 5.0,
        },
        MetricTemplate {
            name: "lessons_completed",
            unit: "lessons",
            target_value: 30.0,
        },
        MetricTemplate {
            name: "practice_sessions",
            unit: "sessions per week",
            target_value: 4.0,
        },
    ],
    resources: &[
        "learning materials",
        "dedicated study time",
        "practice opportunities",
    ],
    values: &["growth", "knowledge", "self-improvement"],
};

static FINANCE: DomainTemplate = DomainTemplate {
    specific: "I will {action} {outcome} by following a dedicated savings plan",
    metrics: &[
        MetricTemplate {
            name: "monthly_savings",
            unit: "dollars per month",
            target_value: 500.0,
        },
        MetricTemplate {
            name: "budget_adherence",
            unit: "percent",
            target_value: 90.0,
        },
        MetricTemplate {
            name: "expense_reviews",
            unit: "reviews per month",
            target_value: 4.0,
        },
    ],
    resources: &[
        "budget tracking tool",
        "separate savings account",
        "financial discipline",
    ],
    values: &["financial security", "independence", "peace of mind"],
};

/// Returns the bespoke template of a domain, if it has one.
pub fn template_for(domain: GoalDomain) -> Option<&'static DomainTemplate> {
    match domain {
        GoalDomain::Fitness => Some(&FITNESS),
        GoalDomain::Learning => Some(&LEARNING),
        GoalDomain::Finance => Some(&FINANCE),
        _ => None,
    }
}

/// Hours of effort per unit of base effort.
pub fn effort_multiplier(domain: GoalDomain) -> f64 {
    match domain {
        GoalDomain::Fitness => 1.5,
        GoalDomain::Learning => 2.0,
        GoalDomain::Career => 2.5,
        GoalDomain::Finance => 1.0,
        GoalDomain::Nutrition => 1.2,
        GoalDomain::Health => 1.3,
        GoalDomain::Sleep => 0.8,
        GoalDomain::Habits => 1.0,
        GoalDomain::Social => 1.2,
        GoalDomain::Projects => 2.0,
        GoalDomain::Personal => 1.5,
    }
}

pub fn urgency_effort_multiplier(urgency: Urgency) -> f64 {
    match urgency {
        Urgency::High => 1.5,
        Urgency::Medium => 1.0,
        Urgency::Low => 0.8,
    }
}

/// Length of the goal window when nothing in the text sets one.
pub fn default_window_days(domain: GoalDomain) -> u32 {
    match domain {
        GoalDomain::Fitness => 90,
        GoalDomain::Learning => 120,
        GoalDomain::Career => 180,
        GoalDomain::Finance => 365,
        GoalDomain::Nutrition => 60,
        GoalDomain::Health => 90,
        GoalDomain::Sleep => 30,
        GoalDomain::Habits => 66,
        GoalDomain::Social => 90,
        GoalDomain::Projects => 120,
        GoalDomain::Personal => 90,
    }
}

/// Urgent goals get a shorter window, relaxed ones a longer one.
pub fn urgency_window_factor(urgency: Urgency) -> f64 {
    match urgency {
        Urgency::High => 0.7,
        Urgency::Medium => 1.0,
        Urgency::Low => 1.3,
    }
}

/// Domains whose goals usually need more planning.
pub fn is_complex(domain: GoalDomain) -> bool {
    matches!(
        domain,
        GoalDomain::Career | GoalDomain::Finance | GoalDomain::Learning
    )
}

static DEFAULT_MOTIVATIONS: &[(GoalDomain, &str)] = &[
    (
        GoalDomain::Fitness,
        "Building strength and endurance improves energy and overall health",
    ),
    (
        GoalDomain::Nutrition,
        "Eating well fuels the body and supports long-term wellbeing",
    ),
    (
        GoalDomain::Finance,
        "Financial stability creates freedom and reduces stress",
    ),
    (
        GoalDomain::Learning,
        "New knowledge and skills open doors to new opportunities",
    ),
    (
        GoalDomain::Health,
        "Taking care of your health lets you enjoy everything else in life",
    ),
    (
        GoalDomain::Sleep,
        "Better rest improves focus, mood and recovery",
    ),
    (
        GoalDomain::Habits,
        "Small consistent habits compound into lasting change",
    ),
    (
        GoalDomain::Career,
        "Professional growth brings fulfilment and new responsibilities",
    ),
    (
        GoalDomain::Social,
        "Strong relationships are a foundation of a happy life",
    ),
    (
        GoalDomain::Projects,
        "Finishing what you start builds confidence and a track record",
    ),
    (
        GoalDomain::Personal,
        "Investing in yourself brings balance and self-understanding",
    ),
];

/// Motivation sentence used when the description gives no context.
pub fn default_motivation(domain: GoalDomain) -> &'static str {
    DEFAULT_MOTIVATIONS
        .iter()
        .find(|(d, _)| *d == domain)
        .map(|(_, motivation)| *motivation)
        .unwrap_or(GENERIC_MOTIVATION)
}

/// Context keywords that imply an extra resource.
pub const CONTEXT_RESOURCES: &[(&[&str], &str)] = &[
    (&["budget"], "financial planning"),
    (&["equipment"], "specialized equipment"),
    (&["help", "support"], "external support"),
];

/// Context keywords that imply a personal value.
pub const CONTEXT_VALUES: &[(&[&str], &str)] = &[
    (&["health", "healthy"], "health"),
    (&["family", "kids", "children", "partner"], "family"),
    (&["career", "job", "promotion", "work"], "career advancement"),
    (&["money", "financial", "debt", "emergency"], "financial security"),
    (&["confidence", "confident", "proud", "wedding"], "self-confidence"),
    (&["energy", "energetic", "active", "vitality"], "vitality"),
];
