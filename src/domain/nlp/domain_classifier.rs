//! Domain Classifier - keyword scoring of goal text into a life domain.

use crate::domain::foundation::GoalDomain;

use super::text::{contains_any, normalize};

/// Keywords owned by one domain. Each keyword found adds one point.
struct DomainKeywords {
    domain: GoalDomain,
    keywords: &'static [&'static str],
}

/// Keyword table in classification order; ties go to the earlier entry.
static DOMAIN_KEYWORDS: &[DomainKeywords] = &[
    DomainKeywords {
        domain: GoalDomain::Fitness,
        keywords: &[
            "workout", "exercise", "gym", "run", "muscle", "cardio", "marathon", "fitness",
            "strength", "yoga", "swim", "lift",
        ],
    },
    DomainKeywords {
        domain: GoalDomain::Nutrition,
        keywords: &[
            "diet", "nutrition", "meal", "calorie", "protein", "vegetable", "weight", "sugar",
            "cook", "food", "eating",
        ],
    },
    DomainKeywords {
        domain: GoalDomain::Finance,
        keywords: &[
            "money", "save", "saving", "budget", "invest", "debt", "financial", "income",
            "expense", "fund", "retire", "dollar", "$",
        ],
    },
    DomainKeywords {
        domain: GoalDomain::Learning,
        keywords: &[
            "learn", "study", "course", "skill", "education", "certification", "language",
            "class", "lesson", "degree", "tutorial", "read",
        ],
    },
    DomainKeywords {
        domain: GoalDomain::Health,
        keywords: &[
            "health", "doctor", "medical", "wellness", "therapy", "blood pressure", "stress",
            "smoking", "medication", "checkup",
        ],
    },
    DomainKeywords {
        domain: GoalDomain::Sleep,
        keywords: &["sleep", "bedtime", "insomnia", "tired", "nap", "wake up"],
    },
    DomainKeywords {
        domain: GoalDomain::Habits,
        keywords: &[
            "habit", "routine", "daily", "consistency", "discipline", "quit", "every day",
            "streak",
        ],
    },
    DomainKeywords {
        domain: GoalDomain::Career,
        keywords: &[
            "job", "career", "promotion", "salary", "work", "professional", "business",
            "interview", "promoted", "developer", "senior", "resume", "manager",
        ],
    },
    DomainKeywords {
        domain: GoalDomain::Social,
        keywords: &[
            "friend", "family", "relationship", "social", "network", "community", "partner",
            "dating", "volunteer",
        ],
    },
    DomainKeywords {
        domain: GoalDomain::Projects,
        keywords: &[
            "project", "build", "create", "develop", "complete", "finish", "launch", "website",
        ],
    },
    DomainKeywords {
        domain: GoalDomain::Personal,
        keywords: &[
            "confidence", "happiness", "happy", "mindful", "meditat", "journal", "gratitude",
            "hobby", "self",
        ],
    },
];

/// Bonus for phrasings where plain keyword counts pick the wrong domain.
///
/// "weight" belongs to nutrition, so "lose weight" and workout phrasing need
/// enough extra weight to land in fitness.
const LOSE_WEIGHT_BONUS: u32 = 3;
const WORKOUT_BONUS: u32 = 2;
const WORKOUT_TRIGGERS: &[&str] = &["workout", "exercise", "working out"];

/// Pure keyword classifier. No failure mode.
pub struct DomainClassifier;

impl DomainClassifier {
    /// Classifies raw goal text into a single domain.
    pub fn classify(text: &str) -> GoalDomain {
        Self::classify_normalized(&normalize(text))
    }

    /// Classifies text that has already been lower-cased.
    pub fn classify_normalized(lower: &str) -> GoalDomain {
        let mut best = (GoalDomain::DEFAULT, 0);
        for (domain, score) in Self::scores_normalized(lower) {
            if score > best.1 {
                best = (domain, score);
            }
        }
        best.0
    }

    /// Returns the score of every domain in table order.
    pub fn scores(text: &str) -> Vec<(GoalDomain, u32)> {
        Self::scores_normalized(&normalize(text))
    }

    fn scores_normalized(lower: &str) -> Vec<(GoalDomain, u32)> {
        DOMAIN_KEYWORDS
            .iter()
            .map(|entry| {
                let mut score = entry
                    .keywords
                    .iter()
                    .filter(|keyword| lower.contains(*keyword))
                    .count() as u32;
                if entry.domain == GoalDomain::Fitness {
                    score += Self::fitness_bonus(lower);
                }
                (entry.domain, score)
            })
            .collect()
    }

    fn fitness_bonus(lower: &str) -> u32 {
        let mut bonus = 0;
        if lower.contains("lose") && lower.contains("weight") {
            bonus += LOSE_WEIGHT_BONUS;
        }
        if contains_any(lower, WORKOUT_TRIGGERS) {
            bonus += WORKOUT_BONUS;
        }
        bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn working_out_at_the_gym_is_fitness() {
        let domain =
            DomainClassifier::classify("I want to start working out at the gym 3 times a week");
        assert_eq!(domain, GoalDomain::Fitness);
    }

    #[test]
    fn lose_weight_beats_nutrition() {
        assert_eq!(
            DomainClassifier::classify("I need to lose weight before summer"),
            GoalDomain::Fitness
        );
    }

    #[test]
    fn weight_alone_is_nutrition() {
        assert_eq!(
            DomainClassifier::classify("Track my weight and protein intake"),
            GoalDomain::Nutrition
        );
    }

    #[test]
    fn saving_for_a_fund_is_finance() {
        assert_eq!(
            DomainClassifier::classify("I want to save $5000 for an emergency fund"),
            GoalDomain::Finance
        );
    }

    #[test]
    fn learning_a_language_is_learning() {
        assert_eq!(
            DomainClassifier::classify("Learn Spanish and take a language course"),
            GoalDomain::Learning
        );
    }

    #[test]
    fn promotion_is_career() {
        assert_eq!(
            DomainClassifier::classify("Get promoted to senior developer at my job"),
            GoalDomain::Career
        );
    }

    #[test]
    fn bedtime_is_sleep() {
        assert_eq!(
            DomainClassifier::classify("Go to sleep at a regular bedtime"),
            GoalDomain::Sleep
        );
    }

    #[test]
    fn no_keywords_defaults_to_projects() {
        assert_eq!(DomainClassifier::classify("zzz qqq"), GoalDomain::Projects);
        assert_eq!(DomainClassifier::classify(""), GoalDomain::Projects);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(
            DomainClassifier::classify("MARATHON TRAINING AT THE GYM"),
            GoalDomain::Fitness
        );
    }

    #[test]
    fn ties_go_to_earlier_domain() {
        // "diet" (nutrition) and "doctor" (health) score one point each.
        assert_eq!(
            DomainClassifier::classify("talk to a doctor about a diet"),
            GoalDomain::Nutrition
        );
    }

    #[test]
    fn scores_include_fitness_bonuses() {
        let scores = DomainClassifier::scores("lose weight with exercise");
        let fitness = scores
            .iter()
            .find(|(d, _)| *d == GoalDomain::Fitness)
            .map(|(_, s)| *s)
            .unwrap();
        // "exercise" keyword + lose/weight bonus + workout bonus
        assert_eq!(fitness, 1 + 3 + 2);
    }
}
