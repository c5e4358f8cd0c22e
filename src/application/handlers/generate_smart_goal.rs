//! GenerateSmartGoalHandler - Command handler for full SMART synthesis.

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use crate::domain::analysis::SmartGoalDraft;
use crate::domain::foundation::{GoalError, GoalErrorKind, UserId};
use crate::domain::nlp::TimeframeInfo;
use crate::ports::SmartComponentGenerator;

use super::{AnalyzeGoalCommand, AnalyzeGoalHandler};

/// Command to turn a free-text goal into a SMART draft.
#[derive(Debug, Clone)]
pub struct GenerateSmartGoalCommand {
    pub user_id: UserId,
    pub description: String,
}

/// Handler for generating SMART goal drafts.
pub struct GenerateSmartGoalHandler {
    analysis: AnalyzeGoalHandler,
    generator: Arc<dyn SmartComponentGenerator>,
}

impl GenerateSmartGoalHandler {
    pub fn new(analysis: AnalyzeGoalHandler, generator: Arc<dyn SmartComponentGenerator>) -> Self {
        Self {
            analysis,
            generator,
        }
    }

    pub async fn handle(&self, cmd: GenerateSmartGoalCommand) -> Result<SmartGoalDraft, GoalError> {
        let span = info_span!("generate_smart_goal", user_id = %cmd.user_id);
        self.run(cmd).instrument(span).await
    }

    async fn run(&self, cmd: GenerateSmartGoalCommand) -> Result<SmartGoalDraft, GoalError> {
        // 1. Analyze the text
        let mut analysis = self
            .analysis
            .handle(AnalyzeGoalCommand {
                description: cmd.description.clone(),
            })
            .await?;

        // 2. Run the five generators over the analysis
        let intent = &analysis.intent;
        let (specific, measurable, achievable, relevant, time_bound) = futures::join!(
            self.generator.generate_specific(intent),
            self.generator.generate_measurable(intent, &cmd.description),
            self.generator.generate_achievable(intent, &analysis.timeframe),
            self.generator.generate_relevant(intent, &cmd.user_id),
            self.generator.generate_time_bound(&analysis.timeframe, intent),
        );
        let specific = specific?;
        let time_bound = match time_bound {
            Ok(component) => component,
            Err(err) if err.kind == GoalErrorKind::UnrealisticTimeframe => {
                warn!(error = %err, "Time bound degraded to the default window");
                analysis.degraded.push(err.kind);
                self.generator
                    .generate_time_bound(&TimeframeInfo::default(), &analysis.intent)
                    .await?
            }
            Err(err) => return Err(err),
        };

        let draft = SmartGoalDraft {
            user_id: cmd.user_id,
            analysis,
            specific,
            measurable,
            achievable,
            relevant,
            time_bound,
        };

        info!(
            overall = %draft.overall_confidence(),
            milestones = draft.time_bound.content.milestones.len(),
            "SMART draft generated"
        );

        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::rules::{RuleBasedGoalAnalyzer, TemplateSmartGenerator};
    use crate::domain::foundation::{
        ConfidenceLevel, ExtractionFault, GoalErrorKind, Timestamp, ValidationError,
    };
    use crate::domain::nlp::{GoalIntent, MetricSuggestion, TimeframeInfo};
    use crate::domain::smart::{
        AchievabilityAssessment, GeneratedSmartComponent, RelevanceContext, SmartSynthesizer,
        TimeConstraint,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn reference() -> Timestamp {
        Timestamp::from_datetime("2024-03-15T09:00:00Z".parse().unwrap())
    }

    fn handler_with(generator: Arc<dyn SmartComponentGenerator>) -> GenerateSmartGoalHandler {
        let analyzer = Arc::new(RuleBasedGoalAnalyzer::new().with_reference(reference()));
        GenerateSmartGoalHandler::new(AnalyzeGoalHandler::new(analyzer), generator)
    }

    fn command(description: &str) -> GenerateSmartGoalCommand {
        GenerateSmartGoalCommand {
            user_id: UserId::new("user-123").unwrap(),
            description: description.to_string(),
        }
    }

    /// Delegates to the template generator, optionally failing one stage.
    struct MockGenerator {
        inner: TemplateSmartGenerator,
        fail_specific: bool,
        fail_time_bound: bool,
        fail_explicit_time_bound: bool,
        seen_users: Mutex<Vec<UserId>>,
    }

    impl MockGenerator {
        fn new() -> Self {
            Self {
                inner: TemplateSmartGenerator::with_reference(reference()),
                fail_specific: false,
                fail_time_bound: false,
                fail_explicit_time_bound: false,
                seen_users: Mutex::new(Vec::new()),
            }
        }

        fn failing_specific() -> Self {
            Self {
                fail_specific: true,
                ..Self::new()
            }
        }

        fn failing_time_bound() -> Self {
            Self {
                fail_time_bound: true,
                ..Self::new()
            }
        }

        fn failing_explicit_time_bound() -> Self {
            Self {
                fail_explicit_time_bound: true,
                ..Self::new()
            }
        }

        fn seen_users(&self) -> Vec<UserId> {
            self.seen_users.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SmartComponentGenerator for MockGenerator {
        async fn generate_specific(
            &self,
            intent: &GoalIntent,
        ) -> Result<GeneratedSmartComponent<String>, GoalError> {
            if self.fail_specific {
                return Err(ValidationError::empty_field("outcome").into());
            }
            self.inner.generate_specific(intent).await
        }

        async fn generate_measurable(
            &self,
            intent: &GoalIntent,
            raw_text: &str,
        ) -> GeneratedSmartComponent<Vec<MetricSuggestion>> {
            self.inner.generate_measurable(intent, raw_text).await
        }

        async fn generate_achievable(
            &self,
            intent: &GoalIntent,
            timeframe: &TimeframeInfo,
        ) -> GeneratedSmartComponent<AchievabilityAssessment> {
            self.inner.generate_achievable(intent, timeframe).await
        }

        async fn generate_relevant(
            &self,
            intent: &GoalIntent,
            user_id: &UserId,
        ) -> GeneratedSmartComponent<RelevanceContext> {
            self.seen_users.lock().unwrap().push(user_id.clone());
            self.inner.generate_relevant(intent, user_id).await
        }

        async fn generate_time_bound(
            &self,
            timeframe: &TimeframeInfo,
            intent: &GoalIntent,
        ) -> Result<GeneratedSmartComponent<TimeConstraint>, GoalError> {
            if self.fail_time_bound
                || (self.fail_explicit_time_bound && timeframe.end_date.is_some())
            {
                return Err(GoalError::unrealistic_timeframe(
                    ExtractionFault::date_out_of_range("default window"),
                ));
            }
            self.inner.generate_time_bound(timeframe, intent).await
        }
    }

    #[tokio::test]
    async fn builds_draft_from_analysis() {
        let generator = Arc::new(MockGenerator::new());
        let handler = handler_with(generator.clone());

        let draft = handler
            .handle(command("I want to learn Spanish"))
            .await
            .unwrap();

        assert_eq!(draft.analysis.intent.action, "learn");
        assert_eq!(
            draft.specific.content,
            "I will learn Spanish through structured study and practice"
        );
        assert_eq!(draft.specific.confidence, ConfidenceLevel::High);
        assert_eq!(draft.time_bound.content.start_date, reference());
        assert!(!draft.time_bound.content.milestones.is_empty());
        assert_eq!(generator.seen_users(), vec![UserId::new("user-123").unwrap()]);
        assert_eq!(draft.user_id.as_str(), "user-123");
    }

    #[tokio::test]
    async fn analysis_error_stops_generation() {
        let generator = Arc::new(MockGenerator::new());
        let handler = handler_with(generator.clone());

        let err = handler.handle(command("  ")).await.unwrap_err();

        assert_eq!(err.kind, GoalErrorKind::InsufficientDescription);
        assert!(generator.seen_users().is_empty());
    }

    #[tokio::test]
    async fn specific_error_propagates() {
        let handler = handler_with(Arc::new(MockGenerator::failing_specific()));

        let err = handler
            .handle(command("I want to learn Spanish"))
            .await
            .unwrap_err();

        assert_eq!(err.kind, GoalErrorKind::ValidationFailed);
        assert!(!err.recoverable);
    }

    #[tokio::test]
    async fn unrealistic_time_bound_degrades_to_default_window() {
        let handler = handler_with(Arc::new(MockGenerator::failing_explicit_time_bound()));

        let draft = handler
            .handle(command("I want to learn Spanish next month"))
            .await
            .unwrap();

        assert!(draft.analysis.timeframe.end_date.is_some());
        assert_eq!(draft.time_bound.content.start_date, reference());
        assert_eq!(
            draft.time_bound.content.span_days(),
            SmartSynthesizer::default_window(
                draft.analysis.intent.domain,
                draft.analysis.intent.urgency
            )
        );
        assert_eq!(draft.analysis.degraded, vec![GoalErrorKind::UnrealisticTimeframe]);
    }

    #[tokio::test]
    async fn time_bound_error_propagates_when_default_window_fails() {
        let handler = handler_with(Arc::new(MockGenerator::failing_time_bound()));

        let err = handler
            .handle(command("I want to learn Spanish"))
            .await
            .unwrap_err();

        assert_eq!(err.kind, GoalErrorKind::UnrealisticTimeframe);
    }
}
