//! The control loop: mode detection, optional clarification, filter,
//! context, Actor-Critic iterations with gap resolution, Writer, guard,
//! final report packaging.

use crate::cancellation::CancellationToken;
use crate::guard;
use crate::mode_detect::resolve_mode;
use research_agents::{Analyst, ClarificationAgent, Critic, Writer};
use research_config::Settings;
use research_context::{build_context, filter, ContextBuildResult};
use research_core::{
    AnalyticsSink, CandidateSource, ClarificationRequest, ConfidenceLevel, CriticOutput,
    CriticVerdict, Error, FormattedContext, LanguageModel, Mode, ModeCompliance,
    NullAnalyticsSink, NullProgressSink, ProgressEvent, ProgressMessageType, ProgressSink,
    ReportSource, ResearchReport, ResearchSession, Result, TimeRange,
};
use research_gap::{DispatchStrategy, GapRegistry};
use research_trace::{IterationLogger, IterationRecord, ProgressTracer};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// What a research session produces: either the final report, or a request
/// for the caller to resolve ambiguity before research can proceed.
pub enum ResearchOutcome {
    Report(ResearchReport),
    ClarificationNeeded(ClarificationRequest),
}

pub struct ResearchOrchestrator {
    settings: Settings,
    analyst: Analyst,
    critic: Critic,
    writer: Writer,
    clarification: ClarificationAgent,
    gap_registry: GapRegistry,
    progress: ProgressTracer,
    analytics: Arc<dyn AnalyticsSink>,
    iteration_logger: Option<IterationLogger>,
}

impl ResearchOrchestrator {
    pub fn new(
        llm: Arc<dyn LanguageModel>,
        settings: Settings,
        gap_registry: GapRegistry,
        progress_sink: Option<Arc<dyn ProgressSink>>,
        analytics_sink: Option<Arc<dyn AnalyticsSink>>,
        iteration_logger: Option<IterationLogger>,
    ) -> Self {
        let max_retries = 2;
        let analyst = Analyst::new(
            llm.clone(),
            Duration::from_secs(settings.reasoning.analyst_timeout_secs),
            max_retries,
        );
        let critic = Critic::new(
            llm.clone(),
            Duration::from_secs(settings.reasoning.critic_timeout_secs),
            max_retries,
        );
        let writer = Writer::new(
            llm.clone(),
            Duration::from_secs(settings.reasoning.writer_timeout_secs),
            max_retries,
        );
        let clarification = ClarificationAgent::new(
            llm,
            Duration::from_secs(settings.reasoning.analyst_timeout_secs),
            max_retries,
        );

        Self {
            settings,
            analyst,
            critic,
            writer,
            clarification,
            gap_registry,
            progress: ProgressTracer::new(progress_sink.unwrap_or_else(|| Arc::new(NullProgressSink))),
            analytics: analytics_sink.unwrap_or_else(|| Arc::new(NullAnalyticsSink)),
            iteration_logger,
        }
    }

    fn should_clarify(&self, query: &str) -> Vec<String> {
        self.settings
            .clarification
            .patterns
            .iter()
            .filter(|p| query.contains(p.as_str()))
            .cloned()
            .collect()
    }

    fn percent(base: u32, per_iter: u32, iteration: u32) -> u8 {
        (base + per_iter * iteration).min(100) as u8
    }

    fn timezone(&self) -> chrono_tz::Tz {
        self.settings.reasoning.timezone.parse().unwrap_or(chrono_tz::UTC)
    }

    /// Used when the iteration cap is hit before any Critic review ever ran
    /// (the Analyst kept returning `SEARCH_REQUIRED`). The Writer still
    /// needs a `CriticOutput` to work from.
    fn default_degraded_review() -> CriticOutput {
        CriticOutput {
            status: CriticVerdict::Warn,
            critique: "已達最大反覆次數，分析師持續要求補充資料，未能進入審稿階段。".to_string(),
            suggestions: Vec::new(),
            mode_compliance: ModeCompliance::Compliant,
            logical_gaps: Vec::new(),
            source_issues: Vec::new(),
        }
    }

    async fn log_iteration(&self, iteration: u32, agent: &str, prompt: &str, response: &str, validation_result: &str, duration_ms: u64, retry_count: u32) {
        let Some(logger) = &self.iteration_logger else { return };
        let record = IterationRecord {
            prompt: prompt.to_string(),
            response: response.to_string(),
            validation_result: validation_result.to_string(),
            duration_ms,
            retry_count,
        };
        if let Err(err) = logger.record_agent_call(iteration, agent, &record).await {
            warn!(%err, agent, iteration, "failed to write iteration trace record");
        }
    }

    pub async fn run_research(
        &self,
        query: &str,
        mode: Option<Mode>,
        candidates: Vec<CandidateSource>,
        temporal_hint: Option<TimeRange>,
        skip_clarification: bool,
        cancellation: &CancellationToken,
    ) -> Result<ResearchOutcome> {
        let mode = resolve_mode(mode, query, &self.settings.mode_keywords);

        if !skip_clarification {
            let signals = self.should_clarify(query);
            if !signals.is_empty() {
                let (request, _meta) = self.clarification.generate_options(query, &signals).await?;
                return Ok(ResearchOutcome::ClarificationNeeded(request));
            }
        }

        let mut session = ResearchSession::new(query, mode);
        if let Some(hint) = temporal_hint {
            session = session.with_temporal_hint(hint);
        }
        session.skip_clarification = skip_clarification;

        let outcome = filter(&candidates, mode, &self.settings.source_tiers, &self.settings.mode_configs)?;
        if outcome.fell_back_to_discovery {
            session.push_warning("嚴格模式無可用來源，已自動降級為探索模式");
        }
        session.source_map.extend(outcome.admitted);

        let mut all_indices: Vec<i64> = session.source_map.iter().map(|(i, _)| i).collect();
        let mut context = build_context(
            &session.source_map,
            &all_indices,
            &self.settings.context,
            self.timezone(),
            mode,
            chrono::Utc::now(),
        );
        if !context.dropped_indices.is_empty() {
            session.push_warning("內容過長，已捨棄部分低可信度來源以符合長度限制");
        }

        let max_iterations = self.settings.reasoning.max_iterations;
        let mut degraded = false;

        loop {
            if cancellation.is_cancelled() {
                self.progress
                    .emit(ProgressEvent::new(ProgressMessageType::Cancelled, "cancelled", session.iteration, max_iterations, "研究已取消", 100))
                    .await;
                return Err(Error::CancelRequested);
            }

            if session.iteration >= max_iterations {
                degraded = true;
                break;
            }
            session.iteration += 1;

            self.progress
                .emit(ProgressEvent::new(
                    ProgressMessageType::AnalystAnalyzing,
                    "analyst",
                    session.iteration,
                    max_iterations,
                    "分析師正在研究中",
                    Self::percent(10, 10, session.iteration),
                ))
                .await;

            let (mut draft, meta) = match (&session.last_draft, &session.last_review) {
                (Some(previous), Some(review)) if review.status == CriticVerdict::Reject => {
                    self.analyst.revise(previous, review, &context.context.text, mode).await?
                }
                _ => self.analyst.research(query, &context.context.text, mode, session.temporal_hint.as_ref()).await?,
            };

            if guard::clamp_citations_to_source_map(&mut draft.citations_used, &session.source_map) {
                session.push_warning("分析師引用了不存在的來源索引，已自動移除");
            }

            self.progress
                .emit(ProgressEvent::new(ProgressMessageType::AnalystComplete, "analyst", session.iteration, max_iterations, "分析師已完成草稿", Self::percent(20, 10, session.iteration)))
                .await;
            self.log_iteration(session.iteration, "analyst", &meta.prompt, &meta.raw_response, "ok", meta.duration_ms, meta.retry_count).await;

            if draft.is_search_required() {
                self.progress
                    .emit(ProgressEvent::new(ProgressMessageType::GapSearchStarted, "gap_resolve", session.iteration, max_iterations, "正在補充搜尋資料", Self::percent(25, 10, session.iteration)))
                    .await;

                let strategy: DispatchStrategy = self.settings.tier_6.enrichment_strategy.into();
                let gap_outcome = self.gap_registry.resolve_all(&draft.gap_resolutions, strategy, self.analytics.as_ref()).await;

                if gap_outcome.all_empty {
                    session.push_warning("補充搜尋未發現有效結果 — 基於現有資訊推論");
                    context = ContextBuildResult {
                        context: FormattedContext::new(
                            format!("{}\n\n[系統提示] 補充搜尋未發現有效結果 — 基於現有資訊推論。", context.context.text),
                            context.context.indices.clone(),
                        ),
                        dropped_indices: Vec::new(),
                    };
                } else {
                    let new_indices = session.source_map.extend(gap_outcome.sources);
                    all_indices.extend(new_indices);
                    context = build_context(&session.source_map, &all_indices, &self.settings.context, self.timezone(), mode, chrono::Utc::now());
                    if !context.dropped_indices.is_empty() {
                        session.push_warning("內容過長，已捨棄部分低可信度來源以符合長度限制");
                    }
                }

                session.last_draft = Some(draft);
                session.last_review = None;
                continue;
            }

            self.progress
                .emit(ProgressEvent::new(ProgressMessageType::CriticReviewing, "critic", session.iteration, max_iterations, "審稿員正在審查草稿", Self::percent(50, 5, session.iteration)))
                .await;

            let (review, critic_meta) = self.critic.review(&draft.draft, query, mode).await?;

            self.progress
                .emit(ProgressEvent::new(ProgressMessageType::CriticComplete, "critic", session.iteration, max_iterations, "審稿完成", Self::percent(60, 5, session.iteration)))
                .await;
            self.log_iteration(session.iteration, "critic", &critic_meta.prompt, &critic_meta.raw_response, "ok", critic_meta.duration_ms, critic_meta.retry_count).await;

            let accepted = review.status.accepts();
            session.last_draft = Some(draft);
            session.last_review = Some(review);

            if accepted {
                break;
            }

            session.reject_count += 1;
            if session.reject_count >= max_iterations {
                degraded = true;
                break;
            }
        }

        let draft = session.last_draft.clone().expect("at least one analyst draft by this point");
        let mut review = session.last_review.clone().unwrap_or_else(Self::default_degraded_review);

        if degraded {
            review.critique = format!("[已達最大反覆次數，以下為降級處理後的審稿意見] {}", review.critique);
            session.push_warning("已達最大反覆次數，回覆已降級處理");
        }

        self.progress
            .emit(ProgressEvent::new(ProgressMessageType::WriterPlanning, "writer", session.iteration, max_iterations, "撰寫者正在規劃報告結構", 85))
            .await;
        self.progress
            .emit(ProgressEvent::new(ProgressMessageType::WriterComposing, "writer", session.iteration, max_iterations, "撰寫者正在撰寫報告", 90))
            .await;

        let (mut writer_output, writer_meta) = self.writer.compose(&draft.draft, &review, &context.context.text, &draft.citations_used, mode).await?;

        if degraded {
            writer_output.confidence_level = writer_output.confidence_level.at_most(ConfidenceLevel::Medium);
        }

        if guard::enforce(&mut writer_output, &draft.citations_used) {
            session.push_warning("報告引用了未經查證的來源，已自動修正");
        }

        self.progress
            .emit(ProgressEvent::new(ProgressMessageType::WriterComplete, "writer", session.iteration, max_iterations, "報告已完成", 100))
            .await;
        self.log_iteration(session.iteration, "writer", &writer_meta.prompt, &writer_meta.raw_response, "ok", writer_meta.duration_ms, writer_meta.retry_count).await;

        let sources = writer_output
            .sources_used
            .iter()
            .filter_map(|idx| {
                session.source_map.get(*idx).map(|tiered| ReportSource {
                    index: *idx,
                    url_or_urn: tiered.source.url.clone().unwrap_or_else(|| format!("urn:source:{}", tiered.source.id)),
                    publisher: tiered.source.publisher.clone(),
                    tier: tiered.tier,
                })
            })
            .collect();

        let report = ResearchReport::new(
            draft.draft.lines().next().unwrap_or(query).to_string(),
            writer_output.final_report,
            sources,
            mode,
            session.iteration,
            writer_output.confidence_level,
            writer_output.methodology_note,
            session.warnings.clone(),
        );

        if let Some(logger) = &self.iteration_logger {
            let summary = research_trace::SessionSummary {
                mode: mode.to_string(),
                iterations: session.iteration,
                reject_count: session.reject_count,
                warnings: session.warnings.clone(),
                final_confidence: format!("{:?}", report.confidence),
            };
            if let Err(err) = logger.record_session_summary(&summary).await {
                warn!(%err, "failed to write session summary");
            }
        }

        Ok(ResearchOutcome::Report(report))
    }
}
