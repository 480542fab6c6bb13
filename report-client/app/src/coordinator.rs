//! Fetch orchestration in front of the report cache.
//!
//! A fetch only ever happens in response to a [`Trigger`]: the first render,
//! a language switch, a JST date rollover noticed during a render, or a
//! manual refresh. Each trigger runs the load path once, and the load path
//! makes at most one proxy call. Plain re-renders never touch the network,
//! not even after a failure; retrying needs a new trigger.
//!
//! The coordinator is driven through `&mut self`, so triggers are handled one
//! at a time and a slower response can never overwrite a newer one.

use tracing::{debug, info, warn};

use crate::activity::ActivityStatus;
use crate::clock::{Clock, ReferenceTime};
use crate::domain::Source;
use crate::error::FetchError;
use crate::language::Language;
use crate::prompt;
use crate::proxy_client::ReportSource;
use crate::store::{CacheEntry, ReportStore};

/// Stored in place of an empty report so the slot still counts as filled.
pub const EMPTY_REPORT_NOTICE: &str =
    "No report could be generated for today. Please try refreshing later.";

/// Why the report is being (re)loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    Initial,
    LanguageChanged(Language),
    DateRolledOver { date_key: String },
    ManualInvalidate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOrigin {
    Cache,
    Network,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub text: String,
    pub sources: Vec<Source>,
    pub date_key: String,
    pub origin: ReportOrigin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportState {
    /// Nothing has been loaded yet.
    Pending,
    Ready(Report),
    /// Inline error shown instead of a report.
    Failed(String),
}

/// Everything a front end needs to draw the daily report page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    pub reference_time: ReferenceTime,
    pub activity: ActivityStatus,
    pub language: Language,
    pub state: ReportState,
}

pub struct ReportCoordinator<S, P, C> {
    store: S,
    source: P,
    clock: C,
    language: Language,
    /// JST date the current `state` was loaded for; `None` before the first load.
    loaded_date: Option<String>,
    state: ReportState,
}

impl<S, P, C> ReportCoordinator<S, P, C>
where
    S: ReportStore,
    P: ReportSource,
    C: Clock,
{
    pub fn new(store: S, source: P, clock: C, language: Language) -> Self {
        Self {
            store,
            source,
            clock,
            language,
            loaded_date: None,
            state: ReportState::Pending,
        }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn state(&self) -> &ReportState {
        &self.state
    }

    /// Draw the page. Loads only on the first render or when the JST date
    /// has moved on since the last load.
    pub async fn render(&mut self) -> ReportView {
        let now = self.reference_now();
        let date_key = now.date_key();

        match self.loaded_date.as_deref() {
            None => self.handle(Trigger::Initial).await,
            Some(loaded) if loaded != date_key => {
                self.handle(Trigger::DateRolledOver { date_key }).await
            }
            Some(_) => self.view(now),
        }
    }

    /// Switch the display language. Selecting the active language again is
    /// just a render.
    pub async fn set_language(&mut self, language: Language) -> ReportView {
        if language == self.language && self.loaded_date.is_some() {
            return self.render().await;
        }
        self.handle(Trigger::LanguageChanged(language)).await
    }

    /// Drop the active language's slot and load a fresh report.
    pub async fn refresh(&mut self) -> ReportView {
        self.handle(Trigger::ManualInvalidate).await
    }

    /// Apply `trigger`, then run the load path once.
    pub async fn handle(&mut self, trigger: Trigger) -> ReportView {
        debug!(?trigger, language = %self.language, "handling report trigger");

        match &trigger {
            Trigger::LanguageChanged(language) => self.language = *language,
            Trigger::ManualInvalidate => {
                if let Err(e) = self.store.delete(self.language) {
                    warn!(language = %self.language, error = %e, "failed to clear cached report");
                }
            }
            Trigger::DateRolledOver { date_key } => {
                info!(
                    previous = self.loaded_date.as_deref().unwrap_or("-"),
                    current = %date_key,
                    "JST date rolled over"
                );
            }
            Trigger::Initial => {}
        }

        // A refresh must reach the proxy even if the slot could not be cleared.
        let use_cache = trigger != Trigger::ManualInvalidate;
        let now = self.reference_now();
        self.state = self.load(&now, use_cache).await;
        self.loaded_date = Some(now.date_key());
        self.view(now)
    }

    async fn load(&self, now: &ReferenceTime, use_cache: bool) -> ReportState {
        let date_key = now.date_key();
        let cached = if use_cache {
            self.store.get(self.language)
        } else {
            Ok(None)
        };

        match cached {
            Ok(Some(entry)) if entry.is_fresh_for(&date_key) => {
                debug!(language = %self.language, %date_key, "serving cached report");
                return ReportState::Ready(Report {
                    text: entry.report_text,
                    sources: entry.sources,
                    date_key,
                    origin: ReportOrigin::Cache,
                });
            }
            Ok(_) => {}
            Err(e) => {
                warn!(language = %self.language, error = %e, "cache read failed; fetching instead");
            }
        }

        let request = prompt::report_request(now, self.language);
        match self.source.fetch_report(&request).await {
            Ok(result) => {
                let text = if result.text.is_empty() {
                    EMPTY_REPORT_NOTICE.to_string()
                } else {
                    result.text
                };
                let entry = CacheEntry {
                    report_text: text.clone(),
                    sources: result.sources.clone(),
                    stored_date: date_key.clone(),
                };
                if let Err(e) = self.store.set(self.language, entry) {
                    warn!(language = %self.language, error = %e, "failed to cache report");
                }
                info!(language = %self.language, %date_key, "fetched daily report");
                ReportState::Ready(Report {
                    text,
                    sources: result.sources,
                    date_key,
                    origin: ReportOrigin::Network,
                })
            }
            Err(e) => {
                warn!(language = %self.language, error = %e, "error fetching report");
                ReportState::Failed(failure_message(&e))
            }
        }
    }

    fn reference_now(&self) -> ReferenceTime {
        ReferenceTime::from_utc(self.clock.now())
    }

    fn view(&self, now: ReferenceTime) -> ReportView {
        ReportView {
            reference_time: now,
            activity: ActivityStatus::from_time(&now),
            language: self.language,
            state: self.state.clone(),
        }
    }
}

fn failure_message(err: &FetchError) -> String {
    match err {
        FetchError::Rejected { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
