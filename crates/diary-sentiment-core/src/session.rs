//! Request bookkeeping for interactive use.
//!
//! Every new query gets a fresh [`RequestToken`]. A result is applied only
//! when its token is still the latest one issued, so a slow fetch for an
//! earlier username can never overwrite the report for a later one.

use diary_sentiment_models::AnalysisReport;
use tracing::{debug, warn};

/// Monotonically increasing identifier of one analysis request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct AnalysisSession {
    next: u64,
    latest: Option<RequestToken>,
    query: Option<String>,
    loading: bool,
    error: Option<String>,
    report: Option<AnalysisReport>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request for `query`. Clears the previous error and report
    /// and supersedes any request still in flight.
    pub fn begin(&mut self, query: impl Into<String>) -> RequestToken {
        self.next += 1;
        let token = RequestToken(self.next);
        let query = query.into();

        debug!(token = %token, query = %query, "Analysis request started");

        self.latest = Some(token);
        self.query = Some(query);
        self.loading = true;
        self.error = None;
        self.report = None;
        token
    }

    /// Apply the outcome of the request identified by `token`.
    ///
    /// Returns `false` and leaves the session untouched when the token has
    /// been superseded.
    pub fn complete(&mut self, token: RequestToken, outcome: Result<AnalysisReport, String>) -> bool {
        if !self.is_current(token) {
            warn!(
                token = %token,
                latest = ?self.latest.map(|t| t.id()),
                "Discarding result of superseded request"
            );
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(report) => {
                self.report = Some(report);
                self.error = None;
            }
            Err(message) => {
                self.report = None;
                self.error = Some(message);
            }
        }
        true
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest == Some(token)
    }

    pub fn latest(&self) -> Option<RequestToken> {
        self.latest
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diary_sentiment_models::SentimentResult;

    fn report_with_score(score: i32) -> AnalysisReport {
        AnalysisReport {
            overall_sentiment: SentimentResult {
                score,
                ..SentimentResult::default()
            },
            ..AnalysisReport::default()
        }
    }

    #[test]
    fn test_tokens_increase() {
        let mut session = AnalysisSession::new();
        let first = session.begin("alice");
        let second = session.begin("bob");
        assert!(second > first);
        assert_eq!(session.latest(), Some(second));
        assert_eq!(session.query(), Some("bob"));
    }

    #[test]
    fn test_complete_current_request() {
        let mut session = AnalysisSession::new();
        let token = session.begin("alice");
        assert!(session.is_loading());

        assert!(session.complete(token, Ok(report_with_score(4))));
        assert!(!session.is_loading());
        assert_eq!(session.report().unwrap().overall_sentiment.score, 4);
        assert!(session.error().is_none());
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut session = AnalysisSession::new();
        let stale = session.begin("alice");
        let current = session.begin("bob");

        assert!(!session.complete(stale, Ok(report_with_score(9))));
        assert!(session.is_loading());
        assert!(session.report().is_none());

        assert!(session.complete(current, Ok(report_with_score(-2))));
        assert_eq!(session.report().unwrap().overall_sentiment.score, -2);

        // A late arrival after the current one finished changes nothing
        assert!(!session.complete(stale, Err("timed out".to_string())));
        assert!(session.error().is_none());
        assert_eq!(session.report().unwrap().overall_sentiment.score, -2);
    }

    #[test]
    fn test_begin_clears_previous_outcome() {
        let mut session = AnalysisSession::new();
        let token = session.begin("alice");
        session.complete(token, Err("user not found".to_string()));
        assert_eq!(session.error(), Some("user not found"));

        session.begin("bob");
        assert!(session.error().is_none());
        assert!(session.report().is_none());
        assert!(session.is_loading());
    }
}
