//! Paging through the whole feed with per-page retries

use crate::api::SosApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::{DEFAULT_PAGE_LIMIT, fetching};
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::sos::{ApiResponse, ApiStats, Snapshot, SosRecord};
use crate::workers::core::EventSender;
use std::time::Duration;
use tokio::time::sleep;

/// Everything gathered by one pass over the feed.
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    pub records: Vec<SosRecord>,
    /// Stats reported with the first page.
    pub stats: Option<ApiStats>,
    /// `totalCount` reported with the first page.
    pub total_count: u64,
    pub pages_fetched: u32,
    pub total_pages: u32,
    /// False when a later page failed and the loop stopped early.
    pub complete: bool,
}

impl FetchOutcome {
    pub fn into_snapshot(self) -> Snapshot {
        Snapshot::build(&self.records, self.stats, self.total_count, self.complete)
    }
}

/// Sequential page fetcher.
#[derive(Debug, Clone)]
pub struct Paginator {
    limit: u32,
    max_retries: u32,
    retry_delay: Duration,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT)
    }
}

impl Paginator {
    pub fn new(limit: u32) -> Self {
        Self {
            limit: limit.max(1),
            max_retries: fetching::MAX_RETRIES,
            retry_delay: fetching::retry_delay(),
        }
    }

    #[cfg(test)]
    pub fn with_retry(mut self, max_retries: u32, retry_delay: Duration) -> Self {
        self.max_retries = max_retries;
        self.retry_delay = retry_delay;
        self
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Fetches page 1, then every page up to the `totalPages` the feed reports.
    ///
    /// # Errors
    /// Fails only when page 1 cannot be fetched or reports `success: false`.
    /// Failures on later pages end the loop with the records gathered so far
    /// and `complete` set to false.
    pub async fn fetch_all(
        &self,
        api: &dyn SosApi,
        events: &EventSender,
    ) -> Result<FetchOutcome, ApiError> {
        let mut outcome = FetchOutcome {
            complete: true,
            total_pages: 1,
            ..Default::default()
        };
        let mut page = 1;

        while page <= outcome.total_pages {
            events
                .send_fetch_event(
                    format!("Fetching page {}...", page),
                    EventType::Refresh,
                    LogLevel::Debug,
                )
                .await;

            let response = match self.fetch_page_with_retry(api, page, events).await {
                Ok(response) if response.success => response,
                Ok(_) if page == 1 => return Err(ApiError::Unsuccessful { page }),
                Err(e) if page == 1 => return Err(e),
                Ok(_) => {
                    self.stop_early(&mut outcome, page, &ApiError::Unsuccessful { page }, events)
                        .await;
                    break;
                }
                Err(e) => {
                    self.stop_early(&mut outcome, page, &e, events).await;
                    break;
                }
            };

            self.absorb_page(&mut outcome, page, response, events).await;
            page += 1;
        }

        // Feeds that omit pagination still report what was actually received.
        if outcome.total_count == 0 {
            outcome.total_count = outcome.records.len() as u64;
        }

        events
            .send_fetch_event(
                format!(
                    "Fetched {} records from {} of {} pages",
                    outcome.records.len(),
                    outcome.pages_fetched,
                    outcome.total_pages
                ),
                EventType::Success,
                LogLevel::Info,
            )
            .await;
        Ok(outcome)
    }

    async fn absorb_page(
        &self,
        outcome: &mut FetchOutcome,
        page: u32,
        response: ApiResponse,
        events: &EventSender,
    ) {
        if response.exceeds_limit() {
            events
                .send_fetch_event(
                    format!(
                        "Page {} carried {} records, above its limit of {}",
                        page,
                        response.data.len(),
                        response.pagination.limit
                    ),
                    EventType::Error,
                    LogLevel::Warn,
                )
                .await;
        }

        outcome.total_pages = response.pagination.total_pages.max(1);
        if page == 1 {
            outcome.stats = response.stats;
            outcome.total_count = response.pagination.total_count;
        }
        events
            .send_fetch_event(
                format!("Got {} records from page {}", response.data.len(), page),
                EventType::Refresh,
                LogLevel::Debug,
            )
            .await;
        outcome.records.extend(response.data);
        outcome.pages_fetched += 1;
    }

    async fn stop_early(
        &self,
        outcome: &mut FetchOutcome,
        page: u32,
        error: &ApiError,
        events: &EventSender,
    ) {
        outcome.complete = false;
        events
            .send_fetch_event(
                format!(
                    "Stopped at page {}: {}. Keeping {} records",
                    page,
                    error,
                    outcome.records.len()
                ),
                EventType::Error,
                error.log_level(),
            )
            .await;
    }

    async fn fetch_page_with_retry(
        &self,
        api: &dyn SosApi,
        page: u32,
        events: &EventSender,
    ) -> Result<ApiResponse, ApiError> {
        let mut attempt = 0;
        loop {
            match api.fetch_page(page, self.limit).await {
                Ok(response) => return Ok(response),
                Err(e) if e.should_retry() && attempt < self.max_retries => {
                    attempt += 1;
                    events
                        .send_fetch_event(
                            format!(
                                "Page {} failed ({}), retry {}/{}",
                                page, e, attempt, self.max_retries
                            ),
                            EventType::Waiting,
                            e.log_level(),
                        )
                        .await;
                    sleep(self.retry_delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockSosApi;
    use crate::sos::Pagination;
    use mockall::predicate::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn page(number: u32, total_pages: u32, ids: &[u64]) -> ApiResponse {
        ApiResponse {
            success: true,
            data: ids
                .iter()
                .map(|id| SosRecord {
                    id: *id,
                    district: "Pathanamthitta".to_string(),
                    status: "PENDING".to_string(),
                    ..Default::default()
                })
                .collect(),
            pagination: Pagination {
                current_page: number,
                total_pages,
                total_count: 5,
                limit: 2,
                has_next_page: number < total_pages,
                has_prev_page: number > 1,
            },
            stats: Some(ApiStats {
                total_people: 10 * u64::from(number),
                ..Default::default()
            }),
        }
    }

    fn server_error() -> ApiError {
        ApiError::Http {
            status: 503,
            message: "unavailable".to_string(),
        }
    }

    fn paginator() -> Paginator {
        Paginator::new(2).with_retry(2, Duration::ZERO)
    }

    #[tokio::test]
    async fn test_fetches_every_page_in_order() {
        let mut api = MockSosApi::new();
        api.expect_fetch_page()
            .with(eq(1), eq(2))
            .times(1)
            .returning(|_, _| Ok(page(1, 3, &[1, 2])));
        api.expect_fetch_page()
            .with(eq(2), eq(2))
            .times(1)
            .returning(|_, _| Ok(page(2, 3, &[3, 4])));
        api.expect_fetch_page()
            .with(eq(3), eq(2))
            .times(1)
            .returning(|_, _| Ok(page(3, 3, &[5])));

        let outcome = paginator()
            .fetch_all(&api, &EventSender::console())
            .await
            .unwrap();

        let ids: Vec<u64> = outcome.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5]);
        assert_eq!(outcome.pages_fetched, 3);
        assert!(outcome.complete);
        assert_eq!(outcome.total_count, 5);
        // Stats come from the first page only.
        assert_eq!(outcome.stats.unwrap().total_people, 10);
    }

    #[tokio::test]
    async fn test_first_page_failure_is_an_error() {
        let mut api = MockSosApi::new();
        api.expect_fetch_page().returning(|_, _| {
            Err(ApiError::Http {
                status: 404,
                message: "not found".to_string(),
            })
        });

        let err = paginator()
            .fetch_all(&api, &EventSender::console())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_unsuccessful_first_page_is_an_error() {
        let mut api = MockSosApi::new();
        api.expect_fetch_page().times(1).returning(|_, _| {
            Ok(ApiResponse {
                success: false,
                ..Default::default()
            })
        });

        let err = paginator()
            .fetch_all(&api, &EventSender::console())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unsuccessful { page: 1 }));
    }

    #[tokio::test]
    async fn test_later_page_failure_keeps_partial_data() {
        let mut api = MockSosApi::new();
        api.expect_fetch_page()
            .with(eq(1), always())
            .returning(|_, _| Ok(page(1, 3, &[1, 2])));
        api.expect_fetch_page()
            .with(eq(2), always())
            .times(3) // first attempt plus two retries
            .returning(|_, _| Err(server_error()));

        let (tx, mut rx) = tokio::sync::mpsc::channel(32);
        let outcome = paginator()
            .fetch_all(&api, &EventSender::new(tx))
            .await
            .unwrap();

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.pages_fetched, 1);
        assert!(!outcome.complete);

        let mut saw_stop = false;
        while let Ok(event) = rx.try_recv() {
            if event.msg.starts_with("Stopped at page 2") {
                saw_stop = true;
                assert_eq!(event.event_type, EventType::Error);
            }
        }
        assert!(saw_stop);
    }

    #[tokio::test]
    async fn test_unsuccessful_later_page_stops_the_loop() {
        let mut api = MockSosApi::new();
        api.expect_fetch_page()
            .with(eq(1), always())
            .returning(|_, _| Ok(page(1, 5, &[1, 2])));
        api.expect_fetch_page()
            .with(eq(2), always())
            .times(1)
            .returning(|_, _| {
                Ok(ApiResponse {
                    success: false,
                    ..Default::default()
                })
            });

        let outcome = paginator()
            .fetch_all(&api, &EventSender::console())
            .await
            .unwrap();
        assert_eq!(outcome.records.len(), 2);
        assert!(!outcome.complete);
    }

    #[tokio::test]
    async fn test_transient_error_is_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let mut api = MockSosApi::new();
        api.expect_fetch_page().returning(move |_, _| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(server_error())
            } else {
                Ok(page(1, 1, &[9]))
            }
        });

        let outcome = paginator()
            .fetch_all(&api, &EventSender::console())
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(outcome.records[0].id, 9);
        assert!(outcome.complete);
    }

    #[tokio::test]
    async fn test_client_error_is_not_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let mut api = MockSosApi::new();
        api.expect_fetch_page().returning(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(ApiError::Http {
                status: 400,
                message: "bad request".to_string(),
            })
        });

        let result = paginator().fetch_all(&api, &EventSender::console()).await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    // A feed reporting zero pages is still read once.
    async fn test_zero_total_pages_reads_one_page() {
        let mut api = MockSosApi::new();
        api.expect_fetch_page().times(1).returning(|_, _| {
            Ok(ApiResponse {
                success: true,
                data: vec![SosRecord::default()],
                ..Default::default()
            })
        });

        let outcome = paginator()
            .fetch_all(&api, &EventSender::console())
            .await
            .unwrap();
        assert_eq!(outcome.pages_fetched, 1);
        assert_eq!(outcome.total_count, 1);
        assert!(outcome.stats.is_none());
    }

    #[tokio::test]
    async fn test_outcome_becomes_snapshot() {
        let mut api = MockSosApi::new();
        api.expect_fetch_page()
            .returning(|_, _| Ok(page(1, 1, &[1, 2])));

        let snapshot = paginator()
            .fetch_all(&api, &EventSender::console())
            .await
            .unwrap()
            .into_snapshot();
        assert_eq!(snapshot.summaries.len(), 1);
        assert_eq!(snapshot.summaries[0].pending, 2);
        assert_eq!(snapshot.totals.total_cases, 5);
    }
}
