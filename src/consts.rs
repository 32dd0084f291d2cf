pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the fetcher and the
    //! dashboard, organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of event buffer size for worker tasks
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Snapshots are replaced wholesale, so only a couple need buffering
    pub const SNAPSHOT_QUEUE_SIZE: usize = 4;

    // =============================================================================
    // API CONFIGURATION
    // =============================================================================

    /// SOS feed endpoint used when nothing else is configured
    pub const DEFAULT_API_URL: &str = "https://floodsupport.org/api/sos";

    /// SOS feed endpoint of a locally running dashboard backend
    pub const LOCAL_API_URL: &str = "http://localhost:3000/api/sos";

    /// Records requested per page
    pub const DEFAULT_PAGE_LIMIT: u32 = 100;

    /// Page fetching configuration
    pub mod fetching {
        use std::time::Duration;

        /// Whole-request timeout (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 30;

        /// Connection establishment timeout (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Maximum number of retry attempts for a single page
        pub const MAX_RETRIES: u32 = 2;

        /// Delay between retries of the same page (milliseconds)
        pub const RETRY_DELAY_MS: u64 = 2_000;

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn retry_delay() -> Duration {
            Duration::from_millis(RETRY_DELAY_MS)
        }
    }

    // =============================================================================
    // DASHBOARD CONFIGURATION
    // =============================================================================

    pub mod dashboard {
        use std::time::Duration;

        /// Default interval between background refreshes (seconds)
        pub const DEFAULT_REFRESH_SECS: u64 = 300;

        /// Lower bound so a misconfigured interval cannot hammer the API
        pub const MIN_REFRESH_SECS: u64 = 15;

        /// How long the splash screen stays up before the dashboard appears
        pub const SPLASH_DURATION: Duration = Duration::from_secs(2);

        /// Key polling interval of the UI loop
        pub const POLL_INTERVAL: Duration = Duration::from_millis(100);
    }

    // =============================================================================
    // REPORT CONFIGURATION
    // =============================================================================

    /// Label used for the summed row at the bottom of every report table
    pub const TOTAL_ROW_LABEL: &str = "TOTAL";

    /// District name used for records with a blank district
    pub const UNKNOWN_DISTRICT: &str = "Unknown";

    /// Column width of the district name in the console summary
    pub const SUMMARY_DISTRICT_WIDTH: usize = 15;
}
