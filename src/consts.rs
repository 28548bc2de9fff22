pub mod cli_consts {
    //! Tunable constants for the sign-in client, grouped by area.

    // Queue sizes are generous compared to the handful of in-flight submissions
    // a single user can produce; they exist to absorb bursts, not backpressure.

    /// Activity log history cap (oldest entries evicted first)
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Capacity of the worker-to-UI event channel
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Capacity of the UI-to-worker submission channel
    pub const SUBMIT_QUEUE_SIZE: usize = 100;

    /// Simulated authentication round trip
    pub mod auth {
        use std::time::Duration;

        /// Fixed delay standing in for the real authentication call (milliseconds)
        pub const SIMULATED_LATENCY_MS: u64 = 1500;

        pub const fn simulated_latency() -> Duration {
            Duration::from_millis(SIMULATED_LATENCY_MS)
        }
    }

    /// Field validation limits
    pub mod form {
        /// Minimum accepted password length (characters)
        pub const PASSWORD_MIN_CHARS: usize = 6;

        /// Maximum accepted email length (characters)
        pub const EMAIL_MAX_CHARS: usize = 254;

        /// Maximum accepted length of the part before the `@` (characters)
        pub const EMAIL_LOCAL_MAX_CHARS: usize = 64;
    }
}
