//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use chrono::{DateTime, Utc};

use crate::{datetime, Defect, Defects, Executions, Launch, LaunchMode, Statistic};

/// Parse a fixture timestamp.
fn ts(value: &str) -> DateTime<Utc> {
    datetime::parse(value).expect("fixture timestamp")
}

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Launch Fixtures
    // =========================================================================

    /// Create a minimal in-progress launch with required fields only.
    pub fn minimal_launch(id: &str, name: &str, number: u32) -> Launch {
        Launch {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            number,
            mode: LaunchMode::Default,
            start_time: ts("2019-09-17T09:14:31.786Z"),
            end_time: None,
            tags: vec![],
            statistics: None,
        }
    }

    /// Create an in-progress launch with zeroed statistics.
    pub fn in_progress_launch(id: &str, name: &str, number: u32) -> Launch {
        let mut launch = Self::minimal_launch(id, name, number);
        launch.statistics = Some(Statistic::default());
        launch
    }

    /// Create a finished launch with execution statistics.
    pub fn finished_launch(
        id: &str,
        name: &str,
        number: u32,
        start_time: &str,
        end_time: &str,
        passed: u32,
        failed: u32,
        skipped: u32,
    ) -> Launch {
        let mut launch = Self::minimal_launch(id, name, number);
        launch.start_time = ts(start_time);
        launch.end_time = Some(ts(end_time));
        launch.statistics = Some(Self::statistics(passed, failed, skipped));
        launch
    }

    /// Create a debug-mode launch.
    pub fn debug_launch(id: &str, name: &str, number: u32) -> Launch {
        let mut launch = Self::minimal_launch(id, name, number);
        launch.mode = LaunchMode::Debug;
        launch
    }

    // =========================================================================
    // Statistic Fixtures
    // =========================================================================

    /// Create statistics for the given outcome counts.
    ///
    /// Failures land in the to-investigate defect bucket, the way a fresh
    /// launch looks before anyone triages it.
    pub fn statistics(passed: u32, failed: u32, skipped: u32) -> Statistic {
        Statistic {
            executions: Executions {
                total: passed + failed + skipped,
                passed,
                failed,
                skipped,
            },
            defects: Defects {
                to_investigate: Defect { total: failed },
                ..Default::default()
            },
        }
    }

    // =========================================================================
    // Scenario Builders
    // =========================================================================

    /// Create a default set of test data for common scenarios.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// A complete test scenario with related launches.
pub struct DefaultScenario {
    pub launches: Vec<Launch>,
}

impl DefaultScenario {
    fn new() -> Self {
        let mut first_nightly = Fixtures::finished_launch(
            "1",
            "nightly regression",
            1,
            "2019-09-16T21:00:00.000Z",
            "2019-09-16T22:12:48.500Z",
            100,
            15,
            5,
        );
        first_nightly.tags = vec!["nightly".to_string()];

        let mut second_nightly = Fixtures::finished_launch(
            "2",
            "nightly regression",
            2,
            "2019-09-17T21:00:00.000Z",
            "2019-09-17T22:05:11.042Z",
            110,
            8,
            2,
        );
        second_nightly.tags = vec!["nightly".to_string()];

        let launches = vec![
            first_nightly,
            second_nightly,
            Fixtures::in_progress_launch("3", "smoke", 1),
            Fixtures::debug_launch("4", "diagnostics", 1),
        ];

        Self { launches }
    }
}
