//! Mock server state management.
//!
//! Provides the in-memory data store for the mock ReportPortal API server.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{Launch, LaunchMode};

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Launches indexed by ID.
    pub launches: HashMap<String, Launch>,

    /// Next ID to hand out when a launch is started via the API.
    next_id: u64,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self {
            launches: HashMap::new(),
            next_id: 1,
        }
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a launch to the state.
    ///
    /// Numeric IDs bump the generator so launches started via the API never
    /// collide with seeded ones.
    pub fn with_launch(mut self, launch: Launch) -> Self {
        if let Ok(numeric) = launch.id.parse::<u64>() {
            self.next_id = self.next_id.max(numeric + 1);
        }
        self.launches.insert(launch.id.clone(), launch);
        self
    }

    /// Hand out a fresh launch ID.
    pub fn next_launch_id(&mut self) -> String {
        let id = self.next_id;
        self.next_id += 1;
        id.to_string()
    }

    /// The next ordinal number for a launch with this name (1-indexed).
    pub fn next_launch_number(&self, name: &str) -> u32 {
        self.launches
            .values()
            .filter(|launch| launch.name == name)
            .map(|launch| launch.number)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Get a launch by ID.
    pub fn get_launch(&self, id: &str) -> Option<&Launch> {
        self.launches.get(id)
    }

    /// List launches in the given mode, optionally filtered by name.
    ///
    /// `name_contains` matches case-insensitively anywhere in the name;
    /// `name_equals` requires an exact match. The result is sorted by start
    /// time, then ID, so listings are stable across calls.
    pub fn list_launches(
        &self,
        mode: LaunchMode,
        name_contains: Option<&str>,
        name_equals: Option<&str>,
    ) -> Vec<&Launch> {
        let mut launches: Vec<&Launch> = self
            .launches
            .values()
            .filter(|launch| launch.mode == mode)
            .filter(|launch| {
                name_contains
                    .map(|needle| launch.name.to_lowercase().contains(&needle.to_lowercase()))
                    .unwrap_or(true)
            })
            .filter(|launch| {
                name_equals
                    .map(|name| launch.name == name)
                    .unwrap_or(true)
            })
            .collect();

        launches.sort_by(|a, b| {
            a.start_time
                .cmp(&b.start_time)
                .then_with(|| a.id.cmp(&b.id))
        });
        launches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime;

    fn sample_launch(id: &str, name: &str, number: u32) -> Launch {
        Launch {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            number,
            mode: LaunchMode::Default,
            start_time: datetime::parse("2019-09-17T09:14:31.786Z").unwrap(),
            end_time: None,
            tags: vec![],
            statistics: None,
        }
    }

    #[test]
    fn test_state_add_and_get_launch() {
        let state = MockState::new().with_launch(sample_launch("1", "smoke", 1));

        let launch = state.get_launch("1");
        assert!(launch.is_some());
        assert_eq!(launch.unwrap().name, "smoke");
    }

    #[test]
    fn test_state_id_generator_skips_seeded_ids() {
        let mut state = MockState::new()
            .with_launch(sample_launch("1", "smoke", 1))
            .with_launch(sample_launch("7", "smoke", 2));

        assert_eq!(state.next_launch_id(), "8");
        assert_eq!(state.next_launch_id(), "9");
    }

    #[test]
    fn test_state_numbers_launches_per_name() {
        let state = MockState::new()
            .with_launch(sample_launch("1", "smoke", 1))
            .with_launch(sample_launch("2", "smoke", 2))
            .with_launch(sample_launch("3", "nightly", 5));

        assert_eq!(state.next_launch_number("smoke"), 3);
        assert_eq!(state.next_launch_number("nightly"), 6);
        assert_eq!(state.next_launch_number("brand-new"), 1);
    }

    #[test]
    fn test_state_list_launches_with_filters() {
        let mut debug = sample_launch("4", "diagnostics", 1);
        debug.mode = LaunchMode::Debug;

        let state = MockState::new()
            .with_launch(sample_launch("1", "smoke suite", 1))
            .with_launch(sample_launch("2", "nightly regression", 1))
            .with_launch(debug);

        let all = state.list_launches(LaunchMode::Default, None, None);
        assert_eq!(all.len(), 2);

        let debug_only = state.list_launches(LaunchMode::Debug, None, None);
        assert_eq!(debug_only.len(), 1);
        assert_eq!(debug_only[0].name, "diagnostics");

        let contains = state.list_launches(LaunchMode::Default, Some("SMOKE"), None);
        assert_eq!(contains.len(), 1);

        let exact = state.list_launches(LaunchMode::Default, None, Some("nightly regression"));
        assert_eq!(exact.len(), 1);

        let miss = state.list_launches(LaunchMode::Default, None, Some("nightly"));
        assert!(miss.is_empty());
    }
}
