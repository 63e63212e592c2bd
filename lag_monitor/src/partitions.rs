use getset::{CopyGetters, Getters};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct PartitionObservation {
    #[getset(get = "pub")]
    topic: String,
    #[getset(get_copy = "pub")]
    partition: i32,
    #[getset(get_copy = "pub")]
    lag: Option<i64>,
}

impl PartitionObservation {
    pub fn new(topic: impl Into<String>, partition: i32) -> Self {
        Self {
            topic: topic.into(),
            partition,
            lag: None,
        }
    }

    pub fn set_lag(&mut self, lag: i64) {
        self.lag = Some(lag)
    }

    pub fn is(&self, topic: &str, partition: i32) -> bool {
        self.partition == partition && self.topic == topic
    }
}

impl Display for PartitionObservation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.lag {
            Some(lag) => write!(f, "[{}-{}] lag : {}", self.topic, self.partition, lag),
            None => write!(f, "[{}-{}] lag : null", self.topic, self.partition),
        }
    }
}

/// Latest lag per (topic, partition) of one consumer group, in first-seen order.
///
/// The set only grows: an observation is created the first time its
/// partition shows up and is updated in place afterwards.
#[derive(Debug, Default)]
pub struct PartitionTracker {
    observations: Vec<PartitionObservation>,
}

impl PartitionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the partition's lag, adding it first if unseen. There is no cap
    /// tied to the current report's size, so the set only ever grows.
    pub fn observe(&mut self, topic: &str, partition: i32, lag: i64) {
        match self
            .observations
            .iter_mut()
            .find(|observation| observation.is(topic, partition))
        {
            Some(observation) => observation.set_lag(lag),
            None => {
                let mut observation = PartitionObservation::new(topic, partition);
                observation.set_lag(lag);
                self.observations.push(observation);
            }
        }
    }

    pub fn get(&self, topic: &str, partition: i32) -> Option<&PartitionObservation> {
        self.observations
            .iter()
            .find(|observation| observation.is(topic, partition))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PartitionObservation> {
        self.observations.iter()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_observations_update_in_place() {
        let mut tracker = PartitionTracker::new();
        tracker.observe("orders", 0, 5);
        tracker.observe("orders", 1, 7);
        tracker.observe("orders", 0, 120);
        tracker.observe("orders", 1, 0);

        assert_eq!(tracker.len(), 2);
        assert_eq!(tracker.get("orders", 0).unwrap().lag(), Some(120));
        assert_eq!(tracker.get("orders", 1).unwrap().lag(), Some(0));
    }

    #[test]
    fn keeps_first_seen_order_across_topics() {
        let mut tracker = PartitionTracker::new();
        tracker.observe("b", 1, 1);
        tracker.observe("a", 0, 2);
        tracker.observe("a", 3, 3);
        tracker.observe("b", 1, 4);

        let keys = tracker
            .iter()
            .map(|o| format!("{}-{}", o.topic(), o.partition()))
            .collect::<Vec<_>>();
        assert_eq!(keys, vec!["b-1", "a-0", "a-3"]);
    }

    #[test]
    fn same_partition_number_on_other_topic_is_distinct() {
        let mut tracker = PartitionTracker::new();
        tracker.observe("a", 0, 1);
        tracker.observe("b", 0, 2);

        assert_eq!(tracker.len(), 2);
        assert_eq!(tracker.get("a", 0).unwrap().lag(), Some(1));
    }

    #[test]
    fn display_matches_summary_fragment() {
        let mut observation = PartitionObservation::new("t1", 0);
        assert_eq!(observation.to_string(), "[t1-0] lag : null");

        observation.set_lag(5);
        assert_eq!(observation.to_string(), "[t1-0] lag : 5");
    }
}
