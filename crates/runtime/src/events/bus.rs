//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{CombatEvent, MatchEvent, RoundEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Round lifecycle (selection phase)
    Round,
    /// Combat resolution
    Combat,
    /// Match lifecycle
    Match,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Round, Topic::Combat, Topic::Match];
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Round(RoundEvent),
    Combat(CombatEvent),
    Match(MatchEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Round(_) => Topic::Round,
            Event::Combat(_) => Topic::Combat,
            Event::Match(_) => Topic::Match,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Channels are created up front and never change,
/// so the map is shared without a lock.
pub struct EventBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<Event>>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let channels = Topic::ALL
            .iter()
            .map(|&topic| (topic, broadcast::channel(capacity.max(1)).0))
            .collect();

        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();

        if let Some(tx) = self.channels.get(&topic)
            && tx.send(event).is_err()
        {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels[&topic].subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_only_see_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut rounds = bus.subscribe(Topic::Round);
        let mut matches = bus.subscribe(Topic::Match);

        bus.publish(Event::Round(RoundEvent::Started {
            round: 1,
            has_speed_advantage: true,
        }));
        bus.publish(Event::Match(MatchEvent::Finished {
            rounds: 1,
            winner: None,
        }));

        assert!(matches!(
            rounds.recv().await.unwrap(),
            Event::Round(RoundEvent::Started { round: 1, .. })
        ));
        assert!(rounds.try_recv().is_err());
        assert!(matches!(
            matches.recv().await.unwrap(),
            Event::Match(MatchEvent::Finished { winner: None, .. })
        ));
    }

    #[test]
    fn publish_without_subscribers_is_fine() {
        let bus = EventBus::new();
        bus.publish(Event::Match(MatchEvent::Finished {
            rounds: 0,
            winner: None,
        }));
    }
}
