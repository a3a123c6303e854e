//! Synchronous event bus for slaying sessions

use crate::session::LootSession;
use loot_core::MonsterType;
use std::fmt;

/// Something interesting happened during a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    /// A single monster was slain
    MonsterSlain { monster: MonsterType, name: String },
    /// Loot from one or more kills is ready to report
    LootDropped(LootSession),
}

type Subscriber = Box<dyn FnMut(&SimEvent)>;

/// Subscribers are called in subscription order on the publishing thread
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Subscriber>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&SimEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn publish(&mut self, event: SimEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_publish_reaches_every_subscriber_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();

        for tag in ["first", "second"] {
            let seen = Rc::clone(&seen);
            bus.subscribe(move |event| {
                if let SimEvent::MonsterSlain { name, .. } = event {
                    seen.borrow_mut().push(format!("{tag}:{name}"));
                }
            });
        }

        bus.publish(SimEvent::MonsterSlain {
            monster: MonsterType::Goblin,
            name: "Goblin".to_string(),
        });

        assert_eq!(bus.subscriber_count(), 2);
        assert_eq!(*seen.borrow(), vec!["first:Goblin", "second:Goblin"]);
    }
}
