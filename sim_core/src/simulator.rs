use crate::events::{EventBus, SimEvent};
use crate::session::LootSession;
use crate::SimError;
use loot_core::MonsterType;
use rand::Rng;
use tables_core::MonsterRegistry;
use tracing::{debug, info};

/// Slays monsters from a registry and reports their loot
///
/// Monster type `None` means a uniformly random loaded type.
#[derive(Debug)]
pub struct Simulator<R: Rng> {
    registry: MonsterRegistry,
    rng: R,
    events: EventBus,
}

impl<R: Rng> Simulator<R> {
    pub fn new(registry: MonsterRegistry, rng: R) -> Self {
        Simulator {
            registry,
            rng,
            events: EventBus::new(),
        }
    }

    pub fn registry(&self) -> &MonsterRegistry {
        &self.registry
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&SimEvent) + 'static) {
        self.events.subscribe(subscriber);
    }

    fn pick_monster(&mut self, kind: Option<MonsterType>) -> Result<MonsterType, SimError> {
        match kind {
            Some(kind) => {
                self.registry.get(kind)?;
                Ok(kind)
            }
            None => self
                .registry
                .random_type(&mut self.rng)
                .ok_or(SimError::NoMonsters),
        }
    }

    /// Slay one monster
    ///
    /// Publishes `MonsterSlain`, then `LootDropped` if the kill dropped anything.
    pub fn slay_monster(&mut self, kind: Option<MonsterType>) -> Result<LootSession, SimError> {
        let kind = self.pick_monster(kind)?;
        let template = self.registry.get(kind)?;
        let result = template.roll_loot(&mut self.rng);

        let mut session = LootSession::new();
        session.record(kind, &result);
        debug!(monster = %kind, drops = result.drops().count(), "Monster slain");

        self.events.publish(SimEvent::MonsterSlain {
            monster: kind,
            name: template.name.clone(),
        });
        if session.has_loot() {
            self.events.publish(SimEvent::LootDropped(session.clone()));
        }

        Ok(session)
    }

    /// Slay `count` monsters and publish one aggregate `LootDropped`
    ///
    /// Without an explicit type every kill picks a fresh random monster.
    pub fn slay_batch(
        &mut self,
        count: u32,
        kind: Option<MonsterType>,
    ) -> Result<LootSession, SimError> {
        if let Some(kind) = kind {
            self.registry.get(kind)?;
        }

        let mut session = LootSession::new();
        for _ in 0..count {
            let monster = self.pick_monster(kind)?;
            let result = self.registry.get(monster)?.roll_loot(&mut self.rng);
            session.record(monster, &result);
        }

        info!(
            requested = count,
            slain = session.total_monsters(),
            kinds = session.monsters.len(),
            "Batch complete"
        );
        self.events.publish(SimEvent::LootDropped(session.clone()));
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loot_core::{TreasureItem, TreasureType};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tables_core::{LootTable, MonsterTemplate};

    fn table(id: &str, kind: TreasureType) -> LootTable {
        LootTable::new(id, vec![TreasureItem::new(kind, kind.to_string(), 1.0)])
    }

    fn test_registry() -> MonsterRegistry {
        MonsterRegistry::from_templates(vec![
            MonsterTemplate::new(
                "Goblin",
                MonsterType::Goblin,
                vec![
                    table("goblin-boss", TreasureType::RegenerationRing).with_weight(0.1),
                    table("goblin-common", TreasureType::Apple),
                ],
            ),
            MonsterTemplate::new(
                "Zombie",
                MonsterType::Zombie,
                vec![LootTable::new("whiff", Vec::new())],
            ),
        ])
        .unwrap()
    }

    fn simulator(seed: u64) -> Simulator<ChaCha8Rng> {
        Simulator::new(test_registry(), ChaCha8Rng::seed_from_u64(seed))
    }

    fn record_events(sim: &mut Simulator<ChaCha8Rng>) -> Rc<RefCell<Vec<SimEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        sim.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        events
    }

    #[test]
    fn test_slay_single_publishes_slain_and_loot() {
        let mut sim = simulator(1);
        let events = record_events(&mut sim);

        let session = sim.slay_monster(Some(MonsterType::Goblin)).unwrap();
        assert_eq!(session.total_monsters(), 1);
        assert_eq!(session.treasure_counts(MonsterType::Goblin).unwrap().len(), 1);

        let events = events.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            SimEvent::MonsterSlain {
                monster: MonsterType::Goblin,
                name: "Goblin".to_string(),
            }
        );
        assert_eq!(events[1], SimEvent::LootDropped(session));
    }

    #[test]
    fn test_slay_single_without_loot_skips_loot_event() {
        let mut sim = simulator(2);
        let events = record_events(&mut sim);

        let session = sim.slay_monster(Some(MonsterType::Zombie)).unwrap();
        assert_eq!(session.kills(MonsterType::Zombie), 1);
        assert!(!session.has_loot());

        let events = events.borrow();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], SimEvent::MonsterSlain { .. }));
    }

    #[test]
    fn test_unknown_monster_is_reported() {
        let mut sim = simulator(3);
        let err = sim.slay_monster(Some(MonsterType::Dragon)).unwrap_err();
        assert_eq!(
            err,
            SimError::Lookup(tables_core::LookupError::UnknownMonster(MonsterType::Dragon))
        );
        assert!(sim.slay_batch(10, Some(MonsterType::Dragon)).is_err());
    }

    #[test]
    fn test_random_slay_on_empty_registry() {
        let mut sim = Simulator::new(MonsterRegistry::new(), ChaCha8Rng::seed_from_u64(4));
        assert_eq!(sim.slay_monster(None).unwrap_err(), SimError::NoMonsters);
        assert_eq!(sim.slay_batch(5, None).unwrap_err(), SimError::NoMonsters);
    }

    #[test]
    fn test_batch_of_one_type() {
        let mut sim = simulator(5);
        let events = record_events(&mut sim);

        let session = sim.slay_batch(1000, Some(MonsterType::Goblin)).unwrap();
        assert_eq!(session.total_monsters(), 1000);
        assert_eq!(session.monsters.len(), 1);

        // Exactly one drop per goblin, from one branch or the other
        let counts = session.treasure_counts(MonsterType::Goblin).unwrap();
        let rings = counts.get(&TreasureType::RegenerationRing).copied().unwrap_or(0);
        let apples = counts.get(&TreasureType::Apple).copied().unwrap_or(0);
        assert_eq!(rings + apples, 1000);
        assert!(rings > 50 && rings < 150, "Ring count was {}", rings);

        let events = events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0], SimEvent::LootDropped(session));
    }

    #[test]
    fn test_random_batch_spreads_across_types() {
        let mut sim = simulator(6);
        let session = sim.slay_batch(2000, None).unwrap();

        assert_eq!(session.total_monsters(), 2000);
        let goblins = session.kills(MonsterType::Goblin);
        assert!(goblins > 900 && goblins < 1100, "Goblin kills were {}", goblins);
        assert_eq!(goblins + session.kills(MonsterType::Zombie), 2000);
    }

    #[test]
    fn test_empty_batch() {
        let mut sim = simulator(7);
        let session = sim.slay_batch(0, None).unwrap();
        assert_eq!(session.total_monsters(), 0);
        assert!(session.monsters.is_empty());
    }

    #[test]
    fn test_same_seed_same_session() {
        let a = simulator(8).slay_batch(500, None).unwrap();
        let b = simulator(8).slay_batch(500, None).unwrap();
        assert_eq!(a, b);
    }
}
