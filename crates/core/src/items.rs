//! Consumable item effects. Combat resolution and inventory bookkeeping
//! live with the caller; these effects only touch actor health and the
//! message sink, and refuse with an impossible-action error when the
//! effect would do nothing.

use crate::game_map::GameMap;
use crate::types::{ActionError, ActorKind, EntityId, Pos};

/// Opaque message-log collaborator. The real log lives outside this crate.
pub trait MessageSink {
    fn push(&mut self, text: String);
}

/// Vec-backed sink for tests, tools, and anyone without a fancier log.
#[derive(Default)]
pub struct MessageLog {
    pub messages: Vec<String>,
}

impl MessageSink for MessageLog {
    fn push(&mut self, text: String) {
        self.messages.push(text);
    }
}

#[derive(Clone, Copy, Debug)]
pub struct HealingConsumable {
    pub amount: i32,
}

impl HealingConsumable {
    /// Heal the consumer. Drinking at full health is an impossible
    /// action: the error aborts it and nothing changes.
    pub fn activate(
        &self,
        map: &mut GameMap,
        consumer: EntityId,
        log: &mut dyn MessageSink,
    ) -> Result<(), ActionError> {
        let actor = &mut map.actors[consumer];
        let recovered = actor.heal(self.amount);
        if recovered > 0 {
            log.push(format!("You consume the potion, and recover {recovered} HP!"));
            Ok(())
        } else {
            Err(ActionError::Impossible("You are at full health.".into()))
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LightningConsumable {
    pub damage: i32,
    pub max_range: i32,
}

impl LightningConsumable {
    /// Strike the nearest visible actor within range, excluding the
    /// consumer. No target in range aborts the action.
    pub fn activate(
        &self,
        map: &mut GameMap,
        consumer: EntityId,
        log: &mut dyn MessageSink,
    ) -> Result<(), ActionError> {
        let origin = map.actors[consumer].pos;
        let mut target: Option<EntityId> = None;
        let mut closest = self.max_range as f64 + 1.0;

        for actor in map.actors.values() {
            if actor.id == consumer || !map.is_visible(actor.pos) {
                continue;
            }
            let distance = actor.distance(origin.x, origin.y);
            if distance < closest {
                target = Some(actor.id);
                closest = distance;
            }
        }

        match target {
            Some(id) => {
                log.push(format!(
                    "A lightning bolt strikes the {} with a loud thunder, for {} damage!",
                    actor_name(map, id),
                    self.damage
                ));
                map.actors[id].take_damage(self.damage);
                Ok(())
            }
            None => Err(ActionError::Impossible("No enemy is close enough to strike.".into())),
        }
    }
}

fn actor_name(map: &GameMap, id: EntityId) -> &'static str {
    match map.actors[id].kind {
        ActorKind::Player => "player",
        ActorKind::Orc => "orc",
        ActorKind::Troll => "troll",
    }
}

/// Squared-distance membership test for circular areas of effect, used
/// by area-targeting scrolls.
pub fn inside_circle(center: Pos, tile: Pos, radius: f64) -> bool {
    let dx = (center.x - tile.x) as f64;
    let dy = (center.y - tile.y) as f64;
    dx * dx + dy * dy <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::FLOOR;

    fn lit_arena() -> GameMap {
        let mut map = GameMap::new(12, 12);
        for y in 1..11 {
            for x in 1..11 {
                map.set_tile(Pos { y, x }, FLOOR);
            }
        }
        map.reveal_all();
        map
    }

    #[test]
    fn healing_at_full_health_is_impossible_and_changes_nothing() {
        let mut map = lit_arena();
        let player = map.spawn_actor(ActorKind::Player, Pos { y: 5, x: 5 });
        let mut log = MessageLog::default();

        let result = HealingConsumable { amount: 4 }.activate(&mut map, player, &mut log);
        assert_eq!(result, Err(ActionError::Impossible("You are at full health.".into())));
        assert!(log.messages.is_empty(), "aborted actions must not log");
        assert_eq!(map.actors[player].hp, map.actors[player].max_hp);
    }

    #[test]
    fn healing_recovers_and_reports_the_actual_amount() {
        let mut map = lit_arena();
        let player = map.spawn_actor(ActorKind::Player, Pos { y: 5, x: 5 });
        map.actors[player].take_damage(3);
        let mut log = MessageLog::default();

        HealingConsumable { amount: 10 }.activate(&mut map, player, &mut log).unwrap();
        assert_eq!(map.actors[player].hp, map.actors[player].max_hp);
        assert_eq!(log.messages, vec!["You consume the potion, and recover 3 HP!".to_string()]);
    }

    #[test]
    fn lightning_hits_the_nearest_visible_actor() {
        let mut map = lit_arena();
        let player = map.spawn_actor(ActorKind::Player, Pos { y: 5, x: 5 });
        let near = map.spawn_actor(ActorKind::Orc, Pos { y: 5, x: 7 });
        let far = map.spawn_actor(ActorKind::Troll, Pos { y: 9, x: 9 });
        let mut log = MessageLog::default();

        let bolt = LightningConsumable { damage: 6, max_range: 5 };
        bolt.activate(&mut map, player, &mut log).unwrap();

        assert_eq!(map.actors[near].hp, 10 - 6);
        assert_eq!(map.actors[far].hp, 16, "only the nearest target is struck");
        assert_eq!(log.messages.len(), 1);
        assert!(log.messages[0].contains("orc"));
    }

    #[test]
    fn lightning_ignores_targets_outside_the_field_of_view() {
        let mut map = lit_arena();
        let player = map.spawn_actor(ActorKind::Player, Pos { y: 5, x: 5 });
        let orc = map.spawn_actor(ActorKind::Orc, Pos { y: 5, x: 7 });
        map.clear_visible();

        let mut log = MessageLog::default();
        let bolt = LightningConsumable { damage: 6, max_range: 5 };
        let result = bolt.activate(&mut map, player, &mut log);
        assert!(matches!(result, Err(ActionError::Impossible(_))));
        assert_eq!(map.actors[orc].hp, 10);
    }

    #[test]
    fn lightning_respects_max_range() {
        let mut map = lit_arena();
        let player = map.spawn_actor(ActorKind::Player, Pos { y: 1, x: 1 });
        map.spawn_actor(ActorKind::Orc, Pos { y: 10, x: 10 });

        let mut log = MessageLog::default();
        let bolt = LightningConsumable { damage: 6, max_range: 5 };
        assert!(bolt.activate(&mut map, player, &mut log).is_err());
    }

    #[test]
    fn circle_membership_uses_squared_distance() {
        let center = Pos { y: 5, x: 5 };
        assert!(inside_circle(center, Pos { y: 5, x: 8 }, 3.0));
        assert!(inside_circle(center, Pos { y: 7, x: 7 }, 3.0));
        assert!(!inside_circle(center, Pos { y: 8, x: 8 }, 3.0));
    }
}
