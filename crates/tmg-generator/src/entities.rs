use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tmg_core::{Components, Entity, EntityId, Vector3};
use uuid::Builder;

/// Hands out entity identifiers.
pub trait IdSource {
    /// The next identifier.
    fn next_id(&mut self) -> EntityId;
}

/// Random v4 identifiers from the operating system's generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> EntityId {
        EntityId::new()
    }
}

/// Reproducible v4-shaped identifiers drawn from a seeded generator.
#[derive(Debug, Clone)]
pub struct SeededIds {
    rng: StdRng,
}

impl SeededIds {
    /// A sequence that is identical for identical seeds.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IdSource for SeededIds {
    fn next_id(&mut self) -> EntityId {
        let bytes: [u8; 16] = self.rng.random();
        EntityId(Builder::from_random_bytes(bytes).into_uuid())
    }
}

/// Build the entity list: one starting location, then one water source per
/// river bed cell, in order.
pub fn generate_entities(
    start: Vector3,
    sources: &[Vector3],
    strength: i64,
    ids: &mut dyn IdSource,
) -> Vec<Entity> {
    let mut entities = Vec::with_capacity(1 + sources.len());
    entities.push(Entity::new(
        ids.next_id(),
        Components::starting_location(start),
    ));
    entities.extend(
        sources
            .iter()
            .map(|&at| Entity::new(ids.next_id(), Components::water_source(at, strength))),
    );
    entities
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use tmg_core::Template;
    use tmg_core::entity::WaterSourceStrength;

    use super::*;

    fn river() -> Vec<Vector3> {
        (0..5).map(|x| Vector3::new(x, 0, 2)).collect()
    }

    #[test]
    fn one_start_then_sources() {
        let entities = generate_entities(Vector3::new(8, 8, 4), &river(), 8, &mut RandomIds);
        assert_eq!(entities.len(), 6);
        assert_eq!(entities[0].template(), Template::StartingLocation);
        assert_eq!(entities[0].coordinates(), Vector3::new(8, 8, 4));
        assert!(entities[1..].iter().all(|e| e.template() == Template::WaterSource));
    }

    #[test]
    fn sources_keep_order_and_strength() {
        let sources = river();
        let entities = generate_entities(Vector3::new(1, 1, 4), &sources, 8, &mut RandomIds);
        for (entity, at) in entities[1..].iter().zip(&sources) {
            assert_eq!(entity.coordinates(), *at);
            match entity.components {
                Components::WaterSource(c) => assert_eq!(
                    c.water_source,
                    WaterSourceStrength {
                        specified_strength: 8,
                        current_strength: 8,
                    }
                ),
                other => panic!("expected a water source, got {:?}", other.template()),
            }
        }
    }

    #[test]
    fn identifiers_are_unique() {
        let sources: Vec<_> = (0..64).map(|y| Vector3::new(0, y, 1)).collect();
        let entities = generate_entities(Vector3::new(2, 2, 4), &sources, 8, &mut RandomIds);
        let ids: HashSet<_> = entities.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), entities.len());
    }

    #[test]
    fn no_sources_still_places_start() {
        let entities = generate_entities(Vector3::new(2, 2, 4), &[], 8, &mut RandomIds);
        assert_eq!(entities.len(), 1);
    }

    #[test]
    fn seeded_ids_are_reproducible() {
        let mut a = SeededIds::new(7);
        let mut b = SeededIds::new(7);
        for _ in 0..4 {
            assert_eq!(a.next_id(), b.next_id());
        }
        assert_ne!(SeededIds::new(7).next_id(), SeededIds::new(8).next_id());
    }

    #[test]
    fn seeded_ids_are_version_four() {
        let id = SeededIds::new(1).next_id();
        assert_eq!(id.0.get_version_num(), 4);
    }
}
