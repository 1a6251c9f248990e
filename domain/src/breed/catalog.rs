//! Breed catalog normalization
//!
//! The remote catalog is a mapping of breed name to its sub-breed names.
//! The quiz works on a flat list of [`BreedEntity`] instead, one per
//! selectable breed/sub-breed combination.

use super::entities::BreedEntity;
use std::collections::{BTreeMap, HashSet};

/// Flatten a breed → sub-breeds mapping into selectable entities.
///
/// A breed without sub-breeds yields one entity; a breed with sub-breeds
/// yields one entity per sub-breed and none for the bare breed. Output order
/// follows the iteration order of `raw`. Entities whose id was already
/// emitted are skipped, so ids are unique even when the payload repeats a
/// sub-breed.
pub fn normalize(raw: &BTreeMap<String, Vec<String>>) -> Vec<BreedEntity> {
    let mut seen = HashSet::new();
    let mut entities = Vec::new();

    for (breed, sub_breeds) in raw {
        if sub_breeds.is_empty() {
            push_unique(&mut entities, &mut seen, BreedEntity::new(breed.as_str()));
        } else {
            for sub_breed in sub_breeds {
                push_unique(
                    &mut entities,
                    &mut seen,
                    BreedEntity::with_sub_breed(breed.as_str(), sub_breed.as_str()),
                );
            }
        }
    }

    entities
}

fn push_unique(entities: &mut Vec<BreedEntity>, seen: &mut HashSet<String>, entity: BreedEntity) {
    if seen.insert(entity.id().to_string()) {
        entities.push(entity);
    }
}
