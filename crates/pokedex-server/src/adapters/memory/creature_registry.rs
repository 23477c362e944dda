//! In-memory implementation of CreatureRepository
//!
//! The registry is the only owner of the creature collection. Every
//! operation runs under one `RwLock` acquisition: shared for reads,
//! exclusive for the whole lookup + mutate sequence of a write.

use std::path::Path;

use async_trait::async_trait;
use tokio::sync::{OnceCell, RwLock};

use pokedex::{
    CreateCreature, Creature, CreatureRecord, CreatureRepository, DomainError, LoadError,
};

/// In-memory creature registry
#[derive(Debug, Default)]
pub struct InMemoryCreatureRegistry {
    creatures: RwLock<Vec<Creature>>,
    loaded: OnceCell<()>,
}

impl InMemoryCreatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.initialized()
    }

    /// Bulk-load the startup data file.
    ///
    /// Only the first successful call has an effect; later calls return `Ok`
    /// without reading anything. Concurrent first callers wait for the one
    /// load in progress.
    pub async fn load(&self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        self.loaded
            .get_or_try_init(|| async move {
                let raw = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| LoadError::Io {
                        path: path.to_path_buf(),
                        source,
                    })?;
                let creatures = parse_creatures(path, &raw)?;
                let count = creatures.len();

                *self.creatures.write().await = creatures;
                tracing::info!(count, path = %path.display(), "Loaded creatures");
                Ok::<(), LoadError>(())
            })
            .await?;
        Ok(())
    }
}

fn parse_creatures(path: &Path, raw: &str) -> Result<Vec<Creature>, LoadError> {
    let records: Vec<CreatureRecord> =
        serde_json::from_str(raw).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut creatures: Vec<Creature> = Vec::with_capacity(records.len());
    for record in records {
        let creature = record.into_creature()?;
        if creatures.iter().any(|c| c.id == creature.id) {
            return Err(LoadError::InvalidRecord {
                id: creature.id,
                reason: "duplicate id".to_string(),
            });
        }
        creatures.push(creature);
    }
    Ok(creatures)
}

/// `max + 1`, re-derived from current state: ids freed by a delete of the
/// highest entry are handed out again. When `max` is `u64::MAX` the lowest
/// unused positive id is taken instead.
fn next_id(creatures: &[Creature]) -> u64 {
    let max = creatures.iter().map(|c| c.id).max().unwrap_or(0);
    max.checked_add(1).unwrap_or_else(|| {
        (1..=u64::MAX)
            .find(|id| creatures.iter().all(|c| c.id != *id))
            .unwrap_or(1)
    })
}

#[async_trait]
impl CreatureRepository for InMemoryCreatureRegistry {
    async fn list(&self) -> Vec<Creature> {
        self.creatures.read().await.clone()
    }

    async fn get(&self, id: u64) -> Result<Creature, DomainError> {
        self.creatures
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(id))
    }

    async fn create(&self, input: CreateCreature) -> Creature {
        let mut creatures = self.creatures.write().await;

        let next_id = next_id(&creatures);
        let creature = Creature::new(next_id, input);
        creatures.push(creature.clone());

        tracing::info!(id = creature.id, name = %creature.name, "Created creature");
        creature
    }

    async fn delete(&self, id: u64) -> Result<(), DomainError> {
        let mut creatures = self.creatures.write().await;
        let index = creatures
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| DomainError::not_found(id))?;
        creatures.remove(index);

        tracing::info!(id, "Deleted creature");
        Ok(())
    }

    async fn level_up(&self, id: u64, levels: u32) -> Result<Creature, DomainError> {
        let mut creatures = self.creatures.write().await;
        let creature = creatures
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::not_found(id))?;

        let gained = creature.level_up(levels)?;
        tracing::info!(id, gained, level = creature.level, "Creature levelled up");
        Ok(creature.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Arc;

    use pokedex::{CreatureType, Sprites, Stats, MAX_LEVEL};

    fn mock_input(name: &str) -> CreateCreature {
        CreateCreature {
            name: name.to_string(),
            base_experience: 10,
            weight: 1,
            height: 1,
            types: vec![CreatureType::Normal],
            stats: Stats {
                hp: 1,
                attack: 1,
                defense: 1,
                speed: 1,
            },
            sprites: Sprites::default(),
        }
    }

    fn data_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const SEED: &str = r#"[
        {"id": 1, "name": "bulbasaur", "baseExperience": 64, "weight": 69, "height": 7,
         "types": ["grass", "poison"], "stats": {"hp": 45, "attack": 49, "defense": 49, "speed": 45},
         "sprites": {"front_default": "1.png", "back_default": "1b.png"}},
        {"id": 4, "name": "charmander", "level": 12, "baseExperience": 62, "weight": 85, "height": 6,
         "types": ["Fire"], "stats": {"hp": 39, "attack": 52, "defense": 43, "speed": 65},
         "sprites": {"front_default": "4.png", "back_default": "4b.png"}}
    ]"#;

    #[tokio::test]
    async fn test_load_defaults_missing_level() {
        let file = data_file(SEED);
        let registry = InMemoryCreatureRegistry::new();
        registry.load(file.path()).await.unwrap();

        let creatures = registry.list().await;
        assert_eq!(creatures.len(), 2);
        assert_eq!(creatures[0].level, 1);
        assert_eq!(creatures[1].level, 12);
        assert_eq!(creatures[1].types, vec![CreatureType::Fire]);
        assert!(registry.is_loaded());
    }

    #[tokio::test]
    async fn test_second_load_is_noop() {
        let file = data_file(SEED);
        let registry = InMemoryCreatureRegistry::new();
        registry.load(file.path()).await.unwrap();
        registry.delete(1).await.unwrap();
        let before = registry.list().await;

        // Same file, a different file, even a missing one: nothing changes.
        registry.load(file.path()).await.unwrap();
        let other = data_file("[]");
        registry.load(other.path()).await.unwrap();
        registry.load("/definitely/not/here.json").await.unwrap();

        assert_eq!(registry.list().await, before);
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let registry = InMemoryCreatureRegistry::new();
        let err = registry.load("/definitely/not/here.json").await.unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(!registry.is_loaded());
    }

    #[tokio::test]
    async fn test_load_garbage_fails() {
        let file = data_file("{ not json");
        let registry = InMemoryCreatureRegistry::new();
        let err = registry.load(file.path()).await.unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_load_duplicate_ids_fails() {
        let file = data_file(
            r#"[{"id": 3, "name": "a", "types": ["ice"]}, {"id": 3, "name": "b", "types": ["ice"]}]"#,
        );
        let registry = InMemoryCreatureRegistry::new();
        let err = registry.load(file.path()).await.unwrap_err();
        assert!(matches!(err, LoadError::InvalidRecord { id: 3, .. }));
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_creature() {
        let registry = InMemoryCreatureRegistry::new();
        let created = registry.create(mock_input("test-mon")).await;

        assert_eq!(created.id, 1);
        assert_eq!(created.level, 1);
        assert_eq!(registry.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_create_uses_max_plus_one() {
        let file = data_file(SEED);
        let registry = InMemoryCreatureRegistry::new();
        registry.load(file.path()).await.unwrap();

        let created = registry.create(mock_input("gap-filler")).await;
        assert_eq!(created.id, 5);

        registry.delete(5).await.unwrap();
        let again = registry.create(mock_input("reuse")).await;
        assert_eq!(again.id, 5);

        registry.delete(1).await.unwrap();
        let after_low_delete = registry.create(mock_input("next")).await;
        assert_eq!(after_low_delete.id, 6);
    }

    #[tokio::test]
    async fn test_list_is_a_snapshot() {
        let registry = InMemoryCreatureRegistry::new();
        registry.create(mock_input("original")).await;

        let mut snapshot = registry.list().await;
        snapshot[0].name = "tampered".to_string();
        snapshot.clear();

        assert_eq!(registry.get(1).await.unwrap().name, "original");
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let registry = InMemoryCreatureRegistry::new();
        registry.create(mock_input("keep")).await;

        assert_eq!(registry.delete(42).await, Err(DomainError::NotFound { id: 42 }));
        assert_eq!(registry.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_level_up_from_five_by_three() {
        let file = data_file(
            r#"[{"id": 9, "name": "squirtle", "level": 5, "baseExperience": 63,
                 "types": ["water"], "stats": {"hp": 44, "attack": 48, "defense": 65, "speed": 43}}]"#,
        );
        let registry = InMemoryCreatureRegistry::new();
        registry.load(file.path()).await.unwrap();

        let updated = registry.level_up(9, 3).await.unwrap();
        assert_eq!(updated.level, 8);
        assert_eq!(updated.base_experience, 93);
        assert_eq!(
            updated.stats,
            Stats {
                hp: 50,
                attack: 51,
                defense: 68,
                speed: 46,
            }
        );
        assert_eq!(registry.get(9).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_level_up_at_max_leaves_creature_unchanged() {
        let file = data_file(&format!(
            r#"[{{"id": 150, "name": "mewtwo", "level": {MAX_LEVEL}, "types": ["psychic"],
                 "stats": {{"hp": 106, "attack": 110, "defense": 90, "speed": 130}}}}]"#
        ));
        let registry = InMemoryCreatureRegistry::new();
        registry.load(file.path()).await.unwrap();
        let before = registry.get(150).await.unwrap();

        let err = registry.level_up(150, 1).await.unwrap_err();
        assert_eq!(
            err,
            DomainError::MaxLevelReached {
                id: 150,
                level: MAX_LEVEL
            }
        );
        assert_eq!(registry.get(150).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_level_up_missing_is_not_found() {
        let registry = InMemoryCreatureRegistry::new();
        assert_eq!(
            registry.level_up(1, 1).await,
            Err(DomainError::NotFound { id: 1 })
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_level_ups_lose_no_updates() {
        let registry = Arc::new(InMemoryCreatureRegistry::new());
        let created = registry.create(mock_input("grinder")).await;

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let registry = Arc::clone(&registry);
                tokio::spawn(async move { registry.level_up(created.id, 1).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let final_state = registry.get(created.id).await.unwrap();
        assert_eq!(final_state.level, 51);
        assert_eq!(final_state.base_experience, 10 + 50 * 10);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_mutations_keep_invariants() {
        let registry = Arc::new(InMemoryCreatureRegistry::new());
        for i in 0..10 {
            registry.create(mock_input(&format!("seed-{i}"))).await;
        }

        let mut handles = Vec::new();
        for i in 0..60u64 {
            let registry = Arc::clone(&registry);
            handles.push(tokio::spawn(async move {
                match i % 3 {
                    0 => {
                        registry.create(mock_input("spawned")).await;
                        (1usize, 0usize)
                    }
                    1 => match registry.delete(i / 3 + 1).await {
                        Ok(()) => (0, 1),
                        Err(_) => (0, 0),
                    },
                    _ => {
                        let _ = registry.level_up(i % 10 + 1, 40).await;
                        (0, 0)
                    }
                }
            }));
        }

        let (mut created, mut deleted) = (10usize, 0usize);
        for handle in handles {
            let (c, d) = handle.await.unwrap();
            created += c;
            deleted += d;
        }

        let creatures = registry.list().await;
        assert_eq!(creatures.len(), created - deleted);
        for creature in creatures {
            assert!((1..=MAX_LEVEL).contains(&creature.level));
            assert!(!creature.types.is_empty() && creature.types.len() <= 2);
        }
    }

    #[tokio::test]
    async fn test_create_after_max_id_stays_positive() {
        let file = data_file(r#"[{"id": 18446744073709551615, "name": "max", "types": ["ice"]}]"#);
        let registry = InMemoryCreatureRegistry::new();
        registry.load(file.path()).await.unwrap();

        let first = registry.create(mock_input("after-max")).await;
        let second = registry.create(mock_input("after-that")).await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(registry.list().await.len(), 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_loads_populate_once() {
        let file = data_file(SEED);
        let registry = Arc::new(InMemoryCreatureRegistry::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let path = file.path().to_path_buf();
                tokio::spawn(async move { registry.load(path).await })
            })
            .collect();
        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }

        let ids: Vec<u64> = registry.list().await.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert!(registry.is_loaded());

        let created = registry.create(mock_input("newcomer")).await;
        assert_eq!(created.id, 5);
    }
}
