//! Entity lookup abstraction

use crate::error::Result;
use crate::model::{Aggregate, Checklist, TestCase, TestPlan, TestRun, TestStrategy};
use crate::types::{EntityId, EntityKind};

/// Trait for backends that load fully populated aggregates
///
/// Implementations must return child collections (steps, items, results, ...)
/// already loaded, in stored order, and fail with `TestDocError::NotFound`
/// when the identifier does not resolve.
pub trait EntityFetcher: Send + Sync {
    fn fetch_test_plan(&self, id: &EntityId) -> Result<TestPlan>;

    fn fetch_test_case(&self, id: &EntityId) -> Result<TestCase>;

    fn fetch_checklist(&self, id: &EntityId) -> Result<Checklist>;

    fn fetch_test_strategy(&self, id: &EntityId) -> Result<TestStrategy>;

    fn fetch_test_run(&self, id: &EntityId) -> Result<TestRun>;

    /// Fetch any kind of entity
    fn fetch(&self, kind: EntityKind, id: &EntityId) -> Result<Aggregate> {
        Ok(match kind {
            EntityKind::TestPlan => self.fetch_test_plan(id)?.into(),
            EntityKind::TestCase => self.fetch_test_case(id)?.into(),
            EntityKind::Checklist => self.fetch_checklist(id)?.into(),
            EntityKind::TestStrategy => self.fetch_test_strategy(id)?.into(),
            EntityKind::TestRun => self.fetch_test_run(id)?.into(),
        })
    }
}

/// In-memory store for testing
#[cfg(test)]
pub mod memory {
    use super::*;
    use crate::error::TestDocError;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// In-memory entity store for testing
    pub struct MemoryStore {
        entities: RwLock<HashMap<EntityId, Aggregate>>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self {
                entities: RwLock::new(HashMap::new()),
            }
        }

        pub fn insert(&self, aggregate: impl Into<Aggregate>) -> EntityId {
            let aggregate = aggregate.into();
            let id = aggregate.id();
            self.entities.write().unwrap().insert(id, aggregate);
            id
        }

        fn get(&self, kind: EntityKind, id: &EntityId) -> Result<Aggregate> {
            let entities = self.entities.read().unwrap();
            entities
                .get(id)
                .filter(|aggregate| aggregate.kind() == kind)
                .cloned()
                .ok_or_else(|| TestDocError::NotFound {
                    kind,
                    id: id.to_string(),
                })
        }
    }

    impl Default for MemoryStore {
        fn default() -> Self {
            Self::new()
        }
    }

    macro_rules! fetch_variant {
        ($self:ident, $kind:ident, $id:ident) => {
            match $self.get(EntityKind::$kind, $id)? {
                Aggregate::$kind(entity) => Ok(entity),
                _ => unreachable!("kind checked in get"),
            }
        };
    }

    impl EntityFetcher for MemoryStore {
        fn fetch_test_plan(&self, id: &EntityId) -> Result<TestPlan> {
            fetch_variant!(self, TestPlan, id)
        }

        fn fetch_test_case(&self, id: &EntityId) -> Result<TestCase> {
            fetch_variant!(self, TestCase, id)
        }

        fn fetch_checklist(&self, id: &EntityId) -> Result<Checklist> {
            fetch_variant!(self, Checklist, id)
        }

        fn fetch_test_strategy(&self, id: &EntityId) -> Result<TestStrategy> {
            fetch_variant!(self, TestStrategy, id)
        }

        fn fetch_test_run(&self, id: &EntityId) -> Result<TestRun> {
            fetch_variant!(self, TestRun, id)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_memory_store_fetch() {
            let store = MemoryStore::new();
            let plan = TestPlan::new(EntityId::new(), "Regression");
            let id = store.insert(plan.clone());

            assert_eq!(store.fetch_test_plan(&id).unwrap(), plan);
            let aggregate = store.fetch(EntityKind::TestPlan, &id).unwrap();
            assert_eq!(aggregate.display_name(), "Regression");
        }

        #[test]
        fn test_memory_store_wrong_kind_is_not_found() {
            let store = MemoryStore::new();
            let id = store.insert(TestPlan::new(EntityId::new(), "Regression"));

            let err = store.fetch_test_run(&id).unwrap_err();
            assert!(matches!(
                err,
                TestDocError::NotFound { kind: EntityKind::TestRun, .. }
            ));
        }

        #[test]
        fn test_memory_store_missing() {
            let store = MemoryStore::new();
            assert!(store.fetch(EntityKind::Checklist, &EntityId::new()).is_err());
        }
    }
}
