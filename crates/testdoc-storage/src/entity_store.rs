//! File system storage for test management entities

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use testdoc_core::error::{Result, TestDocError};
use testdoc_core::model::{Checklist, TestCase, TestPlan, TestRun, TestStrategy};
use testdoc_core::types::{EntityId, EntityKind};
use testdoc_core::EntityFetcher;
use tracing::{debug, warn};

/// Summary of a stored entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityInfo {
    pub id: EntityId,
    pub kind: EntityKind,
    pub name: String,
}

/// Read-only JSON store
///
/// Layout: `<base>/<kind dir>/<uuid>.json`, one aggregate per file with its
/// child collections inline.
pub struct FileSystemStore {
    /// Base directory of the store
    base_dir: PathBuf,
}

impl FileSystemStore {
    /// Open a store rooted at `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        if !base_dir.is_dir() {
            return Err(TestDocError::Config(format!(
                "Data directory does not exist: {}",
                base_dir.display()
            )));
        }
        Ok(Self { base_dir })
    }

    /// Open the store in the platform data directory (~/.testdoc as fallback)
    pub fn default_location() -> Result<Self> {
        Self::new(Self::default_dir())
    }

    /// Platform data directory for the store
    pub fn default_dir() -> PathBuf {
        directories::ProjectDirs::from("com", "testdoc", "testdoc")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".testdoc")
            })
    }

    /// Directory name for an entity kind
    pub fn kind_dir_name(kind: EntityKind) -> &'static str {
        match kind {
            EntityKind::TestPlan => "test_plans",
            EntityKind::TestCase => "test_cases",
            EntityKind::Checklist => "checklists",
            EntityKind::TestStrategy => "test_strategies",
            EntityKind::TestRun => "test_runs",
        }
    }

    /// Directory holding all entities of a kind
    pub fn kind_dir(&self, kind: EntityKind) -> PathBuf {
        self.base_dir.join(Self::kind_dir_name(kind))
    }

    /// Get the path for an entity file
    fn entity_path(&self, kind: EntityKind, id: &EntityId) -> PathBuf {
        self.kind_dir(kind).join(format!("{}.json", id))
    }

    /// Read and parse an entity file
    fn read_entity<T: DeserializeOwned>(&self, kind: EntityKind, id: &EntityId) -> Result<T> {
        let path = self.entity_path(kind, id);
        let file = fs::File::open(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TestDocError::NotFound {
                    kind,
                    id: id.to_string(),
                }
            } else {
                TestDocError::Io(e)
            }
        })?;

        let reader = BufReader::new(file);
        let entity = serde_json::from_reader(reader)
            .map_err(|e| TestDocError::Serde(e).with_context(path.display().to_string()))?;

        debug!("Loaded {} {} from {:?}", kind, id, path);
        Ok(entity)
    }

    /// List stored entities of a kind, sorted by name
    pub fn list(&self, kind: EntityKind) -> Result<Vec<EntityInfo>> {
        let dir = self.kind_dir(kind);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut entities = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Failed to read directory entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            let Some(id) = Self::entity_id_from_path(&path) else {
                continue;
            };

            match self.fetch(kind, &id) {
                Ok(aggregate) => entities.push(EntityInfo {
                    id,
                    kind,
                    name: aggregate.display_name().to_string(),
                }),
                Err(e) => warn!("Failed to read {} file {:?}: {}", kind, path, e),
            }
        }

        entities.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(entities)
    }

    /// Id encoded in a store filename; hidden and non-json files are skipped
    fn entity_id_from_path(path: &Path) -> Option<EntityId> {
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            return None;
        }
        let stem = path.file_stem()?.to_str()?;
        if stem.starts_with('.') {
            return None;
        }
        EntityId::parse(stem).ok()
    }

    /// Get base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl EntityFetcher for FileSystemStore {
    fn fetch_test_plan(&self, id: &EntityId) -> Result<TestPlan> {
        self.read_entity(EntityKind::TestPlan, id)
    }

    fn fetch_test_case(&self, id: &EntityId) -> Result<TestCase> {
        self.read_entity(EntityKind::TestCase, id)
    }

    fn fetch_checklist(&self, id: &EntityId) -> Result<Checklist> {
        self.read_entity(EntityKind::Checklist, id)
    }

    fn fetch_test_strategy(&self, id: &EntityId) -> Result<TestStrategy> {
        self.read_entity(EntityKind::TestStrategy, id)
    }

    fn fetch_test_run(&self, id: &EntityId) -> Result<TestRun> {
        self.read_entity(EntityKind::TestRun, id)
    }
}
