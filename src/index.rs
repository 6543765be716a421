use crate::error::IndexError;
use crate::position::{Level, LevelPosition, Rotation};
use crate::provider::{self, FolderWorldLister, LevelMetadata, LevelSource, NbtLevelSource};
use log::debug;
use std::cmp::Ordering;
use std::io;
use std::path::{Path, PathBuf};

/// Inclusive coordinate window applied while indexing.
///
/// Limits are expressed in the source world's native frame and are checked
/// against the coordinates before rotation.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct CoordinateLimits {
    pub min_x: i32,
    pub max_x: i32,
    pub min_z: i32,
    pub max_z: i32,
}

impl CoordinateLimits {
    pub fn new(min_x: i32, max_x: i32, min_z: i32, max_z: i32) -> CoordinateLimits {
        CoordinateLimits {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    fn contains(&self, position: LevelPosition) -> bool {
        position.x >= self.min_x
            && position.x <= self.max_x
            && position.z >= self.min_z
            && position.z <= self.max_z
    }
}

/// Per-run indexing settings.
#[derive(Debug, Copy, Clone)]
pub struct IndexSettings {
    /// Rotation applied to every discovered level.
    pub rotation: Rotation,
    /// Bounding window on raw coordinates; levels outside are skipped.
    pub limits: Option<CoordinateLimits>,
}

impl Default for IndexSettings {
    fn default() -> Self {
        IndexSettings {
            rotation: Rotation::Degrees0,
            limits: None,
        }
    }
}

/// An indexed world: every discovered level plus the bounding extent of the
/// rotated coordinates.
///
/// Built in a single pass over a world directory and read-only afterwards.
/// Levels are ordered by `zPos` ascending, then `xPos` ascending.
#[derive(Debug, Clone)]
pub struct WorldIndex {
    pub(crate) world_path: PathBuf,
    pub(crate) levels: Vec<Level>,
    pub(crate) min_x: i32,
    pub(crate) min_z: i32,
    pub(crate) max_x: i32,
    pub(crate) max_z: i32,
}

/// Row-major ordering: z ascending, then x ascending.
fn compare_levels(first: &Level, second: &Level) -> Ordering {
    first
        .pos
        .z
        .cmp(&second.pos.z)
        .then(first.pos.x.cmp(&second.pos.x))
}

impl WorldIndex {
    pub(crate) fn empty(world_path: PathBuf) -> WorldIndex {
        WorldIndex {
            world_path,
            levels: Vec::new(),
            min_x: i32::MAX,
            min_z: i32::MAX,
            max_x: i32::MIN,
            max_z: i32::MIN,
        }
    }

    /// Indexes a world directory with the default filesystem collaborators.
    pub fn open<P: AsRef<Path>>(
        settings: &IndexSettings,
        world_path: P,
    ) -> Result<WorldIndex, IndexError> {
        let lister = FolderWorldLister::new(&world_path)?;

        WorldIndex::build(settings, world_path, lister, &mut NbtLevelSource)
    }

    /// Indexes a world from an explicit file listing and metadata source.
    ///
    /// Files that are not levels or fail to parse are skipped; I/O errors
    /// from either collaborator abort the pass.
    pub fn build<P, L, S>(
        settings: &IndexSettings,
        world_path: P,
        lister: L,
        source: &mut S,
    ) -> Result<WorldIndex, IndexError>
    where
        P: AsRef<Path>,
        L: IntoIterator<Item = Result<PathBuf, io::Error>>,
        S: LevelSource,
    {
        let mut index = WorldIndex::empty(world_path.as_ref().to_path_buf());

        for path in lister {
            let path = path?;

            // Only structural validation is requested here; full content
            // parsing is left to later stages.
            let position = match source.level_metadata(&path, true)? {
                LevelMetadata::Level { position } => position,
                LevelMetadata::NotLevel => continue,
                LevelMetadata::GrammarError => {
                    debug!(target: "alpha-world", "Skipping malformed level file {}", path.display());
                    continue;
                }
            };

            if let Some(limits) = settings.limits {
                if !limits.contains(position) {
                    continue;
                }
            }

            index.push(Level::new(position, settings.rotation));
        }

        index.levels.sort_by(compare_levels);

        Ok(index)
    }

    fn push(&mut self, level: Level) {
        self.min_x = self.min_x.min(level.pos.x);
        self.max_x = self.max_x.max(level.pos.x);
        self.min_z = self.min_z.min(level.pos.z);
        self.max_z = self.max_z.max(level.pos.z);

        self.levels.push(level);
    }

    pub fn world_path(&self) -> &Path {
        &self.world_path
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Smallest rotated x coordinate. Greater than [`max_x`](Self::max_x)
    /// when the index is empty.
    pub fn min_x(&self) -> i32 {
        self.min_x
    }

    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    /// Smallest rotated z coordinate. Greater than [`max_z`](Self::max_z)
    /// when the index is empty.
    pub fn min_z(&self) -> i32 {
        self.min_z
    }

    pub fn max_z(&self) -> i32 {
        self.max_z
    }

    /// Canonical on-disk path of a level, derived from its unrotated
    /// coordinates.
    pub fn level_path(&self, level: &Level) -> PathBuf {
        provider::level_file_path(&self.world_path, level.real)
    }
}
