use crate::base36;
use crate::position::LevelPosition;
use log::debug;
use nbt::decode::read_gzip_compound_tag;
use std::fs::{self, File, ReadDir};
use std::io;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Result of a lightweight metadata probe of a single file.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum LevelMetadata {
    /// Not a level file at all, for example an unrelated file or a lock file.
    NotLevel,
    /// Named like a level file but the coordinates or contents do not parse.
    GrammarError,
    /// A valid level file at the given unrotated coordinates.
    Level { position: LevelPosition },
}

/// Reads per-file level metadata.
///
/// With `lightweight` set only structural validation is requested and the
/// source may skip decoding file contents entirely. A `NotLevel` or
/// `GrammarError` result is not an error; I/O failures distinct from "not a
/// level" are surfaced through the `Result`.
pub trait LevelSource {
    fn level_metadata(
        &mut self,
        path: &Path,
        lightweight: bool,
    ) -> Result<LevelMetadata, io::Error>;
}

/// Reads level metadata from gzip compressed NBT level files.
///
/// In lightweight mode only the filename grammar is validated and the
/// coordinates are decoded from the name, without touching the file. The
/// full probe opens the file and reads `xPos`/`zPos` from the `Level`
/// compound tag instead.
pub struct NbtLevelSource;

impl LevelSource for NbtLevelSource {
    fn level_metadata(
        &mut self,
        path: &Path,
        lightweight: bool,
    ) -> Result<LevelMetadata, io::Error> {
        let metadata = level_pos_from_filename(path);

        if lightweight {
            return Ok(metadata);
        }

        match metadata {
            LevelMetadata::Level { .. } => {}
            other => return Ok(other),
        }

        let file = File::open(path)?;

        let root = match read_gzip_compound_tag(&mut BufReader::new(file)) {
            Ok(root) => root,
            Err(_) => {
                debug!(target: "alpha-world", "Failed to decode nbt in {}", path.display());
                return Ok(LevelMetadata::GrammarError);
            }
        };

        let level_tag = match root.get_compound_tag("Level") {
            Ok(level_tag) => level_tag,
            Err(_) => return Ok(LevelMetadata::GrammarError),
        };

        match (level_tag.get_i32("xPos"), level_tag.get_i32("zPos")) {
            (Ok(x), Ok(z)) => Ok(LevelMetadata::Level {
                position: LevelPosition::new(x, z),
            }),
            _ => Ok(LevelMetadata::GrammarError),
        }
    }
}

/// Derives level coordinates from a `c.<x>.<z>.dat` filename.
pub fn level_pos_from_filename(path: &Path) -> LevelMetadata {
    // we can use lossy because any mangled character fails the decode
    let filename = path.file_name().unwrap_or_default().to_string_lossy();
    let parts: Vec<_> = filename.split('.').collect();

    let incorrect_format = parts.len() != 4 || parts[0] != "c" || parts[3] != "dat";

    if incorrect_format {
        return LevelMetadata::NotLevel;
    }

    match (base36::decode(parts[1]), base36::decode(parts[2])) {
        (Ok(x), Ok(z)) => LevelMetadata::Level {
            position: LevelPosition::new(x, z),
        },
        _ => LevelMetadata::GrammarError,
    }
}

/// Computes the canonical on-disk path of a level from its unrotated
/// coordinates.
///
/// Levels sit two directories deep, each directory named after the base-36
/// form of the matching coordinate modulo 64. The hashing bounds
/// per-directory file counts for worlds with very large extent.
pub fn level_file_path<P: AsRef<Path>>(world_path: P, position: LevelPosition) -> PathBuf {
    let mod_x = position.x.rem_euclid(64);
    let mod_z = position.z.rem_euclid(64);

    world_path
        .as_ref()
        .join(base36::encode(mod_x))
        .join(base36::encode(mod_z))
        .join(level_filename(position))
}

fn level_filename(position: LevelPosition) -> String {
    format!(
        "c.{}.{}.dat",
        base36::encode(position.x),
        base36::encode(position.z)
    )
}

/// Recursively enumerates every file under a world directory.
///
/// The sequence is finite and single pass; restart by constructing a new
/// lister. Listing order is arbitrary and callers must not depend on it.
pub struct FolderWorldLister {
    pending: Vec<ReadDir>,
}

impl FolderWorldLister {
    pub fn new<P: AsRef<Path>>(world_path: P) -> Result<FolderWorldLister, io::Error> {
        let listing = fs::read_dir(world_path)?;

        Ok(FolderWorldLister {
            pending: vec![listing],
        })
    }
}

impl Iterator for FolderWorldLister {
    type Item = Result<PathBuf, io::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let listing = self.pending.last_mut()?;

            let entry = match listing.next() {
                Some(Ok(entry)) => entry,
                Some(Err(io_error)) => return Some(Err(io_error)),
                None => {
                    self.pending.pop();
                    continue;
                }
            };

            let path = entry.path();

            if path.is_dir() {
                match fs::read_dir(&path) {
                    Ok(listing) => self.pending.push(listing),
                    Err(io_error) => return Some(Err(io_error)),
                }

                continue;
            }

            return Some(Ok(path));
        }
    }
}
