/// Coordinates of a level file on the world grid.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub struct LevelPosition {
    pub x: i32,
    pub z: i32,
}

impl LevelPosition {
    pub fn new(x: i32, z: i32) -> LevelPosition {
        LevelPosition { x, z }
    }
}

/// Coordinate frame rotation applied uniformly to every discovered level.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Rotation {
    Degrees0,
    Degrees90,
    Degrees180,
    Degrees270,
}

impl Rotation {
    /// Builds a rotation from whole degrees, as found in settings files.
    pub fn from_degrees(degrees: u32) -> Option<Rotation> {
        match degrees {
            0 => Some(Rotation::Degrees0),
            90 => Some(Rotation::Degrees90),
            180 => Some(Rotation::Degrees180),
            270 => Some(Rotation::Degrees270),
            _ => None,
        }
    }

    /// Rotates a position around the world origin.
    pub fn apply(self, position: LevelPosition) -> LevelPosition {
        match self {
            Rotation::Degrees0 => position,
            Rotation::Degrees90 => LevelPosition::new(-position.z, position.x),
            Rotation::Degrees180 => LevelPosition::new(-position.x, -position.z),
            Rotation::Degrees270 => LevelPosition::new(position.z, -position.x),
        }
    }
}

/// A discovered level file.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Level {
    /// Coordinates exactly as stored on disk. Never rotated; these identify
    /// the file's canonical path.
    pub real: LevelPosition,
    /// Coordinates after rotation, used for ordering, extent tracking and
    /// tiling.
    pub pos: LevelPosition,
}

impl Level {
    pub fn new(real: LevelPosition, rotation: Rotation) -> Level {
        Level {
            real,
            pos: rotation.apply(real),
        }
    }
}
