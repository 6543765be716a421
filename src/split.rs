use crate::error::SplitError;
use crate::index::WorldIndex;

/// A rectangular grid of disjoint sub-worlds produced by
/// [`WorldIndex::split`].
///
/// Cells are stored row-major with x increasing fastest. Cells that received
/// no levels stay in the grid as valid empty indices.
#[derive(Debug, Clone)]
pub struct WorldGrid {
    width: usize,
    height: usize,
    cells: Vec<WorldIndex>,
}

impl WorldGrid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Sub-world at the given grid coordinates.
    ///
    /// # Panics
    ///
    /// Panics when the coordinates fall outside the grid.
    pub fn cell(&self, x: usize, z: usize) -> &WorldIndex {
        assert!(x < self.width, "Grid x coordinate out of bounds");
        assert!(z < self.height, "Grid z coordinate out of bounds");

        &self.cells[z * self.width + x]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WorldIndex> {
        self.cells.iter()
    }
}

impl IntoIterator for WorldGrid {
    type Item = WorldIndex;
    type IntoIter = std::vec::IntoIter<WorldIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a WorldGrid {
    type Item = &'a WorldIndex;
    type IntoIter = std::slice::Iter<'a, WorldIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl WorldIndex {
    /// Splits the index into a grid of sub-worlds, each covering a
    /// `chunk_size` by `chunk_size` tile of rotated coordinate space.
    ///
    /// Every level lands in exactly one cell and the cells' level sets are
    /// disjoint, so a downstream stage may process the sub-worlds in
    /// parallel with no coordination. Splitting an empty index yields an
    /// empty grid.
    pub fn split(&self, chunk_size: i32) -> Result<WorldGrid, SplitError> {
        if chunk_size <= 0 {
            return Err(SplitError::InvalidChunkSize { chunk_size });
        }

        if self.is_empty() {
            return Ok(WorldGrid {
                width: 0,
                height: 0,
                cells: Vec::new(),
            });
        }

        // Cells needed on the negative and positive side of each axis,
        // including one boundary cell. Division truncates toward zero.
        let neg_x = -self.min_x / chunk_size + 1;
        let neg_z = -self.min_z / chunk_size + 1;
        let pos_x = self.max_x / chunk_size + 1;
        let pos_z = self.max_z / chunk_size + 1;

        let width = (neg_x + pos_x) as usize;
        let height = (neg_z + pos_z) as usize;

        let mut cells = Vec::with_capacity(width * height);

        for z in 0..height {
            for x in 0..width {
                let cell_x = x as i32 - neg_x;
                let cell_z = z as i32 - neg_z;

                let mut cell = WorldIndex::empty(self.world_path.clone());

                cell.min_x = cell_x * chunk_size;
                cell.max_x = (cell_x + 1) * chunk_size;
                cell.min_z = cell_z * chunk_size;
                cell.max_z = (cell_z + 1) * chunk_size;

                cells.push(cell);
            }
        }

        for level in &self.levels {
            let x = ((level.pos.x - self.min_x) / chunk_size) as usize;
            let z = ((level.pos.z - self.min_z) / chunk_size) as usize;

            cells[z * width + x].levels.push(*level);
        }

        Ok(WorldGrid {
            width,
            height,
            cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::base36;
    use crate::error::SplitError;
    use crate::index::{IndexSettings, WorldIndex};
    use crate::provider::NbtLevelSource;
    use std::collections::HashSet;
    use std::io;
    use std::path::PathBuf;

    fn index_of(positions: &[(i32, i32)]) -> WorldIndex {
        let paths: Vec<Result<PathBuf, io::Error>> = positions
            .iter()
            .map(|(x, z)| {
                Ok(PathBuf::from(format!(
                    "c.{}.{}.dat",
                    base36::encode(*x),
                    base36::encode(*z)
                )))
            })
            .collect();

        WorldIndex::build(&IndexSettings::default(), "world", paths, &mut NbtLevelSource).unwrap()
    }

    #[test]
    fn test_split_rejects_non_positive_chunk_size() {
        let index = index_of(&[(0, 0)]);

        for chunk_size in &[0, -1, -16] {
            match index.split(*chunk_size).err().unwrap() {
                SplitError::InvalidChunkSize { chunk_size: size } => {
                    assert_eq!(size, *chunk_size);
                }
            }
        }
    }

    #[test]
    fn test_split_empty_world() {
        let index = index_of(&[]);
        let grid = index.split(16).unwrap();

        assert!(grid.is_empty());
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
        assert_eq!(grid.iter().count(), 0);
    }

    fn assert_partition(positions: &[(i32, i32)], chunk_size: i32) {
        let index = index_of(positions);
        let grid = index.split(chunk_size).unwrap();

        assert_eq!(grid.len(), grid.width() * grid.height());

        let mut seen = HashSet::new();
        let mut total = 0;

        for cell in &grid {
            for level in cell.levels() {
                assert!(
                    seen.insert(level.real),
                    "level {:?} assigned to more than one cell",
                    level.real
                );
                total += 1;
            }
        }

        assert_eq!(total, index.len());

        let expected: HashSet<_> = index.levels().iter().map(|level| level.real).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_partition_completeness_and_disjointness() {
        let positions = [
            (0, 0),
            (15, 15),
            (16, 16),
            (-1, -1),
            (-16, -16),
            (-17, 40),
            (100, -3),
            (7, 33),
            (-100, -100),
        ];

        for chunk_size in &[1, 7, 16, 64, 1000] {
            assert_partition(&positions, *chunk_size);
        }
    }

    #[test]
    fn test_partition_world_in_positive_quadrant() {
        assert_partition(&[(5, 5), (20, 33), (100, 1)], 16);
    }

    #[test]
    fn test_partition_single_level() {
        assert_partition(&[(-7, 9)], 16);
    }

    #[test]
    fn test_levels_assigned_relative_to_extent() {
        let index = index_of(&[(-20, -20), (0, 0), (15, 10)]);
        let grid = index.split(16).unwrap();

        for z in 0..grid.height() {
            for x in 0..grid.width() {
                for level in grid.cell(x, z).levels() {
                    let expected_x = ((level.pos.x - index.min_x()) / 16) as usize;
                    let expected_z = ((level.pos.z - index.min_z()) / 16) as usize;

                    assert_eq!((x, z), (expected_x, expected_z));
                }
            }
        }
    }

    #[test]
    fn test_cell_bounds_are_chunk_aligned() {
        let index = index_of(&[(-20, -20), (15, 10)]);
        let grid = index.split(16).unwrap();

        // min_x = -20 -> neg_x = 2, max_x = 15 -> pos_x = 1; same for z.
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);

        let first = grid.cell(0, 0);
        assert_eq!(first.min_x(), -32);
        assert_eq!(first.max_x(), -16);
        assert_eq!(first.min_z(), -32);
        assert_eq!(first.max_z(), -16);

        let last = grid.cell(2, 2);
        assert_eq!(last.min_x(), 0);
        assert_eq!(last.max_x(), 16);
        assert_eq!(last.min_z(), 0);
        assert_eq!(last.max_z(), 16);
    }

    #[test]
    fn test_empty_cells_are_valid_indices() {
        let index = index_of(&[(-20, -20), (15, 10)]);
        let grid = index.split(16).unwrap();

        let empty_cells = grid.iter().filter(|cell| cell.is_empty()).count();

        assert!(empty_cells > 0);

        for cell in &grid {
            assert_eq!(cell.world_path(), index.world_path());
            assert_eq!(cell.levels().len(), cell.len());
        }
    }

    #[test]
    fn test_split_is_deterministic() {
        let index = index_of(&[(0, 0), (15, 15), (-33, 7), (64, -64)]);

        let first = index.split(16).unwrap();
        let second = index.split(16).unwrap();

        assert_eq!(first.width(), second.width());
        assert_eq!(first.height(), second.height());

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.levels(), b.levels());
        }
    }
}
