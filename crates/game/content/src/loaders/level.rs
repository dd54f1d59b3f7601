//! Level geometry loader.
//!
//! Walls are written as `(x, y, width, height)` tuples. The cage is given by
//! its outer outline and wall thickness; the four walls are derived from that.

use std::path::Path;

use chase_core::{Cage, Level, MapDimensions, Wall};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

type Rect = (f64, f64, f64, f64);

/// Level structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LevelRon {
    dimensions: (f64, f64),
    walls: Vec<Rect>,
    #[serde(default)]
    cage: Option<CageRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CageRon {
    outline: Rect,
    thickness: f64,
}

fn wall((x, y, width, height): Rect) -> Wall {
    Wall::new(x, y, width, height)
}

/// Loader for level geometry from RON files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load and validate a level from a RON file.
    pub fn load(path: &Path) -> LoadResult<Level> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid level {}: {}", path.display(), e))
    }

    /// Parse and validate level RON text.
    pub fn parse(content: &str) -> LoadResult<Level> {
        let data: LevelRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level RON: {}", e))?;

        let dimensions = MapDimensions::new(data.dimensions.0, data.dimensions.1);
        let walls = data.walls.into_iter().map(wall).collect();
        let cage = data
            .cage
            .map(|cage| Cage::enclosing(wall(cage.outline), cage.thickness));

        let level = Level::new(dimensions, walls, cage);
        level.validate()?;
        Ok(level)
    }
}
