//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::GridSet;
use crate::layout::{Layout, TileLayout};
use crate::worldfile::crs::{projection_wkt, CrsResolver};
use crate::worldfile::world::WorldFile;
use std::fs;
use std::path::{Path, PathBuf};

/// World file extension. Format specific extensions (pgw, jgw, ...) are not
/// recognized by all viewers.
pub const WORLD_EXTENSION: &str = "wld";
pub const PROJECTION_EXTENSION: &str = "prj";

#[derive(PartialEq, Clone, Debug)]
pub enum WriteResult {
    Written,
    /// World file exists already or tile is not part of the grid set
    Skipped,
    Failed(String),
}

/// Writes world files for the tiles of one grid set
pub struct WorldFileWriter<'a> {
    gridset: &'a GridSet,
    layout: &'a TileLayout,
    /// Directory containing the grid set directories
    cache_root: PathBuf,
    overwrite: bool,
    /// Projection written along with each world file
    wkt: Option<String>,
}

impl<'a> WorldFileWriter<'a> {
    pub fn new(
        gridset: &'a GridSet,
        layout: &'a TileLayout,
        cache_root: &Path,
        overwrite: bool,
        write_projection: bool,
        resolver: &dyn CrsResolver,
    ) -> Result<WorldFileWriter<'a>, String> {
        let wkt = if write_projection {
            let wkt = projection_wkt(gridset.srid(), resolver)
                .map_err(|e| format!("Grid set '{}': {}", gridset.name, e))?;
            Some(wkt)
        } else {
            None
        };
        Ok(WorldFileWriter {
            gridset,
            layout,
            cache_root: cache_root.to_path_buf(),
            overwrite,
            wkt,
        })
    }
    pub fn gridset(&self) -> &GridSet {
        self.gridset
    }
    /// Projection WKT, if projection files are written
    pub fn wkt(&self) -> Option<&str> {
        self.wkt.as_ref().map(|s| s.as_str())
    }
    /// World file for a tile file, `None` if the tile can't be located in the grid set
    pub fn world_file(&self, tile: &Path) -> Option<WorldFile> {
        let relpath = tile.strip_prefix(&self.cache_root).unwrap_or(tile);
        let index = match self.layout.tile_index(relpath, self.gridset) {
            Some(index) => index,
            None => {
                debug!("Cannot compute tile coordinates of {}", tile.display());
                return None;
            }
        };
        let world = WorldFile::from_tile(self.gridset, &index);
        if world.is_none() {
            debug!(
                "Tile {} of {} is outside of grid set {}",
                index,
                tile.display(),
                self.gridset.name
            );
        }
        world
    }
    /// Write world file (and projection file) next to the tile file
    pub fn write(&self, tile: &Path) -> WriteResult {
        let (dir, basename) = match (
            tile.parent(),
            tile.file_stem().and_then(|stem| stem.to_str()),
        ) {
            (Some(dir), Some(basename)) => (dir, basename),
            _ => return WriteResult::Skipped,
        };
        let world_path = dir.join(format!("{}.{}", basename, WORLD_EXTENSION));
        let prj_path = dir.join(format!("{}.{}", basename, PROJECTION_EXTENSION));
        // A missing projection file is completed on the next run
        if !self.overwrite && world_path.exists() && (self.wkt.is_none() || prj_path.exists()) {
            return WriteResult::Skipped;
        }
        let world = match self.world_file(tile) {
            Some(world) => world,
            None => return WriteResult::Skipped,
        };
        if let Err(e) = fs::write(&world_path, world.to_string()) {
            let msg = format!("Failed to write world file {}: {}", world_path.display(), e);
            error!("{}", msg);
            return WriteResult::Failed(msg);
        }
        if let Some(ref wkt) = self.wkt {
            if let Err(e) = fs::write(&prj_path, wkt) {
                let msg = format!(
                    "Failed to write projection file {}: {}",
                    prj_path.display(),
                    e
                );
                error!("{}", msg);
                return WriteResult::Failed(msg);
            }
        }
        WriteResult::Written
    }
}
