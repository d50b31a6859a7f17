//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::GridSet;
use crate::layout::TileIndex;
use std::fmt;

/// Affine transform from pixel to grid coordinates of a single tile
#[derive(PartialEq, Clone, Debug)]
pub struct WorldFile {
    /// Pixel size in x direction
    pub pixel_size_x: f64,
    /// Negative pixel size in y direction
    pub pixel_size_y: f64,
    /// x coordinate of the upper left corner
    pub upper_left_x: f64,
    /// y coordinate of the upper left corner
    pub upper_left_y: f64,
}

impl WorldFile {
    /// World file of a tile. `None` if the tile index is outside the grid.
    pub fn from_tile(gridset: &GridSet, tile: &TileIndex) -> Option<WorldFile> {
        let bbox = gridset.bounds_from_index(tile.x, tile.y, tile.z)?;
        let scale_x = bbox.width() / gridset.grid.tile_width() as f64;
        let scale_y = bbox.height() / gridset.grid.tile_height() as f64;
        Some(WorldFile {
            pixel_size_x: scale_x,
            pixel_size_y: -scale_y,
            upper_left_x: bbox.minx,
            upper_left_y: bbox.maxy,
        })
    }
    /// The six world file coefficients (A, D, B, E, C, F)
    pub fn coefficients(&self) -> [f64; 6] {
        [
            self.pixel_size_x,
            0.0,
            0.0,
            self.pixel_size_y,
            self.upper_left_x,
            self.upper_left_y,
        ]
    }
}

// Rotation terms are always zero and written as integers
impl fmt::Display for WorldFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?}", self.pixel_size_x)?;
        writeln!(f, "0")?;
        writeln!(f, "0")?;
        writeln!(f, "{:?}", self.pixel_size_y)?;
        writeln!(f, "{:?}", self.upper_left_x)?;
        writeln!(f, "{:?}", self.upper_left_y)
    }
}
