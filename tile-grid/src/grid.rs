//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//!Tile grids

/// Geographic extent
#[derive(PartialEq, Clone, Debug)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl Extent {
    pub fn width(&self) -> f64 {
        self.maxx - self.minx
    }
    pub fn height(&self) -> f64 {
        self.maxy - self.miny
    }
}

// Number of tiles (wide, high)
type CellIndex = (u32, u32);

/// Grid origin
#[derive(PartialEq, Clone, Debug)]
pub enum Origin {
    TopLeft,
    BottomLeft,
}

/// Grid units
#[derive(PartialEq, Clone, Debug)]
pub enum Unit {
    Meters,
    Degrees,
    Feet,
}

/// Spherical mercator resolution at level 0 (256px tiles)
const MERC_RESOLUTION_Z0: f64 = 156543.0339280410;

/// Tile grid
#[derive(Clone, Debug)]
pub struct Grid {
    /// The width of an individual tile, in pixels.
    width: u16,
    /// The height of an individual tile, in pixels.
    height: u16,
    /// The geographical extent covered by the grid, in ground units (e.g. meters, degrees, feet, etc.).
    /// The (minx,miny) point defines the origin of bottom-left aligned grids,
    /// (minx,maxy) the origin of top-left aligned grids.
    pub extent: Extent,
    /// Spatial reference system (EPSG code).
    pub srid: i32,
    /// Grid units
    pub units: Unit,
    /// Units per pixel for each zoom level, largest first.
    resolutions: Vec<f64>,
    /// Tiles wide/high for each resolution
    level_max: Vec<CellIndex>,
    /// Grid origin
    pub origin: Origin,
}

fn halving_resolutions(res_z0: f64, nlevels: u8) -> Vec<f64> {
    (0..nlevels).map(|z| res_z0 / (z as f64).exp2()).collect()
}

impl Grid {
    /// WGS84 grid with 256x256 tiles, two tiles wide at level 0
    pub fn wgs84() -> Grid {
        Grid::new(
            256,
            256,
            Extent {
                minx: -180.0,
                miny: -90.0,
                maxx: 180.0,
                maxy: 90.0,
            },
            4326,
            Unit::Degrees,
            halving_resolutions(0.703125, 22),
            Origin::BottomLeft,
        )
    }

    /// WGS84 grid with 512x512 tiles, two tiles wide at level 0
    pub fn wgs84_512() -> Grid {
        Grid::new(
            512,
            512,
            Extent {
                minx: -180.0,
                miny: -90.0,
                maxx: 180.0,
                maxy: 90.0,
            },
            4326,
            Unit::Degrees,
            halving_resolutions(0.3515625, 22),
            Origin::BottomLeft,
        )
    }

    /// Web Mercator grid (Google maps compatible)
    pub fn web_mercator() -> Grid {
        Grid::new(
            256,
            256,
            Extent {
                minx: -20037508.3427892480,
                miny: -20037508.3427892480,
                maxx: 20037508.3427892480,
                maxy: 20037508.3427892480,
            },
            3857,
            Unit::Meters,
            halving_resolutions(MERC_RESOLUTION_Z0, 23),
            Origin::BottomLeft,
        )
    }

    pub fn new(
        width: u16,
        height: u16,
        extent: Extent,
        srid: i32,
        units: Unit,
        resolutions: Vec<f64>,
        origin: Origin,
    ) -> Grid {
        let mut grid = Grid {
            width,
            height,
            extent,
            srid,
            units,
            resolutions,
            origin,
            level_max: Vec::new(),
        };
        grid.level_max = grid.level_max();
        grid
    }
    /// Same grid with a different SRS code
    pub fn with_srid(mut self, srid: i32) -> Grid {
        self.srid = srid;
        self
    }
    pub fn tile_width(&self) -> u16 {
        self.width
    }
    pub fn tile_height(&self) -> u16 {
        self.height
    }
    pub fn nlevels(&self) -> u8 {
        self.resolutions.len() as u8
    }
    pub fn resolution(&self, zoom: u8) -> Option<f64> {
        self.resolutions.get(zoom as usize).cloned()
    }
    /// Number of tiles covering the grid height at `zoom`
    pub fn tiles_high(&self, zoom: u8) -> Option<u32> {
        self.level_max.get(zoom as usize).map(|&(_, maxy)| maxy)
    }
    /// Number of tiles covering the grid width at `zoom`
    pub fn tiles_wide(&self, zoom: u8) -> Option<u32> {
        self.level_max.get(zoom as usize).map(|&(maxx, _)| maxx)
    }
    /// Extent of a given tile counted from the grid origin.
    /// Does not check the tile against the level limits.
    pub fn tile_extent(&self, xtile: u32, ytile: u32, zoom: u8) -> Extent {
        // based on mapcache_grid_get_tile_extent
        let res = self.resolutions[zoom as usize];
        let tile_sx = self.width as f64;
        let tile_sy = self.height as f64;
        match self.origin {
            Origin::BottomLeft => Extent {
                minx: self.extent.minx + (res * xtile as f64 * tile_sx),
                miny: self.extent.miny + (res * ytile as f64 * tile_sy),
                maxx: self.extent.minx + (res * (xtile + 1) as f64 * tile_sx),
                maxy: self.extent.miny + (res * (ytile + 1) as f64 * tile_sy),
            },
            Origin::TopLeft => Extent {
                minx: self.extent.minx + (res * xtile as f64 * tile_sx),
                miny: self.extent.maxy - (res * (ytile + 1) as f64 * tile_sy),
                maxx: self.extent.minx + (res * (xtile + 1) as f64 * tile_sx),
                maxy: self.extent.maxy - (res * ytile as f64 * tile_sy),
            },
        }
    }
    /// Extent of a tile in TMS adressing scheme (row 0 at the bottom).
    /// Returns `None` if zoom, column or row are out of the grid range.
    pub fn tile_bounds(&self, xtile: u32, ytile: u32, zoom: u8) -> Option<Extent> {
        let (maxx, maxy) = *self.level_max.get(zoom as usize)?;
        if xtile >= maxx || ytile >= maxy {
            return None;
        }
        let extent = match self.origin {
            Origin::BottomLeft => self.tile_extent(xtile, ytile, zoom),
            Origin::TopLeft => self.tile_extent(xtile, maxy - ytile - 1, zoom),
        };
        Some(extent)
    }
    /// Convert a top-down row (XYZ adressing scheme) into a TMS row.
    /// Returns `None` for unknown zoom levels or rows outside the level.
    pub fn ytile_from_xyz(&self, ytile: u32, zoom: u8) -> Option<u32> {
        // y = maxy-ytile-1
        let maxy = self.tiles_high(zoom)?;
        maxy.checked_sub(ytile)?.checked_sub(1)
    }
    /// (maxx, maxy) of grid level
    pub(crate) fn level_limit(&self, zoom: u8) -> CellIndex {
        let res = self.resolutions[zoom as usize];
        let unitheight = self.height as f64 * res;
        let unitwidth = self.width as f64 * res;

        let maxy =
            ((self.extent.maxy - self.extent.miny - 0.01 * unitheight) / unitheight).ceil() as u32;
        let maxx =
            ((self.extent.maxx - self.extent.minx - 0.01 * unitwidth) / unitwidth).ceil() as u32;
        (maxx, maxy)
    }
    /// (maxx, maxy) of all grid levels
    fn level_max(&self) -> Vec<CellIndex> {
        (0..self.nlevels())
            .map(|zoom| self.level_limit(zoom))
            .collect()
    }
}
