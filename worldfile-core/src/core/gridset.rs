//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::ApplicationCfg;
use crate::core::Config;
use std::collections::BTreeMap;
use tile_grid::{Extent, Grid};

/// Named tile grid
#[derive(Clone, Debug)]
pub struct GridSet {
    pub name: String,
    pub grid: Grid,
}

impl GridSet {
    pub fn new(name: &str, grid: Grid) -> GridSet {
        GridSet {
            name: name.to_string(),
            grid,
        }
    }
    /// Spatial reference code of the grid
    pub fn srid(&self) -> i32 {
        self.grid.srid
    }
    /// Bounding box of a tile in TMS adressing scheme
    pub fn bounds_from_index(&self, xtile: u32, ytile: u32, zoom: u8) -> Option<Extent> {
        self.grid.tile_bounds(xtile, ytile, zoom)
    }
    /// Number of tiles covering the grid height, `None` for undefined levels
    pub fn tiles_high(&self, zoom: u8) -> Option<u32> {
        self.grid.tiles_high(zoom)
    }
}

/// Grid sets by name. Lookups are exact, case sensitive matches.
#[derive(Clone, Debug)]
pub struct GridCatalog {
    gridsets: BTreeMap<String, GridSet>,
}

impl GridCatalog {
    /// Empty catalog
    pub fn new() -> GridCatalog {
        GridCatalog {
            gridsets: BTreeMap::new(),
        }
    }
    /// Catalog with the GeoWebCache default grid sets
    pub fn builtin() -> GridCatalog {
        let mut catalog = GridCatalog::new();
        catalog.add(GridSet::new("EPSG:4326", Grid::wgs84()));
        catalog.add(GridSet::new("EPSG:4326x2", Grid::wgs84_512()));
        catalog.add(GridSet::new(
            "EPSG:900913",
            Grid::web_mercator().with_srid(900913),
        ));
        catalog.add(GridSet::new("GoogleMapsCompatible", Grid::web_mercator()));
        catalog.add(GridSet::new("WebMercatorQuad", Grid::web_mercator()));
        catalog
    }
    /// Add or replace a grid set
    pub fn add(&mut self, gridset: GridSet) {
        if self.gridsets.contains_key(&gridset.name) {
            info!("Replacing grid set '{}'", gridset.name);
        }
        self.gridsets.insert(gridset.name.clone(), gridset);
    }
    pub fn lookup(&self, name: &str) -> Option<&GridSet> {
        self.gridsets.get(name)
    }
    pub fn names(&self) -> Vec<&str> {
        self.gridsets.keys().map(|k| k.as_str()).collect()
    }
    pub fn len(&self) -> usize {
        self.gridsets.len()
    }
}

impl<'a> Config<'a, ApplicationCfg> for GridCatalog {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let mut catalog = GridCatalog::builtin();
        for gridset_cfg in &config.gridsets {
            let grid = Grid::from_config(gridset_cfg)?;
            catalog.add(GridSet::new(&gridset_cfg.name, grid));
        }
        Ok(catalog)
    }
}
