//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::{GridCatalog, GridSet};
use crate::layout::TileIndex;
use crate::worldfile::WorldFile;
use tile_grid::{Extent, Grid, Origin, Unit};

#[test]
fn test_world_file_content() {
    let catalog = GridCatalog::builtin();
    let gridset = catalog.lookup("EPSG:4326").unwrap();
    let world = WorldFile::from_tile(gridset, &TileIndex::new(0, 0, 0)).unwrap();
    assert_eq!(
        world.coefficients(),
        [0.703125, 0.0, 0.0, -0.703125, -180.0, 90.0]
    );
    assert_eq!(
        world.to_string(),
        "0.703125\n0\n0\n-0.703125\n-180.0\n90.0\n"
    );
}

#[test]
fn test_world_file_content_512() {
    let catalog = GridCatalog::builtin();
    let gridset = catalog.lookup("EPSG:4326x2").unwrap();
    let world = WorldFile::from_tile(gridset, &TileIndex::new(0, 0, 0)).unwrap();
    assert_eq!(
        world.to_string(),
        "0.3515625\n0\n0\n-0.3515625\n-180.0\n90.0\n"
    );
}

#[test]
fn test_world_file_deterministic() {
    let catalog = GridCatalog::builtin();
    let gridset = catalog.lookup("EPSG:900913").unwrap();
    let tile = TileIndex::new(486, 691, 10);
    let first = WorldFile::from_tile(gridset, &tile).unwrap().to_string();
    let second = WorldFile::from_tile(gridset, &tile).unwrap().to_string();
    assert_eq!(first, second);
    assert_eq!(first.lines().count(), 6);
    assert!(first.ends_with('\n'));
    assert!(!first.contains(','));
}

#[test]
fn test_world_file_mercator() {
    let catalog = GridCatalog::builtin();
    let gridset = catalog.lookup("EPSG:900913").unwrap();
    let world = WorldFile::from_tile(gridset, &TileIndex::new(0, 0, 0)).unwrap();
    assert!((world.pixel_size_x - 156543.033928041).abs() < 1e-8);
    assert_eq!(world.pixel_size_y, -world.pixel_size_x);
    assert_eq!(world.upper_left_x, -20037508.342789248);
    assert_eq!(world.upper_left_y, 20037508.342789248);
}

#[test]
fn test_top_left_grid() {
    let grid = Grid::new(
        256,
        256,
        Extent {
            minx: 2420000.0,
            miny: 1030000.0,
            maxx: 2900000.0,
            maxy: 1350000.0,
        },
        2056,
        Unit::Meters,
        vec![4000.0, 3750.0, 3500.0, 3250.0, 3000.0, 2750.0, 2500.0, 2250.0, 2000.0, 1750.0],
        Origin::TopLeft,
    );
    let gridset = GridSet::new("swiss", grid);
    // single tile at level 0, top left corner at the grid origin
    let world = WorldFile::from_tile(&gridset, &TileIndex::new(0, 0, 0)).unwrap();
    assert_eq!(
        world.to_string(),
        "4000.0\n0\n0\n-4000.0\n2420000.0\n1350000.0\n"
    );
}

#[test]
fn test_out_of_range() {
    let catalog = GridCatalog::builtin();
    let gridset = catalog.lookup("EPSG:4326").unwrap();
    assert_eq!(WorldFile::from_tile(gridset, &TileIndex::new(2, 0, 0)), None);
    assert_eq!(WorldFile::from_tile(gridset, &TileIndex::new(0, 1, 0)), None);
    assert_eq!(WorldFile::from_tile(gridset, &TileIndex::new(0, 0, 25)), None);
}
