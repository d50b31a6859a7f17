//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::ApplicationCfg;
use crate::core::gridset::{GridCatalog, GridSet};
use crate::core::{parse_config, Config};
use tile_grid::{Extent, Grid};

#[test]
fn test_builtin_gridsets() {
    let catalog = GridCatalog::builtin();
    assert_eq!(
        catalog.names(),
        vec![
            "EPSG:4326",
            "EPSG:4326x2",
            "EPSG:900913",
            "GoogleMapsCompatible",
            "WebMercatorQuad"
        ]
    );
    assert_eq!(catalog.lookup("EPSG:900913").unwrap().srid(), 900913);
    assert_eq!(catalog.lookup("WebMercatorQuad").unwrap().srid(), 3857);
    assert_eq!(catalog.lookup("EPSG:4326").unwrap().srid(), 4326);
    // no case folding
    assert!(catalog.lookup("epsg:4326").is_none());
    assert!(catalog.lookup("EPSG_4326").is_none());
}

#[test]
fn test_gridset_index() {
    let catalog = GridCatalog::builtin();
    let gridset = catalog.lookup("EPSG:4326").unwrap();
    assert_eq!(gridset.tiles_high(0), Some(1));
    assert_eq!(gridset.tiles_high(3), Some(8));
    assert_eq!(gridset.tiles_high(22), None);
    assert_eq!(
        gridset.bounds_from_index(0, 0, 0),
        Some(Extent {
            minx: -180.0,
            miny: -90.0,
            maxx: 0.0,
            maxy: 90.0,
        })
    );
    assert_eq!(gridset.bounds_from_index(0, 0, 22), None);
}

#[test]
fn test_catalog_from_config() {
    let toml = r#"
        [[gridset]]
        name = "swiss"
        [gridset.user]
        width = 256
        height = 256
        extent = { minx = 2420000.0, miny = 1030000.0, maxx = 2900000.0, maxy = 1350000.0 }
        srid = 2056
        units = "m"
        resolutions = [4000.0, 2000.0, 1000.0]
        origin = "TopLeft"

        [[gridset]]
        name = "EPSG:4326"
        predefined = "wgs84_512"
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    let catalog = GridCatalog::from_config(&config).unwrap();
    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.lookup("swiss").unwrap().srid(), 2056);
    // configured grid set replaces the built-in one
    assert_eq!(catalog.lookup("EPSG:4326").unwrap().grid.tile_width(), 512);

    let toml = r#"
        [[gridset]]
        name = "broken"
        predefined = "unknown"
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(
        GridCatalog::from_config(&config).err(),
        Some("Unkown grid 'unknown'".to_string())
    );
}

#[test]
fn test_add_gridset() {
    let mut catalog = GridCatalog::new();
    assert_eq!(catalog.len(), 0);
    catalog.add(GridSet::new("My_Grid", Grid::wgs84()));
    assert!(catalog.lookup("My_Grid").is_some());
}
