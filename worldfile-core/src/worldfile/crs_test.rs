//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{read_config, ApplicationCfg};
use crate::core::{parse_config, Config};
use crate::worldfile::crs::{builtin_wkt, projection_wkt};
use crate::worldfile::{CrsRegistry, CrsResolver};
use std::env;
use std::fs;

#[test]
fn test_builtin_wkt() {
    assert!(builtin_wkt(4326).unwrap().starts_with("GEOGCS[\"WGS 84\""));
    assert!(builtin_wkt(3857).unwrap().ends_with("AUTHORITY[\"EPSG\",\"3857\"]]"));
    assert!(builtin_wkt(900913).is_some());
    assert!(builtin_wkt(2056).is_none());
}

#[test]
fn test_resolver_fallback() {
    let mut registry = CrsRegistry::new();
    registry.add(2056, "PROJCS[\"CH1903+ / LV95\"]\n");
    assert_eq!(
        projection_wkt(2056, &registry),
        Ok("PROJCS[\"CH1903+ / LV95\"]".to_string())
    );
    // built-in table first
    registry.add(4326, "GEOGCS[\"custom\"]");
    assert_eq!(
        projection_wkt(4326, &registry),
        Ok(builtin_wkt(4326).unwrap().to_string())
    );
    assert_eq!(
        projection_wkt(21781, &registry),
        Err("Unknown EPSG code 21781".to_string())
    );
}

#[test]
fn test_registry_from_config() {
    let config: ApplicationCfg = read_config("src/test/gridsets.toml").unwrap();
    let registry = CrsRegistry::from_config(&config).unwrap();
    assert!(registry
        .resolve_wkt(2056)
        .unwrap()
        .starts_with("PROJCS[\"CH1903+ / LV95\""));
    assert!(registry.resolve_wkt(4326).is_err());
}

#[test]
fn test_wkt_file() {
    let mut path = env::temp_dir();
    path.push("worldfile_crs_test.prj");
    fs::write(&path, "PROJCS[\"from file\"]\n").unwrap();
    let toml = format!(
        r#"
        [[crs]]
        srid = 31467
        wkt_file = "{}"
        "#,
        path.display()
    );
    let config: ApplicationCfg = parse_config(toml, "").unwrap();
    let registry = CrsRegistry::from_config(&config).unwrap();
    assert_eq!(
        registry.resolve_wkt(31467),
        Ok("PROJCS[\"from file\"]".to_string())
    );

    let toml = r#"
        [[crs]]
        srid = 31467
        wkt_file = "/nonexistent/31467.prj"
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert!(CrsRegistry::from_config(&config)
        .err()
        .unwrap()
        .starts_with("Error reading WKT file '/nonexistent/31467.prj'"));

    let toml = r#"
        [[crs]]
        srid = 31467
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(
        CrsRegistry::from_config(&config).err(),
        Some("Missing wkt or wkt_file for EPSG:31467".to_string())
    );
}
