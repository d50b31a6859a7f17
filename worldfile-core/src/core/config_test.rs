//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{read_config, ApplicationCfg};
use crate::core::parse_config;

#[test]
fn test_load_config() {
    let config = read_config("src/test/gridsets.toml");
    println!("{:#?}", config);
    let config: ApplicationCfg = config.expect("load_config returned Err");
    assert_eq!(config.gridsets.len(), 2);
    assert_eq!(config.gridsets[0].name, "swiss");
    assert_eq!(config.gridsets[0].user.as_ref().unwrap().srid, 2056);
    assert_eq!(config.gridsets[1].predefined, Some("web_mercator".to_string()));
    assert_eq!(config.crs.len(), 1);
    assert_eq!(config.crs[0].srid, 2056);
    assert!(config.crs[0].wkt.as_ref().unwrap().starts_with("PROJCS[\"CH1903+ / LV95\""));
}

#[test]
fn test_empty_config() {
    let config: ApplicationCfg = parse_config("".to_string(), "").unwrap();
    assert!(config.gridsets.is_empty());
    assert!(config.crs.is_empty());
}

#[test]
fn test_parse_error() {
    let config: Result<ApplicationCfg, _> = read_config("src/core/mod.rs");
    assert!(config
        .err()
        .unwrap()
        .starts_with("src/core/mod.rs - unexpected character found: `/` at line 1"));

    let config: Result<ApplicationCfg, _> = read_config("wrongfile");
    assert_eq!("Could not find config file!", config.err().unwrap());
}

#[test]
fn test_env_template() {
    std::env::set_var("WORLDFILE_TEST_GRIDSET", "fromenv");
    let toml = r#"
        [[gridset]]
        name = "{{ env.WORLDFILE_TEST_GRIDSET }}"
        predefined = "wgs84"
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(config.gridsets[0].name, "fromenv");

    let toml = r#"
        [[gridset]]
        name = "${WORLDFILE_TEST_GRIDSET}"
        "#;
    let config: Result<ApplicationCfg, _> = parse_config(toml.to_string(), "");
    assert!(config.is_err());

    let toml = r#"
        [[gridset]]
        name = "${MY_GRID}"
        predefined = "wgs84"
        "#;
    let config: Result<ApplicationCfg, _> = parse_config(toml.to_string(), "");
    assert_eq!(
        config.err(),
        Some("Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string())
    );
}
