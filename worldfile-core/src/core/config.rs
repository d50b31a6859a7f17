//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::gridcfg::ExtentCfg;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ApplicationCfg {
    /// Grid sets in addition to the built-in ones
    #[serde(rename = "gridset", default)]
    pub gridsets: Vec<GridSetCfg>,
    /// WKT definitions used for projection files
    #[serde(default)]
    pub crs: Vec<CrsCfg>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct GridSetCfg {
    /// Grid set name as used in the cache directory names
    pub name: String,
    pub predefined: Option<String>,
    pub user: Option<UserGridCfg>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct UserGridCfg {
    /// The width and height of an individual tile, in pixels.
    pub width: u16,
    pub height: u16,
    /// The geographical extent covered by the grid, in ground units (e.g. meters, degrees, feet, etc.).
    /// Must be specified as 4 floating point numbers ordered as minx, miny, maxx, maxy.
    pub extent: ExtentCfg,
    /// Spatial reference system (EPSG code).
    pub srid: i32,
    /// Grid units (m: meters, dd: decimal degrees, ft: feet)
    pub units: String,
    /// List of resolutions for each of the zoom levels defined by the grid, ordered from largest
    /// to smallest. Resolutions are expressed in “units-per-pixel”.
    #[serde(default)]
    pub resolutions: Vec<f64>,
    /// Grid origin
    #[serde(default = "default_origin")]
    pub origin: String,
}

pub fn default_origin() -> String {
    "BottomLeft".to_string()
}

#[derive(Deserialize, Clone, Debug)]
pub struct CrsCfg {
    pub srid: i32,
    /// Inline WKT
    pub wkt: Option<String>,
    /// File containing the WKT, e.g. an existing .prj file
    pub wkt_file: Option<String>,
}

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

lazy_static! {
    static ref OLD_ENV_SYNTAX: Regex = Regex::new(r"\$\{([[:alnum:]_]+)\}").unwrap();
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    // Check for old ${var} expressions
    if OLD_ENV_SYNTAX.is_match(&config_toml) {
        return Err(
            "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        );
    }

    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let env: HashMap<String, String> = env::vars().collect();
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| match e.source() {
        Some(cause) => format!("Template error: {}", cause),
        None => format!("Template error: {}", e),
    })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
