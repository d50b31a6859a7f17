//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::ApplicationCfg;
use crate::core::Config;
use std::collections::HashMap;
use std::fs;

const WKT_4326: &str = r#"GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563,AUTHORITY["EPSG","7030"]],AUTHORITY["EPSG","6326"]],PRIMEM["Greenwich",0,AUTHORITY["EPSG","8901"]],UNIT["degree",0.0174532925199433,AUTHORITY["EPSG","9122"]],AXIS["Latitude",NORTH],AXIS["Longitude",EAST],AUTHORITY["EPSG","4326"]]"#;

const WKT_3857: &str = r#"PROJCS["WGS 84 / Pseudo-Mercator",GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563,AUTHORITY["EPSG","7030"]],AUTHORITY["EPSG","6326"]],PRIMEM["Greenwich",0,AUTHORITY["EPSG","8901"]],UNIT["degree",0.0174532925199433,AUTHORITY["EPSG","9122"]],AUTHORITY["EPSG","4326"]],PROJECTION["Mercator_1SP"],PARAMETER["central_meridian",0],PARAMETER["scale_factor",1],PARAMETER["false_easting",0],PARAMETER["false_northing",0],UNIT["metre",1,AUTHORITY["EPSG","9001"]],AXIS["Easting",EAST],AXIS["Northing",NORTH],EXTENSION["PROJ4","+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m +nadgrids=@null +wktext +no_defs"],AUTHORITY["EPSG","3857"]]"#;

const WKT_900913: &str = r#"PROJCS["Google Maps Global Mercator",GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563,AUTHORITY["EPSG","7030"]],AUTHORITY["EPSG","6326"]],PRIMEM["Greenwich",0,AUTHORITY["EPSG","8901"]],UNIT["degree",0.0174532925199433,AUTHORITY["EPSG","9122"]],AUTHORITY["EPSG","4326"]],PROJECTION["Mercator_1SP"],PARAMETER["central_meridian",0],PARAMETER["scale_factor",1],PARAMETER["false_easting",0],PARAMETER["false_northing",0],UNIT["metre",1,AUTHORITY["EPSG","9001"]],EXTENSION["PROJ4","+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m +nadgrids=@null +wktext +no_defs"],AUTHORITY["EPSG","900913"]]"#;

/// Built-in WKT of the SRS used by the default grid sets
pub fn builtin_wkt(srid: i32) -> Option<&'static str> {
    match srid {
        4326 => Some(WKT_4326),
        3857 => Some(WKT_3857),
        900913 => Some(WKT_900913),
        _ => None,
    }
}

/// Lookup of coordinate reference system definitions
pub trait CrsResolver {
    /// WKT for an EPSG code
    fn resolve_wkt(&self, srid: i32) -> Result<String, String>;
}

/// WKT definitions from the configuration
#[derive(Clone, Debug, Default)]
pub struct CrsRegistry {
    wkts: HashMap<i32, String>,
}

impl CrsRegistry {
    pub fn new() -> CrsRegistry {
        CrsRegistry::default()
    }
    pub fn add(&mut self, srid: i32, wkt: &str) {
        self.wkts.insert(srid, wkt.trim().to_string());
    }
}

impl CrsResolver for CrsRegistry {
    fn resolve_wkt(&self, srid: i32) -> Result<String, String> {
        self.wkts
            .get(&srid)
            .cloned()
            .ok_or_else(|| format!("Unknown EPSG code {}", srid))
    }
}

impl<'a> Config<'a, ApplicationCfg> for CrsRegistry {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let mut registry = CrsRegistry::new();
        for crs in &config.crs {
            match (&crs.wkt, &crs.wkt_file) {
                (Some(wkt), _) => registry.add(crs.srid, wkt),
                (None, Some(path)) => {
                    let wkt = fs::read_to_string(path)
                        .map_err(|e| format!("Error reading WKT file '{}': {}", path, e))?;
                    registry.add(crs.srid, &wkt);
                }
                (None, None) => {
                    return Err(format!("Missing wkt or wkt_file for EPSG:{}", crs.srid));
                }
            }
        }
        Ok(registry)
    }
}

/// Projection WKT from the built-in table, falling back to `resolver`
pub fn projection_wkt(srid: i32, resolver: &dyn CrsResolver) -> Result<String, String> {
    match builtin_wkt(srid) {
        Some(wkt) => Ok(wkt.to_string()),
        None => resolver.resolve_wkt(srid),
    }
}
