//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::GridSetCfg;
use crate::core::Config;
use tile_grid::{Extent, Grid, Origin, Unit};

#[derive(Deserialize, Clone, Debug)]
pub struct ExtentCfg {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl From<&ExtentCfg> for Extent {
    fn from(cfg: &ExtentCfg) -> Extent {
        Extent {
            minx: cfg.minx,
            miny: cfg.miny,
            maxx: cfg.maxx,
            maxy: cfg.maxy,
        }
    }
}

impl<'a> Config<'a, GridSetCfg> for Grid {
    fn from_config(grid_cfg: &GridSetCfg) -> Result<Self, String> {
        if let Some(ref gridname) = grid_cfg.predefined {
            match gridname.as_str() {
                "wgs84" => Ok(Grid::wgs84()),
                "wgs84_512" => Ok(Grid::wgs84_512()),
                "web_mercator" => Ok(Grid::web_mercator()),
                _ => Err(format!("Unkown grid '{}'", gridname)),
            }
        } else if let Some(ref usergrid) = grid_cfg.user {
            let units = match &usergrid.units.to_lowercase() as &str {
                "m" => Ok(Unit::Meters),
                "dd" => Ok(Unit::Degrees),
                "ft" => Ok(Unit::Feet),
                _ => Err(format!("Unexpected enum value '{}'", usergrid.units)),
            };
            let origin = match &usergrid.origin as &str {
                "TopLeft" => Ok(Origin::TopLeft),
                "BottomLeft" => Ok(Origin::BottomLeft),
                _ => Err(format!("Unexpected enum value '{}'", usergrid.origin)),
            };
            if usergrid.resolutions.is_empty() {
                return Err(format!("Grid set '{}' has no resolutions", grid_cfg.name));
            }
            if usergrid.resolutions.len() > u8::MAX as usize {
                return Err(format!(
                    "Grid set '{}' has more than {} resolutions",
                    grid_cfg.name,
                    u8::MAX
                ));
            }
            if let Some(res) = usergrid
                .resolutions
                .iter()
                .find(|res| !(res.is_finite() && **res > 0.0))
            {
                return Err(format!(
                    "Grid set '{}' has an invalid resolution {}",
                    grid_cfg.name, res
                ));
            }
            if usergrid.width == 0 || usergrid.height == 0 {
                return Err(format!("Grid set '{}' has an empty tile size", grid_cfg.name));
            }
            let extent = &usergrid.extent;
            if !(extent.maxx > extent.minx && extent.maxy > extent.miny) {
                return Err(format!("Grid set '{}' has an empty extent", grid_cfg.name));
            }
            let grid = Grid::new(
                usergrid.width,
                usergrid.height,
                Extent::from(&usergrid.extent),
                usergrid.srid,
                units?,
                usergrid.resolutions.clone(),
                origin?,
            );
            Ok(grid)
        } else {
            Err(format!("Invalid grid definition for '{}'", grid_cfg.name))
        }
    }
}
