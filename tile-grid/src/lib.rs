//! A library for map tile grid calculations
//!
//! ## Predefined grids
//!
//! ```rust
//! use tile_grid::{Extent, Grid};
//!
//! let grid = Grid::wgs84();
//! assert_eq!(
//!     grid.tile_bounds(0, 0, 0),
//!     Some(Extent {
//!         minx: -180.0,
//!         miny: -90.0,
//!         maxx: 0.0,
//!         maxy: 90.0,
//!     })
//! );
//! ```
//!
//! ## Custom grids
//!
//! ```rust
//! use tile_grid::{Extent, Grid, Unit, Origin};
//!
//! let grid = Grid::new(
//!     256,
//!     256,
//!     Extent {
//!         minx: 2420000.0,
//!         miny: 1030000.0,
//!         maxx: 2900000.0,
//!         maxy: 1350000.0,
//!     },
//!     2056,
//!     Unit::Meters,
//!     vec![
//!         4000.0, 3750.0, 3500.0, 3250.0, 3000.0, 2750.0, 2500.0, 2250.0, 2000.0, 1750.0, 1500.0,
//!         1250.0, 1000.0, 750.0, 650.0, 500.0, 250.0, 100.0, 50.0, 20.0, 10.0, 5.0, 2.5, 2.0,
//!         1.5, 1.0, 0.5,
//!     ],
//!     Origin::TopLeft,
//! );
//! // three rows at level 15, TMS row 2 is the top row
//! assert_eq!(
//!     grid.tile_bounds(0, 2, 15),
//!     Some(Extent {
//!         minx: 2420000.0,
//!         miny: 1222000.0,
//!         maxx: 2548000.0,
//!         maxy: 1350000.0,
//!     })
//! );
//! ```

mod grid;

pub use grid::{Extent, Grid, Origin, Unit};
