//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod crs;
pub mod tileext;
pub mod world;
pub mod writer;

#[cfg(test)]
mod crs_test;
#[cfg(test)]
mod world_test;

pub use self::crs::{CrsRegistry, CrsResolver};
pub use self::tileext::is_tile_file;
pub use self::world::WorldFile;
pub use self::writer::{WorldFileWriter, WriteResult};
