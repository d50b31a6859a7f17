//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile cache directory layouts

pub mod blob;
pub mod nested;
pub mod xyz;


pub use self::blob::BlobLayout;
pub use self::nested::NestedLayout;
pub use self::xyz::{TmsLayout, XyzLayout};
use crate::core::{GridCatalog, GridSet};
use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

/// Tile index in TMS adressing scheme (row 0 at the bottom of the grid)
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct TileIndex {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileIndex {
    pub fn new(x: u32, y: u32, z: u8) -> TileIndex {
        TileIndex { x, y, z }
    }
}

impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

pub trait Layout {
    /// Directory levels below the grid set directory to search for tiles
    fn max_depth(&self) -> usize;
    /// Grid set names derived from a grid set directory name, in lookup order
    fn gridset_candidates(&self, dirname: &str) -> Vec<String>;
    /// Tile index of a tile file.
    /// `path` is relative to the cache root, starting with the grid set directory.
    fn tile_index(&self, path: &Path, gridset: &GridSet) -> Option<TileIndex>;
    /// First grid set of the catalog matching the directory name
    fn resolve_gridset<'a>(&self, dirname: &str, catalog: &'a GridCatalog) -> Option<&'a GridSet> {
        self.gridset_candidates(dirname)
            .iter()
            .find_map(|name| catalog.lookup(name))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TileLayout {
    Nested(NestedLayout),
    Xyz(XyzLayout),
    Tms(TmsLayout),
    Blob(BlobLayout),
}

impl Default for TileLayout {
    fn default() -> TileLayout {
        TileLayout::Nested(NestedLayout)
    }
}

impl Layout for TileLayout {
    fn max_depth(&self) -> usize {
        match self {
            &TileLayout::Nested(ref layout) => layout.max_depth(),
            &TileLayout::Xyz(ref layout) => layout.max_depth(),
            &TileLayout::Tms(ref layout) => layout.max_depth(),
            &TileLayout::Blob(ref layout) => layout.max_depth(),
        }
    }
    fn gridset_candidates(&self, dirname: &str) -> Vec<String> {
        match self {
            &TileLayout::Nested(ref layout) => layout.gridset_candidates(dirname),
            &TileLayout::Xyz(ref layout) => layout.gridset_candidates(dirname),
            &TileLayout::Tms(ref layout) => layout.gridset_candidates(dirname),
            &TileLayout::Blob(ref layout) => layout.gridset_candidates(dirname),
        }
    }
    fn tile_index(&self, path: &Path, gridset: &GridSet) -> Option<TileIndex> {
        match self {
            &TileLayout::Nested(ref layout) => layout.tile_index(path, gridset),
            &TileLayout::Xyz(ref layout) => layout.tile_index(path, gridset),
            &TileLayout::Tms(ref layout) => layout.tile_index(path, gridset),
            &TileLayout::Blob(ref layout) => layout.tile_index(path, gridset),
        }
    }
}

impl TileLayout {
    pub fn name(&self) -> &'static str {
        match self {
            &TileLayout::Nested(_) => "gwc",
            &TileLayout::Xyz(_) => "xyz",
            &TileLayout::Tms(_) => "tms",
            &TileLayout::Blob(_) => "blob",
        }
    }
}

impl FromStr for TileLayout {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "gwc" | "nested" => Ok(TileLayout::Nested(NestedLayout)),
            "xyz" => Ok(TileLayout::Xyz(XyzLayout)),
            "tms" => Ok(TileLayout::Tms(TmsLayout)),
            "blob" => Ok(TileLayout::Blob(BlobLayout)),
            _ => Err(format!("Unknown layout: {}", name)),
        }
    }
}

/// Normal path components, ignoring root and prefix
pub(crate) fn path_segments(path: &Path) -> Vec<&str> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(name) => name.to_str(),
            _ => None,
        })
        .collect()
}

/// File name without extension
pub(crate) fn base_name(filename: &str) -> Option<&str> {
    Path::new(filename).file_stem().and_then(|s| s.to_str())
}

pub(crate) fn is_unsigned(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a plain decimal number, rejecting signs and whitespace
pub(crate) fn parse_unsigned<T: FromStr>(token: &str) -> Option<T> {
    if is_unsigned(token) {
        token.parse().ok()
    } else {
        None
    }
}

/// `(zoom, column, row)` from trailing `zoom/column/row.ext` segments
pub(crate) fn zxy_from_segments(segments: &[&str]) -> Option<(u8, u32, u32)> {
    if segments.len() < 3 {
        return None;
    }
    let tail = &segments[segments.len() - 3..];
    let zoom = parse_unsigned(tail[0])?;
    let x = parse_unsigned(tail[1])?;
    let y = parse_unsigned(base_name(tail[2])?)?;
    Some((zoom, x, y))
}
