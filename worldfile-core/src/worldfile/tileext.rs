//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile file detection by file extension

use std::collections::HashSet;
use std::path::Path;

/// (file extension, format name) of the tile formats written by tile caches.
/// Some layouts use the file extension, others the format name.
pub const TILE_FORMATS: &[(&str, &str)] = &[
    // image formats
    ("png", "png"),
    ("png", "png8"),
    ("png", "png24"),
    ("png", "png_24"),
    ("jpeg", "jpeg"),
    ("jpeg", "jpeg-png"),
    ("jpeg", "jpeg-png8"),
    ("gif", "gif"),
    ("tiff", "tiff"),
    ("bmp", "bmp"),
    // application formats
    ("bil16", "bil16"),
    ("bil32", "bil32"),
    ("json", "json"),
    ("geojson", "geojson"),
    ("topojson", "topojson"),
    ("json", "utfgrid"),
    ("pbf", "mapbox-vectortile"),
    // xml formats
    ("xml", "ogc-xml"),
    ("kml", "kml"),
    ("kmz", "kmz"),
    ("gml", "gml"),
    ("gml3", "gml3"),
];

lazy_static! {
    static ref TILE_EXTENSIONS: HashSet<&'static str> = TILE_FORMATS
        .iter()
        .flat_map(|&(ext, name)| vec![ext, name])
        .collect();
}

/// Case sensitive check against known tile extensions and format names
pub fn is_tile_extension(extension: &str) -> bool {
    TILE_EXTENSIONS.contains(extension)
}

/// Regular file with a tile extension
pub fn is_tile_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, is_tile_extension)
}
