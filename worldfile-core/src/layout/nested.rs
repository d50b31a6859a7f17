//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::GridSet;
use crate::layout::{base_name, is_unsigned, parse_unsigned, path_segments, Layout, TileIndex};
use std::path::Path;

/// Authority prefix of SRS based grid set names
pub const AUTHORITY: &str = "EPSG";

/// GeoWebCache file blob store layout.
///
/// Grid set directories are named `EPSG_<code>_<zoom>[_<paramhash>]` or
/// `<name>_<zoom>[_<paramhash>]`, tiles are stored as
/// `<gridsetdir>/<spreaddir>/<x>_<y>.<ext>` with TMS rows.
#[derive(Clone, Debug, PartialEq)]
pub struct NestedLayout;

impl NestedLayout {
    /// Split a grid set directory name into grid set name and zoom token
    fn split_dirname(dirname: &str) -> Option<(String, Option<&str>)> {
        let parts: Vec<&str> = dirname.split('_').collect();
        if parts.len() > 1 && parts[0] == AUTHORITY {
            return Some((
                format!("{}:{}", AUTHORITY, parts[1]),
                parts.get(2).cloned(),
            ));
        }
        // Zoom level is the last token, or the second last one when followed by a parameter hash
        let n = parts.len();
        let zoom_pos = if n >= 2 && is_unsigned(parts[n - 1]) {
            n - 1
        } else if n >= 3 && is_unsigned(parts[n - 2]) {
            n - 2
        } else {
            return None;
        };
        Some((parts[..zoom_pos].join("_"), Some(parts[zoom_pos])))
    }
    /// Grid set name encoded in a grid set directory name
    pub fn gridset_id(dirname: &str) -> Option<String> {
        NestedLayout::split_dirname(dirname).map(|(name, _)| name)
    }
    /// Zoom level encoded in a grid set directory name
    pub fn zoom_level(dirname: &str) -> Option<u8> {
        NestedLayout::split_dirname(dirname)
            .and_then(|(_, zoom)| zoom)
            .and_then(|zoom| parse_unsigned(zoom))
    }
}

impl Layout for NestedLayout {
    fn max_depth(&self) -> usize {
        2
    }
    fn gridset_candidates(&self, dirname: &str) -> Vec<String> {
        NestedLayout::gridset_id(dirname).into_iter().collect()
    }
    fn tile_index(&self, path: &Path, _gridset: &GridSet) -> Option<TileIndex> {
        let segments = path_segments(path);
        if segments.len() != self.max_depth() + 1 {
            return None;
        }
        let zoom = NestedLayout::zoom_level(segments[0])?;
        let parts: Vec<&str> = base_name(segments[2])?.split('_').collect();
        if parts.len() != 2 {
            return None;
        }
        let x = parse_unsigned(parts[0])?;
        let y = parse_unsigned(parts[1])?;
        Some(TileIndex::new(x, y, zoom))
    }
}
