//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::GridSet;
use crate::layout::{path_segments, zxy_from_segments, Layout, TileIndex};
use std::path::Path;

/// `<gridset>/<z>/<x>/<y>.<ext>` layout with rows counted from the top
#[derive(Clone, Debug, PartialEq)]
pub struct XyzLayout;

/// `<gridset>/<z>/<x>/<y>.<ext>` layout with rows counted from the bottom
#[derive(Clone, Debug, PartialEq)]
pub struct TmsLayout;

/// Grid set names for a directory named after the grid set.
/// Underscores may replace a colon, a trailing `_<paramhash>` is optional.
pub(crate) fn gridset_name_candidates(dirname: &str) -> Vec<String> {
    let mut candidates = vec![dirname.to_string(), dirname.replace("_", ":")];
    if let Some(pos) = dirname.rfind('_') {
        let name = &dirname[..pos];
        candidates.push(name.to_string());
        candidates.push(name.replace("_", ":"));
    }
    candidates.dedup();
    candidates
}

fn zxy_index(path: &Path, depth: usize) -> Option<(u8, u32, u32)> {
    let segments = path_segments(path);
    if segments.len() != depth + 1 {
        return None;
    }
    zxy_from_segments(&segments)
}

impl Layout for XyzLayout {
    fn max_depth(&self) -> usize {
        3
    }
    fn gridset_candidates(&self, dirname: &str) -> Vec<String> {
        gridset_name_candidates(dirname)
    }
    fn tile_index(&self, path: &Path, gridset: &GridSet) -> Option<TileIndex> {
        let (zoom, x, y) = zxy_index(path, self.max_depth())?;
        let y = gridset.grid.ytile_from_xyz(y, zoom)?;
        Some(TileIndex::new(x, y, zoom))
    }
}

impl Layout for TmsLayout {
    fn max_depth(&self) -> usize {
        3
    }
    fn gridset_candidates(&self, dirname: &str) -> Vec<String> {
        gridset_name_candidates(dirname)
    }
    fn tile_index(&self, path: &Path, _gridset: &GridSet) -> Option<TileIndex> {
        let (zoom, x, y) = zxy_index(path, self.max_depth())?;
        Some(TileIndex::new(x, y, zoom))
    }
}
