//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::GridSet;
use crate::layout::{path_segments, zxy_from_segments, Layout, TileIndex};
use percent_encoding::percent_decode;
use std::path::Path;

/// Layout of tiles downloaded from an object storage (S3, Azure) blob store.
///
/// The grid set directory name may be URL encoded (`EPSG%3A4326`, `My+Grid`), format and
/// parameter directories can be kept between the grid set and `<z>/<x>/<y>.<ext>`.
/// Rows are counted from the top.
#[derive(Clone, Debug, PartialEq)]
pub struct BlobLayout;

/// Minimum directory levels below the grid set directory
const MIN_DEPTH: usize = 3;

impl Layout for BlobLayout {
    fn max_depth(&self) -> usize {
        5
    }
    fn gridset_candidates(&self, dirname: &str) -> Vec<String> {
        let mut candidates = vec![dirname.to_string()];
        // `+` is a space in form encoded names
        let form_encoded = dirname.replace('+', " ");
        for encoded in &[dirname, form_encoded.as_str()] {
            if let Ok(decoded) = percent_decode(encoded.as_bytes()).decode_utf8() {
                if !candidates.iter().any(|name| *name == decoded) {
                    candidates.push(decoded.into_owned());
                }
            }
        }
        candidates
    }
    fn tile_index(&self, path: &Path, gridset: &GridSet) -> Option<TileIndex> {
        let segments = path_segments(path);
        let depth = segments.len().checked_sub(1)?;
        if depth < MIN_DEPTH || depth > self.max_depth() {
            return None;
        }
        let (zoom, x, y) = zxy_from_segments(&segments)?;
        let y = gridset.grid.ytile_from_xyz(y, zoom)?;
        Some(TileIndex::new(x, y, zoom))
    }
}
