//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use walkdir::WalkDir;
use worldfile_core::core::{ApplicationCfg, Config, GridCatalog};
use worldfile_core::layout::{Layout, TileLayout};
use worldfile_core::worldfile::{is_tile_file, CrsRegistry, CrsResolver};
use worldfile_core::worldfile::{WorldFileWriter, WriteResult};

/// Log progress every n world files
const PROGRESS_INTERVAL: u64 = 5000;

#[derive(PartialEq, Clone, Debug)]
pub struct GenerateSummary {
    /// Number of world files written
    pub written: u64,
    /// Number of tiles which couldn't be written
    pub failed_tiles: u64,
    /// Grid set directories aborted because of setup errors
    pub failed_gridsets: usize,
    pub elapsed: Duration,
}

/// Walks a tile cache and writes world files for all tiles
pub struct WorldFileGenerator {
    pub catalog: GridCatalog,
    pub layout: TileLayout,
    pub crs: Box<dyn CrsResolver + Send + Sync>,
    pub overwrite: bool,
    pub write_projection: bool,
    /// Size of the worker pool
    pub threads: usize,
}

/// Counters shared by all worker threads
#[derive(Default)]
struct Progress {
    written: AtomicU64,
    failed: AtomicU64,
}

impl Progress {
    fn tile_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed) + 1
    }
    fn tile_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }
}

fn report_progress(count: u64) {
    if count % PROGRESS_INTERVAL == 0 {
        info!("World files generated: {}", count);
    }
}

impl WorldFileGenerator {
    pub fn new(catalog: GridCatalog, layout: TileLayout) -> WorldFileGenerator {
        WorldFileGenerator {
            catalog,
            layout,
            crs: Box::new(CrsRegistry::new()),
            overwrite: false,
            write_projection: false,
            threads: num_cpus::get(),
        }
    }
    /// Grid set directories of the cache root
    fn gridset_dirs(cache_root: &Path) -> Result<Vec<PathBuf>, String> {
        let entries = fs::read_dir(cache_root)
            .map_err(|e| format!("Error reading {}: {}", cache_root.display(), e))?;
        let mut dirs: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        dirs.sort();
        Ok(dirs)
    }
    /// Write world files for all grid sets in `cache_root`
    pub fn generate(&self, cache_root: &Path) -> Result<GenerateSummary, String> {
        let start = Instant::now();
        if self.threads < 1 {
            return Err("Number of threads must be at least 1".to_string());
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|e| format!("Couldn't initialize thread pool: {}", e))?;
        let dirs = WorldFileGenerator::gridset_dirs(cache_root)?;
        info!(
            "Computing world files with parallelism: {} ({} layout)",
            self.threads,
            self.layout.name()
        );

        let progress = Progress::default();
        let failed_gridsets = pool.install(|| {
            dirs.par_iter()
                .filter(|dir| {
                    if let Err(e) = self.generate_gridset(cache_root, dir, &progress) {
                        error!("{}", e);
                        true
                    } else {
                        false
                    }
                })
                .count()
        });

        let summary = GenerateSummary {
            written: progress.written.load(Ordering::Relaxed),
            failed_tiles: progress.failed.load(Ordering::Relaxed),
            failed_gridsets,
            elapsed: start.elapsed(),
        };
        info!(
            "Created {} world files in {:.3} sec",
            summary.written,
            summary.elapsed.as_secs_f64()
        );
        Ok(summary)
    }
    /// Write world files for the tiles below one grid set directory.
    /// Unknown grid sets are skipped, projection lookup errors abort the grid set.
    fn generate_gridset(
        &self,
        cache_root: &Path,
        gridset_dir: &Path,
        progress: &Progress,
    ) -> Result<(), String> {
        let dirname = gridset_dir
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("");
        let gridset = match self.layout.resolve_gridset(dirname, &self.catalog) {
            Some(gridset) => gridset,
            None => {
                warn!(
                    "Unknown gridset, skipping directory {}",
                    gridset_dir.display()
                );
                return Ok(());
            }
        };
        info!(
            "Creating world files in {} (grid set {})",
            gridset_dir.display(),
            gridset.name
        );
        let writer = WorldFileWriter::new(
            gridset,
            &self.layout,
            cache_root,
            self.overwrite,
            self.write_projection,
            self.crs.as_ref(),
        )?;

        WalkDir::new(gridset_dir)
            .min_depth(1)
            .max_depth(self.layout.max_depth())
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("{}", e);
                    None
                }
            })
            .filter(|entry| is_tile_file(entry.path()))
            .par_bridge()
            .for_each(|entry| match writer.write(entry.path()) {
                WriteResult::Written => report_progress(progress.tile_written()),
                WriteResult::Skipped => {}
                WriteResult::Failed(_) => progress.tile_failed(),
            });
        Ok(())
    }
}

impl<'a> Config<'a, ApplicationCfg> for WorldFileGenerator {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let catalog = GridCatalog::from_config(config)?;
        let crs = CrsRegistry::from_config(config)?;
        let mut generator = WorldFileGenerator::new(catalog, TileLayout::default());
        generator.crs = Box::new(crs);
        Ok(generator)
    }
}
