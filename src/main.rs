//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, ArgMatches, ErrorKind};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use std::env;
use std::io::Write;
use std::path::Path;
use std::process;
use time;
use worldfile_core::core::{read_config, ApplicationCfg, Config, GridCatalog};
use worldfile_core::layout::TileLayout;
use worldfile_service::WorldFileGenerator;

const EXIT_NO_ARGS: i32 = 1;
const EXIT_USAGE: i32 = 2;
const EXIT_CONFIG: i32 = 3;
const EXIT_CACHE_ROOT: i32 = 4;
const EXIT_THREADS: i32 = 5;
const EXIT_GRIDSET_FAILED: i32 = 6;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG").ok();
    let rust_log = match (args.value_of("loglevel"), rust_log_env) {
        (Some(loglevel), _) => loglevel.to_string(),
        (None, _) if args.is_present("quiet") => "warn".to_string(),
        (None, Some(rust_log)) => rust_log,
        (None, None) => "info".to_string(),
    };
    builder.parse_filters(&rust_log);

    builder.init();
}

fn generator_from_args(args: &ArgMatches<'_>) -> Result<WorldFileGenerator, (i32, String)> {
    let mut generator = match args.value_of("config") {
        Some(path) => {
            let config: ApplicationCfg =
                read_config(path).map_err(|e| (EXIT_CONFIG, format!("{}: {}", path, e)))?;
            WorldFileGenerator::from_config(&config).map_err(|e| (EXIT_CONFIG, e))?
        }
        None => WorldFileGenerator::new(GridCatalog::builtin(), TileLayout::default()),
    };
    if let Some(layout) = args.value_of("layout") {
        generator.layout = layout.parse().map_err(|e| (EXIT_USAGE, e))?;
    }
    if let Some(threads) = args.value_of("threads") {
        generator.threads = match threads.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err((
                    EXIT_THREADS,
                    format!("Invalid number of threads '{}'", threads),
                ))
            }
        };
    }
    generator.overwrite = args.is_present("overwrite");
    generator.write_projection = args.is_present("prj");
    Ok(generator)
}

fn generate(args: &ArgMatches<'_>) -> i32 {
    let cache_root = Path::new(args.value_of("CACHE_DIR").unwrap_or_default());
    let generator = match generator_from_args(args) {
        Ok(generator) => generator,
        Err((code, msg)) => {
            error!("{}", msg);
            return code;
        }
    };
    if !cache_root.is_dir() {
        error!("Cache directory {} not found", cache_root.display());
        return EXIT_CACHE_ROOT;
    }
    match generator.generate(cache_root) {
        Ok(summary) => {
            println!(
                "{} world files written in {:.1} sec",
                summary.written,
                summary.elapsed.as_secs_f64()
            );
            if summary.failed_gridsets > 0 {
                error!("{} grid set(s) failed", summary.failed_gridsets);
                EXIT_GRIDSET_FAILED
            } else {
                0
            }
        }
        Err(e) => {
            error!("{}", e);
            EXIT_CACHE_ROOT
        }
    }
}

fn main() {
    dotenv().ok();
    let mut app = App::new("gwc_worldfiles")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("Create world files for the tiles of a GeoWebCache tile cache")
        .args_from_usage("-q, --quiet 'Only log warnings and errors'
                          -j, --threads=[NUM] 'Number of worker threads (Default: number of CPUs)'
                          --prj 'Write projection (.prj) files'
                          --overwrite 'Overwrite existing world files'
                          --layout=[gwc|xyz|tms|blob] 'Cache directory layout (Default: gwc)'
                          -c, --config=[FILE] 'Load grid sets from custom config file'
                          --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                          <CACHE_DIR> 'Tile cache root directory'");

    if env::args().len() < 2 {
        let _ = app.print_help();
        println!("");
        process::exit(EXIT_NO_ARGS);
    }
    let code = match app.get_matches_from_safe_borrow(env::args()) {
        Err(e) => match e.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => {
                println!("{}", e);
                0
            }
            _ => {
                eprintln!("{}", e);
                EXIT_USAGE
            }
        },
        Ok(matches) => {
            init_logger(&matches);
            generate(&matches)
        }
    };
    process::exit(code);
}
