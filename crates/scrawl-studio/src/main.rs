mod config;
mod script;

use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use scrawl_engine::logging::{init_logging, LoggingConfig};
use scrawl_engine::text::FontSystem;
use scrawl_interp::Interpreter;

use config::{Source, StudioConfig};

fn main() -> anyhow::Result<ExitCode> {
    let config = StudioConfig::parse();

    init_logging(LoggingConfig { env_filter: config.log.clone(), ..LoggingConfig::default() });

    let mut interp = Interpreter::new();
    let mut failures = 0;
    for source in config.sources() {
        let name = source.name();
        failures += match &source {
            Source::Stdin => script::run_script(&mut interp, &name, io::stdin().lock())?,
            Source::File(path) => {
                let file = File::open(path).with_context(|| format!("cannot open {}", name))?;
                script::run_script(&mut interp, &name, BufReader::new(file))?
            }
        };
    }

    let session = interp.session();
    let list = session.scene.render(&session.shapes, &session.style, &FontSystem::new());
    log::info!(
        "{} definitions, {} objects, {} draw commands",
        session.registry.len(),
        session.scene.len(),
        list.len()
    );

    if !config.quiet {
        for line in interp.dump() {
            println!("{}", line);
        }
    }

    Ok(if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
