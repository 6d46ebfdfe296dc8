use anyhow::Result;
use clap::Parser;

mod cli;
mod draw;
mod ext;
mod history;
mod manifest;
mod model;
mod numbers;
mod ordering;
mod patterns;
mod util;

use crate::cli::{Cli, normalize};

fn main() -> Result<()> {
  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  // Phase 1: normalize CLI
  let cfg = normalize(cli)?;

  // Phase 2: resolve the effective "today" for the manifest's future-date filter
  let now_opt = util::parse_now_override(cfg.now_override.as_deref());

  // Phase 3: run the selected pipelines over the note directory
  if cfg.run_history {
    history::generate(&cfg)?;
  }
  if cfg.run_manifest {
    manifest::generate(&cfg, now_opt)?;
  }

  Ok(())
}
