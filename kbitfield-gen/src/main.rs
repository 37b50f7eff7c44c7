use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use kbitfield::gen::Config;
use kbitfield::ir::Item;
use kbitfield::preprocess::Preprocessor;

/// Generates Rust accessor types from a kernel bitfield description.
#[derive(Parser)]
#[command(name = "kbitfield-gen", version)]
struct Args {
    /// Bitfield description to read.
    src: Option<PathBuf>,

    /// Rust file to write. Only written when the whole description compiles.
    dst: Option<PathBuf>,

    /// Predefines a preprocessor constant. A bare NAME is defined as 1.
    #[arg(short = 'D', long = "define", value_name = "NAME[=VALUE]")]
    defines: Vec<String>,

    /// Adds a directory to the `#include` search path.
    #[arg(short = 'I', long = "include-dir", value_name = "DIR")]
    include_dirs: Vec<PathBuf>,

    /// Module providing `CapTrait` and `RawCap`, e.g. `crate::object::cap`.
    #[arg(long, value_name = "PATH")]
    cap_module: Option<String>,

    /// Prints each generated type to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (Some(src), Some(dst)) = (&args.src, &args.dst) else {
        Args::command().print_help()?;
        return Ok(());
    };

    let mut preprocessor = Preprocessor::new();
    for define in &args.defines {
        let (name, value) = define.split_once('=').unwrap_or((define.as_str(), "1"));
        preprocessor.define(name, value);
    }
    for dir in &args.include_dirs {
        preprocessor.include_dir(dir);
    }

    let mut cfg = Config {
        source_label: src.file_name().map(|name| name.to_string_lossy().into_owned()),
        ..Config::default()
    };
    if let Some(path) = &args.cap_module {
        cfg.set_cap_module(path)?;
    }

    let generated = kbitfield::compile_file(src, &mut preprocessor, &cfg)
        .with_context(|| format!("failed to compile {}", src.display()))?;

    if args.verbose {
        for item in &generated.module.items {
            match item {
                Item::Block(block) => eprintln!(
                    "block {}: {} words, {} fields{}",
                    block.name,
                    block.words,
                    block.fields.len(),
                    if block.capability.is_some() { " (capability)" } else { "" },
                ),
                Item::Enum(union) => {
                    eprintln!("enum {}: {} tags", union.name, union.tags.len())
                }
            }
        }
    }

    fs::write(dst, &generated.text)
        .with_context(|| format!("failed to write {}", dst.display()))?;

    if args.verbose {
        eprintln!(
            "wrote {} blocks and {} enums to {}",
            generated.module.blocks().count(),
            generated.module.unions().count(),
            dst.display(),
        );
    }
    Ok(())
}
