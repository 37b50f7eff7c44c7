//! Compiles kernel bitfield descriptions into word-packed Rust accessor types.
//!
//! A description declares `block`s, each a list of fields written most-significant-first, and
//! `tagged_union`s that enumerate discriminant values. The pipeline is:
//!
//! 1. [`preprocess`] expands `#define` constants, conditionals and includes.
//! 2. [`ast`] parses the text into a closed parse tree.
//! 3. [`pack`] places every field of a block at an exact word, shift and mask.
//! 4. [`decl`] names the unions and applies the capability policy, producing an [`ir::Module`].
//! 5. [`gen`] renders the module as Rust source.
//!
//! Output is produced only when every step succeeds for the whole input.

#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

use std::path::Path;

pub mod ast;
pub mod decl;
pub mod error;
pub mod gen;
pub mod ir;
pub mod naming;
pub mod pack;
pub mod preprocess;

pub use crate::error::{Error, Result};

use crate::preprocess::Preprocessor;

/// The result of compiling one description.
#[derive(Clone, Debug)]
pub struct Generated {
    /// The resolved intermediate representation.
    pub module: ir::Module,
    /// Rendered Rust source.
    pub text: String,
}

/// Parses and resolves already-preprocessed description text.
pub fn resolve_source(source: &str) -> Result<ir::Module> {
    let file = ast::parse(source)?;
    decl::resolve(&file, &decl::Policy::default())
}

/// Runs the whole pipeline over in-memory source text.
pub fn compile_str(
    source: &str,
    preprocessor: &mut Preprocessor,
    cfg: &gen::Config,
) -> Result<Generated> {
    let expanded = preprocessor.run(source, None)?;
    finish(&expanded, cfg)
}

/// Runs the whole pipeline over a description file.
///
/// Nothing is written anywhere; the caller decides what to do with the rendered text.
pub fn compile_file(
    path: &Path,
    preprocessor: &mut Preprocessor,
    cfg: &gen::Config,
) -> Result<Generated> {
    let expanded = preprocessor.run_file(path)?;
    finish(&expanded, cfg)
}

fn finish(expanded: &str, cfg: &gen::Config) -> Result<Generated> {
    let module = resolve_source(expanded)?;
    let text = gen::render(&module, cfg)?;
    Ok(Generated { module, text })
}
