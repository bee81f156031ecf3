// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! `pythonscript` command line: build, tokenize, ast and lint

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pythonscript::config::Config;
use pythonscript::Dialect;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pythonscript",
    about = "Transpile between PythonScript (.pjs) and JavaScript (.js)",
    version
)]
struct Cli {
    /// Log pipeline stages to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transpile .pjs files to .js and .js files to .pjs
    Build {
        /// Source files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Output file (single input only)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Directory for generated files
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Prepend the runtime prelude to JavaScript output
        #[arg(long)]
        prelude: bool,
        /// JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the token list as JSON
    Tokenize { file: PathBuf },
    /// Print the AST as JSON
    Ast { file: PathBuf },
    /// Check that a file lexes and parses
    Lint { file: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Build {
            inputs,
            output,
            out_dir,
            prelude,
            config,
        } => {
            let mut config = match config {
                Some(path) => Config::from_file(&path)?,
                None => Config::default(),
            };
            config.prelude |= prelude;

            if output.is_some() && inputs.len() > 1 {
                bail!("--output can only be used with a single input");
            }
            build(&inputs, output.as_deref(), out_dir.as_deref(), &config)
        }
        Command::Tokenize { file } => {
            let (source, dialect) = read_source(&file)?;
            let tokens = pythonscript::tokenize(&source, &origin(&file), dialect)?;
            println!("{}", serde_json::to_string_pretty(&tokens)?);
            Ok(())
        }
        Command::Ast { file } => {
            let (source, dialect) = read_source(&file)?;
            let module = pythonscript::parse(&source, &origin(&file), dialect)?;
            println!("{}", serde_json::to_string_pretty(&module)?);
            Ok(())
        }
        Command::Lint { file } => {
            let (source, dialect) = read_source(&file)?;
            match pythonscript::parse(&source, &origin(&file), dialect) {
                Ok(_) => {
                    println!("Lint OK");
                    Ok(())
                }
                Err(err) => bail!("Lint failed: {}", err),
            }
        }
    }
}

fn build(
    inputs: &[PathBuf],
    output: Option<&Path>,
    out_dir: Option<&Path>,
    config: &Config,
) -> Result<()> {
    if let Some(dir) = out_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    }

    let results: Vec<(&PathBuf, Result<PathBuf>)> = inputs
        .par_iter()
        .map(|input| (input, build_one(input, output, out_dir, config)))
        .collect();

    let mut failed = 0;
    for (input, result) in results {
        match result {
            Ok(written) => println!("{} -> {}", input.display(), written.display()),
            Err(err) => {
                eprintln!("error: {:#}", err);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} files failed to build", failed, inputs.len());
    }
    Ok(())
}

fn build_one(
    input: &Path,
    output: Option<&Path>,
    out_dir: Option<&Path>,
    config: &Config,
) -> Result<PathBuf> {
    let (source, dialect) = read_source(input)?;
    debug!(input = %input.display(), %dialect, "building");

    let code = pythonscript::transpile(&source, &origin(input), dialect, config)?;

    let target = match (output, out_dir) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(dir)) => {
            let generated = dialect.output_path(input);
            let name = generated
                .file_name()
                .with_context(|| format!("invalid input path {}", input.display()))?;
            dir.join(name)
        }
        (None, None) => dialect.output_path(input),
    };

    fs::write(&target, code).with_context(|| format!("failed to write {}", target.display()))?;
    info!(output = %target.display(), "wrote");
    Ok(target)
}

fn read_source(path: &Path) -> Result<(String, Dialect)> {
    let dialect = Dialect::from_path(path)?;
    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok((source, dialect))
}

fn origin(path: &Path) -> String {
    path.display().to_string()
}
