//! textwalk - inspect how a text is walked character by character.
//!
//! # Usage
//!
//! ```bash
//! textwalk notes.txt
//! textwalk --summary notes.txt
//! textwalk --debug-log steps.log notes.txt
//! ```

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use textwalk::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use textwalk::perf;
use textwalk::report::{self, Step};

/// Show the logical characters and line flags a parser would see in a file
#[derive(Parser, Debug)]
#[command(name = "textwalk", version, about, long_about = None)]
struct Cli {
    /// Text file to walk
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print line statistics instead of the step table
    #[arg(long)]
    summary: bool,

    /// Omit the column header of the step table
    #[arg(long)]
    no_header: bool,

    /// Print timings to stderr
    #[arg(long)]
    perf: bool,

    /// Write one event per walker step to a file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn effective_flags(cli: &Cli, raw_args: &[String]) -> Result<ConfigFlags> {
    let global_path = global_config_path();
    let cli_flags = parse_flag_tokens(raw_args)?;

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_override_path())?;
        global_flags.union(&local_flags)
    };
    Ok(file_flags.union(&cli_flags))
}

fn write_steps(out: &mut impl Write, steps: &[Step], header: bool) -> io::Result<()> {
    if header {
        writeln!(out, "{}", Step::header())?;
    }
    for step in steps {
        writeln!(out, "{step}")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let effective = effective_flags(&cli, &raw_args)?;

    perf::set_timings_enabled(effective.perf);
    let debug_log_path = effective
        .debug_log
        .clone()
        .or_else(|| std::env::var_os("TEXTWALK_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_debug_log_path(debug_log_path.as_deref()) {
        let shown = debug_log_path
            .as_ref()
            .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string());
        tracing::warn!(path = %shown, %err, "failed to open step log");
    }

    if !cli.file.exists() {
        anyhow::bail!("File not found: {}", cli.file.display());
    }
    let text = {
        let _read_scope = perf::scope("textwalk.read_file");
        std::fs::read_to_string(&cli.file)
            .with_context(|| format!("Failed to read {}", cli.file.display()))?
    };

    let mut out = BufWriter::new(io::stdout().lock());
    if effective.summary {
        let summary = {
            let _walk_scope = perf::scope("textwalk.summarize");
            report::summarize(&text)
        };
        writeln!(out, "{summary}")?;
    } else {
        let steps = {
            let _walk_scope = perf::scope("textwalk.trace_steps");
            report::trace_steps(&text)
        };
        write_steps(&mut out, &steps, !effective.no_header)?;
    }
    out.flush().context("Failed to write output")
}
