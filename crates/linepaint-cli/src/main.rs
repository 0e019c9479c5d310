use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser, Subcommand};
use glob::glob;
use linepaint_core::{
    BitSequence, DEFAULT_HEIGHT, DEFAULT_LINES, DEFAULT_WIDTH, Encoding, LayoutError, RenderError,
    RenderOptions, RenderPlan, Surface, SvgSurface, draw, render,
};
use log::{LevelFilter, debug};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("LINEPAINT_BUILD_COMMIT"),
    ", built ",
    env!("LINEPAINT_BUILD_DATE"),
    ")"
);

const EXAMPLES: &str = "Examples:\n  linepaint render --text hello -o hello.svg\n  linepaint render -t hello -e manchester -l 2 -o hello.svg --png hello.png\n  linepaint draw --file message.bin --encoding biphase-mark --stdout";

#[derive(Parser, Debug)]
#[command(name = "linepaint")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Draw the bits of a string under a line code (NRZ, Manchester, Differential Manchester, Biphase Mark).",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still applies)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render input bytes to an SVG image (optionally a PNG copy too).
    #[command(alias = "draw")]
    #[command(after_help = EXAMPLES)]
    #[command(group(ArgGroup::new("input").required(true).args(["text", "file"])))]
    Render {
        /// Input string; its UTF-8 bytes are drawn
        #[arg(short, long)]
        text: Option<String>,

        /// Read input bytes from a file (a glob matching exactly one file is accepted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output SVG path
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        output: Option<PathBuf>,

        /// Write the SVG document to stdout
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Number of rows
        #[arg(short, long, default_value_t = DEFAULT_LINES)]
        lines: usize,

        /// Canvas width in pixels
        #[arg(long, default_value_t = DEFAULT_WIDTH as u32)]
        width: u32,

        /// Canvas height in pixels
        #[arg(long, default_value_t = DEFAULT_HEIGHT as u32)]
        height: u32,

        /// Line code: naive, manchester, differential-manchester, biphase-mark
        #[arg(short, long, default_value = "naive")]
        encoding: String,

        /// Also export a raster (PNG) image
        #[arg(long)]
        png: Option<PathBuf>,

        /// Leave white segments unpainted
        #[arg(long)]
        transparent: bool,

        /// Write the render plan (JSON) to this path
        #[arg(long)]
        plan: Option<PathBuf>,

        /// Pretty-print the render plan JSON
        #[arg(long, requires = "plan")]
        pretty: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
    /// List the supported line codes.
    Encodings,
}

struct RenderArgs {
    text: Option<String>,
    file: Option<PathBuf>,
    output: Option<PathBuf>,
    stdout: bool,
    options: RenderOptions,
    png: Option<PathBuf>,
    plan: Option<PathBuf>,
    pretty: bool,
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Render {
            text,
            file,
            output,
            stdout,
            lines,
            width,
            height,
            encoding,
            png,
            transparent,
            plan,
            pretty,
            quiet,
        } => cmd_render(RenderArgs {
            options: RenderOptions {
                lines,
                width: f64::from(width),
                height: f64::from(height),
                encoding: resolve_encoding(&encoding),
                transparent_white: transparent,
            },
            text,
            file,
            output,
            stdout,
            png,
            plan,
            pretty,
            quiet,
        }),
        Commands::Encodings => cmd_encodings(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

/// Unknown names exit through clap so the usage line is printed like any
/// other argument error.
fn resolve_encoding(name: &str) -> Encoding {
    Encoding::lookup(name).unwrap_or_else(|err| {
        Cli::command()
            .error(ErrorKind::InvalidValue, err)
            .exit()
    })
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

fn cmd_render(args: RenderArgs) -> Result<(), CliError> {
    let input = load_input(args.text.as_deref(), args.file.as_deref())?;
    if let (Some(output), Some(file)) = (args.output.as_ref(), args.file.as_ref()) {
        ensure_distinct(output, file)?;
    }

    let bits = BitSequence::from_bytes(&input);
    debug!("input: {} bytes, {} bits", input.len(), bits.len());
    let plan = render(&bits, &args.options).map_err(render_error)?;
    let mut surface = SvgSurface::new(args.options.width, args.options.height);
    draw(&plan, &mut surface);

    // Raster first: a refused canvas must not leave a half-written run behind.
    if let Some(png) = args.png.as_ref() {
        create_parent_dir(png)?;
        surface
            .export_raster(png)
            .with_context(|| format!("Failed to export raster: {}", png.display()))?;
        if !args.quiet {
            eprintln!("OK: png written -> {}", png.display());
        }
    }

    if args.stdout {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        surface
            .write_to(&mut lock)
            .context("Failed to write SVG to stdout")?;
    } else {
        let output = args.output.as_ref().ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--output or --stdout".to_string()),
            )
        })?;
        create_parent_dir(output)?;
        surface
            .save(output)
            .with_context(|| format!("Failed to write SVG: {}", output.display()))?;
        if !args.quiet {
            eprintln!("OK: svg written -> {}", output.display());
        }
    }

    if let Some(plan_path) = args.plan.as_ref() {
        let json = serialize_plan(&plan, args.pretty)?;
        create_parent_dir(plan_path)?;
        fs::write(plan_path, json)
            .with_context(|| format!("Failed to write plan: {}", plan_path.display()))?;
        if !args.quiet {
            eprintln!("OK: plan written -> {}", plan_path.display());
        }
    }

    Ok(())
}

fn render_error(err: RenderError) -> CliError {
    let hint = match &err {
        RenderError::InvalidLayout(LayoutError::EmptyInput) => "pass a non-empty --text or --file",
        RenderError::InvalidLayout(LayoutError::ZeroLines) => "use -l/--lines 1 or more",
        RenderError::InvalidLayout(LayoutError::InvalidCanvas { .. }) => {
            "use --width/--height greater than 0"
        }
        RenderError::Surface(_) => "check the output paths",
    };
    CliError::new(err.to_string(), Some(hint.to_string()))
}

fn cmd_encodings() -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    for encoding in Encoding::ALL {
        writeln!(lock, "{}\t{}", encoding.cli_name(), encoding.name())
            .context("Failed to write to stdout")?;
    }
    Ok(())
}

fn serialize_plan(plan: &RenderPlan, pretty: bool) -> Result<String, CliError> {
    if pretty {
        serde_json::to_string_pretty(plan)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(plan)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn load_input(text: Option<&str>, file: Option<&Path>) -> Result<Vec<u8>, CliError> {
    match (text, file) {
        (Some(text), None) => Ok(text.as_bytes().to_vec()),
        (None, Some(file)) => {
            let resolved = resolve_input_path(file)?;
            if !resolved.is_file() {
                return Err(CliError::new(
                    format!("input file not found: {}", resolved.display()),
                    Some("check the --file path".to_string()),
                ));
            }
            let bytes = fs::read(&resolved)
                .with_context(|| format!("Failed to read input file: {}", resolved.display()))?;
            Ok(bytes)
        }
        _ => Err(CliError::new(
            "exactly one input is required",
            Some("use --text or --file".to_string()),
        )),
    }
}

fn ensure_distinct(output: &Path, input: &Path) -> Result<(), CliError> {
    let input_abs = match fs::canonicalize(input) {
        Ok(path) => path,
        // Globs and missing inputs are reported by `load_input`.
        Err(_) => return Ok(()),
    };
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::canonicalize(parent),
        _ => fs::canonicalize("."),
    };
    let Ok(parent) = parent else {
        return Ok(());
    };
    let name = output
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid output path"))?;
    if parent.join(name) == input_abs {
        return Err(CliError::new(
            format!("output path must differ from input: {}", output.display()),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn create_parent_dir(path: &Path) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single input file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
