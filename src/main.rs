use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use hydro_power_toolbox::{
    app::{self, AppError},
    config::{self, Config},
    conversion, hydro,
    i18n::{self, keys, Translator},
    logging,
    quantity::QuantityKind,
    report::{self, PlantReport},
};

#[derive(Parser)]
#[command(name = "hydro_power_toolbox_cli", version)]
#[command(about = "Mini hydropower plant sizing calculator", long_about = None)]
struct Cli {
    /// Language: auto, en-us, ko-kr
    #[arg(short = 'L', long, global = true, default_value = "auto")]
    lang: String,
    /// Config file path (default: ./config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Without a subcommand the interactive menu starts
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute power, penstock diameter and turbine type once
    Calc {
        /// Discharge Q [cusec]
        #[arg(long, allow_negative_numbers = true)]
        discharge: Option<f64>,
        /// Penstock velocity v [ft/s]
        #[arg(long, allow_negative_numbers = true)]
        velocity: Option<f64>,
        /// Net head H [m]
        #[arg(long, allow_negative_numbers = true)]
        head: Option<f64>,
        /// Turbine efficiency [%] (1-100)
        #[arg(long)]
        turbine_eff: Option<u8>,
        /// Generator efficiency [%] (1-100)
        #[arg(long)]
        generator_eff: Option<u8>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write the output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Convert a value between units
    Convert {
        /// flow, velocity, length, volume or power
        #[arg(long)]
        kind: String,
        #[arg(long, allow_negative_numbers = true)]
        value: f64,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Print equations, conversions and turbine selection notes
    Notes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Toml,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut cfg = match load_config(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => {
            let tr = Translator::new(&i18n::resolve_language(&cli.lang, None));
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            return ExitCode::FAILURE;
        }
    };
    let lang = cfg.resolved_language(&cli.lang);
    let mut tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    match try_run(cli.command, &mut cfg, &mut tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config, AppError> {
    let cfg = match path {
        Some(p) => config::load_or_create(p)?,
        None => config::load_or_default()?,
    };
    Ok(cfg)
}

fn try_run(
    command: Option<Commands>,
    cfg: &mut Config,
    tr: &mut Translator,
) -> Result<(), AppError> {
    match command {
        None => app::run(cfg, tr),
        Some(Commands::Calc {
            discharge,
            velocity,
            head,
            turbine_eff,
            generator_eff,
            format,
            output,
        }) => {
            let d = cfg.defaults;
            let inputs = hydro::PlantInputs {
                discharge_cusec: discharge.unwrap_or(d.discharge_cusec),
                velocity_fps: velocity.unwrap_or(d.velocity_fps),
                head_m: head.unwrap_or(d.head_m),
                turbine_efficiency_pct: turbine_eff.unwrap_or(d.turbine_efficiency_pct),
                generator_efficiency_pct: generator_eff.unwrap_or(d.generator_efficiency_pct),
            };
            let result = hydro::evaluate(&inputs, &cfg.fluid)?;
            let rendered = match format {
                OutputFormat::Text => report::render_text(&result, tr),
                OutputFormat::Toml => PlantReport::new(&inputs, &cfg.fluid, &result).to_toml()?,
            };
            match output {
                Some(path) => fs::write(path, rendered)?,
                None => println!("{rendered}"),
            }
            Ok(())
        }
        Some(Commands::Convert {
            kind,
            value,
            from,
            to,
        }) => {
            let kind: QuantityKind = kind.parse()?;
            let result = conversion::convert(kind, value, &from, &to)?;
            println!("{result} {to}");
            Ok(())
        }
        Some(Commands::Notes) => {
            println!("{}", report::render_notes(tr));
            Ok(())
        }
    }
}
