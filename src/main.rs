//! Huewave - print oscillator sample sequences and color bands

use anyhow::Result;
use clap::Parser;
use huewave::config::{self, SceneConfig};
use huewave::engine::{ColorSample, Engine, Sample};
use huewave::synth::presets;
use tracing::info;

mod cli;

use cli::{Cli, Commands, Format, SceneArgs};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Samples { scene } => {
            let format = scene.format;
            let engine = build_engine(scene, |cfg, count| cfg.samples.count = count)?;
            print_samples(&engine.samples(), format)?;
        }

        Commands::Colors { scene } => {
            let format = scene.format;
            let engine = build_engine(scene, |cfg, count| cfg.colors.count = count)?;
            print_colors(&engine.colors()?, format)?;
        }

        Commands::Check { config: config_path } => {
            println!("Checking {:?}...", config_path);
            let cfg = config::load_config(&config_path)?;
            println!("Configuration is valid!");
            println!("  Wave: {:?}", cfg.wave);
            println!(
                "  Controls: frequency {}, phase offset {}, magnitude {}",
                cfg.controls.frequency, cfg.controls.phase_offset, cfg.controls.magnitude
            );
            println!("  Samples: {} over {:.4} rad", cfg.samples.count, cfg.samples.phase_span);
            println!(
                "  Colors: {} at {} per turn{}",
                cfg.colors.count,
                cfg.colors.total_samples,
                if cfg.colors.clamp { " (clamped)" } else { "" }
            );

            let oscillator = cfg.oscillator();
            if oscillator.peak() > 1.0 && !cfg.colors.clamp {
                println!("  Warning: output may exceed [-1, 1], colors can leave gamut");
            }
            if !oscillator.is_deterministic() {
                println!("  Note: contains noise, output changes on every run");
            }
        }

        Commands::Init => {
            print!("{}", SceneConfig::example_yaml()?);
        }

        Commands::Presets => {
            for name in presets::PRESET_NAMES {
                println!("{}", name);
            }
        }
    }

    Ok(())
}

/// Resolve the scene from a file and/or preset, then apply overrides
fn build_engine(args: SceneArgs, set_count: impl FnOnce(&mut SceneConfig, usize)) -> Result<Engine> {
    let mut cfg = match &args.config {
        Some(path) => {
            info!("Loading scene from {:?}", path);
            config::load_config(path)?
        }
        None => SceneConfig::default(),
    };
    if let Some(name) = &args.preset {
        cfg.wave = presets::by_name(name)?;
    }
    if let Some(count) = args.count {
        set_count(&mut cfg, count);
    }
    Engine::new(cfg)
}

fn print_samples(samples: &[Sample], format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for s in samples {
                println!("{:>6}  {:>10.6}  {:>10.6}", s.index, s.phase, s.value);
            }
        }
        Format::Csv => {
            println!("index,phase,value");
            for s in samples {
                println!("{},{},{}", s.index, s.phase, s.value);
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(samples)?),
    }
    Ok(())
}

fn print_colors(colors: &[ColorSample], format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for c in colors {
                let color = &c.color;
                println!(
                    "{:>6}  {}  r {:.4}  g {:.4}  b {:.4}",
                    c.index,
                    color.to_hex(),
                    color.red,
                    color.green,
                    color.blue
                );
            }
        }
        Format::Csv => {
            println!("index,red,green,blue,hex");
            for c in colors {
                let color = &c.color;
                println!(
                    "{},{},{},{},{}",
                    c.index,
                    color.red,
                    color.green,
                    color.blue,
                    color.to_hex()
                );
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(colors)?),
    }
    Ok(())
}
