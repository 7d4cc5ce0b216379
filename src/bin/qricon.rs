use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use macqr_icons::{IconConfig, IconKind, generate_all, scan_png};
use simple_logger::SimpleLogger;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "qricon", version, about = "macQR icon generator and checker")]
struct Cli {
    /// Log geometry and decoding details
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write one or all icons
    Generate {
        #[arg(value_enum)]
        kind: Target,
        /// Directory for the PNG files (default: $MACQR_OUTPUT_DIR or .)
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Text encoded into the symbols (default: $MACQR_PAYLOAD or macQR)
        #[arg(long)]
        payload: Option<String>,
    },
    /// Decode the QR symbol in an image
    Verify {
        #[arg(long)]
        image: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    Colorful,
    Modern,
    Plain,
    All,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug { LevelFilter::Debug } else { LevelFilter::Info };
    SimpleLogger::new().with_level(level).env().init()?;

    match cli.command {
        Command::Generate {
            kind,
            output_dir,
            payload,
        } => {
            let mut config = IconConfig::from_env();
            if let Some(dir) = output_dir {
                config = config.with_output_dir(dir);
            }
            if let Some(payload) = payload {
                config = config.with_payload(payload);
            }
            generate_cmd(kind, &config)
        }
        Command::Verify { image } => verify_cmd(&image),
    }
}

fn generate_cmd(target: Target, config: &IconConfig) -> anyhow::Result<()> {
    let kinds: &[IconKind] = match target {
        Target::Colorful => &[IconKind::Colorful],
        Target::Modern => &[IconKind::Modern],
        Target::Plain => &[IconKind::Plain],
        Target::All => &IconKind::ALL,
    };

    let written = if kinds.len() > 1 {
        generate_all(config).context("icon generation failed")?
    } else {
        let mut written = Vec::new();
        for kind in kinds {
            written.extend(
                kind.generate(config)
                    .with_context(|| format!("{kind} icon generation failed"))?,
            );
        }
        written
    };

    for kind in kinds {
        println!("{}", kind.confirmation());
    }
    for path in written {
        println!("  {}", path.display());
    }
    Ok(())
}

fn verify_cmd(image: &Path) -> anyhow::Result<()> {
    let decoded = scan_png(image).with_context(|| format!("cannot decode {}", image.display()))?;
    println!("Image: {}", image.display());
    println!(
        "  content={}, version={}, error_correction={}, mask={}",
        decoded.content,
        decoded.version,
        decoded.ec_level,
        decoded.mask_pattern.bits()
    );
    Ok(())
}
