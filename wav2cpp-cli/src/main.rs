use std::{fs, path::PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use env_logger::Env;
use log::info;

use wav2cpp::codegen::render_translation_unit;
use wav2cpp::downmix::{downmix_to_mono, ChannelLayout};
use wav2cpp::ident::sanitize_identifier;
use wav2cpp::ParsedWav;

#[derive(Parser)]
#[command(version)]
/// Converts 16-bit PCM WAV files to C++ byte arrays for embedding
pub struct Args {
    /// Path to the wav file to convert
    wav_path: PathBuf,
    #[arg(short, long)]
    /// Output directory for the generated .cpp file, created if absent.
    /// Prints to stdout when not given
    output: Option<PathBuf>,
    #[arg(short, long)]
    /// Use this array name instead of deriving one from the filename
    name: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::new().default_filter_or("info"));
    let args = Args::parse();
    if !args.wav_path.is_file() {
        bail!("Input file '{}' not found", args.wav_path.display());
    }
    let source_name = args
        .wav_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let parsed = ParsedWav::parse_file(&args.wav_path).context("error reading wav file")?;
    let layout = ChannelLayout::from_count(parsed.info.channel_count)?;
    let mono = downmix_to_mono(&parsed.samples, layout);
    let ident = args
        .name
        .unwrap_or_else(|| sanitize_identifier(&args.wav_path));
    let unit = render_translation_unit(&ident, &source_name, &parsed.info, layout, &mono);

    match &args.output {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("error creating output directory '{}'", dir.display()))?;
            let out_path = dir.join(format!("{ident}.cpp"));
            fs::write(&out_path, unit)
                .with_context(|| format!("error writing '{}'", out_path.display()))?;
            info!(
                "Successfully converted {} to {}",
                args.wav_path.display(),
                out_path.display()
            );
        }
        None => println!("{unit}"),
    }
    Ok(())
}
