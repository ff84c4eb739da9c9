use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use whitted_core::load_scene_json;
use whitted_renderer::{render_to_sink, FileSink, RenderConfig};

const USAGE: &str = "usage: whitted <scene.json> [output-dir] [--serial]";

/// Command line options.
struct Args {
    scene: PathBuf,
    output_dir: PathBuf,
    serial: bool,
}

impl Args {
    fn parse(args: impl Iterator<Item = String>) -> Result<Self> {
        let mut positional = Vec::new();
        let mut serial = false;

        for arg in args {
            match arg.as_str() {
                "--serial" => serial = true,
                "-h" | "--help" => bail!(USAGE),
                _ if arg.starts_with("--") => bail!("unknown option {}\n{}", arg, USAGE),
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let Some(scene) = positional.next() else {
            bail!(USAGE);
        };
        let output_dir = positional.next().unwrap_or_else(|| ".".to_string());
        if positional.next().is_some() {
            bail!("too many arguments\n{}", USAGE);
        }

        Ok(Self {
            scene: PathBuf::from(scene),
            output_dir: PathBuf::from(output_dir),
            serial,
        })
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse(std::env::args().skip(1))?;

    let scene = load_scene_json(&args.scene)
        .with_context(|| format!("failed to load scene {}", args.scene.display()))?;

    let config = RenderConfig {
        parallel: !args.serial,
        ..Default::default()
    };
    let mut sink = FileSink::new(&args.output_dir);

    let start = Instant::now();
    render_to_sink(&scene, &config, &mut sink)
        .with_context(|| format!("failed to render {}", args.scene.display()))?;
    log::info!(
        "Rendered {} camera(s) in {:?}",
        scene.cameras.len(),
        start.elapsed()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        Args::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_defaults() {
        let args = parse(&["scene.json"]).unwrap();
        assert_eq!(args.scene, PathBuf::from("scene.json"));
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert!(!args.serial);
    }

    #[test]
    fn test_parse_output_dir_and_serial() {
        let args = parse(&["--serial", "scene.json", "out"]).unwrap();
        assert_eq!(args.output_dir, PathBuf::from("out"));
        assert!(args.serial);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["a.json", "out", "extra"]).is_err());
        assert!(parse(&["--fast", "a.json"]).is_err());
    }
}
