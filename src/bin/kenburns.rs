use std::path::PathBuf;

use clap::Parser;

use kenburns::{AspectRatio, ConvertOpts, ConvertRequest, FitMode, Resolution};

/// Turn a still image into a zoom/pan MP4 clip (requires `ffmpeg` on PATH).
#[derive(Parser, Debug)]
#[command(name = "kenburns", version)]
struct Cli {
    /// Source image: http/https URL or local path.
    source: String,

    /// Job id naming the work files and the output file.
    #[arg(long)]
    job_id: String,

    /// Clip length in seconds.
    #[arg(long, default_value_t = 5.0)]
    length: f64,

    /// Output frame rate.
    #[arg(long, default_value_t = 30.0)]
    frame_rate: f64,

    /// Zoom speed per second (0 produces a static clip).
    #[arg(long, default_value_t = 0.1)]
    zoom_speed: f64,

    /// Target aspect ratio preset.
    #[arg(long, default_value = "original")]
    aspect_ratio: AspectRatio,

    /// Target resolution preset.
    #[arg(long, default_value = "1080p")]
    resolution: Resolution,

    /// Fit mode reconciling the source and target ratios.
    #[arg(long, default_value = "cover")]
    fit_mode: FitMode,

    /// Work directory for downloads and the output (defaults to the system
    /// temp dir).
    #[arg(long)]
    work_dir: Option<PathBuf>,

    /// Overwrite an existing output file.
    #[arg(long, default_value_t = true)]
    overwrite: bool,

    /// Print the derived render plan as JSON and exit without encoding.
    #[arg(long, default_value_t = false)]
    dump_plan: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let opts = ConvertOpts {
        work_dir: cli.work_dir.unwrap_or_else(std::env::temp_dir),
        overwrite: cli.overwrite,
    };
    let request = ConvertRequest {
        source: cli.source,
        length_seconds: cli.length,
        frame_rate: cli.frame_rate,
        zoom_speed: cli.zoom_speed,
        job_id: cli.job_id,
        aspect_ratio: cli.aspect_ratio,
        resolution: cli.resolution,
        fit_mode: cli.fit_mode,
    };

    if cli.dump_plan {
        let plan = kenburns::derive_plan(&request, &opts)?;
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let out = kenburns::convert(&request, &opts)?;
    println!("{}", out.display());
    Ok(())
}
