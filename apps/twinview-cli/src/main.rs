use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use glam::Mat4;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use twinview_common::approx::max_abs_diff;
use twinview_common::Entity;
use twinview_input::{ControlBindings, KeyMap};
use twinview_kernel::{MotionStep, SceneRig};
use twinview_render::{
    DebugTextRenderer, Projection, Renderer, Viewport, ViewportDesc, ViewportRect,
};

#[derive(Parser)]
#[command(name = "twinview-cli", about = "CLI tool for twinview scene operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions
    Info,
    /// Feed a key script through the control scheme and show both viewports
    Fly {
        /// Key sequence, e.g. "wwdddtt" (unbound keys are ignored)
        #[arg(short, long)]
        script: String,
        /// Window width in pixels (split into two half-width viewports)
        #[arg(long, default_value = "800")]
        width: u32,
        /// Window height in pixels
        #[arg(long, default_value = "600")]
        height: u32,
    },
    /// Apply many rotation steps and report numerical drift
    Drift {
        /// Number of rotation steps to accumulate
        #[arg(short = 'n', long, default_value = "720")]
        steps: usize,
    },
    /// Show or round-trip the control binding profile
    Bindings {
        /// Load a profile from a JSON file instead of the defaults
        #[arg(long)]
        load: Option<PathBuf>,
        /// Print the profile as JSON
        #[arg(long)]
        dump: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("twinview-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("input: {}", twinview_input::crate_info());
            println!("render: {}", twinview_render::crate_info());
        }
        Commands::Fly {
            script,
            width,
            height,
        } => {
            let mut rig = SceneRig::new();
            let keymap = KeyMap::default();
            let bindings = ControlBindings::default();

            let mut applied = 0usize;
            let mut ignored = 0usize;
            for key in script.chars() {
                let step = keymap
                    .event_for(key)
                    .and_then(|event| bindings.resolve(event).map(|s| (event.target, s)));
                match step {
                    Some((target, step)) => {
                        rig.apply(target, step);
                        applied += 1;
                    }
                    None => {
                        debug!(%key, "unbound key ignored");
                        ignored += 1;
                    }
                }
            }
            println!("Applied {applied} steps ({ignored} keys ignored)");
            println!(
                "Vehicle at {:?}, primary camera at {:?}",
                rig.vehicle_pose().position(),
                rig.primary_camera_pose().position()
            );

            let (left, right) = ViewportRect::split_horizontal(width, height);
            let viewports = [
                ViewportDesc {
                    viewport: Viewport::Primary,
                    rect: left,
                    projection: Projection::default(),
                },
                ViewportDesc {
                    viewport: Viewport::Secondary,
                    rect: right,
                    projection: Projection::default(),
                },
            ];
            print!("{}", DebugTextRenderer::new().render(&rig, &viewports));
        }
        Commands::Drift { steps } => {
            println!("Accumulating {steps} rotation steps on the primary camera");

            let rotations = [
                MotionStep::RollPositive,
                MotionStep::PitchPositive,
                MotionStep::YawPositive,
            ];
            let mut rig = SceneRig::new();
            for i in 0..steps {
                rig.apply(Entity::PrimaryCamera, rotations[i % rotations.len()]);
            }

            let pose = rig.primary_camera_pose();
            let residual = max_abs_diff(rig.primary_view() * pose.matrix(), Mat4::IDENTITY);
            println!("rotation drift:      {:.3e}", pose.rotation_drift());
            println!("view·pose residual:  {residual:.3e}");
            println!(
                "pose still rigid within 1e-4: {}",
                if pose.is_rigid(1e-4) { "yes" } else { "NO" }
            );
        }
        Commands::Bindings { load, dump } => {
            let bindings = match load {
                Some(path) => {
                    let text = std::fs::read_to_string(&path)
                        .with_context(|| format!("reading {}", path.display()))?;
                    ControlBindings::from_json(&text)
                        .with_context(|| format!("parsing {}", path.display()))?
                }
                None => ControlBindings::default(),
            };

            if dump {
                println!("{}", bindings.to_json()?);
            } else {
                println!("vehicle: {:?}", bindings.vehicle);
                println!("camera:  {:?}", bindings.camera);
                println!();
                println!("key layout:");
                for (key, event) in KeyMap::default().iter() {
                    let step = bindings.resolve(event);
                    println!(
                        "  {key} -> {:?} {:?} ({:?})",
                        event.target,
                        event.motion,
                        step.expect("default keymap only targets steerable entities")
                    );
                }
            }
        }
    }

    Ok(())
}
