use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use levee::api::{
    Algorithm, Berm, BermParams, CrossSection, PhreaticLine, PhreaticOffsets, Point, Shift,
    Snapshot,
};

mod provenance;

#[derive(Parser)]
#[command(name = "levee")]
#[command(about = "Levee cross-section geometry: surfaces, phreatic lines, berms")]
struct Cmd {
    /// Log debug output (control points, intersection counts)
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args)]
struct Io {
    /// Cross-section snapshot (JSON)
    #[arg(long)]
    input: PathBuf,
    /// Output JSON; a `.provenance.json` sidecar is written next to it
    #[arg(long)]
    out: PathBuf,
}

#[derive(Subcommand)]
enum Action {
    /// Write the derived boundary and surface
    Surface {
        #[command(flatten)]
        io: Io,
    },
    /// Build the phreatic line and write the updated snapshot
    Phreatic {
        #[command(flatten)]
        io: Io,
        #[arg(long, allow_hyphen_values = true)]
        river_level: f64,
        #[arg(long, allow_hyphen_values = true)]
        polder_level: f64,
        /// Offsets JSON (missing fields take their defaults)
        #[arg(long)]
        offsets: Option<PathBuf>,
    },
    /// Add a berm (and optionally fill the ditch); writes the updated snapshot
    Berm {
        #[command(flatten)]
        io: Io,
        /// Berm soil; required when both --width and --height are positive
        #[arg(long)]
        soilcode: Option<String>,
        #[arg(long, default_value_t = 0.0)]
        width: f64,
        #[arg(long, default_value_t = 0.0)]
        height: f64,
        #[arg(long, default_value_t = 10.0)]
        slope_top: f64,
        #[arg(long, default_value_t = 1.0)]
        slope_bottom: f64,
        /// Fill the ditch with this soil first
        #[arg(long)]
        fill_ditch: Option<String>,
    },
    /// Move the cross-section horizontally
    Shift {
        #[command(flatten)]
        io: Io,
        #[arg(long, allow_hyphen_values = true)]
        dx: f64,
    },
}

#[derive(Serialize)]
struct SurfaceOut<'a> {
    boundary: &'a [Point],
    surface: &'a [Point],
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    let sidecar = run(cmd.action)?;
    tracing::info!(sidecar = %sidecar.display(), "done");
    Ok(())
}

/// Execute one action; returns the provenance sidecar path.
fn run(action: Action) -> Result<PathBuf> {
    match action {
        Action::Surface { io } => {
            let cs = read_section(&io.input)?;
            let out = SurfaceOut {
                boundary: cs.boundary(),
                surface: cs.surface(),
            };
            tracing::info!(points = cs.surface().len(), "surface");
            write_json(&io.out, &out)?;
            sidecar(&io, "surface", serde_json::json!({}))
        }
        Action::Phreatic {
            io,
            river_level,
            polder_level,
            offsets,
        } => {
            let offsets: PhreaticOffsets = match &offsets {
                Some(path) => read_json(path)?,
                None => PhreaticOffsets::default(),
            };
            let pl = PhreaticLine::new(river_level, polder_level).with_offsets(offsets);
            let cs = read_section(&io.input)?;
            let out = pl.execute(&cs).context("building phreatic line")?;
            write_json(&io.out, &out.to_snapshot())?;
            sidecar(&io, "phreatic", serde_json::to_value(pl)?)
        }
        Action::Berm {
            io,
            soilcode,
            width,
            height,
            slope_top,
            slope_bottom,
            fill_ditch,
        } => {
            let params = BermParams {
                slope_top,
                slope_bottom,
                width,
                height,
                fill_ditch: false,
            };
            let soilcode = match soilcode {
                Some(code) => code,
                None if params.has_berm() => {
                    bail!("--soilcode is required when --width and --height are positive")
                }
                None => String::new(),
            };
            let mut berm = Berm::new(soilcode, params);
            if let Some(code) = fill_ditch {
                berm = berm.with_ditch_fill(code);
            }
            let cs = read_section(&io.input)?;
            let out = berm.execute(&cs).context("constructing berm")?;
            write_json(&io.out, &out.to_snapshot())?;
            sidecar(&io, "berm", serde_json::to_value(&berm)?)
        }
        Action::Shift { io, dx } => {
            let shift = Shift { dx };
            let cs = read_section(&io.input)?;
            let out = shift.execute(&cs).context("shifting cross-section")?;
            write_json(&io.out, &out.to_snapshot())?;
            sidecar(&io, "shift", serde_json::to_value(shift)?)
        }
    }
}

fn sidecar(io: &Io, command: &'static str, params: serde_json::Value) -> Result<PathBuf> {
    let payload = provenance::Payload {
        command,
        input: io.input.clone(),
        params,
    };
    provenance::write_sidecar(&io.out, &payload)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

fn read_section(path: &Path) -> Result<CrossSection> {
    let snapshot: Snapshot = read_json(path)?;
    CrossSection::from_snapshot(snapshot)
        .with_context(|| format!("deriving geometry of {}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use levee::api::{draw_levee, CharacteristicPointType, Layer, LeveeCfg, Soil};
    use tempfile::tempdir;

    fn write_input(dir: &Path) -> PathBuf {
        let cs = draw_levee(&LeveeCfg::default(), 7).unwrap();
        let path = dir.join("in.json");
        write_json(&path, &cs.to_snapshot()).unwrap();
        path
    }

    #[test]
    fn surface_command_writes_surface_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path());
        let out = dir.path().join("nested/surface.json");
        let sidecar = run(Action::Surface {
            io: Io {
                input,
                out: out.clone(),
            },
        })
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["surface"][0][0], 0.0);
        assert!(parsed["boundary"].as_array().unwrap().len() > 4);
        assert!(sidecar.ends_with("nested/surface.provenance.json"));
    }

    #[test]
    fn phreatic_command_stores_active_line() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path());
        let out = dir.path().join("pl.json");
        run(Action::Phreatic {
            io: Io {
                input,
                out: out.clone(),
            },
            river_level: 2.0,
            polder_level: -0.5,
            offsets: None,
        })
        .unwrap();
        let snap: Snapshot = read_json(&out).unwrap();
        let cs = CrossSection::from_snapshot(snap).unwrap();
        let line = &cs.phreatic_line().unwrap().points;
        assert_eq!(line[0], Point::new(cs.left(), 2.0));
        assert_eq!(*line.last().unwrap(), Point::new(cs.right(), -0.5));
    }

    #[test]
    fn shift_command_round_trips_snapshot() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path());
        let out = dir.path().join("shifted.json");
        run(Action::Shift {
            io: Io {
                input,
                out: out.clone(),
            },
            dx: -5.0,
        })
        .unwrap();
        let cs = read_section(&out).unwrap();
        assert_eq!(cs.left(), -5.0);
    }

    #[test]
    fn unknown_soil_reports_context() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path());
        let err = run(Action::Berm {
            io: Io {
                input,
                out: dir.path().join("berm.json"),
            },
            soilcode: Some("peat".into()),
            width: 6.0,
            height: 1.0,
            slope_top: 10.0,
            slope_bottom: 1.0,
            fill_ditch: None,
        })
        .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("constructing berm"), "{msg}");
        assert!(msg.contains("peat"), "{msg}");
    }

    fn ditched_input(dir: &Path) -> PathBuf {
        let sand = Layer::new(
            "sand",
            vec![
                Point::new(0.0, -5.0),
                Point::new(60.0, -5.0),
                Point::new(60.0, 0.0),
                Point::new(46.0, 0.0),
                Point::new(44.0, -1.5),
                Point::new(42.0, -1.5),
                Point::new(40.0, 0.0),
                Point::new(0.0, 0.0),
            ],
        );
        let mut cs = CrossSection::new(vec![Soil::new("sand")], vec![sand]).unwrap();
        cs.set_characteristic_point(CharacteristicPointType::DitchEmbankmentSide, 40.0);
        cs.set_characteristic_point(CharacteristicPointType::DitchLandSide, 46.0);
        let path = dir.join("ditched.json");
        write_json(&path, &cs.to_snapshot()).unwrap();
        path
    }

    #[test]
    fn ditch_fill_runs_without_berm_soilcode() {
        let dir = tempdir().unwrap();
        let input = ditched_input(dir.path());
        let out = dir.path().join("filled.json");
        run(Action::Berm {
            io: Io {
                input,
                out: out.clone(),
            },
            soilcode: None,
            width: 0.0,
            height: 0.0,
            slope_top: 10.0,
            slope_bottom: 1.0,
            fill_ditch: Some("sand".into()),
        })
        .unwrap();
        let cs = read_section(&out).unwrap();
        assert_eq!(cs.layers().len(), 2);
        assert_eq!(cs.surface_z_at(43.0), Some(0.0));
    }

    #[test]
    fn sized_berm_needs_a_soilcode() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path());
        let err = run(Action::Berm {
            io: Io {
                input,
                out: dir.path().join("berm.json"),
            },
            soilcode: None,
            width: 6.0,
            height: 1.0,
            slope_top: 10.0,
            slope_bottom: 1.0,
            fill_ditch: None,
        })
        .unwrap_err();
        assert!(err.to_string().contains("--soilcode"), "{err}");
    }
}
