mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Action, CliArgs, CommonArgs, Format};
use crowd_mesh_core::prelude::*;
use obj_exporter::{Geometry, ObjSet, Object, Primitive, Shape, TVertex, Vertex};
use serde::de::DeserializeOwned;
use std::{
    collections::HashMap,
    fs::{read_to_string, write},
    path::Path,
};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let level = if args.action.common().verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    run_app(args)
}

impl Action {
    fn common(&self) -> &CommonArgs {
        match self {
            Self::Init { common, .. } | Self::Run { common, .. } => common,
        }
    }
}

fn run_app(args: CliArgs) -> Result<()> {
    match args.action {
        Action::Init { common, format } => {
            let mesh = make_mesh(&common)?;
            save_snapshot(&mesh, &format, &common.output)
        }
        Action::Run {
            common,
            format,
            script,
            strict,
        } => {
            let mut mesh = make_mesh(&common)?;
            let commands = load::<Vec<MeshCommand>>(&script)?;
            let rejected = replay(&mut mesh, commands, strict)?;
            tracing::info!(rejected, status = mesh.status(), "script finished");
            save_snapshot(&mesh, &format, &common.output)
        }
    }
}

fn make_mesh(common: &CommonArgs) -> Result<CrowdMesh> {
    let mut settings = match &common.settings {
        Some(path) => load::<CrowdMeshSettings>(path)?,
        None => CrowdMeshSettings::default(),
    };
    if let Some(seed) = common.seed {
        settings.seed = Some(seed);
    }
    if let Some(target) = common.target_density {
        settings.target_density = target;
    }
    if let Some(count) = common.inner_points {
        settings.inner_point_count = count;
    }
    if let Some(count) = common.people {
        settings.initial_people_count = count;
    }
    if let Some(containment) = common.containment {
        settings.obstacle_containment = containment.into();
    }
    tracing::debug!(?settings, "settings");
    let mesh = match &common.layout {
        Some(path) => {
            let layout = load::<MeshLayout>(path)?;
            CrowdMesh::new(&layout, settings)
        }
        None => CrowdMesh::random(settings),
    }
    .context("Cannot build crowd mesh")?;
    Ok(mesh)
}

/// Replays commands, returns number of rejected ones.
fn replay(mesh: &mut CrowdMesh, commands: Vec<MeshCommand>, strict: bool) -> Result<usize> {
    let mut rejected = 0;
    for (index, command) in commands.into_iter().enumerate() {
        tracing::debug!(index, ?command, "apply");
        match mesh.apply(command) {
            Ok(outcome) => tracing::info!(index, %outcome, "applied"),
            Err(error) if strict => {
                return Err(error).with_context(|| format!("Edit #{} rejected", index));
            }
            Err(error) => {
                rejected += 1;
                tracing::warn!(index, %error, "rejected");
            }
        }
    }
    Ok(rejected)
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents =
        read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    let result = if is_yaml(path) {
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Cannot parse YAML {}", path.display()))?
    } else {
        serde_json::from_str(&contents)
            .with_context(|| format!("Cannot parse JSON {}", path.display()))?
    };
    Ok(result)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}

fn save_snapshot(mesh: &CrowdMesh, format: &Format, output: &Path) -> Result<()> {
    let snapshot = mesh.snapshot();
    if format.json {
        let contents = serde_json::to_string(&snapshot).context("Could not serialize JSON")?;
        write(output, contents).context("Could not save snapshot file")?;
    } else if format.json_pretty {
        let contents =
            serde_json::to_string_pretty(&snapshot).context("Could not serialize pretty JSON")?;
        write(output, contents).context("Could not save snapshot file")?;
    } else if format.yaml {
        let contents = serde_yaml::to_string(&snapshot).context("Could not serialize YAML")?;
        write(output, contents).context("Could not save snapshot file")?;
    } else if format.obj {
        let objects = ObjSet {
            material_library: None,
            objects: vec![make_object(&snapshot, mesh.settings())],
        };
        obj_exporter::export_to_file(&objects, output).context("Cannot save mesh file")?;
    }
    tracing::info!(
        output = %output.display(),
        triangles = snapshot.triangles.len(),
        people = snapshot.people.len(),
        "snapshot saved"
    );
    Ok(())
}

/// Triangles grouped by density class, one geometry per class.
fn make_object(snapshot: &MeshSnapshot, settings: &CrowdMeshSettings) -> Object {
    let indices = snapshot
        .vertices
        .iter()
        .enumerate()
        .map(|(index, v)| (v.id, index))
        .collect::<HashMap<_, _>>();
    let geometry = [
        DensityClass::Under,
        DensityClass::Optimal,
        DensityClass::Over,
    ]
    .into_iter()
    .map(|density| Geometry {
        material_name: Some(density.to_string()),
        shapes: snapshot
            .triangles
            .iter()
            .filter(|t| t.density == density)
            .map(|t| {
                let [a, b, c] = t.vertices.map(|id| indices[&id]);
                Shape {
                    primitive: Primitive::Triangle(
                        (a, Some(a), Some(0)),
                        (b, Some(b), Some(0)),
                        (c, Some(c), Some(0)),
                    ),
                    groups: vec![],
                    smoothing_groups: vec![],
                }
            })
            .collect(),
    })
    .filter(|g| !g.shapes.is_empty())
    .collect();
    Object {
        name: "crowd-mesh".to_owned(),
        vertices: snapshot
            .vertices
            .iter()
            .map(|v| Vertex {
                x: v.x,
                y: v.y,
                z: 0.0,
            })
            .collect(),
        tex_vertices: snapshot
            .vertices
            .iter()
            .map(|v| TVertex {
                u: v.x / settings.canvas_width,
                v: v.y / settings.canvas_height,
                w: 0.0,
            })
            .collect(),
        normals: vec![Vertex {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        }],
        geometry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: &str = "\
boundary:
  - { x: 40, y: 40 }
  - { x: 760, y: 40 }
  - { x: 760, y: 560 }
  - { x: 40, y: 560 }
obstacle:
  center: { x: 400, y: 300 }
  width: 100
  height: 70
interior:
  - { x: 150, y: 150 }
  - { x: 650, y: 150 }
  - { x: 650, y: 450 }
  - { x: 150, y: 450 }
people:
  - { x: 200, y: 300 }
  - { x: 600, y: 300 }
";

    const SCRIPT: &str = r#"[
        {"op": "add_person", "x": 300, "y": 200},
        {"op": "remove_edge", "a": 0, "b": 1},
        {"op": "rotate_obstacle", "degrees": 30},
        {"op": "scale_obstacle"},
        {"op": "set_target_density", "target": 1}
    ]"#;

    fn run(args: &[&str]) -> Result<()> {
        run_app(CliArgs::parse_from(
            std::iter::once("crowd-mesh").chain(args.iter().copied()),
        ))
    }

    #[test]
    fn test_init_formats() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("mesh.json");
        let yaml = dir.path().join("mesh.yaml");
        let obj = dir.path().join("mesh.obj");
        for (path, flag) in [(&json, "--json"), (&yaml, "--yaml"), (&obj, "--obj")] {
            let path = path.to_str().unwrap();
            run(&["init", "-o", path, flag, "--seed", "7", "--people", "5"]).unwrap();
        }

        let from_json: MeshSnapshot =
            serde_json::from_str(&read_to_string(&json).unwrap()).unwrap();
        let from_yaml: MeshSnapshot =
            serde_yaml::from_str(&read_to_string(&yaml).unwrap()).unwrap();
        assert_eq!(from_json, from_yaml);
        assert_eq!(from_json.people.len(), 5);
        assert_eq!(from_json.status, "Simulation initialized.");
        let obj = read_to_string(&obj).unwrap();
        assert!(obj.lines().any(|line| line.starts_with("f ")));
    }

    #[test]
    fn test_snapshot_files_keep_exact_coordinates() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("mesh.json");
        run(&["init", "-o", json.to_str().unwrap(), "--json", "--seed", "7"]).unwrap();

        let mesh = CrowdMesh::random(CrowdMeshSettings {
            seed: Some(7),
            ..Default::default()
        })
        .unwrap();
        let saved: MeshSnapshot = serde_json::from_str(&read_to_string(&json).unwrap()).unwrap();
        assert_eq!(saved, mesh.snapshot());
    }

    #[test]
    fn test_run_script() {
        let dir = tempfile::tempdir().unwrap();
        let layout = dir.path().join("layout.yaml");
        let script = dir.path().join("script.json");
        let output = dir.path().join("mesh.json");
        write(&layout, LAYOUT).unwrap();
        write(&script, SCRIPT).unwrap();
        let args = [
            "run",
            "-l",
            layout.to_str().unwrap(),
            "--script",
            script.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--json-pretty",
        ];
        run(&args).unwrap();

        let snapshot: MeshSnapshot =
            serde_json::from_str(&read_to_string(&output).unwrap()).unwrap();
        assert_eq!(snapshot.people.len(), 3);
        assert_eq!(snapshot.target_density, 1);
        assert_eq!(snapshot.obstacle.rotation_degrees, 30.0);
        assert!((snapshot.obstacle.scale_factor - 1.1).abs() < 1e-9);
        assert_eq!(snapshot.status, "Target density set to 1.");

        assert!(run(&[&args[..], &["--strict"][..]].concat()).is_err());
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(CliArgs::try_parse_from(["crowd-mesh", "init", "-o", "mesh.json"]).is_err());
        assert!(CliArgs::try_parse_from([
            "crowd-mesh",
            "init",
            "-o",
            "mesh.json",
            "--json",
            "--containment",
            "circle",
        ])
        .is_err());

        let dir = tempfile::tempdir().unwrap();
        let settings = dir.path().join("settings.json");
        write(&settings, r#"{"min_scale_factor": 2.0}"#).unwrap();
        let output = dir.path().join("mesh.json");
        let result = run(&[
            "init",
            "-s",
            settings.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--json",
        ]);
        assert!(result.is_err());
        assert!(!output.exists());
    }
}
