use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};
use crowd_mesh_core::prelude::ObstacleContainment;

#[derive(Clone, Debug, Parser)]
#[command(name = "crowd-mesh", version, author, about)]
#[command(help_template = "\
{name} {version}
{about}
{author}

{usage-heading}
{tab}{usage}

{all-args}
")]
pub struct CliArgs {
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Clone, Debug, Args)]
pub struct CommonArgs {
    /// Output file path
    #[arg(short, long, value_name = "PATH", value_hint(ValueHint::FilePath))]
    pub output: PathBuf,

    /// Layout file (JSON or YAML); random canvas layout when omitted
    #[arg(short, long, value_name = "PATH", value_hint(ValueHint::FilePath))]
    pub layout: Option<PathBuf>,

    /// Settings file (JSON or YAML)
    #[arg(short, long, value_name = "PATH", value_hint(ValueHint::FilePath))]
    pub settings: Option<PathBuf>,

    /// Random seed
    #[arg(long, value_name = "INTEGER")]
    pub seed: Option<u64>,

    /// Target number of people per triangle
    #[arg(long, value_name = "INTEGER")]
    pub target_density: Option<usize>,

    /// Number of random interior points
    #[arg(long, value_name = "INTEGER")]
    pub inner_points: Option<usize>,

    /// Number of random people
    #[arg(long, value_name = "INTEGER")]
    pub people: Option<usize>,

    /// Obstacle containment test
    #[arg(long, value_name = "MODE")]
    pub containment: Option<ContainmentSelection>,

    /// Display settings used and every edit outcome
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Default, strum::Display, ValueEnum)]
#[strum(serialize_all = "kebab-case")]
pub enum ContainmentSelection {
    #[default]
    Exact,
    BoundingBox,
}

impl From<ContainmentSelection> for ObstacleContainment {
    fn from(value: ContainmentSelection) -> Self {
        match value {
            ContainmentSelection::Exact => Self::Exact,
            ContainmentSelection::BoundingBox => Self::BoundingBox,
        }
    }
}

#[derive(Clone, Debug, Subcommand)]
pub enum Action {
    /// Produce initial crowd mesh
    #[command(help_template = "\
{name}
{about}

{usage-heading}
{tab}{usage}

{all-args}
")]
    Init {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: Format,
    },

    /// Replay edit script and produce resulting crowd mesh
    #[command(help_template = "\
{name}
{about}

{usage-heading}
{tab}{usage}

{all-args}
")]
    Run {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: Format,

        /// Edit script file (JSON or YAML list of commands)
        #[arg(long, value_name = "PATH", value_hint(ValueHint::FilePath))]
        script: PathBuf,

        /// Stop at the first rejected edit
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Clone, Debug, Args)]
#[group(required = true)]
pub struct Format {
    /// Produce JSON snapshot
    #[arg(long)]
    pub json: bool,

    /// Produce pretty JSON snapshot
    #[arg(long)]
    pub json_pretty: bool,

    /// Produce YAML snapshot
    #[arg(long)]
    pub yaml: bool,

    /// Produce OBJ mesh
    #[arg(long)]
    pub obj: bool,
}
