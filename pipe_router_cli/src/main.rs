// CLI entry point for the pipe router.
//
// Loads a building-model obstacle file (`{ roomBBox, obstacleBBoxes }`),
// builds the navigation grid, and either prints the grid export or routes a
// path and prints it. All JSON goes to stdout; logs go to stderr so the
// output can be piped straight into other tools.
//
// Usage:
//   route --boxes <FILE> [OPTIONS]
//     --span <N>              Lattice spacing (default: 1.0, or from --config)
//     --config <FILE>         RouterConfig JSON; flags below override it
//     --heuristic <NAME>      squared | euclidean | zero (default: squared)
//     --early-exit            Stop searching when the goal is first reached
//     --skip-penetrable       Ignore obstacles flagged penetrable
//     --max-expansions <N>    Give up after N node expansions
//     --start <ID> --end <ID> Route between node IDs
//     --from <X,Y,Z> --to <X,Y,Z>  Route between the nodes nearest two points
//     --grid-out <FILE>       Also write the grid export to FILE
//     --lines-out <FILE>      Write grid edges and obstacle wireframes to FILE
//
// Set `RUST_LOG=debug` for build and search diagnostics.

use std::fs;
use std::path::{Path, PathBuf};

use pipe_router_nav::{
    GraphExport, Heuristic, LineSegment, NodeId, ObstacleSet, PathError, Point3, Route,
    RouterConfig, build_nav_grid_with_config, find_path_between_points, find_path_with_config,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Grid(#[from] pipe_router_nav::GridError),
    #[error(transparent)]
    Path(#[from] PathError),
}

/// Where the route starts and ends, if a route was requested.
#[derive(Clone, Debug, PartialEq)]
enum Endpoints {
    Nodes(NodeId, NodeId),
    Points(Point3, Point3),
}

#[derive(Clone, Debug, Default, PartialEq)]
struct CliArgs {
    boxes: PathBuf,
    config_file: Option<PathBuf>,
    span: Option<f64>,
    heuristic: Option<Heuristic>,
    early_exit: bool,
    skip_penetrable: bool,
    max_expansions: Option<u64>,
    endpoints: Option<Endpoints>,
    grid_out: Option<PathBuf>,
    lines_out: Option<PathBuf>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RouteOutput {
    path: Vec<[f64; 3]>,
    nodes: Vec<u32>,
    total_distance: f64,
}

impl From<&Route> for RouteOutput {
    fn from(route: &Route) -> Self {
        Self {
            path: route.point_arrays(),
            nodes: route.nodes.iter().map(|n| n.0).collect(),
            total_distance: route.total_distance,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LinesOutput {
    grid_lines: Vec<LineSegment>,
    obstacle_lines: Vec<LineSegment>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = parse_args(std::env::args().skip(1)).and_then(|args| match args {
        Some(args) => run(&args),
        None => {
            print_usage();
            std::process::exit(0);
        }
    });

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            if matches!(e, CliError::Usage(_)) {
                print_usage();
            }
            std::process::exit(1);
        }
    }
}

/// Parse command-line arguments. Returns `Ok(None)` when help was requested.
/// Uses simple argument matching, no clap dependency.
fn parse_args<I>(args: I) -> Result<Option<CliArgs>, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut boxes = None;
    let (mut start, mut end, mut from, mut to) = (None, None, None, None);
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| CliError::Usage(format!("{flag} requires a value")))
        };
        match arg.as_str() {
            "--boxes" => boxes = Some(PathBuf::from(value("--boxes")?)),
            "--config" => parsed.config_file = Some(PathBuf::from(value("--config")?)),
            "--span" => parsed.span = Some(parse_number("--span", &value("--span")?)?),
            "--heuristic" => {
                parsed.heuristic = Some(parse_heuristic(&value("--heuristic")?)?);
            }
            "--early-exit" => parsed.early_exit = true,
            "--skip-penetrable" => parsed.skip_penetrable = true,
            "--max-expansions" => {
                parsed.max_expansions = Some(parse_number(
                    "--max-expansions",
                    &value("--max-expansions")?,
                )?);
            }
            "--start" => start = Some(NodeId(parse_number("--start", &value("--start")?)?)),
            "--end" => end = Some(NodeId(parse_number("--end", &value("--end")?)?)),
            "--from" => from = Some(parse_point("--from", &value("--from")?)?),
            "--to" => to = Some(parse_point("--to", &value("--to")?)?),
            "--grid-out" => parsed.grid_out = Some(PathBuf::from(value("--grid-out")?)),
            "--lines-out" => parsed.lines_out = Some(PathBuf::from(value("--lines-out")?)),
            "--help" | "-h" => return Ok(None),
            other => return Err(CliError::Usage(format!("unknown argument: {other}"))),
        }
    }

    parsed.boxes = boxes.ok_or_else(|| CliError::Usage("--boxes is required".into()))?;
    parsed.endpoints = match (start, end, from, to) {
        (None, None, None, None) => None,
        (Some(s), Some(e), None, None) => Some(Endpoints::Nodes(s, e)),
        (None, None, Some(f), Some(t)) => Some(Endpoints::Points(f, t)),
        _ => {
            return Err(CliError::Usage(
                "give either --start and --end, or --from and --to".into(),
            ));
        }
    };
    Ok(Some(parsed))
}

fn parse_number<T: std::str::FromStr>(flag: &str, s: &str) -> Result<T, CliError> {
    s.trim()
        .parse()
        .map_err(|_| CliError::Usage(format!("{flag} requires a valid number, got '{s}'")))
}

fn parse_point(flag: &str, s: &str) -> Result<Point3, CliError> {
    let parts = s
        .split(',')
        .map(|p| parse_number::<f64>(flag, p))
        .collect::<Result<Vec<_>, _>>()?;
    match parts.as_slice() {
        &[x, y, z] => Ok(Point3::new(x, y, z)),
        _ => Err(CliError::Usage(format!(
            "{flag} requires three comma-separated numbers, got '{s}'"
        ))),
    }
}

fn parse_heuristic(s: &str) -> Result<Heuristic, CliError> {
    match s {
        "squared" => Ok(Heuristic::SquaredEuclidean),
        "euclidean" => Ok(Heuristic::Euclidean),
        "zero" => Ok(Heuristic::Zero),
        other => Err(CliError::Usage(format!(
            "unknown heuristic '{other}' (expected squared, euclidean or zero)"
        ))),
    }
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve the effective config: file first, then flag overrides.
fn resolve_config(args: &CliArgs) -> Result<RouterConfig, CliError> {
    let mut config = match &args.config_file {
        Some(path) => serde_json::from_str(&read_file(path)?)?,
        None => RouterConfig::default(),
    };
    if let Some(span) = args.span {
        config.span = span;
    }
    if let Some(heuristic) = args.heuristic {
        config.heuristic = heuristic;
    }
    config.early_exit |= args.early_exit;
    config.skip_penetrable |= args.skip_penetrable;
    if args.max_expansions.is_some() {
        config.max_expansions = args.max_expansions;
    }
    Ok(config)
}

/// Build the grid and produce the JSON for stdout.
fn run(args: &CliArgs) -> Result<String, CliError> {
    let config = resolve_config(args)?;
    let set: ObstacleSet = serde_json::from_str(&read_file(&args.boxes)?)?;
    info!(
        obstacles = set.obstacles.len(),
        span = config.span,
        "building navigation grid"
    );

    let graph = build_nav_grid_with_config(&set.room, &set.obstacles, &config)?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "grid ready"
    );

    let export = GraphExport::from_graph(&graph);
    if let Some(path) = &args.grid_out {
        write_file(path, &export.to_json()?)?;
    }
    if let Some(path) = &args.lines_out {
        let lines = LinesOutput {
            grid_lines: graph.edge_segments(),
            obstacle_lines: set
                .blocking(config.skip_penetrable)
                .flat_map(|b| b.wireframe())
                .collect(),
        };
        write_file(path, &serde_json::to_string(&lines)?)?;
    }

    let route = match &args.endpoints {
        None => return Ok(export.to_json()?),
        Some(Endpoints::Nodes(start, end)) => find_path_with_config(&graph, *start, *end, &config)?,
        Some(Endpoints::Points(from, to)) => find_path_between_points(&graph, *from, *to, &config)?,
    };
    info!(
        points = route.points.len(),
        distance = route.total_distance,
        expansions = route.expansions,
        "route found"
    );
    Ok(serde_json::to_string(&RouteOutput::from(&route))?)
}

fn print_usage() {
    println!("Usage: route --boxes <FILE> [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --span <N>                   Lattice spacing (default: 1.0)");
    println!("  --config <FILE>              RouterConfig JSON; flags override it");
    println!("  --heuristic <NAME>           squared | euclidean | zero (default: squared)");
    println!("  --early-exit                 Stop when the goal is first reached");
    println!("  --skip-penetrable            Ignore obstacles flagged penetrable");
    println!("  --max-expansions <N>         Give up after N node expansions");
    println!("  --start <ID> --end <ID>      Route between node IDs");
    println!("  --from <X,Y,Z> --to <X,Y,Z>  Route between the nodes nearest two points");
    println!("  --grid-out <FILE>            Also write the grid export to FILE");
    println!("  --lines-out <FILE>           Write grid and obstacle line segments to FILE");
    println!("  --help, -h                   Show this help");
}
