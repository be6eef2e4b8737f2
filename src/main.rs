// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `map-color` binary
//!
//! Colors the US state map (or a graph file) with four colors and prints
//! the fill plan a renderer would consume.

use clap::{Parser, ValueEnum};
use map_coloring::graph::{load_graph, us_states};
use map_coloring::{
    AdjacencyGraph, AsymmetryPolicy, FillPlan, Palette, Result, SolveOutcome, Solver,
    SolverConfig,
};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Handling of a neighbor listed on one side only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Symmetry {
    /// Add the missing reverse entry.
    Symmetrize,
    /// Refuse the graph.
    Reject,
    /// Keep entries as written.
    Trust,
}

impl From<Symmetry> for AsymmetryPolicy {
    fn from(symmetry: Symmetry) -> Self {
        match symmetry {
            Symmetry::Symmetrize => AsymmetryPolicy::Symmetrize,
            Symmetry::Reject => AsymmetryPolicy::Reject,
            Symmetry::Trust => AsymmetryPolicy::Trust,
        }
    }
}

/// Four-color a map by backtracking search.
#[derive(Debug, Parser)]
#[command(name = "map-color", version)]
struct Args {
    /// JSON adjacency file; defaults to the built-in US state table.
    #[arg(long, value_name = "FILE")]
    graph: Option<PathBuf>,

    /// Renderer region names, one per line; defaults to the graph's regions.
    #[arg(long, value_name = "FILE")]
    regions: Option<PathBuf>,

    /// Colors in try-order.
    #[arg(long, default_value = "Red,Yellow,Blue,Green")]
    palette: Palette,

    /// How to treat one-sided adjacency entries in a graph file.
    #[arg(long, value_enum, default_value_t = Symmetry::Symmetrize)]
    symmetry: Symmetry,

    /// Abort the search after this many steps.
    #[arg(long, value_name = "N")]
    step_limit: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Count colorings (up to LIMIT) instead of printing the first one.
    #[arg(long, value_name = "LIMIT")]
    count: Option<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "map_color=info,map_coloring=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(Args::parse()) {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let graph = load(&args)?;
    let solver = Solver::new(
        &graph,
        SolverConfig {
            palette: args.palette,
            step_limit: args.step_limit,
        },
    );

    if let Some(limit) = args.count {
        let count = solver.count_solutions(Some(limit))?;
        println!("{}", count);
        return Ok(ExitCode::SUCCESS);
    }

    let coloring = match solver.solve()? {
        SolveOutcome::Solved(coloring) => coloring,
        SolveOutcome::NoSolutionFound => {
            println!("ungraphable with given palette {}", args.palette);
            return Ok(ExitCode::FAILURE);
        }
    };

    let plan = match &args.regions {
        Some(path) => {
            let names = fs::read_to_string(path)?;
            FillPlan::build(
                &coloring,
                &graph,
                names.lines().map(str::trim).filter(|line| !line.is_empty()),
            )
        }
        None => FillPlan::for_graph(&coloring, &graph),
    };

    match args.format {
        OutputFormat::Table => print!("{}", plan),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
    }
    Ok(ExitCode::SUCCESS)
}

fn load(args: &Args) -> Result<AdjacencyGraph> {
    let graph = match &args.graph {
        Some(path) => load_graph(path, args.symmetry.into())?,
        None => us_states()?,
    };
    info!("loaded {} regions", graph.len());
    Ok(graph)
}
