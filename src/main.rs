use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::debug;

use wayline::{MatrixSnapshot, RouteGraph};

/// Interactive builder for undirected weighted route networks with
/// shortest path queries.
#[derive(Debug, Parser)]
#[command(name = "wayline", version, about)]
struct Cli {
    /// Preload the sample route network before entering the command loop.
    #[arg(long)]
    demo: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

const HELP: &str = "\
Commands:
  add <name>                 add a vertex
  edge <from> <to> <weight>  connect two vertices (undirected)
  matrix                     print the adjacency matrix
  route <from> <to>          find the shortest path
  help                       show this help
  quit                       exit
";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    AddVertex(String),
    AddEdge(String, String, u64),
    Matrix,
    Route(String, String),
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();

        let command = match words.next().context("empty command")? {
            "add" => {
                let name = words.next().context("usage: add <name>")?;
                Self::AddVertex(name.to_owned())
            }
            "edge" => {
                let (Some(from), Some(to), Some(weight)) =
                    (words.next(), words.next(), words.next())
                else {
                    bail!("usage: edge <from> <to> <weight>");
                };
                let weight = weight
                    .parse()
                    .context("weight must be a non-negative integer")?;
                Self::AddEdge(from.to_owned(), to.to_owned(), weight)
            }
            "matrix" => Self::Matrix,
            "route" => {
                let (Some(from), Some(to)) = (words.next(), words.next()) else {
                    bail!("usage: route <from> <to>");
                };
                Self::Route(from.to_owned(), to.to_owned())
            }
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => bail!("unknown command `{other}`, type `help` for the command list"),
        };

        Ok(command)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let mut graph = RouteGraph::new();

    if cli.demo {
        load_demo(&mut graph)?;
        println!(
            "Loaded the demo network ({} vertices).",
            graph.vertex_count()
        );
    }

    println!("wayline — type `help` for the command list.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => run(&mut graph, command),
            Err(error) => println!("{error}"),
        }
    }

    Ok(())
}

fn run(graph: &mut RouteGraph, command: Command) {
    match command {
        Command::AddVertex(name) => {
            debug!(%name, "adding vertex");
            graph.add_vertex(name);
        }
        Command::AddEdge(from, to, weight) => {
            debug!(%from, %to, weight, "adding edge");
            if let Err(error) = graph.add_edge(&from, &to, weight) {
                println!("{error}");
            }
        }
        Command::Matrix => print!("{}", render_matrix(&graph.snapshot())),
        Command::Route(from, to) => {
            debug!(%from, %to, "querying shortest path");
            match graph.shortest_path(&from, &to) {
                Ok(route) => {
                    println!("Path: {}", route.path().join(" -> "));
                    println!("Distance: {}", route.distance());
                }
                Err(error) => println!("{error}"),
            }
        }
        Command::Help => print!("{HELP}"),
        Command::Quit => {}
    }
}

fn render_matrix(snapshot: &MatrixSnapshot) -> String {
    let width = snapshot
        .vertex_names
        .iter()
        .map(String::len)
        .chain(
            snapshot
                .rows
                .iter()
                .flatten()
                .map(|weight| weight.to_string().len()),
        )
        .max()
        .unwrap_or(1);

    let mut out = format!("{:width$}", "");

    for name in &snapshot.vertex_names {
        out.push_str(&format!(" {name:>width$}"));
    }
    out.push('\n');

    for (name, row) in snapshot.vertex_names.iter().zip(&snapshot.rows) {
        out.push_str(&format!("{name:>width$}"));
        for weight in row {
            out.push_str(&format!(" {weight:>width$}"));
        }
        out.push('\n');
    }

    out
}

/// The route network from the original assignment hand-out.
fn load_demo(graph: &mut RouteGraph) -> Result<()> {
    for name in ["L", "B", "A", "N", "G", "S", "R", "D", "M"] {
        graph.add_vertex(name);
    }

    let edges = [
        ("L", "B", 7),
        ("B", "A", 27),
        ("L", "N", 10),
        ("B", "G", 9),
        ("G", "S", 11),
        ("A", "M", 15),
        ("N", "G", 8),
        ("N", "R", 31),
        ("R", "D", 32),
        ("S", "D", 17),
        ("S", "M", 15),
        ("D", "M", 21),
    ];

    for (from, to, weight) in edges {
        graph.add_edge(from, to, weight)?;
    }

    Ok(())
}
