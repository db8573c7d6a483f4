mod args;
mod types;

use std::process::ExitCode;

use ansi_term::Colour;
use args::{AttributionArgs, InputArgs, OutputArgs};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sizemap::{Analyzer, AnalyzerOptions, ChunkSummary, OsFileSystem, ReportNode, SizeReport};
use sizemap_utils::human_size::human_size;

#[derive(Parser)]
#[command(version, about = "Explain where the bytes of a bundle come from", long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  attribution: AttributionArgs,

  #[clap(flatten)]
  output: OutputArgs,
}

struct Row<'a> {
  label: String,
  node: &'a ReportNode,
}

fn collect_rows<'a>(node: &'a ReportNode, prefix: &str, connector: &str, rows: &mut Vec<Row<'a>>) {
  let marker = if node.collapsed { " …" } else { "" };
  rows.push(Row { label: format!("{prefix}{connector}{}{marker}", node.id), node });

  let child_prefix = match connector {
    "├─ " => format!("{prefix}│  "),
    "└─ " => format!("{prefix}   "),
    _ => prefix.to_string(),
  };
  for (i, child) in node.children.iter().enumerate() {
    let connector = if i + 1 == node.children.len() { "└─ " } else { "├─ " };
    collect_rows(child, &child_prefix, connector, rows);
  }
}

fn print_report(report: &SizeReport) {
  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  if !report.ignored.is_empty() {
    println!("{} {}", Colour::Yellow.paint("Ignoring:"), report.ignored.join(", "));
  }

  for entry in &report.entries {
    let mut rows = Vec::new();
    collect_rows(&entry.root, "", "", &mut rows);

    let left = rows.iter().map(|row| row.label.chars().count()).max().unwrap_or(0);
    let kind = if entry.dynamic { "lazy entry" } else { "entry" };

    println!();
    println!(
      "{}{:left$}  {:>10} {:>10} {:>10} {:>10}",
      dim.paint(kind),
      "",
      "self",
      "total",
      "unique",
      "removed",
      left = left.saturating_sub(kind.len())
    );

    for row in rows {
      let node = row.node;
      let label = if node.ignored { dim.paint(&row.label) } else { color.paint(&row.label) };
      println!(
        "{label}{:pad$}  {:>10} {:>10} {:>10} {:>10}",
        "",
        human_size(node.self_size),
        human_size(node.total),
        human_size(node.unique),
        human_size(node.removed),
        pad = left - row.label.chars().count()
      );
    }
  }

  if report.dangling_edges > 0 {
    println!(
      "\n{} {} import edges point outside the module list",
      Colour::Yellow.paint("Note:"),
      report.dangling_edges
    );
  }
}

fn print_chunks(chunks: &[ChunkSummary]) {
  let dim = Colour::White.dimmed();
  let names = chunks
    .iter()
    .map(|chunk| chunk.chunk.clone().unwrap_or_else(|| "<no chunk>".to_string()))
    .collect::<Vec<_>>();
  let left = names.iter().map(String::len).max().unwrap_or(0);

  println!("\n{}", dim.paint("chunks"));
  for (name, chunk) in names.iter().zip(chunks) {
    println!(
      "{}{:pad$} {} {:>10}",
      Colour::Cyan.paint(name),
      "",
      dim.paint(format!("│ {:>5} modules │ size:", chunk.modules)),
      human_size(chunk.size),
      pad = left - name.len()
    );
  }
}

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .init();

  let args = Commands::parse();
  let InputArgs { cwd, stats, html, element_id } = args.input;

  let options = sizemap::normalize_options(AnalyzerOptions {
    cwd,
    stats_file: stats,
    html_file: html,
    element_id,
    ignored: args.attribution.ignore,
    max_depth: args.output.depth,
    sort: args.output.sort.map(Into::into),
    filter: args.output.filter,
  });

  let analyzer = match Analyzer::load(&OsFileSystem, &options) {
    Ok(analyzer) => analyzer,
    Err(errors) => {
      for error in &*errors {
        eprintln!("{} {error:#}", Colour::Red.paint("Error:"));
      }
      return ExitCode::FAILURE;
    }
  };

  let report = match analyzer.report(&options) {
    Ok(report) => report,
    Err(error) => {
      eprintln!("{} {error}", Colour::Red.paint("Error:"));
      return ExitCode::FAILURE;
    }
  };

  if args.output.json {
    match serde_json::to_string_pretty(&report) {
      Ok(json) => println!("{json}"),
      Err(error) => {
        eprintln!("{} {error}", Colour::Red.paint("Error:"));
        return ExitCode::FAILURE;
      }
    }
  } else {
    print_report(&report);
    if args.output.chunks {
      print_chunks(&report.chunks);
    }
  }

  ExitCode::SUCCESS
}
