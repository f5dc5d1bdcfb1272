// src/report/mod.rs
//! Terminal and JSON rendering of build, eval, and explore results.

use colored::Colorize;
use serde::Serialize;

use crate::error::Result;
use crate::eval::EvalReport;
use crate::explore::ExploreReport;
use crate::graph::{EdgeClass, EdgeRecord, Graph};

/// The built graph, summarized for the output consumer.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub node_count: usize,
    pub edge_count: usize,
    pub cycle_edges: usize,
    pub shortcut_edges: usize,
    pub max_out_degree: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strongly_connected: Option<bool>,
    pub edges: Vec<EdgeRecord>,
}

impl BuildReport {
    #[must_use]
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            cycle_edges: graph.count_class(EdgeClass::Cycle),
            shortcut_edges: graph.count_class(EdgeClass::Shortcut),
            max_out_degree: graph.max_out_degree(),
            strongly_connected: None,
            edges: graph.edge_list(),
        }
    }

    #[must_use]
    pub fn with_verification(mut self, ok: bool) -> Self {
        self.strongly_connected = Some(ok);
        self
    }
}

/// Pretty JSON for any report struct.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn print_build(report: &BuildReport) {
    for edge in &report.edges {
        let class = match edge.class {
            EdgeClass::Cycle => "cycle".dimmed(),
            EdgeClass::Shortcut => "shortcut".cyan(),
        };
        println!(
            "{:>6} -> {:<6} {:<10} w={}",
            edge.source, edge.target, class, edge.weight
        );
    }

    println!(
        "{} {} nodes, {} edges ({} cycle, {} shortcut), max out-degree {}.",
        "OK".green().bold(),
        report.node_count,
        report.edge_count,
        report.cycle_edges,
        report.shortcut_edges,
        report.max_out_degree
    );

    match report.strongly_connected {
        Some(true) => println!("{} strongly connected, budgets hold.", "VERIFIED".green().bold()),
        Some(false) => println!("{} constraint check failed.", "FAILED".red().bold()),
        None => {}
    }
}

pub fn print_eval(report: &EvalReport) {
    if report.invalid > 0 {
        println!(
            "{} excluded {} invalid {} from aggregates.",
            "~".yellow().bold(),
            report.invalid,
            pluralize("query", report.invalid)
        );
    }

    let median = report
        .median_length
        .map_or_else(|| "-".to_string(), |m| format!("{m}"));
    let rate = report.success_rate * 100.0;

    let summary = format!(
        "routed {} of {} queries within {} hops (median {median}, success {rate:.1}%).",
        report.found, report.evaluated, report.hop_budget
    );

    if report.evaluated > 0 && report.found == report.evaluated {
        println!("{} {summary}", "OK".green().bold());
    } else {
        println!("{} {summary}", "~".yellow().bold());
    }
}

pub fn print_explore(report: &ExploreReport) {
    for c in &report.candidates {
        let median = c
            .median_length
            .map_or_else(|| "-".to_string(), |m| format!("{m}"));
        let line = format!(
            "{:<12} {} edges, median {median}, success {:.1}% ({} of {})",
            c.strategy.label(),
            c.edge_count,
            c.success_rate * 100.0,
            c.found,
            c.evaluated
        );
        if c.strategy == report.best {
            println!("{} {}", "*".green().bold(), line.green());
        } else {
            println!("  {line}");
        }
    }
    println!(
        "{} best ordering: {}.",
        "OK".green().bold(),
        report.best.label().bold()
    );
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
