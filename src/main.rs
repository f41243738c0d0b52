// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Demo binary: wires a small sample processor catalogue through the
//! dependency graph builder, attribute filler, and execution walker end to
//! end, and prints the resolved external-name values.
//!
//! Usage: `mapprint-planner-demo [config.yaml]`
//!
//! With no argument, runs against built-in defaults and a `data:` URI so the
//! demo needs no filesystem or network setup.

use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use mapprint_planner::config::{self, Config};
use mapprint_planner::descriptors::TypeTag;
use mapprint_planner::engine;
use mapprint_planner::fetch::{ConfigFileStore, Configuration, RetryingHttpResolver};
use mapprint_planner::graph::{fill_attributes, type_catalogue, AttributeCatalogue, AttributeEntry, DependencyGraphBuilder};
use mapprint_planner::processor::SharedProcessor;
use mapprint_planner::processors::{HttpResourceProcessor, LegendProcessor, MapDataProcessor, TemplateBoundProcessor};
use mapprint_planner::well_known;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => config::load_and_validate(Path::new(&path))?,
        None => Config::default(),
    };

    let mut attributes: AttributeCatalogue = config.attribute_catalogue();
    attributes.entry("uri".to_string()).or_insert_with(|| {
        AttributeEntry::new(json!("data:text/plain;base64,SGVsbG8="), TypeTag::named("String"))
    });
    attributes
        .entry(well_known::TEMPLATE.to_string())
        .or_insert_with(|| AttributeEntry::new(json!("layout.html"), TypeTag::Any));

    let config_store: Arc<dyn Configuration> = Arc::new(ConfigFileStore::new(config.config_file_root.clone()));
    let http = Arc::new(RetryingHttpResolver::new(
        config.http.max_attempts,
        config.http.retry_interval(),
    ));

    let processors: Vec<SharedProcessor> = vec![
        Arc::new(MapDataProcessor),
        Arc::new(LegendProcessor),
        Arc::new(HttpResourceProcessor::new(config_store, http)),
        Arc::new(TemplateBoundProcessor),
    ];

    let graph = DependencyGraphBuilder::new(type_catalogue(&attributes)).build(&processors)?;
    let bound = fill_attributes(&graph, &attributes)?;
    let report = engine::run(&graph, &bound).await?;

    println!("Resolved {} processor(s) in topological order:", graph.nodes().len());
    let mut names: Vec<&String> = report.values_by_external_name.keys().collect();
    names.sort();
    for name in names {
        println!("  {name} = {}", report.values_by_external_name[name]);
    }

    Ok(())
}
