//! Maintainer tool for the built-in quirk descriptors.
//!
//! Usage:
//!   cargo run --bin quirk-inspect -- list
//!   cargo run --bin quirk-inspect -- show bosch.rbsh_rth0_zb_eu [--json]
//!   cargo run --bin quirk-inspect -- match device.json
//!   cargo run --bin quirk-inspect -- check

use clap::{Parser, Subcommand};
use log::error;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use zigbee_quirks::quirk::{ClusterRef, Quirk};
use zigbee_quirks::zcl::clusters;
use zigbee_quirks::{DiscoveredDevice, QuirkRegistry, Result};

#[derive(Parser)]
#[command(name = "quirk-inspect")]
#[command(about = "Inspect and verify the built-in Zigbee device quirks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in quirks
    List,
    /// Show one quirk's signature, replacement, and attribute tables
    Show {
        /// Quirk name as printed by `list`
        name: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Match a discovered-device JSON dump against the built-in quirks
    Match {
        /// Path to the device dump
        device: PathBuf,
    },
    /// Validate every built-in quirk
    Check,
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn cluster_list(ids: &[u16]) -> String {
    ids.iter()
        .map(|id| format!("0x{id:04X} ({})", clusters::name(*id)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn cluster_ref_list(refs: &[ClusterRef]) -> String {
    refs.iter()
        .map(|cluster| match cluster {
            ClusterRef::Standard(id) => format!("0x{id:04X} ({})", clusters::name(*id)),
            ClusterRef::Extended(ext) => format!("0x{:04X} ({})", ext.cluster_id(), ext.name),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_quirk(quirk: &Quirk) {
    println!("{}", quirk.name);
    for (manufacturer, model) in quirk.signature.models {
        println!("  model: {manufacturer} / {model}");
    }

    println!("  signature:");
    for (endpoint, sig) in quirk.signature.endpoints {
        println!(
            "    endpoint {endpoint}: profile 0x{:04X}, device type 0x{:04X}",
            sig.profile_id, sig.device_type
        );
        println!("      input:  {}", cluster_list(sig.input_clusters));
        println!("      output: {}", cluster_list(sig.output_clusters));
    }

    println!("  replacement:");
    for (endpoint, repl) in quirk.replacement {
        println!("    endpoint {endpoint}:");
        println!("      input:  {}", cluster_ref_list(repl.input_clusters));
        println!("      output: {}", cluster_ref_list(repl.output_clusters));

        for cluster in repl.input_clusters.iter().chain(repl.output_clusters) {
            let ClusterRef::Extended(ext) = cluster else {
                continue;
            };
            println!(
                "      {} extends {} with {} attributes:",
                ext.name,
                ext.base.name,
                ext.extra.len()
            );
            for attr in ext.extra {
                println!("        0x{:04X} {} ({})", attr.id, attr.name, attr.ty);
            }
        }
    }
}

fn quirk_json(quirk: &Quirk) -> serde_json::Value {
    let endpoints: Vec<_> = quirk
        .signature
        .endpoints
        .iter()
        .map(|(endpoint, sig)| {
            json!({
                "endpoint": endpoint,
                "profile_id": sig.profile_id,
                "device_type": sig.device_type,
                "input_clusters": sig.input_clusters,
                "output_clusters": sig.output_clusters,
            })
        })
        .collect();

    let replacement: Vec<_> = quirk
        .replacement
        .iter()
        .map(|(endpoint, repl)| {
            let refs = |refs: &[ClusterRef]| -> Vec<serde_json::Value> {
                refs.iter()
                    .map(|cluster| match cluster {
                        ClusterRef::Standard(id) => json!({ "cluster_id": id }),
                        ClusterRef::Extended(ext) => json!({
                            "cluster_id": ext.cluster_id(),
                            "extension": ext.name,
                            "attributes": ext.extra.iter().map(|attr| json!({
                                "id": attr.id,
                                "name": attr.name,
                                "type": attr.ty.to_string(),
                                "manufacturer_specific": attr.manufacturer_specific,
                            })).collect::<Vec<_>>(),
                        }),
                    })
                    .collect()
            };
            json!({
                "endpoint": endpoint,
                "input_clusters": refs(repl.input_clusters),
                "output_clusters": refs(repl.output_clusters),
            })
        })
        .collect();

    json!({
        "name": quirk.name,
        "models": quirk.signature.models,
        "signature": endpoints,
        "replacement": replacement,
    })
}

fn run(cli: Cli) -> Result<ExitCode> {
    let registry = QuirkRegistry::builtin();

    match cli.command {
        Commands::List => {
            for quirk in registry.quirks() {
                let models: Vec<_> = quirk
                    .signature
                    .models
                    .iter()
                    .map(|(manufacturer, model)| format!("{manufacturer}/{model}"))
                    .collect();
                println!("{}  [{}]", quirk.name, models.join(", "));
            }
        }

        Commands::Show { name, json } => {
            let Some(quirk) = registry.get(&name) else {
                error!("No quirk named {name}");
                return Ok(ExitCode::FAILURE);
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&quirk_json(quirk))?);
            } else {
                print_quirk(quirk);
            }
        }

        Commands::Match { device } => {
            let device: DiscoveredDevice = serde_json::from_str(&fs::read_to_string(device)?)?;
            let Some(quirk) = registry.match_device(&device) else {
                println!("No quirk matches this device");
                return Ok(ExitCode::FAILURE);
            };
            println!("Matched {}", quirk.name);
            let quirked = quirk.apply(&device)?;
            for (endpoint, ep) in &quirked.endpoints {
                println!(
                    "  endpoint {endpoint}: profile 0x{:04X}, device type 0x{:04X}",
                    ep.profile_id, ep.device_type
                );
                println!("    input:  {}", cluster_ref_list(&ep.input_clusters));
                println!("    output: {}", cluster_ref_list(&ep.output_clusters));
            }
        }

        Commands::Check => {
            for quirk in registry.quirks() {
                quirk.validate()?;
                println!("{}: ok", quirk.name);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    init_logger();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
