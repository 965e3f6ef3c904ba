//! `providers` command implementation.

use anyhow::{Context, Result};
use contracts::MessageFactory;
use message_factory::loaded_modules;
use serde::Serialize;
use tracing::info;

use super::build_factory;
use crate::cli::ProvidersArgs;

#[derive(Serialize)]
struct ProvidersInfo {
    begin_strings: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    modules: Vec<ModuleInfo>,
}

#[derive(Serialize)]
struct ModuleInfo {
    name: String,
    exports: Vec<String>,
}

/// Execute the `providers` command
pub fn run_providers(args: &ProvidersArgs) -> Result<()> {
    info!(builtin = args.builtin, "Listing message factory providers");

    let factory = build_factory(args.builtin);
    let modules = if args.builtin {
        Vec::new()
    } else {
        loaded_modules()
            .iter()
            .map(|module| ModuleInfo {
                name: module.name().to_string(),
                exports: module
                    .exports()
                    .iter()
                    .map(|export| export.type_name().to_string())
                    .collect(),
            })
            .collect()
    };
    let providers = ProvidersInfo {
        begin_strings: factory.supported_begin_strings(),
        modules,
    };

    if args.json {
        let json = serde_json::to_string_pretty(&providers)
            .context("Failed to serialize provider list")?;
        println!("{}", json);
    } else {
        print_providers(&providers);
    }

    Ok(())
}

fn print_providers(providers: &ProvidersInfo) {
    if providers.begin_strings.is_empty() {
        println!("No message factory providers found");
        return;
    }

    println!("Begin strings ({}):", providers.begin_strings.len());
    for begin_string in &providers.begin_strings {
        println!("  - {}", begin_string);
    }

    if !providers.modules.is_empty() {
        println!("\nModules:");
        for module in &providers.modules {
            println!("  {} ({} exports)", module.name, module.exports.len());
        }
    }
}
