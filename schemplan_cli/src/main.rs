// CLI entry point for the schemplan prevalidator.
//
// Loads a schematic JSON file, interprets it through a placement rule set
// (the standard rules, or a JSON rule file), and runs both prevalidation
// passes. A schematic that fails is rejected with the offending position
// before any build-order solver would waste time on it.
//
// Usage:
//   schemplan [OPTIONS] <SCHEMATIC.json>
//     --rules <FILE>    Placement rule set JSON (default: standard rules)
//     --local-only      Run only the local support check
//
// Exit codes: 0 = schematic accepted, 1 = validation failure,
// 2 = usage or input error.

use std::process::ExitCode;

use schemplan_core::{
    RuleSet, Schematic, SchematicGraph, check_local_support, prevalidate,
};

struct Args {
    schematic_path: String,
    rules_path: Option<String>,
    local_only: bool,
}

fn main() -> ExitCode {
    let args = parse_args();

    let schematic = match load_schematic(&args.schematic_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load schematic: {e}");
            return ExitCode::from(2);
        }
    };

    let rules = match &args.rules_path {
        Some(path) => match load_rules(path) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Failed to load rule set: {e}");
                return ExitCode::from(2);
            }
        },
        None => RuleSet::default(),
    };

    let graph = SchematicGraph::new(&schematic, &rules);
    let result = if args.local_only {
        check_local_support(&graph)
    } else {
        prevalidate(&graph)
    };

    match result {
        Ok(()) => {
            let structural = schematic
                .positions()
                .filter(|&pos| {
                    rules
                        .profile(schematic.get(pos))
                        .is_some_and(|p| !p.scaffolding)
                })
                .count();
            println!(
                "OK: {}x{}x{} schematic, {structural} structural blocks, a build order exists",
                schematic.size_x, schematic.size_y, schematic.size_z
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Rejected: {e}");
            ExitCode::from(1)
        }
    }
}

fn load_schematic(path: &str) -> Result<Schematic, String> {
    let data = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    let schematic: Schematic = serde_json::from_str(&data).map_err(|e| e.to_string())?;
    if !schematic.is_well_formed() {
        return Err(format!(
            "block data does not match declared {}x{}x{} dimensions",
            schematic.size_x, schematic.size_y, schematic.size_z
        ));
    }
    Ok(schematic)
}

fn load_rules(path: &str) -> Result<RuleSet, String> {
    let data = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    RuleSet::from_json_str(&data).map_err(|e| e.to_string())
}

/// Parse command-line arguments. Uses simple `std::env::args()` matching —
/// no clap dependency.
fn parse_args() -> Args {
    let mut schematic_path = None;
    let mut rules_path = None;
    let mut local_only = false;
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--rules" => {
                i += 1;
                match args.get(i) {
                    Some(path) => rules_path = Some(path.clone()),
                    None => {
                        eprintln!("--rules requires a file path");
                        std::process::exit(2);
                    }
                }
            }
            "--local-only" => {
                local_only = true;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown option: {other}");
                print_usage();
                std::process::exit(2);
            }
            other => {
                if schematic_path.replace(other.to_string()).is_some() {
                    eprintln!("Only one schematic file may be given");
                    std::process::exit(2);
                }
            }
        }
        i += 1;
    }

    match schematic_path {
        Some(path) => Args {
            schematic_path: path,
            rules_path,
            local_only,
        },
        None => {
            eprintln!("Missing schematic file");
            print_usage();
            std::process::exit(2);
        }
    }
}

fn print_usage() {
    println!("Usage: schemplan [OPTIONS] <SCHEMATIC.json>");
    println!("  --rules <FILE>    Placement rule set JSON (default: standard rules)");
    println!("  --local-only      Run only the local support check");
}
