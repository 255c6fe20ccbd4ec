//! # CalcHub CLI Application
//!
//! Terminal front-end for the calculator catalog. Lists the registered
//! calculators, prompts for the generic input fields, and prints the run
//! outcome both human-readable and as JSON.

use std::io::{self, BufRead, Write};

use hub_core::contracts::Inputs;
use hub_core::engine::{run, Verdict};
use hub_core::registry::{Category, Registry};

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

/// Prompt for an optional numeric field; blank leaves it unset.
fn prompt_optional_f64(prompt: &str) -> Option<f64> {
    let raw = prompt_line(prompt);
    if raw.is_empty() {
        return None;
    }
    raw.parse().ok()
}

fn print_catalog(registry: &Registry) {
    for category in Category::ALL {
        let in_category: Vec<_> = registry
            .list()
            .into_iter()
            .filter(|descriptor| descriptor.category == category)
            .collect();
        if in_category.is_empty() {
            continue;
        }

        println!("{}", category.display_name());
        for descriptor in in_category {
            println!("  {:<28} {}", descriptor.id, descriptor.title);
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let registry = match Registry::with_catalog() {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("Failed to initialize calculator catalog: {err}");
            std::process::exit(1);
        }
    };

    println!("CalcHub CLI - Calculator Catalog");
    println!("================================");
    println!();
    println!("{} calculators registered", registry.len());
    println!();
    print_catalog(&registry);
    println!();

    loop {
        let id = prompt_line("Calculator id (blank to quit): ");
        if id.is_empty() {
            break;
        }

        let descriptor = match registry.get(&id) {
            Ok(descriptor) => descriptor,
            Err(err) => {
                println!("{err}");
                println!();
                continue;
            }
        };

        println!();
        println!("{} - {}", descriptor.title, descriptor.description);
        println!("Leave a field blank to skip it.");

        let mut inputs = Inputs::new();
        inputs.value = prompt_optional_f64("  value:    ");
        inputs.rate = prompt_optional_f64("  rate:     ");
        inputs.amount = prompt_optional_f64("  amount:   ");
        inputs.quantity = prompt_optional_f64("  quantity: ");
        println!();

        match run(&registry, &id, &inputs) {
            Ok(Verdict::Computed(output)) => {
                println!("Result:         {:.4}", output.results.result);
                if let Some(analysis) = &output.results.analysis {
                    println!("Analysis:       {analysis}");
                }
                println!("Recommendation: {}", output.analysis.recommendation);
                println!(
                    "Risk level:     {}",
                    output.analysis.risk_level.display_name()
                );
                match serde_json::to_string_pretty(&output) {
                    Ok(json) => println!("\n{json}"),
                    Err(err) => eprintln!("could not serialize output: {err}"),
                }
            }
            Ok(Verdict::Invalid { errors }) => {
                println!("Inputs rejected:");
                for error in errors {
                    println!("  {}: {}", error.field, error.message);
                }
            }
            Err(err) => println!("{err}"),
        }
        println!();
    }
}
