//! Example: Generate deployment YAML with Google Gemini
//!
//! Prerequisites:
//! - Set the GEMINI_API_KEY environment variable
//!
//! Run with:
//! ```bash
//! export GEMINI_API_KEY=your-api-key
//! cargo run -p yamlgen-llm --example generate_with_gemini
//! ```

use std::env;
use std::sync::Arc;
use yamlgen_llm::{GeminiProvider, YamlGenerator, YamlGeneratorConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Deployment YAML Generator (Gemini) ===\n");

    let api_key = env::var("GEMINI_API_KEY").unwrap_or_else(|_| {
        eprintln!("Error: GEMINI_API_KEY environment variable not set");
        std::process::exit(1);
    });

    let provider = Arc::new(GeminiProvider::new(api_key));
    let generator = YamlGenerator::new(provider, YamlGeneratorConfig::new("gemini-pro"));

    let requirements = [
        "Node.js app with 2 replicas",
        "Python web application with a PostgreSQL 13 database and 10GB storage",
        "Static site behind a CDN with autoscaling between 1 and 3 instances",
    ];

    for (i, requirement) in requirements.iter().enumerate() {
        println!("Requirement {}: {}\n", i + 1, requirement);

        match generator.generate(requirement).await {
            Ok(yaml) => {
                println!("{}", yaml);
                println!("\n{}\n", "-".repeat(80));
            }
            Err(e) => eprintln!("Generation failed: {}\n", e),
        }
    }

    Ok(())
}
