use brochure::{config, generate, output, page};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brochure")]
#[command(about = "Single-page site generator for small-business brochure sites")]
#[command(long_about = "\
Single-page site generator for small-business brochure sites

One config.json document describes the business; 'brochure render' turns it
into a complete index.html with theme colors, services, opening hours, a
photo gallery with lightbox, testimonials, and contact details.

Config structure (all sections optional except businessName):

  {
    \"businessName\": \"Rosie's Bakery\",
    \"tagline\": \"Fresh bread, every morning\",
    \"theme\": { \"primaryColor\": \"#8b4513\", ... },
    \"about\": { \"title\": \"...\", \"description\": \"...\" },
    \"services\": [ { \"icon\": \"🍞\", \"name\": \"...\", \"description\": \"...\" } ],
    \"hours\": { \"monday\": \"7am - 5pm\", ... },
    \"gallery\": { \"images\": [ { \"url\": \"...\", \"caption\": \"...\" } ] },
    \"testimonials\": [ { \"text\": \"...\", \"name\": \"...\", \"rating\": 5 } ],
    \"address\": { ... }, \"phone\": \"...\", \"email\": \"...\",
    \"socialMedia\": { \"facebook\": \"...\", ... }
  }

A missing section leaves its page region unpopulated; it is never an error.
A config that fails to load entirely still renders the bare skeleton page.

Run 'brochure gen-config' to print a complete example config.json.")]
#[command(version)]
struct Cli {
    /// Path to the site configuration document
    #[arg(long, default_value = "config.json", global = true)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the site into the output directory
    Render,
    /// Validate the config and show the section inventory without writing
    Check,
    /// Print a complete example config.json with all sections
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Render => {
            let summary = generate::generate(&cli.config, &cli.output)?;
            output::print_render_output(&summary);
        }
        Command::Check => {
            println!("==> Checking {}", cli.config.display());
            let config = config::load_config(&cli.config)?;
            let mut skeleton = page::Skeleton::full();
            let report = page::populate(&config, &mut skeleton, &page::RenderContext::now());
            output::print_report(&report);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            println!("{}", config::sample_config_json());
        }
    }

    Ok(())
}
