use clap::{Parser, Subcommand};
use project_gallery::gallery::Gallery;
use project_gallery::generate::{self, GalleryOutcome};
use project_gallery::script::{self, Step};
use project_gallery::{config, output, projects};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "project-gallery")]
#[command(about = "Project gallery with per-card slideshows")]
#[command(long_about = "\
Project gallery with per-card slideshows

Reads a JSON project list and renders one card per project, newest first.
Each card shows the project's images as a slideshow with arrows, dots and
autoplay while the pointer is over it.

Project list format:

  [
    {
      \"id\": \"harbor-lights\",
      \"title\": \"Harbor Lights\",
      \"link\": \"https://example.com/harbor\",   (optional)
      \"date\": \"2024-03-15\",
      \"images\": [\"img/harbor/1.jpg\", \"img/harbor/2.jpg\"]
    }
  ]

Run 'project-gallery gen-config' to generate a documented gallery.toml.")]
#[command(version)]
struct Cli {
    /// Project list
    #[arg(long, default_value = "projects.json", global = true)]
    projects: PathBuf,

    /// Gallery config file (optional)
    #[arg(long, default_value = "gallery.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the gallery page
    Build {
        /// Output directory
        #[arg(long = "output", default_value = "dist")]
        output_dir: PathBuf,
    },
    /// Validate the project list and print the card inventory
    Check,
    /// Replay an interaction script against one card's slideshow
    Simulate {
        /// Project id of the card to drive
        #[arg(long)]
        project: String,
        /// Steps: enter, leave, next, prev, dot <i>, wait <ms>
        #[arg(long)]
        script: String,
    },
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build { output_dir } => {
            let gallery_config = config::load_config(&cli.config)?;
            let outcome = generate::generate(&cli.projects, &output_dir, &gallery_config)?;
            output::print_build_output(&outcome, &output_dir);
            if let GalleryOutcome::Unavailable { reason } = outcome {
                return Err(reason.into());
            }
        }
        Command::Check => {
            let mut projects = projects::load_projects(&cli.projects)?;
            projects::sort_newest_first(&mut projects);
            output::print_check_output(&projects);
        }
        Command::Simulate { project, script } => {
            let gallery_config = config::load_config(&cli.config)?;
            let steps = script::parse_script(&script)?;

            let mut projects = projects::load_projects(&cli.projects)?;
            projects::sort_newest_first(&mut projects);
            let rendered = generate::render_gallery(&projects);
            let mut gallery = Gallery::attach(&rendered.cards, &projects, gallery_config.slideshow);
            let card = gallery.card_for_project(&project)?;

            for step in steps {
                match step {
                    Step::Interact(interaction) => {
                        gallery.interact(card, interaction)?;
                    }
                    Step::Wait(ms) => gallery.advance_by(ms),
                }
            }
            let events = gallery.take_events();
            if let Some(slideshow) = gallery.slideshow(card) {
                output::print_simulate_output(&events, slideshow);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
