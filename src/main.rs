use clap::{Parser, Subcommand};
use env_logger::{Builder, Env};
use gallery_lightbox::{config, dataset, output, render, site};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gallery-lightbox")]
#[command(about = "Inspect and render gallery payloads for a static site")]
#[command(long_about = "\
Inspect and render gallery payloads for a static site

Gallery pages embed their images as JSON:

  <div class=\"js-gallery-grid\"></div>
  <script type=\"application/json\" id=\"gallery-data\">
    { \"title\": \"Weddings\",
      \"items\": [ { \"full\": \"img/01.jpg\", \"thumb\": \"img/thumbs/01.jpg\", \"alt\": \"…\" } ] }
  </script>

Item resolution:
  Full image:  full → src
  Thumbnail:   thumb → full image
  Items with no usable URL are dropped.

Run 'gallery-lightbox gen-config' to generate a documented gallery.toml.")]
#[command(version)]
struct Cli {
    /// Configuration file
    #[arg(long, default_value = "gallery.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate every embedded gallery payload in a built site
    Check {
        /// Site root to scan for HTML pages
        #[arg(long, default_value = ".")]
        site: PathBuf,
    },
    /// Print the grid and lightbox markup for a payload file
    Render {
        /// JSON payload file
        payload: PathBuf,
        /// Print the resolved payload as JSON instead of markup
        #[arg(long)]
        normalized: bool,
    },
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    Builder::from_env(Env::default().default_filter_or("gallery_lightbox=info")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check { site: root } => {
            let config = config::load_config(&cli.config)?;
            println!("==> Checking {}", root.display());
            let pages = site::scan_site(&root, &config.default_title)?;
            output::print_check_output(&pages);
            let invalid = output::invalid_count(&pages);
            if invalid > 0 {
                return Err(format!("{invalid} gallery payload(s) are invalid").into());
            }
            println!("==> Galleries are valid");
        }
        Command::Render {
            payload,
            normalized,
        } => {
            let config = config::load_config(&cli.config)?;
            let content = std::fs::read_to_string(&payload)?;
            let loaded = dataset::load_dataset(&content, &config.default_title)?;
            if normalized {
                println!("{}", serde_json::to_string_pretty(&loaded.dataset)?);
                return Ok(());
            }
            let grid = render::render_grid(&loaded.dataset);
            println!("{}", output::format_render_summary(&grid));
            println!("{}", render::grid_markup(&grid).into_string());
            println!(
                "{}",
                render::lightbox_markup(&config.labels, &config.default_title).into_string()
            );
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
