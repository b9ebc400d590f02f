use clap::{Parser, Subcommand};
use craftology::catalog::{self, Category, TagFilter};
use craftology::media::{self, ProductMedia};
use craftology::{config, output, render};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "craftology")]
#[command(about = "Media resolution and catalog tools for the Craftology storefront")]
#[command(long_about = "\
Media resolution and catalog tools for the Craftology storefront

Each product shows exactly one kind of media, first available wins:
  Video:   video_link  → Drive preview, YouTube embed, or the link as-is
  Social:  insta_reel  → Instagram embed (query stripped, /embed appended)
  Images:  image, image2, image3 → Drive thumbnails; fallback image when none

Catalog files are saved responses from the backend category endpoints
(<api.base_url>/envelope, /coin, /gaddi, /resin, /scrapbook). Bare arrays
and {\"data\": [...]}, {\"items\": [...]}, {\"<category>s\": [...]} wrappers
are all accepted.

Set RUST_LOG=debug to see which links could not be rewritten.

`render` writes one file per page into the output directory, named
<category>-<n>.html, which is what the Previous/Next links point at.

Run 'craftology gen-config' to generate a documented store.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing store.toml
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Clone)]
struct CatalogArgs {
    /// Saved backend response (JSON)
    catalog: PathBuf,

    /// Product category
    #[arg(long, short)]
    category: Category,

    /// Occasion or design tag to filter by (repeatable; "All" clears)
    #[arg(long = "tag")]
    tags: Vec<String>,
}

impl CatalogArgs {
    fn load(&self) -> Result<Vec<catalog::Product>, catalog::CatalogError> {
        catalog::load_products(&self.catalog, self.category)
    }

    fn filter(&self) -> TagFilter {
        TagFilter::from_tags(self.tags.iter().map(String::as_str))
    }
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a product's media fields into the URL to display
    Resolve {
        /// Hosted video link (Drive, YouTube, or direct)
        #[arg(long)]
        video: Option<String>,
        /// Instagram reel link
        #[arg(long)]
        insta: Option<String>,
        /// Image link, in display order (repeatable)
        #[arg(long = "image")]
        images: Vec<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List one page of a category with resolved media and order links
    List {
        #[command(flatten)]
        catalog: CatalogArgs,
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Write every page of a category as static HTML (<slug>-<n>.html)
    Render {
        #[command(flatten)]
        catalog: CatalogArgs,
        /// Output directory
        #[arg(long, short, default_value = "dist")]
        output: PathBuf,
    },
    /// List upcoming workshops with booking links, optionally as HTML
    Workshop {
        /// Saved workshop response (JSON)
        file: PathBuf,
        /// Also write the workshop page to this HTML file
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print a stock store.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Resolve {
            video,
            insta,
            images,
            json,
        } => {
            let store = config::load_config(&cli.config)?;
            let resolved = media::resolve(&ProductMedia {
                video_link: video,
                insta_reel: insta,
                images,
                fallback_image: store.fallback_image,
            });
            if json {
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            } else {
                output::print_resolved(&resolved);
            }
        }
        Command::List { catalog: args, page } => {
            let store = config::load_config(&cli.config)?;
            let products = args.load()?;
            let matching = args.filter().apply(&products);
            let per_page = store.catalog.items_per_page.get(args.category);
            let page = catalog::paginate(&matching, per_page, page);
            output::print_listing(args.category, &page, matching.len(), &store);
        }
        Command::Render {
            catalog: args,
            output: out_dir,
        } => {
            let store = config::load_config(&cli.config)?;
            let products = args.load()?;
            let matching = args.filter().apply(&products);
            let written = render::write_catalog(&out_dir, args.category, &matching, &store)?;
            for path in &written {
                println!("==> Wrote {}", path.display());
            }
        }
        Command::Workshop { file, output: out_path } => {
            let store = config::load_config(&cli.config)?;
            let workshops = catalog::load_workshops(&file)?;
            output::print_workshops(&workshops, &store);
            if let Some(path) = out_path {
                render::write_workshop_page(&path, &workshops, &store)?;
                println!("==> Wrote {}", path.display());
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
