use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spdlog::{info, warn};

use blogpress::logger::configure_logger;
use blogpress::post_list::PostList;
use blogpress::PostRenderer;

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "blogpress.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Renders the post listing as JSON
    List,
    /// Renders a single post as JSON
    Show {
        /// Post title, the file name without `.md`
        title: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = open_config(args.config_path.map(PathBuf::from))?;

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    info!("Reading posts from {}", config.paths.posts_dir.display());
    let post_list = PostList::new(&config.paths.posts_dir);
    let renderer = PostRenderer::new(config.render);

    let json = match args.command {
        Command::List => {
            let sources = post_list.load_all()
                .with_context(|| format!("Listing posts in {}", post_list.root_dir.display()))?;
            serde_json::to_string_pretty(&renderer.render_listing(&sources))?
        }
        Command::Show { title } => {
            let source = post_list.load(&title)
                .with_context(|| format!("Loading post '{}'", title))?;
            serde_json::to_string_pretty(&renderer.render_single_post(&source)?)?
        }
    };

    println!("{}", json);
    Ok(())
}
