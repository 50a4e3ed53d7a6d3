//! Command-line front end for browsing the bilingual story catalog.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

use parallel_reader::assets::{HttpProbe, audio_candidates, image_candidates, resolve_asset};
use parallel_reader::catalog::{
    StoryFilter, find_story, load_catalog, select_stories, shuffle_stories,
};
use parallel_reader::config::SiteConfig;
use parallel_reader::models::StoryRecord;
use parallel_reader::rating::submit_rating;
use parallel_reader::segment::pair_sentences;

#[derive(Parser)]
#[command(
    name = "stories",
    about = "Browse a bilingual story catalog from the terminal",
    version
)]
struct Cli {
    /// Directory searched for stories.config.json.
    #[arg(long, default_value = ".")]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List stories, optionally filtered by genre and CEFR level.
    List {
        /// Only include stories with this genre.
        #[arg(long)]
        genre: Option<String>,
        /// Only include stories with this CEFR level.
        #[arg(long)]
        level: Option<String>,
        /// Keep catalog order instead of shuffling the listing.
        #[arg(long)]
        no_shuffle: bool,
        /// Shuffle seed, for reproducible listings.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show a story as aligned sentence pairs with any resolved media assets.
    Show {
        /// Source-language title of the story.
        title: String,
    },
    /// Submit a star rating (1-5) for a story.
    Rate {
        /// Source-language title of the story.
        title: String,
        /// Number of stars.
        stars: u8,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = SiteConfig::discover(&cli.config_dir);

    match cli.command {
        Command::List {
            genre,
            level,
            no_shuffle,
            seed,
        } => run_list(&config, genre, level, no_shuffle, seed).await,
        Command::Show { title } => run_show(&config, &title).await,
        Command::Rate { title, stars } => run_rate(&config, &title, stars).await,
    }
}

async fn run_list(
    config: &SiteConfig,
    genre: Option<String>,
    level: Option<String>,
    no_shuffle: bool,
    seed: Option<u64>,
) -> Result<()> {
    let stories = load_catalog(config).await?;
    let filter = StoryFilter::new(genre.as_deref(), level.as_deref());
    let mut listing = select_stories(&stories, &filter);

    if !no_shuffle {
        match seed {
            Some(seed) => shuffle_stories(&mut listing, &mut StdRng::seed_from_u64(seed)),
            None => shuffle_stories(&mut listing, &mut rand::thread_rng()),
        }
    }

    if listing.is_empty() {
        println!("No stories match the current filters.");
        return Ok(());
    }

    for story in &listing {
        print_listing_line(story);
    }
    Ok(())
}

fn print_listing_line(story: &StoryRecord) {
    if story.has_distinct_subtitle() {
        println!(
            "{:<4} {:<14} {} ({})",
            story.cefr(),
            story.genre,
            story.title_source,
            story.title_target
        );
    } else {
        println!(
            "{:<4} {:<14} {}",
            story.cefr(),
            story.genre,
            story.title_source
        );
    }
}

async fn run_show(config: &SiteConfig, title: &str) -> Result<()> {
    let stories = load_catalog(config).await?;
    let story = find_story(&stories, title)
        .ok_or_else(|| anyhow!("no story found with the title: {title}"))?;

    println!("{} [{} / {}]", story.title_source, story.cefr(), story.genre);
    if story.has_distinct_subtitle() {
        println!("{}", story.title_target);
    }

    let probe = HttpProbe::new();
    let audio = resolve_asset(&probe, &audio_candidates(config, &story.title_target)).await;
    let image = resolve_asset(&probe, &image_candidates(config, &story.title_target)).await;

    if let Some(url) = audio {
        println!("Audio: {url}");
    }
    if let Some(url) = image {
        println!("Image: {url}");
    }
    println!();

    for pair in pair_sentences(&story.source_text, &story.target_text) {
        println!("{}", pair.source);
        if !pair.target.is_empty() {
            println!("    {}", pair.target);
        }
        println!();
    }
    Ok(())
}

async fn run_rate(config: &SiteConfig, title: &str, stars: u8) -> Result<()> {
    let stories = load_catalog(config).await?;
    if find_story(&stories, title).is_none() {
        return Err(anyhow!("no story found with the title: {title}"));
    }

    let client = reqwest::Client::new();
    submit_rating(config, &client, title, stars).await?;
    println!("Thank you for rating this story!");
    Ok(())
}
