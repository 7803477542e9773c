mod config;
mod error;
mod filters;
mod models;
mod session;
mod sources;

use clap::{Parser, ValueEnum};
use config::BrowseConfig;
use session::{BrowseSession, FilterControl};
use sources::{JsonFileSource, ListingSource, MockListingSource, RemoteListingSource};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum SourceKind {
    /// Built-in mock listings
    #[default]
    Mock,
    /// JSON array on disk (--path)
    File,
    /// JSON array served over HTTP (--url)
    Url,
}

/// Tri-state radio: no preference, yes, no
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum Choice {
    #[default]
    Any,
    Yes,
    No,
}

impl Choice {
    fn as_option(self) -> Option<bool> {
        match self {
            Choice::Any => None,
            Choice::Yes => Some(true),
            Choice::No => Some(false),
        }
    }
}

/// Browse student housing listings by text query and house rules
#[derive(Parser, Debug)]
#[command(name = "dorm-finder", version)]
struct Cli {
    /// Where the listing collection comes from
    #[arg(long, value_enum, default_value_t)]
    source: SourceKind,

    /// Listings file for `--source file`
    #[arg(long)]
    path: Option<PathBuf>,

    /// Store URL for `--source url`
    #[arg(long)]
    url: Option<String>,

    /// Area or school to search for, e.g. Manila or UP
    #[arg(short, long, default_value = "")]
    query: String,

    /// Visitors policy
    #[arg(long, value_enum, default_value_t)]
    visitors: Choice,

    /// Curfew policy
    #[arg(long, value_enum, default_value_t)]
    curfew: Choice,

    /// Highest monthly price
    #[arg(long)]
    max_price: Option<String>,

    /// Only listings accepting roommates
    #[arg(long)]
    roommates: bool,

    /// Gender policy: Male, Female or All
    #[arg(long)]
    gender: Option<String>,

    /// Required amenity, repeat for several
    #[arg(short, long = "amenity")]
    amenities: Vec<String>,

    /// JSON browse config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the matching listings to this JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!("🏠 Dorm Finder - student housing browser");

    let config = match &cli.config {
        Some(path) => BrowseConfig::from_file(path).await?,
        None => BrowseConfig::default(),
    };

    let source: Box<dyn ListingSource> = match cli.source {
        SourceKind::Mock => Box::new(MockListingSource::new()),
        SourceKind::File => {
            let path = cli
                .path
                .clone()
                .ok_or_else(|| anyhow::anyhow!("--path is required with --source file"))?;
            Box::new(JsonFileSource::new(path))
        }
        SourceKind::Url => {
            let url = cli
                .url
                .clone()
                .ok_or_else(|| anyhow::anyhow!("--url is required with --source url"))?;
            Box::new(RemoteListingSource::new(url)?)
        }
    };

    let listings = source.load().await?;
    info!("Loaded {} listings from {}", listings.len(), source.source_name());

    let currency = config.currency_symbol.clone();
    let mut session = BrowseSession::new(listings, config);
    session.search(&cli.query);

    session.apply(FilterControl::Visitors(cli.visitors.as_option()))?;
    session.apply(FilterControl::Curfew(cli.curfew.as_option()))?;
    session.apply(FilterControl::Roommates(cli.roommates))?;
    if let Some(max_price) = &cli.max_price {
        session.apply(FilterControl::PriceCeiling(max_price.clone()))?;
    }
    if let Some(gender) = &cli.gender {
        session.apply(FilterControl::Gender(gender.clone()))?;
    }
    for amenity in &cli.amenities {
        session.apply(FilterControl::Amenity {
            name: amenity.clone(),
            checked: true,
        })?;
    }

    debug!("Active filters: {:?}", session.spec());
    let results = session.results();
    if !session.query().is_empty() {
        let text_hits = filters::search_only(session.listings(), session.query()).len();
        info!("{} listings match \"{}\" before filters", text_hits, session.query());
    }

    // Display results
    println!("\n{} Properties Found", results.len());
    if !session.query().is_empty() {
        println!("Showing results for \"{}\"", session.query());
    }
    println!();

    for (i, listing) in results.iter().enumerate() {
        println!("{}. {} ({})", i + 1, listing.title, listing.price_label(&currency));
        println!("   {}", listing.address);
        println!("   {}", listing.school_proximity);
        let visitors = if listing.rules.visitors_allowed {
            "Visitors Allowed"
        } else {
            "No Visitors"
        };
        let mut rules = vec![visitors.to_string()];
        if let Some(curfew) = &listing.rules.curfew {
            rules.push(format!("Curfew: {}", curfew));
        }
        if let Some(gender) = listing.rules.gender_restricted {
            rules.push(format!("Gender: {}", gender));
        }
        println!("   {}", rules.join(", "));
        let amenities: Vec<&str> = listing.amenities.iter().map(String::as_str).collect();
        println!("   Amenities: {}", amenities.join(", "));
        let status = if !listing.is_rented {
            "Available"
        } else if listing.accepts_roommates {
            "Roommates Accepted"
        } else {
            "Rented"
        };
        println!(
            "   {} · {:.1}★ ({} reviews)",
            status, listing.avg_rating, listing.total_reviews
        );
        if let Some(cover) = listing.cover_image() {
            println!("   Cover: {}", cover);
        }
        println!();
    }

    if let Some(output) = &cli.output {
        let json = serde_json::to_string_pretty(&results)?;
        tokio::fs::write(output, json).await?;
        info!("💾 Saved {} listings to {}", results.len(), output.display());
    }

    if session.is_empty_result() {
        println!("No properties found matching your criteria.");
        println!("Try adjusting your filters or search terms.");
        let without_filters = session.reset_filters().len();
        if without_filters > 0 {
            println!("{} properties match without filters.", without_filters);
        }
    }

    Ok(())
}
