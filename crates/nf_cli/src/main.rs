use clap::Parser;
use nf_core::{
    format_percent, select, Assessment, FilterConfig, Metrics, Result, SortKey, SubmissionDraft,
    TimeWindow, ALL_TAGS,
};
use nf_inference::{create_scorer, ContentAnalyzer};
use nf_storage::{create_catalog, CatalogConfig, CatalogKind};
use nf_web::AppState;
use std::path::PathBuf;
use tracing::{info, Level};

mod logging;

#[derive(Parser, Debug)]
#[command(author, version, about = "News feed ranking and trust analysis", long_about = None)]
pub struct Cli {
    /// Catalog backend: memory (bundled mock data) or file
    #[arg(long, env = "NF_CATALOG", default_value = "memory")]
    catalog: CatalogKind,
    /// JSON catalog to load when using the file backend
    #[arg(long, env = "NF_CATALOG_PATH")]
    catalog_path: Option<PathBuf>,
    #[arg(long, env = "NF_SCORER", default_value = "random", help = "Scoring provider. Available: random (default), heuristic, fixed")]
    scorer: String,
    /// Seed for the random scoring provider
    #[arg(long, env = "NF_SEED")]
    seed: Option<u64>,
    #[arg(long, env = "NF_LOG_LEVEL", default_value = "info", value_parser = logging::parse_level)]
    log_level: Level,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        #[arg(long, env = "NF_ADDR", default_value = "127.0.0.1:3000")]
        addr: String,
    },
    /// Print the filtered and sorted feed
    Feed {
        /// Only show articles carrying any of these tags (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Case-insensitive search over title and description
        #[arg(long, short)]
        query: Option<String>,
        /// votes, newest or credibility
        #[arg(long, default_value = "votes")]
        sort: SortKey,
        /// all, today, week or month
        #[arg(long, default_value = "all")]
        window: TimeWindow,
        #[arg(long)]
        json: bool,
    },
    /// Classify four metric scores
    Classify {
        #[arg(allow_negative_numbers = true)]
        credibility: f64,
        #[arg(allow_negative_numbers = true)]
        bias: f64,
        #[arg(allow_negative_numbers = true)]
        sentiment: f64,
        #[arg(allow_negative_numbers = true)]
        toxicity: f64,
        #[arg(long)]
        json: bool,
    },
    /// Analyze a post before submitting it
    Analyze {
        #[arg(long, requires = "content", conflicts_with = "url")]
        title: Option<String>,
        #[arg(long, requires = "title")]
        content: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// List the tags available for filtering
    Tags,
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_assessment(assessment: &Assessment) {
    let status = assessment.display_status();
    println!(
        "{} (overall trust {}%)",
        status.headline(),
        format_percent(assessment.metrics.credibility)
    );
    for row in &assessment.readouts {
        println!("  {:<12} {:>3}%  {}", row.label, row.percent, row.rating);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level);

    let mut catalog_config = CatalogConfig::new(cli.catalog);
    if let Some(path) = &cli.catalog_path {
        catalog_config = catalog_config.with_path(path);
    }

    let inference_config = nf_inference::Config {
        scorer: cli.scorer.clone(),
        fixed_metrics: None,
        seed: cli.seed,
    };

    match cli.command {
        Commands::Serve { addr } => {
            let catalog = create_catalog(&catalog_config).await?;
            let analyzer = ContentAnalyzer::new(create_scorer(&inference_config)?);
            info!("✨ Starting server (catalog: {:?}, scorer: {})", cli.catalog, cli.scorer);
            nf_web::serve(AppState::new(catalog, analyzer), &addr).await?;
        }
        Commands::Feed {
            tags,
            query,
            sort,
            window,
            json,
        } => {
            let catalog = create_catalog(&catalog_config).await?;
            let config = FilterConfig::new()
                .with_tags(tags)
                .with_query(query.unwrap_or_default())
                .with_sort(sort)
                .with_window(window);
            let articles = select(&catalog.articles().await?, &config);

            if json {
                return print_json(&articles);
            }
            if articles.is_empty() {
                println!("No news found. Try changing your search criteria or filters.");
            }
            for article in &articles {
                let badge = article.badge();
                let percent = badge.percent.map(|p| format!(" {}%", p)).unwrap_or_default();
                println!(
                    "{:>5} ▲  {}  [{}{}]",
                    article.votes, article.title, badge.label, percent
                );
                println!(
                    "        from {} · {} · {}",
                    article.source,
                    article.created_at,
                    article.tags.join(", ")
                );
            }
        }
        Commands::Classify {
            credibility,
            bias,
            sentiment,
            toxicity,
            json,
        } => {
            let assessment = Assessment::new(Metrics::new(credibility, bias, sentiment, toxicity), None);
            if json {
                return print_json(&assessment);
            }
            print_assessment(&assessment);
        }
        Commands::Analyze {
            title,
            content,
            url,
            tags,
            json,
        } => {
            let mut draft = match (title, content, url) {
                (Some(title), Some(content), _) => SubmissionDraft::text(title, content),
                (_, _, url) => SubmissionDraft::url(url.unwrap_or_default()),
            };
            for tag in &tags {
                draft.toggle_tag(tag)?;
            }
            let analyzer = ContentAnalyzer::new(create_scorer(&inference_config)?);
            let report = analyzer.analyze_draft(&draft).await?;
            if json {
                return print_json(&report);
            }
            print_assessment(&report.assessment);
            if report.feedback.is_empty() {
                println!("No specific feedback available for this content.");
            }
            for note in &report.feedback {
                println!("  ⚠ {}", note);
            }
        }
        Commands::Tags => {
            for tag in ALL_TAGS {
                println!("{}", tag);
            }
        }
    }

    Ok(())
}
