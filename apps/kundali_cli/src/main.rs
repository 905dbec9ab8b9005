use clap::{Parser, ValueEnum};
use kundali::chart::ChartKind;
use kundali::payload::{load_match_from_json, load_response_from_json};
use kundali::strength::MatchResponse;
use kundali::rendering::percent_label;
use kundali::zodiac::sign_name;
use kundali::{KundaliAnalysis, KundaliSettings};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    /// Renderer-ready shape specs for every chart
    Shapes,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Derive houses, aspects and strengths from a kundali response")]
struct Args {
    #[arg(help = "Path to the kundali API response (JSON)")]
    response: PathBuf,

    #[arg(long, help = "rasi or navamsa (d1/d9 also accepted)")]
    chart: Option<ChartKind>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[arg(long, help = "Settings file (defaults to configs/kundali.toml)")]
    config: Option<PathBuf>,

    #[arg(long = "match", help = "Chart-matching response (JSON) to summarize after the report")]
    match_response: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => kundali_config::load_settings_from(path)?,
        None => kundali_config::load_settings()?,
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(settings.cli.log_level.as_str()))
        .init();

    let response = load_response_from_json(&read_file(&args.response)?)?;
    let matching = match &args.match_response {
        Some(path) => Some(load_match_from_json(&read_file(path)?)?),
        None => None,
    };
    let analysis = KundaliAnalysis::from_response(&response, chrono::Utc::now(), &settings);
    log::info!("Loaded {}", args.response.display());

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
        OutputFormat::Shapes => {
            println!("{}", serde_json::to_string_pretty(&analysis.chart_specs(&settings))?)
        }
        OutputFormat::Text => {
            print_report(&analysis, args.chart.unwrap_or(settings.cli.chart));
            if let Some(matching) = &matching {
                print_match(matching);
            }
        }
    }
    if matching.is_some() && args.format != OutputFormat::Text {
        log::warn!("--match is only summarized in text output");
    }
    Ok(())
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))
}

fn print_match(matching: &MatchResponse) {
    let name1 = matching.chart1_name.as_deref().unwrap_or("Person 1");
    let name2 = matching.chart2_name.as_deref().unwrap_or("Person 2");
    println!("\nMatch: {name1} & {name2}");
    match (matching.overall(), matching.level()) {
        (Some(overall), Some(level)) => {
            println!("  {} ({})", level, percent_label(overall.percentage()));
            println!("  {}", level.description());
        }
        _ => println!("  No overall score"),
    }
    for score in matching.categories() {
        println!(
            "  {:<24} {:>5}  {:?}",
            score.category.as_deref().unwrap_or("?"),
            percent_label(score.percentage()),
            score.band()
        );
    }
}

fn print_report(analysis: &KundaliAnalysis, kind: ChartKind) {
    let view = analysis.chart(kind);
    println!("{} chart, ascendant {}", kind.label(), sign_name(view.ascendant));
    for house in &view.houses {
        println!(
            "  H{:<2} {:<12} {}",
            house.house,
            sign_name(house.sign_index),
            house.bodies.join(", ")
        );
    }

    let summary = &analysis.aspect_summary;
    println!(
        "\nAspects: {} ({} harmonious, {} tense, {} neutral)",
        summary.total, summary.harmonious, summary.tense, summary.neutral
    );
    for aspect in &analysis.aspects {
        println!(
            "  {} {} {}  {:.0}° (orb {:.1}°)",
            aspect.body1,
            aspect.kind.symbol(),
            aspect.body2,
            aspect.rounded_angle(),
            aspect.rounded_orb()
        );
    }

    println!("\nPlanet strength:");
    for planet in &analysis.planet_strengths {
        println!(
            "  {:<8} {:>6.2} / {:<4.1} rupas  {:>5}  {}",
            planet.planet,
            planet.rupas,
            planet.required,
            percent_label(planet.percentage),
            planet.tier
        );
        if !planet.components.is_empty() {
            let parts: Vec<String> = planet
                .components
                .iter()
                .map(|c| format!("{} {:.1}", c.name, c.value))
                .collect();
            println!("           {}", parts.join(", "));
        }
    }

    match &analysis.house_strengths {
        Some(houses) => {
            println!("\nHouse strength:");
            for house in houses {
                println!(
                    "  H{:<2} {:>6.2} rupas  {:>5}  {}",
                    house.house,
                    house.rupas,
                    percent_label(house.percentage),
                    house.tier
                );
            }
        }
        None => println!("\nNo house strength data"),
    }

    println!("\nLife areas:");
    for area in &analysis.life_areas {
        println!("  {:<14} {}", area.label, percent_label(area.score * 100.0));
    }

    if let Some(dasha) = &analysis.dasha {
        println!("\nCurrent dasha: {}", dasha.current_planet);
        if let Some(nakshatra) = &dasha.moon_nakshatra {
            println!("Moon nakshatra: {nakshatra}");
        }
    }
}
