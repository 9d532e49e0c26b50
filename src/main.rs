//! Frontend Assessor CLI

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use frontend_assessor::analyzer::rules::for_category;
use frontend_assessor::config::{
    default_config_json, load_config, validate_project_root, FrameworkHint, CONFIG_FILENAME,
};
use frontend_assessor::i18n::{Locale, Messages, Text};
use frontend_assessor::level::GATES;
use frontend_assessor::reporter::{
    report_path, ConsoleReporter, HtmlReporter, JsonReporter, OutputFormat,
};
use frontend_assessor::{assess_project, Category, Level};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Heuristic quality score and skill level for frontend projects
#[derive(Parser, Debug)]
#[command(name = "frontend-assessor")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Display language: en, ru, ua
    #[arg(long, global = true, env = "FRONTEND_ASSESSOR_LANG", default_value = "en")]
    lang: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assess a project directory
    Assess {
        /// Project root to assess
        project: PathBuf,

        /// Framework: auto, react, vue, angular, svelte, vanilla
        #[arg(long, short)]
        framework: Option<FrameworkHint>,

        /// Output format: console, json, html, all
        #[arg(long, short, default_value = "console")]
        output: OutputFormat,

        /// Report file path (extension is replaced per format)
        #[arg(long = "path", short = 'p', value_name = "FILE")]
        report_path: Option<PathBuf>,

        /// Target level for the next steps: junior, middle, senior
        #[arg(long)]
        level: Option<Level>,

        /// Include glob patterns (replace the configured ones)
        #[arg(long, num_args = 1..)]
        include: Vec<String>,

        /// Exclude glob patterns (replace the configured ones)
        #[arg(long, num_args = 1..)]
        exclude: Vec<String>,

        /// Config file (default: frontend-assessor.config.json in the project root)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Minimum overall score (exit 1 if below)
        #[arg(long, short)]
        threshold: Option<u8>,

        /// Number of worker threads (default: number of CPU cores)
        #[arg(long, value_name = "N")]
        jobs: Option<usize>,

        /// List every file with its issues
        #[arg(long, short)]
        verbose: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Create frontend-assessor.config.json with defaults
    Init {
        /// Framework to record in the config
        #[arg(long, short, default_value = "auto")]
        framework: FrameworkHint,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// List the rule catalogue
    Rules {
        /// Only show one category (e.g. codeQuality, best-practices)
        #[arg(long, short)]
        category: Option<String>,
    },

    /// Show the level gates and criteria
    Levels,

    /// List supported display languages
    Lang,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();
    let messages = Messages::new(Locale::parse_or_default(&args.lang));

    match args.command {
        Commands::Assess {
            project,
            framework,
            output,
            report_path: report_file,
            level,
            include,
            exclude,
            config,
            threshold,
            jobs,
            verbose,
            no_color,
        } => {
            let root = validate_project_root(&project)?;
            let config = load_config(&root, config.as_deref())?.merge_with_cli(
                framework,
                Some(include),
                Some(exclude),
                level,
                threshold,
            );

            if no_color {
                colored::control::set_override(false);
            }
            if let Some(jobs) = jobs {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(jobs)
                    .build_global()
                    .ok();
            }

            eprintln!("{}", messages.text(Text::AssessmentStarting).dimmed());
            let assessment = assess_project(&root, &config)
                .with_context(|| format!("Failed to assess {}", root.display()))?;
            eprintln!("{}", messages.text(Text::AssessmentCompleted).green());

            if output.console() {
                let mut reporter = ConsoleReporter::new(messages);
                if no_color {
                    reporter = reporter.without_colors();
                }
                if verbose {
                    reporter = reporter.verbose();
                }
                reporter.report(&assessment);
            }
            if output.json() {
                let path = report_path(report_file.as_deref(), "json");
                JsonReporter::new().pretty().write(&assessment, &path)?;
                announce_report(&messages, &path);
            }
            if output.html() {
                let path = report_path(report_file.as_deref(), "html");
                HtmlReporter::new(messages).write(&assessment, &path)?;
                announce_report(&messages, &path);
            }

            if let Some(threshold) = config.threshold {
                if assessment.overall_score < threshold {
                    eprintln!(
                        "\n{}: {} < {}",
                        messages.text(Text::ThresholdNotMet).red().bold(),
                        assessment.overall_score,
                        threshold
                    );
                    return Ok(ExitCode::from(1));
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Init { framework, dir } => run_init(&messages, framework, dir.as_deref()),
        Commands::Rules { category } => run_rules(&messages, category.as_deref()),
        Commands::Levels => {
            run_levels(&messages);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Lang => {
            println!("{}:", messages.text(Text::SupportedLanguages).bold());
            for locale in Locale::ALL {
                let marker = if locale == messages.locale() { "*" } else { " " };
                println!("{} {}  {}", marker, locale.code(), locale.native_name());
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn announce_report(messages: &Messages, path: &Path) {
    eprintln!(
        "{} {}",
        messages.text(Text::ReportGenerated).green(),
        path.display()
    );
}

fn run_init(messages: &Messages, framework: FrameworkHint, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {}",
            messages.text(Text::ConfigExists).yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    std::fs::write(&config_path, default_config_json(framework))
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!(
        "{}: {}",
        messages.text(Text::ConfigCreated).green(),
        config_path.display()
    );
    Ok(ExitCode::SUCCESS)
}

fn run_rules(messages: &Messages, filter: Option<&str>) -> Result<ExitCode> {
    let categories: Vec<Category> = match filter {
        Some(name) => match Category::from_key(name) {
            Some(category) => vec![category],
            None => bail!("unknown category '{}'", name),
        },
        None => Category::ALL.to_vec(),
    };

    println!("{}:", messages.text(Text::AvailableRules).bold());
    for category in categories {
        println!();
        println!(
            "{} ({}%)",
            messages.category(category).bold(),
            category.weight_pct()
        );
        for rule in for_category(category) {
            println!(
                "  {} {:<30} {:<8} {:>3}  {}",
                format!("{:<9}", rule.id).cyan(),
                rule.name,
                messages.severity(rule.severity),
                rule.weight,
                rule.description.dimmed()
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_levels(messages: &Messages) {
    println!("{}:", messages.text(Text::LevelCriteria).bold());
    for level in Level::ALL.into_iter().rev() {
        println!();
        println!(
            "{} ({}+): {}",
            messages.level_name(level).bold(),
            level.min_score(),
            messages.level_description(level)
        );
        if let Some(gate) = GATES.iter().find(|g| g.level == level) {
            println!(
                "  overall >= {}, practices >= {}, architecture >= {}, complexity >= {}",
                gate.min_overall, gate.min_practice, gate.min_architecture, gate.min_complexity
            );
        }
        for criterion in messages.level_criteria(level) {
            println!("  - {}", criterion);
        }
    }
}
