//! Footprint CLI
//!
//! Usage:
//!   footprint                               # Interactive questionnaire
//!   footprint --answers answers.json        # Estimate from a file
//!   footprint --answers answers.json --json # JSON report
//!   footprint --serve                       # HTTP API server

use clap::Parser;
use colored::Colorize;
use log::{debug, error};
use std::io::{self, BufRead, Write};

use footprint::core::{EmissionsEstimator, Questionnaire, QuestionKind, ChartStyle, render_chart, run_server};
use footprint::types::{RawAnswers, EstimateReport};
use footprint::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "footprint",
    version = VERSION,
    about = "Carbon footprint calculator - estimate annual kg CO2 from lifestyle answers",
    long_about = "Footprint asks eleven questions about transport, diet, energy use\n\
                  and purchasing habits, then estimates annual emissions in kg CO2.\n\n\
                  Modes:\n  \
                  (default)      Interactive questionnaire\n  \
                  --answers F    Estimate from a JSON answers file\n  \
                  --serve        HTTP API server\n\n\
                  Interactive commands:\n  \
                  back           Previous question\n  \
                  quit           Exit without calculating"
)]
struct Args {
    /// JSON file with raw answers
    #[arg(short, long)]
    answers: Option<String>,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show raw total and reductions
    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn chart_style(&self) -> ChartStyle {
        ChartStyle { color: !self.no_color, verbose: self.verbose }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    let result = if args.serve {
        run_server(&args.addr).await
    } else if let Some(ref path) = args.answers {
        run_file(path, &args)
    } else {
        run_interactive(&args)
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Estimate from an answers file
fn run_file(path: &str, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    debug!("reading answers from {}", path);
    let text = std::fs::read_to_string(path)?;
    let raw: RawAnswers = serde_json::from_str(&text)?;

    let estimator = EmissionsEstimator::new();
    let answer = estimator.parse(&raw)?;
    let breakdown = estimator.estimate(&answer);

    if args.json {
        let report = EstimateReport::new(answer, breakdown);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_chart(&breakdown, args.chart_style()));
    }
    Ok(())
}

/// Run the questionnaire on stdin
fn run_interactive(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut questionnaire = Questionnaire::new();

    print_header(args.no_color);
    println!("There are {} questions to answer.", questionnaire.progress().1);
    println!("Press Enter to keep the shown value, 'back' to go back, 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print_question(&questionnaire, args.no_color);
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nQuestionnaire ended without a result.");
            break;
        }
        if line.eq_ignore_ascii_case("back") {
            questionnaire.previous();
            continue;
        }
        if !line.is_empty() {
            questionnaire.answer(line);
        }

        if questionnaire.next() {
            continue;
        }

        // Last question answered
        match questionnaire.calculate() {
            Ok(breakdown) => {
                println!();
                print!("{}", render_chart(&breakdown, args.chart_style()));
                if args.json {
                    let estimator = EmissionsEstimator::new();
                    let answer = estimator.parse(questionnaire.raw_answers())?;
                    let report = EstimateReport::new(answer, breakdown);
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                break;
            }
            Err(e) => {
                if args.no_color {
                    println!("{}", e);
                } else {
                    println!("{}", e.to_string().yellow());
                }
                println!();
                questionnaire.restart();
            }
        }
    }
    Ok(())
}

/// Print header
fn print_header(no_color: bool) {
    let title = format!("Carbon Footprint Calculator v{}", VERSION);
    if no_color {
        println!("========================================");
        println!("  {}", title);
        println!("========================================");
    } else {
        println!("{}", "════════════════════════════════════════".green());
        println!("  {}", title.bold());
        println!("{}", "════════════════════════════════════════".green());
    }
    println!();
}

/// Print the current question with its progress and current value
fn print_question(questionnaire: &Questionnaire, no_color: bool) {
    let (position, total) = questionnaire.progress();
    let question = questionnaire.current();
    let progress = format!("[{}/{}]", position, total);

    if no_color {
        println!("{} {}", progress, question.prompt);
    } else {
        println!("{} {}", progress.dimmed(), question.prompt.bold());
    }

    match question.kind {
        QuestionKind::Choice { choices } => println!("  options: {}", choices.join(", ")),
        QuestionKind::Scale { min, max } => println!("  scale: {}-{}", min, max),
        QuestionKind::Number => {}
    }
    let current = questionnaire.current_answer();
    if !current.is_empty() {
        println!("  current: {}", current);
    }
}
