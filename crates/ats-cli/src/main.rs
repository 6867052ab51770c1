use std::{env, fs, process};

use ats_core::logging;
use ats_core::parser::{parse_job_description, parse_resume_text};
use ats_core::scoring::ScoringEngine;
use tracing::info;

fn main() {
    logging::install_tracing_panic_hook("ats-cli");
    logging::init_tracing_subscriber("ats-cli");

    let mut args = env::args().skip(1);
    let Some(resume_path) = args.next() else {
        eprintln!("usage: ats-cli <resume.txt> [job-description.txt]");
        process::exit(2);
    };
    let job_path = args.next();

    let resume_text = read_file(&resume_path);
    let resume = parse_resume_text(&resume_text);

    let engine = ScoringEngine::default();
    let analysis = match job_path {
        Some(path) => {
            let job = parse_job_description(&read_file(&path));
            engine.analyze(&resume, &job)
        }
        None => engine.analyze_standalone(&resume),
    };

    info!(score = analysis.score, "analysis completed");

    match serde_json::to_string_pretty(&analysis) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("failed to serialize analysis: {err}");
            process::exit(1);
        }
    }
}

fn read_file(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("failed to read {path}: {err}");
            process::exit(1);
        }
    }
}
