//! Render a sample email to a file or stdout.

use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;

use welth::email::{PreviewKind, preview_props, render_email_props};

/// Render one of the sample emails as HTML.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The email to render: "monthly-report" or "budget-alert".
    #[arg(long, default_value_t = PreviewKind::MonthlyReport)]
    kind: PreviewKind,

    /// Write the HTML to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Override the recipient name in the sample.
    #[arg(long)]
    user_name: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut props = preview_props(args.kind);
    if let Some(user_name) = args.user_name {
        props.user_name = user_name;
    }

    let html = render_email_props(&props).into_string();

    match args.output {
        Some(path) => match fs::write(&path, html) {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                eprintln!("Could not write {}: {error}", path.display());
                ExitCode::FAILURE
            }
        },
        None => {
            println!("{html}");
            ExitCode::SUCCESS
        }
    }
}
