//! `regform replay`: run a scripted input sequence.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use regform::form::RegistrationForm;
use regform::replay::{self, ReplayScript};
use regform::{messages, ui};

pub fn cmd_replay(config_path: Option<&Path>, script_path: &Path, json: bool) -> Result<()> {
    let config = super::load_config(config_path)?;
    let script = ReplayScript::load_from(script_path)?;
    let mut form = RegistrationForm::from_config(&config);
    let outcome = replay::run(&mut form, &script)?;

    if json {
        let out =
            serde_json::to_string_pretty(&outcome).context("Failed to serialize replay outcome")?;
        println!("{}", out);
    } else {
        let quiet = ui::is_quiet();
        for report in &outcome.steps {
            let marker = if report.passed() {
                "✓".green()
            } else {
                "✗".red()
            };
            if !quiet || !report.passed() {
                println!(
                    "{} {:>3}. {:<16} {}",
                    marker,
                    report.step,
                    messages::label(report.field),
                    ui::render_summary(&report.snapshot)
                );
            }
            for mismatch in &report.mismatches {
                println!("       {}", mismatch.red());
            }
        }

        if let Some(last) = outcome.steps.last() {
            if !quiet {
                println!();
                println!("{}", ui::render_snapshot(&last.snapshot, config.password.min_length));
            }
        }
    }

    if !outcome.passed {
        anyhow::bail!(
            "{} of {} step(s) did not meet their expectations",
            outcome.steps.iter().filter(|r| !r.passed()).count(),
            outcome.steps.len()
        );
    }
    Ok(())
}
