//! `regform register`: interactive form filling.
//!
//! Each field is prompted for until its verdict is valid; the masked value
//! is echoed back after every entry.

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Password, Select};
use std::path::Path;

use regform::field::FieldKind;
use regform::form::{FieldChange, RegistrationForm};
use regform::{messages, ui};

pub fn cmd_register(config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let min_length = config.password.min_length;
    let mut form = RegistrationForm::from_config(&config);

    println!("{}\n", messages::FORM_TITLE.bold());

    for kind in FieldKind::TEXT_FIELDS {
        loop {
            let raw = prompt_text(kind)?;
            let snapshot = form.apply(FieldChange::input(kind, raw));

            if kind.is_masked() && !snapshot.values.get(kind).is_empty() {
                println!("  {}", snapshot.values.get(kind).cyan());
            }

            match snapshot.errors.reason(kind) {
                Some(reason) => {
                    println!("  {}", ui::error_text(kind, reason, min_length).red());
                }
                None => break,
            }
        }
    }

    let roles = config.role_options();
    let selection = Select::new()
        .with_prompt(messages::label(FieldKind::Role))
        .items(roles.as_slice())
        .default(0)
        .interact()?;
    let snapshot = form.apply(FieldChange::select_role(roles.as_slice()[selection].clone()));

    println!();
    println!("{}", ui::render_snapshot(&snapshot, min_length));

    if snapshot.submittable {
        println!("\n{}", "Formularz gotowy do wysłania".green());
    }
    Ok(())
}

fn prompt_text(kind: FieldKind) -> Result<String> {
    let label = messages::label(kind);
    if kind.is_secret() {
        return Ok(Password::new()
            .with_prompt(label)
            .allow_empty_password(true)
            .interact()?);
    }

    let mut input = Input::<String>::new().with_prompt(label).allow_empty(true);
    if let Some(hint) = messages::placeholder(kind) {
        input = input.with_prompt(format!("{} ({})", label, hint));
    }
    Ok(input.interact_text()?)
}
