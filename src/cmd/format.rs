//! `regform format`: show how a raw value is masked.

use anyhow::Result;

use regform::field::FieldKind;
use regform::formatter;

pub fn cmd_format(field: FieldKind, value: &str) -> Result<()> {
    println!("{}", formatter::format(field, value));
    Ok(())
}
