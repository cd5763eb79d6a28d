//! `validators list`: every validator with its description.

use anyhow::Result;
use std::io::{self, Write};

use validators::ValidatorKind;

use crate::ui;

pub fn cmd_list() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_list(&mut out)?;
    out.flush()?;
    Ok(())
}

fn write_list(out: &mut impl Write) -> Result<()> {
    let width = ValidatorKind::ALL
        .iter()
        .map(|kind| kind.name().len())
        .max()
        .unwrap_or(0);

    for kind in ValidatorKind::ALL {
        writeln!(
            out,
            "{}  {}",
            ui::colors::identifier(&format!("{:<width$}", kind.name())),
            kind.description()
        )?;
    }
    Ok(())
}
