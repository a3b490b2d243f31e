use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Lets an export replace `path` only with `--force` or an explicit yes.
pub(crate) fn confirm_overwrite(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!(
        "{} already holds a previous export (use --force to skip this question).",
        path.display()
    ));
    print!("Replace it? [y/N]: ");
    io::stdout().flush()?;

    let answer = read_answer(io::stdin().lock())?;
    if !accepts(&answer) {
        return Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ));
    }

    info(format!("Replacing {}", path.display()));
    Ok(())
}

fn read_answer(mut input: impl BufRead) -> AppResult<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_lowercase())
}

/// Yes in English or Spanish; anything else, EOF included, is a no.
fn accepts(answer: &str) -> bool {
    matches!(answer, "y" | "yes" | "s" | "si" | "sí")
}
