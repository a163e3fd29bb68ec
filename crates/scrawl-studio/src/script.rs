use std::io::BufRead;

use anyhow::Context;
use scrawl_interp::Interpreter;

/// Splits a script line into tokens. Blank lines and `#` comments yield `None`.
pub fn tokenize(line: &str) -> Option<Vec<&str>> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    Some(trimmed.split_whitespace().collect())
}

/// Feeds every command in `input` to `interp`.
///
/// Rejected commands are logged as `<source>:<line>: <error>` and skipped.
/// Returns the number of rejected commands; I/O failures abort the script.
pub fn run_script<R: BufRead>(interp: &mut Interpreter, source: &str, input: R) -> anyhow::Result<usize> {
    let mut failures = 0;
    for (n, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("{}: read failed at line {}", source, n + 1))?;
        let Some(tokens) = tokenize(&line) else { continue };
        if let Err(e) = interp.interpret(&tokens) {
            log::error!("{}:{}: {}", source, n + 1, e);
            failures += 1;
        }
    }
    log::debug!("{}: done, {} rejected", source, failures);
    Ok(failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn tokenize_skips_blanks_and_comments() {
        assert_eq!(tokenize(""), None);
        assert_eq!(tokenize("   \t"), None);
        assert_eq!(tokenize("  # define x circle 1"), None);
        assert_eq!(tokenize(" draw  red\tx 1 2 "), Some(vec!["draw", "red", "x", "1", "2"]));
    }

    #[test]
    fn errors_do_not_stop_the_script() {
        let script = "\
# a small scene
define box square 10
draw red nothing 0 0
border red 0
draw red box 5 5
";
        let mut interp = Interpreter::new();
        let failures = run_script(&mut interp, "test", Cursor::new(script)).unwrap();
        assert_eq!(failures, 2);
        assert_eq!(interp.session().scene.len(), 1);
        assert_eq!(interp.session().style.border.width, 4);
    }
}
