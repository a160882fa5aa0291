use std::fmt::Display;
use std::io::{BufRead, Write};

/// Prints a labeled key-value listing followed by a blank line.
pub fn print_group<K, V>(
    out: &mut impl Write,
    label: &str,
    entries: &[(K, V)],
) -> std::io::Result<()>
where
    K: Display,
    V: Display,
{
    writeln!(out, "{label}:")?;
    for (key, value) in entries {
        writeln!(out, "  {key}: {value}")?;
    }
    writeln!(out)
}

/// Asks a yes/no question, re-prompting until the answer is `y`, `n`, or
/// empty input while a default exists.
///
/// End-of-input counts as a refusal so a closed stdin terminates the loop
/// cleanly instead of blocking.
pub fn ask_yes_no(
    question: &str,
    default: Option<bool>,
    mut input: impl BufRead,
    out: &mut impl Write,
) -> std::io::Result<bool> {
    let answers = match default {
        Some(true) => "([y]/n)",
        Some(false) => "(y/[n])",
        None => "(y/n)",
    };

    loop {
        write!(out, "{question} {answers}: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        let answer = line.trim();

        if answer.is_empty() {
            if let Some(default) = default {
                return Ok(default);
            }
        } else {
            match answer {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => {}
            }
        }

        writeln!(out, "Please, answer y or n")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(input: &str) -> (bool, String) {
        let mut out = Vec::new();
        let answer = ask_yes_no("Confirm?", Some(true), Cursor::new(input), &mut out).unwrap();
        (answer, String::from_utf8(out).unwrap())
    }

    #[test]
    fn empty_input_accepts_the_default() {
        let (answer, out) = ask("\n");
        assert!(answer);
        assert_eq!(out, "Confirm? ([y]/n): ");
    }

    #[test]
    fn y_accepts_and_n_refuses() {
        assert!(ask("y\n").0);
        assert!(!ask("n\n").0);
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert!(ask("  y  \n").0);
    }

    #[test]
    fn malformed_input_reprompts_with_guidance() {
        let (answer, out) = ask("x\n\n");
        assert!(answer);
        assert_eq!(
            out,
            "Confirm? ([y]/n): Please, answer y or n\nConfirm? ([y]/n): "
        );
    }

    #[test]
    fn uppercase_is_not_an_answer() {
        let (answer, out) = ask("Y\nn\n");
        assert!(!answer);
        assert!(out.contains("Please, answer y or n"));
    }

    #[test]
    fn end_of_input_is_a_refusal() {
        assert!(!ask("").0);
        assert!(!ask("x\n").0);
    }

    #[test]
    fn no_default_shows_both_answers_plain() {
        let mut out = Vec::new();
        let answer =
            ask_yes_no("Confirm?", None, Cursor::new("\ny\n"), &mut out).unwrap();
        assert!(answer);
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Confirm? (y/n): "));
        assert!(out.contains("Please, answer y or n"));
    }

    #[test]
    fn groups_print_as_indented_listings() {
        let mut out = Vec::new();
        print_group(
            &mut out,
            "Template variables",
            &[("component_name", "Button"), ("style_type", "scss")],
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Template variables:\n  component_name: Button\n  style_type: scss\n\n"
        );
    }
}
