use keypad::{Calculator, Key};
use tally::{group_thousands, AngleMode};

// An expression line is typed into the machine and committed with '='.
// A line starting with an operator glyph chains off the shown result.
fn eval_line(calc: &mut Calculator, line: &str) -> String {
    let mut chars = line.chars();
    match chars.next() {
        None => return String::new(),
        Some(c) if is_operator(c) => {
            calc.press(Key::Op(c.to_string()));
            calc.press(Key::Input(chars.as_str().to_string()));
        }
        Some(_) => calc.press(Key::Input(line.to_string())),
    }
    calc.press(Key::Equals);
    if calc.result_shown() {
        format!(
            "{} = {}",
            calc.last_equation(),
            group_thousands(calc.expression())
        )
    } else {
        // final-result path: any failure renders as the error marker
        calc.press(Key::Clear);
        "Error".to_string()
    }
}

fn is_operator(c: char) -> bool {
    matches!(c, '+' | '−' | '×' | '÷' | '%' | '^')
}

fn dispatch(calc: &mut Calculator, line: &str) {
    match line {
        "" => (),
        "history" => {
            if calc.history().is_empty() {
                println!("No history");
            }
            for entry in calc.history().entries() {
                println!(
                    "[{}] {} = {}",
                    entry.id,
                    entry.expression,
                    group_thousands(&entry.result)
                );
            }
        }
        "clear" => {
            calc.press(Key::Clear);
            calc.clear_history();
        }
        "del" => {
            calc.press(Key::Delete);
            println!("{}", group_thousands(calc.expression()));
        }
        "mode rad" => calc.context_mut().angle_mode = AngleMode::Radians,
        "mode deg" => calc.context_mut().angle_mode = AngleMode::Degrees,
        line => match line.strip_prefix("use ") {
            Some(id) => match id.trim().parse() {
                Ok(id) if calc.select_history(id) => {
                    println!("{}", group_thousands(calc.expression()));
                }
                _ => println!("No such entry: {}", id.trim()),
            },
            None => println!("{}", eval_line(calc, line)),
        },
    }
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut calc = Calculator::new();

    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        println!("{}", eval_line(&mut calc, input.trim()));
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                dispatch(&mut calc, line.trim());
            }
        }
    }
}
