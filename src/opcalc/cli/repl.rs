use super::render::{print_history, print_messages, GOODBYE, HELP, WELCOME};
use opcalc::calculator::Calculator;
use opcalc::commands::{self, CmdMessage};
use opcalc::error::{CalcError, Result};
use opcalc::input::{parse_line, Request};
use opcalc::store::HistoryStore;
use std::io::{BufRead, Write};

enum Flow {
    Continue,
    Exit,
}

/// Runs the interactive loop until `exit`/`quit` or end of input.
///
/// Input and arithmetic errors are reported and the loop goes on. Storage
/// errors end the loop so a failing history file is never silently ignored.
pub(super) fn run<S: HistoryStore, R: BufRead>(
    calc: &mut Calculator<S>,
    prompt: &str,
    mut input: R,
) -> Result<()> {
    println!("{}", WELCOME);

    let mut line = String::new();
    loop {
        print!("{}", prompt);
        std::io::stdout().flush().map_err(CalcError::Io)?;

        line.clear();
        if input.read_line(&mut line).map_err(CalcError::Io)? == 0 {
            println!("\n{}", GOODBYE);
            return Ok(());
        }

        if let Flow::Exit = handle_line(calc, &line)? {
            println!("{}", GOODBYE);
            return Ok(());
        }
    }
}

fn handle_line<S: HistoryStore>(calc: &mut Calculator<S>, line: &str) -> Result<Flow> {
    let request = match parse_line(line) {
        Ok(request) => request,
        Err(e) => {
            log::debug!("Rejected input {:?}: {}", line.trim(), e);
            print_messages(&[CmdMessage::from_error(&e)]);
            return Ok(Flow::Continue);
        }
    };

    let lists_entries = matches!(request, Request::History);
    let outcome = match request {
        Request::Empty => return Ok(Flow::Continue),
        Request::Exit => return Ok(Flow::Exit),
        Request::Help => {
            println!("{}", HELP);
            return Ok(Flow::Continue);
        }
        Request::Evaluate(calculation) => commands::evaluate::run(calc, &calculation),
        Request::History => commands::history::run(calc, None),
        Request::Undo => commands::undo::run(calc),
        Request::Clear => commands::clear::run(calc),
    };

    match outcome {
        Ok(result) => {
            if lists_entries {
                print_history(&result.entries);
            }
            print_messages(&result.messages);
        }
        Err(e) if is_recoverable(&e) => print_messages(&[CmdMessage::from_error(&e)]),
        Err(e) => return Err(e),
    }
    Ok(Flow::Continue)
}

fn is_recoverable(error: &CalcError) -> bool {
    matches!(
        error,
        CalcError::DivisionByZero(_)
            | CalcError::InvalidOperand(_)
            | CalcError::UnknownOperation(_)
            | CalcError::Undefined(_)
            | CalcError::Input(_)
    )
}
