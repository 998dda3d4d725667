use crate::commands::birthdays::{add_birthday, birthdays, show_birthday};
use crate::commands::contacts::{add_contact, change_contact, show_all, show_phone};
use crate::commands::{respond, Context};
use crate::util::parse_input;
use std::io::{self, BufRead, Write};
use tracing::debug;

const WELCOME: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command: ";
const FAREWELL: &str = "Good bye!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Reply(String),
    Exit,
}

/// Reads commands until `exit`, `close` or end of input.
pub fn run<R: BufRead, W: Write>(ctx: &mut Context, mut input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "{WELCOME}")?;
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            writeln!(output, "{FAREWELL}")?;
            return Ok(());
        }

        let Some((command, args)) = parse_input(&line) else {
            continue;
        };
        debug!(command = %command, args = args.len(), "command received");

        match execute(ctx, &command, &args) {
            Step::Reply(message) => writeln!(output, "{message}")?,
            Step::Exit => {
                writeln!(output, "{FAREWELL}")?;
                return Ok(());
            }
        }
    }
}

pub fn execute(ctx: &mut Context, command: &str, args: &[String]) -> Step {
    let reply = match command {
        "close" | "exit" => return Step::Exit,
        "hello" => "How can I help you?".to_string(),
        "add" => respond(command, add_contact(ctx, args)),
        "change" => {
            if args.len() != 3 {
                "Give me name, old phone, and new phone number please.".to_string()
            } else {
                respond(command, change_contact(ctx, args))
            }
        }
        "phone" => respond(command, show_phone(ctx, args)),
        "all" => respond(command, show_all(ctx)),
        "add-birthday" => {
            if args.len() != 2 {
                "Give me name and birthday please.".to_string()
            } else {
                respond(command, add_birthday(ctx, args))
            }
        }
        "show-birthday" => respond(command, show_birthday(ctx, args)),
        "birthdays" => respond(command, birthdays(ctx)),
        _ => "Invalid command.".to_string(),
    };
    Step::Reply(reply)
}
