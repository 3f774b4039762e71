mod prompt;
mod validator;

use abacus::{
    Error, Expression, ParserOptions, render_error_to_string, render_error_to_string_no_color,
};
use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use reedline::{
    EditCommand, Emacs, KeyCode, KeyModifiers, Reedline, ReedlineEvent, Signal,
    default_emacs_keybindings,
};
use std::io::{BufRead, BufReader, Write};
use tracing::debug;

use prompt::ReplPrompt;
use validator::ParenValidator;

const INTRO: &str = "Hi! Just type 'q' to leave the program";
const QUIT: &str = "q";
const GOODBYE: &str = "Bye!";

/// Abacus - exact integer arithmetic of any size
#[derive(Parser, Debug, Default)]
#[command(name = "abacus")]
#[command(about = "Evaluate integer expressions", long_about = None)]
struct Args {
    /// Print the classified tokens in source order (for debugging)
    #[arg(long)]
    debug_tokens: bool,

    /// Print the postfix token sequence (for debugging)
    #[arg(long)]
    debug_rpn: bool,

    /// Maximum parenthesis nesting depth
    #[arg(long, default_value_t = ParserOptions::default().max_depth)]
    max_depth: usize,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

impl Args {
    fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            max_depth: self.max_depth,
        }
    }
}

fn setup_reedline() -> Reedline {
    let mut keybindings = default_emacs_keybindings();
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );

    Reedline::create()
        .with_validator(Box::new(ParenValidator))
        .with_edit_mode(Box::new(Emacs::new(keybindings)))
}

/// Evaluates one input, writing the result to `out` and errors to `err`.
///
/// Blank input writes nothing.
fn interpret_input(
    input: &str,
    args: &Args,
    color: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> std::io::Result<()> {
    if input.trim().is_empty() {
        return Ok(());
    }

    let options = args.parser_options();
    let expr = match Expression::compile(input, &options) {
        Ok(expr) => expr,
        Err(e) => return write_error(input, &e, color, err),
    };

    if args.debug_tokens {
        writeln!(out, "tokens: {}", expr.infix_string())?;
    }
    if args.debug_rpn {
        writeln!(out, "rpn: {}", expr.postfix_string())?;
    }

    match expr.run() {
        Ok(value) => writeln!(out, "{}", value),
        Err(e) => write_error(input, &e, color, err),
    }
}

fn write_error(input: &str, e: &Error, color: bool, err: &mut dyn Write) -> std::io::Result<()> {
    debug!(code = e.code(), "evaluation failed");
    let rendered = if color {
        render_error_to_string(input, e)
    } else {
        render_error_to_string_no_color(input, e)
    };
    write!(err, "{}", rendered)
}

fn is_quit(line: &str) -> bool {
    line.trim() == QUIT
}

fn run_repl(args: &Args) -> Result<()> {
    let mut line_editor = setup_reedline();
    let prompt = ReplPrompt;
    let color = atty::is(atty::Stream::Stderr);

    println!("{}", INTRO);

    loop {
        let sig = line_editor
            .read_line(&prompt)
            .into_diagnostic()
            .wrap_err("failed to read input")?;

        match sig {
            Signal::Success(buffer) if is_quit(&buffer) => break,
            Signal::Success(buffer) => {
                interpret_input(
                    &buffer,
                    args,
                    color,
                    &mut std::io::stdout(),
                    &mut std::io::stderr(),
                )
                .into_diagnostic()?;
            }
            Signal::CtrlD | Signal::CtrlC => break,
        }
    }

    println!("{}", GOODBYE);
    Ok(())
}

fn run_pipe(args: &Args) -> Result<()> {
    let stdin = std::io::stdin();
    let reader = BufReader::new(stdin.lock());
    let color = atty::is(atty::Stream::Stderr);

    for line in reader.lines() {
        let line = line
            .into_diagnostic()
            .wrap_err("failed to read line from stdin")?;
        if is_quit(&line) {
            break;
        }
        interpret_input(
            &line,
            args,
            color,
            &mut std::io::stdout(),
            &mut std::io::stderr(),
        )
        .into_diagnostic()?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use ABACUS_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("ABACUS_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        let color = atty::is(atty::Stream::Stderr);
        interpret_input(expr, &args, color, &mut std::io::stdout(), &mut std::io::stderr())
            .into_diagnostic()?;
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    if atty::is(atty::Stream::Stdin) {
        run_repl(&args)
    } else {
        run_pipe(&args)
    }
}
