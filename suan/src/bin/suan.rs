use anyhow::Result;
use structopt::clap::AppSettings;
use structopt::StructOpt;

const VERSION: &str = "1.0.0";

/// Suan (算) calculates the given mathematical expression.
///
/// It supports addition, subtraction, multiplication, division and
/// exponentiation on integer literals, in any combination with parentheses.
/// Exponentiation groups left to right like the other operators.
#[derive(StructOpt)]
#[structopt(
    name = "suan",
    global_settings = &[AppSettings::DisableVersion, AppSettings::AllowLeadingHyphen],
)]
struct Options {
    /// Expression to evaluate. Arguments are joined without separators.
    #[structopt(name = "EXPR")]
    expression: Vec<String>,

    /// Version information.
    #[structopt(short = "v", long = "version")]
    version: bool,

    /// Print the postfix form before the result.
    #[structopt(short = "r", long = "rpn")]
    rpn: bool,

    /// Read expressions line by line from an interactive prompt.
    #[structopt(short = "i", long = "interactive")]
    interactive: bool,

    /// Log each reduction step to stderr.
    #[structopt(long = "verbose")]
    verbose: bool,
}

mod repl {
    use anyhow::Result;
    use rustyline::error::ReadlineError;
    use suan::ShuntingParser;

    pub fn evalexpr(input: &str) -> String {
        match ShuntingParser::parse_str(input) {
            Err(e) => format!("Parse error: {}", e),
            Ok(expr) => match expr.eval() {
                Err(e) => format!("Eval error: {}", e),
                Ok(result) => match expr.to_infix() {
                    Some(infix) => format!("{} = {}", infix, result),
                    None => format!("{}", result),
                },
            },
        }
    }

    pub fn run() -> Result<()> {
        let histpath = dirs::home_dir().map(|h| h.join(".suan_history"));
        let mut rl = rustyline::DefaultEditor::new()?;
        if let Some(path) = &histpath {
            if rl.load_history(path).is_err() {
                log::info!("No history yet at {}", path.display());
            }
        }
        loop {
            match rl.readline(">> ") {
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => {
                    if let Err(e) = rl.add_history_entry(line.as_str()) {
                        log::warn!("Couldn't add to history: {}", e);
                    }
                    println!("{}", evalexpr(&line));
                }
            }
        }
        if let Some(path) = &histpath {
            rl.save_history(path)?;
        }
        Ok(())
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

// Arguments are glued together as is: `suan 1 + 2` reads "1+2" while a
// quoted "1 + 2" keeps its blanks.
fn join_expression(args: &[String]) -> String {
    args.concat()
}

fn format_result(value: f64) -> String {
    format!("{:.6}", value)
}

// Output lines for a one-shot evaluation; with `show_rpn` the postfix form
// comes first, as long as the expression parsed.
fn calculate(expr: &str, show_rpn: bool) -> Result<Vec<String>, (Vec<String>, suan::Error)> {
    if !show_rpn {
        return match suan::evaluate(expr) {
            Ok(result) => Ok(vec![format_result(result)]),
            Err(e) => Err((vec![], e)),
        };
    }
    let rpn = match suan::ShuntingParser::parse_str(expr) {
        Ok(rpn) => rpn,
        Err(e) => return Err((vec![], e.into())),
    };
    let postfix = rpn.to_string();
    match rpn.eval() {
        Ok(result) => Ok(vec![postfix, format_result(result)]),
        Err(e) => Err((vec![postfix], e.into())),
    }
}

fn main() -> Result<()> {
    let options = Options::from_args();
    init_logging(options.verbose);

    if options.version {
        println!("suan: {}", VERSION);
        return Ok(());
    }
    if options.interactive {
        return repl::run();
    }
    if options.expression.is_empty() {
        Options::clap().print_help()?;
        println!();
        return Ok(());
    }

    let expr = join_expression(&options.expression);
    log::debug!("evaluating {:?}", expr);
    match calculate(&expr, options.rpn) {
        Ok(lines) => lines.iter().for_each(|line| println!("{}", line)),
        Err((lines, e)) => {
            lines.iter().for_each(|line| println!("{}", line));
            println!("invalid mathematical expression: {}. error: {}", expr, e);
            std::process::exit(1);
        }
    }
    Ok(())
}
