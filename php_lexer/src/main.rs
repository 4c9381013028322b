use clap::error::ErrorKind;
use clap::{ArgGroup, Parser};
use php_lexer::config::runtime::{LoggingPreferences, ReportFormat, RuntimeConfig};
use php_lexer::input::{self, SourceOrigin};
use php_lexer::logging::{self, codes, ConsoleLogger, LogEvent, Logger};
use php_lexer::pipeline::{self, AnalyzerError};
use php_lexer::{log_debug, log_error, log_info};
use std::process;

const AFTER_HELP: &str = "\
ENVIRONMENT:
    PHPLEX_REQUIRE_PHP_EXTENSION   Reject files not ending in .php (true|false)
    PHPLEX_REPORT_FORMAT           text | json
    PHPLEX_REPORT_SHOW_TOKENS      List raw tokens (true|false)
    PHPLEX_LOGGING_ENABLE_CONSOLE  Write log events to stderr (true|false)
    PHPLEX_LOGGING_USE_STRUCTURED  Log events as JSON lines (true|false)
    PHPLEX_LOGGING_MIN_LEVEL       error | warning | info | debug

EXIT STATUS:
    0  Analysis ran (diagnostics are advisory)
    1  Input could not be read or output failed
    2  Invalid arguments

EXAMPLES:
    php_lexer index.php
    cat index.php | php_lexer --json -
    php_lexer --tokens --code '<?php echo $x; ?>'";

/// Tokenizes a PHP snippet, classifies each token, and flags likely keyword typos
#[derive(Debug, Parser)]
#[command(name = "php_lexer", version, after_help = AFTER_HELP)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "code"])))]
struct Cli {
    /// Source file to analyze, or `-` for standard input
    input: Option<String>,

    /// Analyze the given text instead of a file
    #[arg(long, value_name = "SRC")]
    code: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Also list the raw token sequence
    #[arg(long)]
    tokens: bool,
}

impl Cli {
    fn source(&self) -> Result<Source, AnalyzerError> {
        match (&self.input, &self.code) {
            (Some(arg), None) => Ok(Source::Origin(SourceOrigin::from_arg(arg))),
            (None, Some(code)) => Ok(Source::Code(code.clone())),
            _ => Err(AnalyzerError::usage("give exactly one of <INPUT> or --code")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Origin(SourceOrigin),
    Code(String),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RuntimeConfig::default();

    init_logging(config.logging.clone())?;
    log_debug!(logging::describe());

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if !matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                let usage = AnalyzerError::usage(&e.kind().to_string());
                log_error!(usage.error_code(), &usage.to_string());
            }
            e.exit();
        }
    };

    log_info!("PHP lexer starting",
        "limits" => php_lexer::config::build_info::profile_file(),
        "format" => if cli.json { "json" } else { config.report.format.as_str() }
    );

    if let Err(e) = run(&cli, config) {
        let code = e.error_code();
        eprintln!("Error: {}", e);
        eprintln!("  [{}] {} severity: {}", code, code.severity().as_str(), code.action());
        if e.is_usage() {
            process::exit(2);
        }
        if code.requires_halt() {
            process::exit(1);
        }
    }

    Ok(())
}

/// A failure here goes straight to stderr since no service is installed
fn init_logging(preferences: LoggingPreferences) -> Result<(), String> {
    logging::config::install_preferences(preferences)
        .and_then(|()| logging::init_global_logging())
        .map_err(|message| {
            ConsoleLogger.log(&LogEvent::error(
                codes::system::INITIALIZATION_FAILURE,
                message.as_str(),
            ));
            message
        })
}

fn run(cli: &Cli, mut config: RuntimeConfig) -> Result<(), AnalyzerError> {
    if cli.json {
        config.report.format = ReportFormat::Json;
    }
    if cli.tokens {
        config.report.show_tokens = true;
    }

    let reader = input::create_reader_with_preferences(&config.input);
    let source = match cli.source()? {
        Source::Origin(origin) => reader.read(origin)?,
        Source::Code(code) => reader.read_inline(code)?,
    };

    let report = pipeline::process_input(source);
    let rendered = pipeline::render(&report, &config.report)?;

    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("php_lexer").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_file_argument() {
        let cli = parse(&["--json", "index.php"]).unwrap();
        assert!(cli.json);
        assert!(!cli.tokens);
        assert_eq!(
            cli.source().unwrap(),
            Source::Origin(SourceOrigin::File("index.php".into()))
        );
    }

    #[test]
    fn test_stdin_and_code() {
        let stdin = parse(&["-", "--tokens"]).unwrap();
        assert!(stdin.tokens);
        assert_eq!(stdin.source().unwrap(), Source::Origin(SourceOrigin::Stdin));

        let code = parse(&["--code", "<?php echo 1; ?>"]).unwrap();
        assert_eq!(
            code.source().unwrap(),
            Source::Code("<?php echo 1; ?>".to_string())
        );
    }

    #[test]
    fn test_missing_input_is_usage_error() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_conflicting_inputs() {
        let err = parse(&["a.php", "--code", "echo"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_second_logging_init_fails() {
        let quiet = LoggingPreferences {
            use_structured_logging: false,
            enable_console_logging: false,
            min_log_level: logging::LogLevel::Error,
        };

        let _ = init_logging(quiet.clone());
        let err = init_logging(quiet).unwrap_err();
        assert!(err.contains("already"));
        assert!(codes::system::INITIALIZATION_FAILURE.requires_halt());
    }

    #[test]
    fn test_unknown_option() {
        let err = parse(&["--verbose", "a.php"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
