use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use cleanmelb::poster::{DEFAULT_FILE_NAME, DEFAULT_LOGO_PATH};
use cleanmelb::{export_poster, FormState, FormView, PosterOptions, WasteCategory};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cleanmelb",
    about = "Prevent waste at home: set monthly goals and print a Clean Melbourne poster",
    version,
    author
)]
struct Cli {
    /// Log every form event and layout step to stderr, on top of RUST_LOG
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the form inputs with their limits
    Fields,

    /// Validate goals and show the contribution messages
    Goals {
        #[command(flatten)]
        inputs: GoalInputs,

        /// Print the form state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Take action: write the poster PDF for the given goals
    Poster {
        #[command(flatten)]
        inputs: GoalInputs,

        #[command(flatten)]
        output: PosterArgs,
    },

    /// Fill in the form line by line on stdin
    Interactive {
        #[command(flatten)]
        output: PosterArgs,
    },
}

/// Raw field values, validated exactly as typed.
#[derive(Args, Default)]
struct GoalInputs {
    /// Plastic bags saved per month (max 100)
    #[arg(long, value_name = "COUNT", allow_hyphen_values = true)]
    plastic_bags: Option<String>,

    /// Kg of organic waste reduced per month (max 500)
    #[arg(long, value_name = "KG", allow_hyphen_values = true)]
    organic_waste: Option<String>,

    /// Sheets of paper saved per month (max 1000)
    #[arg(long, value_name = "SHEETS", allow_hyphen_values = true)]
    paper_waste: Option<String>,

    /// Glass bottles recycled per month (max 500)
    #[arg(long, value_name = "COUNT", allow_hyphen_values = true)]
    glass_bottles: Option<String>,

    /// Aluminum cans recycled per month (max 1000)
    #[arg(long, value_name = "COUNT", allow_hyphen_values = true)]
    aluminum_cans: Option<String>,
}

impl GoalInputs {
    /// Applies each given value as one edit, in form order.
    fn apply(&self, form: &mut FormState) {
        let edits = [
            (WasteCategory::PlasticBags, &self.plastic_bags),
            (WasteCategory::OrganicWaste, &self.organic_waste),
            (WasteCategory::PaperWaste, &self.paper_waste),
            (WasteCategory::GlassBottles, &self.glass_bottles),
            (WasteCategory::AluminumCans, &self.aluminum_cans),
        ];
        for (category, raw) in edits {
            if let Some(raw) = raw {
                let _ = form.apply_input(category, raw);
            }
        }
    }
}

#[derive(Args)]
struct PosterArgs {
    /// Output file path
    #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
    output: PathBuf,

    /// Logo image placed at the top of the poster
    #[arg(long, default_value = DEFAULT_LOGO_PATH)]
    logo: PathBuf,

    /// Leave the logo off
    #[arg(long)]
    no_logo: bool,
}

impl PosterArgs {
    fn options(&self) -> PosterOptions {
        PosterOptions {
            output: self.output.clone(),
            logo: (!self.no_logo).then(|| self.logo.clone()),
            ..Default::default()
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Fields => {
            for category in WasteCategory::ALL {
                println!(
                    "{:<14} {:<16} {} [0-{}]",
                    category.field_id(),
                    category.label(),
                    category.placeholder(),
                    category.max()
                );
            }
        }

        Commands::Goals { inputs, json } => {
            let mut form = FormState::new();
            inputs.apply(&mut form);
            let view = form.view();

            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_view(&view);
            }

            if view.error.is_some() {
                std::process::exit(1);
            }
        }

        Commands::Poster { inputs, output } => {
            let mut form = FormState::new();
            inputs.apply(&mut form);

            if let Some(error) = form.error() {
                eprintln!("Error: {error}");
                std::process::exit(1);
            }

            match export_poster(&form, &output.options()).await {
                Ok(path) => println!("✓ Poster saved to {}", path.display()),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Interactive { output } => {
            let stdin = std::io::stdin();
            run_interactive(stdin.lock(), &output.options()).await?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose)?)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// `RUST_LOG` if set, else `cleanmelb=info`. `--verbose` adds `cleanmelb=debug` last.
fn log_filter(verbose: bool) -> Result<EnvFilter> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cleanmelb=info"));
    if !verbose {
        return Ok(filter);
    }
    let directive = "cleanmelb=debug"
        .parse::<Directive>()
        .context("Invalid log directive")?;
    Ok(filter.add_directive(directive))
}

fn print_view(view: &FormView) {
    if let Some(error) = &view.error {
        println!("Error: {error}");
        return;
    }

    if view.contributions.is_empty() {
        println!("No goals yet. Enter a number above zero in any field.");
        return;
    }

    println!("Your Contribution:");
    for (i, message) in view.contributions.iter().enumerate() {
        println!();
        for line in message.lines() {
            println!("  [{}] {line}", i + 1);
        }
    }
    if view.action_available {
        println!();
        println!("Take Action: run `cleanmelb poster` with the same values to print your poster.");
    }
}

/// One line of interactive input.
#[derive(Debug, PartialEq)]
enum Command<'a> {
    Edit(WasteCategory, &'a str),
    Show,
    Action,
    Reset,
    Help,
    Quit,
}

fn parse_command(line: &str) -> std::result::Result<Command<'_>, String> {
    match line.trim() {
        "show" => return Ok(Command::Show),
        "action" | "take-action" => return Ok(Command::Action),
        "reset" => return Ok(Command::Reset),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    // the value goes to validation untouched; only an empty value clears
    let line = line.trim_start();
    let (field, value) = match line.split_once('=') {
        Some((field, value)) => (field, value),
        None => line.split_once(char::is_whitespace).unwrap_or((line, "")),
    };
    let category = field
        .trim()
        .parse::<WasteCategory>()
        .map_err(|e| format!("{e} (type `help` for the list)"))?;
    Ok(Command::Edit(category, value))
}

async fn run_interactive(input: impl BufRead, options: &PosterOptions) -> Result<()> {
    let mut form = FormState::new();
    let mut stdout = std::io::stdout();

    println!("Prevent Waste at Home. Let's set a goal!");
    print_help();

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Edit(category, raw)) => {
                debug!(field = category.field_id(), raw, "edit");
                let _ = form.apply_input(category, raw);
                print_view(&form.view());
            }
            Ok(Command::Show) => print_view(&form.view()),
            Ok(Command::Action) => {
                if !form.export_available() {
                    println!("Take Action is not available yet.");
                } else {
                    match export_poster(&form, options).await {
                        Ok(path) => println!("✓ Poster saved to {}", path.display()),
                        Err(e) => println!("Error: {e}"),
                    }
                }
            }
            Ok(Command::Reset) => {
                form.reset();
                println!("Form cleared.");
            }
            Ok(Command::Help) => print_help(),
            Ok(Command::Quit) => break,
            Err(message) => println!("{message}"),
        }
        stdout.flush().context("Failed to flush stdout")?;
    }

    Ok(())
}

fn print_help() {
    println!("Enter `<field> <value>` to set a goal (an empty value clears it):");
    for category in WasteCategory::ALL {
        println!("  {:<14} {}", category.field_id(), category.placeholder());
    }
    println!("Other commands: show, action, reset, help, quit");
}
