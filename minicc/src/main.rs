use std::fs;
use clap::{Parser, Subcommand};

use minicc::render::RenderFormat;
use minicc::{Config, Frontend};

#[derive(Parser)]
#[command(name = "minicc")]
#[command(about = "Lexer and parser for a tiny subset of C", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Разбить исходник на токены
    Lex {
        /// Исходник
        input: String,

        /// Печатать каждый токен в stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Распарсить и показать ast
    Parse {
        /// Исходник
        input: String,

        /// Печатать каждый токен в stderr
        #[arg(short, long)]
        verbose: bool,

        /// Формат вывода
        #[arg(short, long, default_value = "tree")]
        format: String,
    },

    /// Список форматов вывода
    Formats,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lex { input, verbose } => {
            let source = fs::read_to_string(&input)?;
            let frontend = Frontend::new(Config { verbose });

            for token in frontend.lex(&source)? {
                println!("{}", token);
            }
        }
        Commands::Parse { input, verbose, format } => {
            let Some(format) = RenderFormat::from_name(&format) else {
                eprintln!("Unknown format: {}", format);
                return Ok(());
            };

            let source = fs::read_to_string(&input)?;
            let frontend = Frontend::new(Config { verbose });
            let tokens = frontend.lex(&source)?;
            let program = frontend.parse(tokens)?;

            print!("{}", format.create().render(&program));
            if format == RenderFormat::Debug {
                println!();
            }
        }
        Commands::Formats => {
            println!("Supported formats:");
            for format in RenderFormat::all() {
                println!("  {:6} - {}", format.name(), format.description());
            }
        }
    }

    Ok(())
}
