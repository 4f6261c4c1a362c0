use std::process;

use clap::Parser;

use micro_c::backends::BackendType;
use micro_c::error::CompileError;
use micro_c::parser;

#[derive(Parser)]
#[command(name = "micro-c")]
#[command(about = "C-like expression compiler for x86-64", version)]
struct Cli {
    /// Исходная программа целиком, одним аргументом
    source: String,

    /// Нужная архитектура
    #[arg(short, long, default_value = "x86_64")]
    target: String,

    /// Показать токены (в stderr)
    #[arg(long)]
    show_tokens: bool,

    /// Показать ast (в stderr)
    #[arg(long)]
    show_ast: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        eprintln!("{}", error.report(&cli.source));
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CompileError> {
    let backend_type = BackendType::all()
        .into_iter()
        .find(|backend| backend.name() == cli.target)
        .ok_or_else(|| CompileError::UnknownTarget {
            name: cli.target.clone(),
        })?;

    if cli.show_tokens {
        for token in parser::lexer::tokenize(&cli.source)? {
            eprintln!("{token:?}");
        }
    }

    let program = parser::parse(&cli.source)?;

    if cli.show_ast {
        eprintln!("{program:#?}");
    }

    let mut backend = backend_type.create();
    let assembly = backend.compile(&program)?;

    // В stdout попадает только ассемблер, и только когда конвейер прошёл целиком
    print!("{assembly}");
    Ok(())
}
