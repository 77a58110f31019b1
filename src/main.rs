use clap::Parser;
use fplopt::cli::diagnostic::RunDiagnostic;
use fplopt::cli::{self, Cli, Commands};

fn main() {
    let _ = dotenvy::dotenv();

    let args = Cli::parse();
    let result = match args.command {
        Commands::Run(run) => cli::run::execute(&run),
        Commands::Check(arg) => cli::check::execute(&arg.config),
        Commands::Models => cli::models::list(),
    };

    if let Err(e) = result {
        let report = miette::Report::new(RunDiagnostic::from(e));
        eprintln!("{report:?}");
        std::process::exit(1);
    }
}
