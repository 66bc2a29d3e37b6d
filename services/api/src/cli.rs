use crate::render;
use crate::server;
use clap::{Args, Parser, Subcommand};
use saeum_academy::catalog::{Catalog, ALL_FILTER};
use saeum_academy::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Saeum Academy Site",
    about = "Serve the Saeum Academy site API or inspect its content from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the compiled-in site content
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// List every board with its post count
    Boards,
    /// Show the posts on one board
    Board { board: String },
    /// Show a single post
    Post { board: String, idx: u32 },
    /// Show the class schedule for a grade (g1, g2, g3, m3)
    Schedule(GradeListingArgs),
    /// Show the seminar listing for a grade (g1, g2, g3, m3)
    Seminar(GradeListingArgs),
    /// List teachers, optionally for one subject code
    Teachers {
        #[arg(long, default_value = ALL_FILTER)]
        category: String,
    },
    /// List branch locations
    Locations,
    /// Verify key uniqueness and category declarations
    Check,
}

#[derive(Args, Debug)]
pub(crate) struct GradeListingArgs {
    /// Grade key
    pub(crate) grade: String,
    /// Category filter key
    #[arg(long, default_value = ALL_FILTER)]
    pub(crate) category: String,
    /// Keyword searched in titles and keywords
    #[arg(long, default_value = "")]
    pub(crate) query: String,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Catalog { command } => run_catalog(command, Catalog::builtin()),
    }
}

fn run_catalog(command: CatalogCommand, catalog: &'static Catalog) -> Result<(), AppError> {
    match command {
        CatalogCommand::Boards => render::boards(catalog),
        CatalogCommand::Board { board } => render::board(catalog.board(&board)?),
        CatalogCommand::Post { board, idx } => render::post(catalog.post(&board, idx)?),
        CatalogCommand::Schedule(args) => render::schedule(catalog, &args)?,
        CatalogCommand::Seminar(args) => render::seminar(catalog, &args)?,
        CatalogCommand::Teachers { category } => render::teachers(catalog, &category),
        CatalogCommand::Locations => render::locations(catalog),
        CatalogCommand::Check => {
            catalog.validate()?;
            println!("Catalog OK");
        }
    }
    Ok(())
}
