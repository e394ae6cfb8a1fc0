use clap::{Parser, Subcommand};

mod lessons;
mod migrate;

#[derive(Debug, Parser)]
#[command(name = "afterschool-app", about = "Afterschool lessons admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate(migrate::MigrateArgs),
    Lessons(lessons::LessonsCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Migrate(args) => migrate::run(args).await,
            Commands::Lessons(command) => lessons::run(command).await,
        }
    }
}
