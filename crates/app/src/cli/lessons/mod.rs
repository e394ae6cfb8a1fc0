use clap::{Args, Subcommand};

mod create;
mod list;

#[derive(Debug, Args)]
pub(crate) struct LessonsCommand {
    #[command(subcommand)]
    command: LessonsSubcommand,
}

#[derive(Debug, Subcommand)]
enum LessonsSubcommand {
    Create(create::CreateLessonArgs),
    List(list::ListLessonsArgs),
}

pub(crate) async fn run(command: LessonsCommand) -> Result<(), String> {
    match command.command {
        LessonsSubcommand::Create(args) => create::run(args).await,
        LessonsSubcommand::List(args) => list::run(args).await,
    }
}
