use afterschool_app::{
    database::{self, PoolSettings},
    domain::lessons::repositories::{LessonsRepository, PgLessonsRepository},
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct ListLessonsArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ListLessonsArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url, PoolSettings::default())
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let lessons = PgLessonsRepository::new(pool)
        .list_lessons()
        .await
        .map_err(|error| format!("failed to list lessons: {error}"))?;

    if lessons.is_empty() {
        println!("no lessons found");
        return Ok(());
    }

    for lesson in lessons {
        println!("lesson_uuid: {}", lesson.uuid);
        println!("subject: {}", lesson.subject);
        println!("location: {}", lesson.location);
        println!("price: {}", lesson.price);
        println!("spaces: {}", lesson.spaces);
        println!(
            "image: {}",
            if lesson.image.is_empty() {
                "none"
            } else {
                &lesson.image
            }
        );
        println!();
    }

    Ok(())
}
