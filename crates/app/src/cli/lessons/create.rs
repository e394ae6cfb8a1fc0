use afterschool_app::{
    database::{self, PoolSettings},
    domain::lessons::{
        data::NewLesson,
        records::LessonUuid,
        repositories::{LessonsRepository, PgLessonsRepository},
    },
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct CreateLessonArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    #[arg(long)]
    subject: String,

    #[arg(long)]
    location: String,

    /// Price in minor units
    #[arg(long)]
    price: u64,

    /// Available places
    #[arg(long)]
    spaces: u32,

    /// Image file name relative to the images directory
    #[arg(long, default_value = "")]
    image: String,
}

pub(crate) async fn run(args: CreateLessonArgs) -> Result<(), String> {
    if args.subject.trim().is_empty() || args.location.trim().is_empty() {
        return Err("subject and location cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url, PoolSettings::default())
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let lesson = PgLessonsRepository::new(pool)
        .create_lesson(NewLesson {
            uuid: LessonUuid::new(),
            subject: args.subject.trim().to_string(),
            location: args.location.trim().to_string(),
            price: args.price,
            image: args.image,
            spaces: args.spaces,
        })
        .await
        .map_err(|error| format!("failed to create lesson: {error}"))?;

    println!("lesson_uuid: {}", lesson.uuid);
    println!("subject: {}", lesson.subject);
    println!("spaces: {}", lesson.spaces);

    Ok(())
}
