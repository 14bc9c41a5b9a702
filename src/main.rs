use birthday_buddy::{
    config,
    core::{recurrence, store::BirthdayStore},
    errors::Result,
    models::BirthdayRecord,
    notifications::ReminderScheduler,
    storage::FileStore,
};
use chrono::Local;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Make it non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = config::load_app_configuration()?;
    info!("Successfully processed application configuration.");

    // 4. Open the birthday store over file-backed storage
    let storage = FileStore::new(&app_config.storage_dir);
    let mut store = BirthdayStore::open(Box::new(storage), app_config.save_key.as_str());

    let today = Local::now().date_naive();

    // 5. Seed sample records if configured and the store is empty
    if store.is_empty() && app_config.use_sample_data {
        info!("Seeding store with sample birthdays.");
        for record in BirthdayRecord::sample_data(today) {
            store.add(record);
        }
    }

    // 6. Today's reminder, if anyone is celebrating
    let scheduler = ReminderScheduler::new(app_config.reminder_hour);
    match scheduler.daily_reminder(store.records(), today) {
        Some(reminder) => info!(
            "Daily reminder (scheduled for {}:00): {}",
            scheduler.scheduled_hour(),
            reminder.body
        ),
        None => info!("No birthdays today."),
    }

    // 7. Print the sectioned overview
    for section in store.sectioned(today) {
        println!("{}", section.title);
        if section.records.is_empty() {
            println!("  (none)");
        }
        for record in &section.records {
            let days = recurrence::days_until_next_occurrence(record.date, today);
            println!(
                "  {} - {} ({} days)",
                record.name,
                record.date.format("%B %-d"),
                days
            );
        }
    }

    Ok(())
}
