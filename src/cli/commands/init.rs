use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::storage::SqliteStorage;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing rWorkouts…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    let storage = SqliteStorage::open(&db_path)?;

    println!("✅ Database initialized at {}", &db_path);

    storage.audit(
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 rWorkouts initialization completed!");
    Ok(())
}
