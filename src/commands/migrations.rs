use crate::{
    db::{
        db::Db,
        migrations::{get_db_version, needs_migration, MigrationManager},
    },
    libs::messages::Message,
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show current database version
    Status,
    /// Show migration history
    History,
}

pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let conn = Db::new_without_migrations()?;

    match args.command {
        MigrationsCommand::Status => {
            msg_print!(Message::DatabaseVersion(get_db_version(&conn)?));
            if needs_migration(&conn)? {
                msg_info!(Message::DatabaseNeedsUpdate);
            } else {
                msg_info!(Message::DatabaseUpToDate);
            }
        }
        MigrationsCommand::History => {
            let history = MigrationManager::new().get_migration_history(&conn)?;

            msg_print!(Message::MigrationHistory, true);
            for (version, name, applied_at) in history {
                println!("  v{}: {} (applied: {})", version, name, applied_at);
            }
        }
    }

    Ok(())
}
