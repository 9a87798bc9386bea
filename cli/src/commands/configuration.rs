use std::process::exit;

use catalog::config;

use crate::cli::{ConfigCommand, UpdateConfiguration};

fn list_and_exit() {
    println!(
        "Configuration file {}:\n",
        config::configuration_file().to_string_lossy()
    );

    match config::load().and_then(|cfg| config::application_config_to_string(&cfg)) {
        Ok(toml_as_string) => {
            println!("{toml_as_string}");
        }
        Err(e) => {
            eprintln!("ERROR: Unable to read the configuration: {e}");
            exit(4);
        }
    }
    exit(0);
}

fn update_and_exit(update: UpdateConfiguration) {
    let mut app_config = match config::load() {
        Ok(ac) => ac,
        Err(e) => {
            eprintln!(
                "ERROR: Unable to load configuration file {}, reason:{}",
                config::configuration_file().to_string_lossy(),
                e
            );
            exit(4);
        }
    };
    if let Some(database) = update.database {
        app_config.application_data.database = database;
    }
    if let Some(export_path) = update.export_path {
        app_config.export.default_path = export_path;
    }
    if let Some(refresh_secs) = update.refresh_secs {
        if refresh_secs == 0 {
            eprintln!("ERROR: The refresh interval must be at least one second");
            exit(2);
        }
        app_config.ui.refresh_interval_secs = refresh_secs;
    }
    if let Err(e) = config::save(&app_config) {
        eprintln!(
            "ERROR: Unable to save configuration file {}, reason:{}",
            config::configuration_file().to_string_lossy(),
            e
        );
        exit(4);
    }
    println!(
        "Configuration saved to {}",
        config::configuration_file().to_string_lossy()
    );
    exit(0);
}

pub fn execute(cmd: ConfigCommand) {
    match cmd {
        ConfigCommand::List => list_and_exit(),
        ConfigCommand::Update(update) => update_and_exit(update),
        ConfigCommand::Remove => match config::remove() {
            Ok(()) => {
                println!(
                    "Configuration file {} removed",
                    config::configuration_file().to_string_lossy()
                );
            }
            Err(e) => {
                println!(
                    "ERROR:Unable to remove configuration file {} : {}",
                    config::configuration_file().to_string_lossy(),
                    e
                );
            }
        },
    }
}
