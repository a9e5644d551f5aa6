//! The `thaidict` command-line client: argument dispatch, output, logging.

mod logging;
mod print;

use crate::args::{Cli, Commands};
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thaidict::api::{CmdMessage, ConfigAction, DictApi};
use thaidict::commands::config as config_cmd;
use thaidict::config::DictConfig;
use thaidict::error::{DictError, Result};
use thaidict::store::fs::{FileDictionary, FsBackend};
use thaidict::store::LoadStatus;

use print::{print_check, print_config, print_entries, print_entry, print_messages};

const HOME_ENV: &str = "THAIDICT_HOME";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let home = resolve_home()?;
    let config = DictConfig::load(&home)?;
    logging::init(cli.verbose, config.log_level.as_deref());

    let dict_path = cli
        .dict
        .clone()
        .unwrap_or_else(|| config.dictionary_path_in(&home));

    match &cli.command {
        Some(Commands::Config { key, value }) => {
            return handle_config(&home, key.clone(), value.clone())
        }
        Some(Commands::Path) => {
            println!("{}", dict_path.display());
            return Ok(());
        }
        _ => {}
    }

    let api = open_api(&dict_path)?;

    match cli.command {
        Some(Commands::Add {
            english,
            thai,
            category,
        }) => handle_add(&api, &english, &thai, category.as_deref()),
        Some(Commands::List { category }) => handle_list(&api, category.as_deref()),
        Some(Commands::Get { english }) => handle_get(&api, &english),
        Some(Commands::Update {
            english,
            thai,
            category,
        }) => handle_update(&api, &english, &thai, category.as_deref()),
        Some(Commands::Delete { english }) => handle_delete(&api, &english),
        Some(Commands::Clear { yes }) => handle_clear(&api, yes),
        Some(Commands::Search { term }) => handle_search(&api, &term),
        Some(Commands::Check { english, thai }) => handle_check(&api, &english, &thai),
        Some(Commands::Sort { field }) => handle_sort(&api, &field),
        Some(Commands::Import { file }) => handle_import(&api, &file),
        Some(Commands::Config { .. }) | Some(Commands::Path) => Ok(()),
        None => handle_list(&api, None),
    }
}

fn resolve_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "thaidict", "thaidict")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| DictError::Config("Could not determine a home directory".to_string()))
}

fn open_api(dict_path: &Path) -> Result<DictApi<FsBackend>> {
    let store = FileDictionary::open_path(dict_path)?;
    match store.load_status() {
        LoadStatus::Recovered { reason } => warn(format!(
            "Warning: {} could not be read ({}); starting with an empty dictionary. \
             The file will be overwritten by the next change.",
            store.location().display(),
            reason
        )),
        LoadStatus::Repaired { dropped } => warn(format!(
            "Warning: {} has {} unusable entries ({}) that were left out. \
             They will be removed from the file by the next change.",
            store.location().display(),
            dropped.len(),
            dropped
                .iter()
                .map(|key| format!("'{}'", key))
                .collect::<Vec<_>>()
                .join(", ")
        )),
        LoadStatus::Loaded | LoadStatus::Created => {}
    }
    Ok(DictApi::new(store))
}

fn warn(message: String) {
    eprintln!("{}", message.yellow());
}

fn handle_add(
    api: &DictApi<FsBackend>,
    english: &str,
    thai: &str,
    category: Option<&str>,
) -> Result<()> {
    let result = api.add_word(english, thai, category)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &DictApi<FsBackend>, category: Option<&str>) -> Result<()> {
    let result = match category {
        Some(category) => api.words_by_category(category)?,
        None => api.list_words()?,
    };
    print_entries(&result.entries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_get(api: &DictApi<FsBackend>, english: &str) -> Result<()> {
    let result = api.get_word(english)?;
    for entry in &result.entries {
        print_entry(entry);
    }
    Ok(())
}

fn handle_update(
    api: &DictApi<FsBackend>,
    english: &str,
    thai: &str,
    category: Option<&str>,
) -> Result<()> {
    let result = api.update_word(english, english, thai, category)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &DictApi<FsBackend>, english: &str) -> Result<()> {
    let result = api.delete_word(english)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(api: &DictApi<FsBackend>, yes: bool) -> Result<()> {
    if !yes {
        print_messages(&[CmdMessage::warning(format!(
            "This deletes all {} words. Re-run with --yes to confirm.",
            api.store().len()
        ))]);
        return Ok(());
    }
    let result = api.delete_all_words()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(api: &DictApi<FsBackend>, term: &str) -> Result<()> {
    let result = api.search_words(term)?;
    print_entries(&result.entries);
    Ok(())
}

fn handle_check(api: &DictApi<FsBackend>, english: &str, thai: &str) -> Result<()> {
    let result = api.check_translation(english, thai)?;
    if let Some(check) = &result.check {
        print_check(check);
    }
    Ok(())
}

fn handle_sort(api: &DictApi<FsBackend>, field: &str) -> Result<()> {
    let result = api.sort_words(field)?;
    print_entries(&result.entries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(api: &DictApi<FsBackend>, file: &Path) -> Result<()> {
    let result = api.import_csv(file)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(home: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = config_cmd::run(home, action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
