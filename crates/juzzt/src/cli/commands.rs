//! # CLI Layer
//!
//! One possible UI client for juzzt. This is the only place that:
//! - knows about stdout and stderr
//! - parses arguments
//! - formats output for humans
//!
//! Everything else is delegated to [`juzztapp::api::JuzztApi`].

use super::render;
use super::setup::{init_logging, CartCommands, Cli, Commands, ConfigCommands, OutputMode};
use super::styles::Palette;
use clap::Parser;
use clapfig::{Clapfig, ConfigAction, SearchPath};
use juzztapp::api::JuzztApi;
use juzztapp::catalog::{GenreFilter, PriceRange};
use juzztapp::commands::CmdResult;
use juzztapp::config::JuzztConfig;
use juzztapp::error::{JuzztError, Result};
use juzztapp::init::{
    config_search_paths, initialize, load_config, resolve_data_dir, CONFIG_FILE,
};
use juzztapp::remote::{AuthService, CatalogSource, Credentials, Registration};
use juzztapp::store::StorageBackend;
use std::path::Path;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Config handling needs the data dir but not the API
    if let Some(Commands::Config { action }) = &cli.command {
        let data_dir = resolve_data_dir(cli.data.clone())?;
        return handle_config_command(action.as_ref(), &data_dir);
    }

    let ctx = initialize(cli.data.clone())?;
    tracing::debug!(data_dir = %ctx.data_dir.display(), "context ready");
    let mut api = ctx.api;

    let result = dispatch(&mut api, cli.command)?;
    print_result(&result, cli.output)
}

/// Runs one command against the facade. A bare `juzzt` browses page one.
fn dispatch<B, R>(api: &mut JuzztApi<B, R>, command: Option<Commands>) -> Result<CmdResult>
where
    B: StorageBackend + Clone,
    R: CatalogSource + AuthService,
{
    let command = command.unwrap_or(Commands::Records {
        genre: None,
        min: None,
        max: None,
        sort: None,
        page: 1,
    });

    match command {
        Commands::Records {
            genre,
            min,
            max,
            sort,
            page,
        } => {
            let mut state = api.catalog_state();
            if let Some(genre) = genre {
                let filter: GenreFilter = genre.parse().unwrap_or_default();
                state.set_genre(filter);
            }
            if min.is_some() || max.is_some() {
                let current = state.price();
                state.set_price_range(PriceRange::new(
                    min.unwrap_or(current.min),
                    max.unwrap_or(current.max),
                ));
            }
            if let Some(sort) = sort {
                state.set_sort(sort);
            }
            state.set_page(page);
            api.browse(&state)
        }
        Commands::Genres => api.genres(),
        Commands::Sale => api.sale(),
        Commands::Record { id } => api.record(id),
        Commands::Cart { action } => match action {
            None => Ok(api.cart()),
            Some(CartCommands::Add { id }) => api.add_to_cart(id),
            Some(CartCommands::Remove { id }) => api.remove_from_cart(id),
            Some(CartCommands::Qty { id, quantity }) => api.update_quantity(id, quantity),
            Some(CartCommands::Clear) => api.clear_cart(),
        },
        Commands::Register {
            name,
            email,
            password,
        } => api.register(&Registration {
            name,
            email,
            password,
        }),
        Commands::Login { email, password } => api.login(&Credentials { email, password }),
        Commands::Logout => api.logout(),
        Commands::Profile => api.profile(),
        Commands::Config { .. } => Err(JuzztError::Api(
            "config is handled before dispatch".to_string(),
        )),
    }
}

fn print_result(result: &CmdResult, output: OutputMode) -> Result<()> {
    match output {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputMode::Text => {
            print!("{}", render_result(result, &Palette::detect()));
        }
    }
    Ok(())
}

/// Notifications first, then the data, then command messages.
pub fn render_result(result: &CmdResult, palette: &Palette) -> String {
    let mut out = render::render_notifications(&result.notifications, palette);
    if let (Some(page), Some(criteria)) = (&result.page, &result.criteria) {
        out.push_str(&render::render_page(page, criteria, palette));
    }
    out.push_str(&render::render_records(&result.listed_records, palette));
    if let Some(record) = &result.record {
        out.push_str(&render::render_record_detail(record, palette));
    }
    if !result.genres.is_empty() {
        out.push_str(&render::render_genres(&result.genres, palette));
    }
    if let Some(cart) = &result.cart {
        out.push_str(&render::render_cart(cart, palette));
    }
    if let Some(profile) = &result.profile {
        out.push_str(&render::render_profile(profile, palette));
    }
    out.push_str(&render::render_messages(&result.messages, palette));
    out
}

/// `juzzt config`: show the merged config, or get/set/gen one key.
///
/// `set` writes to the data dir's `juzzt.toml`, so only that dir is searched.
fn handle_config_command(action: Option<&ConfigCommands>, data_dir: &Path) -> Result<()> {
    let action = match action {
        None => {
            print!("{}", describe_config(&load_config(data_dir))?);
            return Ok(());
        }
        Some(ConfigCommands::Gen { output }) => ConfigAction::Gen {
            output: output.clone(),
        },
        Some(ConfigCommands::Get { key }) => ConfigAction::Get {
            key: key.clone(),
            scope: None,
        },
        Some(ConfigCommands::Set { key, value }) => ConfigAction::Set {
            key: key.clone(),
            value: value.clone(),
            scope: None,
        },
    };
    let paths = match action {
        ConfigAction::Set { .. } => vec![data_dir.to_path_buf()],
        _ => config_search_paths(data_dir),
    };
    let output = Clapfig::builder::<JuzztConfig>()
        .app_name("juzzt")
        .file_name(CONFIG_FILE)
        .search_paths(paths.into_iter().map(SearchPath::Path).collect())
        .no_env()
        .strict(false)
        .handle(&action)
        .map_err(|e| JuzztError::Api(format!("config: {}", e)))?;
    println!("{}", output.to_string().trim_end());
    Ok(())
}

/// One `key = value` line per setting, sorted by key.
fn describe_config(config: &JuzztConfig) -> Result<String> {
    let table = toml::Value::try_from(config).map_err(|e| JuzztError::Api(e.to_string()))?;
    let mut out = String::new();
    if let toml::Value::Table(settings) = table {
        for (key, value) in &settings {
            out.push_str(&format!("{} = {}\n", key, value));
        }
    }
    Ok(out)
}
