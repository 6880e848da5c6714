use super::demo;
use super::render::{
    print_messages, render_config, render_page, render_paste, render_statistics,
};
use super::setup::{
    BrowseCommands, Cli, Commands, CreateOptions, MiscCommands, PageArgs, PasteCommands,
};
use clap::Parser;
use env_logger::Env;
use securepaste::api::{CmdResult, ConfigAction, PasteClient};
use securepaste::backend::http::HttpBackend;
use securepaste::config::{self, ClientConfig};
use securepaste::error::{PasteError, Result};
use securepaste::model::{PasteOptions, PasteUpdate, Visibility};
use std::path::Path;

/// Languages shown by `stats`; the service reports at most ten.
const STATS_TOP_LANGUAGES: usize = 10;

struct AppContext {
    client: PasteClient<HttpBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_dir = config::config_dir()?;

    // Config is handled before the client exists so a bad stored URL can be fixed.
    if let Some(Commands::Misc(MiscCommands::Config { key, value })) = &cli.command {
        return handle_config(&config_dir, key.clone(), value.clone());
    }

    let ctx = init_context(&cli, &config_dir)?;

    match cli.command {
        Some(Commands::Paste(cmd)) => match cmd {
            PasteCommands::Create {
                title,
                content,
                options,
            } => handle_create(&ctx, &title, &content, options),
            PasteCommands::Get { id, password } => handle_get(&ctx, &id, password.as_deref()),
            PasteCommands::Update {
                id,
                title,
                content,
                language,
                visibility,
            } => handle_update(&ctx, &id, title, content, language, visibility),
            PasteCommands::Delete { id } => handle_delete(&ctx, &id),
        },
        Some(Commands::Browse(cmd)) => match cmd {
            BrowseCommands::Public { paging } => {
                print_listing(ctx.client.list_public_pastes(paging.page, paging.size)?)
            }
            BrowseCommands::Recent { paging } => {
                print_listing(ctx.client.list_recent_pastes(paging.page, paging.size)?)
            }
            BrowseCommands::Search { query, paging } => handle_search(&ctx, &query, paging),
            BrowseCommands::Language { language, paging } => print_listing(
                ctx.client
                    .list_by_language(&language, paging.page, paging.size)?,
            ),
            BrowseCommands::Stats => handle_stats(&ctx),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Demo => handle_demo(&ctx),
            MiscCommands::Health => handle_health(&ctx),
            MiscCommands::Config { .. } => Ok(()),
        },
        None => handle_demo(&ctx),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,securepaste=debug"
    } else {
        "warn"
    };
    // RUST_LOG, when set, wins over both defaults.
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .try_init();
}

/// Defaults, then the config file, then `SECUREPASTE_URL`, then `--url`.
fn init_context(cli: &Cli, config_dir: &Path) -> Result<AppContext> {
    let mut config = ClientConfig::load(config_dir).unwrap_or_else(|e| {
        log::warn!("Ignoring unreadable config in {}: {}", config_dir.display(), e);
        ClientConfig::default()
    });
    config.apply_env();
    if let Some(url) = &cli.url {
        config.set_base_url(url);
    }
    log::debug!("Using service at {}", config.base_url);

    Ok(AppContext {
        client: PasteClient::connect(&config)?,
    })
}

fn handle_create(
    ctx: &AppContext,
    title: &str,
    content: &str,
    options: CreateOptions,
) -> Result<()> {
    let mut paste_options = PasteOptions::new();
    if let Some(language) = options.language {
        paste_options = paste_options.language(language);
    }
    if let Some(name) = options.author_name {
        paste_options = paste_options.author_name(name);
    }
    if let Some(email) = options.author_email {
        paste_options = paste_options.author_email(email);
    }
    if let Some(visibility) = options.visibility {
        paste_options = paste_options.visibility(visibility);
    }
    if let Some(minutes) = options.expires_in {
        paste_options = paste_options.expires_in(minutes);
    }
    if let Some(password) = options.password {
        paste_options = paste_options.password(password);
    }

    let result = ctx.client.create_paste(title, content, paste_options)?;
    print_messages(&result.messages);
    print_pastes(&result);
    Ok(())
}

fn handle_get(ctx: &AppContext, id: &str, password: Option<&str>) -> Result<()> {
    let result = ctx.client.get_paste(id, password)?;
    print_pastes(&result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    ctx: &AppContext,
    id: &str,
    title: Option<String>,
    content: Option<String>,
    language: Option<String>,
    visibility: Option<Visibility>,
) -> Result<()> {
    let update = PasteUpdate {
        title,
        content,
        language,
        visibility,
    };
    let result = ctx.client.update_paste(id, &update)?;
    print_messages(&result.messages);
    print_pastes(&result);
    Ok(())
}

fn handle_delete(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.client.delete_paste(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: &str, paging: PageArgs) -> Result<()> {
    let result = ctx.client.search_pastes(query, paging.page, paging.size)?;
    print_listing(result)
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.client.get_statistics()?;
    if let Some(stats) = &result.statistics {
        print!("{}", render_statistics(stats, STATS_TOP_LANGUAGES));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_health(ctx: &AppContext) -> Result<()> {
    match ctx.client.health_status() {
        Ok(result) => {
            print_messages(&result.messages);
            match result.health {
                Some(health) if health.is_up() => Ok(()),
                _ => Err(PasteError::Unavailable(ctx.client.describe())),
            }
        }
        Err(e) => {
            log::warn!("Health request failed: {}", e);
            Err(PasteError::Unavailable(ctx.client.describe()))
        }
    }
}

fn handle_demo(ctx: &AppContext) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo::run(&ctx.client, &mut out)
}

fn handle_config(config_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = securepaste::api::config(config_dir, action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_pastes(result: &CmdResult) {
    for paste in &result.pastes {
        print!("{}", render_paste(paste));
    }
}

fn print_listing(result: CmdResult) -> Result<()> {
    if let Some(page) = &result.page {
        print!("{}", render_page(page));
    }
    print_messages(&result.messages);
    Ok(())
}
