use bookshelf::api::LibraryApi;
use bookshelf::config::LibraryConfig;
use bookshelf::error::Result;
use bookshelf::nav::Navigator;
use bookshelf::store::fs::CsvStore;
use clap::Parser;
use env_logger::{Builder, Env};
use log::{error, info};

mod cli;
use cli::args::Cli;
use cli::terminal::TermPresenter;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    // RUST_LOG wins; otherwise stay quiet so the menus are readable.
    let level = if verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    let mut store = CsvStore::new(&config.store_path);
    if store.init()? {
        info!("created empty catalog at {}", store.path().display());
    }

    let api = LibraryApi::new(store, config);
    if let Err(e) = api.check_schema() {
        error!("refusing to start: {}", e);
        return Err(e);
    }

    let mut navigator = Navigator::new(api, TermPresenter::new());
    navigator.run()
}

fn load_config(cli: &Cli) -> Result<LibraryConfig> {
    let mut config = match &cli.config {
        Some(path) => LibraryConfig::load(path)?,
        None => LibraryConfig::default(),
    };
    if let Some(path) = &cli.file {
        config = config.with_store_path(path);
    }
    if let Some(page_size) = cli.page_size {
        config = config.with_page_size(page_size);
    }
    config.validate()?;
    Ok(config)
}
