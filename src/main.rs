mod cli;

use std::collections::BTreeMap;

use cli::{Cli, Commands, Show};
use fontprefs::{ConfigParser, Diagnostics, FontSource, SystemFont, SystemFontSource};

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{filter::LevelFilter, prelude::*, EnvFilter};

/// What `$ fontprefs show` prints
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "kebab-case")]
struct Settings {
    font_name: String,
    font_size: u32,
    flags: BTreeMap<String, bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<BTreeMap<String, String>>,
}

impl Settings {
    fn resolve<D: Diagnostics>(parser: &ConfigParser<D>, show: &Show) -> Self {
        let flags = show
            .flags
            .iter()
            .map(|flag| (flag.name.clone(), parser.get_boolean(&flag.name, flag.default)))
            .collect();
        let properties = show.raw.then(|| {
            parser
                .properties()
                .iter()
                .map(|(key, value)| (key.to_owned(), value.to_owned()))
                .collect()
        });

        Self {
            font_name: parser.get_font_name(&show.default_font),
            font_size: parser.get_font_size(show.default_size),
            flags,
            properties,
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_filter(env_filter),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let Cli { command } = Cli::parse();
    match command {
        Commands::Show(show) => show_settings(&show),
        Commands::Fonts(fonts) => {
            let installed = SystemFontSource.installed_fonts();
            for line in font_listing(&installed, fonts.filter.as_deref()) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

fn show_settings(show: &Show) -> anyhow::Result<()> {
    let mut parser = ConfigParser::with_system_fonts();
    if let Some(base_dir) = &show.base_dir {
        parser = parser.with_base_dir(base_dir);
    }

    if !parser.load_config(&show.file_path) {
        anyhow::bail!("Failed loading '{}'", show.file_path.display());
    }

    let settings = Settings::resolve(&parser, show);
    let rendered = toml::to_string(&settings).context("Failed serializing settings")?;
    print!("{rendered}");
    Ok(())
}

fn font_listing(fonts: &[SystemFont], filter: Option<&str>) -> Vec<String> {
    let filter = filter.map(str::to_lowercase);
    fonts
        .iter()
        .filter(|font| match &filter {
            Some(filter) => {
                font.family.to_lowercase().contains(filter)
                    || font.face_name.to_lowercase().contains(filter)
            }
            None => true,
        })
        .map(|font| format!("{}\t{}", font.family, font.face_name))
        .collect()
}
