use std::path::PathBuf;

use clap::{value_parser, Args as ClapArgs, CommandFactory, Parser, Subcommand};

#[derive(Debug, PartialEq, Clone, Parser)]
#[command(version, about, arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Clone)]
pub enum Commands {
    Show(Show),
    Fonts(Fonts),
}

/// Load a preferences file and print the settings it resolves to
#[derive(ClapArgs, PartialEq, Debug, Clone)]
pub struct Show {
    /// Path to the preferences file. Relative paths start from the base directory
    #[arg(value_name = "FILE", default_value = "fontprefs.properties")]
    pub file_path: PathBuf,

    /// Directory that relative paths are resolved against
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Font used when `font.name` is missing or can't be found
    #[arg(long, value_name = "NAME", default_value = "SansSerif")]
    pub default_font: String,

    /// Size used when `font.size` is missing or invalid
    #[arg(
        long,
        value_name = "SIZE",
        default_value_t = 12,
        value_parser = value_parser!(u32).range(1..)
    )]
    pub default_size: u32,

    /// Boolean property to read, optionally with its default (which is `false` otherwise)
    #[arg(long = "flag", value_name = "NAME[=DEFAULT]", value_parser = parse_flag)]
    pub flags: Vec<Flag>,

    /// Also print every property exactly as it was loaded
    #[arg(long)]
    pub raw: bool,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Flag {
    pub name: String,
    pub default: bool,
}

fn parse_flag(s: &str) -> Result<Flag, String> {
    let (name, default) = match s.split_once('=') {
        Some((name, default)) => {
            let default = if default.eq_ignore_ascii_case("true") {
                true
            } else if default.eq_ignore_ascii_case("false") {
                false
            } else {
                return Err(format!("default must be `true` or `false`, not `{default}`"));
            };
            (name, default)
        }
        None => (s, false),
    };

    if name.is_empty() {
        return Err("property name can't be empty".to_owned());
    }

    Ok(Flag {
        name: name.to_owned(),
        default,
    })
}

/// List the fonts installed on this system
#[derive(ClapArgs, PartialEq, Debug, Clone, Default)]
pub struct Fonts {
    /// Only list fonts whose family or face name contains TEXT (ignoring case)
    #[arg(long, value_name = "TEXT")]
    pub filter: Option<String>,
}

pub fn command() -> clap::Command {
    Cli::command()
}
