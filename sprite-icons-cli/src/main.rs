//! sprite-icons CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{RenderCommand, UrlCommand};

#[derive(Parser)]
#[command(name = "sprite-icons")]
#[command(version)]
#[command(about = "Render accessible SVG sprite icons", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./config.toml and the XDG config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the markup for an icon
    Render {
        /// Icon name (fragment identifier in the sprite)
        name: String,
        /// Width attribute, e.g. `24` or `100%`
        #[arg(long, default_value = "")]
        width: String,
        /// Height attribute
        #[arg(long, default_value = "")]
        height: String,
        /// `id` attribute of the `<svg>`
        #[arg(long)]
        id: Option<String>,
        /// `class` attribute of the `<svg>`
        #[arg(long)]
        class: Option<String>,
        /// Screen-reader description
        #[arg(long)]
        description: Option<String>,
    },
    /// Print the resolved icon sprite URL
    Url,
}

fn main() -> Result<()> {
    sprite_icons::observability::init()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            name,
            width,
            height,
            id,
            class,
            description,
        } => {
            let cmd = RenderCommand {
                name,
                width,
                height,
                id,
                class,
                description,
            };
            cmd.execute(cli.config.as_deref())?;
        }
        Commands::Url => {
            UrlCommand::execute(cli.config.as_deref())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "sprite-icons",
            "render",
            "angle-down",
            "--width",
            "12",
            "--class",
            "icon",
        ])
        .unwrap();

        match cli.command {
            Commands::Render {
                name, width, height, class, ..
            } => {
                assert_eq!(name, "angle-down");
                assert_eq!(width, "12");
                assert_eq!(height, "");
                assert_eq!(class.as_deref(), Some("icon"));
            }
            Commands::Url => panic!("expected render"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["sprite-icons", "url", "--config", "theme.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("theme.toml")));
    }
}
