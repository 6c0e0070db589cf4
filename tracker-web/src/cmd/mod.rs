//! cmd

use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct TrackerCli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Parser)]
pub enum Commands {
    #[command(name = "run", about = "run the asset tracker http server")]
    Run {
        #[arg(long, short, value_parser = verify_input_file, default_value = "config.toml", action=ArgAction::Set)]
        config: PathBuf,
    },
}

fn verify_input_file(input: &str) -> anyhow::Result<PathBuf> {
    let pb = PathBuf::from(input);
    if pb.exists() {
        anyhow::Ok(pb)
    } else {
        anyhow::bail!("config file {} does not exist", input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_rejected() {
        let res = TrackerCli::try_parse_from(["tracker", "run", "--config", "/no/such/file.toml"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_existing_config_is_accepted() {
        let path = std::env::temp_dir();
        let cli = TrackerCli::try_parse_from(["tracker", "run", "-c", path.to_str().unwrap()])
            .unwrap();
        let Commands::Run { config } = cli.command;
        assert_eq!(config, path);
    }
}
