use std::path::PathBuf;

use clap::Args;

use zonectl_aws_core::{config::AwsServiceConfig, logging::init_cli_logger};

use crate::{client::Route53Client, config::Route53Config};

/// Flags shared by every zonectl binary.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Directory holding aws/config.ron and aws/route53/config.ron.
    #[arg(long, env = "ZONECTL_CONFIG_DIR", default_value = ".")]
    pub config_dir: PathBuf,

    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Installs logging and loads the Route53 config.
    pub fn init(&self) -> anyhow::Result<Route53Config> {
        init_cli_logger(self.verbose);
        Route53Config::try_load(&self.config_dir)
    }
}

/// Builds the SDK-backed client. With `mutating`, also checks the credentials
/// against the configured account id, if one is set.
pub async fn connect(config: &Route53Config, mutating: bool) -> anyhow::Result<Route53Client> {
    if mutating && config.aws.account_id.is_some() {
        let account_id = config.verify_sts().await?;
        tracing::info!("Credentials verified for account {}", account_id);
    }

    Ok(Route53Client::new(&config.aws).await)
}
