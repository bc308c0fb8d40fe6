use clap::Parser;
use zonectl_route53::{
    cli::{CommonArgs, connect},
    output::listing_report,
    zones::try_list_hosted_zones,
};

/// List every Route53 hosted zone visible to the current credentials.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.common.init()?;

    let client = connect(&config, false).await?;
    let result = try_list_hosted_zones(&client).await;
    if let Err(ref e) = result {
        tracing::error!("Failed to list hosted zones: {}", e);
    }

    let report = listing_report(&result, cli.json)?;
    if let Some(stdout) = report.stdout {
        println!("{}", stdout);
    }
    if report.exit_code != 0 {
        std::process::exit(report.exit_code);
    }

    Ok(())
}
