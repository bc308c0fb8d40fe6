use clap::Parser;
use zonectl_route53::{
    cli::{CommonArgs, connect},
    op::Route53Op,
    output::to_json,
    resource::NameserverChange,
    zones::{find_hosted_zone_id, update_nameservers},
};

/// Replace the NS record set of a hosted zone.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Domain name of the record set, with trailing dot, e.g. "example.com.".
    /// Also used to find the zone: the first zone whose name starts with it wins.
    domain: String,

    /// Nameservers, in the order they should be written.
    #[arg(required = true, num_args = 1..)]
    nameservers: Vec<String>,

    /// Skip the zone lookup and use this hosted zone id.
    #[arg(long)]
    zone_id: Option<String>,

    /// Record TTL in seconds. Defaults to `ns_ttl` from the Route53 config.
    #[arg(long)]
    ttl: Option<i64>,

    /// Print the planned change instead of submitting it.
    #[arg(long)]
    dry_run: bool,

    #[arg(long)]
    json: bool,

    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.common.init()?;

    let client = connect(&config, !cli.dry_run).await?;

    let zone_id = match cli.zone_id {
        Some(zone_id) => zone_id,
        None => match find_hosted_zone_id(&client, &cli.domain).await {
            Some(zone_id) => zone_id,
            None => {
                eprintln!("Hosted Zone ID not found for {}.", cli.domain);
                std::process::exit(1);
            }
        },
    };

    if !cli.json {
        println!("Hosted Zone ID for {}: {}", cli.domain, zone_id);
    }

    let change = NameserverChange::upsert(&zone_id, cli.domain, cli.nameservers)
        .with_ttl(cli.ttl.unwrap_or(config.ns_ttl))
        .with_comment(config.change_comment.clone());

    if cli.dry_run {
        let op = Route53Op::UpsertNameservers(change);
        tracing::info!("Dry run: {}", op.describe());
        println!("{}", op.to_ron()?);
        return Ok(());
    }

    let Some(outcome) = update_nameservers(&client, &change).await else {
        eprintln!("Failed to update nameservers for {}. See the log above for the cause.", change.name);
        std::process::exit(1);
    };

    if cli.json {
        println!("{}", to_json(&outcome)?);
    } else {
        println!("Nameserver update request submitted successfully.");
        println!("Change {} is {}", outcome.change_id, outcome.status);
    }

    Ok(())
}
