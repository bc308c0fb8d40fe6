use clap::Parser;
use zonectl_route53::{
    cli::{CommonArgs, connect},
    op::Route53Op,
    output::to_json,
    resource::{HostedZoneRequest, VpcAssociation},
    zones::create_hosted_zone,
};

/// Create a Route53 hosted zone and print its id and delegated nameservers.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Domain name of the new zone. A trailing dot is recommended, e.g. "example.com.".
    domain: String,

    /// Zone comment. Defaults to `zone_comment` from the Route53 config.
    #[arg(long)]
    comment: Option<String>,

    /// Reuse a caller reference to retry an earlier request idempotently.
    #[arg(long)]
    caller_reference: Option<String>,

    /// Create a private zone. Route53 needs a VPC for it.
    #[arg(long, requires = "vpc_id")]
    private: bool,

    #[arg(long, requires = "private")]
    vpc_id: Option<String>,

    /// Region of the VPC. Defaults to the configured AWS region.
    #[arg(long, requires = "vpc_id")]
    vpc_region: Option<String>,

    /// Print the planned request instead of sending it.
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

    let comment = cli.comment.unwrap_or_else(|| config.zone_comment.clone());
    let mut request = HostedZoneRequest::new(cli.domain, comment);
    if let Some(caller_reference) = cli.caller_reference {
        request = request.with_caller_reference(caller_reference);
    }
    if cli.private {
        let vpc = cli.vpc_id.map(|vpc_id| VpcAssociation {
            vpc_id,
            vpc_region: cli.vpc_region.unwrap_or_else(|| config.aws.region.clone()),
        });
        request = request.private(vpc);
    }

    if cli.dry_run {
        let op = Route53Op::CreateHostedZone(request);
        tracing::info!("Dry run: {}", op.describe());
        println!("{}", op.to_ron()?);
        return Ok(());
    }

    let client = connect(&config, true).await?;

    let Some(created) = create_hosted_zone(&client, &request).await else {
        eprintln!("Failed to create hosted zone {}. See the log above for the cause.", request.name);
        std::process::exit(1);
    };

    if cli.json {
        println!("{}", to_json(&created)?);
    } else {
        println!("Hosted Zone created successfully.");
        println!("Hosted Zone ID: {}", created.id);
        println!("Name Servers: {}", created.name_servers.join(", "));
        if let Some(change) = created.change {
            println!("Change: {} ({})", change.change_id, change.status);
        }
    }

    Ok(())
}
