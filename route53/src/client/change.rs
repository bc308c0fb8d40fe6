use aws_sdk_route53::types::{Change, ChangeAction, ChangeBatch, ChangeInfo, ResourceRecord, ResourceRecordSet, RrType};

use crate::{
    error::Route53Error,
    resource::{ChangeOutcome, NameserverChange, RecordChangeAction},
};

use super::{Route53Client, change_outcome};

impl From<RecordChangeAction> for ChangeAction {
    fn from(action: RecordChangeAction) -> Self {
        match action {
            RecordChangeAction::Create => ChangeAction::Create,
            RecordChangeAction::Delete => ChangeAction::Delete,
            RecordChangeAction::Upsert => ChangeAction::Upsert,
        }
    }
}

/// Builds the one-change batch for an NS record set, keeping nameserver order.
pub fn to_change_batch(change: &NameserverChange) -> Result<ChangeBatch, Route53Error> {
    let mut record_set_builder = ResourceRecordSet::builder()
        .name(&change.name)
        .r#type(RrType::Ns)
        .ttl(change.ttl);

    for name_server in &change.name_servers {
        record_set_builder = record_set_builder.resource_records(ResourceRecord::builder().value(name_server).build()?);
    }

    let batch = ChangeBatch::builder()
        .set_comment((!change.comment.is_empty()).then(|| change.comment.clone()))
        .changes(
            Change::builder()
                .action(ChangeAction::from(change.action))
                .resource_record_set(record_set_builder.build()?)
                .build()?,
        )
        .build()?;

    Ok(batch)
}

impl Route53Client {
    pub async fn do_change_resource_record_sets(&self, change: &NameserverChange) -> Result<ChangeOutcome, Route53Error> {
        let output = self
            .client
            .change_resource_record_sets()
            .hosted_zone_id(&change.hosted_zone_id)
            .change_batch(to_change_batch(change)?)
            .send()
            .await?;

        let change_info: Option<&ChangeInfo> = output.change_info().into();
        match change_info {
            Some(info) => Ok(change_outcome(info)),
            None => Err(Route53Error::Service {
                code:    String::from("MissingChangeInfo"),
                message: format!("ChangeResourceRecordSets on {} returned no change info", change.hosted_zone_id),
            }),
        }
    }
}
