use crate::use_cases::{ApplyUpdateUseCase, ResolveQueryUseCase};
use ferrous_dyndns_domain::{
    DnsMessage, DomainError, Opcode, ResourceRecord, UpdateOutcome, UpdateRecord,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What the core produced for one inbound message.
#[derive(Debug)]
pub enum DnsReply {
    /// QUERY: records for the answer section.
    Answer(Vec<ResourceRecord>),
    /// UPDATE: the reply carries no records.
    Updated(UpdateReport),
    /// Any other opcode. Nothing is sent back.
    Unsupported(Opcode),
}

/// Per-record results of an UPDATE, in processing order.
#[derive(Debug, Default)]
pub struct UpdateReport {
    pub results: Vec<(UpdateRecord, Result<UpdateOutcome, DomainError>)>,
}

impl UpdateReport {
    pub fn appended(&self) -> usize {
        self.count(|outcome| matches!(outcome, UpdateOutcome::Appended(_)))
    }

    pub fn deleted(&self) -> usize {
        self.count(|outcome| matches!(outcome, UpdateOutcome::Deleted { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(UpdateOutcome::is_skipped)
    }

    pub fn failed(&self) -> usize {
        self.results.iter().filter(|(_, r)| r.is_err()).count()
    }

    fn count(&self, predicate: impl Fn(&UpdateOutcome) -> bool) -> usize {
        self.results
            .iter()
            .filter(|(_, r)| matches!(r, Ok(outcome) if predicate(outcome)))
            .count()
    }
}

pub struct HandleDnsMessageUseCase {
    apply_update: Arc<ApplyUpdateUseCase>,
    resolve_query: Arc<ResolveQueryUseCase>,
}

impl HandleDnsMessageUseCase {
    pub fn new(
        apply_update: Arc<ApplyUpdateUseCase>,
        resolve_query: Arc<ResolveQueryUseCase>,
    ) -> Self {
        Self {
            apply_update,
            resolve_query,
        }
    }

    pub async fn execute(&self, message: &DnsMessage) -> DnsReply {
        match message.opcode {
            Opcode::Query => {
                let answers = self.resolve_query.execute(&message.questions).await;
                DnsReply::Answer(answers)
            }
            Opcode::Update => DnsReply::Updated(self.apply(message).await),
            other => {
                debug!(opcode = %other, "Unsupported opcode, message ignored");
                DnsReply::Unsupported(other)
            }
        }
    }

    /// Every authority record is applied once per question. A failing record
    /// never stops the ones after it.
    async fn apply(&self, message: &DnsMessage) -> UpdateReport {
        let mut report = UpdateReport::default();

        for question in &message.questions {
            for record in &message.authority {
                let result = self.apply_update.execute(record).await;
                if let Err(e) = &result {
                    warn!(
                        zone = %question.name,
                        name = %record.name,
                        record_type = %record.record_type,
                        error = %e,
                        "Update record failed"
                    );
                }
                report.results.push((record.clone(), result));
            }
        }

        info!(
            appended = report.appended(),
            deleted = report.deleted(),
            skipped = report.skipped(),
            failed = report.failed(),
            "Update processed"
        );

        report
    }
}
