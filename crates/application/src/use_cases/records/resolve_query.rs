use ferrous_dyndns_domain::{DomainName, Question, ResourceRecord};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::ports::RecordStore;

pub struct ResolveQueryUseCase {
    store: Arc<dyn RecordStore>,
}

impl ResolveQueryUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Answer every question from the store. A question that fails is left
    /// out of the answer; the others are still answered.
    #[instrument(skip_all, fields(questions = questions.len()))]
    pub async fn execute(&self, questions: &[Question]) -> Vec<ResourceRecord> {
        let mut answers = Vec::new();

        for question in questions {
            let name = match DomainName::parse(&question.name) {
                Ok(name) => name,
                Err(e) => {
                    debug!(name = %question.name, error = %e, "Skipping question with invalid name");
                    continue;
                }
            };

            let records = match self.store.get(name.as_str(), question.record_type).await {
                Ok(records) => records,
                Err(e) => {
                    warn!(
                        name = %question.name,
                        record_type = %question.record_type,
                        error = %e,
                        "Lookup failed, question skipped"
                    );
                    continue;
                }
            };

            let before = answers.len();
            answers.extend(records.into_iter().filter(|rr| rr.name == name));

            debug!(
                name = %question.name,
                record_type = %question.record_type,
                answers = answers.len() - before,
                "Question answered"
            );
        }

        answers
    }
}
