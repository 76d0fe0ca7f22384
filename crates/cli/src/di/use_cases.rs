use super::Repositories;
use ferrous_dyndns_application::ports::RecordStore;
use ferrous_dyndns_application::use_cases::{
    ApplyUpdateUseCase, HandleDnsMessageUseCase, ResolveQueryUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub handle_dns_message: Arc<HandleDnsMessageUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories) -> Self {
        let store: Arc<dyn RecordStore> = repos.record_store.clone();

        let apply_update = Arc::new(ApplyUpdateUseCase::new(store.clone()));
        let resolve_query = Arc::new(ResolveQueryUseCase::new(store));

        Self {
            handle_dns_message: Arc::new(HandleDnsMessageUseCase::new(apply_update, resolve_query)),
        }
    }
}
