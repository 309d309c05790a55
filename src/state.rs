use crate::{
    config::AppConfig,
    services::{mail::MailService, store::TripStore},
};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: TripStore,
    pub mailer: MailService,
}

impl AppState {
    pub fn new(config: AppConfig, store: TripStore, mailer: MailService) -> Self {
        Self {
            config,
            store,
            mailer,
        }
    }
}
