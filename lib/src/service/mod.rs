pub mod common_structs;
pub mod watson_service;

use anyhow::Result;

use crate::config::ClassifierConfig;


#[derive(Debug, Clone)]
pub struct CommonService {
    pub watson: watson_service::WatsonService,
}

impl CommonService {
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        Ok(Self {
            watson: watson_service::WatsonService::new(config)?,
        })
    }
}
