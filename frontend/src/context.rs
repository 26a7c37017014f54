//! Site-wide services handed to every page through a Yew context.

use std::rc::Rc;

use shared::analytics::AnalyticsRelay;
use shared::scheduling::SchedulingWidget;
use shared::PublicConfig;

use crate::config::AppConfig;
use crate::services::calendly::CalendlyLoader;
use crate::services::gtag::GtagSink;
use crate::services::ApiClient;

pub type Analytics = AnalyticsRelay<GtagSink>;
pub type Scheduler = SchedulingWidget<CalendlyLoader>;

#[derive(Clone, PartialEq)]
pub struct SiteContext {
    pub config: Rc<AppConfig>,
    pub api: ApiClient,
    pub analytics: Analytics,
    pub scheduler: Scheduler,
    /// Remote settings; blank until the first fetch completes
    pub public_config: Rc<PublicConfig>,
}

impl SiteContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            api: ApiClient::new(&config),
            config: Rc::new(config),
            analytics: AnalyticsRelay::new(GtagSink),
            scheduler: SchedulingWidget::new(CalendlyLoader),
            public_config: Rc::new(PublicConfig::default()),
        }
    }

    pub fn with_public_config(&self, public_config: PublicConfig) -> Self {
        Self {
            public_config: Rc::new(public_config),
            ..self.clone()
        }
    }
}
