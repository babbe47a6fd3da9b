// src/application/services.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            ArticleCommandService, MenuCommandService, SessionCommandService,
            SettingsCommandService, UploadService, UserCommandService,
        },
        ports::{
            security::{PasswordHasher, SessionTokenCodec},
            storage::FileStore,
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            AnalyticsQueryService, AnalyticsRepository, ArticleQueryService, MenuQueryService,
            SettingsQueryService, UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleVersionRepository, ArticleWriteRepository},
        menu::MenuRepository,
        session::SessionRepository,
        settings::SettingsRepository,
        user::UserRepository,
    },
};

/// Wiring for every command/query service, assembled once at startup.
pub struct ApplicationServices {
    pub sessions: Arc<SessionCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub menu_commands: Arc<MenuCommandService>,
    pub menu_queries: Arc<MenuQueryService>,
    pub settings_commands: Arc<SettingsCommandService>,
    pub settings_queries: Arc<SettingsQueryService>,
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub uploads: Arc<UploadService>,
    pub analytics: Arc<AnalyticsQueryService>,
}

pub struct ServiceDependencies {
    pub user_repo: Arc<dyn UserRepository>,
    pub article_write_repo: Arc<dyn ArticleWriteRepository>,
    pub article_read_repo: Arc<dyn ArticleReadRepository>,
    pub article_version_repo: Arc<dyn ArticleVersionRepository>,
    pub menu_repo: Arc<dyn MenuRepository>,
    pub settings_repo: Arc<dyn SettingsRepository>,
    pub session_repo: Arc<dyn SessionRepository>,
    pub analytics_repo: Arc<dyn AnalyticsRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_codec: Arc<dyn SessionTokenCodec>,
    pub file_store: Arc<dyn FileStore>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
    pub session_ttl: chrono::Duration,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let sessions = Arc::new(SessionCommandService::new(
            Arc::clone(&deps.user_repo),
            Arc::clone(&deps.session_repo),
            Arc::clone(&deps.password_hasher),
            Arc::clone(&deps.token_codec),
            Arc::clone(&deps.clock),
            deps.session_ttl,
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&deps.article_write_repo),
            Arc::clone(&deps.article_read_repo),
            Arc::clone(&deps.article_version_repo),
            Arc::clone(&deps.slugger),
            Arc::clone(&deps.clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&deps.article_read_repo),
            Arc::clone(&deps.article_version_repo),
            Arc::clone(&deps.article_write_repo),
        ));

        let menu_commands = Arc::new(MenuCommandService::new(
            Arc::clone(&deps.menu_repo),
            Arc::clone(&deps.article_read_repo),
            Arc::clone(&deps.slugger),
            Arc::clone(&deps.clock),
        ));
        let menu_queries = Arc::new(MenuQueryService::new(Arc::clone(&deps.menu_repo)));

        let settings_commands = Arc::new(SettingsCommandService::new(
            Arc::clone(&deps.settings_repo),
            Arc::clone(&deps.clock),
        ));
        let settings_queries =
            Arc::new(SettingsQueryService::new(Arc::clone(&deps.settings_repo)));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&deps.user_repo),
            Arc::clone(&deps.password_hasher),
            Arc::clone(&deps.clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&deps.user_repo)));

        let uploads = Arc::new(UploadService::new(
            Arc::clone(&deps.file_store),
            Arc::clone(&deps.clock),
        ));

        let analytics = Arc::new(AnalyticsQueryService::new(Arc::clone(&deps.analytics_repo)));

        Self {
            sessions,
            article_commands,
            article_queries,
            menu_commands,
            menu_queries,
            settings_commands,
            settings_queries,
            user_commands,
            user_queries,
            uploads,
            analytics,
        }
    }
}
