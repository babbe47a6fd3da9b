// tests/support/mocks.rs
use async_trait::async_trait;
use biuletyn_core::application::ApplicationResult;
use biuletyn_core::application::dto::analytics::{
    ArticleTotals, CategoryStat, MonthlyStat, MostViewedEntry, RecentArticleEntry,
    UserActivityStat,
};
use biuletyn_core::application::error::ApplicationError;
use biuletyn_core::application::ports::security::{PasswordHasher, SessionTokenCodec};
use biuletyn_core::application::ports::storage::FileStore;
use biuletyn_core::application::ports::time::Clock;
use biuletyn_core::application::ports::util::SlugGenerator;
use biuletyn_core::application::queries::AnalyticsRepository;
use biuletyn_core::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleListing, ArticleReadRepository, ArticleSlug,
    ArticleUpdate, ArticleVersion, ArticleVersionListing, ArticleVersionRepository,
    ArticleWriteRepository, NewArticle, NewArticleVersion,
};
use biuletyn_core::domain::errors::{DomainError, DomainResult};
use biuletyn_core::domain::menu::{
    MenuItem, MenuItemId, MenuItemUpdate, MenuRepository, NewMenuItem, PositionUpdate,
};
use biuletyn_core::domain::session::{NewSession, Session, SessionRepository};
use biuletyn_core::domain::settings::{
    SettingKey, SettingsRepository, SiteSetting, SiteSettingListing,
};
use biuletyn_core::domain::user::{
    NewUser, PasswordHash, User, UserId, UserRepository, UserUpdate, Username,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

// ---------------------------------------------------------------------------
// Users

#[derive(Default)]
pub struct InMemoryUserRepo {
    inner: Mutex<HashMap<i64, User>>,
    next_id: Mutex<i64>,
}

impl InMemoryUserRepo {
    pub fn with_users(users: Vec<User>) -> Self {
        let next = users.iter().map(|u| i64::from(u.id)).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(
                users
                    .into_iter()
                    .map(|u| (i64::from(u.id), u))
                    .collect(),
            ),
            next_id: Mutex::new(next),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut map = self.inner.lock().unwrap();
        if map
            .values()
            .any(|u| u.username.as_str() == new_user.username.as_str())
        {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        let mut next = self.next_id.lock().unwrap();
        let id = *next;
        *next += 1;

        let user = User {
            id: UserId::new(id)?,
            username: new_user.username,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        map.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.inner.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username.as_str() == username.as_str())
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let mut users: Vec<User> = self.inner.lock().unwrap().values().cloned().collect();
        users.sort_by_key(|u| std::cmp::Reverse(u.created_at));
        Ok(users)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut map = self.inner.lock().unwrap();
        let user = map
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.username = update.username;
        user.first_name = update.first_name;
        user.last_name = update.last_name;
        user.email = update.email;
        user.role = update.role;
        user.updated_at = update.updated_at;
        Ok(user.clone())
    }

    async fn update_password(
        &self,
        id: UserId,
        password_hash: PasswordHash,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        let user = map
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        user.password_hash = password_hash;
        user.updated_at = updated_at;
        Ok(())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        self.inner
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("user not found".into()))
    }
}

// ---------------------------------------------------------------------------
// Articles and versions

#[derive(Default)]
pub struct InMemoryArticleRepo {
    inner: Mutex<HashMap<i64, Article>>,
    next_id: Mutex<i64>,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            next_id: Mutex::new(1),
        }
    }

    fn listing(article: Article) -> ArticleListing {
        ArticleListing {
            article,
            author_username: None,
            author_full_name: None,
            category: None,
        }
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut map = self.inner.lock().unwrap();
        if map.values().any(|a| a.slug == article.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let mut next = self.next_id.lock().unwrap();
        let id = *next;
        *next += 1;

        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            slug: article.slug,
            body: article.body,
            excerpt: article.excerpt,
            status: article.status,
            responsible_person: article.responsible_person,
            menu_item_id: article.menu_item_id,
            author_id: article.author_id,
            view_count: 0,
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        map.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut map = self.inner.lock().unwrap();
        let id = i64::from(update.id);
        if map
            .values()
            .any(|a| i64::from(a.id) != id && a.slug == update.slug)
        {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let article = map
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.title = update.title;
        article.slug = update.slug;
        article.body = update.body;
        article.excerpt = update.excerpt;
        article.status = update.status;
        article.responsible_person = update.responsible_person;
        article.menu_item_id = update.menu_item_id;
        article.published_at = update.published_at;
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.inner
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }

    async fn increment_view_count(&self, id: ArticleId) -> DomainResult<i64> {
        let mut map = self.inner.lock().unwrap();
        let article = map
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.view_count += 1;
        Ok(article.view_count)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleListing>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .get(&i64::from(id))
            .cloned()
            .map(Self::listing))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<ArticleListing>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .values()
            .find(|a| &a.slug == slug)
            .cloned()
            .map(Self::listing))
    }

    async fn slug_exists(&self, slug: &ArticleSlug) -> DomainResult<bool> {
        Ok(self.inner.lock().unwrap().values().any(|a| &a.slug == slug))
    }

    async fn list(&self, filter: ArticleFilter) -> DomainResult<Vec<ArticleListing>> {
        let mut articles: Vec<Article> = self
            .inner
            .lock()
            .unwrap()
            .values()
            .filter(|a| filter.status.is_none_or(|s| a.status == s))
            .filter(|a| {
                filter
                    .menu_item_id
                    .is_none_or(|m| a.menu_item_id == Some(m))
            })
            .cloned()
            .collect();
        articles.sort_by_key(|a| std::cmp::Reverse(a.updated_at));
        Ok(articles.into_iter().map(Self::listing).collect())
    }

    async fn list_published_page(
        &self,
        menu_item_id: Option<MenuItemId>,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<ArticleListing>> {
        let mut articles: Vec<Article> = self
            .inner
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.status.is_published())
            .filter(|a| menu_item_id.is_none_or(|m| a.menu_item_id == Some(m)))
            .cloned()
            .collect();
        articles.sort_by_key(|a| std::cmp::Reverse(a.published_at));
        Ok(articles
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(Self::listing)
            .collect())
    }

    async fn count_published(&self, menu_item_id: Option<MenuItemId>) -> DomainResult<u64> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.status.is_published())
            .filter(|a| menu_item_id.is_none_or(|m| a.menu_item_id == Some(m)))
            .count() as u64)
    }

    async fn count_by_menu_item(&self, menu_item_id: MenuItemId) -> DomainResult<u64> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.menu_item_id == Some(menu_item_id))
            .count() as u64)
    }
}

#[derive(Default)]
pub struct InMemoryVersionRepo {
    inner: Mutex<Vec<ArticleVersion>>,
}

#[async_trait]
impl ArticleVersionRepository for InMemoryVersionRepo {
    async fn append(&self, snapshot: NewArticleVersion) -> DomainResult<ArticleVersion> {
        let mut versions = self.inner.lock().unwrap();
        let next = versions
            .iter()
            .filter(|v| v.article_id == snapshot.article_id)
            .map(|v| v.version)
            .max()
            .unwrap_or(0)
            + 1;

        let version = ArticleVersion {
            article_id: snapshot.article_id,
            version: next,
            title: biuletyn_core::domain::article::ArticleTitle::new(snapshot.title)?,
            body: biuletyn_core::domain::article::ArticleBody::new(snapshot.body)?,
            excerpt: snapshot.excerpt,
            edited_by: snapshot.edited_by,
            change_summary: snapshot.change_summary,
            recorded_at: snapshot.recorded_at,
        };
        versions.push(version.clone());
        Ok(version)
    }

    async fn list_by_article(
        &self,
        article_id: ArticleId,
    ) -> DomainResult<Vec<ArticleVersionListing>> {
        let mut versions: Vec<ArticleVersion> = self
            .inner
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.article_id == article_id)
            .cloned()
            .collect();
        versions.sort_by_key(|v| std::cmp::Reverse(v.version));
        Ok(versions
            .into_iter()
            .map(|version| ArticleVersionListing {
                version,
                edited_by_username: None,
            })
            .collect())
    }

    async fn find(
        &self,
        article_id: ArticleId,
        version: i32,
    ) -> DomainResult<Option<ArticleVersionListing>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.article_id == article_id && v.version == version)
            .cloned()
            .map(|version| ArticleVersionListing {
                version,
                edited_by_username: None,
            }))
    }
}

// ---------------------------------------------------------------------------
// Menu

#[derive(Default)]
pub struct InMemoryMenuRepo {
    inner: Mutex<HashMap<i64, MenuItem>>,
    next_id: Mutex<i64>,
}

impl InMemoryMenuRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            next_id: Mutex::new(1),
        }
    }

    fn sorted(items: Vec<MenuItem>) -> Vec<MenuItem> {
        let mut items = items;
        items.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then_with(|| a.title.cmp(&b.title))
        });
        items
    }
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepo {
    async fn list_all(&self) -> DomainResult<Vec<MenuItem>> {
        Ok(Self::sorted(
            self.inner.lock().unwrap().values().cloned().collect(),
        ))
    }

    async fn list_active(&self) -> DomainResult<Vec<MenuItem>> {
        Ok(Self::sorted(
            self.inner
                .lock()
                .unwrap()
                .values()
                .filter(|i| i.is_active)
                .cloned()
                .collect(),
        ))
    }

    async fn find_by_id(&self, id: MenuItemId) -> DomainResult<Option<MenuItem>> {
        Ok(self.inner.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn insert(&self, item: NewMenuItem) -> DomainResult<MenuItem> {
        let mut map = self.inner.lock().unwrap();
        if map.values().any(|i| i.slug == item.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let mut next = self.next_id.lock().unwrap();
        let id = *next;
        *next += 1;

        let stored = MenuItem {
            id: MenuItemId::new(id)?,
            title: item.title,
            slug: item.slug,
            parent_id: item.parent_id,
            position: item.position,
            is_active: item.is_active,
            hidden: item.hidden,
            display_mode: item.display_mode,
            show_excerpts: item.show_excerpts,
            created_at: item.created_at,
            updated_at: item.created_at,
        };
        map.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: MenuItemUpdate) -> DomainResult<MenuItem> {
        let mut map = self.inner.lock().unwrap();
        let item = map
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("menu item not found".into()))?;
        item.title = update.title;
        item.slug = update.slug;
        item.parent_id = update.parent_id;
        item.position = update.position;
        item.is_active = update.is_active;
        item.hidden = update.hidden;
        item.display_mode = update.display_mode;
        item.show_excerpts = update.show_excerpts;
        item.updated_at = update.updated_at;
        Ok(item.clone())
    }

    async fn delete(&self, id: MenuItemId) -> DomainResult<()> {
        self.inner
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("menu item not found".into()))
    }

    async fn update_positions(
        &self,
        updates: &[PositionUpdate],
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        // All-or-nothing, like the transactional implementation.
        for update in updates {
            if !map.contains_key(&i64::from(update.id)) {
                return Err(DomainError::NotFound(format!(
                    "menu item {} not found",
                    i64::from(update.id)
                )));
            }
        }
        for update in updates {
            if let Some(item) = map.get_mut(&i64::from(update.id)) {
                item.position = update.position;
                item.updated_at = updated_at;
            }
        }
        Ok(())
    }

    async fn set_hidden(
        &self,
        id: MenuItemId,
        hidden: bool,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<MenuItem> {
        let mut map = self.inner.lock().unwrap();
        let item = map
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("menu item not found".into()))?;
        item.hidden = hidden;
        item.updated_at = updated_at;
        Ok(item.clone())
    }

    async fn toggle_hidden(
        &self,
        id: MenuItemId,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<MenuItem> {
        let mut map = self.inner.lock().unwrap();
        let item = map
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("menu item not found".into()))?;
        item.hidden = !item.hidden;
        item.updated_at = updated_at;
        Ok(item.clone())
    }
}

// ---------------------------------------------------------------------------
// Settings

#[derive(Default)]
pub struct InMemorySettingsRepo {
    inner: Mutex<HashMap<String, SiteSetting>>,
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepo {
    async fn list(&self) -> DomainResult<Vec<SiteSettingListing>> {
        let mut settings: Vec<SiteSetting> =
            self.inner.lock().unwrap().values().cloned().collect();
        settings.sort_by(|a, b| a.key.as_str().cmp(b.key.as_str()));
        Ok(settings
            .into_iter()
            .map(|setting| SiteSettingListing {
                setting,
                updated_by_username: None,
            })
            .collect())
    }

    async fn upsert(
        &self,
        key: &SettingKey,
        value: Option<&str>,
        value_kind: &str,
        updated_by: Option<UserId>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.inner.lock().unwrap().insert(
            key.as_str().to_owned(),
            SiteSetting {
                key: key.clone(),
                value: value.map(str::to_owned),
                value_kind: value_kind.to_owned(),
                updated_by,
                updated_at,
            },
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sessions

#[derive(Default)]
pub struct InMemorySessionRepo {
    inner: Mutex<HashMap<String, Session>>,
    next_id: Mutex<i64>,
}

#[async_trait]
impl SessionRepository for InMemorySessionRepo {
    async fn insert(&self, session: NewSession) -> DomainResult<Session> {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let stored = Session {
            id: *next,
            token_digest: session.token_digest.clone(),
            user_id: session.user_id,
            created_at: session.created_at,
            expires_at: session.expires_at,
        };
        self.inner
            .lock()
            .unwrap()
            .insert(session.token_digest, stored.clone());
        Ok(stored)
    }

    async fn find_by_digest(&self, token_digest: &str) -> DomainResult<Option<Session>> {
        Ok(self.inner.lock().unwrap().get(token_digest).cloned())
    }

    async fn delete_by_digest(&self, token_digest: &str) -> DomainResult<()> {
        self.inner.lock().unwrap().remove(token_digest);
        Ok(())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> DomainResult<u64> {
        let mut map = self.inner.lock().unwrap();
        let before = map.len();
        map.retain(|_, session| session.expires_at > now);
        Ok((before - map.len()) as u64)
    }
}

// ---------------------------------------------------------------------------
// Ports

pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/// Deterministic digests so tests can reason about stored sessions.
pub struct PlainTokenCodec;

impl SessionTokenCodec for PlainTokenCodec {
    fn generate_token(&self) -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }

    fn digest(&self, token: &str) -> String {
        format!("digest:{token}")
    }
}

/// Clock that tests can advance to cross session expiry boundaries.
pub struct TestClock {
    now: Mutex<DateTime<Utc>>,
}

impl TestClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Default for TestClock {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub struct DummySlug;

impl SlugGenerator for DummySlug {
    fn slugify(&self, input: &str) -> String {
        input.to_lowercase().replace(' ', "-")
    }
}

/// Records saved files without touching the filesystem.
#[derive(Default)]
pub struct MemoryFileStore {
    pub saved: Mutex<Vec<(String, String, usize)>>,
}

#[async_trait]
impl FileStore for MemoryFileStore {
    async fn save(
        &self,
        relative_dir: &str,
        file_name: &str,
        contents: Bytes,
    ) -> ApplicationResult<()> {
        self.saved.lock().unwrap().push((
            relative_dir.to_owned(),
            file_name.to_owned(),
            contents.len(),
        ));
        Ok(())
    }
}

pub struct DummyAnalyticsRepo;

#[async_trait]
impl AnalyticsRepository for DummyAnalyticsRepo {
    async fn article_totals(&self) -> DomainResult<ArticleTotals> {
        Ok(ArticleTotals::default())
    }

    async fn most_viewed(&self, _limit: i64) -> DomainResult<Vec<MostViewedEntry>> {
        Ok(vec![])
    }

    async fn recent_articles(&self, _limit: i64) -> DomainResult<Vec<RecentArticleEntry>> {
        Ok(vec![])
    }

    async fn category_stats(&self) -> DomainResult<Vec<CategoryStat>> {
        Ok(vec![])
    }

    async fn unassigned_stat(&self) -> DomainResult<Option<CategoryStat>> {
        Ok(None)
    }

    async fn monthly_stats(&self, _months: i32) -> DomainResult<Vec<MonthlyStat>> {
        Ok(vec![])
    }

    async fn user_stats(&self) -> DomainResult<Vec<UserActivityStat>> {
        Ok(vec![])
    }
}
