//! Search session - debounced query handling over a fixed dataset / 搜索会话
//!
//! Every query change bumps a generation counter and schedules a delayed scan on
//! the Tokio runtime. A newer query aborts the pending scan, and a scan only
//! publishes when its generation is still the latest one, so stale results are
//! never shown.

use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::AppConfig;
use crate::models::{Category, CategorySettings, QueryState, Record};
use crate::search::{self, SearchOutcome};

/// Latest published search state / 最新发布的搜索状态
#[derive(Debug, Clone, Default)]
pub struct SearchSnapshot {
    /// Generation of the query this snapshot belongs to / 查询代数
    pub generation: u64,
    pub query: String,
    /// A debounced scan is pending / 是否正在等待搜索
    pub loading: bool,
    /// Records matching `query`, before category filtering / 匹配结果
    pub matched: Arc<Vec<Record>>,
}

struct SessionInner {
    records: Arc<[Record]>,
    delay: Duration,
    generation: AtomicU64,
    state: RwLock<QueryState>,
    pending: Mutex<Option<JoinHandle<()>>>,
    snapshot_tx: watch::Sender<SearchSnapshot>,
}

impl SessionInner {
    /// Publish scan results unless a newer query superseded them / 仅发布最新一代的结果
    fn publish_if_current(&self, generation: u64, matched: Vec<Record>) -> bool {
        let published = self.snapshot_tx.send_if_modified(|snapshot| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            snapshot.generation = generation;
            snapshot.loading = false;
            snapshot.matched = Arc::new(matched);
            true
        });

        if !published {
            tracing::debug!("Discarded stale search results (generation {})", generation);
        }
        published
    }
}

/// Debounced search over an immutable dataset / 防抖搜索会话
///
/// `set_query` spawns onto the current Tokio runtime and must be called from
/// within one.
pub struct SearchSession {
    inner: Arc<SessionInner>,
}

impl SearchSession {
    pub fn new(records: impl Into<Arc<[Record]>>, state: QueryState, delay: Duration) -> Self {
        let initial = SearchSnapshot {
            query: state.query.clone(),
            ..Default::default()
        };
        let (snapshot_tx, _) = watch::channel(initial);

        Self {
            inner: Arc::new(SessionInner {
                records: records.into(),
                delay,
                generation: AtomicU64::new(0),
                state: RwLock::new(state),
                pending: Mutex::new(None),
                snapshot_tx,
            }),
        }
    }

    /// Session with the configured debounce delay and default tabs / 按配置创建会话
    pub fn from_config(records: impl Into<Arc<[Record]>>, config: &AppConfig) -> Self {
        let state = QueryState::default().with_settings(config.categories);
        Self::new(records, state, Duration::from_millis(config.search.debounce_ms))
    }

    pub fn records(&self) -> &[Record] {
        &self.inner.records
    }

    /// Current query state snapshot / 当前查询状态
    pub fn state(&self) -> QueryState {
        self.inner.state.read().clone()
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        self.inner.snapshot_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.inner.snapshot_tx.subscribe()
    }

    /// Change the query and schedule a debounced scan / 更新查询并调度防抖搜索
    ///
    /// Returns the generation assigned to this query. An empty query clears the
    /// results right away without scheduling anything.
    pub fn set_query(&self, query: impl Into<String>) -> u64 {
        let query = query.into();
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.state.write().query = query.clone();

        if let Some(handle) = self.inner.pending.lock().take() {
            if !handle.is_finished() {
                tracing::debug!("Superseding pending search (now generation {})", generation);
            }
            handle.abort();
        }

        if query.is_empty() {
            self.inner.snapshot_tx.send_replace(SearchSnapshot {
                generation,
                query,
                loading: false,
                matched: Arc::new(Vec::new()),
            });
            return generation;
        }

        // keep the previous matches visible while loading
        self.inner.snapshot_tx.send_modify(|snapshot| {
            snapshot.generation = generation;
            snapshot.query = query.clone();
            snapshot.loading = true;
        });

        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(inner.delay).await;
            let matched = search::match_records(&inner.records, &query);
            inner.publish_if_current(generation, matched);
        });
        *self.inner.pending.lock() = Some(handle);

        generation
    }

    /// Clear the query and results / 清空查询
    pub fn clear(&self) -> u64 {
        self.set_query(String::new())
    }

    /// Select a category tab / 切换分类标签
    pub fn select_category(&self, category: Category) {
        self.inner.state.write().category = category;
    }

    /// Flip a settings-panel flag / 切换分类开关
    pub fn toggle_setting(&self, category: Category) -> CategorySettings {
        let mut state = self.inner.state.write();
        state.settings.toggle(category);
        state.settings
    }

    /// Apply the current tab and settings to the latest matches / 当前视图
    pub fn view(&self) -> SearchOutcome {
        let state = self.state();
        let snapshot = self.inner.snapshot_tx.borrow().clone();
        search::apply_view(&snapshot.matched, &state)
    }

    /// Wait until the latest query has been scanned / 等待最新查询完成
    pub async fn settled(&self) -> SearchSnapshot {
        let target = self.inner.generation.load(Ordering::SeqCst);
        let mut rx = self.subscribe();
        if let Ok(snapshot) = rx.wait_for(|s| s.generation >= target && !s.loading).await {
            return snapshot.clone();
        }
        self.snapshot()
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        if let Some(handle) = self.inner.pending.lock().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::make_link;
    use crate::models::RecordKind;

    fn create_test_record(id: u64, name: &str, kind: RecordKind) -> Record {
        Record {
            id,
            name: name.to_string(),
            status: "Edited 1d ago".to_string(),
            link: make_link(name),
            kind,
        }
    }

    fn create_session() -> SearchSession {
        let records = vec![
            create_test_record(
                1,
                "Alice Johnson",
                RecordKind::Person {
                    avatar: "https://i.pravatar.cc/40?img=2".to_string(),
                },
            ),
            create_test_record(2, "Bug Fixes", RecordKind::List),
            create_test_record(3, "banner.png", RecordKind::Image),
            create_test_record(4, "Weekend Plans", RecordKind::Chat),
        ];
        SearchSession::new(records, QueryState::default(), Duration::from_millis(500))
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounced_search_publishes() {
        let session = create_session();
        let generation = session.set_query("ali");
        assert!(session.snapshot().loading);
        assert!(session.view().is_empty());

        let snapshot = session.settled().await;
        assert_eq!(snapshot.generation, generation);
        assert_eq!(snapshot.query, "ali");
        assert!(!snapshot.loading);
        assert_eq!(snapshot.matched.len(), 1);
        assert_eq!(session.view().filtered[0].name, "Alice Johnson");
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_query_supersedes_pending() {
        let session = create_session();
        session.set_query("b");
        tokio::time::sleep(Duration::from_millis(300)).await;
        session.set_query("bug");
        // the first scan would have fired at 500ms
        tokio::time::sleep(Duration::from_millis(300)).await;
        let snapshot = session.snapshot();
        assert!(snapshot.loading);
        assert_eq!(snapshot.query, "bug");
        assert!(snapshot.matched.is_empty());

        tokio::time::sleep(Duration::from_millis(250)).await;
        let snapshot = session.snapshot();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.generation, 2);
        let ids: Vec<u64> = snapshot.matched.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_generation_is_dropped() {
        let session = create_session();
        let first = session.set_query("a");
        session.set_query("plans");
        assert!(!session.inner.publish_if_current(first, Vec::new()));

        let snapshot = session.settled().await;
        assert_eq!(snapshot.query, "plans");
        assert_eq!(snapshot.matched.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_resets_immediately() {
        let session = create_session();
        session.set_query("a");
        session.settled().await;
        assert!(!session.view().is_empty());

        session.clear();
        let snapshot = session.snapshot();
        assert!(!snapshot.loading);
        assert!(snapshot.matched.is_empty());
        assert_eq!(session.state().query, "");

        // nothing left to fire
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(session.snapshot().matched.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_category_and_settings_do_not_rescan() {
        let session = create_session();
        session.set_query("n");
        let generation = session.settled().await.generation;

        session.select_category(Category::Files);
        let view = session.view();
        assert!(view.filtered.iter().all(|r| r.category() == Category::Files));
        assert_eq!(view.count(Category::All), Some(3));

        let settings = session.toggle_setting(Category::Chats);
        assert!(settings.chats);
        assert_eq!(session.view().count(Category::Chats), Some(1));
        assert_eq!(session.snapshot().generation, generation);
    }
}
