//! Shared application state for the UI server.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use sorter::core::types::ColumnKey;
use sorter::core::view::TableView;
use sorter::session::TableSession;

use crate::page::PageRenderer;

/// Shared state accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The one table session; the lock serializes selection events.
    pub session: Arc<Mutex<TableSession>>,
    pub pages: Arc<PageRenderer>,
    /// `lang` attribute for rendered pages.
    pub lang: String,
}

impl AppState {
    pub fn new(session: TableSession, pages: PageRenderer, lang: impl Into<String>) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            pages: Arc::new(pages),
            lang: lang.into(),
        }
    }

    /// Apply one column selection and project the result while holding the lock.
    pub async fn select(&self, column: ColumnKey) -> TableView {
        let mut session = self.session.lock().await;
        session.select(column);
        let state = session.state();
        info!(column = %column, direction = state.direction.as_str(), "column selected");
        session.view()
    }

    pub async fn view(&self) -> TableView {
        self.session.lock().await.view()
    }
}
