//! A local stand-in for the spreadsheet CSV export endpoint.
//!
//! Serves `/spreadsheets/d/{id}/export` on an ephemeral port:
//! - `employees` and `tasks` return lookup CSV
//! - `moved` redirects once to `employees`
//! - `looping` starts an endless redirect chain
//! - anything else is a 404

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};

pub(crate) const EMPLOYEE_CSV: &str = "氏名,社員番号\n山田,E100\n佐藤,E200\n";

pub(crate) const TASK_CODE_CSV: &str =
    "作業名,コード\n管理 morning,A01\n管理,A02\n\"管理, evening\",A03\n";

/// A running export server.
pub(crate) struct ExportServer {
    base: String,
    hits: Arc<AtomicUsize>,
}

impl ExportServer {
    /// Binds `127.0.0.1:0` and serves in a background task.
    pub(crate) async fn spawn() -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let router = Router::new()
            .route("/spreadsheets/d/:id/export", get(export))
            .route("/hops/:n", get(hop))
            .with_state(hits.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base: format!("http://{}", addr),
            hits,
        }
    }

    /// A sharing link for the given document ID on this server.
    pub(crate) fn sheet_url(&self, id: &str) -> String {
        format!("{}/spreadsheets/d/{}/edit#gid=0", self.base, id)
    }

    /// Number of requests served so far.
    pub(crate) fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn export(State(hits): State<Arc<AtomicUsize>>, Path(id): Path<String>) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    match id.as_str() {
        "employees" => EMPLOYEE_CSV.into_response(),
        "tasks" => TASK_CODE_CSV.into_response(),
        "moved" => Redirect::temporary("/spreadsheets/d/employees/export?format=csv").into_response(),
        "looping" => Redirect::temporary("/hops/1").into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn hop(State(hits): State<Arc<AtomicUsize>>, Path(n): Path<u32>) -> Redirect {
    hits.fetch_add(1, Ordering::SeqCst);
    Redirect::temporary(&format!("/hops/{}", n + 1))
}
