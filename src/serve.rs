//! HTTP server for the interactive dashboard
//!
//! `rankgrid serve` → starts server, opens browser, re-renders on every
//! selector change.
//!
//! Requests are handled one at a time. The selection travels in the query
//! string, so the server keeps no state between requests.

use crate::data::{Category, Grid, Tally};
use crate::error::{GridError, Result};
use crate::layout::LayoutParams;
use crate::render::{render, Scene};
use crate::report::{html, svg};
use crate::selection::Selection;
use serde::{Deserialize, Serialize};
use tiny_http::{Header, Method, Request, Response, Server};

#[derive(Serialize)]
struct ApiResponse<T> {
    ok: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self { ok: true, data: Some(data), error: None }
    }
}

impl ApiResponse<()> {
    fn failure(error: impl ToString) -> Self {
        Self { ok: false, data: None, error: Some(error.to_string()) }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct ChartQuery {
    #[serde(default)]
    pub selection: Option<String>,
}

#[derive(Serialize)]
pub struct CategoryInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub cells: usize,
}

#[derive(Serialize)]
pub struct CategoriesReport {
    pub categories: Vec<CategoryInfo>,
    pub options: Vec<SelectorOption>,
    pub tally: Tally,
}

#[derive(Serialize)]
pub struct SelectorOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl CategoriesReport {
    pub fn from_grid(grid: &Grid) -> Self {
        let tally = grid.tally();
        Self {
            categories: Category::ALL
                .iter()
                .map(|&c| CategoryInfo {
                    key: c.key(),
                    name: c.display_name(),
                    color: c.color(),
                    cells: tally.get(c),
                })
                .collect(),
            options: Selection::options()
                .iter()
                .map(|s| SelectorOption { value: s.key(), label: s.label() })
                .collect(),
            tally,
        }
    }
}

/// Fully built response, independent of the socket
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Reply {
    fn ok(content_type: &'static str, body: String) -> Self {
        Self { status: 200, content_type, body }
    }

    fn text(status: u16, body: impl Into<String>) -> Self {
        Self { status, content_type: "text/plain; charset=utf-8", body: body.into() }
    }

    fn json<T: Serialize>(status: u16, payload: &ApiResponse<T>) -> Self {
        match serde_json::to_string(payload) {
            Ok(body) => Self { status, content_type: "application/json", body },
            Err(e) => Self::text(500, format!("serialization failed: {}", e)),
        }
    }
}

/// Dashboard host: the dataset plus the layout every render uses
pub struct Dashboard {
    grid: Grid,
    layout: LayoutParams,
}

impl Dashboard {
    pub fn new(grid: Grid, layout: LayoutParams) -> Self {
        Self { grid, layout }
    }

    fn scene(&self, selection: Selection) -> Scene {
        render(&self.grid, selection, &self.layout)
    }

    /// Map one request to a reply
    pub fn route(&self, method: &Method, url: &str) -> Reply {
        let mut parts = url.splitn(2, '?');
        let path = parts.next().unwrap_or("/");
        let query = parts.next().unwrap_or("");

        if *method != Method::Get && *method != Method::Head {
            return Reply::text(405, "Method not allowed");
        }

        match path {
            "/" | "/index.html" => match parse_selection(query) {
                Ok(selection) => {
                    let chart = svg::to_string(&self.scene(selection));
                    Reply::ok("text/html; charset=utf-8", html::dashboard_page(&self.grid, selection, &chart))
                }
                Err(e) => Reply::text(400, e.to_string()),
            },

            "/chart.svg" => match parse_selection(query) {
                Ok(selection) => Reply::ok("image/svg+xml", svg::to_string(&self.scene(selection))),
                Err(e) => Reply::text(400, e.to_string()),
            },

            "/api/scene" => match parse_selection(query) {
                Ok(selection) => Reply::json(200, &ApiResponse::success(self.scene(selection))),
                Err(e) => Reply::json(400, &ApiResponse::failure(e)),
            },

            "/api/categories" => Reply::json(200, &ApiResponse::success(CategoriesReport::from_grid(&self.grid))),

            _ => Reply::text(404, "Not found"),
        }
    }
}

/// Read `selection=` from a query string; absent means All
pub fn parse_selection(query: &str) -> Result<Selection> {
    let params: ChartQuery = serde_urlencoded::from_str(query).map_err(|e| {
        tracing::warn!(query, error = %e, "rejected query string");
        GridError::UnknownSelection(query.to_string())
    })?;

    match params.selection.as_deref() {
        None | Some("") => Ok(Selection::All),
        Some(value) => value.parse().map_err(|e| {
            tracing::warn!(value, "rejected selection");
            e
        }),
    }
}

/// Start server, open browser, serve dashboard
pub fn start(port: u16, open_browser: bool, dashboard: Dashboard) -> Result<()> {
    let addr = format!("127.0.0.1:{}", port);
    let server = Server::http(&addr).map_err(|e| GridError::Server(format!("cannot bind {}: {}", addr, e)))?;

    let url = format!("http://localhost:{}", port);
    eprintln!("\n\x1b[1;32m▦ rankgrid\x1b[0m");
    eprintln!("   {}\n", url);
    tracing::info!(%addr, "dashboard listening");

    if open_browser {
        open_url(&url);
    }

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &dashboard) {
            tracing::error!(error = %e, "failed to answer request");
        }
    }

    Ok(())
}

#[cfg(feature = "browser")]
fn open_url(url: &str) {
    if let Err(e) = open::that(url) {
        tracing::warn!(error = %e, "could not open browser");
    }
}

#[cfg(not(feature = "browser"))]
fn open_url(url: &str) {
    tracing::info!(url, "browser support not built in; open the URL manually");
}

fn handle_request(request: Request, dashboard: &Dashboard) -> Result<()> {
    let url = request.url().to_string();
    let method = request.method().clone();

    let reply = dashboard.route(&method, &url);
    tracing::info!(%method, %url, status = reply.status, "request");

    let header = Header::from_bytes(&b"Content-Type"[..], reply.content_type.as_bytes())
        .map_err(|_| GridError::Server(format!("invalid content type {}", reply.content_type)))?;
    let response = Response::from_string(reply.body)
        .with_status_code(reply.status)
        .with_header(header);
    request.respond(response)?;
    Ok(())
}
