use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};
use uuid::Uuid;

use dc_common::api::search_request::{Pagination, SearchRequest};
use dc_common::api::search_response::{JobMatchItem, SearchResponse};
use dc_common::api::submit::SubmitJobRequest;
use dc_common::matching::filters;
use dc_common::matching::{BudgetRange, DatePosted, FilterCriteria, SortMode};
use dc_common::{ExperienceLevel, PaymentType, ProjectScope, RemoteType, ViewerProfile};

use crate::SharedState;
use crate::error::ApiError;
use crate::handlers::pagination::clamp_pagination;

/// Query-string form of the search criteria. List-valued filters arrive as
/// comma separated strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListJobsParams {
    pub q: Option<String>,
    pub role: Option<String>,
    pub payment: Option<PaymentType>,
    pub scope: Option<ProjectScope>,
    pub experience: Option<ExperienceLevel>,
    pub remote: Option<RemoteType>,
    pub company_size: Option<String>,
    pub posted: Option<DatePosted>,
    pub languages: Option<String>,
    pub frameworks: Option<String>,
    pub locations: Option<String>,
    pub timezones: Option<String>,
    pub budget_min: Option<u32>,
    pub budget_max: Option<u32>,
    pub sort: Option<SortMode>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

fn csv_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn criteria_from_params(params: &ListJobsParams, budget_ceiling: u32) -> FilterCriteria {
    FilterCriteria {
        query: params.q.clone().unwrap_or_default(),
        role: params.role.clone(),
        payment: params.payment,
        scope: params.scope,
        experience: params.experience,
        remote: params.remote,
        company_size: params.company_size.clone(),
        date_posted: params.posted.unwrap_or_default(),
        languages: csv_list(params.languages.as_deref()),
        frameworks: csv_list(params.frameworks.as_deref()),
        locations: csv_list(params.locations.as_deref()),
        timezones: csv_list(params.timezones.as_deref()),
        budget: BudgetRange {
            min: params.budget_min.unwrap_or(0),
            max: params.budget_max.unwrap_or(budget_ceiling),
        },
    }
}

fn validate_budget(budget: &BudgetRange) -> Result<(), ApiError> {
    if budget.min > budget.max {
        return Err(ApiError::BadRequest(
            "budget_min must not exceed budget_max".into(),
        ));
    }
    Ok(())
}

fn run_search(
    state: &SharedState,
    criteria: &FilterCriteria,
    sort: SortMode,
    viewer: Option<&ViewerProfile>,
    pagination: &Pagination,
) -> Result<SearchResponse, ApiError> {
    let (limit, offset) = clamp_pagination(pagination);

    let postings = {
        let board = state
            .board
            .read()
            .map_err(|_| ApiError::Internal("board lock poisoned".into()))?;
        board.open_postings()
    };

    let matches = state.engine.run(&postings, criteria, sort, viewer);
    let total_matched = matches.len();

    metrics::counter!("dc_search_requests_total", "sort" => sort.as_str()).increment(1);
    metrics::counter!("dc_search_matches_total").increment(total_matched as u64);

    if total_matched == 0 {
        if let Some(newest) = postings.first() {
            let rejected_on = filters::first_rejection(
                newest,
                criteria,
                Utc::now(),
                state.engine.budget_ceiling(),
            );
            debug!(
                posting = %newest.id,
                rejected_on = rejected_on.unwrap_or("none"),
                "search matched nothing"
            );
        }
    }

    let items: Vec<JobMatchItem> = matches
        .into_iter()
        .skip(offset)
        .take(limit)
        .map(JobMatchItem::from)
        .collect();

    let has_more = offset + items.len() < total_matched;

    info!(
        total_matched,
        returned = items.len(),
        sort = sort.as_str(),
        "job search served"
    );

    Ok(SearchResponse {
        items,
        total_matched,
        limit,
        offset,
        has_more,
        sort,
    })
}

/// GET /api/jobs
pub async fn list_jobs(
    State(state): State<SharedState>,
    Query(params): Query<ListJobsParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let criteria = criteria_from_params(&params, state.engine.budget_ceiling());
    validate_budget(&criteria.budget)?;

    let sort = params.sort.unwrap_or_default();
    let pagination = Pagination {
        limit: params.limit.unwrap_or_else(|| Pagination::default().limit),
        offset: params.offset.unwrap_or(0),
    };

    let response = run_search(&state, &criteria, sort, None, &pagination)?;
    Ok(Json(response))
}

/// POST /api/jobs/search
pub async fn search_jobs(
    State(state): State<SharedState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    validate_budget(&request.criteria.budget)?;

    let response = run_search(
        &state,
        &request.criteria,
        request.sort,
        request.viewer.as_ref(),
        &request.pagination,
    )?;
    Ok(Json(response))
}

/// GET /api/jobs/:id
pub async fn get_job(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<JobMatchItem>, ApiError> {
    let board = state
        .board
        .read()
        .map_err(|_| ApiError::Internal("board lock poisoned".into()))?;

    let posting = board
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("posting not found: {id}")))?;

    Ok(Json(JobMatchItem::from(posting.clone())))
}

/// POST /api/jobs
pub async fn submit_job(
    State(state): State<SharedState>,
    Json(request): Json<SubmitJobRequest>,
) -> Result<(StatusCode, Json<JobMatchItem>), ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::BadRequest("title is required".into()));
    }
    if request.external && request.original_url.is_none() {
        return Err(ApiError::BadRequest(
            "external postings must include original_url".into(),
        ));
    }

    let posting = request.into_posting(Uuid::new_v4().to_string(), Utc::now());
    let item = JobMatchItem::from(posting.clone());

    {
        let mut board = state
            .board
            .write()
            .map_err(|_| ApiError::Internal("board lock poisoned".into()))?;
        board.insert(posting)?;
    }

    metrics::counter!("dc_postings_submitted_total").increment(1);
    info!(posting = %item.posting.id, external = item.posting.external, "posting submitted");

    Ok((StatusCode::CREATED, Json(item)))
}

/// POST /api/jobs/:id/apply
pub async fn apply_to_job(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let count = {
        let mut board = state
            .board
            .write()
            .map_err(|_| ApiError::Internal("board lock poisoned".into()))?;
        board.record_application(&id)?
    };

    metrics::counter!("dc_applications_total").increment(1);
    info!(posting = %id, applications = count, "application recorded");

    Ok(Json(json!({ "id": id, "application_count": count })))
}

/// POST /api/jobs/:id/close
pub async fn close_job(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    {
        let mut board = state
            .board
            .write()
            .map_err(|_| ApiError::Internal("board lock poisoned".into()))?;
        board.close(&id)?;
    }

    info!(posting = %id, "posting closed");

    Ok(Json(json!({ "id": id, "status": "closed" })))
}
