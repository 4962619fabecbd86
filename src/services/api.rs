use crate::domain::filter::{AdvocateFilter, PageRequest, PageSize, parse_lenient_int, split_list};
pub use crate::dto::api::{AdvocatesQuery, AdvocatesResponse};
use crate::pagination::Pagination;
use crate::repository::{AdvocateListQuery, AdvocateReader};
use crate::services::{ServiceError, ServiceResult};

/// Normalizes raw listing parameters into a repository query.
///
/// Never fails: unusable values fall back to "no filter" or to the default
/// page window.
pub fn normalize_query(params: &AdvocatesQuery) -> AdvocateListQuery {
    let filter = AdvocateFilter::new(
        params.search.clone(),
        split_list(params.specialties.as_deref()),
        params.degree.clone(),
        parse_lenient_int(params.min_experience.as_deref()),
    );

    let limit = PageSize::from_requested(parse_lenient_int(params.limit.as_deref()));
    let page = PageRequest::new(parse_lenient_int(params.page.as_deref()), limit);

    AdvocateListQuery::new(filter).paginate(page)
}

/// Returns one page of advocates matching the requested filters.
pub fn list_advocates<R>(repo: &R, params: AdvocatesQuery) -> ServiceResult<AdvocatesResponse>
where
    R: AdvocateReader + ?Sized,
{
    let query = normalize_query(&params);
    let page = query.page;

    log::debug!("Listing advocates with {query:?}");

    let (total, data) = repo.list_advocates(query).map_err(ServiceError::from)?;

    Ok(AdvocatesResponse {
        data,
        pagination: Pagination::new(page.page(), page.limit().get(), total),
    })
}
