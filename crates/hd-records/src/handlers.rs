use super::*;
use actix_web::HttpResponse;
use actix_web::web;
use hd_auth::Auth;
use hd_auth::AuthRepository;
use hd_auth::Error;
use hd_core::ID;

pub async fn create<R>(
    db: web::Data<R>,
    auth: Auth<R>,
    req: web::Json<CreateRequest>,
) -> Result<HttpResponse, Error>
where
    R: AuthRepository + ComplaintRepository + 'static,
{
    let principal = auth.principal();
    let complaint = Lifecycle::new(db.get_ref())
        .create(principal, &req.category, &req.description, &req.priority)
        .await?;
    let listing = Listing::new(complaint, principal.member().clone());
    Ok(HttpResponse::Created().json(ComplaintResponse {
        complaint: ComplaintInfo::from(&listing),
    }))
}

pub async fn list<R>(
    db: web::Data<R>,
    auth: Auth<R>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, Error>
where
    R: AuthRepository + ComplaintRepository + 'static,
{
    let filter = Filter::parse(
        query.owner.as_deref(),
        query.category.as_deref(),
        query.status.as_deref(),
    )?;
    let listings = Lifecycle::new(db.get_ref())
        .list(auth.principal(), filter)
        .await?;
    Ok(HttpResponse::Ok().json(ComplaintsResponse {
        complaints: listings.iter().map(ComplaintInfo::from).collect(),
    }))
}

pub async fn set_status<R>(
    db: web::Data<R>,
    auth: Auth<R>,
    path: web::Path<String>,
    req: web::Json<StatusRequest>,
) -> Result<HttpResponse, Error>
where
    R: AuthRepository + ComplaintRepository + 'static,
{
    let id = ID::try_from(path.as_str()).map_err(|_| Error::not_found("Complaint not found"))?;
    let listing = Lifecycle::new(db.get_ref())
        .set_status(auth.principal(), id, &req.status)
        .await?;
    Ok(HttpResponse::Ok().json(ComplaintResponse {
        complaint: ComplaintInfo::from(&listing),
    }))
}
