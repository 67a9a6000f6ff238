use super::*;
use actix_web::HttpResponse;
use actix_web::web;

pub async fn register<R>(
    db: web::Data<R>,
    crypto: web::Data<Crypto>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, Error>
where
    R: AuthRepository + 'static,
{
    let (token, member) =
        account::register(db.get_ref(), &crypto, &req.name, &req.email, &req.password).await?;
    Ok(HttpResponse::Created().json(AuthResponse {
        token,
        user: UserInfo::from(&member),
    }))
}

pub async fn login<R>(
    db: web::Data<R>,
    crypto: web::Data<Crypto>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, Error>
where
    R: AuthRepository + 'static,
{
    let (token, member) = account::login(db.get_ref(), &crypto, &req.email, &req.password).await?;
    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        user: UserInfo::from(&member),
    }))
}

pub async fn me<R>(auth: Auth<R>) -> HttpResponse
where
    R: AuthRepository + 'static,
{
    HttpResponse::Ok().json(MeResponse {
        user: UserInfo::from(auth.principal().member()),
    })
}
