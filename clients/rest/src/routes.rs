use actix_web::{delete, get, post, put, web, HttpResponse};
use actix_web_lab::respond::Html;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use store::{model::person::UpdatePersonData, store::person_store::PersonStore};

use crate::error::ApiError;

/// Body shape shared by create and update. Both fields are optional in the
/// wire format and validated as present and non-empty before the store is
/// involved.
#[derive(Deserialize)]
struct NewPerson {
    name: Option<String>,
    number: Option<String>,
}

impl NewPerson {
    fn into_fields(self) -> Result<(String, String), ApiError> {
        match (self.name, self.number) {
            (Some(name), Some(number)) if !name.is_empty() && !number.is_empty() => {
                Ok((name, number))
            }
            _ => Err(ApiError::MissingFields),
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(info)
        .service(list_persons)
        .service(get_person)
        .service(create_person)
        .service(update_person)
        .service(delete_person);
}

/// Entry count and current server time, rendered as a small HTML snippet
#[get("/info")]
async fn info(person_store: web::Data<PersonStore>) -> Result<Html, ApiError> {
    let count = person_store.count().await?;

    let current_time = Utc::now().format("%A, %B %-d, %Y at %-I:%M:%S %p %Z");

    Ok(Html(format!(
        "<p>Phonebook has {} entries.</p>\n<p>{}</p>",
        count, current_time
    )))
}

#[get("/api/persons")]
async fn list_persons(person_store: web::Data<PersonStore>) -> Result<HttpResponse, ApiError> {
    let persons = person_store.find_all().await?;

    Ok(HttpResponse::Ok().json(persons))
}

#[get("/api/persons/{id}")]
async fn get_person(
    id: web::Path<String>,
    person_store: web::Data<PersonStore>,
) -> Result<HttpResponse, ApiError> {
    match person_store.find_by_id(&id).await? {
        Some(person) => Ok(HttpResponse::Ok().json(person)),
        None => Err(ApiError::PersonNotFound),
    }
}

#[post("/api/persons")]
async fn create_person(
    body: web::Json<NewPerson>,
    person_store: web::Data<PersonStore>,
) -> Result<HttpResponse, ApiError> {
    let (name, number) = body.into_inner().into_fields()?;

    let person = person_store.insert(name, number).await?;

    log::info!("added {} number {} to phonebook", person.name, person.number);

    Ok(HttpResponse::Ok().json(person))
}

#[put("/api/persons/{id}")]
async fn update_person(
    id: web::Path<String>,
    body: web::Json<NewPerson>,
    person_store: web::Data<PersonStore>,
) -> Result<HttpResponse, ApiError> {
    let (name, number) = body.into_inner().into_fields()?;

    let update = UpdatePersonData { name, number };

    match person_store.update_by_id(&id, update).await? {
        Some(person) => Ok(HttpResponse::Ok().json(person)),
        None => Err(ApiError::PersonNotFound),
    }
}

#[delete("/api/persons/{id}")]
async fn delete_person(
    id: web::Path<String>,
    person_store: web::Data<PersonStore>,
) -> Result<HttpResponse, ApiError> {
    if person_store.delete_by_id(&id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ApiError::PersonNotFound)
    }
}

/// Terminal handler for requests no route or static asset matched
pub async fn unknown_endpoint() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "unknown endpoint" }))
}
