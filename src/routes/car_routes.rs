use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};

use crate::controllers::CarController;
use crate::dto::{AddCarForm, EditCarForm, IdQuery};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::views;

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/add", get(add_form).post(add_submit))
        .route("/edit", get(edit_form).post(edit_submit))
        .route("/delete", get(delete_car).post(delete_car))
}

/// GET / - listado con el ranking recalculado en cada lectura
async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let cars = controller.list_ranked().await?;
    Ok(Html(views::index_page(&cars)))
}

async fn add_form() -> Html<String> {
    Html(views::add_page(&AddCarForm::default(), None))
}

async fn add_submit(
    State(state): State<AppState>,
    Form(form): Form<AddCarForm>,
) -> Result<Response, AppError> {
    let new_car = match form.to_new_car() {
        Ok(new_car) => new_car,
        Err(errors) => {
            // Re-renderizar el formulario con los errores campo a campo
            let page = views::add_page(&form, Some(&errors));
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
        }
    };

    let controller = CarController::new(state.pool.clone());
    controller.create(new_car).await?;

    Ok(Redirect::to("/").into_response())
}

async fn edit_form(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Html<String>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let car = controller.get_by_id(query.id).await?;
    Ok(Html(views::edit_page(&car, &EditCarForm::default(), None)))
}

async fn edit_submit(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    Form(form): Form<EditCarForm>,
) -> Result<Response, AppError> {
    let controller = CarController::new(state.pool.clone());

    let changes = match form.to_changes() {
        Ok(changes) => changes,
        Err(errors) => {
            let car = controller.get_by_id(query.id).await?;
            let page = views::edit_page(&car, &form, Some(&errors));
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
        }
    };

    controller.update(query.id, changes).await?;

    Ok(Redirect::to("/").into_response())
}

async fn delete_car(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Redirect, AppError> {
    let controller = CarController::new(state.pool.clone());
    controller.delete(query.id).await?;
    Ok(Redirect::to("/"))
}
