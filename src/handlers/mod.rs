pub mod user_handlers;

use actix_web::web;

use crate::dialogs::{RoleDirectory, UserStore};

/// Register the user dialog routes against concrete collaborators.
///
/// Expects `web::Data<R>`, `web::Data<S>` and `web::Data<AppConfig>` to be
/// registered on the app.
pub fn configure<R, S>(cfg: &mut web::ServiceConfig)
where
    R: RoleDirectory + 'static,
    S: UserStore + 'static,
{
    // /users/new BEFORE /users/{id} to avoid routing conflict
    cfg.route("/users/new", web::get().to(user_handlers::new_form::<R>))
        .route("/users", web::post().to(user_handlers::create::<R, S>))
        .route("/users/{id}/edit", web::get().to(user_handlers::edit_form::<R, S>))
        .route("/users/{id}", web::post().to(user_handlers::update::<R, S>));
}
