use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::csrf;
use crate::auth::session::require_admin;
use crate::config::AppConfig;
use crate::dialogs::{CreateDialog, DialogError, RoleDirectory, SubmitOutcome, UserStore};
use crate::errors::{AppError, render};
use crate::models::user::UserForm;
use crate::templates_structs::PageContext;
use super::helpers;

/// Open a create dialog and wait for its roles.
async fn open_dialog<R: RoleDirectory>(directory: &R) -> CreateDialog {
    let mut dialog = CreateDialog::new();
    if let Some(fetch) = dialog.open() {
        dialog.load_roles(fetch, directory).await;
    }
    dialog
}

pub async fn new_form<R: RoleDirectory + 'static>(
    directory: web::Data<R>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    require_admin(&session)?;

    let dialog = open_dialog(directory.get_ref()).await;
    let ctx = PageContext::build(&session, &config);
    render(helpers::create_template(ctx, &dialog))
}

pub async fn create<R: RoleDirectory + 'static, S: UserStore + 'static>(
    directory: web::Data<R>,
    store: web::Data<S>,
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<UserForm>,
) -> Result<HttpResponse, AppError> {
    require_admin(&session)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let mut dialog = open_dialog(directory.get_ref()).await;
    if !helpers::apply_create_form(&mut dialog, &form)? {
        let ctx = PageContext::build(&session, &config);
        return render(helpers::create_template(ctx, &dialog));
    }

    match dialog.submit(store.get_ref()).await {
        Ok(SubmitOutcome::Saved) => {
            let _ = session.insert("flash", "User created successfully");
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", config.users_page.as_str()))
                .finish())
        }
        Ok(_) | Err(DialogError::Invalid(_)) => {
            let ctx = PageContext::build(&session, &config);
            render(helpers::create_template(ctx, &dialog))
        }
        Err(e) => Err(e.into()),
    }
}
