use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::csrf;
use crate::auth::session::require_admin;
use crate::config::AppConfig;
use crate::dialogs::{DialogError, RoleDirectory, SubmitOutcome, UserStore};
use crate::errors::{AppError, render};
use crate::models::user::UserForm;
use crate::templates_structs::PageContext;
use super::{helpers, read};

pub async fn update<R: RoleDirectory + 'static, S: UserStore + 'static>(
    directory: web::Data<R>,
    store: web::Data<S>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<UserForm>,
) -> Result<HttpResponse, AppError> {
    require_admin(&session)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let id = path.into_inner();
    let mut dialog = read::open_dialog(directory.get_ref(), store.get_ref(), &id).await?;
    if !helpers::apply_edit_form(&mut dialog, &form)? {
        let ctx = PageContext::build(&session, &config);
        return render(helpers::edit_template(ctx, &dialog));
    }

    match dialog.submit(store.get_ref()).await {
        Ok(SubmitOutcome::Saved) => {
            let _ = session.insert("flash", "User updated successfully");
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", config.users_page.as_str()))
                .finish())
        }
        Ok(_) | Err(DialogError::Invalid(_)) => {
            let ctx = PageContext::build(&session, &config);
            render(helpers::edit_template(ctx, &dialog))
        }
        Err(e) => Err(e.into()),
    }
}
