use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::session::require_admin;
use crate::config::AppConfig;
use crate::dialogs::{EditDialog, RoleDirectory, UserStore};
use crate::errors::{AppError, render};
use crate::templates_structs::PageContext;
use super::helpers;

/// Load the target user and open an edit dialog for it with roles loaded.
pub(super) async fn open_dialog<R: RoleDirectory, S: UserStore>(
    directory: &R,
    store: &S,
    id: &str,
) -> Result<EditDialog, AppError> {
    let user = store.find_by_id(id).await?.ok_or(AppError::NotFound)?;
    let mut dialog = EditDialog::new(user);
    if let Some(fetch) = dialog.open() {
        dialog.load_roles(fetch, directory).await;
    }
    Ok(dialog)
}

pub async fn edit_form<R: RoleDirectory + 'static, S: UserStore + 'static>(
    directory: web::Data<R>,
    store: web::Data<S>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    require_admin(&session)?;

    let id = path.into_inner();
    let dialog = open_dialog(directory.get_ref(), store.get_ref(), &id).await?;
    let ctx = PageContext::build(&session, &config);
    render(helpers::edit_template(ctx, &dialog))
}
