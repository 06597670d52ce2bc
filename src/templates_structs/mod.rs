// Template context structures for Askama templates.

mod user;

pub use user::*;

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{get_username, take_flash};
use crate::config::AppConfig;

/// Common context shared by all pages.
/// Templates access these as `ctx.username`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub username: String,
    pub flash: Option<String>,
    pub app_name: String,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session, config: &AppConfig) -> Self {
        let username = get_username(session).unwrap_or_default();
        let flash = take_flash(session);
        let csrf_token = csrf::get_or_create_token(session);
        Self {
            username,
            flash,
            app_name: config.app_name.clone(),
            csrf_token,
        }
    }
}
