pub mod helpers;
pub mod create;
pub mod read;
pub mod update;

pub use self::create::{new_form, create};
pub use self::read::edit_form;
pub use self::update::update;
