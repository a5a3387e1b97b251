mod auth_handler;

pub(crate) use auth_handler::AuthHandler;
