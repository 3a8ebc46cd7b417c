//! Logging in, registering and logging out, plus the middleware that keeps
//! pages behind a log-in.

mod log_in;
mod log_out;
mod middleware;
mod redirect;
mod register;

pub use log_in::{get_log_in_page, post_log_in};
pub use log_out::get_log_out;
pub use middleware::{auth_guard, auth_guard_hx};
pub use register::{get_register_page, post_register};

use redirect::{RedirectQuery, build_log_in_redirect_url, parse_redirect_url};
