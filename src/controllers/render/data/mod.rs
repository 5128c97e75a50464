pub mod render_job;
pub mod render_request;
