// Server-rendered front-end: the submission form and the read-only result views.

pub mod components;
pub mod handlers;
pub mod html;
pub mod page;
