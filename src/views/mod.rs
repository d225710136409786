//! Vistas HTML renderizadas en el servidor

pub mod pages;

pub use pages::{add_page, edit_page, index_page};
