//! Twitter Card meta tag rendering.
//!
//! Cards are plain values; rendering validates them and returns an ordered
//! list of [`MetaTag`] pairs. [`html`] turns those pairs into escaped
//! `<meta>` elements for hosts that write HTML directly.

pub mod cards;
mod error;
pub mod html;
mod models;
mod services;

pub use error::{CardError, CardField, Result};
pub use models::{AppCard, CardDefaults, MetaTag};
pub use services::AppCardService;
