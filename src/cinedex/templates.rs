//! # Page Templates
//!
//! Markup lives in stand-alone files next to this module, so it can be edited and diffed
//! without touching Rust code. They are included here as string constants.
//!
//! Templates are minijinja based. Names ending in `.html` get HTML auto-escaping, so every
//! value interpolated into a tile is escaped without the template asking for it.
//!
//! The page template itself is user supplied and is not parsed by minijinja; only its
//! `__TEMPLATE_MOVIE_GRID__` placeholder is replaced.

pub const TILE_NAME: &str = "tile.html";
pub const TILE_TEMPLATE: &str = include_str!("templates/tile.html");
