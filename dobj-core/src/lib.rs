//! Double-dispatch visitors over a closed family of typed data objects.
//!
//! A [`data::DataObject`] knows only its own concrete type and hands itself
//! to the matching [`visitor::DataObjectVisitor`] method. New strategies are
//! added by implementing the visitor trait; the data types never change.
//!
//! ```
//! use dobj_core::container::sample_objects;
//! use dobj_core::render::Renderer;
//!
//! let mut renderer = Renderer::new(Vec::new());
//! sample_objects().accept_all(&mut renderer);
//! let out = String::from_utf8(renderer.finish().unwrap()).unwrap();
//! assert_eq!(out.lines().count(), 3);
//! ```

pub mod config;
pub mod container;
pub mod count;
pub mod data;
pub mod error;
pub mod record;
pub mod render;
pub mod visitor;
