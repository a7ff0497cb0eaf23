//! Core library for a task timeline board: the task-file grammar (parser
//! and serializer), the date-string codec, date arithmetic, and the
//! load/save surface consumed by a UI layer.
//!
//! The UI layer is a separate concern. It hands this crate a file path and
//! gets back a structured collection of [`model::TaskGroup`]s, or hands it
//! a collection and gets the file rewritten. Non-fatal anomalies (nested
//! groups in the file, invalid due dates) are reported through an
//! injectable diagnostic callback rather than by failing the whole load.

pub mod io;
pub mod model;
pub mod ops;
pub mod parse;
pub mod util;
