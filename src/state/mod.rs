//! Pure per-behavior state modules.
//!
//! DESIGN
//! ======
//! Each page behavior keeps its logic in a small DOM-free module here, with
//! components acting as thin adapters that apply the computed state to the
//! view. Every module has a sibling `*_test.rs` unit-test file.

pub mod contact;
pub mod nav;
pub mod projects;
pub mod scroll;
pub mod theme;
pub mod typed;
pub mod watch;
