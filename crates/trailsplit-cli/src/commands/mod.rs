pub mod marker;
pub mod project;
pub mod segments;
pub mod settings;
pub mod track;
pub mod undo;
