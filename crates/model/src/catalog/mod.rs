pub mod tag;
pub mod track;
pub mod vocal;
