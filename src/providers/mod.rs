pub mod image_search;
pub mod openai;
pub mod traits;
pub mod translate;
